//! The `exhibit` binary. All CLI concerns live in `cli/`; this file only
//! starts the runtime and maps errors to the exit status.

mod cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
