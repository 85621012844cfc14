//! # CLI Behavior
//!
//! One client of the exhibit library. Running `exhibit` with no subcommand
//! lists the exhibition, the view a returning visitor wants first.
//!
//! - `browse <museum>` resumes the last viewed page unless `--page` is given
//! - `show`/`add` take the museum and the museum's own artwork id
//! - `remove <id>` drops the id from both museums unless `--source` narrows it
//! - `exhibition --json` prints the stored exhibition for scripting
//!
//! Ctrl-C cancels the running command; late gateway responses are discarded.
//!
//! ## Module Structure
//!
//! - `commands`: context wiring and per-command handlers
//! - `render`: terminal output
//! - `setup`: argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
