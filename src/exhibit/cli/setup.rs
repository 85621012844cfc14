use clap::{Parser, Subcommand};
use exhibit::model::Source;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "exhibit", version)]
#[command(about = "Browse museum collections and curate your own exhibition", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding the exhibition and config (overrides $EXHIBIT_HOME)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse a museum gallery page
    #[command(alias = "b")]
    Browse {
        /// Museum to browse (met, cleveland)
        source: Source,

        /// Page to load (defaults to the last viewed page)
        #[arg(short, long)]
        page: Option<u32>,

        /// Search the museum collection
        #[arg(short, long)]
        search: Option<String>,

        /// Narrow the loaded page by title or artist
        #[arg(short, long)]
        filter: Option<String>,

        /// Include artworks without a preview image
        #[arg(long)]
        all_images: bool,
    },

    /// Show one artwork
    #[command(alias = "s")]
    Show {
        /// Museum the artwork belongs to
        source: Source,
        id: u64,
    },

    /// Add an artwork to your exhibition
    #[command(alias = "a")]
    Add {
        /// Museum the artwork belongs to
        source: Source,
        id: u64,
    },

    /// Remove an artwork from your exhibition
    #[command(alias = "rm")]
    Remove {
        id: u64,

        /// Only remove the artwork from this museum
        #[arg(long)]
        source: Option<Source>,
    },

    /// List your exhibition
    #[command(alias = "ls")]
    Exhibition {
        /// Print the exhibition as JSON
        #[arg(long)]
        json: bool,
    },

    /// A few random artworks from each museum
    Highlights {
        /// Artworks per museum
        #[arg(short = 'n', long, default_value_t = 3)]
        count: usize,
    },

    /// Remove every artwork from your exhibition
    Clear,

    /// Get or set configuration
    Config {
        /// Config key
        key: Option<String>,
        /// Value to set
        value: Option<String>,
    },
}
