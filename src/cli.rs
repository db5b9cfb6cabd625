use clap::{Parser, Subcommand};

/// CornDogKitchen — the rules engine of a corn dog cooking game.
#[derive(Parser, Debug)]
#[command(name = "corndog_kitchen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the kitchen configuration JSON asset.
    #[arg(short, long, default_value = "kitchen_config.json")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Cook one corn dog interactively and have it judged.
    Cook {
        /// Seed for the customer order; random when omitted.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Judge an item and an order read from JSON files.
    Validate {
        /// Path to the item record JSON.
        #[arg(long)]
        item: String,

        /// Path to the order JSON.
        #[arg(long)]
        order: String,
    },

    /// Write the default configuration asset.
    InitConfig {
        /// Overwrite an existing asset.
        #[arg(long)]
        force: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Cook { seed: None }
    }
}
