use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "catbox-uploader")]
#[command(author, version, about = "Telegram bot that uploads photos and videos to catbox.moe", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the bot and the health endpoint (default)
    Run,

    /// Upload a single local file to catbox.moe and print the link
    Upload {
        /// Path to the file to upload
        path: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
