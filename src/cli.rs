use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "session-analyzer")]
#[command(about = "Submit a therapy-session transcript to the analysis service")]
pub struct Cli {
    /// Transcript file (.txt or .json). Prints usage when omitted.
    #[arg(value_name = "TRANSCRIPT")]
    pub transcript: Option<PathBuf>,
}
