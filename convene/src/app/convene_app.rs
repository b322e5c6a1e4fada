use super::ConveneOperation;
use clap::Parser;

/// chooses a shared meeting location that keeps flight emissions low and
/// travel burden fair across attendee groups
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct ConveneApp {
    #[command(subcommand)]
    pub op: ConveneOperation,
}
