use std::path::PathBuf;

use clap::Args;
use lsbframe_core::FrameOptions;

use crate::CliResult;

/// Hides a message or a file in the second half of a carrier file
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Carrier file such as a PNG image, used readonly.
    #[arg(short = 'i', long = "in", value_name = "carrier file", required = true)]
    pub carrier: PathBuf,

    /// Final carrier will be stored as file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output carrier file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// File to hide in the carrier
    #[arg(
        short = 'd',
        long = "data",
        value_name = "data file",
        required_unless_present = "message",
        conflicts_with = "message"
    )]
    pub data_file: Option<PathBuf>,

    /// A text message that will be hidden
    #[arg(
        short,
        long,
        value_name = "text message",
        required_unless_present = "data_file"
    )]
    pub message: Option<String>,
}

impl HideArgs {
    pub fn run(self, options: FrameOptions) -> CliResult<()> {
        lsbframe_core::api::hide::prepare()
            .with_options(options)
            .with_carrier(&self.carrier)
            .with_output(&self.write_to_file)
            .use_message(self.message)
            .use_file(self.data_file)
            .execute()
    }
}
