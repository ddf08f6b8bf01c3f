use std::path::PathBuf;

use clap::Args;
use lsbframe_core::FrameOptions;

/// Unveils the raw bytes behind the start offset, without reading the frame
#[derive(Args, Debug)]
pub struct UnveilRawArgs {
    /// Source carrier that contains secret data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "carrier source file",
        required = true
    )]
    pub carrier: PathBuf,

    /// Raw data will be stored as binary file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output_file: PathBuf,
}

impl UnveilRawArgs {
    pub fn run(self, options: FrameOptions) -> crate::CliResult<()> {
        lsbframe_core::api::unveil_raw::prepare()
            .with_options(options)
            .from_secret_file(self.carrier)
            .into_raw_file(self.output_file)
            .execute()
    }
}
