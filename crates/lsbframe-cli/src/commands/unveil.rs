use std::path::PathBuf;

use clap::Args;
use lsbframe_core::FrameOptions;

use crate::CliResult;

/// Unveils a hidden message, printed as text unless an output file is given
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source carrier that contains secret data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "carrier source file",
        required = true
    )]
    pub carrier: PathBuf,

    /// Unveiled data will be stored in that file
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,
}

impl UnveilArgs {
    pub fn run(self, options: FrameOptions) -> CliResult<()> {
        let api = lsbframe_core::api::unveil::prepare()
            .with_options(options)
            .from_secret_file(&self.carrier);

        match self.output_file {
            Some(output_file) => api.into_file(output_file).execute().map(|_| ()),
            None => {
                println!("{}", api.execute_to_text()?);
                Ok(())
            }
        }
    }
}
