use std::path::PathBuf;

use clap::Args;
use lsbframe_core::FrameOptions;

use crate::CliResult;

/// Prints how many bytes a carrier file can hide
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Carrier file to measure
    #[arg(short = 'i', long = "in", value_name = "carrier file", required = true)]
    pub carrier: PathBuf,
}

impl CapacityArgs {
    pub fn run(self, options: FrameOptions) -> CliResult<()> {
        let capacity = lsbframe_core::api::capacity_of(&self.carrier, &options)?;
        println!("{capacity}");

        Ok(())
    }
}
