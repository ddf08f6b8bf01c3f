use clap::{Parser, Subcommand};
use lsbframe_core::frame_options::DEFAULT_HEADER_MARGIN_BYTES;
use lsbframe_core::FrameOptions;

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Experimental: carrier bytes kept free behind the frame
    #[arg(long = "x-header-margin", default_value_t = DEFAULT_HEADER_MARGIN_BYTES)]
    pub header_margin: usize,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn frame_options(&self) -> FrameOptions {
        FrameOptions::default().with_header_margin_bytes(self.header_margin)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    UnveilRaw(unveil_raw::UnveilRawArgs),
    Capacity(capacity::CapacityArgs),
}
