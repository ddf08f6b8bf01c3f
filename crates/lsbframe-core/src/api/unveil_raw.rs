use std::io::Read;
use std::path::{Path, PathBuf};

use crate::bit_plane::BitPlaneReader;
use crate::{FrameOptions, LsbFrameError};

use super::{read_carrier, write_target};

pub fn prepare() -> UnveilRawApi {
    UnveilRawApi::default()
}

/// Dumps every byte embedded from the start offset to the end of the carrier.
///
/// Nothing gets interpreted, the length header ends up in the dump as well.
#[derive(Default, Debug)]
pub struct UnveilRawApi {
    secret_media: Option<PathBuf>,
    destination_file: Option<PathBuf>,
    options: FrameOptions,
}

impl UnveilRawApi {
    /// Use the given frame options
    pub fn with_options(mut self, options: FrameOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the carrier that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_media: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_media.as_ref().to_path_buf());
        self
    }

    /// This is the raw file where all data will be saved to
    pub fn into_raw_file(mut self, destination_file: impl AsRef<Path>) -> Self {
        self.destination_file = Some(destination_file.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process and blocks until it is finished
    pub fn execute(self) -> Result<(), LsbFrameError> {
        let Some(secret_media) = self.secret_media else {
            return Err(LsbFrameError::CarrierNotSet);
        };
        let Some(destination_file) = self.destination_file else {
            return Err(LsbFrameError::TargetNotSet);
        };
        self.options.validate()?;

        let carrier = read_carrier(&secret_media)?;
        let mut raw = Vec::new();
        BitPlaneReader::new(&carrier, self.options.start_offset(carrier.len()))
            .read_to_end(&mut raw)
            .map_err(|source| LsbFrameError::ReadError { source })?;

        write_target(&destination_file, &raw)
    }
}
