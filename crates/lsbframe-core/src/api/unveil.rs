use std::path::{Path, PathBuf};

use crate::{frame, FrameOptions, LsbFrameError};

use super::{read_carrier, write_target};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    destination_file: Option<PathBuf>,
    options: FrameOptions,
}

impl UnveilApi {
    /// Use the given frame options, they must match the ones used for hiding
    pub fn with_options(mut self, options: FrameOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the carrier that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_media: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_media.as_ref().to_path_buf());
        self
    }

    /// Also save the unveiled payload to this file
    pub fn into_file(mut self, destination_file: impl AsRef<Path>) -> Self {
        self.destination_file = Some(destination_file.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process and returns the payload
    pub fn execute(self) -> Result<Vec<u8>, LsbFrameError> {
        let Some(secret_media) = self.secret_media else {
            return Err(LsbFrameError::CarrierNotSet);
        };

        let carrier = read_carrier(&secret_media)?;
        let payload = frame::decode(&carrier, &self.options)?;
        log::info!(
            "unveiled {} bytes from {}",
            payload.len(),
            secret_media.display()
        );

        if let Some(destination_file) = self.destination_file {
            write_target(&destination_file, &payload)?;
        }

        Ok(payload)
    }

    /// Like [`UnveilApi::execute`] but the payload must be UTF-8 text
    pub fn execute_to_text(self) -> Result<String, LsbFrameError> {
        let payload = self.execute()?;

        Ok(String::from_utf8(payload)?)
    }
}
