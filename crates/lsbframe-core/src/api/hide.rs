use std::path::{Path, PathBuf};

use crate::{frame, FrameOptions, LsbFrameError};

use super::{read_carrier, write_target};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    file: Option<PathBuf>,
    carrier: Option<PathBuf>,
    output: Option<PathBuf>,
    options: FrameOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: FrameOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    /// Hide the content of this file instead of a text message
    pub fn with_file<A: AsRef<Path>>(mut self, data_file: A) -> Self {
        self.file = Some(data_file.as_ref().to_path_buf());
        self
    }

    pub fn use_file(mut self, data_file: Option<PathBuf>) -> Self {
        self.file = data_file;
        self
    }

    /// The carrier file is only read, the result goes to [`HideApi::with_output`]
    pub fn with_carrier<A: AsRef<Path>>(mut self, carrier: A) -> Self {
        self.carrier = Some(carrier.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<(), LsbFrameError> {
        let payload = match (self.message, self.file) {
            (Some(message), None) => message.into_bytes(),
            (None, Some(file)) => {
                std::fs::read(&file).map_err(|source| LsbFrameError::ReadError { source })?
            }
            (Some(_), Some(_)) => return Err(LsbFrameError::AmbiguousPayload),
            (None, None) => return Err(LsbFrameError::MissingPayload),
        };
        let Some(carrier_file) = self.carrier else {
            return Err(LsbFrameError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(LsbFrameError::TargetNotSet);
        };

        let mut carrier = read_carrier(&carrier_file)?;
        log::info!(
            "hiding {} bytes at offset {} of {}",
            payload.len(),
            self.options.start_offset(carrier.len()),
            carrier_file.display()
        );
        frame::encode(&mut carrier, &payload, &self.options)?;

        write_target(&output, &carrier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = temp_dir.path().join("carrier.png");
        let output = temp_dir.path().join("carrier-with-secret.png");
        std::fs::write(&carrier, vec![0xaa; 1000]).unwrap();

        crate::api::hide::prepare()
            .with_message("Hello, World!")
            .with_carrier(&carrier)
            .with_output(&output)
            .execute()
            .expect("Failed to hide message in carrier");

        let hidden = std::fs::read(&output).unwrap();
        assert_eq!(hidden.len(), 1000);
        assert_eq!(crate::decode(&hidden).unwrap(), b"Hello, World!");
        assert_eq!(
            std::fs::read(&carrier).unwrap(),
            vec![0xaa; 1000],
            "carrier file must stay untouched"
        );
    }

    #[test]
    fn should_hide_a_data_file() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = temp_dir.path().join("carrier.bin");
        let data = temp_dir.path().join("data.bin");
        let output = temp_dir.path().join("out.bin");
        std::fs::write(&carrier, vec![0x13; 2000]).unwrap();
        std::fs::write(&data, [0_u8, 1, 2, 254, 255]).unwrap();

        prepare()
            .with_file(&data)
            .with_carrier(&carrier)
            .with_output(&output)
            .execute()
            .expect("Failed to hide file in carrier");

        assert_eq!(
            crate::decode(&std::fs::read(&output).unwrap()).unwrap(),
            [0_u8, 1, 2, 254, 255]
        );
    }

    #[test]
    fn should_require_exactly_one_payload() {
        assert!(matches!(
            prepare().with_carrier("a").with_output("b").execute(),
            Err(LsbFrameError::MissingPayload)
        ));
        assert!(matches!(
            prepare()
                .with_message("m")
                .with_file("f")
                .with_carrier("a")
                .with_output("b")
                .execute(),
            Err(LsbFrameError::AmbiguousPayload)
        ));
    }

    #[test]
    fn should_check_the_payload_before_carrier_and_output() {
        assert!(matches!(
            prepare().execute(),
            Err(LsbFrameError::MissingPayload)
        ));
        assert!(matches!(
            prepare().with_message("m").with_file("f").execute(),
            Err(LsbFrameError::AmbiguousPayload)
        ));
    }

    #[test]
    fn should_require_carrier_and_output() {
        assert!(matches!(
            prepare().with_message("m").with_output("b").execute(),
            Err(LsbFrameError::CarrierNotSet)
        ));
        assert!(matches!(
            prepare().with_message("m").with_carrier("a").execute(),
            Err(LsbFrameError::TargetNotSet)
        ));
    }

    #[test]
    fn should_not_write_output_when_the_carrier_is_too_small() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = temp_dir.path().join("tiny.bin");
        let output = temp_dir.path().join("out.bin");
        std::fs::write(&carrier, vec![0; 120]).unwrap();

        assert!(matches!(
            prepare()
                .with_message("too long for this carrier")
                .with_carrier(&carrier)
                .with_output(&output)
                .execute(),
            Err(LsbFrameError::Capacity { .. })
        ));
        assert!(!output.exists());
    }
}
