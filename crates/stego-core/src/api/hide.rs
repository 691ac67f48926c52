use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::{embed, CodecOptions, Marker, Media, Persist, StegoError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Debug)]
enum Payload {
    Message(String),
    File(PathBuf),
}

/// Hides one message or the content of one file in a carrier file.
///
/// The modified carrier is written to the output in the format of the
/// carrier, regardless of the output file extension.
#[derive(Default, Debug)]
pub struct HideApi {
    payload: Option<Payload>,
    media: Option<PathBuf>,
    output: Option<PathBuf>,
    marker: Option<Vec<u8>>,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// Hide a text message, replaces any file set before
    pub fn with_message(mut self, message: &str) -> Self {
        self.payload = Some(Payload::Message(message.to_string()));
        self
    }

    pub fn use_message<S: AsRef<str>>(self, message: Option<S>) -> Self {
        match message {
            Some(message) => self.with_message(message.as_ref()),
            None => self,
        }
    }

    /// Hide the content of a file, replaces any message set before
    pub fn with_file<A: AsRef<Path>>(mut self, data_file: A) -> Self {
        self.payload = Some(Payload::File(data_file.as_ref().to_path_buf()));
        self
    }

    pub fn use_file(self, data_file: Option<PathBuf>) -> Self {
        match data_file {
            Some(data_file) => self.with_file(data_file),
            None => self,
        }
    }

    pub fn with_media<A: AsRef<Path>>(mut self, media: A) -> Self {
        self.media = Some(media.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Set the end-of-data marker, the unveiling side needs the very same
    pub fn with_marker<M: AsRef<[u8]>>(mut self, marker: M) -> Self {
        self.marker = Some(marker.as_ref().to_vec());
        self
    }

    pub fn execute(self) -> Result<(), StegoError> {
        let Some(payload) = self.payload else {
            return Err(StegoError::MissingPayload);
        };
        let Some(marker) = self.marker else {
            return Err(StegoError::MissingMarker);
        };
        let Some(media) = self.media else {
            return Err(StegoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(StegoError::TargetNotSet);
        };
        let marker = Marker::new(marker)?;

        let data = match payload {
            Payload::Message(message) => message.into_bytes(),
            Payload::File(file) => {
                fs::read(file).map_err(|source| StegoError::ReadError { source })?
            }
        };

        let mut carrier = Media::from_file(&media)?;
        let units = embed(&mut carrier, &data, &marker, self.options.group_width)?;
        carrier.save_as(&output)?;
        info!(
            "hid {} bytes in {units} units of {media:?}, written to {output:?}",
            data.len()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn should_insist_on_a_payload_and_a_marker() {
        assert!(matches!(
            prepare().with_marker("x").execute(),
            Err(StegoError::MissingPayload)
        ));
        assert!(matches!(
            prepare().with_message("hi").execute(),
            Err(StegoError::MissingMarker)
        ));
        assert!(matches!(
            prepare().with_message("hi").with_marker("x").execute(),
            Err(StegoError::CarrierNotSet)
        ));
        assert!(matches!(
            prepare()
                .with_message("hi")
                .with_marker("x")
                .with_media("carrier.png")
                .execute(),
            Err(StegoError::TargetNotSet)
        ));
    }

    #[test]
    fn should_reject_an_empty_marker() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");

        let result = prepare()
            .with_message("hi")
            .with_marker("")
            .with_media("carrier.png")
            .with_output(temp_dir.path().join("out.png"))
            .execute();

        assert!(matches!(result, Err(StegoError::EmptyMarker)));
    }

    #[test]
    fn should_fail_for_a_missing_data_file() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");

        let result = prepare()
            .with_file("foofile")
            .with_marker("x")
            .with_media("carrier.png")
            .with_output(temp_dir.path().join("out.png"))
            .execute();

        assert!(matches!(result, Err(StegoError::ReadError { .. })));
    }
}
