use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::{extract, CodecOptions, Marker, Media, StegoError};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

/// Unveils the bytes hidden in front of an end-of-data marker.
#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    output: Option<PathBuf>,
    marker: Option<Vec<u8>>,
    options: CodecOptions,
}

impl UnveilApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn from_secret_file<A: AsRef<Path>>(mut self, secret_media: A) -> Self {
        self.secret_media = Some(secret_media.as_ref().to_path_buf());
        self
    }

    /// The unveiled bytes are written to this file as they are
    pub fn into_file<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn with_marker<M: AsRef<[u8]>>(mut self, marker: M) -> Self {
        self.marker = Some(marker.as_ref().to_vec());
        self
    }

    /// Unveils and returns the hidden bytes, no output file is needed
    pub fn unveil(&self) -> Result<Vec<u8>, StegoError> {
        let Some(marker) = self.marker.as_ref() else {
            return Err(StegoError::MissingMarker);
        };
        let Some(secret_media) = self.secret_media.as_ref() else {
            return Err(StegoError::CarrierNotSet);
        };
        let marker = Marker::new(marker.as_slice())?;

        let carrier = Media::from_file(secret_media)?;
        extract(&carrier, &marker, self.options.group_width)
    }

    pub fn execute(self) -> Result<(), StegoError> {
        let Some(output) = self.output.as_ref() else {
            return Err(StegoError::TargetNotSet);
        };
        let data = self.unveil()?;
        fs::write(output, &data).map_err(|source| StegoError::WriteError { source })?;
        info!("unveiled {} bytes into {output:?}", data.len());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_insist_on_marker_media_and_output() {
        assert!(matches!(
            prepare().from_secret_file("secret.png").unveil(),
            Err(StegoError::MissingMarker)
        ));
        assert!(matches!(
            prepare().with_marker("x").unveil(),
            Err(StegoError::CarrierNotSet)
        ));
        assert!(matches!(
            prepare()
                .with_marker("x")
                .from_secret_file("secret.png")
                .execute(),
            Err(StegoError::TargetNotSet)
        ));
    }

    #[test]
    fn should_reject_unsupported_media() {
        assert!(matches!(
            prepare()
                .with_marker("x")
                .from_secret_file("Cargo.toml")
                .unveil(),
            Err(StegoError::UnsupportedMedia)
        ));
    }
}
