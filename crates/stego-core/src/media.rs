use std::path::Path;

use enum_dispatch::enum_dispatch;

use crate::carrier::{AudioCarrier, CarrierSequence, CarrierUnit, ImageCarrier};
use crate::codec_options::GroupWidth;
use crate::error::StegoError;
use crate::result::Result;

pub trait Persist {
    fn save_as(&mut self, _: &Path) -> Result<()>;
}

/// a media container for steganography
#[enum_dispatch(CarrierSequence)]
#[derive(Debug, Clone)]
pub enum Media {
    Image(ImageCarrier),
    Audio(AudioCarrier),
}

impl Media {
    /// Opens a carrier file, the kind of media is decided by the file extension.
    pub fn from_file(f: &Path) -> Result<Self> {
        let ext = f
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .ok_or(StegoError::UnsupportedMedia)?;

        match ext.as_str() {
            // lossy formats are listed so they fail with a precise error
            "png" | "bmp" | "jpg" | "jpeg" | "webp" | "gif" => {
                Ok(Self::Image(ImageCarrier::from_file(f)?))
            }
            "wav" => Ok(Self::Audio(AudioCarrier::from_file(f)?)),
            _ => Err(StegoError::UnsupportedMedia),
        }
    }
}

impl Persist for Media {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        match self {
            Media::Image(image) => image.save_as(file),
            Media::Audio(audio) => audio.save_as(file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{gray_carrier, pcm16_carrier};

    #[test]
    fn should_reject_unknown_extensions() {
        assert!(matches!(
            Media::from_file(Path::new("Cargo.toml")),
            Err(StegoError::UnsupportedMedia)
        ));
        assert!(matches!(
            Media::from_file(Path::new("no-extension")),
            Err(StegoError::UnsupportedMedia)
        ));
    }

    #[test]
    fn should_fail_for_missing_image_files() {
        assert!(matches!(
            Media::from_file(Path::new("some_random_file.png")),
            Err(StegoError::ReadError { .. })
        ));
        assert!(matches!(
            Media::from_file(Path::new("some_random_file.wav")),
            Err(StegoError::InvalidAudioMedia)
        ));
    }

    #[test]
    fn should_dispatch_to_the_wrapped_carrier() {
        let image: Media = gray_carrier(3, 2, 7).into();
        let audio: Media = pcm16_carrier(&[1, 2, 3, 4]).into();

        assert_eq!(image.unit_count(), 6);
        assert_eq!(image.unit_width(), 8);
        assert_eq!(audio.unit_count(), 4);
        assert_eq!(audio.unit_width(), 16);
        assert_eq!(audio.capacity(GroupWidth::new(2).unwrap()), 8);
        assert_eq!(
            image.get(5),
            Some(CarrierUnit { value: 7, width: 8 })
        );
    }
}
