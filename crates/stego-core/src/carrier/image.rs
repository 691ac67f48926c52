use std::fs::File;
use std::io::{BufRead, Cursor, Seek, Write};
use std::path::Path;

use image::io::Reader as ImageReader;
use image::{DynamicImage, ImageBuffer, ImageFormat};
use log::{debug, error};

use super::{CarrierSequence, CarrierUnit};
use crate::error::StegoError;
use crate::media::Persist;
use crate::result::Result;

/// Source formats that keep every pixel bit intact.
const LOSSLESS_FORMATS: [ImageFormat; 2] = [ImageFormat::Png, ImageFormat::Bmp];

/// Pixel layouts that can carry data, all with 8 bits per channel.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ColorMode {
    Luma,
    LumaAlpha,
    Rgb,
    Rgba,
}

impl ColorMode {
    /// Channels per pixel that carry data, alpha never does.
    pub fn data_channels(self) -> usize {
        match self {
            ColorMode::Luma | ColorMode::LumaAlpha => 1,
            ColorMode::Rgb | ColorMode::Rgba => 3,
        }
    }

    /// Bytes per pixel in the raw buffer.
    pub fn stride(self) -> usize {
        match self {
            ColorMode::Luma => 1,
            ColorMode::LumaAlpha => 2,
            ColorMode::Rgb => 3,
            ColorMode::Rgba => 4,
        }
    }

    pub fn has_alpha(self) -> bool {
        matches!(self, ColorMode::LumaAlpha | ColorMode::Rgba)
    }
}

/// Image carrier, one unit per color channel sample.
///
/// Units are ordered by `x`, then `y`, then channel, so the image is walked
/// column by column from the top left corner.
#[derive(Debug, Clone)]
pub struct ImageCarrier {
    width: u32,
    height: u32,
    mode: ColorMode,
    format: ImageFormat,
    pixels: Vec<u8>,
}

/// BMP stores gray images as palettes that decode back as RGB, which would
/// change the unit layout between hiding and unveiling.
fn check_mode(mode: ColorMode, format: ImageFormat) -> Result<()> {
    match (format, mode) {
        (ImageFormat::Bmp, ColorMode::Luma | ColorMode::LumaAlpha) => Err(
            StegoError::UnsupportedCarrierMode(format!("{mode:?} in {format:?}")),
        ),
        _ => Ok(()),
    }
}

fn check_format(format: ImageFormat) -> Result<()> {
    if LOSSLESS_FORMATS.contains(&format) {
        Ok(())
    } else {
        Err(StegoError::UnsupportedCarrierFormat(format!("{format:?}")))
    }
}

impl ImageCarrier {
    /// Wraps a decoded image, `format` is the format it was decoded from
    /// and the one it will be written back in.
    pub fn new(image: DynamicImage, format: ImageFormat) -> Result<Self> {
        check_format(format)?;
        let (width, height) = (image.width(), image.height());
        let (mode, pixels) = match image {
            DynamicImage::ImageLuma8(buffer) => (ColorMode::Luma, buffer.into_raw()),
            DynamicImage::ImageLumaA8(buffer) => (ColorMode::LumaAlpha, buffer.into_raw()),
            DynamicImage::ImageRgb8(buffer) => (ColorMode::Rgb, buffer.into_raw()),
            DynamicImage::ImageRgba8(buffer) => (ColorMode::Rgba, buffer.into_raw()),
            other => {
                return Err(StegoError::UnsupportedCarrierMode(format!(
                    "{:?}",
                    other.color()
                )))
            }
        };
        check_mode(mode, format)?;
        debug!("image carrier {width}x{height} in {mode:?} from {format:?}");

        Ok(Self {
            width,
            height,
            mode,
            format,
            pixels,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let reader = ImageReader::open(path)
            .and_then(|r| r.with_guessed_format())
            .map_err(|source| StegoError::ReadError { source })?;

        Self::from_reader(reader)
    }

    /// Decodes an encoded image, the format is guessed from the content.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;

        Self::from_reader(reader)
    }

    fn from_reader<R: BufRead + Seek>(reader: ImageReader<R>) -> Result<Self> {
        let format = reader.format().ok_or(StegoError::InvalidImageMedia)?;
        // reject lossy formats before spending time on decoding
        check_format(format)?;
        let image = reader.decode().map_err(|e| {
            error!("Error decoding image: {e}");
            StegoError::InvalidImageMedia
        })?;

        Self::new(image, format)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn color_mode(&self) -> ColorMode {
        self.mode
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn into_dynamic(self) -> Result<DynamicImage> {
        let (w, h, pixels) = (self.width, self.height, self.pixels);
        let image = match self.mode {
            ColorMode::Luma => ImageBuffer::from_raw(w, h, pixels).map(DynamicImage::ImageLuma8),
            ColorMode::LumaAlpha => {
                ImageBuffer::from_raw(w, h, pixels).map(DynamicImage::ImageLumaA8)
            }
            ColorMode::Rgb => ImageBuffer::from_raw(w, h, pixels).map(DynamicImage::ImageRgb8),
            ColorMode::Rgba => ImageBuffer::from_raw(w, h, pixels).map(DynamicImage::ImageRgba8),
        };

        image.ok_or(StegoError::ImageEncodingError)
    }

    /// Encodes the image in its source format
    pub fn write_to<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        let format = self.format;
        self.clone()
            .into_dynamic()?
            .write_to(&mut writer, format)
            .map_err(|e| {
                error!("Error saving image: {e}");
                StegoError::ImageEncodingError
            })
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Cursor::new(Vec::new());
        self.write_to(&mut buf)?;

        Ok(buf.into_inner())
    }

    fn offset(&self, index: usize) -> Option<usize> {
        if index >= self.unit_count() {
            return None;
        }
        let channels = self.mode.data_channels();
        let (pixel, channel) = (index / channels, index % channels);
        let height = self.height as usize;
        let (x, y) = (pixel / height, pixel % height);

        Some((y * self.width as usize + x) * self.mode.stride() + channel)
    }
}

impl CarrierSequence for ImageCarrier {
    fn unit_count(&self) -> usize {
        self.width as usize * self.height as usize * self.mode.data_channels()
    }

    fn unit_width(&self) -> u32 {
        u8::BITS
    }

    fn get(&self, index: usize) -> Option<CarrierUnit> {
        let offset = self.offset(index)?;
        self.pixels.get(offset).map(|c| CarrierUnit {
            value: u64::from(*c),
            width: u8::BITS,
        })
    }

    fn set(&mut self, index: usize, value: u64) -> Result<()> {
        let count = self.unit_count();
        let channel = self
            .offset(index)
            .and_then(|offset| self.pixels.get_mut(offset))
            .ok_or(StegoError::UnitIndexOutOfRange { index, count })?;
        *channel = u8::try_from(value).map_err(|_| StegoError::ValueOutOfRange {
            value,
            width: u8::BITS,
        })?;

        Ok(())
    }
}

impl Persist for ImageCarrier {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            StegoError::WriteError { source: e }
        })?;
        self.write_to(f)
    }
}
