use std::fs::File;
use std::io::{Cursor, Read, Seek, Write};
use std::path::Path;

pub use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use log::{debug, error};

use super::{CarrierSequence, CarrierUnit};
use crate::error::StegoError;
use crate::media::Persist;
use crate::result::Result;

/// PCM audio carrier, based on `WavReader` and `WavWriter` by `hound` crate.
///
/// Samples are kept as the raw little-endian bytes of the WAV data chunk
/// (8-bit samples unsigned, as stored). Every sample span is one unit and its
/// value is the span read front to back, so low bits of a unit live in the
/// last byte of the span.
#[derive(Debug, Clone)]
pub struct AudioCarrier {
    spec: WavSpec,
    sample_width: usize,
    frames: Vec<u8>,
}

/// bytes per sample, if the spec describes integer PCM in whole bytes
fn sample_width(spec: &WavSpec) -> Result<usize> {
    if spec.sample_format != SampleFormat::Int {
        return Err(StegoError::UnsupportedCarrierMode(
            "floating point samples are not PCM".to_string(),
        ));
    }
    match spec.bits_per_sample {
        8 | 16 | 24 | 32 => Ok(spec.bits_per_sample as usize / 8),
        bits => Err(StegoError::UnsupportedCarrierMode(format!(
            "{bits} bits per sample"
        ))),
    }
}

fn push_raw_sample(frames: &mut Vec<u8>, sample: i32, width: usize) {
    if width == 1 {
        frames.push((sample as u8) ^ 0x80);
    } else {
        frames.extend_from_slice(&sample.to_le_bytes()[..width]);
    }
}

fn sample_from_raw(span: &[u8]) -> i32 {
    if let [byte] = span {
        return i32::from((*byte ^ 0x80) as i8);
    }
    let sign = if span.last().map_or(false, |b| b & 0x80 != 0) {
        0xFF
    } else {
        0
    };
    let mut buf = [sign; 4];
    buf[..span.len()].copy_from_slice(span);

    i32::from_le_bytes(buf)
}

/// compressed encodings like ADPCM are well formed but carry no PCM samples
fn wav_error(e: hound::Error) -> StegoError {
    match e {
        hound::Error::Unsupported => {
            StegoError::UnsupportedCarrierMode("WAV encoding is not uncompressed PCM".to_string())
        }
        _ => StegoError::InvalidAudioMedia,
    }
}

impl AudioCarrier {
    /// `frames` are the raw sample bytes as found in the WAV data chunk
    pub fn new(spec: WavSpec, frames: Vec<u8>) -> Result<Self> {
        let sample_width = sample_width(&spec)?;
        if frames.len() % sample_width != 0 {
            error!(
                "{} bytes of audio data are no whole number of {sample_width} byte samples",
                frames.len()
            );
            return Err(StegoError::InvalidAudioMedia);
        }

        Ok(Self {
            spec,
            sample_width,
            frames,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let reader = WavReader::open(path).map_err(|e| {
            error!("Error opening audio {path:?}: {e}");
            wav_error(e)
        })?;

        Self::from_wav_reader(reader)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let reader = WavReader::new(reader).map_err(|e| {
            error!("Error reading audio: {e}");
            wav_error(e)
        })?;

        Self::from_wav_reader(reader)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_reader(bytes)
    }

    fn from_wav_reader<R: Read>(mut reader: WavReader<R>) -> Result<Self> {
        let spec = reader.spec();
        let width = sample_width(&spec)?;
        let mut frames = Vec::with_capacity(reader.len() as usize * width);
        for sample in reader.samples::<i32>() {
            let sample = sample.map_err(|e| {
                error!("Error reading audio sample: {e}");
                StegoError::InvalidAudioMedia
            })?;
            push_raw_sample(&mut frames, sample, width);
        }
        debug!(
            "audio carrier with {} samples of {width} bytes, {} channels",
            frames.len() / width,
            spec.channels
        );

        Self::new(spec, frames)
    }

    pub fn spec(&self) -> WavSpec {
        self.spec
    }

    /// Bytes per sample
    pub fn sample_width(&self) -> usize {
        self.sample_width
    }

    /// Number of sample frames, one frame holds one sample per channel
    pub fn frame_count(&self) -> usize {
        self.unit_count() / usize::from(self.spec.channels.max(1))
    }

    /// Raw sample bytes, all frames concatenated
    pub fn frames(&self) -> &[u8] {
        &self.frames
    }

    pub fn into_parts(self) -> (WavSpec, Vec<u8>) {
        (self.spec, self.frames)
    }

    /// Serializes as WAV with the original spec
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<()> {
        let mut wav_writer = WavWriter::new(writer, self.spec).map_err(|e| {
            error!("Error creating audio: {e}");
            StegoError::AudioEncodingError
        })?;
        for span in self.frames.chunks_exact(self.sample_width) {
            wav_writer
                .write_sample(sample_from_raw(span))
                .map_err(|e| {
                    error!("Error writing audio sample: {e}");
                    StegoError::AudioEncodingError
                })?;
        }
        wav_writer
            .finalize()
            .map_err(|_| StegoError::AudioEncodingError)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Cursor::new(Vec::new());
        self.write_to(&mut buf)?;

        Ok(buf.into_inner())
    }

    fn span(&self, index: usize) -> Option<&[u8]> {
        let start = index.checked_mul(self.sample_width)?;
        self.frames.get(start..start.checked_add(self.sample_width)?)
    }
}

impl CarrierSequence for AudioCarrier {
    fn unit_count(&self) -> usize {
        self.frames.len() / self.sample_width
    }

    fn unit_width(&self) -> u32 {
        (self.sample_width * 8) as u32
    }

    fn get(&self, index: usize) -> Option<CarrierUnit> {
        self.span(index).map(|span| CarrierUnit {
            value: span.iter().fold(0, |acc, b| (acc << 8) | u64::from(*b)),
            width: self.unit_width(),
        })
    }

    fn set(&mut self, index: usize, value: u64) -> Result<()> {
        let width = self.unit_width();
        if value >> width != 0 {
            return Err(StegoError::ValueOutOfRange { value, width });
        }
        let count = self.unit_count();
        let sample_width = self.sample_width;
        let span = index
            .checked_mul(sample_width)
            .and_then(|start| {
                let end = start.checked_add(sample_width)?;
                self.frames.get_mut(start..end)
            })
            .ok_or(StegoError::UnitIndexOutOfRange { index, count })?;
        for (i, byte) in span.iter_mut().rev().enumerate() {
            *byte = (value >> (8 * i)) as u8;
        }

        Ok(())
    }
}

impl Persist for AudioCarrier {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            StegoError::WriteError { source: e }
        })?;
        self.write_to(f)
    }
}
