//! # Stego Core API
//!
//! Hides arbitrary bytes in the least significant bits of lossless images
//! (PNG, BMP) and PCM audio (WAV). The payload is followed by an end-of-data
//! marker that tells the unveiling side where to stop. Neither the marker nor
//! the number of bits used per carrier unit is stored in the carrier, both
//! sides agree on them out of band.
//!
//! The building blocks are
//! - [`CarrierSequence`][seq] the carrier as a flat sequence of integer units
//! - [`embed`][embed] writing payload and marker into the low bits of the units
//! - [`extract`][extract] reading them back until the marker shows up
//! - the [`api`][api] builders doing the same on files
//!
//! # Usage Examples
//!
//! ## Hide data inside an image in memory
//!
//! ```rust
//! use image::{DynamicImage, ImageFormat, RgbImage};
//! use stego_core::{embed, extract, GroupWidth, ImageCarrier, Marker};
//!
//! let image = DynamicImage::ImageRgb8(RgbImage::new(16, 16));
//! let mut carrier = ImageCarrier::new(image, ImageFormat::Png)?;
//! let marker = Marker::try_from("$EOD$")?;
//! let k = GroupWidth::new(2)?;
//!
//! embed(&mut carrier, b"Hello World!", &marker, k)?;
//!
//! assert_eq!(extract(&carrier, &marker, k)?, b"Hello World!");
//! # Ok::<(), stego_core::StegoError>(())
//! ```
//!
//! ## Hide a message inside an image file and unveil it again
//!
//! ```rust
//! use image::{DynamicImage, RgbImage};
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! let secret = temp_dir.path().join("secret.png");
//! DynamicImage::ImageRgb8(RgbImage::new(32, 32))
//!     .save(&carrier)
//!     .expect("Failed to write carrier image");
//!
//! stego_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_marker("$EOD$")
//!     .with_media(&carrier)
//!     .with_output(&secret)
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! let unveiled = stego_core::api::unveil::prepare()
//!     .from_secret_file(&secret)
//!     .with_marker("$EOD$")
//!     .unveil()
//!     .expect("Failed to unveil message from image");
//!
//! assert_eq!(unveiled, b"Hello, World!");
//! ```
//!
//! [seq]: ./carrier/trait.CarrierSequence.html
//! [embed]: ./fn.embed.html
//! [extract]: ./fn.extract.html
//! [api]: ./api/index.html

#![warn(clippy::redundant_else)]

pub mod api;
pub mod bits;
pub mod carrier;
pub mod codec_options;
pub mod embed;
pub mod error;
pub mod extract;
pub mod marker;
pub mod media;
pub mod result;
pub mod splice;

pub use crate::carrier::{AudioCarrier, CarrierSequence, CarrierUnit, ColorMode, ImageCarrier};
pub use crate::codec_options::{CodecOptions, GroupWidth};
pub use crate::embed::embed;
pub use crate::error::StegoError;
pub use crate::extract::extract;
pub use crate::marker::Marker;
pub use crate::media::{Media, Persist};
pub use crate::result::Result;
