use thiserror::Error;

#[derive(Error, Debug)]
pub enum StegoError {
    /// Represents a carrier whose sample layout cannot carry data, for example a 16-bit image or float audio
    #[error("Carrier mode is not supported: {0}")]
    UnsupportedCarrierMode(String),

    /// Represents a carrier decoded from a lossy format, for example JPEG
    #[error("Carrier format is not lossless: {0}")]
    UnsupportedCarrierFormat(String),

    /// Represents an integer that does not fit into the requested number of bits
    #[error("Value {value} does not fit into {width} bits")]
    ValueOutOfRange { value: u64, width: u32 },

    /// Represents a payload that does not fit into the carrier
    #[error("Capacity Error: {needed} bits are needed but the carrier only offers {available} bits")]
    CapacityExceeded { needed: usize, available: usize },

    /// Represents a carrier that did not contain the end-of-data marker
    #[error("End-of-data marker not found, the carrier holds no data for this marker")]
    MarkerNotFound,

    /// Represents a bit sequence that cannot be packed into whole bytes
    #[error("{0} bits cannot be packed into whole bytes")]
    TrailingBitsInvalid(usize),

    #[error("The end-of-data marker must not be empty")]
    EmptyMarker,

    #[error("Group width {0} is invalid, it must be between 1 and 64 bits")]
    InvalidGroupWidth(u32),

    #[error("Group width {group_width} exceeds the carrier unit width of {unit_width} bits")]
    GroupWidthExceedsUnit { group_width: u32, unit_width: u32 },

    #[error("Unit index {index} is out of range, the carrier has {count} units")]
    UnitIndexOutOfRange { index: usize, count: usize },

    /// Represents an unsupported carrier media. For example, a Movie file is not supported
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier audio media. For example, a broken WAV file
    #[error("Audio media is invalid")]
    InvalidAudioMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure when encoding an audio file.
    #[error("Audio encoding error")]
    AudioEncodingError,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing payload, provide a message or a file")]
    MissingPayload,

    #[error("API Error: Missing end-of-data marker")]
    MissingMarker,
}
