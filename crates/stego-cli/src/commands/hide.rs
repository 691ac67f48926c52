use std::path::PathBuf;

use clap::Args;
use stego_core::CodecOptions;

use super::MarkerArgs;
use crate::CliResult;

/// Hides data in PNG/BMP images and WAV audio files
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Media file such as PNG image or WAV audio file, used readonly.
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Final media will be stored as file, in the format of the input media
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output media file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// File to hide in the media
    #[arg(
        short = 'd',
        long = "data",
        value_name = "data file",
        required_unless_present = "message",
        conflicts_with = "message"
    )]
    pub data_file: Option<PathBuf>,

    /// A text message that will be hidden
    #[arg(
        short,
        long,
        value_name = "text message",
        required_unless_present = "data_file"
    )]
    pub message: Option<String>,

    #[command(flatten)]
    pub marker: MarkerArgs,
}

impl HideArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        stego_core::api::hide::prepare()
            .with_options(options)
            .use_message(self.message)
            .use_file(self.data_file)
            .with_marker(self.marker.bytes())
            .with_media(&self.media)
            .with_output(&self.write_to_file)
            .execute()
    }
}
