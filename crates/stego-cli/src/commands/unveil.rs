use std::path::PathBuf;

use clap::Args;
use stego_core::CodecOptions;

use super::MarkerArgs;
use crate::CliResult;

/// Unveils data from PNG/BMP images and WAV audio files
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source media that contains secret data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// Unveiled data will be stored as binary file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output_file: PathBuf,

    #[command(flatten)]
    pub marker: MarkerArgs,
}

impl UnveilArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        stego_core::api::unveil::prepare()
            .with_options(options)
            .from_secret_file(&self.media)
            .with_marker(self.marker.bytes())
            .into_file(&self.output_file)
            .execute()
    }
}
