use std::path::PathBuf;

use clap::Args;
use stego_core::CodecOptions;

use crate::CliResult;

/// Shows how many bytes a media file can hide
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Media file such as PNG image or WAV audio file
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Length of the end-of-data marker in bytes
    #[arg(long = "marker-len", value_name = "bytes", default_value_t = 5)]
    pub marker_len: usize,
}

impl CapacityArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let capacity = stego_core::api::capacity(&self.media, options.group_width)?;
        log::debug!("{capacity:?}");

        println!(
            "{} units of {} bits, {} bits used per unit",
            capacity.unit_count, capacity.unit_width, capacity.group_width
        );
        println!("capacity: {} bits", capacity.bits);
        println!(
            "largest payload with a {} byte marker: {} bytes",
            self.marker_len,
            capacity.max_payload_len(self.marker_len)
        );

        Ok(())
    }
}
