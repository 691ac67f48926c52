pub mod capacity;
pub mod hide;
pub mod unveil;

use clap::Args;

/// The end-of-data marker, both sides have to use the very same
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct MarkerArgs {
    /// End-of-data marker given as text
    #[arg(long, value_name = "text")]
    pub marker: Option<String>,

    /// End-of-data marker given as hex string, e.g. 00ff
    #[arg(long = "marker-hex", value_name = "hex", value_parser = parse_hex)]
    pub marker_hex: Option<HexBytes>,
}

impl MarkerArgs {
    pub fn bytes(&self) -> Vec<u8> {
        match (&self.marker, &self.marker_hex) {
            (Some(text), _) => text.as_bytes().to_vec(),
            (None, Some(HexBytes(bytes))) => bytes.clone(),
            (None, None) => Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HexBytes(pub Vec<u8>);

fn parse_hex(text: &str) -> Result<HexBytes, String> {
    let digits = text.strip_prefix("0x").unwrap_or(text);

    hex::decode(digits)
        .map(HexBytes)
        .map_err(|e| format!("invalid hex string: {e}"))
}
