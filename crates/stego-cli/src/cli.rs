use clap::{Parser, Subcommand};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Number of low bits used in every image channel or audio sample
    #[arg(
        short = 'k',
        long = "group-width",
        value_name = "bits",
        default_value_t = 3,
        global = true,
        value_parser = clap::value_parser!(u32).range(1..=64)
    )]
    pub group_width: u32,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    Capacity(capacity::CapacityArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn should_parse_hide_with_a_hex_marker() {
        let args = CliArgs::try_parse_from([
            "stego",
            "-k",
            "2",
            "hide",
            "-i",
            "carrier.png",
            "-o",
            "secret.png",
            "-m",
            "Hello",
            "--marker-hex",
            "00ff",
        ])
        .expect("arguments are valid");

        assert_eq!(args.group_width, 2);
        let Commands::Hide(hide) = args.command else {
            panic!("expected the hide command");
        };
        assert_eq!(hide.marker.bytes(), vec![0x00, 0xff]);
    }

    #[test]
    fn should_require_exactly_one_marker() {
        let base = ["stego", "unveil", "-i", "secret.png", "-o", "out.bin"];
        assert!(CliArgs::try_parse_from(base).is_err());

        let both = base
            .iter()
            .copied()
            .chain(["--marker", "x", "--marker-hex", "78"]);
        assert!(CliArgs::try_parse_from(both).is_err());
    }

    #[test]
    fn should_reject_message_and_data_file_together() {
        let result = CliArgs::try_parse_from([
            "stego",
            "hide",
            "-i",
            "carrier.png",
            "-o",
            "secret.png",
            "-m",
            "Hello",
            "-d",
            "data.bin",
            "--marker",
            "EOD",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn should_reject_a_group_width_out_of_range() {
        let result = CliArgs::try_parse_from(["stego", "-k", "0", "capacity", "-i", "x.png"]);
        assert!(result.is_err());
        let result = CliArgs::try_parse_from(["stego", "capacity", "-i", "x.png", "-k", "65"]);
        assert!(result.is_err());
    }
}
