//! tricolor - color conversion and color space inspection CLI

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "tricolor")]
#[command(author, version, about = "Color conversion between named color spaces")]
#[command(long_about = "
Converts RGB triplets between color spaces and inspects the spaces themselves.
Colors are written as comma-separated components, e.g. 0.5,0.25,0.125.

Examples:
  tricolor list                                   # Preset names
  tricolor info acescg                            # Primaries, curve, matrices
  tricolor convert 0.5,0.25,0.125 --from lin_rec709 --to sRGB
  tricolor convert 1,0,0 --from sRGB --to lin_ap0 --method cat02
  tricolor xy 1,1,1 --space lin_rec709            # Chromaticity of white
  tricolor kelvin 3200 --space sRGB               # Tungsten in sRGB
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert RGB triplets from one color space to another
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Show a color space's primaries, white point, curve and matrices
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// List preset color spaces
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// CIE xy chromaticity of an RGB triplet
    Xy(XyArgs),

    /// Blackbody color at a temperature
    #[command(visible_alias = "k")]
    Kelvin(KelvinArgs),
}

/// Arguments for the `convert` command.
#[derive(Args)]
struct ConvertArgs {
    /// Colors as R,G,B
    #[arg(required = true)]
    rgb: Vec<String>,

    /// Source color space
    #[arg(short, long)]
    from: String,

    /// Target color space
    #[arg(short, long)]
    to: String,

    /// Chromatic adaptation: bradford, cat02, vonkries, xyz
    #[arg(short, long, default_value = "bradford")]
    method: String,
}

/// Arguments for the `info` command.
#[derive(Args)]
struct InfoArgs {
    /// Color space name(s)
    #[arg(required = true)]
    space: Vec<String>,
}

/// Arguments for the `list` command.
#[derive(Args)]
struct ListArgs {
    /// Show curve and white point next to each name
    #[arg(short, long)]
    long: bool,
}

/// Arguments for the `xy` command.
#[derive(Args)]
struct XyArgs {
    /// Color as R,G,B
    rgb: String,

    /// Color space of the input
    #[arg(short, long, default_value = "lin_rec709")]
    space: String,
}

/// Arguments for the `kelvin` command.
#[derive(Args)]
struct KelvinArgs {
    /// Temperature in Kelvin (clamped to 1667..25000)
    kelvin: f64,

    /// Output color space
    #[arg(short, long, default_value = "lin_rec709")]
    space: String,

    /// CIE Y of the result
    #[arg(short, long, default_value = "1.0")]
    luminance: f64,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args, cli.verbose),
        Commands::Info(args) => commands::info::run(args, cli.verbose),
        Commands::List(args) => commands::list::run(args, cli.verbose),
        Commands::Xy(args) => commands::xy::run(args, cli.verbose),
        Commands::Kelvin(args) => commands::kelvin::run(args, cli.verbose),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert() {
        let cli = Cli::try_parse_from([
            "tricolor", "convert", "0.5,0.25,0.125", "1,1,1", "--from", "sRGB", "--to", "acescg",
        ])
        .unwrap();
        match cli.command {
            Commands::Convert(args) => {
                assert_eq!(args.rgb.len(), 2);
                assert_eq!(args.method, "bradford");
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["tricolor", "list", "-v", "-j", "2"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.threads, 2);
    }
}
