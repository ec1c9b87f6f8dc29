//! Blackbody command
//!
//! Expresses a blackbody radiator in a color space.

use crate::KelvinArgs;
use anyhow::Result;
use tracing::warn;
use tricolor_color::Color;
use tricolor_color::spectral::{KELVIN_MAX, KELVIN_MIN, blackbody_xy};

use super::{format_vec, load_space};

pub fn run(args: KelvinArgs, verbose: bool) -> Result<()> {
    if !(KELVIN_MIN..=KELVIN_MAX).contains(&args.kelvin) {
        warn!(kelvin = args.kelvin, "temperature outside {KELVIN_MIN}..{KELVIN_MAX} K, clamping");
    }

    let mut color = Color::black(load_space(&args.space)?);
    color.set_from_blackbody_kelvin(args.kelvin, args.luminance);

    if verbose {
        let xy = blackbody_xy(args.kelvin);
        println!("{} K in {}", args.kelvin, color.space());
        println!("  xy: {:.6}, {:.6}", xy.x, xy.y);
    }
    println!("{}", format_vec(color.rgb()));

    Ok(())
}
