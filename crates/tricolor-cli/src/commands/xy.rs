//! Chromaticity command

use crate::XyArgs;
use anyhow::Result;
use tricolor_color::Color;

use super::{format_vec, load_space, parse_rgb};

pub fn run(args: XyArgs, verbose: bool) -> Result<()> {
    let color = Color::new(parse_rgb(&args.rgb)?, load_space(&args.space)?);
    let xy = color.chromaticity();

    if verbose {
        println!("{color}");
        println!("  XYZ: {}", format_vec(color.xyz()));
        println!("  Y:   {:.6}", color.luminance());
    }
    println!("{:.6}, {:.6}", xy.x, xy.y);

    Ok(())
}
