//! CLI command implementations

pub mod convert;
pub mod info;
pub mod kelvin;
pub mod list;
pub mod xy;

use anyhow::{Context, Result, bail};
use tricolor_color::ColorSpace;
use tricolor_color::math::{Mat3, Vec3};

/// Looks up a preset color space
pub fn load_space(name: &str) -> Result<ColorSpace> {
    ColorSpace::named(name).with_context(|| format!("Failed to resolve color space '{name}' (see `tricolor list`)"))
}

/// Parses "R,G,B"
pub fn parse_rgb(s: &str) -> Result<Vec3> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| {
            p.trim()
                .parse::<f64>()
                .with_context(|| format!("Invalid component '{}' in '{s}'", p.trim()))
        })
        .collect::<Result<_>>()?;

    match parts[..] {
        [r, g, b] => Ok(Vec3::new(r, g, b)),
        _ => bail!("Expected 3 components as R,G,B, got {} in '{s}'", parts.len()),
    }
}

/// Formats a triplet for display
pub fn format_vec(v: Vec3) -> String {
    format!("{:.6}, {:.6}, {:.6}", v.x, v.y, v.z)
}

/// Prints a matrix, one indented row per line
pub fn print_matrix(label: &str, m: &Mat3) {
    println!("  {label}:");
    for i in 0..3 {
        let r = m.row(i);
        println!("    [{:>12.8} {:>12.8} {:>12.8}]", r.x, r.y, r.z);
    }
}
