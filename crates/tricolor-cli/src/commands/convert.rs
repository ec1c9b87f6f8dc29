//! Convert command
//!
//! Converts one or more RGB triplets between color spaces.

use crate::ConvertArgs;
use anyhow::{Context, Result};
use tracing::debug;
use tricolor_color::Conversion;
use tricolor_color::math::{AdaptationMethod, Vec3};

use super::{format_vec, load_space, parse_rgb};

pub fn run(args: ConvertArgs, verbose: bool) -> Result<()> {
    let from = load_space(&args.from)?;
    let to = load_space(&args.to)?;
    let method = AdaptationMethod::from_name(&args.method)
        .with_context(|| format!("Unknown adaptation method '{}'", args.method))?;

    let conversion = Conversion::with_method(&from, &to, method);
    debug!(kind = ?conversion.kind(), "prepared conversion");

    if verbose {
        println!("{} -> {} ({:?}, {})", from, to, conversion.kind(), method.name());
    }

    for (rgb, out) in convert_all(&conversion, &args.rgb)? {
        if verbose {
            println!("  {} -> {}", format_vec(rgb), format_vec(out));
        } else {
            println!("{}", format_vec(out));
        }
    }

    Ok(())
}

/// Parses every "R,G,B" input and runs it through one prepared conversion.
fn convert_all(conversion: &Conversion, inputs: &[String]) -> Result<Vec<(Vec3, Vec3)>> {
    inputs
        .iter()
        .map(|s| {
            let rgb = parse_rgb(s)?;
            Ok((rgb, conversion.apply(rgb)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tricolor_color::Color;
    use tricolor_color::math::IsClose;

    #[test]
    fn test_convert_all_matches_color_convert() {
        let from = load_space("sRGB").unwrap();
        let to = load_space("acescg").unwrap();
        let conversion = Conversion::new(&from, &to);
        let inputs = vec!["0.5,0.25,0.125".to_string(), "1,1,1".to_string()];

        let out = convert_all(&conversion, &inputs).unwrap();
        assert_eq!(out.len(), 2);
        for (rgb, converted) in out {
            let expected = Color::new(rgb, from.clone()).convert(&to);
            assert!(converted.is_close(&expected.rgb(), 1e-12));
        }
    }

    #[test]
    fn test_convert_all_stops_on_bad_input() {
        let srgb = load_space("sRGB").unwrap();
        let conversion = Conversion::new(&srgb, &srgb);
        let inputs = vec!["1,1,1".to_string(), "1,2".to_string()];
        assert!(convert_all(&conversion, &inputs).is_err());
    }
}
