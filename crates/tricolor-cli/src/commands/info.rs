//! Color space info command
//!
//! Shows how a color space is defined and the matrices derived from it.

use crate::InfoArgs;
use anyhow::Result;
use tricolor_color::{ColorSpace, Definition};

use super::{load_space, print_matrix};

/// Runs the info command for each named space.
pub fn run(args: InfoArgs, verbose: bool) -> Result<()> {
    for (i, name) in args.space.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_space(&load_space(name)?, verbose);
    }
    Ok(())
}

fn print_space(cs: &ColorSpace, verbose: bool) {
    let kind = match cs.definition() {
        Definition::Primaries(_) => "primaries",
        Definition::Matrix(_) => "matrix",
        Definition::PassThrough => "pass-through",
    };
    println!("{}", cs.name());
    println!("  Defined by:  {kind}");

    if let Some(p) = cs.primaries() {
        println!("  Red:         ({:.5}, {:.5})", p.r.x, p.r.y);
        println!("  Green:       ({:.5}, {:.5})", p.g.x, p.g.y);
        println!("  Blue:        ({:.5}, {:.5})", p.b.x, p.b.y);
    }
    let w = cs.white_point();
    println!("  White:       ({:.5}, {:.5})", w.x, w.y);
    println!("  Transfer:    {}", cs.transfer());

    if verbose {
        let (breakpoint, slope) = cs.transfer_params();
        println!("  Gamma:       {}", cs.gamma());
        println!("  Linear bias: {}", cs.linear_bias());
        println!("  Breakpoint:  {breakpoint:.8}");
        println!("  Slope:       {slope:.8}");
    }

    if !cs.is_pass_through() {
        print_matrix("RGB to XYZ", &cs.to_xyz_matrix());
        if verbose {
            print_matrix("XYZ to RGB", &cs.from_xyz_matrix());
        }
    }
}
