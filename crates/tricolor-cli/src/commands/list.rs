//! List command
//!
//! Prints the registry's preset names.

use crate::ListArgs;
use anyhow::Result;
use tricolor_color::ColorSpaceRegistry;

pub fn run(args: ListArgs, verbose: bool) -> Result<()> {
    let registry = ColorSpaceRegistry::global();

    if args.long || verbose {
        for cs in registry.iter() {
            let w = cs.white_point();
            println!("{:<16} white ({:.4}, {:.4})  {}", cs.name(), w.x, w.y, cs.transfer());
        }
    } else {
        for name in registry.names() {
            println!("{name}");
        }
    }

    Ok(())
}
