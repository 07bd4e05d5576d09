//! Rotate command - single arbitrary angle rotation

use crate::RotateArgs;
use crate::commands::{load_image, parse_filter, save_image};
use anyhow::Result;
use radon_ops::rotate_degrees;

pub fn run(args: RotateArgs, verbose: u8) -> Result<()> {
    if verbose > 0 {
        println!("Loading: {}", args.input.display());
    }

    let input = load_image(&args.input)?;
    let filter = parse_filter(&args.filter)?;

    if verbose > 0 {
        println!("Size: {}x{} ({} ch)", input.width(), input.height(), input.channels());
        println!("Rotation: {}° ({})", args.angle, filter);
    }

    let result = rotate_degrees(&input, args.angle, filter)?;

    if verbose > 0 {
        println!("New size: {}x{}", result.width(), result.height());
    }

    save_image(&args.output, &result)?;

    if verbose > 0 {
        println!("Saved: {}", args.output.display());
    }

    Ok(())
}
