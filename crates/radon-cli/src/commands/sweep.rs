//! Sweep command - rotated frames and sinogram

use crate::SweepArgs;
use crate::commands::parse_filter;
use anyhow::{Context, Result};
use radon_io::PngCodec;
use radon_ops::{OutputNaming, SweepConfig};
use tracing::info;

pub fn run(args: SweepArgs, verbose: u8) -> Result<()> {
    let config = SweepConfig::new(args.angle_max, args.angle_delta)
        .with_filter(parse_filter(&args.filter)?);
    let naming = OutputNaming {
        dir: args.out_dir,
        rotated_pattern: (!args.no_rotated).then_some(args.pattern),
        sinogram_name: args.sinogram,
    };

    info!(
        input = %args.input.display(),
        angle_max = config.angle_max,
        angle_delta = config.angle_delta,
        filter = %config.filter,
        "sweep"
    );

    let summary = radon_ops::run(&PngCodec, &args.input, &config, &naming)
        .with_context(|| format!("Sweep failed: {}", args.input.display()))?;

    if verbose > 0 {
        let (w, h) = summary.input_size;
        let (sw, sh) = summary.sinogram_size;
        println!("Source: {}x{} ({} ch)", w, h, summary.channels);
        println!("Angles: {}", summary.num_angles);
        println!("Rotated frames: {}", summary.rotated_paths.len());
        println!("Sinogram: {}x{} -> {}", sw, sh, summary.sinogram_path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use radon_core::Image;

    fn args(input: std::path::PathBuf, out_dir: std::path::PathBuf) -> SweepArgs {
        SweepArgs {
            input,
            angle_max: 360.0,
            angle_delta: 90.0,
            filter: "nearest".into(),
            out_dir,
            pattern: "rotated{angle}.png".into(),
            no_rotated: false,
            sinogram: "sinogram.png".into(),
        }
    }

    #[test]
    fn writes_frames_and_sinogram() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        radon_io::write(&input, &Image::filled(5, 4, 3, 120).unwrap()).unwrap();

        let out = dir.path().join("out");
        run(args(input, out.clone()), 0).unwrap();

        for angle in [0, 90, 180, 270] {
            assert!(out.join(format!("rotated{}.png", angle)).exists());
        }
        let sino = radon_io::read(out.join("sinogram.png")).unwrap();
        assert_eq!(sino.dimensions(), (4, 7));
    }

    #[test]
    fn no_rotated_skips_frames() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        radon_io::write(&input, &Image::filled(3, 3, 1, 9).unwrap()).unwrap();

        let mut a = args(input, dir.path().to_path_buf());
        a.no_rotated = true;
        run(a, 0).unwrap();

        assert!(dir.path().join("sinogram.png").exists());
        assert!(!dir.path().join("rotated0.png").exists());
    }

    #[test]
    fn bad_filter_and_config_fail() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");

        let mut a = args(input.clone(), dir.path().to_path_buf());
        a.filter = "lanczos".into();
        assert!(run(a, 0).is_err());

        let mut a = args(input, dir.path().to_path_buf());
        a.angle_delta = 7.0;
        assert!(run(a, 0).is_err());
    }
}
