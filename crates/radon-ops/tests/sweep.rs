use radon_core::{Channel, Image};
use radon_io::{Codec, IoError, IoResult, PngCodec};
use radon_ops::{Filter, OpsError, OutputNaming, SweepConfig, run, sweep};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory codec: decodes what was inserted, records what was encoded.
#[derive(Default)]
struct MemoryCodec {
    files: Mutex<HashMap<PathBuf, Image>>,
    decodes: AtomicUsize,
}

impl MemoryCodec {
    fn with(path: &Path, image: Image) -> Self {
        let codec = Self::default();
        codec.files.lock().unwrap().insert(path.to_path_buf(), image);
        codec
    }

    fn get(&self, path: &Path) -> Option<Image> {
        self.files.lock().unwrap().get(path).cloned()
    }

    fn len(&self) -> usize {
        self.files.lock().unwrap().len()
    }
}

impl Codec for MemoryCodec {
    fn decode(&self, path: &Path) -> IoResult<Image> {
        self.decodes.fetch_add(1, Ordering::SeqCst);
        self.get(path).ok_or_else(|| {
            IoError::Io(io::Error::new(io::ErrorKind::NotFound, path.display().to_string()))
        })
    }

    fn encode(&self, path: &Path, image: &Image) -> IoResult<()> {
        self.files.lock().unwrap().insert(path.to_path_buf(), image.clone());
        Ok(())
    }
}

fn column(img: &Image, x: usize) -> Vec<u8> {
    (0..img.height()).map(|y| img.get(x, y, Channel::Red)).collect()
}

#[test]
fn single_angle_projects_rows() {
    let src = Image::from_raw(2, 2, 1, vec![10, 20, 30, 40]).unwrap();
    let config = SweepConfig::new(1.0, 1.0).with_filter(Filter::Nearest);
    let sino = sweep(&src, &config, |_, _, _| Ok(())).unwrap();

    // diagonal 2.83 -> 3 rows, canvas band starts at (3 - 2) / 2 = 0
    assert_eq!(sino.dimensions(), (1, 3));
    assert_eq!(column(&sino, 0), [15, 35, 0]);
}

#[test]
fn quarter_turns_give_four_columns() {
    let src = Image::filled(4, 4, 1, 100).unwrap();
    let config = SweepConfig::new(360.0, 90.0).with_filter(Filter::Nearest);
    let sino = sweep(&src, &config, |_, _, _| Ok(())).unwrap();

    assert_eq!(sino.dimensions(), (4, 6));
    for x in 0..4 {
        assert_eq!(column(&sino, x), [0, 100, 100, 100, 100, 0], "column {}", x);
    }
}

#[test]
fn uniform_band_holds_at_every_angle() {
    // Odd and non-square sizes, both filters: quarter turns lose no rows.
    for (w, h) in [(4, 4), (5, 3), (6, 4)] {
        let src = Image::filled(w, h, 2, 80).unwrap();
        for filter in [Filter::Nearest, Filter::Bilinear] {
            let config = SweepConfig::new(360.0, 90.0).with_filter(filter);
            let sino = sweep(&src, &config, |_, _, _| Ok(())).unwrap();
            for (x, band) in [(0, h), (1, w), (2, h), (3, w)] {
                let offset = (sino.height() - band) / 2;
                for y in 0..sino.height() {
                    let expected = if (offset..offset + band).contains(&y) { 80 } else { 0 };
                    for ch in sino.channel_iter() {
                        assert_eq!(sino.get(x, y, ch), expected, "{}x{} {} col {} row {}", w, h, filter, x, y);
                    }
                }
            }
        }
    }
}

#[test]
fn uniform_source_fills_centered_band() {
    let src = Image::filled(3, 4, 1, 50).unwrap();
    let sino = sweep(&src, &SweepConfig::new(360.0, 180.0), |_, _, _| Ok(())).unwrap();

    assert_eq!(sino.dimensions(), (2, 5));
    // offset (5 - 4) / 2 = 0
    assert_eq!(column(&sino, 0), [50, 50, 50, 50, 0]);
    assert_eq!(column(&sino, 1), [50, 50, 50, 50, 0]);
}

#[test]
fn callback_sees_every_angle_once() {
    let src = Image::filled(5, 3, 3, 7).unwrap();
    let seen = Mutex::new(Vec::new());
    sweep(&src, &SweepConfig::new(360.0, 90.0), |index, angle, rotated| {
        assert_eq!(rotated.channels(), 3);
        seen.lock().unwrap().push((index, angle));
        Ok(())
    })
    .unwrap();

    let mut seen = seen.into_inner().unwrap();
    seen.sort_by_key(|(i, _)| *i);
    assert_eq!(seen, [(0, 0.0), (1, 90.0), (2, 180.0), (3, 270.0)]);
}

#[test]
fn inconsistent_config_fails_before_decode() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let codec = MemoryCodec::with(&input, Image::filled(4, 4, 1, 1).unwrap());

    let err = run(
        &codec,
        &input,
        &SweepConfig::new(360.0, 7.0),
        &OutputNaming::in_dir(dir.path()),
    )
    .unwrap_err();

    assert!(matches!(err, OpsError::Configuration(_)));
    assert_eq!(codec.decodes.load(Ordering::SeqCst), 0);
    assert_eq!(codec.len(), 1);
}

#[test]
fn missing_input_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let codec = MemoryCodec::default();
    let err = run(
        &codec,
        &dir.path().join("nope.png"),
        &SweepConfig::default(),
        &OutputNaming::in_dir(dir.path()),
    )
    .unwrap_err();
    assert!(matches!(err, OpsError::Io(IoError::Io(_))));
}

#[test]
fn run_writes_frames_and_sinogram() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("letters.png");
    let codec = MemoryCodec::with(&input, Image::filled(6, 4, 3, 90).unwrap());
    let naming = OutputNaming::in_dir(dir.path());

    let summary = run(&codec, &input, &SweepConfig::new(360.0, 90.0), &naming).unwrap();

    assert_eq!(summary.input_size, (6, 4));
    assert_eq!(summary.channels, 3);
    assert_eq!(summary.num_angles, 4);
    assert_eq!(summary.sinogram_size, (4, 8));
    assert_eq!(summary.sinogram_path, dir.path().join("sinogram.png"));

    let expected: Vec<PathBuf> = ["rotated0.png", "rotated90.png", "rotated180.png", "rotated270.png"]
        .iter()
        .map(|name| dir.path().join(name))
        .collect();
    assert_eq!(summary.rotated_paths, expected);

    // input + 4 frames + sinogram
    assert_eq!(codec.len(), 6);
    assert_eq!(codec.get(&expected[1]).unwrap().dimensions(), (4, 6));
    assert_eq!(codec.get(&summary.sinogram_path).unwrap().dimensions(), (4, 8));
}

#[test]
fn run_without_frames_writes_only_sinogram() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let codec = MemoryCodec::with(&input, Image::filled(5, 5, 1, 10).unwrap());
    let naming = OutputNaming {
        dir: dir.path().to_path_buf(),
        rotated_pattern: None,
        sinogram_name: "radon.png".into(),
    };

    let summary = run(&codec, &input, &SweepConfig::new(180.0, 10.0), &naming).unwrap();
    assert!(summary.rotated_paths.is_empty());
    assert_eq!(codec.len(), 2);
    assert!(codec.get(&dir.path().join("radon.png")).is_some());
}

#[test]
fn png_round_trip_through_driver() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("source.png");
    let mut src = Image::zeroed(12, 8, 3).unwrap();
    for (i, v) in src.data_mut().iter_mut().enumerate() {
        *v = (i % 200) as u8;
    }
    PngCodec.encode(&input, &src).unwrap();

    let out = dir.path().join("out");
    let config = SweepConfig::new(180.0, 45.0).with_filter(Filter::Bilinear);
    let summary = run(&PngCodec, &input, &config, &OutputNaming::in_dir(&out)).unwrap();

    for path in &summary.rotated_paths {
        assert!(path.exists(), "{}", path.display());
    }
    let sino = PngCodec.decode(&summary.sinogram_path).unwrap();
    assert_eq!(sino.dimensions(), (4, 15));
    assert_eq!(sino.channels(), 3);

    // Same result as an in-memory sweep.
    let direct = sweep(&src, &config, |_, _, _| Ok(())).unwrap();
    assert_eq!(sino, direct);
}
