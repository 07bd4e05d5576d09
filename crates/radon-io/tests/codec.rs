use radon_core::{Channel, Image};
use radon_io::{Codec, IoError, PngCodec, read, write};

fn checker(width: usize, height: usize, channels: usize) -> Image {
    let mut img = Image::zeroed(width, height, channels).unwrap();
    for y in 0..height {
        for x in 0..width {
            let v = if (x + y) % 2 == 0 { 255 } else { 0 };
            for ch in img.channel_iter().collect::<Vec<_>>() {
                img.set(x, y, ch, v);
            }
        }
    }
    img
}

#[test]
fn codec_preserves_every_channel_count() {
    let dir = tempfile::tempdir().unwrap();
    let codec = PngCodec;

    for channels in 1..=4 {
        let path = dir.path().join(format!("checker{}.png", channels));
        let image = checker(9, 5, channels);

        codec.encode(&path, &image).expect("encode");
        let loaded = codec.decode(&path).expect("decode");

        assert_eq!(loaded.channels(), channels);
        assert_eq!(loaded, image);
    }
}

#[test]
fn free_functions_match_codec() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sinogram.png");
    let image = checker(4, 4, 1);

    write(&path, &image).unwrap();
    let loaded = read(&path).unwrap();
    assert_eq!(loaded.get(0, 0, Channel::Red), 255);
    assert_eq!(loaded.get(1, 0, Channel::Red), 0);
}

#[test]
fn unknown_extension_is_rejected_on_write() {
    let dir = tempfile::tempdir().unwrap();
    let image = checker(2, 2, 3);
    let err = write(dir.path().join("out.exr"), &image).unwrap_err();
    assert!(matches!(err, IoError::UnsupportedFormat(ref ext) if ext == "exr"));
}

#[test]
fn missing_input_is_fatal() {
    let err = PngCodec
        .decode("/no/such/dir/letters.png".as_ref())
        .unwrap_err();
    assert!(matches!(err, IoError::Io(_)));
}

#[test]
fn codec_by_reference() {
    fn roundtrip<C: Codec>(codec: C, dir: &std::path::Path) -> Image {
        let path = dir.join("ref.png");
        codec.encode(&path, &checker(3, 3, 2)).unwrap();
        codec.decode(&path).unwrap()
    }

    let dir = tempfile::tempdir().unwrap();
    let codec = PngCodec;
    let loaded = roundtrip(&codec, dir.path());
    assert_eq!(loaded.dimensions(), (3, 3));
}
