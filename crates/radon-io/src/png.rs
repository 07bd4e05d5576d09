//! PNG format support.
//!
//! Reads and writes 8-bit PNG files with 1 to 4 interleaved channels.
//!
//! # Features
//!
//! - Grayscale, Grayscale+Alpha, RGB and RGBA
//! - Palette images are expanded to RGB(A)
//! - 16-bit images are stripped to 8-bit on read
//!
//! # Example
//!
//! ```rust,ignore
//! use radon_io::png::{read, write};
//!
//! let image = read("letters.png")?;
//! write("copy.png", &image)?;
//! ```

use crate::{IoError, IoResult};
use radon_core::Image;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::debug;

/// Reads a PNG file into an 8-bit interleaved [`Image`].
///
/// The channel count follows the file's color type: 1 (gray), 2 (gray +
/// alpha), 3 (RGB) or 4 (RGBA).
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut decoder = png::Decoder::new(BufReader::new(file));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let channels = match (info.color_type, info.bit_depth) {
        (png::ColorType::Grayscale, png::BitDepth::Eight) => 1,
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => 2,
        (png::ColorType::Rgb, png::BitDepth::Eight) => 3,
        (png::ColorType::Rgba, png::BitDepth::Eight) => 4,
        (color_type, bit_depth) => {
            return Err(IoError::UnsupportedBitDepth(format!(
                "{:?} {:?}",
                color_type, bit_depth
            )));
        }
    };

    let width = info.width as usize;
    let height = info.height as usize;
    buf.truncate(info.buffer_size());

    debug!(path = %path.display(), width, height, channels, "decoded png");

    // Rows are tightly packed at 8 bits, so the frame is exactly W*H*C bytes.
    Ok(Image::from_raw(width, height, channels, buf)?)
}

/// Writes an [`Image`] as an 8-bit PNG.
pub fn write<P: AsRef<Path>>(path: P, image: &Image) -> IoResult<()> {
    let path = path.as_ref();

    let color_type = match image.channels() {
        1 => png::ColorType::Grayscale,
        2 => png::ColorType::GrayscaleAlpha,
        3 => png::ColorType::Rgb,
        4 => png::ColorType::Rgba,
        n => return Err(IoError::EncodeError(format!("unsupported channel count: {}", n))),
    };

    let width = u32::try_from(image.width())
        .map_err(|_| IoError::EncodeError(format!("width {} exceeds u32", image.width())))?;
    let height = u32::try_from(image.height())
        .map_err(|_| IoError::EncodeError(format!("height {} exceeds u32", image.height())))?;
    if width == 0 || height == 0 {
        return Err(IoError::EncodeError(format!(
            "cannot encode empty {}x{} image",
            width, height
        )));
    }

    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(color_type);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    png_writer
        .write_image_data(image.data())
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    png_writer
        .finish()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    debug!(path = %path.display(), width, height, channels = image.channels(), "encoded png");
    Ok(())
}
