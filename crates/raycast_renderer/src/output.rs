//! Image encoders: PPM (P3/P6) and PNG.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::ImageBuffer;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}

pub type EncodeResult<T> = Result<T, EncodeError>;

/// Maximum channel value written to PPM headers.
const MAX_CHANNEL: u8 = 255;

/// Pixels per line in ASCII output, keeping lines under 70 characters.
const ASCII_PIXELS_PER_LINE: u32 = 5;

/// Portable pixmap flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PpmFormat {
    /// P3, decimal channel values
    Ascii,
    /// P6, raw RGB bytes
    Binary,
}

impl PpmFormat {
    fn magic(self) -> &'static str {
        match self {
            PpmFormat::Ascii => "P3",
            PpmFormat::Binary => "P6",
        }
    }
}

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Ppm(PpmFormat),
    Png,
}

impl OutputFormat {
    /// Pick a format from the file extension: `.png` is PNG, `.pnm` and
    /// `.p3` are ASCII PPM, anything else is binary PPM.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("png") => OutputFormat::Png,
            Some("pnm") | Some("p3") => OutputFormat::Ppm(PpmFormat::Ascii),
            _ => OutputFormat::Ppm(PpmFormat::Binary),
        }
    }
}

/// Write `buffer` as a PPM to `writer`.
pub fn write_ppm<W: Write>(
    writer: &mut W,
    buffer: &ImageBuffer,
    format: PpmFormat,
) -> EncodeResult<()> {
    writeln!(writer, "{}", format.magic())?;
    writeln!(writer, "# Created with raycast")?;
    writeln!(writer, "{} {}", buffer.width, buffer.height)?;
    writeln!(writer, "{}", MAX_CHANNEL)?;

    match format {
        PpmFormat::Binary => writer.write_all(buffer.as_bytes())?,
        PpmFormat::Ascii => {
            for y in 0..buffer.height {
                for x in 0..buffer.width {
                    if x > 0 {
                        if x % ASCII_PIXELS_PER_LINE == 0 {
                            writeln!(writer)?;
                        } else {
                            write!(writer, "   ")?;
                        }
                    }
                    let p = buffer.get(x, y);
                    write!(writer, "{} {} {}", p.red, p.green, p.blue)?;
                }
                writeln!(writer)?;
            }
        }
    }

    Ok(())
}

/// Convert to an `image` crate buffer.
pub fn to_rgb_image(buffer: &ImageBuffer) -> EncodeResult<image::RgbImage> {
    let bytes = buffer.as_bytes().to_vec();
    let actual = bytes.len();
    image::RgbImage::from_raw(buffer.width, buffer.height, bytes).ok_or(EncodeError::BufferSize {
        expected: buffer.width as usize * buffer.height as usize * 3,
        actual,
    })
}

/// Save `buffer` to `path` in the given format.
pub fn save_image<P: AsRef<Path>>(
    buffer: &ImageBuffer,
    path: P,
    format: OutputFormat,
) -> EncodeResult<()> {
    let path = path.as_ref();
    match format {
        OutputFormat::Ppm(ppm) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_ppm(&mut writer, buffer, ppm)?;
            writer.flush()?;
        }
        OutputFormat::Png => {
            to_rgb_image(buffer)?.save_with_format(path, image::ImageFormat::Png)?;
        }
    }

    log::info!("Saved {}x{} image to {}", buffer.width, buffer.height, path.display());
    Ok(())
}
