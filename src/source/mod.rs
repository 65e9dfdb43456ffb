//! Row sources: decode a file into rows of colors.
//!
//! Two decoders are tried in order:
//!
//! - Raster images (anything the `image` crate can open), one row per
//!   scan-line, one color per pixel.
//! - Delimited text, one row per line. Each line is a comma separated list
//!   of integers grouped into consecutive `r,g,b` triples.

mod text;

use std::io;
use std::path::{Path, PathBuf};

use image::io::Reader as ImageReader;
use image::{DynamicImage, ImageResult, RgbImage};

use crate::frame::{Color, Row};

pub use text::parse_table;

/// Errors raised while decoding a row source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Unknown file type {}", .path.display())]
    UnsupportedFormat { path: PathBuf },
    #[error("{}:{line}: {reason}", .path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Rows decoded from a file, top to bottom.
#[derive(Debug)]
pub enum RowSource {
    Image { image: RgbImage, next_row: u32 },
    Table(std::vec::IntoIter<Row>),
}

impl Iterator for RowSource {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        match self {
            Self::Image { image, next_row } => {
                if *next_row >= image.height() {
                    return None;
                }
                let y = *next_row;
                *next_row += 1;
                Some(
                    (0..image.width())
                        .map(|x| {
                            let [r, g, b] = image.get_pixel(x, y).0;
                            Color::new(r, g, b)
                        })
                        .collect(),
                )
            }
            Self::Table(rows) => rows.next(),
        }
    }
}

/// Decode `path` as a raster image, sniffing the format from its contents.
/// The extension is only a hint.
fn decode_image(path: &Path) -> ImageResult<DynamicImage> {
    ImageReader::open(path)?.with_guessed_format()?.decode()
}

/// Open `path` with the first decoder that accepts it.
pub fn read_rows<P: AsRef<Path>>(path: P) -> Result<RowSource, SourceError> {
    let path = path.as_ref();

    match decode_image(path) {
        Ok(image) => {
            let image = image.to_rgb8();
            log::debug!(
                "Decoded {} as a {}x{} image",
                path.display(),
                image.width(),
                image.height()
            );
            return Ok(RowSource::Image { image, next_row: 0 });
        }
        Err(err) => log::trace!("{} is not an image: {}", path.display(), err),
    }

    let bytes = std::fs::read(path).map_err(|source| SourceError::Io {
        path: path.to_owned(),
        source,
    })?;
    let Ok(text) = String::from_utf8(bytes) else {
        return Err(SourceError::UnsupportedFormat {
            path: path.to_owned(),
        });
    };

    let rows = parse_table(&text).map_err(|(line, reason)| SourceError::Malformed {
        path: path.to_owned(),
        line,
        reason,
    })?;
    log::debug!("Decoded {} as a table of {} rows", path.display(), rows.len());
    Ok(RowSource::Table(rows.into_iter()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb};
    use tempfile::tempdir;

    #[test]
    fn test_read_png_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("frame.png");

        let mut image = RgbImage::new(3, 2);
        image.put_pixel(0, 0, Rgb([255, 0, 0]));
        image.put_pixel(2, 1, Rgb([0, 0, 255]));
        image.save(&path).unwrap();

        let rows: Vec<Row> = read_rows(&path).unwrap().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec![Color::RED, Color::BLACK, Color::BLACK]);
        assert_eq!(rows[1], vec![Color::BLACK, Color::BLACK, Color::BLUE]);
    }

    #[test]
    fn test_read_png_without_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("frame01");

        let mut image = RgbImage::new(1, 1);
        image.put_pixel(0, 0, Rgb([255, 0, 0]));
        image.save_with_format(&path, ImageFormat::Png).unwrap();

        let rows: Vec<Row> = read_rows(&path).unwrap().collect();
        assert_eq!(rows, vec![vec![Color::RED]]);
    }

    #[test]
    fn test_extensionless_text_still_decodes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("frame02");
        std::fs::write(&path, "0,255,0").unwrap();

        let rows: Vec<Row> = read_rows(&path).unwrap().collect();
        assert_eq!(rows, vec![vec![Color::GREEN]]);
    }

    #[test]
    fn test_read_text_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("frame.csv");
        std::fs::write(&path, "255,0,0,0,255,0\n0,0,255\n").unwrap();

        let rows: Vec<Row> = read_rows(&path).unwrap().collect();
        assert_eq!(rows, vec![vec![Color::RED, Color::GREEN], vec![Color::BLUE]]);
    }

    #[test]
    fn test_binary_file_is_unsupported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("blob.bin");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x9f]).unwrap();

        match read_rows(&path).unwrap_err() {
            SourceError::UnsupportedFormat { path: p } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_text_names_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "1,2,3\n1,2,300\n").unwrap();

        match read_rows(&path).unwrap_err() {
            SourceError::Malformed { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = read_rows(dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
    }
}
