//! Frame data model for the key matrix.
//!
//! A [`Frame`] is one complete snapshot of the matrix: six rows of colors,
//! top to bottom. Frames are cheap, built per draw call or per animation
//! tick, and dropped once the device has accepted them.

mod record;

use std::io;

pub use record::{COMMIT_BYTE, ENCODED_COLUMNS, RECORD_HEADER_LEN, RECORD_LEN, RowRecord};

use crate::device::MatrixDevice;

/// Number of rows on the matrix.
pub const FRAME_HEIGHT: usize = 6;

/// Maximum number of keys a single row may hold.
pub const MAX_ROW_LEN: usize = 22;

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Self = Self::new(255, 0, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);
    pub const ORANGE: Self = Self::new(255, 100, 0);
    pub const YELLOW: Self = Self::new(255, 255, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels in wire order.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// One row of key colors, left to right.
pub type Row = Vec<Color>;

/// Errors raised while assembling a frame.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    #[error("Row {index} has {len} keys, no more than 22 keys per row allowed")]
    RowTooLong { index: usize, len: usize },
    #[error("Row index {index} out of range (frame has 6 rows)")]
    RowIndexOutOfRange { index: usize },
}

/// Six rows of colors. Unset rows are empty and encode as unlit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    rows: [Row; FRAME_HEIGHT],
}

impl Frame {
    /// Create an empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a frame from a sequence of rows, starting at the top row.
    pub fn from_rows<I>(rows: I) -> Result<Self, FrameError>
    where
        I: IntoIterator<Item = Row>,
    {
        let mut frame = Self::new();
        for (index, row) in rows.into_iter().enumerate() {
            frame.set_row(index, row)?;
        }
        Ok(frame)
    }

    /// Build a full frame, [`ENCODED_COLUMNS`] wide, by asking `pixel` for
    /// every cell. Cells are visited row by row, left to right.
    pub fn from_fn<F>(mut pixel: F) -> Self
    where
        F: FnMut(usize, usize) -> Color,
    {
        let rows = std::array::from_fn(|y| (0..ENCODED_COLUMNS).map(|x| pixel(x, y)).collect());
        Self { rows }
    }

    /// Replace the row at `index`.
    ///
    /// On error the frame is left untouched.
    pub fn set_row(&mut self, index: usize, row: Row) -> Result<(), FrameError> {
        if index >= FRAME_HEIGHT {
            return Err(FrameError::RowIndexOutOfRange { index });
        }
        if row.len() > MAX_ROW_LEN {
            return Err(FrameError::RowTooLong {
                index,
                len: row.len(),
            });
        }
        self.rows[index] = row;
        Ok(())
    }

    /// Get the row at `index`, if it is in range.
    pub fn row(&self, index: usize) -> Option<&[Color]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> &[Row; FRAME_HEIGHT] {
        &self.rows
    }

    /// Encode every row into its wire record, top to bottom.
    pub fn records(&self) -> [RowRecord; FRAME_HEIGHT] {
        std::array::from_fn(|index| RowRecord::encode(index as u8, &self.rows[index]))
    }

    /// Send the frame to a device.
    ///
    /// All six row records are written in order, then the commit byte.
    /// The first failed write aborts the draw and nothing is committed.
    pub fn draw<D>(&self, device: &mut D) -> io::Result<()>
    where
        D: MatrixDevice + ?Sized,
    {
        for record in &self.records() {
            device.write_row(record)?;
        }
        device.commit()?;
        log::trace!("Committed frame");
        Ok(())
    }
}
