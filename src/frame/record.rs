//! Wire format for row records.
//!
//! ```text
//! Row record (51 bytes):
//!   Row index: u8
//!   Reserved: u8 (always 0)
//!   Column marker: u8 (always 0x0F)
//!   Colors: 16 x [r, g, b]
//! ```
//!
//! Columns past the 16th are not addressable in a record and are dropped.
//! Unused color slots stay zero (unlit).

use super::Color;

/// Bytes preceding the color data.
pub const RECORD_HEADER_LEN: usize = 3;

/// Number of columns a record carries.
pub const ENCODED_COLUMNS: usize = 0x10;

/// Total size of one row record.
pub const RECORD_LEN: usize = RECORD_HEADER_LEN + ENCODED_COLUMNS * 3;

/// Byte written to the display trigger to show the pending rows.
pub const COMMIT_BYTE: u8 = b'1';

const COLUMN_MARKER: u8 = 0x0F;

/// One encoded row, ready to be written to the frame buffer endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowRecord([u8; RECORD_LEN]);

impl RowRecord {
    /// Encode `row` as the record for row `index`.
    pub fn encode(index: u8, row: &[Color]) -> Self {
        let mut bytes = [0u8; RECORD_LEN];
        bytes[0] = index;
        bytes[1] = 0;
        bytes[2] = COLUMN_MARKER;

        for (slot, color) in bytes[RECORD_HEADER_LEN..]
            .chunks_exact_mut(3)
            .zip(row.iter().take(ENCODED_COLUMNS))
        {
            slot.copy_from_slice(&color.to_bytes());
        }

        Self(bytes)
    }

    /// Row index carried in the header.
    pub fn index(&self) -> u8 {
        self.0[0]
    }

    pub fn as_bytes(&self) -> &[u8; RECORD_LEN] {
        &self.0
    }
}

impl AsRef<[u8]> for RowRecord {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
