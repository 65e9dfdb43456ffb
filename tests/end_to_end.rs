use std::io;

use matrix_draw::frame::{COMMIT_BYTE, RECORD_LEN, RowRecord};
use matrix_draw::{Color, Frame, MatrixDevice, read_rows};
use tempfile::tempdir;

/// Keeps every write in order, row records and commits alike.
#[derive(Default)]
struct StubDevice {
    writes: Vec<Vec<u8>>,
}

impl MatrixDevice for StubDevice {
    fn write_row(&mut self, record: &RowRecord) -> io::Result<()> {
        self.writes.push(record.as_ref().to_vec());
        Ok(())
    }

    fn commit(&mut self) -> io::Result<()> {
        self.writes.push(vec![COMMIT_BYTE]);
        Ok(())
    }
}

#[test]
fn test_single_pixel_text_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pixel.csv");
    std::fs::write(&path, "255,0,0\n").unwrap();

    let rows: Vec<_> = read_rows(&path).unwrap().collect();
    assert_eq!(rows, vec![vec![Color::new(255, 0, 0)]]);

    let frame = Frame::from_rows(rows).unwrap();
    let mut device = StubDevice::default();
    frame.draw(&mut device).unwrap();

    assert_eq!(device.writes.len(), 7);
    for (i, record) in device.writes[..6].iter().enumerate() {
        assert_eq!(record.len(), RECORD_LEN);
        assert_eq!(record[0], i as u8);
        assert_eq!(record[1], 0);
        assert_eq!(record[2], 0x0F);

        let expected: &[u8] = if i == 0 { &[255, 0, 0] } else { &[0, 0, 0] };
        assert_eq!(&record[3..6], expected);
        assert!(record[6..].iter().all(|&b| b == 0));
    }
    assert_eq!(device.writes[6], vec![0x31]);
}

#[test]
fn test_wide_image_row_is_truncated_on_the_wire() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wide.png");

    let mut image = image::RgbImage::new(22, 6);
    for (x, _, pixel) in image.enumerate_pixels_mut() {
        *pixel = image::Rgb([x as u8 + 1, 0, 0]);
    }
    image.save(&path).unwrap();

    let frame = Frame::from_rows(read_rows(&path).unwrap()).unwrap();
    assert!(frame.rows().iter().all(|row| row.len() == 22));

    let mut device = StubDevice::default();
    frame.draw(&mut device).unwrap();
    let record = &device.writes[5];
    assert_eq!(record.len(), RECORD_LEN);
    assert_eq!(record[3], 1);
    assert_eq!(record[RECORD_LEN - 3], 16);
}

#[test]
fn test_row_too_long_is_rejected_before_drawing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("long.csv");
    std::fs::write(&path, "1,2,3,".repeat(23).trim_end_matches(',')).unwrap();

    let err = Frame::from_rows(read_rows(&path).unwrap()).unwrap_err();
    assert_eq!(err, matrix_draw::FrameError::RowTooLong { index: 0, len: 23 });
}
