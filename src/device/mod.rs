//! Device boundary.
//!
//! The keyboard driver exposes two write-only attributes under the device
//! directory: one accepting a single row record per write, and one that
//! displays the pending rows when `'1'` is written to it.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::frame::{COMMIT_BYTE, RowRecord};

/// Attribute receiving row records.
pub const FRAME_ENDPOINT: &str = "matrix_custom_frame";

/// Attribute that displays the most recently written rows.
pub const DISPLAY_ENDPOINT: &str = "matrix_effect_custom";

/// Directory the driver registers its devices under.
pub const DEFAULT_DEVICES_DIR: &str = "/sys/bus/hid/drivers/razerkbd/";

/// Write-only sink for encoded frames.
pub trait MatrixDevice {
    /// Write one row record to the frame buffer.
    fn write_row(&mut self, record: &RowRecord) -> io::Result<()>;

    /// Display the rows written so far.
    fn commit(&mut self) -> io::Result<()>;
}

impl<D: MatrixDevice + ?Sized> MatrixDevice for &mut D {
    fn write_row(&mut self, record: &RowRecord) -> io::Result<()> {
        (**self).write_row(record)
    }

    fn commit(&mut self) -> io::Result<()> {
        (**self).commit()
    }
}

/// Device backed by driver attribute files.
///
/// No handle is held between writes: every call opens, writes and closes
/// its endpoint, so a single writer process is assumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SysfsDevice {
    dir: PathBuf,
}

impl SysfsDevice {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    /// Device directory.
    pub fn path(&self) -> &Path {
        &self.dir
    }

    fn write_endpoint(&self, endpoint: &str, bytes: &[u8]) -> io::Result<()> {
        let mut file = File::create(self.dir.join(endpoint))?;
        file.write_all(bytes)
    }
}

impl MatrixDevice for SysfsDevice {
    fn write_row(&mut self, record: &RowRecord) -> io::Result<()> {
        self.write_endpoint(FRAME_ENDPOINT, record.as_ref())
    }

    fn commit(&mut self) -> io::Result<()> {
        self.write_endpoint(DISPLAY_ENDPOINT, &[COMMIT_BYTE])
    }
}

/// Device resolution errors.
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    #[error("Device not found: {}", .path.display())]
    NotFound { path: PathBuf },
}

/// Resolve a device argument.
///
/// `arg` is used as-is if it names an existing path, otherwise it is
/// looked up as a device identifier under `devices_dir`.
pub fn resolve_device<P: AsRef<Path>>(
    arg: &str,
    devices_dir: P,
) -> Result<SysfsDevice, DeviceError> {
    let literal = Path::new(arg);
    if literal.exists() {
        log::debug!("Using device path {}", literal.display());
        return Ok(SysfsDevice::new(literal));
    }

    let path = devices_dir.as_ref().join(arg);
    if path.exists() {
        log::debug!("Resolved device {} to {}", arg, path.display());
        return Ok(SysfsDevice::new(path));
    }

    Err(DeviceError::NotFound { path })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{Color, Frame, RECORD_LEN};
    use tempfile::tempdir;

    #[test]
    fn test_sysfs_device_writes_endpoints() {
        let dir = tempdir().unwrap();
        let mut device = SysfsDevice::new(dir.path());

        let mut frame = Frame::new();
        frame.set_row(5, vec![Color::GREEN]).unwrap();
        frame.draw(&mut device).unwrap();

        // Each write replaces the attribute, so only the last row remains.
        let row = std::fs::read(dir.path().join(FRAME_ENDPOINT)).unwrap();
        assert_eq!(row.len(), RECORD_LEN);
        assert_eq!(row[0], 5);
        assert_eq!(&row[3..6], &[0, 255, 0]);

        let display = std::fs::read(dir.path().join(DISPLAY_ENDPOINT)).unwrap();
        assert_eq!(display, b"1");
    }

    #[test]
    fn test_sysfs_device_missing_dir_fails() {
        let dir = tempdir().unwrap();
        let mut device = SysfsDevice::new(dir.path().join("gone"));
        let err = device.commit().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_resolve_literal_path() {
        let dir = tempdir().unwrap();
        let arg = dir.path().to_str().unwrap();
        let device = resolve_device(arg, "/nonexistent").unwrap();
        assert_eq!(device.path(), dir.path());
    }

    #[test]
    fn test_resolve_identifier() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("0003:1532:0203.0001")).unwrap();

        let device = resolve_device("0003:1532:0203.0001", dir.path()).unwrap();
        assert_eq!(device.path(), dir.path().join("0003:1532:0203.0001"));
    }

    #[test]
    fn test_resolve_missing() {
        let dir = tempdir().unwrap();
        let err = resolve_device("missing-device", dir.path()).unwrap_err();
        match err {
            DeviceError::NotFound { path } => assert_eq!(path, dir.path().join("missing-device")),
        }
    }
}
