//! Matrix Draw - Static images and procedural animations for a 6-row RGB
//! key matrix.
//!
//! The matrix is driven through two write-only driver attributes: row
//! records are written one at a time, then a commit byte displays them.
//!
//! # Architecture
//!
//! - `frame`: the frame data model and its 51-byte row record encoding
//! - `device`: the device boundary and device path resolution
//! - `source`: decoding image and text files into rows
//! - `animation`: tick-driven generators and the concrete animations
//! - `effect`: named effects, the registry and the playback loop
//! - `schema`: configuration file types
//!
//! # Example
//!
//! ```rust,no_run
//! use matrix_draw::{EffectRegistry, Player, SysfsDevice};
//!
//! let registry = EffectRegistry::builtin();
//! let mut device = SysfsDevice::new("/sys/bus/hid/drivers/razerkbd/0003:1532:0203.0001");
//!
//! // Plays until the cancel handle is set.
//! let player = Player::new();
//! player.play(registry.get("rain").unwrap(), &mut device).unwrap();
//! ```

pub mod animation;
pub mod device;
pub mod effect;
pub mod frame;
pub mod schema;
pub mod source;

// Re-export commonly used types
pub use device::{MatrixDevice, SysfsDevice, resolve_device};
pub use effect::{Effect, EffectError, EffectRegistry, Pattern, Player};
pub use frame::{Color, Frame, FrameError, Row};
pub use schema::MatrixConfig;
pub use source::{SourceError, read_rows};
