//! Effect playback.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use super::{Effect, EffectError};
use crate::device::MatrixDevice;

/// Summary of a finished playback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaybackStats {
    /// Frames committed to the device.
    pub frames: u64,
}

/// Plays effects on a device, one frame per delay.
///
/// Procedural effects run until the cancel handle is set; nothing inside
/// the loop ends them.
#[derive(Debug, Clone, Default)]
pub struct Player {
    cancelled: Arc<AtomicBool>,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle that stops playback after the current frame when set.
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancelled)
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Play `effect` on `device`.
    ///
    /// Each frame is drawn, then the thread sleeps for the effect's delay.
    /// A failed device write ends playback with the error.
    pub fn play<D>(&self, effect: &Effect, device: &mut D) -> Result<PlaybackStats, EffectError>
    where
        D: MatrixDevice + ?Sized,
    {
        let mut frames = effect.frames()?;
        log::info!(
            "Playing effect {} ({:?} per frame)",
            effect.name(),
            effect.delay()
        );

        let start = Instant::now();
        let mut stats = PlaybackStats::default();
        while !self.is_cancelled() {
            let Some(frame) = frames.next_frame() else {
                break;
            };
            frame.draw(device)?;
            stats.frames += 1;
            log::trace!("Drew frame {} of {}", stats.frames, effect.name());

            if !effect.delay().is_zero() {
                std::thread::sleep(effect.delay());
            }
        }

        log::info!(
            "Stopped effect {} after {} frames in {:.2}s",
            effect.name(),
            stats.frames,
            start.elapsed().as_secs_f32()
        );
        Ok(stats)
    }
}
