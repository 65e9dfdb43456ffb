//! Per-cell rendering base.

use super::Animation;
use crate::frame::{Color, Frame};

/// Result of the pre-frame hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Render another frame.
    Continue,
    /// End the animation.
    Stop,
}

/// An effect rendered one cell at a time.
pub trait PixelEffect {
    /// Update state before a frame is rendered.
    fn before_frame(&mut self) -> Tick {
        Tick::Continue
    }

    /// Color of the cell at column `x`, row `y`.
    fn pixel(&mut self, x: usize, y: usize) -> Color;
}

/// Drives a [`PixelEffect`] into full frames.
#[derive(Debug, Clone)]
pub struct PixelAnimation<P> {
    effect: P,
    finished: bool,
}

impl<P: PixelEffect> PixelAnimation<P> {
    pub fn new(effect: P) -> Self {
        Self {
            effect,
            finished: false,
        }
    }

    pub fn effect(&self) -> &P {
        &self.effect
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl<P: PixelEffect> Animation for PixelAnimation<P> {
    fn next_frame(&mut self) -> Option<Frame> {
        if self.finished {
            return None;
        }
        if self.effect.before_frame() == Tick::Stop {
            self.finished = true;
            return None;
        }

        Some(Frame::from_fn(|x, y| self.effect.pixel(x, y)))
    }
}
