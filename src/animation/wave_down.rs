//! Falling bands of solid color.

use std::collections::VecDeque;

use super::{Animation, ColorSource, Palette, RandomColors};
use crate::frame::{Color, FRAME_HEIGHT, Frame};

/// Solid-color rows sliding down the matrix.
///
/// Each tick a new color enters at the top row and every other row takes
/// the color of the row above it.
#[derive(Debug, Clone)]
pub struct WaveDown<S> {
    source: S,
    /// Newest color first.
    cache: VecDeque<Color>,
}

impl<S: ColorSource> WaveDown<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: VecDeque::with_capacity(FRAME_HEIGHT + 1),
        }
    }
}

impl WaveDown<Palette> {
    /// Wave cycling through the fixed palette.
    pub fn palette() -> Self {
        Self::new(Palette::default())
    }
}

impl WaveDown<RandomColors> {
    /// Wave of random colors.
    pub fn random() -> Self {
        Self::new(RandomColors::new())
    }
}

impl<S: ColorSource> Animation for WaveDown<S> {
    fn next_frame(&mut self) -> Option<Frame> {
        while self.cache.len() <= FRAME_HEIGHT {
            self.cache.push_front(self.source.next_color());
        }
        self.cache.pop_back();

        Some(Frame::from_fn(|_, y| self.cache[y]))
    }
}
