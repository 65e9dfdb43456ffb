//! Diagonal palette wave.

use std::collections::VecDeque;

use super::{ColorSource, FRAME_WIDTH, Palette, PixelEffect, Tick};
use crate::frame::{Color, FRAME_HEIGHT};

/// Palette stripes running diagonally down and to the right.
///
/// Cell `(x, y)` shows entry `x + y` of a rotating color buffer, so every
/// anti-diagonal shares one color.
#[derive(Debug, Clone)]
pub struct DiagonalWave {
    palette: Palette,
    buffer: VecDeque<Color>,
}

impl DiagonalWave {
    pub fn new() -> Self {
        let mut palette = Palette::default();
        let buffer = (0..FRAME_WIDTH + FRAME_HEIGHT)
            .map(|_| palette.next_color())
            .collect();
        Self { palette, buffer }
    }
}

impl Default for DiagonalWave {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelEffect for DiagonalWave {
    fn before_frame(&mut self) -> Tick {
        self.buffer.push_front(self.palette.next_color());
        self.buffer.pop_back();
        Tick::Continue
    }

    fn pixel(&mut self, x: usize, y: usize) -> Color {
        self.buffer[x + y]
    }
}
