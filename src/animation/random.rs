//! Random pixel fields.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{FRAME_WIDTH, PixelEffect, Tick, random_color};
use crate::frame::{Color, FRAME_HEIGHT};

/// A cell is locked when a roll in `0..100` lands above this value.
const STICKY_THRESHOLD: u32 = 90;

/// Every cell a fresh random color, every frame.
#[derive(Debug, Clone)]
pub struct PixelRandom {
    rng: StdRng,
}

impl PixelRandom {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for PixelRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelEffect for PixelRandom {
    fn pixel(&mut self, _x: usize, _y: usize) -> Color {
        random_color(&mut self.rng)
    }
}

/// One cell of a [`StickyRandom`] field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub color: Color,
    /// Locked cells keep their color for the rest of the run.
    pub sticky: bool,
}

/// Random noise that gradually freezes.
///
/// Unlocked cells re-roll their color every tick and have a 9% chance of
/// locking in place.
#[derive(Debug, Clone)]
pub struct StickyRandom {
    field: [[Cell; FRAME_WIDTH]; FRAME_HEIGHT],
    rng: StdRng,
}

impl StickyRandom {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            field: [[Cell::default(); FRAME_WIDTH]; FRAME_HEIGHT],
            rng,
        }
    }

    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.field[y][x]
    }

    /// Number of locked cells.
    pub fn sticky_count(&self) -> usize {
        self.field.iter().flatten().filter(|cell| cell.sticky).count()
    }
}

impl Default for StickyRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelEffect for StickyRandom {
    fn before_frame(&mut self) -> Tick {
        for x in 0..FRAME_WIDTH {
            for y in 0..FRAME_HEIGHT {
                let cell = &mut self.field[y][x];
                if cell.sticky {
                    continue;
                }
                cell.color = random_color(&mut self.rng);
                if self.rng.gen_range(0..100) > STICKY_THRESHOLD {
                    cell.sticky = true;
                }
            }
        }
        Tick::Continue
    }

    fn pixel(&mut self, x: usize, y: usize) -> Color {
        self.field[y][x].color
    }
}
