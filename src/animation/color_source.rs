//! Unbounded color streams feeding the generators.

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::random_color;
use crate::frame::Color;

/// The fixed palette cycled by the wave effects.
pub const PALETTE: [Color; 7] = [
    Color::RED,
    Color::GREEN,
    Color::BLUE,
    Color::ORANGE,
    Color::YELLOW,
    Color::WHITE,
    Color::BLACK,
];

/// An endless supply of colors.
pub trait ColorSource {
    fn next_color(&mut self) -> Color;
}

/// Cycles through [`PALETTE`] in order.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    next: usize,
}

impl ColorSource for Palette {
    fn next_color(&mut self) -> Color {
        let color = PALETTE[self.next];
        self.next = (self.next + 1) % PALETTE.len();
        color
    }
}

/// Uniformly random colors.
#[derive(Debug, Clone)]
pub struct RandomColors {
    rng: StdRng,
}

impl RandomColors {
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

impl Default for RandomColors {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSource for RandomColors {
    fn next_color(&mut self) -> Color {
        random_color(&mut self.rng)
    }
}

/// The same color forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constant(pub Color);

impl ColorSource for Constant {
    fn next_color(&mut self) -> Color {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles() {
        let mut palette = Palette::default();
        let first: Vec<Color> = (0..7).map(|_| palette.next_color()).collect();
        let second: Vec<Color> = (0..7).map(|_| palette.next_color()).collect();
        assert_eq!(first, PALETTE);
        assert_eq!(second, PALETTE);
    }

    #[test]
    fn test_seeded_random_colors_repeat() {
        let mut a = RandomColors::with_seed(7);
        let mut b = RandomColors::with_seed(7);
        for _ in 0..20 {
            assert_eq!(a.next_color(), b.next_color());
        }
    }
}
