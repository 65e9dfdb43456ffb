//! Falling particles collecting in a pool.
//!
//! Particles spawn on the top row and fall one row per tick. When a
//! particle leaves the bottom it is absorbed into the pool, which fills
//! the matrix from the bottom up, one row per [`POOL_ROW_SIZE`] particles.
//! Once the pool would rise above the top row it starts draining: each
//! absorbed particle then removes [`DRAIN_STEP`] from the pool until it is
//! empty again.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{ColorSource, Constant, FRAME_WIDTH, PixelEffect, RandomColors, Tick};
use crate::frame::{Color, FRAME_HEIGHT};

/// Particles needed to raise the pool by one row.
pub const POOL_ROW_SIZE: u32 = 50;

/// Pool reduction per absorbed particle while draining.
pub const DRAIN_STEP: u32 = 10;

/// A spawn happens when a roll in `0..100` lands above this value.
const SPAWN_THRESHOLD: u32 = 25;

/// A falling unit of color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Particle {
    pub column: usize,
    pub row: usize,
    pub color: Color,
}

/// Accumulated particles at the bottom of the matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RainPool {
    pub count: u32,
    /// `None` until the first particle lands.
    pub color: Option<Color>,
    pub draining: bool,
}

impl RainPool {
    /// Fold a landed particle into the pool.
    pub fn absorb(&mut self, color: Color) {
        if self.draining {
            self.count = self.count.saturating_sub(DRAIN_STEP);
        } else {
            self.count += 1;
        }
        self.color = Some(match self.color {
            Some(pool) => blend(pool, color),
            None => color,
        });
    }

    /// Lowest row still above the pool surface. Negative once the pool
    /// overflows the matrix.
    pub fn cutoff(&self) -> i64 {
        (FRAME_HEIGHT as i64 - 1) - i64::from(self.count / POOL_ROW_SIZE)
    }
}

/// Blend an incoming particle into the pool color.
///
/// Each output channel is the root mean square of the pool's red channel
/// and the matching incoming channel.
pub fn blend(pool: Color, incoming: Color) -> Color {
    let base = f64::from(pool.r).powi(2);
    let mix = |channel: u8| ((base + f64::from(channel).powi(2)) / 2.0).sqrt() as u8;
    Color::new(mix(incoming.r), mix(incoming.g), mix(incoming.b))
}

/// Rain effect fed by a color source.
#[derive(Debug, Clone)]
pub struct Rain<S> {
    source: S,
    particles: Vec<Particle>,
    pool: RainPool,
    rng: StdRng,
}

impl<S: ColorSource> Rain<S> {
    pub fn new(source: S) -> Self {
        Self::from_rng(source, StdRng::from_entropy())
    }

    pub fn with_seed(source: S, seed: u64) -> Self {
        Self::from_rng(source, StdRng::seed_from_u64(seed))
    }

    fn from_rng(source: S, rng: StdRng) -> Self {
        Self {
            source,
            particles: Vec::new(),
            pool: RainPool::default(),
            rng,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pool(&self) -> &RainPool {
        &self.pool
    }
}

impl Rain<Constant> {
    /// Green rain.
    pub fn green() -> Self {
        Self::new(Constant(Color::GREEN))
    }
}

impl Rain<RandomColors> {
    /// Rain in random colors.
    pub fn random() -> Self {
        Self::new(RandomColors::new())
    }
}

impl<S: ColorSource> PixelEffect for Rain<S> {
    fn before_frame(&mut self) -> Tick {
        let pool = &mut self.pool;
        self.particles.retain_mut(|particle| {
            particle.row += 1;
            if particle.row >= FRAME_HEIGHT {
                pool.absorb(particle.color);
                return false;
            }
            true
        });

        if self.rng.gen_range(0..100) > SPAWN_THRESHOLD {
            let column = self.rng.gen_range(0..FRAME_WIDTH);
            self.particles.push(Particle {
                column,
                row: 0,
                color: self.source.next_color(),
            });
        }
        Tick::Continue
    }

    fn pixel(&mut self, x: usize, y: usize) -> Color {
        let cutoff = self.pool.cutoff();
        if cutoff < 0 {
            self.pool.draining = true;
        }
        if self.pool.count == 0 {
            self.pool.draining = false;
        }
        if cutoff < y as i64 {
            return self.pool.color.unwrap_or(Color::BLACK);
        }

        self.particles
            .iter()
            .find(|particle| particle.column == x && particle.row == y)
            .map_or(Color::BLACK, |particle| particle.color)
    }
}
