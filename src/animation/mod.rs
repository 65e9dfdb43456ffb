//! Procedural animations.
//!
//! Every animation is an explicit state machine: [`Animation::next_frame`]
//! advances the simulation by one tick and returns the frame to show.
//!
//! Two generator bases drive the concrete effects:
//!
//! - [`WaveDown`]: a falling band of full-row colors pulled from a
//!   [`ColorSource`].
//! - [`PixelAnimation`]: renders a [`PixelEffect`] cell by cell after
//!   giving it a chance to update its state.
//!
//! Animations own their random generators, so a run can be reproduced by
//! constructing them from a fixed seed.

mod color_source;
mod diagonal;
mod pixel;
mod rain;
mod random;
mod wave_down;

use rand::Rng;

use crate::frame::{Color, ENCODED_COLUMNS, Frame};

pub use color_source::{ColorSource, Constant, PALETTE, Palette, RandomColors};
pub use diagonal::DiagonalWave;
pub use pixel::{PixelAnimation, PixelEffect, Tick};
pub use rain::{DRAIN_STEP, POOL_ROW_SIZE, Particle, Rain, RainPool, blend};
pub use random::{Cell, PixelRandom, StickyRandom};
pub use wave_down::WaveDown;

/// Width of frames produced by animations.
pub const FRAME_WIDTH: usize = ENCODED_COLUMNS;

/// A tick-driven frame generator.
pub trait Animation {
    /// Advance one tick and produce the next frame.
    ///
    /// Returns `None` once the animation has finished. Unbounded animations
    /// never do.
    fn next_frame(&mut self) -> Option<Frame>;
}

impl<A: Animation + ?Sized> Animation for Box<A> {
    fn next_frame(&mut self) -> Option<Frame> {
        (**self).next_frame()
    }
}

/// Uniformly random color.
pub(crate) fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::new(
        rng.gen_range(0..=255),
        rng.gen_range(0..=255),
        rng.gen_range(0..=255),
    )
}
