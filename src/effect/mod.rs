//! Named effects and their playback.
//!
//! An [`Effect`] pairs a name and a frame delay with a [`Pattern`]: either
//! a directory of static frames or a procedure creating a fresh
//! [`Animation`]. Effects live in an [`EffectRegistry`] built once at
//! startup and are played on a device by a [`Player`].

mod player;
mod registry;

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::animation::Animation;
use crate::frame::{Frame, FrameError};
use crate::source::{SourceError, read_rows};

pub use player::{PlaybackStats, Player};
pub use registry::EffectRegistry;

/// Delay between frames unless an effect asks for another.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(50);

/// Creates the initial state of a procedural effect.
pub type AnimationFactory = fn() -> Box<dyn Animation>;

/// Where an effect's frames come from.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// One frame per file in the directory, in directory listing order.
    StaticDirectory(PathBuf),
    /// An unbounded animation, started fresh on every play.
    Procedural(AnimationFactory),
}

/// A named, repeatable animation.
#[derive(Debug, Clone)]
pub struct Effect {
    name: String,
    pattern: Pattern,
    delay: Duration,
}

impl Effect {
    pub fn new(name: impl Into<String>, pattern: Pattern, delay: Duration) -> Self {
        Self {
            name: name.into(),
            pattern,
            delay,
        }
    }

    /// Procedural effect with the default delay.
    pub fn procedural(name: impl Into<String>, factory: AnimationFactory) -> Self {
        Self::new(name, Pattern::Procedural(factory), DEFAULT_DELAY)
    }

    /// Set the frame delay.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_procedural(&self) -> bool {
        matches!(self.pattern, Pattern::Procedural(_))
    }

    /// Start a new run of the effect.
    ///
    /// Static frames are decoded up front so a bad file fails before
    /// anything is drawn.
    pub fn frames(&self) -> Result<FrameSequence, EffectError> {
        match &self.pattern {
            Pattern::StaticDirectory(dir) => {
                let frames = load_directory(dir)?;
                log::debug!("Loaded {} frames from {}", frames.len(), dir.display());
                Ok(FrameSequence::Finite(frames.into_iter()))
            }
            Pattern::Procedural(factory) => Ok(FrameSequence::Procedural(factory())),
        }
    }
}

/// Frames of one effect run.
pub enum FrameSequence {
    Finite(std::vec::IntoIter<Frame>),
    Procedural(Box<dyn Animation>),
}

impl FrameSequence {
    /// Produce the next frame, or `None` when a finite sequence is done.
    pub fn next_frame(&mut self) -> Option<Frame> {
        match self {
            Self::Finite(frames) => frames.next(),
            Self::Procedural(animation) => animation.next_frame(),
        }
    }
}

/// Decode every file in `dir` into a frame.
fn load_directory(dir: &Path) -> Result<Vec<Frame>, EffectError> {
    let entries = std::fs::read_dir(dir).map_err(|source| EffectError::Directory {
        path: dir.to_owned(),
        source,
    })?;

    let mut frames = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|source| EffectError::Directory {
                path: dir.to_owned(),
                source,
            })?
            .path();
        if !path.is_file() {
            log::debug!("Skipping {}", path.display());
            continue;
        }

        let frame = Frame::from_rows(read_rows(&path)?)
            .map_err(|source| EffectError::Frame { path, source })?;
        frames.push(frame);
    }
    Ok(frames)
}

/// Effect lookup and playback errors.
#[derive(Debug, thiserror::Error)]
pub enum EffectError {
    #[error("No effect named {0:?}")]
    NotFound(String),
    #[error("Failed to list frames in {}: {source}", .path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("Invalid frame {}: {source}", .path.display())]
    Frame {
        path: PathBuf,
        #[source]
        source: FrameError,
    },
    #[error("Device write failed: {0}")]
    Device(#[from] io::Error),
}
