//! Process-wide collection of named effects.

use std::collections::BTreeMap;
use std::time::Duration;

use super::{Effect, EffectError, Pattern};
use crate::animation::{
    Animation, DiagonalWave, PixelAnimation, PixelRandom, Rain, StickyRandom, WaveDown,
};
use crate::schema::{ConfigError, MatrixConfig};

fn wave_down() -> Box<dyn Animation> {
    Box::new(WaveDown::palette())
}

fn wave_down_random() -> Box<dyn Animation> {
    Box::new(WaveDown::random())
}

fn pixel_random() -> Box<dyn Animation> {
    Box::new(PixelAnimation::new(PixelRandom::new()))
}

fn pixel_random_sticky() -> Box<dyn Animation> {
    Box::new(PixelAnimation::new(StickyRandom::new()))
}

fn diagonal_wave() -> Box<dyn Animation> {
    Box::new(PixelAnimation::new(DiagonalWave::new()))
}

fn rain() -> Box<dyn Animation> {
    Box::new(PixelAnimation::new(Rain::green()))
}

fn rain_random() -> Box<dyn Animation> {
    Box::new(PixelAnimation::new(Rain::random()))
}

fn builtin_effects() -> [Effect; 7] {
    [
        Effect::procedural("wave-down", wave_down),
        Effect::procedural("wave-down-random", wave_down_random),
        Effect::procedural("pixel-random", pixel_random),
        Effect::procedural("pixel-random-sticky", pixel_random_sticky),
        Effect::procedural("diagonal-wave", diagonal_wave).with_delay(Duration::from_millis(100)),
        Effect::procedural("rain", rain),
        Effect::procedural("rain-random", rain_random),
    ]
}

/// Effects available for playback, keyed by name.
///
/// Built once at startup; there is no way to add effects afterwards.
#[derive(Debug, Clone)]
pub struct EffectRegistry {
    effects: BTreeMap<String, Effect>,
}

impl EffectRegistry {
    /// Registry holding the built-in procedural effects.
    pub fn builtin() -> Self {
        let effects = builtin_effects()
            .into_iter()
            .map(|effect| (effect.name().to_owned(), effect))
            .collect();
        Self { effects }
    }

    /// Built-in effects plus the directory effects declared in `config`.
    pub fn with_config(config: &MatrixConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut registry = Self::builtin();
        for declared in &config.effects {
            if registry.effects.contains_key(&declared.name) {
                return Err(ConfigError::DuplicateEffect(declared.name.clone()));
            }
            let effect = Effect::new(
                declared.name.clone(),
                Pattern::StaticDirectory(declared.directory.clone()),
                declared.delay()?,
            );
            log::debug!(
                "Registered effect {} from {}",
                effect.name(),
                declared.directory.display()
            );
            registry.effects.insert(declared.name.clone(), effect);
        }
        Ok(registry)
    }

    /// Look up an effect by name.
    pub fn get(&self, name: &str) -> Result<&Effect, EffectError> {
        self.effects
            .get(name)
            .ok_or_else(|| EffectError::NotFound(name.to_owned()))
    }

    /// Effect names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.effects.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Effect> {
        self.effects.values()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
