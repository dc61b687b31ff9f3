use std::sync::{Arc, PoisonError, RwLock};

use bookplay_signals::{properties, Binder, Subject};
use tracing::debug;

use crate::config::SpeedConfig;
use crate::error::{finite, ConfigError, EngineError};
use crate::services::PlaybackEngine;

properties! {
    pub enum SpeedProperty for "PlaybackSpeedViewModel" {
        PlaybackSpeed => "playback_speed",
    }
}

/// Playback rate, stepped within the configured range
pub struct PlaybackSpeedViewModel {
    speed: RwLock<f64>,
    binder: Binder<SpeedProperty>,
    engine: Arc<dyn PlaybackEngine>,
    config: SpeedConfig,
}

impl Subject for PlaybackSpeedViewModel {
    type Property = SpeedProperty;
    fn binder(&self) -> &Binder<SpeedProperty> { &self.binder }
}

impl PlaybackSpeedViewModel {
    /// Fails if `config` does not describe a usable range
    pub fn new(engine: Arc<dyn PlaybackEngine>, config: SpeedConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { speed: RwLock::new(config.default), binder: Binder::new(), engine, config })
    }

    pub fn speed(&self) -> f64 { *self.speed.read().unwrap_or_else(PoisonError::into_inner) }

    pub fn set_speed(&self, speed: f64) -> Result<(), EngineError> {
        let speed = self.config.normalize(finite("set_speed", speed)?);
        self.engine.set_speed(speed)?;
        *self.speed.write().unwrap_or_else(PoisonError::into_inner) = speed;
        debug!(speed, "playback speed set");
        self.binder.notify(SpeedProperty::PlaybackSpeed);
        Ok(())
    }

    pub fn speed_up(&self) -> Result<(), EngineError> { self.set_speed(self.speed() + self.config.step) }

    pub fn speed_down(&self) -> Result<(), EngineError> { self.set_speed(self.speed() - self.config.step) }

    pub fn speed_reset(&self) -> Result<(), EngineError> { self.set_speed(self.config.default) }
}
