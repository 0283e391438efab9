// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
pub struct StyleConfig {
    /// Background fill, linear rgb in [0, 1].
    pub background: [f32; 3],
    /// One chain node per entry; entry i colors node i.
    pub palette: Vec<[f32; 3]>,
}

#[derive(Debug, Deserialize)]
pub struct AnimationConfig {
    /// Seconds between animation ticks.
    pub tick_period: f32,
    /// Progress added per tick.
    pub step: f32,
}
