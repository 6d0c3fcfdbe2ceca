//! Demo configuration: defaults, JSON parsing, and validation.
//!
//! Both configs deserialize with `#[serde(default)]`, so a page may override
//! any subset of keys and inherit the rest. Parsing always validates; an
//! invalid config is rejected as a whole rather than partially applied.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{
    DEFAULT_RECT_SIZE, FIELD_BACKGROUND, GROWTH_STEP, HIGHLIGHT_FILL, HOVER_RANGE_PX, MAX_RADIUS, MAX_SPEED,
    MIN_RADIUS, PALETTE, POOL_SIZE, PRESS_RANGE_PX,
};
use crate::doc::Rect;

/// Why a configuration was rejected.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("radius bounds must satisfy 0 < min <= max (got min {min}, max {max})")]
    RadiusBounds { min: f64, max: f64 },
    #[error("`{0}` must be a finite, non-negative number")]
    Negative(&'static str),
    #[error("max_speed {speed} exceeds min_radius {min_radius}; circles could step past an edge")]
    SpeedExceedsRadius { speed: f64, min_radius: f64 },
    #[error("growth step must be positive")]
    GrowthStep,
    #[error("palette must contain at least one colour")]
    EmptyPalette,
    #[error("rectangle {index} must have a positive width and height")]
    RectSize { index: usize },
}

/// Settings for the circle field demo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Number of circles in the pool.
    pub count: usize,
    /// Radius circles spawn at and shrink back to.
    pub min_radius: f64,
    /// Radius a hovered circle stops growing at.
    pub max_radius: f64,
    /// Each velocity component spawns uniformly in `[-max_speed, max_speed]`.
    pub max_speed: f64,
    /// Half-width of the square hover window around the pointer.
    pub hover_range: f64,
    /// Half-width of the square press window around the pointer.
    pub press_range: f64,
    /// Radius change per frame.
    pub growth_step: f64,
    /// Whether a held button scatters approaching circles.
    pub repel_on_press: bool,
    /// Base fills picked at spawn.
    pub palette: Vec<String>,
    /// Fill while growing under the pointer.
    pub highlight: String,
    /// Background fill painted every frame.
    pub background: String,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: POOL_SIZE,
            min_radius: MIN_RADIUS,
            max_radius: MAX_RADIUS,
            max_speed: MAX_SPEED,
            hover_range: HOVER_RANGE_PX,
            press_range: PRESS_RANGE_PX,
            growth_step: GROWTH_STEP,
            repel_on_press: true,
            palette: PALETTE.iter().map(|c| (*c).to_owned()).collect(),
            highlight: HIGHLIGHT_FILL.to_owned(),
            background: FIELD_BACKGROUND.to_owned(),
        }
    }
}

impl FieldConfig {
    /// Parse and validate a JSON override.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the JSON is malformed or the values fail
    /// [`FieldConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the update step relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_radius > 0.0 && self.min_radius <= self.max_radius && self.max_radius.is_finite()) {
            return Err(ConfigError::RadiusBounds { min: self.min_radius, max: self.max_radius });
        }
        for (name, value) in [
            ("max_speed", self.max_speed),
            ("hover_range", self.hover_range),
            ("press_range", self.press_range),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Negative(name));
            }
        }
        // Reflection only fires once the rim crosses an edge, so one frame of
        // travel must not carry the centre past it.
        if self.max_speed > self.min_radius {
            return Err(ConfigError::SpeedExceedsRadius { speed: self.max_speed, min_radius: self.min_radius });
        }
        if !(self.growth_step.is_finite() && self.growth_step > 0.0) {
            return Err(ConfigError::GrowthStep);
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(())
    }
}

/// One rectangle placed on the board at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectSpec {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
}

impl RectSpec {
    fn square(x: f64, y: f64, fill: &str) -> Self {
        Self { x, y, width: DEFAULT_RECT_SIZE, height: DEFAULT_RECT_SIZE, fill: fill.to_owned() }
    }
}

/// Settings for the drag board demo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Rectangles in initial draw order (first is bottom-most).
    pub rects: Vec<RectSpec>,
    /// Background fill; the surface is only cleared when absent.
    pub background: Option<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rects: vec![
                RectSpec::square(100.0, 100.0, "blue"),
                RectSpec::square(600.0, 600.0, "red"),
                RectSpec::square(300.0, 600.0, "yellow"),
            ],
            background: None,
        }
    }
}

impl BoardConfig {
    /// Parse and validate a JSON override.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the JSON is malformed or a rectangle has a
    /// non-positive size.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every rectangle has a positive size.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::RectSize`] naming the first bad rectangle.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, spec) in self.rects.iter().enumerate() {
            if !(spec.width > 0.0 && spec.height > 0.0) {
                return Err(ConfigError::RectSize { index });
            }
        }
        Ok(())
    }

    /// Materialize the rectangles with fresh ids, preserving order.
    #[must_use]
    pub fn to_rects(&self) -> Vec<Rect> {
        self.rects
            .iter()
            .map(|spec| Rect {
                id: Uuid::new_v4(),
                x: spec.x,
                y: spec.y,
                width: spec.width,
                height: spec.height,
                fill: spec.fill.clone(),
            })
            .collect()
    }
}
