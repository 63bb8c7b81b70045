//! Game configuration and validation.

use thiserror::Error;

use crate::types::{
    Shape, BOARD_HEIGHT, BOARD_WIDTH, FRAME_MS, GRAVITY_MS, MAX_BOARD_EDGE, MIN_BOARD_EDGE,
    SOFT_DROP_GRACE_MS, SOFT_DROP_MS,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board size {width}x{height} outside {min}..={max} per edge")]
    BoardSize {
        width: u16,
        height: u16,
        min: u16,
        max: u16,
    },
    #[error("{name} must be greater than zero")]
    ZeroInterval { name: &'static str },
    #[error("shape set is empty")]
    NoShapes,
    #[error("unknown shape name {0:?}")]
    UnknownShape(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub gravity_ms: u32,
    pub soft_drop_ms: u32,
    pub soft_drop_grace_ms: u32,
    pub frame_ms: u32,
    pub seed: u32,
    pub shapes: Vec<Shape>,
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let edge_ok = |v: u16| (MIN_BOARD_EDGE..=MAX_BOARD_EDGE).contains(&v);
        if !edge_ok(self.width) || !edge_ok(self.height) {
            return Err(ConfigError::BoardSize {
                width: self.width,
                height: self.height,
                min: MIN_BOARD_EDGE,
                max: MAX_BOARD_EDGE,
            });
        }

        for (name, value) in [
            ("gravity_ms", self.gravity_ms),
            ("soft_drop_ms", self.soft_drop_ms),
            ("soft_drop_grace_ms", self.soft_drop_grace_ms),
            ("frame_ms", self.frame_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroInterval { name });
            }
        }

        if self.shapes.is_empty() {
            return Err(ConfigError::NoShapes);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            gravity_ms: GRAVITY_MS,
            soft_drop_ms: SOFT_DROP_MS,
            soft_drop_grace_ms: SOFT_DROP_GRACE_MS,
            frame_ms: FRAME_MS,
            seed: 1,
            shapes: Shape::TETROMINOES.to_vec(),
        }
    }
}

/// Parse a comma separated shape list such as `"i,o,t"` or `"mono"`.
pub fn parse_shapes(list: &str) -> Result<Vec<Shape>, ConfigError> {
    let mut shapes = Vec::new();
    for name in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let shape = Shape::from_str(name).ok_or_else(|| ConfigError::UnknownShape(name.to_string()))?;
        if !shapes.contains(&shape) {
            shapes.push(shape);
        }
    }
    if shapes.is_empty() {
        return Err(ConfigError::NoShapes);
    }
    Ok(shapes)
}
