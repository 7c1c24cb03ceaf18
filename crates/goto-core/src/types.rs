//! Geometry types reported by a surface

use serde::{Deserialize, Serialize};

/// Surface size in host units
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub x: f64,
    pub y: f64,
}

impl Size {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn width(&self) -> f64 {
        self.x
    }

    pub fn height(&self) -> f64 {
        self.y
    }
}

/// Surface top-left position in host coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
