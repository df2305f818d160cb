use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Canvas dimensions in generator units; rendering multiplies by a scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 120,
            height: 120,
        }
    }
}

impl From<(u32, u32)> for Canvas {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Error)]
pub enum CanvasParseError {
    #[error("Invalid canvas format: expected WIDTHxHEIGHT (e.g., 120x120)")]
    InvalidFormat,
    #[error("Invalid width: {0}")]
    InvalidWidth(String),
    #[error("Invalid height: {0}")]
    InvalidHeight(String),
    #[error("Width must be positive")]
    ZeroWidth,
    #[error("Height must be positive")]
    ZeroHeight,
}

impl FromStr for Canvas {
    type Err = CanvasParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('x').collect();
        if parts.len() != 2 {
            return Err(CanvasParseError::InvalidFormat);
        }

        let width: u32 = parts[0]
            .trim()
            .parse()
            .map_err(|_| CanvasParseError::InvalidWidth(parts[0].to_string()))?;

        let height: u32 = parts[1]
            .trim()
            .parse()
            .map_err(|_| CanvasParseError::InvalidHeight(parts[1].to_string()))?;

        if width == 0 {
            return Err(CanvasParseError::ZeroWidth);
        }
        if height == 0 {
            return Err(CanvasParseError::ZeroHeight);
        }

        Ok(Canvas { width, height })
    }
}

impl std::fmt::Display for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
