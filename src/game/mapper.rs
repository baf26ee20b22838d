use macroquad::prelude::{vec2, Vec2};

use crate::{constants::MARGIN_DIVISOR, error::GameError};

use super::viewport::Viewport;

/// Linear map from level units to screen pixels: `screen = level * scale - offset`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub scale: f32,
    pub x_offset: f32,
    pub y_offset: f32,
}

/// Pixel rectangle of the playable area inside the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderRect {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl BorderRect {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Fits the level into the viewport keeping its aspect ratio.
///
/// The limiting viewport dimension keeps a margin of 1/16 on both sides,
/// the other one is centered.
pub fn letterbox(
    viewport: Viewport,
    level_size: Vec2,
) -> Result<(Transform, BorderRect), GameError> {
    let viewport = viewport.validate()?;
    if !(level_size.x > 0.0 && level_size.y > 0.0) {
        return Err(GameError::InvalidLevelSize {
            width: level_size.x,
            height: level_size.y,
        });
    }

    let inner_fraction = (MARGIN_DIVISOR - 2.0) / MARGIN_DIVISOR;

    if viewport.width / viewport.height > level_size.x / level_size.y {
        // Height is limiting
        let top = viewport.height / MARGIN_DIVISOR;
        let bottom = viewport.height - top;
        let scale = viewport.height * inner_fraction / level_size.y;
        let level_width = level_size.x * scale;
        let left = (viewport.width - level_width) / 2.0;
        let right = viewport.width - left;

        Ok((
            Transform {
                scale,
                x_offset: left,
                y_offset: top,
            },
            BorderRect {
                left,
                right,
                top,
                bottom,
            },
        ))
    } else {
        // Width is limiting
        let left = viewport.width / MARGIN_DIVISOR;
        let right = viewport.width - left;
        let scale = viewport.width * inner_fraction / level_size.x;
        let level_height = level_size.y * scale;
        let top = (viewport.height - level_height) / 2.0;
        let bottom = viewport.height - top;

        Ok((
            Transform {
                scale,
                x_offset: left,
                y_offset: top,
            },
            BorderRect {
                left,
                right,
                top,
                bottom,
            },
        ))
    }
}

#[derive(Clone, Debug, Default)]
pub struct CoordinateMapper {
    transform: Option<Transform>,
}

impl CoordinateMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn set_transform(&mut self, transform: Transform) {
        self.transform = Some(transform);
    }

    pub fn transform(&self) -> Result<Transform, GameError> {
        self.transform.ok_or(GameError::UninitializedTransform)
    }

    pub fn scale(&self) -> Result<f32, GameError> {
        Ok(self.transform()?.scale)
    }

    pub fn convert(&self, position: Vec2) -> Result<Vec2, GameError> {
        Ok(vec2(self.convert_x(position.x)?, self.convert_y(position.y)?))
    }

    pub fn convert_x(&self, x: f32) -> Result<f32, GameError> {
        let transform = self.transform()?;
        Ok(x * transform.scale - transform.x_offset)
    }

    pub fn convert_y(&self, y: f32) -> Result<f32, GameError> {
        let transform = self.transform()?;
        Ok(y * transform.scale - transform.y_offset)
    }
}
