use crate::error::GameError;

/// Drawing surface size in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    pub fn validate(self) -> Result<Self, GameError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(GameError::DegenerateViewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}
