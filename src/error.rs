#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GameError {
    #[error("coordinate transform used before the first recompute")]
    UninitializedTransform,

    #[error("room index {index} out of range, level has {len} rooms")]
    InvalidRoomIndex { index: usize, len: usize },

    #[error("viewport {width}x{height} has no area")]
    DegenerateViewport { width: f32, height: f32 },

    #[error("level size {width}x{height} must be positive")]
    InvalidLevelSize { width: f32, height: f32 },
}
