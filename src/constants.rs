pub const RUN_ACCELERATION: f32 = 1.5;
pub const DAMPING_DIVISOR: f32 = 1.2;
pub const REST_THRESHOLD: f32 = 0.5;

/// Jump impulse in multiples of the player's side length.
pub const JUMP_IMPULSE_FACTOR: f32 = 2.0;

pub const GRAVITY_STRENGTH: f32 = 1.0;
pub const FAST_FALL_GRAVITY_STRENGTH: f32 = 2.0;

pub const MAX_HORIZONTAL_SPEED: f32 = 10.0;
pub const MAX_FALL_SPEED: f32 = 50.0;
pub const MAX_RISE_SPEED: f32 = 10.0;

/// Each side of the limiting viewport dimension keeps 1/16 of it as margin.
pub const MARGIN_DIVISOR: f32 = 16.0;
