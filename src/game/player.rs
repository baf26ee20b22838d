use macroquad::prelude::{vec2, Color, Vec2};

use crate::{
    constants::{
        DAMPING_DIVISOR, FAST_FALL_GRAVITY_STRENGTH, GRAVITY_STRENGTH, JUMP_IMPULSE_FACTOR,
        MAX_FALL_SPEED, MAX_HORIZONTAL_SPEED, MAX_RISE_SPEED, REST_THRESHOLD, RUN_ACCELERATION,
    },
    error::GameError,
};

use super::{input::InputState, level::Room, mapper::CoordinateMapper, renderer::Canvas};

/// The controllable square.
///
/// Position and velocity are in level units; one frame is one time unit.
/// `can_jump` is true only on frames that ended clamped to the floor.
pub struct Player {
    pub relative_pos: Vec2,
    pub real_pos: Vec2,
    pub velocity: Vec2,
    pub gravity_strength: f32,
    pub side_length: f32,
    pub can_jump: bool,
    pub colour: Color,
}

impl Player {
    /// Spawns the player airborne in the middle of the level.
    pub fn new(level_size: Vec2, side_length: f32, colour: Color) -> Self {
        Self {
            relative_pos: level_size / 2.0,
            real_pos: Vec2::ZERO,
            velocity: Vec2::ZERO,
            gravity_strength: GRAVITY_STRENGTH,
            side_length,
            can_jump: false,
            colour,
        }
    }

    pub fn update(
        &mut self,
        input: &InputState,
        level_size: Vec2,
        room: Option<&Room>,
        mapper: &CoordinateMapper,
        canvas: &mut impl Canvas,
    ) -> Result<(), GameError> {
        self.step(input, level_size, room);
        log::trace!("player at {:?}", self.relative_pos);
        self.real_pos = mapper.convert(self.relative_pos)?;
        self.draw(canvas, mapper)
    }

    /// Advances the simulation by one frame. Order of the stages matters.
    pub fn step(&mut self, input: &InputState, level_size: Vec2, room: Option<&Room>) {
        self.process_key_presses(input);
        self.apply_gravity();
        self.clamp_velocity();
        self.relative_pos += self.velocity;
        self.process_collisions(level_size, room);
    }

    pub fn process_key_presses(&mut self, input: &InputState) {
        if input.left() {
            self.velocity.x -= RUN_ACCELERATION;
        } else if input.right() {
            self.velocity.x += RUN_ACCELERATION;
        } else {
            self.damp_horizontal();
        }

        if input.jump() && self.can_jump {
            self.velocity.y = -JUMP_IMPULSE_FACTOR * self.side_length;
            self.can_jump = false;
        }

        self.gravity_strength = if input.fast_fall() {
            FAST_FALL_GRAVITY_STRENGTH
        } else {
            GRAVITY_STRENGTH
        };
    }

    fn damp_horizontal(&mut self) {
        if self.velocity.x.abs() > REST_THRESHOLD {
            self.velocity.x /= DAMPING_DIVISOR;
        } else {
            self.velocity.x = 0.0;
        }
    }

    pub fn apply_gravity(&mut self) {
        self.velocity.y += self.gravity_strength / 2.0;
    }

    /// Falling may be much faster than rising.
    pub fn clamp_velocity(&mut self) {
        self.velocity.x = self
            .velocity
            .x
            .clamp(-MAX_HORIZONTAL_SPEED, MAX_HORIZONTAL_SPEED);
        self.velocity.y = self.velocity.y.clamp(-MAX_RISE_SPEED, MAX_FALL_SPEED);
    }

    /// Clamps against the level edges, also catching a bound the current
    /// velocity would cross on the next frame.
    pub fn process_collisions(&mut self, level_size: Vec2, room: Option<&Room>) {
        let half_side = self.side_length / 2.0;
        let floor = level_size.y - half_side;
        let right_wall = level_size.x - half_side;
        let next = self.relative_pos + self.velocity;

        self.can_jump = false;
        if next.y > floor || self.relative_pos.y > floor {
            self.relative_pos.y = floor;
            self.velocity.y = 0.0;
            self.can_jump = true;
        } else if next.y < half_side || self.relative_pos.y < half_side {
            self.relative_pos.y = half_side;
            self.velocity.y = 0.0;
        }

        if next.x < half_side || self.relative_pos.x < half_side {
            self.relative_pos.x = half_side;
            self.velocity.x = 0.0;
        } else if next.x > right_wall || self.relative_pos.x > right_wall {
            self.relative_pos.x = right_wall;
            self.velocity.x = 0.0;
        }

        self.collide_with_room(room);
    }

    /// Platform and block collisions go here.
    fn collide_with_room(&mut self, _room: Option<&Room>) {}

    /// Draws a square whose top edge leans with the horizontal speed.
    pub fn draw(
        &self,
        canvas: &mut impl Canvas,
        mapper: &CoordinateMapper,
    ) -> Result<(), GameError> {
        let scale = mapper.scale()?;
        let half = self.side_length * scale / 2.0;
        let lean = self.velocity.x * scale;
        let (x, y) = (self.real_pos.x, self.real_pos.y);

        canvas.fill_path(
            &[
                vec2(x - half, y + half),
                vec2(x + half, y + half),
                vec2(x + half + lean, y - half),
                vec2(x - half + lean, y - half),
            ],
            self.colour,
        );
        Ok(())
    }
}
