use macroquad::prelude::{vec2, Vec2};

use crate::error::GameError;

use super::{mapper::CoordinateMapper, renderer::Canvas};

/// A section of a level. Rooms carry no geometry yet.
#[derive(Clone, Debug, Default)]
pub struct Room {
    pub name: Option<String>,
}

pub struct Level {
    width: f32,
    height: f32,
    rooms: Vec<Room>,
    current_room: Option<usize>,
}

impl Level {
    pub fn new(width: f32, height: f32) -> Result<Self, GameError> {
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(GameError::InvalidLevelSize { width, height });
        }
        Ok(Self {
            width,
            height,
            rooms: Vec::new(),
            current_room: None,
        })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn size(&self) -> Vec2 {
        vec2(self.width, self.height)
    }

    pub fn add_room(&mut self, room: Room) {
        self.rooms.push(room);
    }

    /// Marks `rooms[index]` as current. Callers must recompute the borders afterwards.
    pub fn select_room(&mut self, index: usize) -> Result<&Room, GameError> {
        let room = self.rooms.get(index).ok_or(GameError::InvalidRoomIndex {
            index,
            len: self.rooms.len(),
        })?;
        self.current_room = Some(index);
        Ok(room)
    }

    pub fn current_room(&self) -> Option<&Room> {
        self.current_room.and_then(|index| self.rooms.get(index))
    }

    /// Room geometry (platforms, blocks) will be drawn here.
    pub fn draw(&self, _canvas: &mut impl Canvas, _mapper: &CoordinateMapper) {}
}
