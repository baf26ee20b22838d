use crate::{config::GameConfig, error::GameError};

mod borders;
pub mod input;
mod level;
mod mapper;
mod player;
mod renderer;
mod viewport;

pub use input::InputEvent;
pub use level::Room;
pub use renderer::{Canvas, Renderer};
pub use viewport::Viewport;

use borders::Borders;
use input::InputState;
use level::Level;
use mapper::CoordinateMapper;
use player::Player;

/// Everything the frame loop mutates, owned in one place.
pub struct Game {
    level: Level,
    mapper: CoordinateMapper,
    borders: Borders,
    input: InputState,
    player: Player,
    viewport: Viewport,
}

impl Game {
    pub fn new(config: GameConfig, viewport: Viewport) -> Result<Self, GameError> {
        let mut level = Level::new(config.level_width, config.level_height)?;
        for room in config.rooms {
            level.add_room(room);
        }
        let mut mapper = CoordinateMapper::new();
        let borders = Borders::new(config.border_colour, viewport, level.size(), &mut mapper)?;
        let player = Player::new(level.size(), config.player_side_length, config.player_colour);

        log::info!(
            "level {}x{} in a {}x{} viewport",
            level.width(),
            level.height(),
            viewport.width,
            viewport.height
        );

        Ok(Self {
            level,
            mapper,
            borders,
            input: InputState::default(),
            player,
            viewport,
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[cfg(test)]
    pub fn level(&self) -> &Level {
        &self.level
    }

    #[cfg(test)]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[cfg(test)]
    pub fn borders(&self) -> &Borders {
        &self.borders
    }

    #[cfg(test)]
    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    #[cfg(test)]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Keeps the previous layout if `viewport` has no area.
    pub fn resize(&mut self, viewport: Viewport) -> Result<(), GameError> {
        self.borders
            .recompute(viewport, self.level.size(), &mut self.mapper)?;
        self.viewport = viewport;
        Ok(())
    }

    pub fn load_room(&mut self, index: usize) -> Result<(), GameError> {
        let room = self.level.select_room(index)?;
        log::info!(
            "loaded room {} ({})",
            index,
            room.name.as_deref().unwrap_or("unnamed")
        );
        self.borders
            .recompute(self.viewport, self.level.size(), &mut self.mapper)
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        self.input.handle_event(event);
    }

    pub fn frame(&mut self, canvas: &mut impl Canvas) -> Result<(), GameError> {
        self.borders.draw(canvas);
        self.player.update(
            &self.input,
            self.level.size(),
            self.level.current_room(),
            &self.mapper,
            canvas,
        )?;
        self.level.draw(canvas, &self.mapper);
        Ok(())
    }
}
