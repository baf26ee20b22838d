use macroquad::{
    color::{Color, BLACK, WHITE},
    window::Conf,
};

use crate::game::Room;

#[derive(Clone, Debug)]
pub struct GameConfig {
    pub level_width: f32,
    pub level_height: f32,
    pub player_side_length: f32,
    pub border_colour: Color,
    pub player_colour: Color,
    /// Colour of a cleared canvas, shown inside the play area.
    pub clear_colour: Color,
    pub rooms: Vec<Room>,
    pub window_title: String,
    pub window_width: i32,
    pub window_height: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            level_width: 200.0,
            level_height: 100.0,
            player_side_length: 20.0,
            border_colour: BLACK,
            player_colour: BLACK,
            clear_colour: WHITE,
            rooms: vec![Room {
                name: Some("start".to_owned()),
            }],
            window_title: "Platformer".to_owned(),
            window_width: 1600,
            window_height: 900,
        }
    }
}

impl GameConfig {
    pub fn window_conf(&self) -> Conf {
        Conf {
            window_title: self.window_title.clone(),
            window_width: self.window_width,
            window_height: self.window_height,
            window_resizable: true,
            ..Default::default()
        }
    }
}
