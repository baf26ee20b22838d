use macroquad::prelude::{
    draw_rectangle, draw_triangle, screen_height, screen_width, Color, Vec2,
};

use super::viewport::Viewport;

/// Immediate-mode drawing surface the game paints onto every frame.
pub trait Canvas {
    fn size(&self) -> Viewport;

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);

    /// Resets a rectangle back to the empty canvas.
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Fills the closed convex path through `points`.
    fn fill_path(&mut self, points: &[Vec2], color: Color);
}

pub struct Renderer {
    clear_color: Color,
}

impl Renderer {
    pub fn new(clear_color: Color) -> Self {
        Self { clear_color }
    }
}

impl Canvas for Renderer {
    fn size(&self) -> Viewport {
        Viewport::new(screen_width(), screen_height())
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        draw_rectangle(x, y, width, height, color);
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        draw_rectangle(x, y, width, height, self.clear_color);
    }

    fn fill_path(&mut self, points: &[Vec2], color: Color) {
        // Triangle fan around the first vertex
        if let Some((&first, rest)) = points.split_first() {
            for pair in rest.windows(2) {
                draw_triangle(first, pair[0], pair[1], color);
            }
        }
    }
}
