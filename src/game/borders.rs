use macroquad::prelude::{Color, Vec2};

use crate::error::GameError;

use super::{
    mapper::{letterbox, BorderRect, CoordinateMapper},
    renderer::Canvas,
    viewport::Viewport,
};

/// Letterbox bars around the play area.
///
/// Borders is the only writer of the coordinate mapper's transform, so the
/// rectangle and the transform are always derived from the same viewport.
pub struct Borders {
    rect: BorderRect,
    viewport: Viewport,
    colour: Color,
}

impl Borders {
    pub fn new(
        colour: Color,
        viewport: Viewport,
        level_size: Vec2,
        mapper: &mut CoordinateMapper,
    ) -> Result<Self, GameError> {
        let (transform, rect) = letterbox(viewport, level_size)?;
        mapper.set_transform(transform);
        Ok(Self {
            rect,
            viewport,
            colour,
        })
    }

    /// On error the previous rectangle and transform stay in place.
    pub fn recompute(
        &mut self,
        viewport: Viewport,
        level_size: Vec2,
        mapper: &mut CoordinateMapper,
    ) -> Result<(), GameError> {
        let (transform, rect) = letterbox(viewport, level_size)?;
        mapper.set_transform(transform);
        self.rect = rect;
        self.viewport = viewport;
        log::debug!(
            "letterbox for {}x{}: {:?}, scale {}",
            viewport.width,
            viewport.height,
            rect,
            transform.scale
        );
        Ok(())
    }

    #[cfg(test)]
    pub fn rect(&self) -> BorderRect {
        self.rect
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        canvas.fill_rect(
            0.0,
            0.0,
            self.viewport.width,
            self.viewport.height,
            self.colour,
        );
        canvas.clear_rect(
            self.rect.left,
            self.rect.top,
            self.rect.width(),
            self.rect.height(),
        );
    }
}

#[cfg(test)]
mod tests {
    use macroquad::prelude::{vec2, BLACK};

    use super::*;
    use crate::game::renderer::testing::{assert_close, DrawCall, RecordingCanvas};

    #[test]
    fn new_initializes_mapper() {
        let mut mapper = CoordinateMapper::new();
        let borders = Borders::new(
            BLACK,
            Viewport::new(1600.0, 900.0),
            vec2(200.0, 100.0),
            &mut mapper,
        )
        .unwrap();
        let transform = mapper.transform().unwrap();
        assert_close(transform.x_offset, borders.rect().left);
        assert_close(transform.y_offset, borders.rect().top);
    }

    #[test]
    fn recompute_follows_resize() {
        let mut mapper = CoordinateMapper::new();
        let level_size = vec2(200.0, 100.0);
        let mut borders =
            Borders::new(BLACK, Viewport::new(1600.0, 900.0), level_size, &mut mapper).unwrap();
        borders
            .recompute(Viewport::new(1600.0, 400.0), level_size, &mut mapper)
            .unwrap();
        assert_close(borders.rect().top, 25.0);
        assert_close(mapper.scale().unwrap(), 3.5);
    }

    #[test]
    fn failed_recompute_keeps_previous_state() {
        let mut mapper = CoordinateMapper::new();
        let level_size = vec2(200.0, 100.0);
        let mut borders =
            Borders::new(BLACK, Viewport::new(1600.0, 900.0), level_size, &mut mapper).unwrap();
        let before = borders.rect();
        assert!(borders
            .recompute(Viewport::new(1600.0, 0.0), level_size, &mut mapper)
            .is_err());
        assert_eq!(borders.rect(), before);
        assert_close(mapper.scale().unwrap(), 7.0);
    }

    #[test]
    fn draw_fills_viewport_then_clears_play_area() {
        let mut mapper = CoordinateMapper::new();
        let borders = Borders::new(
            BLACK,
            Viewport::new(1600.0, 900.0),
            vec2(200.0, 100.0),
            &mut mapper,
        )
        .unwrap();
        let mut canvas = RecordingCanvas::new(1600.0, 900.0);
        borders.draw(&mut canvas);

        assert_eq!(
            canvas.calls,
            vec![
                DrawCall::FillRect {
                    x: 0.0,
                    y: 0.0,
                    width: 1600.0,
                    height: 900.0,
                    color: BLACK,
                },
                DrawCall::ClearRect {
                    x: 100.0,
                    y: 100.0,
                    width: 1400.0,
                    height: 700.0,
                },
            ]
        );
    }
}
