use macroquad::prelude::{next_frame, Conf};

mod config;
mod constants;
mod error;
mod game;
mod logging;

use config::GameConfig;
use error::GameError;
use game::{input::poll_events, Canvas, Game, Renderer};
use logging::LoggingConfig;

fn window_conf() -> Conf {
    GameConfig::default().window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    logging::init_logging(LoggingConfig::default());

    let config = GameConfig::default();
    let mut renderer = Renderer::new(config.clear_colour);
    let mut game = match Game::new(config, renderer.size()) {
        Ok(game) => game,
        Err(error) => {
            log::error!("could not start: {}", error);
            return;
        }
    };

    if let Err(error) = game.load_room(0) {
        log::warn!("starting without a room: {}", error);
    }

    let mut pointer = None;

    loop {
        for event in poll_events(&mut pointer) {
            game.handle_event(event);
        }

        let viewport = renderer.size();
        if viewport != game.viewport() {
            match game.resize(viewport) {
                Ok(()) => {}
                Err(error @ GameError::DegenerateViewport { .. }) => {
                    // Minimized window, wait for a usable size
                    log::debug!("skipping frame: {}", error);
                    next_frame().await;
                    continue;
                }
                Err(error) => {
                    log::error!("{}", error);
                    break;
                }
            }
        }

        if let Err(error) = game.frame(&mut renderer) {
            log::error!("frame failed: {}", error);
            break;
        }

        next_frame().await;
    }
}
