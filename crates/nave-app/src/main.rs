use std::sync::OnceLock;

use macroquad::window::Conf;

use nave_app::config::{self, AppConfig};
use nave_app::game_loop;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Logging is set up on first use so the config load itself is logged.
fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        config::load_or_default(config::config_path())
    })
}

fn window_conf() -> Conf {
    let config = app_config();
    Conf {
        window_title: config.window.title.clone(),
        window_width: config.sim.canvas.width as i32,
        window_height: config.sim.canvas.height as i32,
        high_dpi: config.window.high_dpi,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    game_loop::run(app_config().clone()).await;
}
