mod shader;
mod window;

use morphcloud::blessing::StaticBlessings;
#[cfg(feature = "gemini")]
use morphcloud::blessing::GeminiBlessings;
use morphcloud::{BlessingDesk, BlessingError, BlessingReply, BlessingSource, ConfigError, Scene, SceneConfig, ShapeId};
use thiserror::Error;
use winit::event_loop::{ControlFlow, EventLoop};

#[derive(Debug, Error)]
enum ViewerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("event loop failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}

/// Blessing text for the viewer: Gemini when a key is configured,
/// canned text otherwise.
pub enum ViewerSource {
    Offline(StaticBlessings),
    #[cfg(feature = "gemini")]
    Gemini(GeminiBlessings),
}

impl ViewerSource {
    fn from_env() -> Self {
        #[cfg(feature = "gemini")]
        {
            let gemini = GeminiBlessings::from_env(None);
            if gemini.has_api_key() {
                log::info!("using Gemini for blessings");
                return ViewerSource::Gemini(gemini);
            }
        }
        ViewerSource::Offline(StaticBlessings)
    }
}

impl BlessingSource for ViewerSource {
    async fn request(&self, shape: ShapeId) -> Result<BlessingReply, BlessingError> {
        match self {
            ViewerSource::Offline(source) => source.request(shape).await,
            #[cfg(feature = "gemini")]
            ViewerSource::Gemini(source) => source.request(shape).await,
        }
    }
}

fn run() -> Result<(), ViewerError> {
    let config = match std::env::args().nth(1) {
        Some(path) => SceneConfig::load(path)?,
        None => SceneConfig::default(),
    };

    let scene = Scene::new(config)?;
    let desk = BlessingDesk::new(ViewerSource::from_env());
    desk.submit(scene.current_ticket());

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = window::App::new(scene, desk);
    event_loop.run_app(&mut app)?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
