//! Scene orchestration: shape selection, animation and blessing delivery.
//!
//! [`Scene`] ties the sampler and the animator together and tracks which
//! blessing belongs to the current selection. Each selection hands out a
//! [`BlessingTicket`]; replies carrying an older ticket are dropped, so a slow
//! response can never overwrite the text of a newer shape.
//!
//! [`BlessingDesk`] runs blessing requests on worker threads and hands the
//! results back over a channel, keeping the render loop non-blocking.
//!
//! ```ignore
//! let mut scene = Scene::new(SceneConfig::default())?;
//! let desk = BlessingDesk::new(StaticBlessings);
//! desk.submit(scene.current_ticket());
//!
//! // on click:
//! desk.submit(scene.next_shape(clock.elapsed()));
//!
//! // every frame:
//! scene.receive(&desk);
//! scene.tick(elapsed, delta);
//! ```

use crate::animator::ParticleAnimator;
use crate::blessing::{request_blessing, Blessing, BlessingSource};
use crate::cloud::PointCloud;
use crate::config::SceneConfig;
use crate::error::ConfigError;
use crate::shape::ShapeId;
use crate::shapes::generate_with;
use crate::spawn::SpawnContext;
use crossbeam_channel::{Receiver, Sender};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Identifies the selection a blessing request was made for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlessingTicket {
    pub generation: u64,
    pub shape: ShapeId,
}

/// The animated point cloud plus the blessing for the active shape.
pub struct Scene {
    config: SceneConfig,
    animator: ParticleAnimator,
    active: ShapeId,
    generation: u64,
    blessing: Option<Blessing>,
    rng: SmallRng,
}

impl Scene {
    /// Build a scene resting on the configured initial shape.
    pub fn new(config: SceneConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let shape = config.initial_shape;
        let initial = sample(shape, config.particle_count);
        let animator = ParticleAnimator::new(shape, initial, config.animator.clone());

        Ok(Self {
            config,
            animator,
            active: shape,
            generation: 0,
            blessing: None,
            rng: SmallRng::from_entropy(),
        })
    }

    /// Switch to `shape`. Reselecting the active shape restarts its transition.
    pub fn select_shape(&mut self, shape: ShapeId, elapsed: f32) -> BlessingTicket {
        let target = sample(shape, self.config.particle_count);
        self.animator.on_shape_selected(shape, target, elapsed);
        self.active = shape;
        self.generation += 1;
        log::info!("shape -> {}{}", shape, if shape.is_rare() { " (rare)" } else { "" });
        self.current_ticket()
    }

    /// Switch to a weighted random shape other than the active one.
    pub fn next_shape(&mut self, elapsed: f32) -> BlessingTicket {
        let next = self.config.weights.pick_next(self.active, &mut self.rng);
        self.select_shape(next, elapsed)
    }

    /// Ticket for the active selection.
    pub fn current_ticket(&self) -> BlessingTicket {
        BlessingTicket {
            generation: self.generation,
            shape: self.active,
        }
    }

    /// Store `blessing` if `ticket` is still current. Returns whether it was kept.
    pub fn accept_blessing(&mut self, ticket: BlessingTicket, blessing: Blessing) -> bool {
        if ticket != self.current_ticket() {
            log::debug!(
                "dropping stale blessing for {} (generation {} < {})",
                ticket.shape,
                ticket.generation,
                self.generation
            );
            return false;
        }
        self.blessing = Some(blessing);
        true
    }

    /// Accept every reply the desk has delivered so far.
    ///
    /// Returns the current blessing if one of the replies was kept.
    pub fn receive<S>(&mut self, desk: &BlessingDesk<S>) -> Option<&Blessing>
    where
        S: BlessingSource + Send + Sync + 'static,
    {
        let mut updated = false;
        for (ticket, blessing) in desk.poll() {
            updated |= self.accept_blessing(ticket, blessing);
        }
        if updated {
            self.blessing.as_ref()
        } else {
            None
        }
    }

    #[inline]
    pub fn tick(&mut self, elapsed: f32, delta: f32) {
        self.animator.tick(elapsed, delta);
    }

    #[inline]
    pub fn active_shape(&self) -> ShapeId {
        self.active
    }

    /// True while the rare shape is on screen.
    #[inline]
    pub fn is_rare_drop(&self) -> bool {
        self.active.is_rare()
    }

    #[inline]
    pub fn current_blessing(&self) -> Option<&Blessing> {
        self.blessing.as_ref()
    }

    #[inline]
    pub fn animator(&self) -> &ParticleAnimator {
        &self.animator
    }

    #[inline]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }
}

fn sample(shape: ShapeId, count: usize) -> PointCloud {
    let mut ctx = SpawnContext::new(count);
    generate_with(shape, &mut ctx)
}

/// Runs blessing requests off the render thread.
pub struct BlessingDesk<S> {
    source: Arc<S>,
    tx: Sender<(BlessingTicket, Blessing)>,
    rx: Receiver<(BlessingTicket, Blessing)>,
}

impl<S> BlessingDesk<S>
where
    S: BlessingSource + Send + Sync + 'static,
{
    pub fn new(source: S) -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self {
            source: Arc::new(source),
            tx,
            rx,
        }
    }

    /// Start a request for `ticket` on a worker thread.
    pub fn submit(&self, ticket: BlessingTicket) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();

        let spawned = thread::Builder::new()
            .name(format!("blessing-{}", ticket.generation))
            .spawn(move || {
                let blessing = pollster::block_on(request_blessing(&*source, ticket.shape));
                // The desk may already be gone; nobody is waiting then.
                let _ = tx.send((ticket, blessing));
            });

        if let Err(e) = spawned {
            log::error!("failed to spawn blessing worker: {}", e);
            let _ = self.tx.send((ticket, Blessing::fallback(ticket.shape)));
        }
    }

    /// Replies delivered so far, without blocking.
    pub fn poll(&self) -> Vec<(BlessingTicket, Blessing)> {
        self.rx.try_iter().collect()
    }

    /// Block until the next reply arrives or `timeout` passes.
    pub fn wait(&self, timeout: Duration) -> Option<(BlessingTicket, Blessing)> {
        self.rx.recv_timeout(timeout).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnimatorConfig;

    fn small_scene() -> Scene {
        let config = SceneConfig::default()
            .with_particle_count(120)
            .with_animator(AnimatorConfig::default().with_glow(20, 6));
        Scene::new(config).unwrap()
    }

    #[test]
    fn test_generation_advances_per_selection() {
        let mut scene = small_scene();
        assert_eq!(scene.current_ticket().generation, 0);
        let t1 = scene.select_shape(ShapeId::Bell, 0.0);
        let t2 = scene.select_shape(ShapeId::Bell, 0.1);
        assert_eq!(t1.generation, 1);
        assert_eq!(t2.generation, 2);
        assert_eq!(t2.shape, ShapeId::Bell);
    }

    #[test]
    fn test_stale_blessing_dropped() {
        let mut scene = small_scene();
        let old = scene.select_shape(ShapeId::Bell, 0.0);
        let new = scene.select_shape(ShapeId::Diamond, 0.5);

        assert!(!scene.accept_blessing(old, Blessing::fallback(ShapeId::Bell)));
        assert!(scene.current_blessing().is_none());

        assert!(scene.accept_blessing(new, Blessing::fallback(ShapeId::Diamond)));
        assert_eq!(scene.current_blessing().unwrap().shape, ShapeId::Diamond);
        assert!(scene.is_rare_drop());
    }

    #[test]
    fn test_next_shape_changes_shape() {
        let mut scene = small_scene();
        for i in 0..20 {
            let before = scene.active_shape();
            let ticket = scene.next_shape(i as f32);
            assert_ne!(ticket.shape, before);
            assert_eq!(scene.active_shape(), ticket.shape);
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SceneConfig::default().with_particle_count(0);
        assert!(Scene::new(config).is_err());
    }
}
