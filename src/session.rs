use std::time::Instant;

use glam::Vec2;
use log::{debug, warn};

use crate::{
    config::{ConfigError, SandboxConfig, MAX_CATCH_UP_TICKS},
    core::{
        particle::Particle,
        types::{Viewport, WorldBounds},
    },
    dynamics::integrator::Integrator,
    hud::HudStats,
    input::{Controls, Hotkey, KeyboardState, ThrustIntent},
    utils::{
        allocator::{Arena, ParticleId},
        profiling::{check_tick_budget, FpsCounter, ScopedTimer, TickProfile},
    },
    view::{Camera, EdgeGradient, Vignette, WorldGrid},
};

/// Running/paused state of the outer frame loop.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameLoop {
    is_animating: bool,
}

impl FrameLoop {
    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    /// Returns `false` when already running.
    pub fn start(&mut self) -> bool {
        if self.is_animating {
            return false;
        }
        self.is_animating = true;
        true
    }

    pub fn stop(&mut self) {
        self.is_animating = false;
    }

    pub fn toggle(&mut self) {
        self.is_animating = !self.is_animating;
    }
}

/// Per-tick outputs consumed by rendering and HUD code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutput {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub computed_speed: f32,
    pub computed_acceleration: f32,
    pub camera: Vec2,
}

/// One simulation session: a single tracked particle in a fixed world.
///
/// The session is the only writer of the particle and the camera. Each tick
/// collects input, integrates motion, then updates the camera.
pub struct Session {
    pub config: SandboxConfig,
    pub particles: Arena<Particle>,
    pub integrator: Integrator,
    pub camera: Camera,
    pub viewport: Viewport,
    pub controls: Controls,
    pub vignette: Vignette,
    pub grid: WorldGrid,
    pub stats_visible: bool,
    keyboard: KeyboardState,
    intent: ThrustIntent,
    main_particle: ParticleId,
    frame_loop: FrameLoop,
    fps: FpsCounter,
    profile: TickProfile,
    time_accumulated: f32,
}

impl Session {
    /// Validates `config` and spawns the tracked particle at the world center,
    /// with the camera centered on it.
    pub fn new(config: SandboxConfig, viewport: Viewport) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut particles = Arena::new();
        let main_particle = particles.insert(Particle::new(config.world.center(), config.particle));
        if let Some(stored) = particles.get_mut(main_particle) {
            stored.id = main_particle;
        }

        let mut camera = Camera::new(config.deadzone_coefficient, config.pixels_per_unit);
        camera.overflow_world_boundaries = config.overflow_world_boundaries;
        camera.center_on(config.world.center(), &viewport);
        camera.follow(main_particle);

        debug!(
            "session created: world {}x{}, viewport {}x{}",
            config.world.width(),
            config.world.height(),
            viewport.width,
            viewport.height
        );

        Ok(Self {
            integrator: Integrator::from_config(&config),
            grid: WorldGrid::new(config.grid_spacing, config.grid_line_width),
            fps: FpsCounter::new(config.fps_sample_interval),
            particles,
            camera,
            viewport,
            controls: Controls::default(),
            vignette: Vignette::default(),
            stats_visible: true,
            keyboard: KeyboardState::new(),
            intent: ThrustIntent::default(),
            main_particle,
            frame_loop: FrameLoop::default(),
            profile: TickProfile::default(),
            time_accumulated: 0.0,
            config,
        })
    }

    pub fn world(&self) -> &WorldBounds {
        &self.config.world
    }

    pub fn main_particle_id(&self) -> ParticleId {
        self.main_particle
    }

    pub fn main_particle(&self) -> Option<&Particle> {
        self.particles.get(self.main_particle)
    }

    pub fn main_particle_mut(&mut self) -> Option<&mut Particle> {
        self.particles.get_mut(self.main_particle)
    }

    /// Handle for input-event sources; writes are seen by the next tick.
    pub fn keyboard(&self) -> KeyboardState {
        self.keyboard.clone()
    }

    /// Queues a directional intent for the next tick, alongside key bindings.
    pub fn push_thrust(&mut self, direction: Vec2) {
        self.intent.push(direction);
    }

    /// Records a key-down and fires any hotkey it activates.
    pub fn key_down(&mut self, key: &str) -> Vec<Hotkey> {
        self.keyboard.press(key);
        let fired = self.controls.active_hotkeys(&self.keyboard);
        for hotkey in &fired {
            match hotkey {
                Hotkey::TogglePause => self.toggle(),
            }
        }
        fired
    }

    pub fn key_up(&mut self, key: &str) {
        self.keyboard.release(key);
    }

    pub fn is_animating(&self) -> bool {
        self.frame_loop.is_animating()
    }

    pub fn start(&mut self) {
        if self.frame_loop.start() {
            debug!("frame loop started");
        }
    }

    pub fn stop(&mut self) {
        self.frame_loop.stop();
        debug!("frame loop stopped");
    }

    pub fn toggle(&mut self) {
        self.frame_loop.toggle();
        debug!("frame loop toggled, animating = {}", self.is_animating());
    }

    pub fn resize_viewport(&mut self, viewport: Viewport) {
        debug!("viewport resized to {}x{}", viewport.width, viewport.height);
        self.viewport = viewport;
    }

    pub fn set_overflow_world_boundaries(&mut self, overflow: bool) {
        debug!("camera overflow set to {overflow}");
        self.camera.overflow_world_boundaries = overflow;
    }

    /// Runs one tick if the frame loop is animating. Returns whether it ran.
    pub fn frame(&mut self, now: Instant) -> bool {
        if !self.frame_loop.is_animating() {
            return false;
        }
        self.fps.record_frame(now);
        self.tick();
        true
    }

    /// Runs as many fixed ticks as fit in the accumulated elapsed time, at most
    /// [`MAX_CATCH_UP_TICKS`] per call. Time beyond that cap is dropped.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        if !(elapsed.is_finite() && elapsed > 0.0) {
            return 0;
        }
        self.time_accumulated += elapsed;

        let step = self.config.time_step;
        let due = (self.time_accumulated / step).floor();
        let ticks = if due > MAX_CATCH_UP_TICKS as f32 {
            warn!(
                "dropping {:.3} time units of backlog, running {MAX_CATCH_UP_TICKS} ticks",
                self.time_accumulated - MAX_CATCH_UP_TICKS as f32 * step
            );
            self.time_accumulated = 0.0;
            MAX_CATCH_UP_TICKS
        } else {
            self.time_accumulated = (self.time_accumulated - due * step).max(0.0);
            due as u32
        };

        for _ in 0..ticks {
            self.tick();
        }
        ticks
    }

    /// Advances the simulation by exactly one fixed timestep.
    pub fn tick(&mut self) {
        let started = Instant::now();

        self.controls.collect_thrust(&self.keyboard, &mut self.intent);
        let thrust = self.intent.take();

        {
            let _timer = ScopedTimer::new("integrate", &mut self.profile.integrate_time);
            let world = self.config.world;
            if let Some(particle) = self.particles.get_mut(self.main_particle) {
                particle.add_thrust(thrust);
                self.integrator.step(particle, &world);
            }
        }

        {
            let _timer = ScopedTimer::new("camera", &mut self.profile.camera_time);
            let target_position = self
                .camera
                .target
                .and_then(|id| self.particles.get(id))
                .map(|particle| particle.position);
            self.camera
                .update(target_position, &self.config.world, &self.viewport);
        }

        let elapsed = started.elapsed();
        self.profile.total_time += elapsed;
        self.profile.ticks += 1;
        check_tick_budget(elapsed, self.config.frame_budget_ms);
    }

    pub fn output(&self) -> Option<TickOutput> {
        self.main_particle().map(|particle| TickOutput {
            position: particle.position,
            velocity: particle.velocity,
            acceleration: particle.acceleration,
            computed_speed: particle.computed_speed,
            computed_acceleration: particle.computed_acceleration,
            camera: self.camera.position,
        })
    }

    /// Stats for the overlay, or `None` when hidden.
    pub fn hud_stats(&self) -> Option<HudStats> {
        if !self.stats_visible {
            return None;
        }
        self.main_particle()
            .map(|particle| HudStats::capture(particle, self.is_animating(), self.fps.fps()))
    }

    pub fn vignette_gradients(&self) -> Option<(EdgeGradient, EdgeGradient)> {
        self.vignette
            .gradients(&self.viewport, self.camera.deadzone_width(&self.viewport))
    }

    pub fn profile(&self) -> &TickProfile {
        &self.profile
    }

    pub fn reset_profile(&mut self) {
        self.profile.reset();
    }
}
