//! Application shell tying controls, renderer, and scheduler together.

mod event;

pub use event::{EventKind, InputEvent};

use crate::config::{AppConfig, ConfigError};
use crate::control::{Controller, TypeSelector};
use crate::patterns::PatternRegistry;
use crate::render::{DrawingSurface, FrameRenderer, FrameStats, Viewport};
use crate::schedule::{Clock, FrameScheduler, SystemClock};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// One running pattern view.
pub struct App<C: Clock = SystemClock> {
    config: AppConfig,
    controller: Controller,
    selector: TypeSelector,
    renderer: FrameRenderer,
    viewport: Viewport,
    listeners: Vec<EventKind>,
    initialized: bool,
    clock: C,
}

impl App<SystemClock> {
    /// Build an app on the wall clock.
    pub fn new(config: AppConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, SystemClock::new())
    }
}

impl<C: Clock> App<C> {
    pub fn with_clock(config: AppConfig, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let controller = Controller::new(
            PatternRegistry::builtin(),
            config.bounds,
            &config.initial_pattern,
            rng,
            clock.now_ms(),
        );
        let renderer = FrameRenderer::new(config.to_render_settings()?);
        let viewport = config.viewport();

        Ok(Self {
            config,
            controller,
            selector: TypeSelector::new(),
            renderer,
            viewport,
            listeners: Vec::new(),
            initialized: false,
            clock,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn selector(&self) -> &TypeSelector {
        &self.selector
    }

    /// Mutable access for host-side edits of the displayed list.
    pub fn selector_mut(&mut self) -> &mut TypeSelector {
        &mut self.selector
    }

    pub fn renderer(&self) -> &FrameRenderer {
        &self.renderer
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Number of listeners bound for `kind`.
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.iter().filter(|&&bound| bound == kind).count()
    }

    /// Bind listeners, populate the selector, apply the active type, size the
    /// surface and arm the first frame.
    ///
    /// Returns `false` without touching anything when already initialized.
    pub fn initialize<S, F>(&mut self, surface: &mut S, scheduler: &mut F) -> bool
    where
        S: DrawingSurface + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        if self.initialized {
            log::debug!("Ignoring repeated initialization");
            return false;
        }

        self.bind_listeners();
        let active = self.controller.state().active_type().to_string();
        self.populate_selector();
        self.controller.select_type(&active, self.clock.now_ms());
        let viewport = self.viewport;
        self.resize(viewport, surface);
        scheduler.schedule_next();

        self.initialized = true;
        log::info!(
            "Initialized with pattern '{}' ({} types)",
            active,
            self.controller.registry().len()
        );
        true
    }

    /// Rebuild the selector from the registry.
    pub fn populate_selector(&mut self) {
        let active = self.controller.state().active_type().to_string();
        self.selector.populate(self.controller.registry(), &active);
    }

    /// Route one input event. Returns whether it changed anything.
    pub fn handle_event<S: DrawingSurface + ?Sized>(&mut self, event: InputEvent, surface: &mut S) -> bool {
        if self.listener_count(event.kind()) == 0 {
            return false;
        }

        let now = self.clock.now_ms();
        match event {
            InputEvent::Resize {
                width,
                height,
                device_pixel_ratio,
            } => {
                self.resize(Viewport::new(width, height, device_pixel_ratio), surface);
                true
            }
            InputEvent::Click => {
                self.controller.reset_clock_and_hue(now);
                true
            }
            InputEvent::ParameterInput { field, raw } => match self.controller.set_parameter_text(field, &raw) {
                Ok(_) => true,
                Err(e) => {
                    log::warn!("Rejected input: {}", e);
                    false
                }
            },
            InputEvent::TypeChange(key) => {
                if self.controller.select_type(&key, now) {
                    self.selector.select(&key);
                    true
                } else {
                    false
                }
            }
            InputEvent::Randomize => {
                self.controller.randomize(now);
                true
            }
        }
    }

    /// Adopt a new viewport and resize the backing store.
    pub fn resize<S: DrawingSurface + ?Sized>(&mut self, viewport: Viewport, surface: &mut S) {
        self.viewport = viewport;
        self.renderer.apply_viewport(&viewport, surface);
        log::info!(
            "Resized to {}x{} @{}x",
            viewport.width,
            viewport.height,
            viewport.device_pixel_ratio
        );
    }

    /// One frame at timestamp `time` (ms), re-arming `scheduler`.
    pub fn frame<S, F>(&mut self, time: f64, surface: &mut S, scheduler: &mut F) -> FrameStats
    where
        S: DrawingSurface + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        self.renderer.tick(
            self.controller.state(),
            self.controller.registry(),
            &self.viewport,
            time,
            surface,
            scheduler,
        )
    }

    /// Initialize if needed, then render until the scheduler stops.
    ///
    /// Returns the number of frames rendered.
    pub fn run<S, F>(&mut self, surface: &mut S, scheduler: &mut F) -> u64
    where
        S: DrawingSurface + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        self.initialize(surface, scheduler);
        let mut frames = 0;
        while let Some(time) = scheduler.next_frame() {
            self.frame(time, surface, scheduler);
            frames += 1;
        }
        log::info!("Stopped after {} frames", frames);
        frames
    }

    fn bind_listeners(&mut self) {
        for kind in EventKind::all() {
            if !self.listeners.contains(&kind) {
                self.listeners.push(kind);
            }
        }
    }
}
