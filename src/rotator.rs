use std::time::Duration;
use crate::environment::{Environment, Event, Listeners};
use crate::options::RotatorOptions;
use crate::slide::{Container, Panel};
use crate::state::RotatorState;
use crate::timer::RepeatingTimer;
use crate::transition::{self, Transition, TransitionMode};

/// Cycles a fixed set of panels on a repeating timer.
///
/// The host feeds it events through [`Rotator::handle_event`] and frame time
/// through [`Rotator::update`], then renders from [`Rotator::panels`] and
/// [`Rotator::container`]. With fewer than two panels the rotator is inert and
/// every operation does nothing.
#[derive(Debug)]
pub struct Rotator {
    panels: Vec<Panel>,
    current: usize,

    options: RotatorOptions,
    environment: Environment,
    transition: Box<dyn Transition>,

    container: Container,
    listeners: Listeners,
    timer: Option<RepeatingTimer>,
}

impl Rotator {
    pub fn new(panels: Vec<Panel>, options: RotatorOptions, environment: Environment) -> Self {
        let transition = transition::select(&environment, &options);

        let mut rotator = Self {
            panels,
            current: 0,
            options,
            environment,
            transition,
            container: Container::default(),
            listeners: Listeners::default(),
            timer: None,
        };

        if !rotator.is_inert() {
            rotator.init();
        }
        rotator
    }

    fn init(&mut self) {
        self.transition.prepare(&mut self.panels, self.current);

        self.listeners.load = true;
        self.listeners.hover = self.options.pause && !self.environment.touch_primary;
        self.listeners.resize = true;

        log::debug!(
            "Rotator initialized with {} panels in {:?} mode (hover pause: {})",
            self.panels.len(),
            self.transition.mode(),
            self.listeners.hover
        );
    }

    pub fn is_inert(&self) -> bool {
        self.panels.len() <= 1
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Panels stay fixed in number; the host may only update what it measures.
    pub fn panels_mut(&mut self) -> &mut [Panel] {
        &mut self.panels
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn options(&self) -> &RotatorOptions {
        &self.options
    }

    pub fn mode(&self) -> TransitionMode {
        self.transition.mode()
    }

    pub fn listens_to(&self, event: Event) -> bool {
        self.listeners.contains(event)
    }

    pub fn has_listeners(&self) -> bool {
        !self.listeners.is_empty()
    }

    pub fn state(&self) -> RotatorState {
        if self.timer.is_some() {
            RotatorState::Running
        } else {
            RotatorState::Stopped
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == RotatorState::Running
    }

    fn last_index(&self) -> usize {
        self.panels.len() - 1
    }

    pub fn handle_event(&mut self, event: Event) {
        if !self.listeners.contains(event) {
            return;
        }

        match event {
            Event::Load => {
                self.listeners.load = false;
                self.container.ready = true;
                self.set_height();
                self.start();
                log::info!("Rotator ready, showing panel {}", self.current);
            }
            Event::Resize => self.set_height(),
            Event::PointerEnter => self.stop(),
            Event::PointerLeave => self.start(),
        }
    }

    /// Arms the repeating timer, replacing any timer already running.
    pub fn start(&mut self) {
        if self.is_inert() {
            return;
        }

        self.timer = None;

        if self.options.auto {
            self.timer = Some(RepeatingTimer::new(self.options.interval));
            log::debug!("Timer armed every {:?}", self.options.interval);
        }
    }

    pub fn stop(&mut self) {
        if self.timer.take().is_some() {
            log::debug!("Timer cancelled");
        }
    }

    pub fn next_slide(&mut self) {
        if self.is_inert() {
            return;
        }

        let slide = if self.current == self.last_index() { 0 } else { self.current.wrapping_add(1) };
        self.change_slide(slide);
    }

    pub fn previous_slide(&mut self) {
        if self.is_inert() {
            return;
        }

        let slide = if self.current == 0 { self.last_index() } else { self.current - 1 };
        self.change_slide(slide);
    }

    /// Shows `slide`. The cursor is not clamped.
    ///
    /// The panel retired once the change settles is derived from `slide`
    /// alone, assuming the previous panel was its neighbour:
    /// `slide - 1`, or the last panel when `slide` is 0, or the one before the
    /// last panel when `slide` is past the end.
    pub fn change_slide(&mut self, slide: usize) {
        if self.is_inert() {
            return;
        }

        let last = self.last_index();
        let outgoing = if slide > last {
            last - 1
        } else if slide == 0 {
            last
        } else {
            slide - 1
        };

        self.current = slide;
        self.transition.show(&mut self.panels, outgoing, self.current);

        log::debug!("Changed to panel {} (retiring panel {})", self.current, outgoing);
    }

    /// Fixes the container height to the current panel's rendered height.
    pub fn set_height(&mut self) {
        if self.is_inert() {
            return;
        }

        if let Some(panel) = self.panels.get(self.current) {
            self.container.height = Some(panel.height);
        }
    }

    // Whole laps bring an in-range cursor back where it was, so at most one
    // lap plus the remainder is replayed.
    fn steps_for(&self, fired: u64) -> u64 {
        let len = self.panels.len() as u64;
        if self.current < self.panels.len() && fired > len {
            len + fired % len
        } else {
            fired
        }
    }

    /// Advances the timer and any running transition by `dt`.
    pub fn update(&mut self, dt: Duration) {
        let fired = self.timer.as_mut().map_or(0, |timer| timer.tick(dt));
        for _ in 0..self.steps_for(fired) {
            self.next_slide();
        }

        self.transition.update(&mut self.panels, dt);
    }
}
