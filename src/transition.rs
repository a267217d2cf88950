use std::fmt::Debug;
use std::time::Duration;
use crate::environment::Environment;
use crate::options::RotatorOptions;
use crate::slide::Panel;

pub mod class_toggle;
pub mod layered_fade;

use class_toggle::ClassToggle;
use layered_fade::LayeredFade;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionMode {
    ClassToggle,
    LayeredFade,
}

/// How a slide change is presented. Chosen once per rotator.
pub trait Transition: Debug {
    fn mode(&self) -> TransitionMode;

    /// Initial styling, applied once when the rotator is built.
    fn prepare(&mut self, panels: &mut [Panel], current: usize);

    /// Presents `current`; `outgoing` is the panel to retire once the change settles.
    fn show(&mut self, panels: &mut [Panel], outgoing: usize, current: usize);

    /// Advances any animation still in flight.
    fn update(&mut self, panels: &mut [Panel], dt: Duration);
}

pub fn select(environment: &Environment, options: &RotatorOptions) -> Box<dyn Transition> {
    if environment.supports_transitions {
        Box::new(ClassToggle)
    } else {
        Box::new(LayeredFade::new(options.z_index_offset, options.duration))
    }
}
