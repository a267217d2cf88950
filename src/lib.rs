//! Cycles a container's panels through a visible/hidden rotation on a timer,
//! with optional pause on hover and either class-toggled or layered-fade
//! transitions.
//!
//! The library is host agnostic: the host builds [`Panel`]s, binds a
//! [`Rotator`] per container through a [`Registry`], forwards [`Event`]s and
//! frame time, and renders the resulting panel state. The `render` module is
//! the raylib host used by the `rotator` binary.

pub mod config;
pub mod constants;
pub mod environment;
pub mod options;
pub mod registry;
pub mod render;
pub mod rotator;
pub mod slide;
pub mod state;
pub mod texture_loader;
pub mod timer;
pub mod transition;

pub use environment::{Environment, Event};
pub use options::{OptionOverrides, RotatorOptions};
pub use registry::Registry;
pub use rotator::Rotator;
pub use slide::{Container, Panel};
pub use state::RotatorState;
pub use transition::TransitionMode;
