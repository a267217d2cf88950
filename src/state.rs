#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RotatorState {
    Stopped, // No timer armed
    Running, // A repeating timer advances the slides
}
