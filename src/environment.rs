// --- Host capabilities ---
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Environment {
    pub supports_transitions: bool,
    pub touch_primary: bool,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            supports_transitions: true,
            touch_primary: false,
        }
    }
}

// --- Events ---
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Load,         // Fires once, when the host has laid out the panels
    Resize,
    PointerEnter,
    PointerLeave,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Listeners {
    pub load: bool,
    pub resize: bool,
    pub hover: bool,
}

impl Listeners {
    pub fn contains(&self, event: Event) -> bool {
        match event {
            Event::Load => self.load,
            Event::Resize => self.resize,
            Event::PointerEnter | Event::PointerLeave => self.hover,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.load || self.resize || self.hover)
    }
}
