use std::time::Duration;
use crate::slide::Panel;
use crate::transition::{Transition, TransitionMode};

// Moves the `active` marker; the host's styling animates the change.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassToggle;

impl Transition for ClassToggle {
    fn mode(&self) -> TransitionMode {
        TransitionMode::ClassToggle
    }

    fn prepare(&mut self, panels: &mut [Panel], current: usize) {
        if let Some(panel) = panels.get_mut(current) {
            panel.active = true;
        }
    }

    fn show(&mut self, panels: &mut [Panel], _outgoing: usize, current: usize) {
        for panel in panels.iter_mut() {
            panel.active = false;
        }
        if let Some(panel) = panels.get_mut(current) {
            panel.active = true;
        }
    }

    fn update(&mut self, _panels: &mut [Panel], _dt: Duration) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panels(count: usize) -> Vec<Panel> {
        (0..count).map(|_| Panel::new(100.0)).collect()
    }

    #[test]
    fn exactly_one_panel_is_active() {
        let mut panels = panels(4);
        let mut transition = ClassToggle;

        transition.prepare(&mut panels, 0);
        transition.show(&mut panels, 0, 1);
        transition.show(&mut panels, 1, 2);

        let active: Vec<usize> = panels.iter().enumerate().filter(|(_, p)| p.active).map(|(i, _)| i).collect();
        assert_eq!(active, vec![2]);
    }

    #[test]
    fn out_of_range_cursor_clears_every_marker() {
        let mut panels = panels(3);
        let mut transition = ClassToggle;

        transition.prepare(&mut panels, 0);
        transition.show(&mut panels, 1, 7);

        assert!(panels.iter().all(|p| !p.active));
    }
}
