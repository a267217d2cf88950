use std::f32::consts::PI;
use std::time::Duration;
use crate::slide::Panel;
use crate::transition::{Transition, TransitionMode};

/// Stacks the incoming panel above the others and fades it in. The outgoing
/// panel stays visible underneath until the fade has finished.
#[derive(Debug, Clone)]
pub struct LayeredFade {
    z_index_offset: i32,
    duration: Duration,
    fades: Vec<Fade>,
}

#[derive(Debug, Clone)]
struct Fade {
    panel: usize,
    outgoing: usize,
    from_hidden: bool,
    elapsed: Duration,
}

// Ease curve for the fade-in, slow at both ends
fn swing(progress: f32) -> f32 {
    0.5 - (progress * PI).cos() / 2.0
}

impl LayeredFade {
    pub fn new(z_index_offset: i32, duration: Duration) -> Self {
        Self {
            z_index_offset,
            duration,
            fades: Vec::new(),
        }
    }

    pub fn base_layer(&self) -> i32 {
        self.z_index_offset + 1
    }

    pub fn top_layer(&self) -> i32 {
        self.z_index_offset + 2
    }

    pub fn is_fading(&self) -> bool {
        !self.fades.is_empty()
    }

    fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}

impl Transition for LayeredFade {
    fn mode(&self) -> TransitionMode {
        TransitionMode::LayeredFade
    }

    fn prepare(&mut self, panels: &mut [Panel], current: usize) {
        let (base, top) = (self.base_layer(), self.top_layer());

        for panel in panels.iter_mut() {
            panel.z_index = base;
            panel.hide();
        }
        if let Some(panel) = panels.get_mut(current) {
            panel.z_index = top;
            panel.opacity = 1.0;
            panel.show();
        }
    }

    fn show(&mut self, panels: &mut [Panel], outgoing: usize, current: usize) {
        let (base, top) = (self.base_layer(), self.top_layer());

        for panel in panels.iter_mut() {
            panel.z_index = base;
        }

        // Nothing to fade in, so the outgoing panel is never retired either
        let Some(panel) = panels.get_mut(current) else {
            return;
        };

        panel.z_index = top;
        let from_hidden = !panel.visible;
        if from_hidden {
            panel.opacity = 0.0;
            panel.show();
        }

        self.fades.push(Fade {
            panel: current,
            outgoing,
            from_hidden,
            elapsed: Duration::ZERO,
        });
    }

    fn update(&mut self, panels: &mut [Panel], dt: Duration) {
        let mut fades = std::mem::take(&mut self.fades);

        fades.retain_mut(|fade| {
            fade.elapsed += dt;
            let progress = self.progress(fade.elapsed);

            if fade.from_hidden {
                if let Some(panel) = panels.get_mut(fade.panel) {
                    panel.opacity = if progress < 1.0 { swing(progress) } else { 1.0 };
                }
            }

            if progress < 1.0 {
                return true;
            }

            if let Some(panel) = panels.get_mut(fade.outgoing) {
                panel.hide();
            }
            log::debug!("Fade of panel {} complete, hid panel {}", fade.panel, fade.outgoing);
            false
        });

        self.fades = fades;
    }
}
