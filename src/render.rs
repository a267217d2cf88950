use std::path::PathBuf;
use raylib::prelude::*;
use crate::constants::*;
use crate::environment::Event;
use crate::rotator::Rotator;
use crate::slide::Panel;
use crate::texture_loader::load_texture_with_exif_rotation;
use crate::transition::TransitionMode;

// Stylesheet rule for class-toggled panels: opacity eases toward 1 while the
// panel carries the active marker and toward 0 otherwise.
struct PanelStyle {
    active: bool,
    opacity: f32,
    tween: Option<ease::Tween>,
}

impl PanelStyle {
    fn new(panel: &Panel) -> Self {
        Self {
            active: panel.active,
            opacity: if panel.active { 1.0 } else { 0.0 },
            tween: None,
        }
    }

    fn apply(&mut self, panel: &Panel, dt: f32) -> f32 {
        if panel.active != self.active {
            self.active = panel.active;
            let target = if panel.active { 1.0 } else { 0.0 };
            self.tween = Some(ease::Tween::new(ease::sine_in_out, self.opacity, target, STYLE_TRANSITION));
        }
        if let Some(tween) = self.tween.as_mut() {
            self.opacity = tween.apply(dt);
        }
        self.opacity
    }
}

// Raylib host: owns the textures behind the panels, turns window input into
// rotator events and draws the container.
pub struct Stage {
    textures: Vec<Texture2D>,
    styles: Vec<PanelStyle>,
    hovered: bool,
}

fn rendered_height(texture: &Texture2D, width: f32) -> f32 {
    texture.height() as f32 * width / texture.width().max(1) as f32
}

// Raylib keeps reporting the last in-window position once the cursor has left,
// so the container only counts as hovered while the cursor is on screen.
fn is_hovering(on_screen: bool, mouse: Vector2, width: f32, height: f32) -> bool {
    on_screen && mouse.x >= 0.0 && mouse.y >= 0.0 && mouse.x < width && mouse.y < height
}

// An inert rotator never becomes ready; its single panel is shown as is.
fn shows_loading_notice(rotator: &Rotator) -> bool {
    !rotator.is_inert() && !rotator.container().ready
}

impl Stage {
    pub fn load(rl: &mut RaylibHandle, thread: &RaylibThread, paths: &[PathBuf]) -> Self {
        let mut textures = Vec::new();
        for path in paths {
            match load_texture_with_exif_rotation(rl, thread, path) {
                Ok(texture) => textures.push(texture),
                Err(e) => log::warn!("Skipping image: {}", e),
            }
        }
        log::info!("Loaded {} of {} images", textures.len(), paths.len());

        Self {
            textures,
            styles: Vec::new(),
            hovered: false,
        }
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// One panel per texture, as tall as the texture scaled to `width`.
    pub fn panels(&self, width: f32) -> Vec<Panel> {
        self.textures
            .iter()
            .map(|texture| Panel::new(rendered_height(texture, width)))
            .collect()
    }

    fn measure(&self, rotator: &mut Rotator, width: f32) {
        for (panel, texture) in rotator.panels_mut().iter_mut().zip(&self.textures) {
            panel.height = rendered_height(texture, width);
        }
    }

    // Window resizes and pointer crossings of the container since the last frame.
    pub fn poll_events(&mut self, rl: &RaylibHandle, rotator: &mut Rotator) -> Vec<Event> {
        let mut events = Vec::new();
        let width = rl.get_screen_width() as f32;

        if rl.is_window_resized() {
            self.measure(rotator, width);
            events.push(Event::Resize);
        }

        let height = rotator.container().height.unwrap_or(0.0);
        let hovered = is_hovering(rl.is_cursor_on_screen(), rl.get_mouse_position(), width, height);

        if hovered != self.hovered {
            self.hovered = hovered;
            events.push(if hovered { Event::PointerEnter } else { Event::PointerLeave });
        }

        events
    }

    pub fn draw(&mut self, d: &mut RaylibDrawHandle, rotator: &Rotator, dt: f32) {
        d.clear_background(Color::BLACK);

        if shows_loading_notice(rotator) {
            d.draw_text("Loading...", 20, 20, 20, Color::GRAY);
            return;
        }

        if self.styles.len() != rotator.len() {
            self.styles = rotator.panels().iter().map(PanelStyle::new).collect();
        }

        let width = d.get_screen_width() as f32;

        // Higher layers are drawn last
        let mut order: Vec<usize> = (0..rotator.len()).collect();
        order.sort_by_key(|&i| rotator.panels()[i].z_index);

        for i in order {
            let panel = &rotator.panels()[i];
            let opacity = match rotator.mode() {
                _ if rotator.is_inert() => 1.0,
                TransitionMode::ClassToggle => self.styles[i].apply(panel, dt),
                TransitionMode::LayeredFade if panel.visible => panel.opacity,
                TransitionMode::LayeredFade => 0.0,
            };
            if opacity <= 0.0 {
                continue;
            }

            let texture = &self.textures[i];
            d.draw_texture_pro(
                texture,
                Rectangle::new(0.0, 0.0, texture.width() as f32, texture.height() as f32),
                Rectangle::new(0.0, 0.0, width, panel.height),
                Vector2::new(0.0, 0.0),
                0.0,
                Color::new(255, 255, 255, (opacity.clamp(0.0, 1.0) * 255.0) as u8),
            );
        }

        if let Some(height) = rotator.container().height {
            d.draw_rectangle_lines(0, 0, width as i32, height as i32, Color::DARKGRAY);
        }

        let status = format!(
            "{}/{}  {:?}",
            rotator.current() + 1,
            rotator.len(),
            rotator.state()
        );
        let bottom = d.get_screen_height();
        d.draw_text(&status, 10, bottom - 30, 20, Color::LIGHTGRAY);
    }
}
