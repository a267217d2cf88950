#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub height: f32,            // Rendered height, measured by the host

    pub active: bool,           // Marker read by the host's styling

    // Layered fade
    pub z_index: i32,
    pub visible: bool,
    pub opacity: f32,
}

impl Panel {
    pub fn new(height: f32) -> Self {
        Self {
            height,
            active: false,
            z_index: 0,
            visible: true,
            opacity: 1.0,
        }
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Container {
    pub ready: bool,
    pub height: Option<f32>,
}
