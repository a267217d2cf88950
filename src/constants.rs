pub const DEFAULT_INTERVAL_MS: u64 = 5000;   // Time between automatic advances
pub const DEFAULT_DURATION_MS: u64 = 600;    // Fade length in layered-fade mode
pub const DEFAULT_Z_INDEX_OFFSET: i32 = 0;   // Base stacking layer

pub const MIN_INTERVAL_MS: u64 = 1;          // A zero interval would tick forever within one frame

pub const WINDOW_WIDTH: i32 = 960;           // Initial window size of the demo host
pub const WINDOW_HEIGHT: i32 = 540;
pub const FPS: u32 = 60;

pub const STYLE_TRANSITION: f32 = 0.6;       // Opacity transition applied by the host stylesheet (seconds)
