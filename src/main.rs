use std::path::PathBuf;
use std::time::Duration;
use anyhow::{Context, bail};
use clap::Parser;
use rand::seq::SliceRandom;
use raylib::prelude::*;

use rotator::config::load_overrides;
use rotator::constants::*;
use rotator::render::Stage;
use rotator::texture_loader::load_sorted_image_paths;
use rotator::{Environment, Event, OptionOverrides, Registry, RotatorOptions};

/// Rotates the images of a directory in a window.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Directory holding the images to rotate
    directory: PathBuf,

    /// TOML file with option overrides
    #[arg(long)]
    config: Option<PathBuf>,

    /// Milliseconds between automatic advances
    #[arg(long)]
    interval: Option<u64>,

    /// Fade length in milliseconds (layered fade only)
    #[arg(long)]
    duration: Option<u64>,

    /// Do not advance automatically
    #[arg(long)]
    no_auto: bool,

    /// Keep rotating while the pointer is over the images
    #[arg(long)]
    no_pause: bool,

    /// Base stacking layer for the layered fade
    #[arg(long, allow_hyphen_values = true)]
    z_index_offset: Option<i32>,

    /// Use the layered fade instead of class-toggled transitions
    #[arg(long)]
    fallback_fade: bool,

    /// Treat the input as touch-primary (disables hover pause)
    #[arg(long)]
    touch: bool,

    /// Shuffle the images instead of sorting by name
    #[arg(long)]
    shuffle: bool,
}

impl Cli {
    fn overrides(&self) -> OptionOverrides {
        OptionOverrides {
            auto: self.no_auto.then_some(false),
            interval_ms: self.interval,
            duration_ms: self.duration,
            pause: self.no_pause.then_some(false),
            z_index_offset: self.z_index_offset,
        }
    }

    fn environment(&self) -> Environment {
        Environment {
            supports_transitions: !self.fallback_fade,
            touch_primary: self.touch,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let file_overrides = match &cli.config {
        Some(path) => load_overrides(path)?,
        None => OptionOverrides::default(),
    };
    let options = RotatorOptions::default().extend(file_overrides.or(cli.overrides()));
    log::debug!("Options: {:?}", options);

    let mut image_paths = load_sorted_image_paths(&cli.directory)
        .with_context(|| format!("Error loading images from {:?}", cli.directory))?;
    if cli.shuffle {
        image_paths.shuffle(&mut rand::rng());
    }

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Rotator")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut stage = Stage::load(&mut rl, &thread, &image_paths);
    if stage.is_empty() {
        bail!("No images could be loaded from {:?}", cli.directory);
    }

    let key = cli.directory.clone();
    let mut registry = Registry::new();
    let panels = stage.panels(rl.get_screen_width() as f32);
    registry.bind(key.clone(), panels, options, cli.environment());

    // Textures are in memory, the layout is known
    registry.dispatch(Event::Load);

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        let Some(rotator) = registry.get_mut(&key) else {
            break;
        };

        for event in stage.poll_events(&rl, rotator) {
            rotator.handle_event(event);
        }

        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            rotator.next_slide();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            rotator.previous_slide();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
            if rotator.is_running() {
                rotator.stop();
            } else {
                rotator.start();
            }
        }

        rotator.update(Duration::from_secs_f32(dt));

        let mut d = rl.begin_drawing(&thread);
        stage.draw(&mut d, rotator, dt);
    }

    Ok(())
}
