use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::{debug, error, info, warn};

use halftone::config::ViewerConfig;
use halftone::default_model::TORUS_WRL;
use halftone::engine::{Engine, FrameInput};
use halftone::snapshot;

/// Dithered flat-shaded VRML viewer
#[derive(Parser)]
#[command(name = "halftone")]
#[command(about = "Dithered flat-shaded VRML viewer", long_about = None)]
struct Args {
    /// Path to a .wrl model (a built-in torus when omitted)
    model: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Model coordinate scale
    #[arg(short = 's', long)]
    scale: Option<f32>,

    /// Palette index of the model color (0-15)
    #[arg(long)]
    color: Option<usize>,

    /// Framebuffer width
    #[arg(long)]
    width: Option<u32>,

    /// Framebuffer height
    #[arg(long)]
    height: Option<u32>,

    /// Render a single frame to this image file instead of opening a window
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Frame number whose automatic rotation the snapshot shows
    #[arg(short = 'f', long, default_value = "0")]
    frame: u64,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("halftone v{}", env!("CARGO_PKG_VERSION"));

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(args: &Args) -> Result<ViewerConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading config from: {}", path.display());
            ViewerConfig::from_file(path)?
        }
        None => ViewerConfig::default(),
    };

    if let Some(scale) = args.scale {
        config.model_scale = scale;
    }
    if let Some(color) = args.color {
        config.color = color;
    }
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    config.validate()?;
    Ok(config)
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = load_config(&args)?;
    let mut engine = Engine::new(&config);

    // Load failures are shown in the status line; only a snapshot treats them as fatal.
    let loaded = match &args.model {
        Some(path) => {
            info!("Loading model from: {}", path.display());
            engine.load_model_file(path).map_err(Box::<dyn Error>::from)
        }
        None => engine
            .load_model_text(TORUS_WRL, "built-in torus")
            .map_err(Box::<dyn Error>::from),
    };

    if let Some(path) = &args.snapshot {
        loaded?;
        return render_snapshot(&mut engine, path, args.frame);
    }

    if let Err(e) = loaded {
        warn!("{e}");
    }
    run_window(&mut engine, &config)
}

fn render_snapshot(engine: &mut Engine, path: &Path, frame: u64) -> Result<(), Box<dyn Error>> {
    engine.update(&FrameInput {
        frame,
        ..Default::default()
    });
    let stats = engine.render();
    snapshot::save(engine.renderer(), path)?;
    info!(
        "Wrote {} ({} faces drawn, {} skipped)",
        path.display(),
        stats.drawn,
        stats.excluded.total()
    );
    Ok(())
}

#[cfg(feature = "window")]
fn run_window(engine: &mut Engine, config: &ViewerConfig) -> Result<(), Box<dyn Error>> {
    use halftone::engine::is_model_path;
    use halftone::window::{FrameLimiter, Window};

    let mut window = Window::new("halftone", config.width, config.height, config.pixel_scale)?;
    let mut limiter = FrameLimiter::new(&window, config.fps);
    let mut title = String::new();

    loop {
        let state = window.poll_events();
        if state.quit {
            break;
        }

        for path in &state.dropped_files {
            if is_model_path(path) {
                if let Err(e) = engine.load_model_file(path) {
                    debug!("Dropped file rejected: {e}");
                }
            } else {
                warn!("Ignoring dropped file {}", path.display());
                engine.set_status("Please drop a .wrl file.");
            }
        }

        engine.update(&state.input);
        engine.render();
        window.present(engine.frame_buffer())?;

        let status = if engine.status().is_empty() {
            engine.mode().to_string()
        } else {
            format!("{} | {}", engine.status(), engine.mode())
        };
        if status != title {
            window.set_title(&format!("halftone - {status}"))?;
            title = status;
        }

        limiter.wait_and_get_delta(&window);
    }

    info!("Window closed");
    Ok(())
}

#[cfg(not(feature = "window"))]
fn run_window(_engine: &mut Engine, _config: &ViewerConfig) -> Result<(), Box<dyn Error>> {
    Err("built without the `window` feature; use --snapshot <file>".into())
}
