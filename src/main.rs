//! Command-line front end for the mannequin picker.
//!
//! Resolves pixel positions against the default mannequin, dumps the scene
//! and the options schema, and lists option presets.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use mannequin::camera::OrbitController;
use mannequin::input::Viewport;
use mannequin::options::Options;
use mannequin::{build_scene, resolve_pick};

#[derive(Parser)]
#[command(name = "mannequin", about = "Body-region picking on a 3D mannequin")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the body region under a pixel position ("none" if empty).
    Pick {
        /// Horizontal pixel position.
        #[arg(long)]
        x: f32,
        /// Vertical pixel position (from the top).
        #[arg(long)]
        y: f32,
        /// Viewport width in pixels.
        #[arg(long, default_value_t = 800)]
        width: u32,
        /// Viewport height in pixels.
        #[arg(long, default_value_t = 600)]
        height: u32,
        /// Orbit the camera around the vertical axis (degrees).
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        yaw: f32,
        /// Orbit the camera around the horizontal axis (degrees).
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        pitch: f32,
        /// TOML options file.
        #[arg(long)]
        options: Option<PathBuf>,
    },
    /// Print the scene as JSON.
    Scene {
        /// TOML options file (lighting is applied).
        #[arg(long)]
        options: Option<PathBuf>,
    },
    /// Print the options JSON schema.
    Schema,
    /// List TOML presets in a directory.
    Presets {
        /// Directory to scan.
        dir: PathBuf,
    },
}

fn load_options(path: Option<&Path>) -> anyhow::Result<Options> {
    match path {
        Some(path) => Options::load(path)
            .with_context(|| format!("loading options from {}", path.display())),
        None => Ok(Options::default()),
    }
}

fn pick(
    x: f32,
    y: f32,
    (width, height): (u32, u32),
    (yaw, pitch): (f32, f32),
    options: &Options,
) -> anyhow::Result<String> {
    let viewport = Viewport::from_size(width, height);
    let Some(aspect) = viewport.aspect() else {
        bail!("viewport {width}x{height} has no area");
    };
    if !viewport.contains(x, y) {
        log::info!("({x}, {y}) is outside the {width}x{height} viewport");
        return Ok("none".to_owned());
    }
    let Some(ndc) = viewport.to_ndc(x, y) else {
        bail!("viewport {width}x{height} has no area");
    };

    let mut controller = OrbitController::new(&options.camera, aspect);
    controller.orbit_by(yaw.to_radians(), pitch.to_radians());

    let scene = build_scene().with_lighting(&options.lighting);
    let picked = resolve_pick(ndc.x, ndc.y, &controller.camera, &scene)?;
    Ok(picked.map_or("none", |part| part.label()).to_owned())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    )
    .init();

    let cli = Cli::parse();
    let output = match cli.command {
        Command::Pick {
            x,
            y,
            width,
            height,
            yaw,
            pitch,
            options,
        } => {
            let options = load_options(options.as_deref())?;
            pick(x, y, (width, height), (yaw, pitch), &options)?
        }
        Command::Scene { options } => {
            let options = load_options(options.as_deref())?;
            let scene = build_scene().with_lighting(&options.lighting);
            serde_json::to_string_pretty(&scene)?
        }
        Command::Schema => serde_json::to_string_pretty(&Options::json_schema())?,
        Command::Presets { dir } => {
            let presets = Options::list_presets(&dir);
            if presets.is_empty() {
                log::warn!("No presets found in {}", dir.display());
            }
            presets.join("\n")
        }
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{output}")?;
    Ok(())
}
