use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Parser;
use floorplan::config::EngineConfig;
use floorplan::doc::{Item, Room};
use floorplan::engine::{Action, EngineCore};
use floorplan::error::{ConfigError, LayoutError};
use floorplan::input::Button;
use floorplan::units::{Point, Scale};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum ReplayError {
    #[error("cannot read script {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid script: {0}")]
    Script(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

#[derive(Parser, Debug)]
#[command(name = "floorplan-replay", about = "Replay pointer events against a floorplan layout")]
struct Cli {
    /// JSON script to replay, or `-` for stdin.
    script: PathBuf,

    /// Pixels per meter; overrides the script and FLOORPLAN_SCALE.
    #[arg(long)]
    scale: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct Script {
    #[serde(default)]
    scale: Option<Scale>,
    #[serde(default)]
    rooms: Vec<Room>,
    #[serde(default)]
    items: Vec<Item>,
    #[serde(default)]
    events: Vec<PointerEvent>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum PointerEvent {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up { x: f64, y: f64 },
}

#[derive(Debug, Serialize)]
struct Outcome<'a> {
    scale: Scale,
    rooms: &'a [Room],
    items: &'a [Item],
}

fn main() -> Result<(), ReplayError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let script: Script = serde_json::from_str(&read_script(&cli.script)?)?;

    let mut config = EngineConfig::from_env()?;
    if let Some(scale) = script.scale {
        config.scale = scale;
    }
    if let Some(px_per_m) = cli.scale {
        config.scale = Scale::new(px_per_m)?;
    }

    let mut core = EngineCore::with_config(config);
    let moved = core.load(script.rooms, script.items);
    info!(
        rooms = core.rooms().len(),
        items = core.items().len(),
        clamped = moved.len(),
        events = script.events.len(),
        "replaying"
    );

    for event in script.events {
        for action in replay(&mut core, event) {
            debug!(?event, ?action, "action");
        }
    }

    let outcome = Outcome { scale: core.scale(), rooms: core.rooms(), items: core.items() };
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}

fn replay(core: &mut EngineCore, event: PointerEvent) -> Vec<Action> {
    match event {
        PointerEvent::Down { x, y } => core.on_pointer_down(Point::new(x, y), Button::Primary),
        PointerEvent::Move { x, y } => core.on_pointer_move(Point::new(x, y)),
        PointerEvent::Up { x, y } => core.on_pointer_up(Point::new(x, y), Button::Primary),
    }
}

fn read_script(path: &Path) -> Result<String, ReplayError> {
    let read_err = |source| ReplayError::Read { path: path.to_path_buf(), source };
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(read_err)?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).map_err(read_err)
}
