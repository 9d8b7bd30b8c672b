//! Star Volley headless runner
//!
//! Plays one session with a simple scripted pilot and prints the final HUD
//! line (and optionally the last frame as JSON).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use star_volley::present::HeadlessRenderer;
use star_volley::sim::GameState;
use star_volley::{AudioManager, Game, Intent, LogBackend, Settings, TextDisplay};

#[derive(Debug, Parser)]
#[command(name = "star-volley", about = "Run a headless Star Volley session")]
struct Cli {
    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frames to simulate
    #[arg(long, default_value_t = 3600)]
    frames: u64,

    /// Override the run seed
    #[arg(long)]
    seed: Option<u64>,

    /// Fire once every N frames (0 = never)
    #[arg(long, default_value_t = 8)]
    fire_every: u64,

    /// Print the final frame as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => match Settings::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                log::error!("{err}");
                eprintln!("star-volley: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };
    if let Some(seed) = cli.seed {
        settings.seed = seed;
    }

    let renderer = if cli.json {
        HeadlessRenderer::capturing()
    } else {
        HeadlessRenderer::default()
    };
    let audio = AudioManager::new(Box::new(LogBackend));
    let mut game = Game::new(&settings, audio, renderer, TextDisplay::default());

    game.render_static();
    game.start_session();

    let mut ran = 0;
    while ran < cli.frames {
        for intent in pilot(game.state(), ran, cli.fire_every) {
            game.handle_input(intent);
        }
        if !game.frame() {
            break;
        }
        ran += 1;
    }

    log::info!(
        "Ran {} frames ({} rendered), {} audio failures",
        ran,
        game.renderer().frames,
        game.audio().failures()
    );
    println!("{}", game.display().line());
    if let Some(json) = &game.renderer().last_json {
        println!("{json}");
    }

    game.end_session();
    ExitCode::SUCCESS
}

/// Steer under the lowest enemy and fire on a fixed cadence
fn pilot(state: &GameState, frame: u64, fire_every: u64) -> Vec<Intent> {
    let mut intents = Vec::new();
    let geometry = &state.geometry;

    let target = state
        .formation
        .enemies
        .iter()
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

    if let Some(enemy) = target {
        let aim = enemy.pos.x + geometry.enemy_size / 2.0 - geometry.player_size / 2.0;
        let dx = aim - state.player.pos.x;
        if dx > geometry.player_step() / 2.0 {
            intents.push(Intent::MoveRight);
        } else if dx < -geometry.player_step() / 2.0 {
            intents.push(Intent::MoveLeft);
        }
    }

    if fire_every > 0 && frame % fire_every == 0 {
        intents.push(Intent::Fire);
    }

    intents
}
