use anyhow::Context;
use chessdrag::app::{App, FramePacer};
use chessdrag::config::Config;
use chessdrag::draw::CairoRenderer;
use chessdrag::input::ScriptedInput;
use chessdrag::session::GameSession;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chessdrag")]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("CHESSDRAG_GIT_HASH"), ")"),
    about = "Drag-and-drop chess board"
)]
struct Cli {
    /// Configuration file (default: ~/.config/chessdrag/config.toml)
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Square edge length in pixels (overrides config)
    #[arg(long, value_name = "PIXELS")]
    square_size: Option<i32>,

    /// Main loop ticks per second, 0 = unpaced (overrides config)
    #[arg(long, value_name = "RATE")]
    tick_rate: Option<u32>,

    /// Gesture script to replay as pointer input
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Write the last rendered frame as PNG
    #[arg(long, value_name = "FILE", requires = "script")]
    snapshot: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(script_path) = cli.script else {
        print_usage();
        return Ok(());
    };

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(square_size) = cli.square_size {
        config.board.square_size = square_size;
    }
    if let Some(tick_rate) = cli.tick_rate {
        config.performance.tick_rate = tick_rate;
    }
    config.validate_and_clamp();

    let settings = config.session_settings();
    let source = ScriptedInput::from_path(&script_path)?;
    let renderer = CairoRenderer::new(
        settings.geometry.board_pixels(),
        config.board.piece_font.clone(),
    )?;

    log::info!("Replaying {}", script_path.display());
    let mut app = App::new(
        GameSession::new(settings),
        renderer,
        source,
        FramePacer::new(config.performance.tick_rate),
    );
    let summary = app.run()?;

    if let Some(path) = &cli.snapshot {
        app.renderer()
            .write_png(path)
            .with_context(|| format!("Failed to store snapshot {}", path.display()))?;
    }

    let moves: Vec<String> = summary.moves.iter().map(ToString::to_string).collect();
    println!("moves: {}", moves.join(" "));
    println!("rejected: {}", summary.rejected);
    println!("status: {}", summary.status.as_str());

    Ok(())
}

fn print_usage() {
    println!("chessdrag: Drag-and-drop chess board");
    println!();
    println!("Usage:");
    println!("  chessdrag --script FILE [--snapshot OUT.png]   Replay a gesture script");
    println!("  chessdrag --help                               Show help");
    println!();
    println!("Gesture script commands (pixel coordinates, 8x8 board from the top-left):");
    println!("  down X Y [left|right|middle]   press a button (left picks a piece up)");
    println!("  move X Y                       move the pointer");
    println!("  up X Y [button]                release (left drops the piece)");
    println!("  cancel                         window lost focus");
    println!("  frame                          end of one tick");
    println!("  quit                           close");
}
