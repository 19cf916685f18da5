use anyhow::anyhow;
use clap::{Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use grimchess::game::rules::StandardChess;
use grimchess::game::session::{BotSide, GameSession};
use grimchess::ui::GrimApp;

const WINDOW_WIDTH: f32 = 920.0;
const WINDOW_HEIGHT: f32 = 760.0;

/// Grimdark-themed chess against an easy capture-greedy bot
#[derive(Debug, Parser)]
#[command(name = "grimchess", version, about)]
struct Args {
    /// Which side the easy bot plays
    #[arg(long, value_enum, default_value = "chaos")]
    bot: BotArg,

    /// Start from this FEN instead of the standard position
    #[arg(long)]
    fen: Option<String>,

    /// Fix the bot's random seed for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Do not highlight legal destinations for the selected piece
    #[arg(long)]
    hide_legal: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BotArg {
    Chaos,
    Imperium,
    Off,
}

impl From<BotArg> for BotSide {
    fn from(arg: BotArg) -> Self {
        match arg {
            BotArg::Chaos => BotSide::Chaos,
            BotArg::Imperium => BotSide::Imperium,
            BotArg::Off => BotSide::Off,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let rules = match &args.fen {
        Some(fen) => StandardChess::from_fen(fen)?,
        None => StandardChess::new(),
    };
    let rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let session = GameSession::with_rules(rules, args.bot.into(), rng);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_min_inner_size([640.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Grimdark Chess",
        options,
        Box::new(move |_cc| Ok(Box::new(GrimApp::new(session, !args.hide_legal)))),
    )
    .map_err(|e| anyhow!("failed to run UI: {e}"))
}
