//! memtest: the StudyMate memory and focus test.

use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use memtest_core::model::SymbolPool;
use services::{QuizService, RandomShuffler};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

mod play;

#[derive(Parser)]
#[command(name = "memtest", version, about = "Memory & focus test with study profiles")]
struct Cli {
    /// Comma-separated symbols to draw sequences from (default: built-in emoji)
    #[arg(long, env = "MEMTEST_SYMBOLS", global = true)]
    symbols: Option<SymbolPool>,

    /// Fixed shuffle seed for reproducible runs
    #[arg(long, env = "MEMTEST_SEED", global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the desktop window (default)
    Ui,

    /// Take the test in the terminal
    Play {
        /// Print each finished run as one JSON line on stdout
        #[arg(long)]
        json: bool,
    },

    /// Validate the symbol pool and exit
    CheckPool,
}

struct DesktopApp {
    pool: SymbolPool,
    seed: Option<u64>,
}

impl UiApp for DesktopApp {
    fn symbol_pool(&self) -> SymbolPool {
        self.pool.clone()
    }

    fn shuffle_seed(&self) -> Option<u64> {
        self.seed
    }
}

fn launch_desktop(pool: SymbolPool, seed: Option<u64>) {
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { pool, seed });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("StudyMate Memory Test")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}

fn check_pool(pool: &SymbolPool) {
    println!("pool ok: {} symbols", pool.len());
    let listed: Vec<&str> = pool.symbols().iter().map(|symbol| symbol.as_str()).collect();
    println!("{}", listed.join(" "));
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let pool = cli.symbols.unwrap_or_default();
    tracing::debug!(symbols = pool.len(), seed = ?cli.seed, "symbol pool ready");

    match cli.command.unwrap_or(Command::Ui) {
        Command::Ui => launch_desktop(pool, cli.seed),
        Command::Play { json } => {
            let service = QuizService::new(pool)
                .with_shuffler(RandomShuffler::from_seed_or_os(cli.seed));
            play::run(service, json).await?;
        }
        Command::CheckPool => check_pool(&pool),
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so `play --json` keeps stdout machine-readable.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("error: {err:#}");
        process::exit(2);
    }
}
