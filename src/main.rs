//! Interactive desk calculator.
//!
//! Puts the terminal in raw mode, spawns the input actor and runs a session
//! on the main thread until a quit key is pressed.

use anyhow::Context;
use clap::Parser;
use crossbeam_channel::bounded;
use deskcalc::{InputActor, InputEvent, Session, SessionConfig, TerminalGuard};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Deskcalc command line
#[derive(Parser)]
#[command(name = "deskcalc")]
#[command(about = "Arbitrary-precision desk calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Key that ends the session (Tab, Esc and Ctrl-C always do)
    #[arg(long, default_value_t = 'q')]
    quit_key: char,

    /// Do not echo accepted keys
    #[arg(long)]
    no_echo: bool,

    /// Input poll timeout in milliseconds
    #[arg(long, default_value_t = 10)]
    poll_ms: u64,

    /// Write logs to this file instead of stderr
    #[arg(long, env = "DESKCALC_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Log level, used when RUST_LOG is unset
    #[arg(long, env = "DESKCALC_LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn session_config(&self) -> SessionConfig {
        SessionConfig {
            quit_key: self.quit_key,
            echo: !self.no_echo,
            input_poll_timeout: Duration::from_millis(self.poll_ms),
            ..SessionConfig::default()
        }
    }
}

fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false);

    // Raw mode garbles stderr; a log file keeps the calculator readable.
    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        builder.with_ansi(false).with_writer(Mutex::new(file)).init();
    } else {
        builder.with_writer(io::stderr).init();
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let boot = Instant::now();
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = cli.session_config();
    info!(?config, "starting calculator");

    let (input_tx, input_rx) = bounded::<InputEvent>(config.channel_capacity);
    let guard = TerminalGuard::enter().context("failed to put the terminal in raw mode")?;
    let input = InputActor::spawn(input_tx, config.input_poll_timeout)
        .context("failed to spawn the input thread")?;

    let mut session = Session::new(io::stdout(), config);
    let result = session
        .banner(boot.elapsed())
        .map_err(Into::into)
        .and_then(|()| session.run(&input_rx));

    // Unblocks an input thread stuck sending into a full channel.
    drop(input_rx);
    input.join();
    drop(guard);
    info!("calculator stopped");

    result.context("calculator session failed")
}
