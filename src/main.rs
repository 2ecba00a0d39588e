use anyhow::{Context, Result};
use clap::Parser;
use oddsboard::api::{ApiClient, BASE_URL};
use oddsboard::app::{App, Event};
use oddsboard::draw::{TermChart, TermSurface, Terminal, CANVAS_ORIGIN, CHART_ORIGIN};
use oddsboard::game_view::GameView;
use oddsboard::probability_view::ProbabilityView;
use std::fs::File;
use std::io::{self, stdin, stdout};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::thread;
use termion::input::TermRead;
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct CommandLineArgs {
    /// Address of the game server
    #[arg(short, long, default_value_t = String::from(BASE_URL))]
    base_url: String,

    /// Write logs to this file; they are discarded otherwise
    #[arg(short, long)]
    log_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = CommandLineArgs::parse();
    init_logging(args.log_file.as_deref())?;

    let api = ApiClient::new(args.base_url);
    tracing::info!(base_url = api.base_url(), "starting");

    let terminal = Terminal::set_up("oddsboard").context("failed to set up terminal")?;
    let (tx, rx) = mpsc::unbounded_channel();
    spawn_input_thread(tx.clone());

    let mut app = App::new(
        api,
        GameView::new(TermSurface::new(stdout(), CANVAS_ORIGIN)),
        ProbabilityView::new(TermChart::new(stdout(), CHART_ORIGIN)),
        tx,
    );
    let result = app.run(rx).await;

    drop(terminal);
    tracing::info!("quit");
    result
}

fn init_logging(path: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false);

    // The screen is in raw mode, so logs never go to the terminal.
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            builder.with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(io::sink).init(),
    }
    Ok(())
}

/// Blocking key reader; stops once the event loop is gone.
fn spawn_input_thread(events: UnboundedSender<Event>) {
    thread::spawn(move || {
        for key in stdin().keys() {
            match key {
                Ok(key) => {
                    if events.send(Event::Input(key)).is_err() {
                        break;
                    }
                }
                Err(error) => {
                    tracing::error!(%error, "failed to read input");
                    break;
                }
            }
        }
    });
}
