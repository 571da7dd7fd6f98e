//! Frisbee Live CLI
//!
//! Follow a live match from the terminal:
//! - Poll the score endpoint and print the scoreboard and timeline
//! - Render a saved snapshot once
//! - Show or toggle the persisted theme
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use frisbee_live::config::{generate_default_config, Config, LoggingConfig};
use frisbee_live::live::{
    HttpScoreSource, LivePoller, MatchId, PollEvent, ScoreSnapshot, StatusReport, StopReason,
};
use frisbee_live::render::{render, render_timeline_text, Scoreboard};
use frisbee_live::ui::{FileThemeStore, PageContext, ThemeState};

#[derive(Parser)]
#[command(name = "frisbee-live")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Live score follower for the frisbee match tracker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the usual locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Site serving the score API (overrides config)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Poll interval in milliseconds (overrides config)
    #[arg(long, global = true)]
    pub interval_ms: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Poll a live match and print every update
    Follow {
        /// Match page path or URL, e.g. /match/42
        page: String,
        /// Keep polling even after the match is completed
        #[arg(long)]
        keep_going: bool,
    },

    /// Render a snapshot JSON file once
    Render {
        /// Path to a snapshot saved from /api/match/{id}/scores
        path: PathBuf,
        /// Print plain text instead of HTML
        #[arg(long)]
        text: bool,
    },

    /// Show the saved theme, or toggle it
    Theme {
        /// Flip between light and dark
        #[arg(long)]
        toggle: bool,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = cli.base_url.clone() {
        config.poller.base_url = url;
    }
    if let Some(ms) = cli.interval_ms {
        config.poller.interval_ms = ms;
    }

    init_tracing(&config.logging);

    match cli.command {
        Commands::Follow { page, keep_going } => {
            if keep_going {
                config.poller.stop_when_completed = false;
            }
            follow(&config, &page).await?;
        }

        Commands::Render { path, text } => {
            let body = std::fs::read_to_string(&path)
                .with_context(|| format!("reading snapshot {}", path.display()))?;
            let snapshot = ScoreSnapshot::from_json(&body)
                .with_context(|| format!("parsing snapshot {}", path.display()))?;

            if text {
                print_snapshot(&snapshot);
            } else {
                println!("{}", render(&snapshot).timeline_html);
            }
        }

        Commands::Theme { toggle } => {
            let mut theme = ThemeState::load(FileThemeStore::default_location());
            if toggle {
                theme.toggle().context("saving theme")?;
            }
            println!("{}", theme.current());
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new(format!("frisbee_live={}", logging.level))
        });

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn follow(config: &Config, page: &str) -> anyhow::Result<()> {
    let match_id = MatchId::from_path(page)
        .with_context(|| format!("no match id in {:?} (expected /match/<id>)", page))?;

    let source = Arc::new(HttpScoreSource::new(config.poller.source_config())?);
    let poller = LivePoller::new(source, config.poller.poller_config());

    // The terminal has no template markers; asking to follow a match means
    // treating it as a live match-detail view.
    let context = PageContext::new(format!("/match/{}", match_id))
        .with_match_detail()
        .with_live_badge();
    let (handle, mut events) = poller
        .start_for_page(&context)
        .context("match page not pollable")?;

    println!(
        "Following match {} every {} ms (Ctrl-C to stop)",
        match_id, config.poller.interval_ms
    );

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                handle.cancel();
            }
            event = events.recv() => match event {
                Some(PollEvent::Snapshot { snapshot, .. }) => print_snapshot(&snapshot),
                Some(PollEvent::Status(StatusReport::Degraded { message, .. })) => {
                    eprintln!("! {}", message);
                }
                Some(PollEvent::Status(StatusReport::Healthy)) => eprintln!("Live updates resumed"),
                Some(PollEvent::Stopped(StopReason::MatchCompleted)) => {
                    println!("Match completed.");
                    break;
                }
                Some(PollEvent::Stopped(StopReason::Cancelled)) | None => break,
            }
        }
    }

    handle.join().await;
    Ok(())
}

fn print_snapshot(snapshot: &ScoreSnapshot) {
    let Scoreboard { team1, team2 } = Scoreboard::from_snapshot(snapshot);

    println!();
    match &snapshot.status {
        Some(status) => println!("{} - {}  ({:?})", team1, team2, status),
        None => println!("{} - {}", team1, team2),
    }
    println!("{}", "-".repeat(40));
    println!("{}", render_timeline_text(&snapshot.scores));
}
