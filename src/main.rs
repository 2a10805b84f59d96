use clap::{Parser, Subcommand};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use color_harmony::{harmony, random_color, Color, HarmonyScheme};
use swatchbook::models::{AppConfig, ColorInfo};
use swatchbook::services::MemoryClipboard;
use swatchbook::{dispatch, Command, Outcome, Session};

#[derive(Parser)]
#[command(name = "swatchbook")]
#[command(about = "Pick colors, derive harmonies and manage palettes")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show hex, RGB, HSL and text color of a color
    Inspect {
        /// Hex color, e.g. "#3b82f6"
        color: Color,
    },
    /// Derive a harmony set from a base color
    Harmony {
        /// Hex color, e.g. "#3b82f6"
        color: Color,

        /// complementary, analogous, triadic, split-complementary,
        /// tetradic or monochromatic
        #[arg(short, long, default_value = "complementary")]
        scheme: HarmonyScheme,
    },
    /// Print random colors
    Random {
        /// Number of colors
        #[arg(short, long, default_value_t = 1)]
        count: usize,
    },
    /// Start an interactive palette session (default)
    Session,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swatchbook=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Some(Commands::Inspect { color }) => run_inspect_command(color, cli.json),
        Some(Commands::Harmony { color, scheme }) => {
            run_harmony_command(color, scheme, cli.json)
        }
        Some(Commands::Random { count }) => run_random_command(count, cli.json),
        Some(Commands::Session) | None => run_session().await,
    }
}

fn run_inspect_command(color: Color, json: bool) -> anyhow::Result<()> {
    let info = ColorInfo::new(color);
    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("{info}");
    }
    Ok(())
}

fn run_harmony_command(color: Color, scheme: HarmonyScheme, json: bool) -> anyhow::Result<()> {
    let colors = harmony(color, scheme);
    if json {
        let body = serde_json::json!({
            "base": color,
            "scheme": scheme.name(),
            "colors": colors,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        println!("{scheme} of {color}:");
        for color in &colors {
            println!("  {color}");
        }
    }
    Ok(())
}

fn run_random_command(count: usize, json: bool) -> anyhow::Result<()> {
    let colors: Vec<Color> = (0..count).map(|_| random_color()).collect();
    if json {
        println!("{}", serde_json::to_string(&colors)?);
    } else {
        for color in &colors {
            println!("{color}");
        }
    }
    Ok(())
}

/// Interactive loop: one command per line on stdin, notifications dismissed
/// when their deadline passes
async fn run_session() -> anyhow::Result<()> {
    let config = AppConfig::load();
    let mut session = Session::new(&config, Arc::new(MemoryClipboard::new()));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("swatchbook session. Type \"help\" for commands.");
    println!("{}", session.color_info());

    loop {
        let deadline = session.notifier().deadline();
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }

                let command = match Command::parse_input(&line) {
                    Ok(command) => command,
                    Err(e) => {
                        eprintln!("{e}. Type \"help\" for commands.");
                        continue;
                    }
                };
                match dispatch(&mut session, command).await {
                    Outcome::Done(message) => println!("{message}"),
                    Outcome::Failed(message) => eprintln!("{message}"),
                    Outcome::Quit => break,
                }
            }
            _ = wait_until(deadline) => {
                if let Some(notification) = session.notifier_mut().dismiss_expired(Instant::now()) {
                    tracing::debug!(message = %notification.message, "Notification dismissed");
                }
            }
        }
    }

    tracing::debug!(saved = session.saved().len(), "Session ended");
    Ok(())
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
