use clap::Parser;
use colored::*;
use github_star_button::cli::Cli;
use github_star_button::format::format_count;
use github_star_button::github::GitHubClient;
use github_star_button::preview::{start_preview_server, PreviewState};
use github_star_button::{Result, StarButton, StarButtonArgs};
use std::io::Write;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("github_star_button=info"))
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    println!("{}", "GitHub Star Button".bold().green());
    println!("{}\n", "=".repeat(50).dimmed());

    let client = Arc::new(GitHubClient::with_base_url(&cli.api_base_url)?);
    let animation = cli.animation();

    let mounted = StarButton::mount(StarButtonArgs {
        props: cli.props(),
        client,
        animation,
    })
    .await?;
    let button = mounted.button().clone();

    println!("⭐ Fetching stars for {}/{}...", cli.owner.bold(), cli.repo.bold());

    // Follow the counting animation in place until it settles
    let mut stdout = std::io::stdout();
    let snapshot = loop {
        let snapshot = button.snapshot().await?;
        if !snapshot.is_loading {
            print!("\r{} {}   ", "★".yellow(), format_count(snapshot.display_count).bold());
            stdout.flush()?;
        }
        if snapshot.is_settled() {
            break snapshot;
        }
        tokio::time::sleep(animation.step_interval()).await;
    };
    println!();

    if snapshot.star_count == 0 {
        println!("{}", "No stars found (or the lookup failed)".dimmed());
    }

    println!("\n{}", button.render().await?);

    if let Some(port) = cli.serve {
        let state = PreviewState {
            button: button.clone(),
            start_time: Instant::now(),
        };

        println!("\n📡 Preview at http://localhost:{}/", port);
        println!("Press Ctrl+C to stop the server\n");

        tokio::select! {
            result = start_preview_server(state, port) => {
                result?;
            }
            _ = tokio::signal::ctrl_c() => {
                println!("\n🛑 Shutting down preview server...");
            }
        }
    }

    mounted.unmount().await?;

    Ok(())
}
