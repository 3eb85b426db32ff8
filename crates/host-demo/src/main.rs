//! Desktop host for the Profile Deck UI core.
//!
//! Seeds the demo roster, boots the app on the list route with a terminal
//! renderer, and optionally scripts a select/back interaction:
//!
//! ```text
//! cargo run -p host-demo -- --open 2 --back --log debug
//! ```

// Desktop/tooling crate — the terminal renderer prints by design.
#![allow(clippy::print_stdout)]

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use colored::Colorize;
use roster::{seed, Profile, ProfileId};
use ui::{ProfileApp, RouteEntry, ScreenRenderer, UiEvent};

#[derive(Parser)]
#[command(name = "profile-deck")]
#[command(about = "Profile Deck host demo", long_about = None)]
#[command(version)]
struct Cli {
    /// Open the detail screen for this profile id after boot
    #[arg(long)]
    open: Option<u32>,

    /// Follow the detail screen with a back navigation
    #[arg(long)]
    back: bool,

    /// Tracing filter (e.g. "debug" or "ui=trace")
    #[arg(long, default_value = "info")]
    log: String,
}

/// Terminal implementation of the renderer contract: one line per card,
/// presence as a colored dot — green online, red offline, matching the
/// reference design's border colors.
struct TermRenderer;

impl TermRenderer {
    fn status_dot(online: bool) -> colored::ColoredString {
        if online {
            "●".green()
        } else {
            "●".red()
        }
    }

    fn caption(online: bool) -> &'static str {
        if online {
            "Active Now"
        } else {
            "Offline"
        }
    }
}

impl ScreenRenderer for TermRenderer {
    type Error = core::convert::Infallible;

    fn render_list(&mut self, profiles: &[Profile]) -> Result<(), Self::Error> {
        tracing::debug!(count = profiles.len(), "rendering list screen");
        println!("\n{}", "Profiles".bold());
        println!("{}", "─".repeat(32));
        for profile in profiles {
            println!(
                "  {} {:<16} {}",
                Self::status_dot(profile.online),
                profile.name.as_str(),
                Self::caption(profile.online).dimmed(),
            );
        }
        Ok(())
    }

    fn render_detail(&mut self, profile: &Profile) -> Result<(), Self::Error> {
        tracing::debug!(id = profile.id.0, "rendering detail screen");
        println!("\n{}", "Profile".bold());
        println!("{}", "─".repeat(32));
        println!("  {}", profile.name.as_str().bold());
        println!(
            "  {} {}",
            Self::status_dot(profile.online),
            Self::caption(profile.online),
        );
        println!("  picture: {}", profile.picture.as_str().dimmed());
        Ok(())
    }
}

/// Loggable name of the active route entry.
fn route_label(entry: RouteEntry) -> String {
    match entry {
        RouteEntry::ProfileList => entry.id().name().to_owned(),
        RouteEntry::ProfileDetail { user_id } => format!("{}/{user_id}", entry.id().name()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&cli.log)
                .with_context(|| format!("invalid --log filter {:?}", cli.log))?,
        )
        .init();

    let roster = seed::demo_roster()
        .map_err(|err| anyhow!("seeding demo roster: {err}"))?;
    let mut app = ProfileApp::new(&roster, TermRenderer)
        .map_err(|err| anyhow!("boot render: {err}"))?;
    tracing::info!(route = %route_label(app.current()), "booted");

    if let Some(id) = cli.open {
        app.handle_event(UiEvent::Select(ProfileId(id)))
            .map_err(|err| anyhow!("opening profile {id}: {err}"))?;
        tracing::info!(route = %route_label(app.current()), "navigated");

        if cli.back {
            app.handle_event(UiEvent::Back)
                .map_err(|err| anyhow!("back navigation: {err}"))?;
            tracing::info!(route = %route_label(app.current()), "navigated back");
        }
    }

    Ok(())
}
