//! `folio` -- command-line client for the portfolio gallery backend.
//!
//! Loads the active portfolio on startup, then accepts interactive
//! commands to list, add, and remove media, switch the active portfolio
//! identifier, and adjust the persisted display settings.
//!
//! # Environment variables
//!
//! | Variable              | Required | Default                  | Description                      |
//! |-----------------------|----------|--------------------------|----------------------------------|
//! | `FOLIO_API_URL`       | no       | `http://localhost:8000`  | Portfolio backend base address   |
//! | `FOLIO_USER`          | no       | `default`                | Initial portfolio identifier     |
//! | `FOLIO_SETTINGS_PATH` | no       | `.folio/settings.json`   | Display settings file            |

use std::io::Write as _;
use std::path::{Path, PathBuf};

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_app::{PortfolioSession, Settings};
use folio_client::PortfolioApi;
use folio_core::{Category, CategoryChoice, ColorMode, MediaDraft, Theme};

const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_USER_ID: &str = "default";
const DEFAULT_SETTINGS_PATH: &str = ".folio/settings.json";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_url =
        std::env::var("FOLIO_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let user_id = std::env::var("FOLIO_USER").unwrap_or_else(|_| DEFAULT_USER_ID.to_string());
    let settings_path = PathBuf::from(
        std::env::var("FOLIO_SETTINGS_PATH").unwrap_or_else(|_| DEFAULT_SETTINGS_PATH.to_string()),
    );

    let mut settings = Settings::load(&settings_path);
    tracing::info!(
        theme = settings.theme.as_str(),
        color_mode = settings.color_mode.as_str(),
        "Applied display settings",
    );

    tracing::info!(base_url = %base_url, user_id = %user_id, "Starting folio");

    let session = PortfolioSession::new(PortfolioApi::new(base_url), user_id);
    session.refresh().await;

    print_summary(&session);
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("folio> ");
        let _ = std::io::stdout().flush();

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Could not read from stdin");
                break;
            }
        };

        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "list" => cmd_list(&session),
            "add" => cmd_add(&session, rest).await,
            "remove" => cmd_remove(&session, rest).await,
            "user" => cmd_user(&session, rest).await,
            "theme" => cmd_theme(&mut settings, &settings_path, rest),
            "mode" => cmd_mode(&mut settings, &settings_path, rest),
            "help" => print_help(),
            "quit" | "exit" => break,
            other => println!("Unknown command '{other}'. Type 'help' for commands."),
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  list                                            show the portfolio grouped by category");
    println!("  add <file> | <title> | <description> | <category>");
    println!("                                                  upload a file and add it to the portfolio");
    println!("  remove <id>                                     delete an item (remote first, then local)");
    println!("  user <id>                                       switch the active portfolio and reload");
    println!("  theme <name>                                    set the display theme");
    println!("  mode <light|dark>                               set the color mode");
    println!("  quit                                            exit");
}

fn print_summary(session: &PortfolioSession<PortfolioApi>) {
    let groups = session.grouped();
    let total: usize = groups.iter().map(|g| g.items.len()).sum();
    println!(
        "Portfolio '{}': {} {} across {} {}",
        session.user_id(),
        total,
        if total == 1 { "piece" } else { "pieces" },
        groups.len(),
        if groups.len() == 1 { "category" } else { "categories" },
    );
}

fn cmd_list(session: &PortfolioSession<PortfolioApi>) {
    let groups = session.grouped();
    if groups.is_empty() {
        println!("Your portfolio is empty. Use 'add' to upload your first piece.");
        return;
    }

    for group in groups {
        println!("{} ({})", group.name, group.items.len());
        for item in group.items {
            println!(
                "  [{}] {} -- {} ({})",
                item.id,
                item.title,
                item.kind.as_str(),
                item.url,
            );
        }
    }
}

async fn cmd_add(session: &PortfolioSession<PortfolioApi>, rest: &str) {
    let parts: Vec<&str> = rest.split('|').map(str::trim).collect();
    if parts.len() != 4 || parts.iter().any(|p| p.is_empty()) {
        println!("Usage: add <file> | <title> | <description> | <category>");
        return;
    }

    // A known label selects the named category; anything else becomes a
    // custom category, matching the upload form's "Other" flow.
    let category = match Category::from_label(parts[3]) {
        Some(category) => CategoryChoice::Named(category),
        None => CategoryChoice::Custom(parts[3].to_string()),
    };

    let draft = MediaDraft {
        title: parts[1].to_string(),
        description: parts[2].to_string(),
        category,
    };

    match session.add_from_path(draft, Path::new(parts[0])).await {
        Ok(item) => println!("Added '{}' [{}] under {}", item.title, item.id, item.category),
        Err(e) => println!("Could not add item: {e}"),
    }
}

async fn cmd_remove(session: &PortfolioSession<PortfolioApi>, rest: &str) {
    if rest.is_empty() {
        println!("Usage: remove <id>");
        return;
    }

    match session.remove_item(rest).await {
        Ok(()) => println!("Removed {rest}"),
        Err(e) => println!("Could not remove item: {e}"),
    }
}

async fn cmd_user(session: &PortfolioSession<PortfolioApi>, rest: &str) {
    if rest.is_empty() {
        println!("Usage: user <id>");
        return;
    }

    session.activate_user(rest).await;
    print_summary(session);
}

fn cmd_theme(settings: &mut Settings, path: &Path, rest: &str) {
    let Some(theme) = Theme::from_name(rest) else {
        let names: Vec<&str> = Theme::ALL.iter().map(|t| t.as_str()).collect();
        println!("Unknown theme '{rest}'. Available: {}", names.join(", "));
        return;
    };

    settings.theme = theme;
    persist_settings(settings, path);
    println!("Theme set to {}", theme.as_str());
}

fn cmd_mode(settings: &mut Settings, path: &Path, rest: &str) {
    let Some(mode) = ColorMode::from_name(rest) else {
        println!("Unknown color mode '{rest}'. Available: light, dark");
        return;
    };

    settings.color_mode = mode;
    persist_settings(settings, path);
    println!("Color mode set to {}", mode.as_str());
}

fn persist_settings(settings: &Settings, path: &Path) {
    if let Err(e) = settings.save(path) {
        tracing::warn!(path = %path.display(), error = %e, "Could not save settings");
    }
}
