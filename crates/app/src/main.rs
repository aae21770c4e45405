//! Interactive terminal front-end for the Bhubaneswar travel guide.
//!
//! Wires a [`GuideApi`] client into a [`BrowseController`] and drives it
//! from a small stdin command loop, rendering every published view-state
//! snapshot as a list of attraction cards.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bbsr_browse::{BrowseController, BrowseOptions, SessionStore, ViewState, ViewStatus};
use bbsr_client::GuideApi;
use bbsr_core::categories::{normalize_category, validate_category, VALID_CATEGORIES};
use bbsr_core::display::CuratedImages;
use bbsr_core::CoreError;

mod config;

use config::GuideConfig;

/// Hand-picked hero images for the best-known attractions. Records whose
/// name matches an entry here always render with these instead of
/// whatever the API returned.
fn curated_images() -> CuratedImages {
    CuratedImages::from_entries([
        (
            "Lingaraj Temple".to_string(),
            vec!["https://upload.wikimedia.org/wikipedia/commons/2/2d/Lingaraja_temple_Bhubaneswar_11007.jpg".to_string()],
        ),
        (
            "Udayagiri and Khandagiri Caves".to_string(),
            vec!["https://upload.wikimedia.org/wikipedia/commons/b/bd/Udayagiri_caves.jpg".to_string()],
        ),
        (
            "Nandankanan Zoological Park".to_string(),
            vec!["https://upload.wikimedia.org/wikipedia/commons/4/44/Nandankanan_white_tiger.jpg".to_string()],
        ),
    ])
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bbsr=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = GuideConfig::from_env();
    tracing::info!(api_url = %config.api_url, page_size = config.page_size, "Loaded configuration");

    // --- Controller ---
    let source = Arc::new(GuideApi::new(&config.api_url));
    let session = config
        .session_dir
        .as_deref()
        .map(SessionStore::new);

    let controller = BrowseController::new(
        source,
        BrowseOptions {
            page_size: config.page_size,
            debounce: config.debounce,
            curated: curated_images(),
            session,
        },
    );

    // --- Renderer ---
    let mut snapshots = controller.subscribe();
    let renderer = tokio::spawn(async move {
        loop {
            match snapshots.recv().await {
                Ok(state) => render(&state),
                // Lagged receivers just pick up the next snapshot; only
                // the latest one matters for rendering.
                Err(tokio::sync::broadcast::error::RecvError::Lagged(_)) => continue,
                Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
            }
        }
    });

    // --- Initial fetch ---
    controller.refresh();

    // --- Command loop ---
    println!("Bhubaneswar Travel Guide -- type 'help' for commands.");
    run_command_loop(&controller).await;

    drop(controller);
    let _ = renderer.await;
    tracing::info!("Goodbye");
}

/// Read commands from stdin until `quit` or EOF.
async fn run_command_loop(controller: &BrowseController) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Ok(Some(line)) = lines.next_line().await {
        let line = line.trim();
        let (command, rest) = match line.split_once(' ') {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "help" => print_help(),
            "search" => controller.set_search_text(rest),
            "category" => match check_category(rest) {
                Ok(()) => controller.set_category(rest),
                Err(e) => println!("{e}"),
            },
            "page" => match rest.parse::<u32>() {
                Ok(n) => {
                    if let Err(e) = controller.go_to_page(n) {
                        println!("{e}");
                    }
                }
                Err(_) => println!("Usage: page <number>"),
            },
            "clear" => controller.clear_all(),
            "dark" => match rest {
                "on" => controller.set_dark_mode(true),
                "off" => controller.set_dark_mode(false),
                _ => println!("Dark mode is {}", if controller.dark_mode() { "on" } else { "off" }),
            },
            "refresh" => controller.refresh(),
            "quit" | "exit" => break,
            other => println!("Unknown command '{other}'; type 'help'."),
        }
    }
}

/// Reject unknown category tags before they reach the controller.
/// Empty input is fine: it clears the facet.
fn check_category(input: &str) -> Result<(), CoreError> {
    match normalize_category(input) {
        Some(tag) => validate_category(&tag),
        None => Ok(()),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  search <text>     free-text search (debounced)");
    println!("  category <name>   filter by category: {}", VALID_CATEGORIES.join(", "));
    println!("  page <n>          go to page n");
    println!("  clear             reset all filters");
    println!("  dark [on|off]     toggle or show dark mode");
    println!("  refresh           re-run the current query");
    println!("  quit              exit");
}

/// Print one view-state snapshot as a list of cards.
fn render(state: &ViewState) {
    match &state.status {
        ViewStatus::Idle | ViewStatus::Loading => return,
        ViewStatus::Empty | ViewStatus::Failed(_) => {
            if let Some(msg) = state.message() {
                println!("\n{msg}");
            }
            return;
        }
        ViewStatus::Ready => {}
    }

    println!();
    for record in &state.records {
        println!("* {} ({:.1} / 5)", record.name, record.rating_average);
        println!("  {} · {}", record.location, record.visit_duration);
        if !record.tags.is_empty() {
            println!("  tags: {}", record.tags.join(", "));
        }
        println!("  {}", truncate(&record.description, 120));
    }
    println!("\nPage {} of {}", state.page, state.total_pages);
}

/// Truncate on a char boundary, appending an ellipsis when cut.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_category_accepted_case_insensitively() {
        assert!(check_category("temple").is_ok());
        assert!(check_category("  Temple ").is_ok());
    }

    #[test]
    fn unknown_category_rejected_with_message() {
        let err = check_category("beach").unwrap_err();
        assert!(err.to_string().contains("beach"));
    }

    #[test]
    fn empty_category_clears_the_facet() {
        assert!(check_category("").is_ok());
        assert!(check_category("   ").is_ok());
    }

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn truncate_cuts_long_text_with_ellipsis() {
        assert_eq!(truncate("abcdefghij", 4), "abcd...");
    }
}
