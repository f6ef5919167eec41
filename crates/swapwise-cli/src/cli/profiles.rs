//! Public profile browsing.

use anyhow::Result;
use console::style;

use crate::cli::render;
use crate::state::AppState;

/// List one page of public profiles in a rich colored table.
pub fn list(state: &AppState, page: usize, page_size: Option<usize>, json: bool) -> Result<()> {
    let page_size = page_size.unwrap_or(state.config.default_page_size);
    let profiles = state.directory.list_public_profiles(page, page_size);

    if json {
        println!("{}", serde_json::to_string_pretty(&profiles)?);
        return Ok(());
    }

    if profiles.is_empty() {
        println!();
        println!(
            "  {} No public profiles on page {page}.",
            style("i").blue().bold()
        );
        println!();
        return Ok(());
    }

    println!();
    println!(
        "  {} Public profiles (page {page}, {} shown)",
        style("⌂").bold(),
        profiles.len()
    );
    println!("{}", render::profile_table(&profiles));
    println!();

    Ok(())
}
