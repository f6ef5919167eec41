//! Skill catalog commands.

use anyhow::Result;
use console::style;

use swapwise_core::catalog;

/// Search the catalog for skills containing `query`.
pub fn search(query: &str, json: bool) -> Result<()> {
    let hits = catalog::search(query);

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    println!();
    if hits.is_empty() {
        println!(
            "  {} No catalog skills match '{}'.",
            style("i").blue().bold(),
            query
        );
    } else {
        println!(
            "  {} {} skills match '{}':",
            style("✓").green().bold(),
            hits.len(),
            query
        );
        for skill in hits {
            println!("    {} {skill}", style("•").dim());
        }
    }
    println!();

    Ok(())
}

/// Print the whole catalog grouped by category.
pub fn catalog(json: bool) -> Result<()> {
    if json {
        let grouped: serde_json::Map<String, serde_json::Value> = catalog::CATEGORIES
            .iter()
            .map(|(category, skills)| {
                (
                    category.to_string(),
                    serde_json::json!(skills.to_vec()),
                )
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&grouped)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Skill catalog ({} skills)",
        style("🛠").bold(),
        catalog::all().len()
    );
    for (category, skills) in catalog::CATEGORIES {
        println!();
        println!("  {}", style(category).cyan().bold());
        println!("    {}", skills.join(", "));
    }
    println!();

    Ok(())
}
