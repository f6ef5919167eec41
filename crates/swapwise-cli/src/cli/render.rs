//! Shared table and report rendering for CLI commands.

use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use swapwise_types::account::{Account, AccountId};
use swapwise_types::report::PlatformReport;
use swapwise_types::request::{RequestStatus, SwapRequest};

use crate::state::PlatformDirectory;

/// Rich table of member profiles.
pub fn profile_table(accounts: &[&Account]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Name").fg(Color::Cyan),
        Cell::new("Location").fg(Color::Cyan),
        Cell::new("Offers").fg(Color::Cyan),
        Cell::new("Wants").fg(Color::Cyan),
        Cell::new("Availability").fg(Color::Cyan),
        Cell::new("Rating").fg(Color::Cyan),
    ]);

    for account in accounts {
        table.add_row(vec![
            Cell::new(&account.name),
            Cell::new(account.location.as_deref().unwrap_or("-")),
            Cell::new(account.skills_offered.join(", ")),
            Cell::new(account.skills_wanted.join(", ")),
            Cell::new(&account.availability),
            Cell::new(format_rating(account.average_rating())),
        ]);
    }
    table
}

/// Table of swap requests with requester/recipient names resolved.
pub fn request_table(dir: &PlatformDirectory, requests: &[&SwapRequest]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("From").fg(Color::Cyan),
        Cell::new("To").fg(Color::Cyan),
        Cell::new("Swap").fg(Color::Cyan),
        Cell::new("Status").fg(Color::Cyan),
        Cell::new("Created").fg(Color::Cyan),
    ]);

    for request in requests {
        let name = |id: &AccountId| {
            dir.account_by_id(id)
                .map_or_else(|| "?".to_string(), |a| a.name.clone())
        };
        table.add_row(vec![
            Cell::new(name(&request.requester)),
            Cell::new(name(&request.recipient)),
            Cell::new(format!(
                "{} for {}",
                request.offered_skill, request.requested_skill
            )),
            status_cell(request.status),
            Cell::new(request.created_at.format("%Y-%m-%d %H:%M").to_string()),
        ]);
    }
    table
}

fn status_cell(status: RequestStatus) -> Cell {
    let cell = Cell::new(status.to_string());
    match status {
        RequestStatus::Pending => cell.fg(Color::Yellow),
        RequestStatus::Accepted => cell.fg(Color::Green),
        RequestStatus::Rejected => cell.fg(Color::Red),
    }
}

/// One-decimal rating out of five, or a dash when unrated.
pub fn format_rating(rating: f64) -> String {
    if rating == 0.0 {
        "-".to_string()
    } else {
        format!("{rating:.1}/5.0")
    }
}

/// Styled platform report, section by section.
pub fn print_report(report: &PlatformReport) {
    println!();
    println!("  {}", style("── Community ──").dim());
    println!("  Members:   {}", style(report.member_count).bold());
    if report.suspended_count > 0 {
        println!("  Suspended: {}", style(report.suspended_count).yellow());
    }
    println!("  Feedback:  {}", report.feedback_count);
    println!();

    println!("  {}", style("── Swap requests ──").dim());
    println!("  Total:    {}", style(report.request_count).bold());
    println!("  Accepted: {}", style(report.accepted_count).green());
    println!("  Pending:  {}", style(report.pending_count).yellow());
    println!();

    println!("  {}", style("── Most offered skills ──").dim());
    for entry in &report.top_offered {
        println!("  {:>3}  {}", entry.count, entry.skill);
    }
    println!();

    println!("  {}", style("── Most wanted skills ──").dim());
    for entry in &report.top_wanted {
        println!("  {:>3}  {}", entry.count, entry.skill);
    }
    println!();
}
