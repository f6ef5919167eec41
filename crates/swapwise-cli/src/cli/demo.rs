//! Scripted platform walkthrough.
//!
//! Replays the reference narrative against the live directory: browse,
//! log in, search, propose a swap, switch accounts, accept it, leave
//! feedback, then run the moderation pass. Every step goes through the same
//! public API an interactive caller would use.

use anyhow::{Context, Result};
use console::style;

use swapwise_types::request::{RequestStatus, SwapDecision};

use crate::cli::render;
use crate::seed::MEMBER_SECRET;
use crate::state::AppState;

fn section(n: usize, title: &str) {
    println!();
    println!(
        "{} {}",
        style(format!("[{n}]")).cyan().bold(),
        style(title).bold()
    );
}

pub fn run(state: &mut AppState, json: bool) -> Result<()> {
    let dir = &mut state.directory;
    dir.account("sakshi@swapwise.dev")
        .context("the demo needs the sample community; enable seed_demo_data in config.toml")?;

    // 1. Browse the home page without a session.
    if !json {
        section(1, "Browsing public profiles (no session)");
        let profiles = dir.list_public_profiles(1, state.config.default_page_size);
        println!("{}", render::profile_table(&profiles));
    }

    // 2. Sign in as Sakshi.
    let sakshi = dir.login("sakshi@swapwise.dev", MEMBER_SECRET)?;
    if !json {
        section(2, "Signed in as Sakshi");
        let account = dir
            .account("sakshi@swapwise.dev")
            .context("profile vanished mid-demo")?;
        println!(
            "  {} ({}) - rating {}",
            style(&account.name).cyan(),
            account.email,
            render::format_rating(account.average_rating())
        );
        for feedback in account.recent_feedback(state.config.recent_feedback_count) {
            println!(
                "    {} {}/5 from {}: {}",
                style("★").yellow(),
                feedback.rating,
                feedback.author,
                feedback.comment
            );
        }
    }

    // 3. Search for members to swap with.
    if !json {
        section(3, "Searching members offering 'JavaScript'");
        println!("{}", render::profile_table(&dir.search_by_skill("JavaScript")));

        section(4, "Searching members offering 'Cybersecurity'");
        println!(
            "{}",
            render::profile_table(&dir.search_by_skill("Cybersecurity"))
        );

        section(5, "Searching members available on weekends");
        println!(
            "{}",
            render::profile_table(&dir.search_by_availability("weekends"))
        );
    }

    // 4. Propose a new swap to Yashpal.
    let proposed = dir.create_request(
        &sakshi,
        "yashpal@swapwise.dev",
        "Machine Learning",
        "TypeScript",
        "Hi Yashpal! Ready for round two? ML fundamentals for some TypeScript.",
    )?;
    if !json {
        section(6, "Sakshi proposes: Machine Learning for TypeScript");
        println!(
            "  {} Request {} sent to Yashpal.",
            style("✓").green().bold(),
            style(&proposed).dim()
        );
        let sakshi_account = dir
            .account("sakshi@swapwise.dev")
            .context("profile vanished mid-demo")?;
        let (incoming, outgoing) = dir.requests_for(&sakshi_account.id);
        println!("  Incoming:");
        println!("{}", render::request_table(dir, &incoming));
        println!("  Outgoing:");
        println!("{}", render::request_table(dir, &outgoing));
    }

    // 5. Yashpal takes over and accepts. The second login replaces
    //    Sakshi's session; her handle is now stale.
    let yashpal = dir.login("yashpal@swapwise.dev", MEMBER_SECRET)?;
    dir.respond(&yashpal, &proposed, SwapDecision::Accept)?;
    dir.submit_feedback(
        &yashpal,
        "sakshi@swapwise.dev",
        5,
        "The ML sessions keep getting better. Gladly traded some TypeScript for this!",
    )?;
    if !json {
        section(7, "Yashpal accepts and leaves feedback");
        let yashpal_account = dir
            .account("yashpal@swapwise.dev")
            .context("profile vanished mid-demo")?;
        let (incoming, _) = dir.requests_for(&yashpal_account.id);
        println!("{}", render::request_table(dir, &incoming));
        let pending = incoming
            .iter()
            .filter(|r| r.status == RequestStatus::Pending)
            .count();
        println!("  {pending} request(s) still pending for Yashpal.");
    }

    // 6. Browse the catalog.
    if !json {
        section(8, "Catalog skills matching 'Security'");
        for skill in dir.search_skills("Security") {
            println!("    {} {skill}", style("•").dim());
        }
    }

    // 7. Moderation pass.
    let admin = dir.login(&state.config.bootstrap.email, &state.config.bootstrap.secret)?;
    let announcement =
        "Welcome to Swapwise! New AI/ML and security skill categories are live in the catalog.";
    dir.broadcast(&admin, announcement)?;
    let report = dir.generate_report(&admin)?;
    if !json {
        section(9, "Admin reviews all swap requests");
        let all = dir.all_requests(&admin)?.iter().collect::<Vec<_>>();
        println!("{}", render::request_table(dir, &all));

        section(10, "Admin broadcasts an announcement");
        for entry in dir.announcements() {
            println!(
                "  {} [{}] {}",
                style("📢").bold(),
                entry.posted_at.format("%Y-%m-%d %H:%M"),
                entry.message
            );
        }

        section(11, "Platform report");
        render::print_report(&report);
        println!(
            "  {} Demo complete.",
            style("✓").green().bold()
        );
        println!();
    }

    dir.logout();

    if json {
        let summary = serde_json::json!({
            "proposed_request": proposed.to_string(),
            "report": report,
            "announcements": dir.announcements().len(),
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
