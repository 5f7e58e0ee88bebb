use colored::Colorize;
use courtflow_core::model::{Flow, ViewMode};
use courtflow_core::registry;
use courtflow_core::{Catalog, MockupLibrary};
use tracing::warn;

use crate::tui;

pub fn handle(
    catalog: &Catalog,
    library: &MockupLibrary,
    slug: &str,
    step: Option<usize>,
    mode: Option<&str>,
    no_tui: bool,
) -> anyhow::Result<()> {
    let Some(flow) = catalog.get(slug) else {
        // not-found はユーザー向けの表示であってエラー終了ではない
        println!("{}", format!("Flow \"{slug}\" は見つかりません").yellow());
        println!();
        println!("利用可能なFlow:");
        for slug in catalog.slugs() {
            println!("  - {}", slug.cyan());
        }
        return Ok(());
    };

    let mode = match mode {
        Some(raw) => match ViewMode::parse(raw) {
            Some(mode) => Some(mode),
            None => {
                warn!(mode = %raw, "Unknown view mode, using the flow's default");
                None
            }
        },
        None => None,
    };

    if no_tui {
        print_flow(flow, step);
        return Ok(());
    }

    tui::run_detail(catalog, library, slug, mode, step)
}

/// Complete モード相当のテキスト出力
fn print_flow(flow: &Flow, step: Option<usize>) {
    println!("{}", flow.title.bold());
    println!("{}", flow.subtitle.dimmed());
    if let Some(badge) = &flow.badge {
        println!("{}", badge.yellow());
    }
    println!();

    let marked = step.map(|n| n.clamp(1, flow.len()) - 1);
    for (i, step) in flow.steps.iter().enumerate() {
        let style = registry::lookup(&step.role);
        let icon = step.step_icon.as_deref().unwrap_or(style.icon);
        let marker = if marked == Some(i) { "▶" } else { " " };

        println!(
            "{} {:>2}. {} {}  {}",
            marker.cyan(),
            i + 1,
            icon,
            style.label.cyan(),
            step.title.bold()
        );
        if let Some(description) = &step.description {
            println!("        {}", description.dimmed());
        }
    }
}
