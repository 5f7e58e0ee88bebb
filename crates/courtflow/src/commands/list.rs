use colored::Colorize;
use courtflow_core::{Catalog, PartyKey};

pub fn handle(catalog: &Catalog, role: Option<&str>) {
    let slugs: Vec<&str> = match role {
        Some(role) => catalog.slugs_by_role(role),
        None => catalog.slugs().collect(),
    };

    if let Some(role) = role {
        match PartyKey::parse(role) {
            Some(key) => println!("ロール: {}", key.label().cyan()),
            None => println!("{}", format!("未知のロール: {role}").yellow()),
        }
    }

    if slugs.is_empty() {
        println!("{}", "一致するFlowはありません".dimmed());
        return;
    }

    println!();
    println!(
        "{}",
        format!("{:<40} {:<50} {:>5}", "SLUG", "TITLE", "STEPS").bold()
    );
    println!("{}", "─".repeat(97).dimmed());

    for slug in slugs {
        let Some(flow) = catalog.get(slug) else {
            continue;
        };
        println!("{:<40} {:<50} {:>5}", slug.cyan(), flow.title, flow.len());
    }
}
