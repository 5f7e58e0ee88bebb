use colored::Colorize;
use courtflow_core::model::PartyKey;
use courtflow_core::registry;

pub fn handle() {
    println!(
        "{}",
        format!("{:<6} {:<28} {:<16} {:<8}", "ICON", "LABEL", "SLUG", "COLOR").bold()
    );
    println!("{}", "─".repeat(60).dimmed());

    for key in PartyKey::ALL {
        let style = registry::style_of(*key);
        println!(
            "{:<6} {:<28} {:<16} {:<8}",
            style.icon,
            style.label.cyan(),
            style.key.slug(),
            style.color.dimmed()
        );
    }
}
