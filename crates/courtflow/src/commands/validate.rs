use colored::Colorize;
use courtflow_core::Catalog;

/// ロード済みカタログの整合性を検証して表示
///
/// 致命的な欠陥（壊れたKDL、ステップ無し、スラッグ重複）はロード時点で
/// 失敗しているため、ここに届くのは警告レベルの問題のみです。
pub fn handle(catalog: &Catalog) {
    println!("{}", "埋め込みFlow定義を検証中...".blue());
    println!();
    println!("  Flow: {}個", catalog.len());
    for flow in catalog.flows() {
        let badge = flow
            .badge
            .as_deref()
            .map(|b| format!(" [{b}]"))
            .unwrap_or_default();
        println!(
            "    - {} ({}ステップ{})",
            flow.slug.cyan(),
            flow.len(),
            badge.dimmed()
        );
    }

    let issues = catalog.validate();
    println!();
    if issues.is_empty() {
        println!("{}", "✓ カタログは正常です！".green().bold());
    } else {
        println!("{}", format!("⚠ {}件の警告", issues.len()).yellow().bold());
        for issue in &issues {
            println!("  {} {}", issue.slug.cyan(), issue.detail);
        }
    }
}
