//! flowノードのパース

use super::step::parse_step;
use super::first_string;
use crate::error::{CatalogError, Result};
use crate::model::{Flow, ViewMode};
use kdl::KdlNode;

/// flow ノードをパース
///
/// KDL形式：
/// ```kdl
/// flow "first-contact-academy" {
///     title "First contact with Academy"
///     subtitle "Student Requests a Coaching through Academy"
///     roles "student" "coach"
///     filter "coaching"
///     image "🎓"
///     feature "CSM consults and schedules first session"
///     step {
///         role "Student"
///         title "Requests a Coaching through Academy"
///         visual "zalo-chat"
///     }
/// }
/// ```
pub fn parse_flow(node: &KdlNode) -> Result<Flow> {
    let slug = first_string(node)
        .ok_or_else(|| CatalogError::InvalidFlow("flow requires a slug".to_string()))?;

    let mut flow = Flow {
        slug,
        title: String::new(),
        subtitle: String::new(),
        steps: Vec::new(),
        roles: Vec::new(),
        filter: None,
        image: None,
        features: Vec::new(),
        badge: None,
        view_mode: ViewMode::default(),
    };

    if let Some(children) = node.children() {
        for child in children.nodes() {
            match child.name().value() {
                "title" => flow.title = first_string(child).unwrap_or_default(),
                "subtitle" => flow.subtitle = first_string(child).unwrap_or_default(),
                "roles" => {
                    flow.roles = child
                        .entries()
                        .iter()
                        .filter_map(|e| e.value().as_string().map(|s| s.to_string()))
                        .collect();
                }
                "filter" => flow.filter = first_string(child),
                "image" => flow.image = first_string(child),
                "badge" => flow.badge = first_string(child),
                "view-mode" => {
                    if let Some(mode) = first_string(child) {
                        flow.view_mode = ViewMode::parse(&mode).unwrap_or_default();
                    }
                }
                "feature" => {
                    if let Some(feature) = first_string(child) {
                        flow.features.push(feature);
                    }
                }
                "step" => flow.steps.push(parse_step(child)?),
                _ => {
                    // 不明なノードはスキップ
                }
            }
        }
    }

    if flow.title.is_empty() {
        return Err(CatalogError::InvalidFlow(format!(
            "flow \"{}\" requires a title",
            flow.slug
        )));
    }
    if flow.steps.is_empty() {
        return Err(CatalogError::EmptyFlow(flow.slug));
    }

    Ok(flow)
}
