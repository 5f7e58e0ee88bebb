//! stepノードのパース

use super::{first_string, string_prop};
use crate::error::{CatalogError, Result};
use crate::model::{FlowStep, Visual, VisualKind};
use kdl::KdlNode;
use tracing::warn;

/// step ノードをパース
pub(super) fn parse_step(node: &KdlNode) -> Result<FlowStep> {
    let mut step = FlowStep {
        role: String::new(),
        title: String::new(),
        description: None,
        visual: None,
        step_icon: None,
    };

    if let Some(children) = node.children() {
        for child in children.nodes() {
            match child.name().value() {
                "role" => step.role = first_string(child).unwrap_or_default(),
                "title" => step.title = first_string(child).unwrap_or_default(),
                "description" => step.description = first_string(child),
                "icon" => step.step_icon = first_string(child),
                "visual" => step.visual = parse_visual(child),
                _ => {}
            }
        }
    }

    if step.role.is_empty() {
        return Err(CatalogError::InvalidFlow(
            "step requires a role".to_string(),
        ));
    }
    if step.title.is_empty() {
        return Err(CatalogError::InvalidFlow(
            "step requires a title".to_string(),
        ));
    }

    Ok(step)
}

/// visual ノードをパース
///
/// 未知の種別タグはエラーにせず、ビジュアル無しとして扱います。
/// レゾルバの「未知の種別はコンテンツ無し」という契約と揃えるためです。
fn parse_visual(node: &KdlNode) -> Option<Visual> {
    let tag = first_string(node)?;
    let Some(kind) = VisualKind::parse(&tag) else {
        warn!(kind = %tag, "Unknown visual kind, step renders without a visual");
        return None;
    };
    Some(Visual {
        kind,
        src: string_prop(node, "src"),
    })
}
