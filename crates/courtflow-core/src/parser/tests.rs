use super::*;
use crate::error::CatalogError;
use crate::model::{ViewMode, VisualKind};

#[test]
fn test_parse_minimal_flow() {
    let kdl = r#"
        flow "tryout-session" {
            title "Tryout Session"
            subtitle "A student books a single tryout"
            step {
                role "Student"
                title "Books a tryout"
            }
        }
    "#;

    let flows = parse_flows_str(kdl).unwrap();
    assert_eq!(flows.len(), 1);

    let flow = &flows[0];
    assert_eq!(flow.slug, "tryout-session");
    assert_eq!(flow.title, "Tryout Session");
    assert_eq!(flow.view_mode, ViewMode::Complete);
    assert_eq!(flow.len(), 1);
    assert!(flow.steps[0].visual.is_none());
    assert!(flow.steps[0].description.is_none());
}

#[test]
fn test_parse_full_flow_metadata() {
    let kdl = r#"
        flow "program-design" {
            title "Program Design"
            subtitle "Internal curriculum work"
            roles "head-coach" "editor"
            filter "coaching"
            image "🧠"
            badge "Internal System Flow"
            view-mode "step-by-step"
            feature "Curriculum design"
            feature "Evaluation criteria"
            step {
                role "Head Coach"
                title "Drafts the framework"
                description "Defines levels and progression standards"
                visual "curriculum-planning-board"
                icon "🧠"
            }
        }
    "#;

    let flow = parse_flows_str(kdl).unwrap().remove(0);
    assert_eq!(flow.roles, vec!["head-coach", "editor"]);
    assert_eq!(flow.filter.as_deref(), Some("coaching"));
    assert_eq!(flow.image.as_deref(), Some("🧠"));
    assert_eq!(flow.badge.as_deref(), Some("Internal System Flow"));
    assert_eq!(flow.view_mode, ViewMode::StepByStep);
    assert_eq!(flow.features.len(), 2);

    let step = &flow.steps[0];
    assert_eq!(step.step_icon.as_deref(), Some("🧠"));
    assert_eq!(
        step.visual.as_ref().map(|v| v.kind),
        Some(VisualKind::CurriculumPlanningBoard)
    );
}

#[test]
fn test_parse_visual_with_src() {
    let kdl = r#"
        flow "booking" {
            title "Booking"
            subtitle ""
            step {
                role "CSM"
                title "Books the court"
                visual "app-screen" src="app screenshots/session booked.png"
            }
        }
    "#;

    let flow = parse_flows_str(kdl).unwrap().remove(0);
    let visual = flow.steps[0].visual.as_ref().unwrap();
    assert_eq!(visual.kind, VisualKind::AppScreen);
    assert_eq!(visual.src.as_deref(), Some("app screenshots/session booked.png"));
    assert_eq!(
        visual.normalized_src().as_deref(),
        Some("/app screenshots/session booked.png")
    );
}

#[test]
fn test_unknown_visual_kind_parses_without_visual() {
    let kdl = r#"
        flow "future" {
            title "Future"
            subtitle ""
            step {
                role "Coach"
                title "Uses a mockup we have not drawn yet"
                visual "hologram-court"
            }
        }
    "#;

    // 未知の種別はエラーではなくビジュアル無し
    let flow = parse_flows_str(kdl).unwrap().remove(0);
    assert!(flow.steps[0].visual.is_none());
}

#[test]
fn test_flow_without_steps_is_rejected() {
    let kdl = r#"
        flow "empty" {
            title "Empty"
            subtitle ""
        }
    "#;

    let result = parse_flows_str(kdl);
    assert!(matches!(result, Err(CatalogError::EmptyFlow(slug)) if slug == "empty"));
}

#[test]
fn test_flow_without_title_is_rejected() {
    let kdl = r#"
        flow "untitled" {
            step {
                role "Coach"
                title "Works anyway"
            }
        }
    "#;

    assert!(matches!(
        parse_flows_str(kdl),
        Err(CatalogError::InvalidFlow(_))
    ));
}

#[test]
fn test_step_without_role_is_rejected() {
    let kdl = r#"
        flow "anonymous" {
            title "Anonymous"
            subtitle ""
            step {
                title "Nobody does this"
            }
        }
    "#;

    assert!(matches!(
        parse_flows_str(kdl),
        Err(CatalogError::InvalidFlow(_))
    ));
}

#[test]
fn test_flows_keep_declaration_order() {
    let kdl = r#"
        flow "b-flow" {
            title "B"
            subtitle ""
            step { role "Coach"; title "B1" }
        }
        flow "a-flow" {
            title "A"
            subtitle ""
            step { role "Coach"; title "A1" }
        }
    "#;

    let flows = parse_flows_str(kdl).unwrap();
    let slugs: Vec<_> = flows.iter().map(|f| f.slug.as_str()).collect();
    assert_eq!(slugs, vec!["b-flow", "a-flow"]);
}

#[test]
fn test_unknown_top_level_nodes_are_skipped() {
    let kdl = r#"
        note "authoring reminder, not a flow"
        flow "real" {
            title "Real"
            subtitle ""
            step { role "Coach"; title "Exists" }
        }
    "#;

    let flows = parse_flows_str(kdl).unwrap();
    assert_eq!(flows.len(), 1);
}

#[test]
fn test_malformed_kdl_is_a_parse_error() {
    let result = parse_flows_str(r#"flow "broken" { title "#);
    assert!(matches!(result, Err(CatalogError::KdlParse(_))));
}
