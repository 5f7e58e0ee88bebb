//! Flowカタログ
//!
//! バイナリに埋め込まれたFlow定義（KDL）を起動時に1度パースして保持します。
//! ロード後は不変で、複数のビューから同時に参照されます。

use std::collections::HashMap;

use crate::error::{CatalogError, Result};
use crate::model::{Flow, PartyKey, VisualKind};
use crate::parser::parse_flows_str;
use tracing::{debug, info};

/// 埋め込みFlow定義（宣言順 = ダッシュボードの表示順）
const FLOW_SOURCES: &[&str] = &[
    include_str!("../resources/flows/first-contact-academy.kdl"),
    include_str!("../resources/flows/creating-session-success-clips.kdl"),
    include_str!("../resources/flows/head-coach-creates-coaching-program.kdl"),
    include_str!("../resources/flows/head-coach-creates-video-course.kdl"),
];

/// Flowカタログ
///
/// スラッグによる検索と宣言順の走査を提供します。
pub struct Catalog {
    flows: Vec<Flow>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// 埋め込み定義からカタログをロード
    ///
    /// 埋め込みデータはバイナリと一緒に出荷されるため、
    /// ここでのエラーはビルドデータの欠陥であり起動時に失敗させます。
    pub fn load_embedded() -> Result<Self> {
        debug!(files = FLOW_SOURCES.len(), "Loading embedded flow definitions");
        let mut combined = String::new();
        for source in FLOW_SOURCES {
            combined.push_str(source);
            combined.push('\n');
        }
        let catalog = Self::from_kdl(&combined)?;
        info!(flows = catalog.len(), "Flow catalog loaded");
        Ok(catalog)
    }

    /// KDL文字列からカタログを構築
    pub fn from_kdl(content: &str) -> Result<Self> {
        Self::from_flows(parse_flows_str(content)?)
    }

    fn from_flows(flows: Vec<Flow>) -> Result<Self> {
        let mut index = HashMap::with_capacity(flows.len());
        for (i, flow) in flows.iter().enumerate() {
            if index.insert(flow.slug.clone(), i).is_some() {
                return Err(CatalogError::DuplicateSlug(flow.slug.clone()));
            }
        }
        Ok(Self { flows, index })
    }

    /// スラッグでFlowを引く
    ///
    /// 見つからない場合はユーザー向けの「not found」表示になります。
    pub fn get(&self, slug: &str) -> Option<&Flow> {
        self.index.get(slug).map(|&i| &self.flows[i])
    }

    /// 全スラッグ（宣言順）
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.flows.iter().map(|f| f.slug.as_str())
    }

    /// 全Flow（宣言順）
    pub fn flows(&self) -> &[Flow] {
        &self.flows
    }

    pub fn len(&self) -> usize {
        self.flows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    /// 指定ロールが登場するFlowのスラッグ（宣言順）
    ///
    /// ステップのロールラベルとクエリの両方をシノニムテーブルで正規化して
    /// 照合するため、"CSM" と "Customer Success Manager" は同じ結果になります。
    /// 未知のロール名はどのFlowにも一致しません。
    pub fn slugs_by_role(&self, role: &str) -> Vec<&str> {
        let Some(wanted) = PartyKey::parse(role) else {
            return Vec::new();
        };
        self.flows
            .iter()
            .filter(|flow| {
                flow.steps
                    .iter()
                    .any(|step| PartyKey::parse(&step.role) == Some(wanted))
            })
            .map(|flow| flow.slug.as_str())
            .collect()
    }

    /// タイトル・サブタイトルの部分一致検索（大文字小文字を無視）
    pub fn search(&self, term: &str) -> Vec<&str> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return self.slugs().collect();
        }
        self.flows
            .iter()
            .filter(|flow| {
                flow.title.to_lowercase().contains(&term)
                    || flow.subtitle.to_lowercase().contains(&term)
            })
            .map(|flow| flow.slug.as_str())
            .collect()
    }

    /// ロード済みカタログの整合性チェック
    ///
    /// パース時に拒否される欠陥（ステップ無し、スラッグ重複）より弱い、
    /// 警告レベルの問題を集めます。`court validate` が表示します。
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        for flow in &self.flows {
            for (i, step) in flow.steps.iter().enumerate() {
                if PartyKey::parse(&step.role).is_none() {
                    issues.push(ValidationIssue {
                        slug: flow.slug.clone(),
                        detail: format!(
                            "step {} role \"{}\" is unknown to the registry (renders with the fallback style)",
                            i + 1,
                            step.role
                        ),
                    });
                }
                if let Some(visual) = &step.visual {
                    match visual.kind {
                        VisualKind::AppScreen if visual.src.is_none() => {
                            issues.push(ValidationIssue {
                                slug: flow.slug.clone(),
                                detail: format!(
                                    "step {} app-screen visual has no src (renders a placeholder)",
                                    i + 1
                                ),
                            });
                        }
                        kind if kind != VisualKind::AppScreen && visual.src.is_some() => {
                            issues.push(ValidationIssue {
                                slug: flow.slug.clone(),
                                detail: format!(
                                    "step {} visual \"{}\" carries an unused src",
                                    i + 1,
                                    kind.as_str()
                                ),
                            });
                        }
                        _ => {}
                    }
                }
            }
            for role in &flow.roles {
                if PartyKey::parse(role).is_none() {
                    issues.push(ValidationIssue {
                        slug: flow.slug.clone(),
                        detail: format!("card role chip \"{role}\" is unknown to the registry"),
                    });
                }
            }
        }
        issues
    }
}

/// 警告レベルの整合性問題
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub slug: String,
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::load_embedded().unwrap()
    }

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 4);

        let flow = catalog.get("first-contact-academy").unwrap();
        assert_eq!(flow.title, "First contact with Academy");
        assert_eq!(flow.len(), 7);

        // ステップのビジュアルが定義どおり読めている
        let booking = &flow.steps[2];
        let visual = booking.visual.as_ref().unwrap();
        assert_eq!(visual.kind, VisualKind::AppScreen);
        assert_eq!(visual.src.as_deref(), Some("app screenshots/session booked.png"));

        let program = catalog.get("head-coach-creates-coaching-program").unwrap();
        assert_eq!(program.view_mode, crate::model::ViewMode::StepByStep);
        assert_eq!(program.badge.as_deref(), Some("Internal System Flow"));
    }

    #[test]
    fn test_slugs_are_declaration_ordered() {
        let catalog = catalog();
        let slugs: Vec<_> = catalog.slugs().collect();
        assert_eq!(
            slugs,
            vec![
                "first-contact-academy",
                "creating-session-success-clips",
                "head-coach-creates-coaching-program",
                "head-coach-creates-video-course",
            ]
        );
    }

    #[test]
    fn test_get_unknown_slug_is_none() {
        assert!(catalog().get("no-such-flow").is_none());
    }

    #[test]
    fn test_role_synonyms_give_identical_results() {
        let catalog = catalog();
        let by_abbr = catalog.slugs_by_role("CSM");
        let by_display = catalog.slugs_by_role("Customer Success Manager");
        let by_slug = catalog.slugs_by_role("customer-success");
        assert_eq!(by_abbr, by_display);
        assert_eq!(by_abbr, by_slug);
        assert_eq!(
            by_abbr,
            vec!["first-contact-academy", "creating-session-success-clips"]
        );
    }

    #[test]
    fn test_slugs_by_unknown_role_is_empty() {
        assert!(catalog().slugs_by_role("Referee").is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = catalog();
        assert_eq!(catalog.search("VIDEO COURSE"), vec!["head-coach-creates-video-course"]);
        assert_eq!(catalog.search("  "), catalog.slugs().collect::<Vec<_>>());
        assert!(catalog.search("tennis").is_empty());
    }

    #[test]
    fn test_duplicate_slug_is_rejected() {
        let kdl = r#"
            flow "dup" {
                title "One"
                subtitle ""
                step { role "Coach"; title "A" }
            }
            flow "dup" {
                title "Two"
                subtitle ""
                step { role "Coach"; title "B" }
            }
        "#;
        let result = Catalog::from_kdl(kdl);
        assert!(matches!(result, Err(CatalogError::DuplicateSlug(slug)) if slug == "dup"));
    }

    #[test]
    fn test_embedded_catalog_validates_clean() {
        assert!(catalog().validate().is_empty());
    }

    #[test]
    fn test_validate_flags_unknown_role_and_missing_src() {
        let kdl = r#"
            flow "draft" {
                title "Draft"
                subtitle ""
                roles "referee"
                step {
                    role "Referee"
                    title "Calls the line"
                    visual "app-screen"
                }
            }
        "#;
        let catalog = Catalog::from_kdl(kdl).unwrap();
        let issues = catalog.validate();
        assert_eq!(issues.len(), 3);
        assert!(issues.iter().all(|i| i.slug == "draft"));
        assert!(issues.iter().any(|i| i.detail.contains("Referee")));
        assert!(issues.iter().any(|i| i.detail.contains("no src")));
    }
}
