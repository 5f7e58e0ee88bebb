//! Flow定義

use super::visual::Visual;
use serde::{Deserialize, Serialize};

/// Flow - 業務プロセスの設計図
///
/// Flowはロールが順番に実行するステップ列を定義し、
/// ダッシュボードと詳細ビューはこの定義から描画されます。
/// カタログへのロード後は不変です。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flow {
    /// スラッグ（URL-safeな識別子、カタログ内で一意）
    pub slug: String,
    /// タイトル
    pub title: String,
    /// サブタイトル
    pub subtitle: String,
    /// ステップ列（必ず1つ以上）
    pub steps: Vec<FlowStep>,
    /// カードのチップ表示用のロールスラッグ
    #[serde(default)]
    pub roles: Vec<String>,
    /// カテゴリフィルタタグ（coaching / content）
    #[serde(default)]
    pub filter: Option<String>,
    /// カードの絵文字
    #[serde(default)]
    pub image: Option<String>,
    /// 特徴リスト（カードに表示）
    #[serde(default)]
    pub features: Vec<String>,
    /// バッジ（例: "Internal System Flow"）
    #[serde(default)]
    pub badge: Option<String>,
    /// 詳細ビューの初期表示モード
    #[serde(default)]
    pub view_mode: ViewMode,
}

impl Flow {
    /// ステップ数
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// 指定インデックスのステップ
    pub fn step(&self, index: usize) -> Option<&FlowStep> {
        self.steps.get(index)
    }
}

/// Flowの1ステップ
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowStep {
    /// 担当ロール（表示時にレジストリで解決されるフリーフォームのラベル）
    pub role: String,
    /// タイトル
    pub title: String,
    /// 説明
    #[serde(default)]
    pub description: Option<String>,
    /// ビジュアルモックアップ
    #[serde(default)]
    pub visual: Option<Visual>,
    /// タイムライン上のステップアイコンの上書き
    #[serde(default)]
    pub step_icon: Option<String>,
}

/// 詳細ビューの表示モード
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    /// 全ステップを同時に表示
    #[default]
    Complete,
    /// Next/Previousで1ステップずつ表示
    StepByStep,
}

impl ViewMode {
    /// 文字列からパース
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "complete" => Some(Self::Complete),
            "step-by-step" | "step_by_step" | "step" => Some(Self::StepByStep),
            _ => None,
        }
    }
}
