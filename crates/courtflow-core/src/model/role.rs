//! ロール（パーティ）定義

use serde::{Deserialize, Serialize};

/// カノニカルなパーティキー
///
/// Flowデータ上のロールラベルは表示名・スラッグ・略称が混在するため、
/// 照合やスタイル解決の前に必ず `parse` でこのキーへ正規化します。
/// "Content Manager" は Editor へ畳み込まれます（DESIGN.md参照）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PartyKey {
    Student,
    Coach,
    HeadCoach,
    Admin,
    Csm,
    Editor,
    /// アプリ自体を指す擬似パーティ（スタイル専用、フィルタ対象外）
    App,
}

impl PartyKey {
    /// 全パーティ
    pub const ALL: &'static [PartyKey] = &[
        Self::Student,
        Self::Coach,
        Self::HeadCoach,
        Self::Admin,
        Self::Csm,
        Self::Editor,
        Self::App,
    ];

    /// ダッシュボードのロールフィルタに並ぶパーティ（App を除く）
    pub const FILTERABLE: &'static [PartyKey] = &[
        Self::Student,
        Self::Coach,
        Self::HeadCoach,
        Self::Admin,
        Self::Csm,
        Self::Editor,
    ];

    /// ロール名のシノニムテーブル
    ///
    /// 表示名（"Customer Success Manager"）、スラッグ（"customer-success"）、
    /// 略称（"CSM"）のいずれでも同じキーへ解決します。大文字小文字は無視。
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace([' ', '_'], "-");
        match normalized.as_str() {
            "student" => Some(Self::Student),
            "coach" => Some(Self::Coach),
            "head-coach" => Some(Self::HeadCoach),
            "admin" => Some(Self::Admin),
            "csm" | "customer-success" | "customer-success-manager" => Some(Self::Csm),
            "editor" | "content-manager" => Some(Self::Editor),
            "app" => Some(Self::App),
            _ => None,
        }
    }

    /// スタイルトークンで使うスラッグ
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Coach => "coach",
            Self::HeadCoach => "head-coach",
            Self::Admin => "admin",
            Self::Csm => "csm",
            Self::Editor => "editor",
            Self::App => "app",
        }
    }

    /// 表示名
    pub fn label(&self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Coach => "Coach",
            Self::HeadCoach => "Head Coach",
            Self::Admin => "Admin",
            Self::Csm => "Customer Success Manager",
            Self::Editor => "Editor",
            Self::App => "App",
        }
    }
}

/// パーティの表示スタイルトークン
///
/// 色はデザイントークンのhex文字列のまま保持し、
/// 端末色への変換は表示レイヤーで行います。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PartyStyle {
    pub key: PartyKey,
    /// 表示名
    pub label: &'static str,
    /// バッジアイコン
    pub icon: &'static str,
    /// 文字色（hex）
    pub color: &'static str,
    /// 背景色（hex）
    pub bg: &'static str,
    /// グラデーションの開始・終了（hexペア）
    pub gradient: (&'static str, &'static str),
}
