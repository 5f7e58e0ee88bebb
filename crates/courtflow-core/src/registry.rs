//! ロールレジストリ
//!
//! パーティ名からバッジ表示用のスタイルトークンを引く静的テーブル。
//! 起動時に固定され、実行中に変更されることはありません。

use crate::model::{PartyKey, PartyStyle};

static STUDENT: PartyStyle = PartyStyle {
    key: PartyKey::Student,
    label: "Student",
    icon: "🎾",
    color: "#0F5132",
    bg: "#E9F7EF",
    gradient: ("#E9F7EF", "#F8FFFB"),
};

static COACH: PartyStyle = PartyStyle {
    key: PartyKey::Coach,
    label: "Coach",
    icon: "🏅",
    color: "#1F3A8A",
    bg: "#EEF2FF",
    gradient: ("#EEF2FF", "#F8FAFF"),
};

static HEAD_COACH: PartyStyle = PartyStyle {
    key: PartyKey::HeadCoach,
    label: "Head Coach",
    icon: "👨‍💼",
    color: "#1E1E1E",
    bg: "#F7F6F2",
    gradient: ("#F7F6F2", "#FDFCF9"),
};

static ADMIN: PartyStyle = PartyStyle {
    key: PartyKey::Admin,
    label: "Admin",
    icon: "⚙️",
    color: "#374151",
    bg: "#F3F4F6",
    gradient: ("#F3F4F6", "#F9FAFB"),
};

static CSM: PartyStyle = PartyStyle {
    key: PartyKey::Csm,
    label: "Customer Success Manager",
    icon: "💬",
    color: "#4F46E5",
    bg: "#EEF2FF",
    gradient: ("#EEF2FF", "#F8FAFF"),
};

static EDITOR: PartyStyle = PartyStyle {
    key: PartyKey::Editor,
    label: "Editor",
    icon: "📝",
    color: "#475569",
    bg: "#F1F5F9",
    gradient: ("#F1F5F9", "#F8FAFC"),
};

static APP: PartyStyle = PartyStyle {
    key: PartyKey::App,
    label: "App",
    icon: "📱",
    color: "#0D9488",
    bg: "#ECFEFF",
    gradient: ("#ECFEFF", "#F0FDFA"),
};

/// パーティキーからスタイルを引く
pub fn style_of(key: PartyKey) -> &'static PartyStyle {
    match key {
        PartyKey::Student => &STUDENT,
        PartyKey::Coach => &COACH,
        PartyKey::HeadCoach => &HEAD_COACH,
        PartyKey::Admin => &ADMIN,
        PartyKey::Csm => &CSM,
        PartyKey::Editor => &EDITOR,
        PartyKey::App => &APP,
    }
}

/// パーティ名（表示名・スラッグ・略称）からスタイルを引く
///
/// 全域関数。未知の名前には Editor スタイルを返すため、
/// バッジの描画が失敗することはありません。
pub fn lookup(name: &str) -> &'static PartyStyle {
    style_of(PartyKey::parse(name).unwrap_or(PartyKey::Editor))
}
