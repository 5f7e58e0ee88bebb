//! ビジュアルモックアップレゾルバ
//!
//! モックアップ種別から描画用テキストへの純粋な対応表。
//! 各種別のテンプレートはバイナリに埋め込まれ、起動時にTeraへ一括登録されます。

use crate::error::Result;
use crate::model::{Visual, VisualKind};
use tera::{Context, Tera};
use tracing::warn;

/// 種別 → 埋め込みテンプレートの対応表
///
/// テンプレート名は `VisualKind::as_str` のタグ名と一致させます。
const TEMPLATES: &[(&str, &str)] = &[
    ("app-screen", include_str!("../resources/mockups/app-screen.tera")),
    ("zalo-chat", include_str!("../resources/mockups/zalo-chat.tera")),
    (
        "zalo-chat-continued",
        include_str!("../resources/mockups/zalo-chat-continued.tera"),
    ),
    ("camera-upload", include_str!("../resources/mockups/camera-upload.tera")),
    ("payment-editor", include_str!("../resources/mockups/payment-editor.tera")),
    ("editor-upload", include_str!("../resources/mockups/editor-upload.tera")),
    ("dashboard-view", include_str!("../resources/mockups/dashboard-view.tera")),
    ("video-thumbnail", include_str!("../resources/mockups/video-thumbnail.tera")),
    (
        "ai-voice-animation",
        include_str!("../resources/mockups/ai-voice-animation.tera"),
    ),
    (
        "video-thumbnail-vertical",
        include_str!("../resources/mockups/video-thumbnail-vertical.tera"),
    ),
    (
        "clip-transfer-animation",
        include_str!("../resources/mockups/clip-transfer-animation.tera"),
    ),
    (
        "social-publish-screen",
        include_str!("../resources/mockups/social-publish-screen.tera"),
    ),
    (
        "curriculum-planning-board",
        include_str!("../resources/mockups/curriculum-planning-board.tera"),
    ),
    (
        "shot-categories-animation",
        include_str!("../resources/mockups/shot-categories-animation.tera"),
    ),
    (
        "shot-breakdown-document",
        include_str!("../resources/mockups/shot-breakdown-document.tera"),
    ),
    (
        "drill-progression",
        include_str!("../resources/mockups/drill-progression.tera"),
    ),
    (
        "assessment-checklist",
        include_str!("../resources/mockups/assessment-checklist.tera"),
    ),
    ("master-document", include_str!("../resources/mockups/master-document.tera")),
    ("approval-stamp", include_str!("../resources/mockups/approval-stamp.tera")),
    (
        "course-structure-board",
        include_str!("../resources/mockups/course-structure-board.tera"),
    ),
    (
        "lesson-script-document",
        include_str!("../resources/mockups/lesson-script-document.tera"),
    ),
    (
        "production-calendar",
        include_str!("../resources/mockups/production-calendar.tera"),
    ),
    (
        "video-recording-court",
        include_str!("../resources/mockups/video-recording-court.tera"),
    ),
    (
        "video-editing-timeline",
        include_str!("../resources/mockups/video-editing-timeline.tera"),
    ),
    (
        "video-review-dashboard",
        include_str!("../resources/mockups/video-review-dashboard.tera"),
    ),
    (
        "app-course-library",
        include_str!("../resources/mockups/app-course-library.tera"),
    ),
    (
        "coaching-transcript",
        include_str!("../resources/mockups/coaching-transcript.tera"),
    ),
];

/// 描画可能なモックアップ1枚
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mockup {
    pub kind: VisualKind,
    text: String,
}

impl Mockup {
    /// 描画用のテキスト行
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// 埋め込みテンプレートを束ねるモックアップライブラリ
///
/// 起動時に1度構築し、以後は読み取り専用で共有します。
pub struct MockupLibrary {
    tera: Tera,
}

impl MockupLibrary {
    /// 埋め込みテンプレートを全て登録してライブラリを構築
    pub fn embedded() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.to_vec())?;
        Ok(Self { tera })
    }

    /// ビジュアル記述子をモックアップへ解決する
    ///
    /// 対応表にない種別やテンプレート展開の失敗はエラーにせず None を返します。
    /// ステップはビジュアル無しとして描画されます。画像パス（`src`）は
    /// ルート相対へ正規化した上でテンプレートへ渡します。
    pub fn resolve(&self, visual: &Visual) -> Option<Mockup> {
        let name = visual.kind.as_str();
        if !self.tera.get_template_names().any(|n| n == name) {
            warn!(kind = %name, "No mockup template registered, rendering without a visual");
            return None;
        }

        let mut context = Context::new();
        if let Some(src) = visual.normalized_src() {
            context.insert("src", &src);
        }

        match self.tera.render(name, &context) {
            Ok(text) => Some(Mockup {
                kind: visual.kind,
                text: text.trim_end().to_string(),
            }),
            Err(e) => {
                warn!(kind = %name, error = %e, "Mockup template failed to render");
                None
            }
        }
    }
}
