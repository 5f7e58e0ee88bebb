//! ビジュアルモックアップ定義

use serde::{Deserialize, Serialize};

/// ステップに紐づくビジュアルモックアップへの参照
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visual {
    /// モックアップ種別
    pub kind: VisualKind,
    /// 画像パス（`app-screen` のみ使用）
    #[serde(default)]
    pub src: Option<String>,
}

impl Visual {
    pub fn new(kind: VisualKind) -> Self {
        Self { kind, src: None }
    }

    pub fn with_src(kind: VisualKind, src: impl Into<String>) -> Self {
        Self {
            kind,
            src: Some(src.into()),
        }
    }

    /// 画像パスをルート相対（先頭 `/`）へ正規化して返す
    pub fn normalized_src(&self) -> Option<String> {
        self.src.as_deref().map(normalize_asset_path)
    }
}

/// アセットパスをルート相対へ正規化する
///
/// 画像ローダーに渡す前にパスは必ず `/` で始まる形にします。
pub fn normalize_asset_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

/// モックアップ種別（閉じた集合）
///
/// それぞれの種別が1つのモックアップテンプレートに対応します。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisualKind {
    AppScreen,
    ZaloChat,
    ZaloChatContinued,
    CameraUpload,
    PaymentEditor,
    EditorUpload,
    DashboardView,
    VideoThumbnail,
    AiVoiceAnimation,
    VideoThumbnailVertical,
    ClipTransferAnimation,
    SocialPublishScreen,
    CurriculumPlanningBoard,
    ShotCategoriesAnimation,
    ShotBreakdownDocument,
    DrillProgression,
    AssessmentChecklist,
    MasterDocument,
    ApprovalStamp,
    CourseStructureBoard,
    LessonScriptDocument,
    ProductionCalendar,
    VideoRecordingCourt,
    VideoEditingTimeline,
    VideoReviewDashboard,
    AppCourseLibrary,
    CoachingTranscript,
}

impl VisualKind {
    /// 全種別（テンプレートテーブルの網羅チェックに使用）
    pub const ALL: &'static [VisualKind] = &[
        Self::AppScreen,
        Self::ZaloChat,
        Self::ZaloChatContinued,
        Self::CameraUpload,
        Self::PaymentEditor,
        Self::EditorUpload,
        Self::DashboardView,
        Self::VideoThumbnail,
        Self::AiVoiceAnimation,
        Self::VideoThumbnailVertical,
        Self::ClipTransferAnimation,
        Self::SocialPublishScreen,
        Self::CurriculumPlanningBoard,
        Self::ShotCategoriesAnimation,
        Self::ShotBreakdownDocument,
        Self::DrillProgression,
        Self::AssessmentChecklist,
        Self::MasterDocument,
        Self::ApprovalStamp,
        Self::CourseStructureBoard,
        Self::LessonScriptDocument,
        Self::ProductionCalendar,
        Self::VideoRecordingCourt,
        Self::VideoEditingTimeline,
        Self::VideoReviewDashboard,
        Self::AppCourseLibrary,
        Self::CoachingTranscript,
    ];

    /// 文字列からパース（未知のタグは None）
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.as_str() == s)
    }

    /// KDL・テンプレート登録で使うタグ名
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AppScreen => "app-screen",
            Self::ZaloChat => "zalo-chat",
            Self::ZaloChatContinued => "zalo-chat-continued",
            Self::CameraUpload => "camera-upload",
            Self::PaymentEditor => "payment-editor",
            Self::EditorUpload => "editor-upload",
            Self::DashboardView => "dashboard-view",
            Self::VideoThumbnail => "video-thumbnail",
            Self::AiVoiceAnimation => "ai-voice-animation",
            Self::VideoThumbnailVertical => "video-thumbnail-vertical",
            Self::ClipTransferAnimation => "clip-transfer-animation",
            Self::SocialPublishScreen => "social-publish-screen",
            Self::CurriculumPlanningBoard => "curriculum-planning-board",
            Self::ShotCategoriesAnimation => "shot-categories-animation",
            Self::ShotBreakdownDocument => "shot-breakdown-document",
            Self::DrillProgression => "drill-progression",
            Self::AssessmentChecklist => "assessment-checklist",
            Self::MasterDocument => "master-document",
            Self::ApprovalStamp => "approval-stamp",
            Self::CourseStructureBoard => "course-structure-board",
            Self::LessonScriptDocument => "lesson-script-document",
            Self::ProductionCalendar => "production-calendar",
            Self::VideoRecordingCourt => "video-recording-court",
            Self::VideoEditingTimeline => "video-editing-timeline",
            Self::VideoReviewDashboard => "video-review-dashboard",
            Self::AppCourseLibrary => "app-course-library",
            Self::CoachingTranscript => "coaching-transcript",
        }
    }
}
