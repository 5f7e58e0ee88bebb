//! ビジュアルパネルシンクロナイザ
//!
//! ナビゲーションエンジンのアクティブステップからパネルの表示内容・
//! 表示可否・縦方向の位置合わせを導出します。Flowの全モックアップは
//! 詳細ビュー構築時に1度だけ解決して保持し（マウントしたまま非表示）、
//! ステップ切り替えで表示する1枚を選ぶだけにします。

use crate::mockup::{Mockup, MockupLibrary};
use crate::model::Flow;

/// パネルをステップ位置へ揃える2カラムレイアウトの最小幅（カラム数）
///
/// これより狭いビューポートではレイアウトが縦積みになり、位置合わせは
/// 行いません。
pub const WIDE_LAYOUT_MIN_WIDTH: u16 = 100;

/// 1つのFlow詳細ビューが所有するビジュアルパネル
///
/// 契約: 表示中のコンテンツは常に現在のアクティブステップと一致します。
/// アクティブステップが無い、またはステップにビジュアルが無い間は非表示で、
/// 位置オフセットもクリアされます。
pub struct VisualPanel {
    mockups: Vec<Option<Mockup>>,
    current: Option<usize>,
    offset: u16,
}

impl VisualPanel {
    /// Flowの全ステップのモックアップを解決してパネルを構築
    pub fn new(flow: &Flow, library: &MockupLibrary) -> Self {
        let mockups = flow
            .steps
            .iter()
            .map(|step| step.visual.as_ref().and_then(|v| library.resolve(v)))
            .collect();
        Self {
            mockups,
            current: None,
            offset: 0,
        }
    }

    /// アクティブステップの変更に追従する
    ///
    /// `advance` / `retreat` / `select` のいずれ由来でも、変更のたびに
    /// 必ず呼びます。非表示に転じたら位置オフセットをクリアします。
    pub fn sync(&mut self, active: Option<usize>) {
        self.current = active;
        if !self.is_visible() {
            self.offset = 0;
        }
    }

    /// パネルを表示すべきか
    pub fn is_visible(&self) -> bool {
        self.content().is_some()
    }

    /// 表示するモックアップ
    ///
    /// アクティブステップにビジュアルが無ければ None（パネル非表示）。
    pub fn content(&self) -> Option<&Mockup> {
        self.mockups.get(self.current?)?.as_ref()
    }

    /// アクティブステップの画面上の位置へパネルを揃える
    ///
    /// 広いビューポートでのみ、アクティブステップ要素の上端位置を
    /// 共有コンテナ内に収まるようクランプしてオフセットに採用します。
    /// 狭いビューポートではオフセットは常に0です。
    pub fn align(
        &mut self,
        viewport_width: u16,
        step_top: u16,
        container_height: u16,
        panel_height: u16,
    ) {
        if !self.is_visible() || viewport_width < WIDE_LAYOUT_MIN_WIDTH {
            self.offset = 0;
            return;
        }
        self.offset = step_top.min(container_height.saturating_sub(panel_height));
    }

    /// 現在の縦方向オフセット
    pub fn offset(&self) -> u16 {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::model::ViewMode;
    use crate::navigation::Navigation;

    fn panel_for(slug: &str) -> (VisualPanel, usize) {
        let catalog = Catalog::load_embedded().unwrap();
        let library = MockupLibrary::embedded().unwrap();
        let flow = catalog.get(slug).unwrap();
        (VisualPanel::new(flow, &library), flow.len())
    }

    #[test]
    fn test_panel_hidden_without_selection() {
        let (mut panel, _) = panel_for("first-contact-academy");
        panel.sync(None);
        assert!(!panel.is_visible());
        assert!(panel.content().is_none());
    }

    #[test]
    fn test_visibility_tracks_active_step_visual() {
        let catalog = Catalog::load_embedded().unwrap();
        let library = MockupLibrary::embedded().unwrap();
        for flow in catalog.flows() {
            let mut panel = VisualPanel::new(flow, &library);
            let mut nav = Navigation::new(flow.len(), ViewMode::StepByStep);
            loop {
                panel.sync(nav.active());
                let index = nav.active().unwrap();
                assert_eq!(
                    panel.is_visible(),
                    flow.steps[index].visual.is_some(),
                    "flow {} step {}",
                    flow.slug,
                    index
                );
                if let Some(mockup) = panel.content() {
                    assert_eq!(mockup.kind, flow.steps[index].visual.as_ref().unwrap().kind);
                }
                if !nav.advance() {
                    break;
                }
            }
        }
    }

    #[test]
    fn test_resync_follows_every_selection_change() {
        let (mut panel, len) = panel_for("creating-session-success-clips");
        let mut nav = Navigation::new(len, ViewMode::Complete);

        nav.select(3);
        panel.sync(nav.active());
        let kind_at_3 = panel.content().unwrap().kind;

        nav.select(0);
        panel.sync(nav.active());
        assert_ne!(panel.content().unwrap().kind, kind_at_3);
    }

    #[test]
    fn test_alignment_clamps_to_container() {
        let (mut panel, _) = panel_for("first-contact-academy");
        panel.sync(Some(0));

        panel.align(120, 10, 40, 12);
        assert_eq!(panel.offset(), 10);

        // コンテナ下端からはみ出す位置はクランプ
        panel.align(120, 35, 40, 12);
        assert_eq!(panel.offset(), 28);
    }

    #[test]
    fn test_alignment_skipped_on_narrow_viewport() {
        let (mut panel, _) = panel_for("first-contact-academy");
        panel.sync(Some(0));
        panel.align(80, 10, 40, 12);
        assert_eq!(panel.offset(), 0);
    }

    #[test]
    fn test_offset_cleared_when_hidden() {
        let (mut panel, _) = panel_for("first-contact-academy");
        panel.sync(Some(0));
        panel.align(120, 10, 40, 12);
        assert_eq!(panel.offset(), 10);

        panel.sync(None);
        assert_eq!(panel.offset(), 0);
    }
}
