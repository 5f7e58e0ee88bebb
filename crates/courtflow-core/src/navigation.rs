//! ステップナビゲーションエンジン
//!
//! 詳細ビュー1インスタンスごとのナビゲーション状態を管理する状態機械。
//! どのステップがアクティブで、何ステップまで表示済みかを
//! 2つの表示モードの下で管理します。状態はビューが直接所有し、
//! グローバルなレジストリは持ちません。

use crate::model::ViewMode;

/// 1つのFlow詳細ビューが所有するナビゲーション状態
///
/// 不変条件:
/// - `active` が `Some(i)` のとき `i < len`
/// - `1 <= visible <= len`
/// - Complete モードでは常に `visible == len`
/// - StepByStep モードでは `active` は常に `Some(i)` かつ `i < visible`
///
/// 別のFlowを表示するときは新しいインスタンスを構築します。
/// インスタンス間で状態が漏れることはありません。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    len: usize,
    mode: ViewMode,
    active: Option<usize>,
    visible: usize,
}

impl Navigation {
    /// 指定モードで新しいナビゲーション状態を作成
    ///
    /// `len` は1以上であること（カタログは空のFlowを拒否します）。
    pub fn new(len: usize, mode: ViewMode) -> Self {
        debug_assert!(len >= 1, "flows never have zero steps");
        match mode {
            ViewMode::Complete => Self {
                len,
                mode,
                active: None,
                visible: len,
            },
            ViewMode::StepByStep => Self {
                len,
                mode,
                active: Some(0),
                visible: 1,
            },
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// アクティブなステップのインデックス
    ///
    /// Complete モードで何も選択されていない間は None（パネル非表示）。
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// 表示済みステップ数
    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// "Next" コントロールが有効か
    pub fn can_advance(&self) -> bool {
        self.mode == ViewMode::StepByStep && self.visible < self.len
    }

    /// "Previous" コントロールが有効か
    pub fn can_retreat(&self) -> bool {
        self.mode == ViewMode::StepByStep && self.visible > 1
    }

    /// 次のステップを表示する
    ///
    /// 新しく表示されたステップが自動的にアクティブになります。
    /// 既に最後まで表示済みの場合は何もしません（エラーではない）。
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.visible += 1;
        self.active = Some(self.visible - 1);
        true
    }

    /// 最後に表示したステップを隠す
    ///
    /// 先頭ステップのみの表示まで戻ったら何もしません。
    pub fn retreat(&mut self) -> bool {
        if !self.can_retreat() {
            return false;
        }
        self.visible -= 1;
        self.active = Some(self.visible - 1);
        true
    }

    /// ステップを直接選択する
    ///
    /// StepByStep モードでは表示済みのステップのみ選択できます。
    /// 範囲外のインデックスは黙って無視されます。無効化済みの
    /// コントロールからの遅延クリックを許容するための防御的な契約です。
    pub fn select(&mut self, index: usize) -> bool {
        let bound = match self.mode {
            ViewMode::Complete => self.len,
            ViewMode::StepByStep => self.visible,
        };
        if index >= bound || self.active == Some(index) {
            return false;
        }
        self.active = Some(index);
        true
    }

    /// 選択を1つ次へ移動（Complete モードの矢印キー操作）
    ///
    /// 未選択の状態からは先頭ステップを選択します。
    pub fn select_next(&mut self) -> bool {
        match self.active {
            Some(i) => self.select(i + 1),
            None => self.select(0),
        }
    }

    /// 選択を1つ前へ移動
    pub fn select_previous(&mut self) -> bool {
        match self.active {
            Some(i) if i > 0 => self.select(i - 1),
            _ => false,
        }
    }

    /// 表示モードを切り替える
    ///
    /// StepByStep への切り替えは常に先頭ステップのみの表示へリセットします。
    /// Complete への切り替えは全ステップを表示し、選択ハイライトを解除します
    /// （明示的に選択し直すまでパネルは非表示）。
    pub fn set_mode(&mut self, mode: ViewMode) {
        *self = Self::new(self.len, mode);
    }

    /// 1-basedのステップ番号で初期位置を指定する（`--step` オプション）
    ///
    /// 範囲外は `[1, len]` にクランプされます。StepByStep モードでは
    /// そのステップまでを表示済みにします。
    pub fn open_at(&mut self, step_number: usize) {
        let clamped = step_number.clamp(1, self.len);
        match self.mode {
            ViewMode::StepByStep => {
                self.visible = clamped;
                self.active = Some(clamped - 1);
            }
            ViewMode::Complete => {
                self.active = Some(clamped - 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step_by_step(len: usize) -> Navigation {
        Navigation::new(len, ViewMode::StepByStep)
    }

    #[test]
    fn test_fresh_step_by_step_state() {
        let nav = step_by_step(7);
        assert_eq!(nav.active(), Some(0));
        assert_eq!(nav.visible(), 1);
        assert!(nav.can_advance());
        assert!(!nav.can_retreat());
    }

    #[test]
    fn test_advance_reveals_and_selects_latest() {
        // advance() を i 回呼ぶと active == i, visible == i + 1
        for i in 0..7 {
            let mut nav = step_by_step(7);
            for _ in 0..i {
                nav.advance();
            }
            assert_eq!(nav.active(), Some(i));
            assert_eq!(nav.visible(), i + 1);
        }
    }

    #[test]
    fn test_retreat_is_left_inverse_of_advance() {
        for k in 2..=7 {
            let mut nav = step_by_step(7);
            for _ in 1..k {
                nav.advance();
            }
            assert_eq!(nav.visible(), k);
            nav.advance();
            nav.retreat();
            assert_eq!(nav.visible(), k);
            assert_eq!(nav.active(), Some(k - 1));
        }
    }

    #[test]
    fn test_advance_at_end_is_noop() {
        let mut nav = step_by_step(3);
        nav.advance();
        nav.advance();
        assert_eq!(nav.visible(), 3);
        assert!(!nav.can_advance());

        let before = nav.clone();
        assert!(!nav.advance());
        assert_eq!(nav, before);
    }

    #[test]
    fn test_retreat_at_start_is_noop() {
        let mut nav = step_by_step(3);
        let before = nav.clone();
        assert!(!nav.retreat());
        assert_eq!(nav, before);
        assert!(!nav.can_retreat());
    }

    #[test]
    fn test_select_unrevealed_step_is_rejected() {
        let mut nav = step_by_step(5);
        nav.advance();
        assert_eq!(nav.visible(), 2);

        assert!(!nav.select(2));
        assert_eq!(nav.active(), Some(1));

        assert!(nav.select(0));
        assert_eq!(nav.active(), Some(0));
        // 選択は表示済みステップ数に影響しない
        assert_eq!(nav.visible(), 2);
    }

    #[test]
    fn test_select_out_of_range_in_complete_mode() {
        let mut nav = Navigation::new(4, ViewMode::Complete);
        assert!(nav.select(3));
        assert!(!nav.select(4));
        assert_eq!(nav.active(), Some(3));
    }

    #[test]
    fn test_complete_mode_shows_all_without_selection() {
        let nav = Navigation::new(6, ViewMode::Complete);
        assert_eq!(nav.visible(), 6);
        assert_eq!(nav.active(), None);
        assert!(!nav.can_advance());
        assert!(!nav.can_retreat());
    }

    #[test]
    fn test_mode_switch_resets() {
        let mut nav = step_by_step(6);
        nav.advance();
        nav.advance();
        nav.advance();

        nav.set_mode(ViewMode::Complete);
        assert_eq!(nav.visible(), 6);
        assert_eq!(nav.active(), None);

        nav.select(4);
        nav.set_mode(ViewMode::StepByStep);
        assert_eq!(nav.visible(), 1);
        assert_eq!(nav.active(), Some(0));
    }

    #[test]
    fn test_select_next_and_previous_in_complete_mode() {
        let mut nav = Navigation::new(3, ViewMode::Complete);
        assert!(nav.select_next());
        assert_eq!(nav.active(), Some(0));
        assert!(nav.select_next());
        assert!(nav.select_next());
        assert_eq!(nav.active(), Some(2));
        assert!(!nav.select_next());

        assert!(nav.select_previous());
        assert_eq!(nav.active(), Some(1));
    }

    #[test]
    fn test_seven_step_scenario() {
        // first-contact-academy は7ステップ
        let mut nav = step_by_step(7);
        for _ in 0..4 {
            nav.advance();
        }
        assert_eq!(nav.visible(), 5);
        assert_eq!(nav.active(), Some(4));
        assert!(nav.can_retreat());
        assert!(nav.can_advance());

        for _ in 0..3 {
            nav.advance();
        }
        assert_eq!(nav.visible(), 7);
        assert!(!nav.can_advance());

        let before = nav.clone();
        nav.advance();
        assert_eq!(nav, before);
    }

    #[test]
    fn test_open_at_clamps() {
        let mut nav = step_by_step(7);
        nav.open_at(5);
        assert_eq!(nav.visible(), 5);
        assert_eq!(nav.active(), Some(4));

        nav.open_at(99);
        assert_eq!(nav.visible(), 7);
        assert_eq!(nav.active(), Some(6));

        nav.open_at(0);
        assert_eq!(nav.visible(), 1);
        assert_eq!(nav.active(), Some(0));

        let mut complete = Navigation::new(7, ViewMode::Complete);
        complete.open_at(3);
        assert_eq!(complete.visible(), 7);
        assert_eq!(complete.active(), Some(2));
    }
}
