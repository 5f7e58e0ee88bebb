//! TUI (Terminal User Interface) モジュール
//!
//! ratatuiを使用したダッシュボード画面とFlow詳細画面。
//! キー入力は常に「いま表示中の画面」1つだけに配送されます（画面の
//! 切り替えは `Screen` が指す明示的なアクティブビューで管理）。

pub mod dashboard;
pub mod detail;
pub mod terminal;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::Frame;
use ratatui::style::Color;

use courtflow_core::model::ViewMode;
use courtflow_core::{Catalog, MockupLibrary};

use dashboard::DashboardScreen;
use detail::DetailScreen;
use terminal::{restore_terminal, setup_terminal};

/// いまキー入力を受け取る画面
enum Screen {
    Dashboard,
    Detail,
}

/// 画面からアプリ本体への遷移要求
pub(crate) enum Transition {
    None,
    OpenFlow(String),
    CloseDetail,
    Quit,
}

struct App<'a> {
    catalog: &'a Catalog,
    library: &'a MockupLibrary,
    screen: Screen,
    dashboard: DashboardScreen,
    detail: Option<DetailScreen>,
    should_quit: bool,
}

impl<'a> App<'a> {
    fn new(catalog: &'a Catalog, library: &'a MockupLibrary, detail: Option<DetailScreen>) -> Self {
        let screen = if detail.is_some() {
            Screen::Detail
        } else {
            Screen::Dashboard
        };
        Self {
            catalog,
            library,
            screen,
            dashboard: DashboardScreen::new(catalog),
            detail,
            should_quit: false,
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        match self.screen {
            Screen::Dashboard => self.dashboard.draw(frame, self.catalog),
            Screen::Detail => {
                if let Some(detail) = &mut self.detail {
                    detail.draw(frame, self.catalog);
                }
            }
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        let transition = match self.screen {
            Screen::Dashboard => self.dashboard.handle_key(self.catalog, code),
            Screen::Detail => match &mut self.detail {
                Some(detail) => detail.handle_key(code),
                None => Transition::CloseDetail,
            },
        };

        match transition {
            Transition::None => {}
            Transition::OpenFlow(slug) => self.open_flow(&slug),
            Transition::CloseDetail => {
                // 詳細ビューを破棄してナビゲーション状態ごと捨てる
                self.detail = None;
                self.screen = Screen::Dashboard;
            }
            Transition::Quit => {
                self.dashboard.persist();
                self.should_quit = true;
            }
        }
    }

    fn open_flow(&mut self, slug: &str) {
        // Flowごとに新しいインスタンスを構築する（状態の持ち越しはしない）
        if let Some(detail) = DetailScreen::new(self.catalog, self.library, slug, None, None) {
            self.detail = Some(detail);
            self.screen = Screen::Detail;
        }
    }

    fn event_loop(&mut self, terminal: &mut terminal::Tui) -> anyhow::Result<()> {
        loop {
            terminal.draw(|frame| self.draw(frame))?;

            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                self.handle_key(key.code);
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }
}

/// ダッシュボードからTUIを起動
pub fn run_dashboard(catalog: &Catalog, library: &MockupLibrary) -> anyhow::Result<()> {
    run(catalog, library, None)
}

/// 指定Flowの詳細画面からTUIを起動（`court show <slug>`）
pub fn run_detail(
    catalog: &Catalog,
    library: &MockupLibrary,
    slug: &str,
    mode: Option<ViewMode>,
    step: Option<usize>,
) -> anyhow::Result<()> {
    let detail = DetailScreen::new(catalog, library, slug, mode, step);
    run(catalog, library, detail)
}

fn run(
    catalog: &Catalog,
    library: &MockupLibrary,
    detail: Option<DetailScreen>,
) -> anyhow::Result<()> {
    let mut terminal = setup_terminal()?;
    let mut app = App::new(catalog, library, detail);
    let result = app.event_loop(&mut terminal);
    restore_terminal(&mut terminal)?;
    result
}

/// デザイントークンのhex文字列を端末色へ変換
pub(crate) fn hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return Color::Reset;
    }
    match (
        u8::from_str_radix(&hex[0..2], 16),
        u8::from_str_radix(&hex[2..4], 16),
        u8::from_str_radix(&hex[4..6], 16),
    ) {
        (Ok(r), Ok(g), Ok(b)) => Color::Rgb(r, g, b),
        _ => Color::Reset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_parses_design_tokens() {
        assert_eq!(hex_color("#0F5132"), Color::Rgb(0x0F, 0x51, 0x32));
        assert_eq!(hex_color("#EEF2FF"), Color::Rgb(0xEE, 0xF2, 0xFF));
    }

    #[test]
    fn test_hex_color_tolerates_garbage() {
        assert_eq!(hex_color(""), Color::Reset);
        assert_eq!(hex_color("#12345"), Color::Reset);
        assert_eq!(hex_color("#GGGGGG"), Color::Reset);
    }
}
