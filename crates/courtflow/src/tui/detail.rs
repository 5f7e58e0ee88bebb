//! Flow詳細画面
//!
//! タイムラインとビジュアルパネルの2カラム表示。ナビゲーション状態は
//! この画面インスタンスが排他的に所有し、別のFlowを開くときは画面ごと
//! 作り直します。キー処理では必ず状態の更新 → パネルの再同期の順に
//! 実行します。

use crossterm::event::KeyCode;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use courtflow_core::model::{Flow, ViewMode};
use courtflow_core::registry;
use courtflow_core::sync::WIDE_LAYOUT_MIN_WIDTH;
use courtflow_core::{Catalog, MockupLibrary, Navigation, VisualPanel};

use super::{Transition, hex_color};

/// ビジュアルパネルのカラム幅（広いレイアウト時）
const PANEL_WIDTH: u16 = 40;

pub struct DetailScreen {
    slug: String,
    nav: Navigation,
    panel: VisualPanel,
}

impl DetailScreen {
    /// 指定Flowの詳細画面を構築
    ///
    /// スラッグが見つからない場合は None（呼び出し側が not-found 表示）。
    pub fn new(
        catalog: &Catalog,
        library: &MockupLibrary,
        slug: &str,
        mode: Option<ViewMode>,
        step: Option<usize>,
    ) -> Option<Self> {
        let flow = catalog.get(slug)?;
        let mut nav = Navigation::new(flow.len(), mode.unwrap_or(flow.view_mode));
        if let Some(number) = step {
            nav.open_at(number);
        }

        let mut panel = VisualPanel::new(flow, library);
        panel.sync(nav.active());

        Some(Self {
            slug: slug.to_string(),
            nav,
            panel,
        })
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Transition {
        match code {
            KeyCode::Char('q') => return Transition::Quit,
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Backspace => {
                return Transition::CloseDetail;
            }
            KeyCode::Char('m') => {
                let next = match self.nav.mode() {
                    ViewMode::Complete => ViewMode::StepByStep,
                    ViewMode::StepByStep => ViewMode::Complete,
                };
                self.nav.set_mode(next);
            }
            KeyCode::Right | KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('n') => {
                match self.nav.mode() {
                    ViewMode::StepByStep => {
                        self.nav.advance();
                    }
                    ViewMode::Complete => {
                        self.nav.select_next();
                    }
                }
            }
            KeyCode::Left | KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('p') => {
                match self.nav.mode() {
                    ViewMode::StepByStep => {
                        self.nav.retreat();
                    }
                    ViewMode::Complete => {
                        self.nav.select_previous();
                    }
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                self.nav.select(index);
            }
            _ => return Transition::None,
        }

        // 状態の更新が終わってからパネルを追従させる
        self.panel.sync(self.nav.active());
        Transition::None
    }

    pub fn draw(&mut self, frame: &mut Frame, catalog: &Catalog) {
        let Some(flow) = catalog.get(&self.slug) else {
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Min(6),
                Constraint::Length(3),
            ])
            .split(frame.area());

        self.draw_header(frame, chunks[0], flow);
        self.draw_mode_bar(frame, chunks[1]);
        self.draw_body(frame, chunks[2], flow);
        self.draw_footer(frame, chunks[3]);
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect, flow: &Flow) {
        let mut lines = vec![
            Line::from(Span::styled(
                flow.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                flow.subtitle.clone(),
                Style::default().fg(Color::Gray),
            )),
        ];
        if let Some(badge) = &flow.badge {
            lines.push(Line::from(Span::styled(
                badge.clone(),
                Style::default().fg(Color::Yellow),
            )));
        }
        frame.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::BOTTOM)),
            area,
        );
    }

    fn draw_mode_bar(&self, frame: &mut Frame, area: Rect) {
        let active = Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD);
        let inactive = Style::default().fg(Color::Gray);

        let mut spans = vec![
            Span::styled(
                " Complete ",
                if self.nav.mode() == ViewMode::Complete {
                    active
                } else {
                    inactive
                },
            ),
            Span::raw(" "),
            Span::styled(
                " Step-by-Step ",
                if self.nav.mode() == ViewMode::StepByStep {
                    active
                } else {
                    inactive
                },
            ),
        ];

        if self.nav.mode() == ViewMode::StepByStep {
            let prev_style = if self.nav.can_retreat() {
                Style::default()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let next_style = if self.nav.can_advance() {
                Style::default()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::raw("    "));
            spans.push(Span::styled("← Previous", prev_style));
            spans.push(Span::styled(
                format!("  {} / {}  ", self.nav.visible(), self.nav.len()),
                Style::default().add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled("Next →", next_style));
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL)),
            area,
        );
    }

    fn draw_body(&mut self, frame: &mut Frame, area: Rect, flow: &Flow) {
        let wide = area.width >= WIDE_LAYOUT_MIN_WIDTH;

        if !self.panel.is_visible() {
            self.panel.align(area.width, 0, area.height, 0);
            self.draw_timeline(frame, area, flow);
            return;
        }

        let panel_height = self.panel_height();
        if wide {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(PANEL_WIDTH), Constraint::Min(20)])
                .split(area);

            let step_top = self.active_step_top(flow);
            self.panel.align(area.width, step_top, area.height, panel_height);
            self.draw_panel(frame, columns[0], flow);
            self.draw_timeline(frame, columns[1], flow);
        } else {
            // 縦積みレイアウトでは位置合わせしない
            self.panel.align(area.width, 0, area.height, panel_height);
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(panel_height.min(area.height / 2)),
                    Constraint::Min(4),
                ])
                .split(area);
            self.draw_panel(frame, rows[0], flow);
            self.draw_timeline(frame, rows[1], flow);
        }
    }

    /// アクティブステップのタイムライン内での上端行
    fn active_step_top(&self, flow: &Flow) -> u16 {
        let Some(active) = self.nav.active() else {
            return 0;
        };
        let mut top = 0u16;
        for step in flow.steps.iter().take(active) {
            top += step_height(step);
        }
        top
    }

    fn panel_height(&self) -> u16 {
        match self.panel.content() {
            Some(mockup) => mockup.lines().count() as u16 + 2,
            None => 0,
        }
    }

    fn draw_panel(&self, frame: &mut Frame, area: Rect, flow: &Flow) {
        let Some(mockup) = self.panel.content() else {
            return;
        };
        let Some(active) = self.nav.active() else {
            return;
        };
        let Some(step) = flow.step(active) else {
            return;
        };

        let style_tokens = registry::lookup(&step.role);
        let offset = self.panel.offset().min(area.height.saturating_sub(3));
        let panel_area = Rect {
            x: area.x,
            y: area.y + offset,
            width: area.width,
            height: self.panel_height().min(area.height - offset),
        };

        let lines: Vec<Line> = mockup.lines().map(|l| Line::from(l.to_string())).collect();
        let block = Block::default()
            .title(format!("{} {}", style_tokens.icon, style_tokens.label))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(hex_color(style_tokens.color)));
        frame.render_widget(Paragraph::new(lines).block(block), panel_area);
    }

    fn draw_timeline(&self, frame: &mut Frame, area: Rect, flow: &Flow) {
        let mut lines = Vec::new();
        for (i, step) in flow.steps.iter().take(self.nav.visible()).enumerate() {
            let style_tokens = registry::lookup(&step.role);
            let is_active = self.nav.active() == Some(i);

            let marker = if is_active { "●" } else { "○" };
            let icon = step.step_icon.as_deref().unwrap_or(style_tokens.icon);
            let title_style = if is_active {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            lines.push(Line::from(vec![
                Span::styled(
                    format!("{marker} {:>2}. ", i + 1),
                    Style::default().fg(hex_color(style_tokens.color)),
                ),
                Span::raw(format!("{icon} ")),
                Span::styled(
                    format!("{}  ", style_tokens.label),
                    Style::default().fg(hex_color(style_tokens.color)),
                ),
                Span::styled(step.title.clone(), title_style),
            ]));
            if let Some(description) = &step.description {
                lines.push(Line::from(Span::styled(
                    format!("        {description}"),
                    Style::default().fg(Color::Gray),
                )));
            }
            lines.push(Line::from(""));
        }

        let hidden = flow.len() - self.nav.visible();
        if hidden > 0 {
            lines.push(Line::from(Span::styled(
                format!("… 残り{hidden}ステップ"),
                Style::default().fg(Color::DarkGray),
            )));
        }

        let block = Block::default().title("Timeline").borders(Borders::ALL);
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let help = match self.nav.mode() {
            ViewMode::StepByStep => {
                "→/↓: Next | ←/↑: Previous | 1-9: 選択 | m: モード切替 | Esc: 戻る | q: 終了"
            }
            ViewMode::Complete => {
                "↓↑: 選択 | 1-9: 選択 | m: モード切替 | Esc: 戻る | q: 終了"
            }
        };
        let footer = Paragraph::new(help)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, area);
    }
}

/// タイムライン上でステップが占める行数
fn step_height(step: &courtflow_core::model::FlowStep) -> u16 {
    if step.description.is_some() { 3 } else { 2 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen(slug: &str) -> DetailScreen {
        let catalog = Catalog::load_embedded().unwrap();
        let library = MockupLibrary::embedded().unwrap();
        DetailScreen::new(&catalog, &library, slug, Some(ViewMode::StepByStep), None).unwrap()
    }

    #[test]
    fn test_unknown_slug_yields_no_screen() {
        let catalog = Catalog::load_embedded().unwrap();
        let library = MockupLibrary::embedded().unwrap();
        assert!(DetailScreen::new(&catalog, &library, "nope", None, None).is_none());
    }

    #[test]
    fn test_arrow_keys_drive_navigation_and_panel() {
        let mut screen = screen("first-contact-academy");
        assert_eq!(screen.nav.visible(), 1);

        screen.handle_key(KeyCode::Right);
        screen.handle_key(KeyCode::Down);
        assert_eq!(screen.nav.visible(), 3);
        assert_eq!(screen.nav.active(), Some(2));
        // パネルはアクティブステップに追従している
        assert!(screen.panel.is_visible());

        screen.handle_key(KeyCode::Left);
        assert_eq!(screen.nav.visible(), 2);
        assert_eq!(screen.nav.active(), Some(1));
    }

    #[test]
    fn test_digit_selects_only_revealed_steps() {
        let mut screen = screen("first-contact-academy");
        screen.handle_key(KeyCode::Right);
        screen.handle_key(KeyCode::Right);

        screen.handle_key(KeyCode::Char('1'));
        assert_eq!(screen.nav.active(), Some(0));

        // 未表示のステップ7は選べない
        screen.handle_key(KeyCode::Char('7'));
        assert_eq!(screen.nav.active(), Some(0));
    }

    #[test]
    fn test_mode_toggle_resets_navigation() {
        let mut screen = screen("first-contact-academy");
        screen.handle_key(KeyCode::Right);
        screen.handle_key(KeyCode::Right);

        screen.handle_key(KeyCode::Char('m'));
        assert_eq!(screen.nav.mode(), ViewMode::Complete);
        assert_eq!(screen.nav.visible(), 7);
        assert_eq!(screen.nav.active(), None);
        assert!(!screen.panel.is_visible());

        screen.handle_key(KeyCode::Char('m'));
        assert_eq!(screen.nav.mode(), ViewMode::StepByStep);
        assert_eq!(screen.nav.visible(), 1);
        assert_eq!(screen.nav.active(), Some(0));
    }

    #[test]
    fn test_escape_closes_detail_and_q_quits() {
        let mut screen = screen("first-contact-academy");
        assert!(matches!(
            screen.handle_key(KeyCode::Esc),
            Transition::CloseDetail
        ));
        assert!(matches!(
            screen.handle_key(KeyCode::Char('q')),
            Transition::Quit
        ));
    }
}
