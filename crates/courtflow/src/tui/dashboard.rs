//! ダッシュボード画面
//!
//! Flowカードの一覧・ロールフィルタチップ・検索ボックス・ページネーション。
//! (role, page) ペアはセッションストアへ永続化し、次回起動時に復元します。
//! 検索語は一時状態として保存しません。

use crossterm::event::KeyCode;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use courtflow_config::{DashboardSession, SessionStore};
use courtflow_core::Catalog;
use courtflow_core::dashboard::{Dashboard, PageItem, page_numbers, total_pages};
use courtflow_core::model::PartyKey;
use courtflow_core::registry;
use tracing::warn;

use super::{Transition, hex_color};

pub struct DashboardScreen {
    state: Dashboard,
    /// 現在ページ内で選択中のカード
    selected: usize,
    /// 検索ボックスへ入力中（テキスト入力中は矢印ナビゲーション無効）
    input_mode: bool,
    store: Option<SessionStore>,
}

impl DashboardScreen {
    pub fn new(catalog: &Catalog) -> Self {
        let store = match SessionStore::open_default() {
            Ok(store) => Some(store),
            Err(e) => {
                warn!(error = %e, "Session store unavailable, dashboard state will not persist");
                None
            }
        };
        let session = store
            .as_ref()
            .map(|s| s.load())
            .unwrap_or_default();

        Self {
            state: Dashboard::restore(catalog, session.role.as_deref(), session.page),
            selected: 0,
            input_mode: false,
            store,
        }
    }

    /// (role, page) をセッションストアへ書き出す
    ///
    /// 保存の失敗は閲覧の継続を妨げない（警告のみ）。
    pub fn persist(&self) {
        let Some(store) = &self.store else {
            return;
        };
        let session = DashboardSession {
            role: self.state.role().map(|k| k.slug().to_string()),
            page: self.state.page(),
        };
        if let Err(e) = store.save(&session) {
            warn!(error = %e, "Failed to persist dashboard state");
        }
    }

    pub fn handle_key(&mut self, catalog: &Catalog, code: KeyCode) -> Transition {
        if self.input_mode {
            return self.handle_search_key(catalog, code);
        }

        match code {
            KeyCode::Char('q') => return Transition::Quit,
            KeyCode::Char('/') => self.input_mode = true,
            KeyCode::Tab => {
                self.state.set_role(catalog, next_role(self.state.role()));
                self.selected = 0;
                self.persist();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let shown = self.shown_count(catalog);
                if shown > 0 && self.selected + 1 < shown {
                    self.selected += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('n') => {
                self.state.next_page(catalog);
                self.selected = 0;
                self.persist();
            }
            KeyCode::Left | KeyCode::Char('p') => {
                self.state.previous_page();
                self.selected = 0;
                self.persist();
            }
            KeyCode::Enter => {
                let matching = self.state.matching(catalog);
                let page = self.state.page_slice(&matching);
                if let Some(slug) = page.get(self.selected) {
                    return Transition::OpenFlow(slug.to_string());
                }
            }
            _ => {}
        }
        Transition::None
    }

    fn handle_search_key(&mut self, catalog: &Catalog, code: KeyCode) -> Transition {
        match code {
            KeyCode::Esc | KeyCode::Enter => self.input_mode = false,
            KeyCode::Backspace => {
                let mut term = self.state.search().to_string();
                term.pop();
                self.state.set_search(catalog, term);
                self.selected = 0;
            }
            KeyCode::Char(c) => {
                let mut term = self.state.search().to_string();
                term.push(c);
                self.state.set_search(catalog, term);
                self.selected = 0;
            }
            // 矢印キーはテキスト入力中のナビゲーションに使わない
            _ => {}
        }
        Transition::None
    }

    fn shown_count(&self, catalog: &Catalog) -> usize {
        let matching = self.state.matching(catalog);
        self.state.page_slice(&matching).len()
    }

    pub fn draw(&mut self, frame: &mut Frame, catalog: &Catalog) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(6),
                Constraint::Length(3),
            ])
            .split(frame.area());

        self.draw_header(frame, chunks[0], catalog);
        self.draw_search(frame, chunks[1]);
        self.draw_role_chips(frame, chunks[2]);
        self.draw_cards(frame, chunks[3], catalog);
        self.draw_footer(frame, chunks[4], catalog);
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect, catalog: &Catalog) {
        let title = Paragraph::new(format!("Courtflow — {} flows", catalog.len()))
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, area);
    }

    fn draw_search(&self, frame: &mut Frame, area: Rect) {
        let border_style = if self.input_mode {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let text = if self.input_mode {
            format!("{}▏", self.state.search())
        } else {
            self.state.search().to_string()
        };
        let search = Paragraph::new(text).block(
            Block::default()
                .title("検索 (/)")
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        frame.render_widget(search, area);
    }

    fn draw_role_chips(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::raw(" ")];
        let all_style = if self.state.role().is_none() {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(" All ", all_style));
        spans.push(Span::raw(" "));

        for key in PartyKey::FILTERABLE {
            let style_tokens = registry::style_of(*key);
            let style = if self.state.role() == Some(*key) {
                Style::default()
                    .fg(Color::Black)
                    .bg(hex_color(style_tokens.bg))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(hex_color(style_tokens.color))
            };
            spans.push(Span::styled(
                format!(" {} {} ", style_tokens.icon, style_tokens.label),
                style,
            ));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled("(Tabで切り替え)", Style::default().fg(Color::DarkGray)));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn draw_cards(&self, frame: &mut Frame, area: Rect, catalog: &Catalog) {
        let matching = self.state.matching(catalog);
        let page = self.state.page_slice(&matching);

        if page.is_empty() {
            let empty = Paragraph::new("一致するFlowはありません")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = page
            .iter()
            .enumerate()
            .filter_map(|(i, slug)| {
                let flow = catalog.get(slug)?;
                let title_style = if i == self.selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().add_modifier(Modifier::BOLD)
                };

                let image = flow.image.as_deref().unwrap_or("·");
                let mut title_spans = vec![
                    Span::raw(format!("{image} ")),
                    Span::styled(flow.title.clone(), title_style),
                ];
                if let Some(badge) = &flow.badge {
                    title_spans.push(Span::styled(
                        format!("  [{badge}]"),
                        Style::default().fg(Color::Yellow),
                    ));
                }

                let chips: Vec<Span> = flow
                    .roles
                    .iter()
                    .map(|role| {
                        let style_tokens = registry::lookup(role);
                        Span::styled(
                            format!("{} {}  ", style_tokens.icon, style_tokens.label),
                            Style::default().fg(hex_color(style_tokens.color)),
                        )
                    })
                    .collect();

                Some(ListItem::new(vec![
                    Line::from(title_spans),
                    Line::from(Span::styled(
                        format!("  {}", flow.subtitle),
                        Style::default().fg(Color::Gray),
                    )),
                    Line::from(chips),
                    Line::from(""),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(format!("Flows ({}件)", matching.len()))
                .borders(Borders::ALL),
        );
        frame.render_widget(list, area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect, catalog: &Catalog) {
        let matching = self.state.matching(catalog).len();
        let total = total_pages(matching);

        let mut spans = vec![Span::raw("ページ: ")];
        for item in page_numbers(self.state.page(), total) {
            match item {
                PageItem::Page(n) if n == self.state.page() => {
                    spans.push(Span::styled(
                        format!(" {n} "),
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ));
                }
                PageItem::Page(n) => spans.push(Span::raw(format!(" {n} "))),
                PageItem::Ellipsis => spans.push(Span::styled(" … ", Style::default().fg(Color::DarkGray))),
            }
        }
        spans.push(Span::styled(
            "   ↑↓: 選択 | Enter: 開く | ←→: ページ | Tab: ロール | /: 検索 | q: 終了",
            Style::default().fg(Color::Gray),
        ));

        let footer = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, area);
    }
}

/// ロールフィルタの巡回順: All → 各パーティ → All
fn next_role(current: Option<PartyKey>) -> Option<PartyKey> {
    match current {
        None => PartyKey::FILTERABLE.first().copied(),
        Some(key) => {
            let position = PartyKey::FILTERABLE.iter().position(|k| *k == key);
            position.and_then(|i| PartyKey::FILTERABLE.get(i + 1)).copied()
        }
    }
}
