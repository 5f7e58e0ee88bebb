//! ダッシュボードのフィルタとページネーション
//!
//! カタログから導出される純粋なビューです。ロールフィルタと
//! フリーテキスト検索で絞り込んだスラッグ列を、1ページ12件で分割します。
//! 一致集合が縮んだときは現在ページを必ずクランプし直します。

use crate::catalog::Catalog;
use crate::model::PartyKey;

/// 1ページあたりのカード数
pub const PAGE_SIZE: usize = 12;

/// ページ番号リストの省略位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// ダッシュボードの絞り込み状態
///
/// `role` と `page` はセッションをまたいで永続化されます。
/// `search` は画面ごとの一時状態で、保存されません。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    role: Option<PartyKey>,
    search: String,
    page: usize,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self {
            role: None,
            search: String::new(),
            page: 1,
        }
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// 永続化された (role, page) から復元する
    ///
    /// 未知のロール名は「全ロール」へ、ページは後続のクランプで
    /// 有効範囲へ戻します。壊れた保存値がエラーになることはありません。
    pub fn restore(catalog: &Catalog, role: Option<&str>, page: usize) -> Self {
        let mut dashboard = Self {
            role: role.and_then(PartyKey::parse),
            search: String::new(),
            page: page.max(1),
        };
        dashboard.clamp_page(catalog);
        dashboard
    }

    pub fn role(&self) -> Option<PartyKey> {
        self.role
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// 絞り込みに一致するスラッグ（宣言順）
    pub fn matching<'a>(&self, catalog: &'a Catalog) -> Vec<&'a str> {
        let by_search = catalog.search(&self.search);
        match self.role {
            None => by_search,
            Some(role) => {
                let by_role = catalog.slugs_by_role(role.label());
                by_search
                    .into_iter()
                    .filter(|slug| by_role.contains(slug))
                    .collect()
            }
        }
    }

    /// 現在ページに載るスラッグ
    pub fn page_slice<'a>(&self, matching: &'a [&'a str]) -> &'a [&'a str] {
        let start = (self.page - 1) * PAGE_SIZE;
        if start >= matching.len() {
            return &[];
        }
        let end = (start + PAGE_SIZE).min(matching.len());
        &matching[start..end]
    }

    /// ロールフィルタを変更する（ページはクランプし直し）
    pub fn set_role(&mut self, catalog: &Catalog, role: Option<PartyKey>) {
        self.role = role;
        self.clamp_page(catalog);
    }

    /// 検索語を変更する（ページはクランプし直し）
    pub fn set_search(&mut self, catalog: &Catalog, term: impl Into<String>) {
        self.search = term.into();
        self.clamp_page(catalog);
    }

    pub fn next_page(&mut self, catalog: &Catalog) {
        if self.page < total_pages(self.matching(catalog).len()) {
            self.page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// 一致集合の変化後にページを有効範囲へ戻す
    pub fn clamp_page(&mut self, catalog: &Catalog) {
        let total = total_pages(self.matching(catalog).len());
        self.page = self.page.clamp(1, total);
    }
}

/// 総ページ数（一致0件でも1ページ）
pub fn total_pages(matching: usize) -> usize {
    matching.div_ceil(PAGE_SIZE).max(1)
}

/// ページネーションに並べる番号列
///
/// 5ページ以下なら全番号、それ以上は先頭・末尾と現在ページ周辺の
/// ウィンドウを省略記号でつなぎます。
pub fn page_numbers(current: usize, total: usize) -> Vec<PageItem> {
    use PageItem::*;

    if total <= 5 {
        return (1..=total).map(Page).collect();
    }

    let mut items = vec![Page(1)];
    if current <= 3 {
        items.extend((2..=4).map(Page));
        items.push(Ellipsis);
        items.push(Page(total));
    } else if current >= total - 2 {
        items.push(Ellipsis);
        items.extend((total - 3..=total).map(Page));
    } else {
        items.push(Ellipsis);
        items.extend((current - 1..=current + 1).map(Page));
        items.push(Ellipsis);
        items.push(Page(total));
    }
    items
}
