//! # courtflow-core
//!
//! アカデミーのユーザーフローカタログを閲覧するためのコア機能。
//!
//! Flow定義（KDL）のパース、カタログ、ロールレジストリ、
//! モックアップレンダリング、そしてステップナビゲーションエンジンを提供します。
//! 表示レイヤー（CLI / TUI）は `courtflow` クレート側にあります。

pub mod catalog;
pub mod dashboard;
pub mod error;
pub mod mockup;
pub mod model;
pub mod navigation;
pub mod parser;
pub mod registry;
pub mod sync;

pub use catalog::{Catalog, ValidationIssue};
pub use error::{CatalogError, Result};
pub use mockup::{Mockup, MockupLibrary};
pub use model::{Flow, FlowStep, PartyKey, PartyStyle, ViewMode, Visual, VisualKind};
pub use navigation::Navigation;
pub use sync::VisualPanel;
