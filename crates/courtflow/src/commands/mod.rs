//! CLIコマンド
//!
//! TUIを使わない非対話の出力コマンド群。

pub mod list;
pub mod roles;
pub mod show;
pub mod validate;
