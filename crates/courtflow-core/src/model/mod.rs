//! モデル定義
//!
//! Courtflowで使用されるデータモデルを定義します。
//! 各モデルは機能ごとにモジュールに分離されています。

mod flow;
mod role;
mod visual;

// Re-exports
pub use flow::*;
pub use role::*;
pub use visual::*;
