//! セッションスコープのUI状態ストア
//!
//! ダッシュボードの (role, page) ペアをJSONファイルへ保存・復元します。
//! 保存先は `COURTFLOW_SESSION_PATH` 環境変数、なければユーザーの
//! 状態ディレクトリです。壊れた・古い・存在しない保存値はエラーではなく
//! デフォルトとして扱います。

pub mod error;

pub use error::*;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const SESSION_VERSION: u32 = 1;
const SESSION_FILE: &str = "session.json";

/// 永続化されるダッシュボード状態
///
/// 検索語は意図的に含めません（画面ごとの一時状態）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSession {
    /// ロールフィルタのスラッグ（None = 全ロール）
    pub role: Option<String>,
    /// 現在ページ（1始まり）
    pub page: usize,
}

impl Default for DashboardSession {
    fn default() -> Self {
        Self { role: None, page: 1 }
    }
}

/// セッションファイルのペイロード
///
/// ダッシュボード状態は名前空間付きの単一キーの下に置きます。
#[derive(Debug, Serialize, Deserialize)]
struct SessionFile {
    version: u32,
    saved_at: DateTime<Utc>,
    #[serde(rename = "courtflow.dashboard")]
    dashboard: DashboardSession,
}

/// デフォルトのセッションファイルパスを解決する
///
/// 優先順位:
/// 1. 環境変数 COURTFLOW_SESSION_PATH (直接パス指定)
/// 2. ユーザー状態ディレクトリ: ~/.local/state/courtflow/session.json
pub fn session_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("COURTFLOW_SESSION_PATH") {
        return Ok(PathBuf::from(path));
    }

    let state_dir = dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .ok_or(ConfigError::StateDirNotFound)?
        .join("courtflow");

    Ok(state_dir.join(SESSION_FILE))
}

/// セッションファイルの読み書き
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// デフォルトパスのストアを開く
    pub fn open_default() -> Result<Self> {
        Ok(Self {
            path: session_path()?,
        })
    }

    /// 指定パスのストアを開く
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 保存されたダッシュボード状態をロードする
    ///
    /// ファイルが無い、JSONが壊れている、バージョンが合わない場合は
    /// すべてデフォルト（全ロール・1ページ目）にフォールバックします。
    pub fn load(&self) -> DashboardSession {
        let Ok(content) = std::fs::read_to_string(&self.path) else {
            return DashboardSession::default();
        };

        match serde_json::from_str::<SessionFile>(&content) {
            Ok(file) if file.version == SESSION_VERSION => DashboardSession {
                role: file.dashboard.role,
                page: file.dashboard.page.max(1),
            },
            _ => DashboardSession::default(),
        }
    }

    /// ダッシュボード状態を保存する
    pub fn save(&self, dashboard: &DashboardSession) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = SessionFile {
            version: SESSION_VERSION,
            saved_at: Utc::now(),
            dashboard: dashboard.clone(),
        };
        std::fs::write(&self.path, serde_json::to_string_pretty(&file)?)?;
        Ok(())
    }
}
