use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "状態ディレクトリが見つかりません。\n\
        COURTFLOW_SESSION_PATH 環境変数でセッションファイルを直接指定できます"
    )]
    StateDirNotFound,

    #[error("IO エラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("セッションのシリアライズに失敗しました: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
