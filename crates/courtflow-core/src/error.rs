use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("KDLパースエラー: {0}")]
    KdlParse(#[from] kdl::KdlError),

    #[error("無効なFlow定義: {0}")]
    InvalidFlow(String),

    #[error("Flow \"{0}\" にステップが1つもありません")]
    EmptyFlow(String),

    #[error("スラッグが重複しています: {0}")]
    DuplicateSlug(String),

    #[error("モックアップテンプレートの登録に失敗しました: {0}")]
    Template(#[from] tera::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
