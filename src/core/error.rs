use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("IPv4ヘッダーが短すぎます: {length}バイト (最小20バイト)")]
    HeaderTooShort { length: usize },

    #[error("バッファが短すぎます: ヘッダー長{declared}バイトに対してバッファは{available}バイト")]
    BufferTooShort { declared: usize, available: usize },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("設定エラー: {0}")]
    Invalid(String),

    #[error("設定JSONの解析に失敗しました: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("ログファイルを開けませんでした: {0}")]
    Io(#[from] std::io::Error),

    #[error("ロガーは既に初期化されています: {0}")]
    AlreadyInitialized(String),
}

pub type ParseResult<T> = Result<T, ParseError>;
