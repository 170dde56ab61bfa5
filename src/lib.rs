//! ICMPエラーメッセージに埋め込まれた元パケットのIPv4ヘッダーを解析する

pub mod core;
pub mod network;
pub mod platform;
pub mod setup_logger;

pub use crate::core::{ConfigError, LoggerError, ParseError, ParserConfig, TotalLengthOrder};
pub use network::packet::{ByteOrder, Header, HeaderFlags, HEADER_LEN};
pub use network::{parse_ipv4_header, parse_ipv4_header_with};
pub use platform::{running_platform, Platform};
