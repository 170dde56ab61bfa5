pub mod config;
pub mod error;

pub use config::{ParserConfig, TotalLengthOrder};
pub use error::{ConfigError, LoggerError, ParseError};
