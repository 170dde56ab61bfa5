use crate::core::error::ConfigError;
use crate::network::packet::byte_order::ByteOrder;
use crate::platform::{running_platform, Platform, FREEBSD_BIG_ENDIAN_SINCE};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Total Lengthフィールドの読み取り方針
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum TotalLengthOrder {
    Native,
    BigEndian,
    /// OSバージョンがthreshold以上ならビッグエンディアン、未満ならネイティブ
    VersionGated { threshold: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    pub total_length_order: TotalLengthOrder,
    #[serde(default)]
    pub os_version: u32,
}

static GLOBAL_CONFIG: OnceLock<ParserConfig> = OnceLock::new();

impl ParserConfig {
    pub fn new(total_length_order: TotalLengthOrder, os_version: u32) -> Self {
        Self {
            total_length_order,
            os_version,
        }
    }

    pub fn for_platform(platform: Platform) -> Self {
        Self::new(platform.total_length_order(), platform.os_version())
    }

    /// プロセス全体で共有する設定。未設定なら検出したプラットフォームの設定で一度だけ確定する
    pub fn global() -> &'static ParserConfig {
        GLOBAL_CONFIG.get_or_init(|| Self::for_platform(running_platform()))
    }

    /// 起動時に一度だけ呼ぶ。既に確定済みなら渡した設定をそのまま返す
    pub fn init_global(config: ParserConfig) -> Result<(), ParserConfig> {
        GLOBAL_CONFIG.set(config)?;
        log::info!("パーサー設定を初期化しました: {:?}", config);
        Ok(())
    }

    /// .envを読み込むため起動時に呼び、結果をinit_globalに渡す
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let platform = running_platform();

        let threshold = match lookup("ICMP_VERSION_THRESHOLD") {
            Some(value) => value
                .trim()
                .parse::<u32>()
                .map_err(|e| ConfigError::Invalid(format!("無効なICMP_VERSION_THRESHOLD: {}", e)))?,
            None => FREEBSD_BIG_ENDIAN_SINCE,
        };

        let total_length_order = match lookup("ICMP_TOTAL_LENGTH_ORDER").as_deref().map(str::trim) {
            Some("native") => TotalLengthOrder::Native,
            Some("big_endian") => TotalLengthOrder::BigEndian,
            Some("version_gated") => TotalLengthOrder::VersionGated { threshold },
            Some(other) => {
                return Err(ConfigError::Invalid(format!(
                    "無効なICMP_TOTAL_LENGTH_ORDER: {}",
                    other
                )))
            }
            None => platform.total_length_order(),
        };

        let os_version = match lookup("ICMP_OS_VERSION") {
            Some(value) => value
                .trim()
                .parse::<u32>()
                .map_err(|e| ConfigError::Invalid(format!("無効なICMP_OS_VERSION: {}", e)))?,
            None => platform.os_version(),
        };

        Ok(Self::new(total_length_order, os_version))
    }

    pub fn total_length_byte_order(&self) -> ByteOrder {
        match self.total_length_order {
            TotalLengthOrder::Native => ByteOrder::Native,
            TotalLengthOrder::BigEndian => ByteOrder::BigEndian,
            TotalLengthOrder::VersionGated { threshold } if self.os_version >= threshold => {
                ByteOrder::BigEndian
            }
            TotalLengthOrder::VersionGated { .. } => ByteOrder::Native,
        }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::for_platform(running_platform())
    }
}
