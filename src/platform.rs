use crate::core::config::TotalLengthOrder;
use lazy_static::lazy_static;

/// FreeBSD 10.0 の kern.osreldate。これ以降はTotal Lengthがネットワークバイトオーダーで報告される
pub const FREEBSD_BIG_ENDIAN_SINCE: u32 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Darwin,
    FreeBsd { version: u32 },
    Other,
}

impl Platform {
    pub fn detect() -> Self {
        if cfg!(any(target_os = "macos", target_os = "ios")) {
            Platform::Darwin
        } else if cfg!(target_os = "freebsd") {
            Platform::FreeBsd { version: freebsd_version() }
        } else {
            Platform::Other
        }
    }

    pub fn total_length_order(&self) -> TotalLengthOrder {
        match self {
            Platform::Darwin => TotalLengthOrder::Native,
            Platform::FreeBsd { .. } => TotalLengthOrder::VersionGated {
                threshold: FREEBSD_BIG_ENDIAN_SINCE,
            },
            Platform::Other => TotalLengthOrder::BigEndian,
        }
    }

    pub fn os_version(&self) -> u32 {
        match self {
            Platform::FreeBsd { version } => *version,
            _ => 0,
        }
    }
}

lazy_static! {
    static ref RUNNING_PLATFORM: Platform = {
        let platform = Platform::detect();
        log::info!("実行プラットフォームを検出しました: {:?}", platform);
        platform
    };
}

/// 初回アクセス時に一度だけ検出し、以降は同じ値を返す
pub fn running_platform() -> Platform {
    *RUNNING_PLATFORM
}

#[cfg(target_os = "freebsd")]
fn freebsd_version() -> u32 {
    let mut version: u32 = 0;
    let mut len = std::mem::size_of::<u32>();

    let ret = unsafe {
        libc::sysctlbyname(
            b"kern.osreldate\0".as_ptr() as *const libc::c_char,
            &mut version as *mut u32 as *mut libc::c_void,
            &mut len,
            std::ptr::null(),
            0,
        )
    };

    if ret < 0 {
        log::warn!("kern.osreldateの取得に失敗しました: {}", std::io::Error::last_os_error());
        return 0;
    }

    version
}

#[cfg(not(target_os = "freebsd"))]
fn freebsd_version() -> u32 {
    0
}
