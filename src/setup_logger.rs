use crate::core::error::LoggerError;
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

pub fn setup_logger(level: LevelFilter, log_file: Option<&Path>) -> Result<(), LoggerError> {
    let mut builder = Builder::new();

    // ログレベルの設定
    builder.filter_level(level);

    // タイムスタンプ付きのフォーマット
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] {} - {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    // ファイル指定があればファイルに、なければ標準出力に出力
    match log_file {
        Some(path) => {
            // 既存のログを消さないよう追記モードで開く
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        None => {
            builder.target(Target::Stdout);
        }
    }

    builder
        .try_init()
        .map_err(|e| LoggerError::AlreadyInitialized(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{info, Log};

    #[test]
    fn test_setup_logger_writes_to_file() {
        let path = std::env::temp_dir().join(format!("icmp-inner-ipv4-{}.log", std::process::id()));

        let _ = std::fs::remove_file(&path);

        setup_logger(LevelFilter::Info, Some(path.as_path())).unwrap();
        info!("ロガーのテスト");
        log::logger().flush();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("[INFO]"));
        assert!(contents.contains("ロガーのテスト"));

        // 二回目の初期化は失敗し、既存のログは残る
        assert!(matches!(
            setup_logger(LevelFilter::Info, Some(path.as_path())),
            Err(LoggerError::AlreadyInitialized(_))
        ));
        let after = std::fs::read_to_string(&path).unwrap();
        assert!(after.contains("ロガーのテスト"));

        assert!(matches!(
            setup_logger(LevelFilter::Info, None),
            Err(LoggerError::AlreadyInitialized(_))
        ));

        let _ = std::fs::remove_file(&path);
    }
}
