use anyhow::Result;
use chrono::Local;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// 统一的下载根目录
pub fn download_dir() -> PathBuf {
    PathBuf::from("download")
}

/// 当前日期的路径片段（年月日）
pub fn date_path() -> String {
    Local::now().format("%Y%m%d").to_string()
}

pub fn word_dir() -> PathBuf {
    download_dir().join("word").join(date_path())
}

pub fn txt_dir() -> PathBuf {
    download_dir().join("txt").join(date_path())
}

pub fn json_dir() -> PathBuf {
    download_dir().join("json").join(date_path())
}

fn log_file() -> PathBuf {
    download_dir().join("log").join("download.log")
}

/// 确保目录存在，不存在则创建
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// 追加一行到下载日志，日志写不进去不影响下载流程
pub fn set_log(content: &str) {
    if let Err(e) = append_log(content) {
        println!("写入日志失败: {}", e);
    }
}

fn append_log(content: &str) -> Result<()> {
    let log_path = log_file();
    if let Some(log_dir) = log_path.parent() {
        ensure_dir(log_dir)?;
    }
    let mut file = fs::OpenOptions::new().create(true).append(true).open(&log_path)?;
    writeln!(file, "{}", content)?;
    Ok(())
}
