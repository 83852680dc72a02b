use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config;
use crate::models::Book;
use crate::utils::sanitize_filename;

/// 全书合并为一个纯文本文件：书名、简介，然后逐章标题加正文
pub fn save_txt(book: &Book, out_dir: &Path) -> Result<PathBuf> {
    config::ensure_dir(out_dir)?;

    let mut out = String::new();
    out.push_str(&book.info.title);
    out.push('\n');
    out.push_str(&book.info.desc);
    out.push_str("\n\n");

    for chapter in &book.chapters {
        out.push_str(&chapter.title);
        out.push_str("\n\n");
        for paragraph in &chapter.paragraphs {
            out.push_str(&paragraph.content);
            out.push('\n');
        }
        out.push('\n');
    }

    let path = out_dir.join(format!("{}.txt", sanitize_filename(&book.info.title)));
    fs::write(&path, out)?;
    Ok(path)
}
