use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config;
use crate::models::Book;
use crate::utils::sanitize_filename;

/// 全书序列化为 JSON，保留每章的统计字段
pub fn save_json(book: &Book, out_dir: &Path) -> Result<PathBuf> {
    config::ensure_dir(out_dir)?;

    let content = serde_json::to_string_pretty(book)?;
    let path = out_dir.join(format!("{}.json", sanitize_filename(&book.info.title)));
    fs::write(&path, content)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BookInfo, ChapterRecord, Paragraph, ParagraphKind};

    #[test]
    fn json_round_trips_record_fields() {
        let mut chapter = ChapterRecord::pending(
            "桃花源记".to_string(),
            "https://www.gushiwen.cn/guwen/bookv_2.aspx".to_string(),
        );
        chapter.fill(
            "桃花源记".to_string(),
            vec![Paragraph { content: "晋太元中，武陵人捕鱼为业。".to_string(), kind: ParagraphKind::Text }],
        );
        let book = Book {
            info: BookInfo {
                title: "陶渊明集".to_string(),
                desc: "简介：无".to_string(),
                url: "https://www.gushiwen.cn/guwen/book_2.aspx".to_string(),
                crawled_at: "2024-01-01 00:00:00".to_string(),
            },
            chapters: vec![chapter],
        };

        let tmp = tempfile::tempdir().unwrap();
        let path = save_json(&book, tmp.path()).unwrap();
        let content = fs::read_to_string(&path).unwrap();

        let parsed: Book = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.info.title, "陶渊明集");
        assert_eq!(parsed.chapters.len(), 1);
        assert_eq!(parsed.chapters[0].paragraph_count, 1);
        assert_eq!(parsed.chapters[0].char_count, 13);
        assert!(parsed.chapters[0].success);
    }
}
