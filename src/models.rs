use serde::{Deserialize, Serialize};

/// 段落类型：正文或章内小标题
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParagraphKind {
    Text,
    Heading,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paragraph {
    pub content: String,
    pub kind: ParagraphKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterRecord {
    pub title: String,
    pub url: String,
    pub paragraphs: Vec<Paragraph>,
    pub char_count: usize,
    pub paragraph_count: usize,
    pub success: bool,
}

impl ChapterRecord {
    /// 目录解析阶段创建的占位记录，内容待抓取
    pub fn pending(title: String, url: String) -> Self {
        Self {
            title,
            url,
            paragraphs: Vec::new(),
            char_count: 0,
            paragraph_count: 0,
            success: false,
        }
    }

    /// 抓取成功后填入合并标题与正文段落
    pub fn fill(&mut self, title: String, paragraphs: Vec<Paragraph>) {
        self.char_count = paragraphs.iter().map(|p| p.content.chars().count()).sum();
        self.paragraph_count = paragraphs.len();
        self.title = title;
        self.paragraphs = paragraphs;
        self.success = true;
    }

    /// 抓取失败时保留记录，继续处理其他章节
    pub fn mark_failed(&mut self) {
        self.title = format!("{}：内容获取失败", self.title);
        self.paragraphs.clear();
        self.char_count = 0;
        self.paragraph_count = 0;
        self.success = false;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookInfo {
    pub title: String,
    pub desc: String,
    pub url: String,
    pub crawled_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub info: BookInfo,
    pub chapters: Vec<ChapterRecord>,
}
