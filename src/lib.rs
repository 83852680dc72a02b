pub mod cleaner;
pub mod config;
pub mod crawler;
pub mod docx;
pub mod export;
pub mod models;
pub mod utils;

pub use crawler::GswCrawler;
pub use models::{Book, BookInfo, ChapterRecord, Paragraph, ParagraphKind};
pub use utils::{get_user_input, is_supported_link};
