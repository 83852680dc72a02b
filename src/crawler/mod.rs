pub mod order;
pub mod parser;
pub mod processor;

pub use parser::{CatalogParser, ChapterLink};
pub use processor::ChapterProcessor;

use anyhow::{Result, anyhow};
use rand::Rng;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CONNECTION, HeaderMap, HeaderValue};
use scraper::Html;

use crate::config;
use crate::export;
use crate::models::{Book, ChapterRecord};
use crate::utils::sanitize_filename;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub struct GswCrawler {
    client: reqwest::Client,
    parser: CatalogParser,
    processor: ChapterProcessor,
}

impl GswCrawler {
    pub fn new() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("zh-CN,zh;q=0.9,en;q=0.8"));
        headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap();

        Self {
            client: client.clone(),
            parser: CatalogParser,
            processor: ChapterProcessor::new(client),
        }
    }

    /// 下载一本书：解析目录、按阅读顺序逐章抓取、导出三种格式
    pub async fn down_book(&self, url: &str) -> Result<Book> {
        println!("📘 开始下载书籍目录...");

        let response = self.client.get(url).send().await?;
        let html = response.text().await?;

        let (info, mut links) = {
            let document = Html::parse_document(&html);
            let info = self.parser.parse_book_info(&document, url);
            let links = self.parser.parse_chapter_links(&document, &parser::base_domain(url));
            (info, links)
        };

        if links.is_empty() {
            config::set_log("❌ 未找到有效章节链接");
            return Err(anyhow!("未解析到章节列表"));
        }

        order::sort_chapters(&mut links);

        println!("\n🔍 共找到 {} 章，开始抓取...", links.len());

        let mut chapters: Vec<ChapterRecord> = links
            .into_iter()
            .map(|link| ChapterRecord::pending(link.title, link.url))
            .collect();

        let total = chapters.len();
        for (index, chapter) in chapters.iter_mut().enumerate() {
            println!("[{:2}/{}] {}", index + 1, total, chapter.title);
            self.processor.fetch_chapter(chapter).await;

            // 防爬延迟 2-4 秒之间
            let delay = rand::thread_rng().gen_range(2.0..4.0);
            tokio::time::sleep(std::time::Duration::from_secs_f64(delay)).await;
        }

        let book = Book { info, chapters };
        export::save_all(&book)?;

        config::set_log(&format!(
            "【{}】全本下载完成，共 {} 章，已按格式排版",
            sanitize_filename(&book.info.title),
            book.chapters.len()
        ));

        Ok(book)
    }

    /// 下载并打印结果摘要
    pub async fn crawl_book(&self, url: &str) {
        match self.down_book(url).await {
            Ok(book) => {
                let success_count = book.chapters.iter().filter(|c| c.success).count();
                let total_chars: usize = book.chapters.iter().map(|c| c.char_count).sum();

                println!("\n=== 下载结果 ===");
                println!("书名: {}", book.info.title);
                println!("简介: {}", book.info.desc);
                println!("章节: 共 {} 章，成功 {} 章", book.chapters.len(), success_count);
                println!("字数: {}", total_chars);

                let display_count = std::cmp::min(3, book.chapters.len());
                for chapter in book.chapters.iter().take(display_count) {
                    let prefix = if chapter.success { "📖" } else { "⚠️" };
                    println!("  ├── {} {}", prefix, chapter.title);
                }
                if book.chapters.len() > display_count {
                    println!("  └── ... (还有 {} 章)", book.chapters.len() - display_count);
                }

                println!("URL: {}", book.info.url);
                println!("==============\n");
            }
            Err(e) => {
                println!("下载失败 {} : {}", url, e);
            }
        }
    }
}
