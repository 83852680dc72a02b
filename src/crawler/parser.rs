use chrono::Local;
use scraper::{Html, Selector};
use std::collections::HashSet;

use crate::models::BookInfo;

/// 目录页里解析出的单个章节链接
#[derive(Debug, Clone)]
pub struct ChapterLink {
    pub title: String,
    pub url: String,
}

pub struct CatalogParser;

impl CatalogParser {
    /// 解析目录页的书名和简介
    pub fn parse_book_info(&self, document: &Html, url: &str) -> BookInfo {
        let title_selector = Selector::parse("div.main3 h1 b").unwrap();
        let desc_selector = Selector::parse("div.main3 div.cont p").unwrap();

        let title = document
            .select(&title_selector)
            .next()
            .map(|b| b.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "未知书名".to_string());

        // 简介取 cont 下各段文本，跳过 ► 开头的跳转提示
        let desc = document
            .select(&desc_selector)
            .flat_map(|p| p.text())
            .map(str::trim)
            .filter(|t| !t.starts_with('►'))
            .collect::<String>()
            .trim()
            .to_string();
        let desc = if desc.is_empty() { "简介：无".to_string() } else { desc };

        BookInfo {
            title,
            desc,
            url: url.to_string(),
            crawled_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    /// 在目录页里找章节链接：href 带 bookv_ 且在 guwen 路径下的 a 标签。
    /// 同一链接只保留第一次出现。
    pub fn parse_chapter_links(&self, document: &Html, base_url: &str) -> Vec<ChapterLink> {
        let anchor_selector = Selector::parse(r#"a[href*="bookv_"]"#).unwrap();

        let mut seen = HashSet::new();
        let mut chapters = Vec::new();

        for anchor in document.select(&anchor_selector) {
            let href = anchor.value().attr("href").unwrap_or("");
            if !href.contains("guwen") {
                continue;
            }

            let title = anchor.text().collect::<String>().trim().to_string();
            if title.is_empty() {
                continue;
            }

            let full_url = join_url(base_url, href);
            if seen.insert(full_url.clone()) {
                chapters.push(ChapterLink { title, url: full_url });
            }
        }

        chapters
    }
}

/// 相对链接补全为绝对链接
fn join_url(base_url: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        href.to_string()
    } else if href.starts_with('/') {
        format!("{}{}", base_url.trim_end_matches('/'), href)
    } else {
        format!("{}/{}", base_url.trim_end_matches('/'), href)
    }
}

/// 从链接里取出 scheme://host 部分
pub fn base_domain(url: &str) -> String {
    if let Some(scheme_end) = url.find("://") {
        let rest = &url[scheme_end + 3..];
        if let Some(slash) = rest.find('/') {
            return url[..scheme_end + 3 + slash].to_string();
        }
    }
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_HTML: &str = r#"
        <html><body>
        <div class="main3">
            <h1><b>论语</b></h1>
            <div class="cont">
                <p>儒家经典之一，记录孔子及其弟子言行。</p>
                <p>►相关阅读推荐</p>
            </div>
            <div class="bookcont">
                <a href="/guwen/bookv_abc1.aspx">学而篇</a>
                <a href="https://www.gushiwen.cn/guwen/bookv_abc2.aspx">为政篇</a>
                <a href="/guwen/bookv_abc1.aspx">学而篇</a>
                <a href="/shiwenv_xyz.aspx">某首诗</a>
                <a href="/other/bookv_abc3.aspx">站外目录</a>
                <a href="/guwen/bookv_abc4.aspx">  </a>
            </div>
        </div>
        </body></html>
    "#;

    #[test]
    fn parses_title_and_desc() {
        let document = Html::parse_document(CATALOG_HTML);
        let info = CatalogParser.parse_book_info(&document, "https://www.gushiwen.cn/guwen/book_1.aspx");

        assert_eq!(info.title, "论语");
        assert_eq!(info.desc, "儒家经典之一，记录孔子及其弟子言行。");
        assert_eq!(info.url, "https://www.gushiwen.cn/guwen/book_1.aspx");
        assert!(!info.crawled_at.is_empty());
    }

    #[test]
    fn falls_back_on_missing_title_and_desc() {
        let document = Html::parse_document("<html><body><div class='main3'></div></body></html>");
        let info = CatalogParser.parse_book_info(&document, "https://www.gushiwen.cn/x");

        assert_eq!(info.title, "未知书名");
        assert_eq!(info.desc, "简介：无");
    }

    #[test]
    fn chapter_links_filtered_and_deduped() {
        let document = Html::parse_document(CATALOG_HTML);
        let links = CatalogParser.parse_chapter_links(&document, "https://www.gushiwen.cn");

        // 重复链接、非 guwen 链接、空标题都被丢弃
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].title, "学而篇");
        assert_eq!(links[0].url, "https://www.gushiwen.cn/guwen/bookv_abc1.aspx");
        assert_eq!(links[1].title, "为政篇");
        assert_eq!(links[1].url, "https://www.gushiwen.cn/guwen/bookv_abc2.aspx");
    }

    #[test]
    fn base_domain_from_url() {
        assert_eq!(
            base_domain("https://www.gushiwen.cn/guwen/book_1.aspx"),
            "https://www.gushiwen.cn"
        );
        assert_eq!(base_domain("https://so.gushiwen.org"), "https://so.gushiwen.org");
    }
}
