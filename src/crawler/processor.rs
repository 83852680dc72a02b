use anyhow::Result;
use regex::Regex;
use scraper::{Html, Selector};

use crate::cleaner::clean_text;
use crate::models::{ChapterRecord, Paragraph, ParagraphKind};

pub struct ChapterProcessor {
    client: reqwest::Client,
    anchor_re: Regex,
    /// 特殊版式：无论页内有几个小标题，都把首段并入章题
    pub line0_as_title: bool,
}

impl ChapterProcessor {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            anchor_re: Regex::new(r"</?a[^>]*>").unwrap(),
            line0_as_title: false,
        }
    }

    /// 抓取单章内容并写回记录，失败时标记后继续
    pub async fn fetch_chapter(&self, chapter: &mut ChapterRecord) {
        println!("正在获取章节内容: {}", chapter.url);

        let url = chapter.url.clone();
        let catalog_title = chapter.title.clone();
        match self.fetch_inner(&url, &catalog_title).await {
            Ok((title, paragraphs)) => {
                chapter.fill(title, paragraphs);
                println!("✅ 已抓取：{}", chapter.title);
            }
            Err(e) => {
                println!("❌ 抓取失败 {}: {}", url, e);
                chapter.mark_failed();
            }
        }
    }

    async fn fetch_inner(&self, url: &str, catalog_title: &str) -> Result<(String, Vec<Paragraph>)> {
        let response = self.client.get(url).send().await?;
        let html = response.text().await?;
        Ok(self.extract(&html, catalog_title))
    }

    /// 从正文页提取 (合并标题, 段落列表)。
    /// 正文严格取 div.contson 的 p 子节点，带 strong 的段落视为章内小标题。
    pub fn extract(&self, html: &str, catalog_title: &str) -> (String, Vec<Paragraph>) {
        // 先移除 a 标签，站点在正文里插的链接会把文本节点切碎
        let stripped = self.anchor_re.replace_all(html, "");
        let document = Html::parse_document(&stripped);

        let title_selector = Selector::parse("div.main3 h1 > span > b").unwrap();
        let p_selector = Selector::parse("div.contson > p").unwrap();
        let strong_selector = Selector::parse("strong").unwrap();

        // 页内标题，取不到就用目录里的章节名
        let heading = document
            .select(&title_selector)
            .flat_map(|b| b.text())
            .map(str::trim)
            .collect::<String>()
            .trim()
            .to_string();
        let chapter_title = if heading.is_empty() { catalog_title.to_string() } else { heading };

        let mut paragraphs = Vec::new();
        let mut strong_node_count = 0usize;
        let mut first_p_strong = String::new();
        let mut first_p_text = String::new();

        for (index, p) in document.select(&p_selector).enumerate() {
            let text = p.text().collect::<String>().trim().to_string();
            let strong_fragments: Vec<&str> = p.select(&strong_selector).flat_map(|s| s.text()).collect();
            strong_node_count += strong_fragments.len();
            let strong_text: String = strong_fragments.iter().map(|t| t.trim()).collect();

            if index == 0 {
                first_p_strong = strong_text.clone();
                first_p_text = p.text().map(str::trim).collect();
            }

            let cleaned = clean_text(&text);
            if cleaned.is_empty() {
                continue;
            }
            if !strong_text.is_empty() {
                paragraphs.push(Paragraph { content: cleaned, kind: ParagraphKind::Heading });
            } else {
                paragraphs.push(Paragraph { content: cleaned, kind: ParagraphKind::Text });
            }
        }

        // 标题合并：页面只有一个小标题时，它属于章题而不是正文
        let mut combined_title = chapter_title.clone();
        if (strong_node_count == 1 || self.line0_as_title) && !paragraphs.is_empty() {
            let subtitle = if self.line0_as_title { &first_p_text } else { &first_p_strong };
            if !subtitle.is_empty() {
                combined_title = format!("{} {}", chapter_title, subtitle);
                paragraphs.remove(0);
            }
        }

        (combined_title, paragraphs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn processor() -> ChapterProcessor {
        ChapterProcessor::new(reqwest::Client::new())
    }

    #[test]
    fn extracts_title_and_paragraphs() {
        let html = r#"
            <html><body><div class="main3">
            <h1><span><b>学而篇</b></span></h1>
            <div class="contson">
                <p>子曰：学而时习之，不亦说乎？</p>
                <p>有朋自远方来，<a href="/x.aspx">不亦乐乎</a>？</p>
                <div>非段落节点，不提取</div>
            </div>
            </div></body></html>
        "#;
        let (title, paragraphs) = processor().extract(html, "学而");

        assert_eq!(title, "学而篇");
        assert_eq!(paragraphs.len(), 2);
        // a 标签已被剥掉，文本完整
        assert_eq!(paragraphs[1].content, "有朋自远方来，不亦乐乎？");
        assert!(paragraphs.iter().all(|p| p.kind == ParagraphKind::Text));
    }

    #[test]
    fn falls_back_to_catalog_title() {
        let html = r#"<html><body><div class="contson"><p>正文</p></div></body></html>"#;
        let (title, paragraphs) = processor().extract(html, "目录章名");

        assert_eq!(title, "目录章名");
        assert_eq!(paragraphs.len(), 1);
    }

    #[test]
    fn merges_single_strong_into_title() {
        let html = r#"
            <html><body><div class="main3">
            <h1><span><b>卷一</b></span></h1>
            <div class="contson">
                <p><strong>周南·关雎</strong></p>
                <p>关关雎鸠，在河之洲。</p>
            </div>
            </div></body></html>
        "#;
        let (title, paragraphs) = processor().extract(html, "卷一");

        assert_eq!(title, "卷一 周南·关雎");
        // 并入标题的首段从正文里移除
        assert_eq!(paragraphs.len(), 1);
        assert_eq!(paragraphs[0].content, "关关雎鸠，在河之洲。");
    }

    #[test]
    fn multiple_strongs_stay_as_headings() {
        let html = r#"
            <html><body><div class="main3">
            <h1><span><b>杂篇</b></span></h1>
            <div class="contson">
                <p><strong>其一</strong></p>
                <p>第一首正文。</p>
                <p><strong>其二</strong></p>
                <p>第二首正文。</p>
            </div>
            </div></body></html>
        "#;
        let (title, paragraphs) = processor().extract(html, "杂篇");

        assert_eq!(title, "杂篇");
        assert_eq!(paragraphs.len(), 4);
        assert_eq!(paragraphs[0].kind, ParagraphKind::Heading);
        assert_eq!(paragraphs[1].kind, ParagraphKind::Text);
        assert_eq!(paragraphs[2].kind, ParagraphKind::Heading);
    }

    #[test]
    fn line0_toggle_merges_plain_first_paragraph() {
        let html = r#"
            <html><body><div class="main3">
            <h1><span><b>卷二</b></span></h1>
            <div class="contson">
                <p>召南·鹊巢</p>
                <p>维鹊有巢，维鸠居之。</p>
            </div>
            </div></body></html>
        "#;
        let mut processor = processor();
        processor.line0_as_title = true;
        let (title, paragraphs) = processor.extract(html, "卷二");

        assert_eq!(title, "卷二 召南·鹊巢");
        assert_eq!(paragraphs.len(), 1);
    }

    #[test]
    fn pua_garbage_is_marked() {
        let html = "<html><body><div class=\"contson\"><p>古\u{E225}文观止</p></div></body></html>";
        let (_, paragraphs) = processor().extract(html, "某章");

        assert_eq!(paragraphs[0].content, "古###文观止");
    }
}
