use crate::models::{Book, Paragraph, ParagraphKind};

// 尺寸按 OOXML 的计量单位：字号用半磅，间距用二十分之一磅，缩进用 twip
const BODY_SIZE: u32 = 24; // 小四 12pt
const INLINE_HEADING_SIZE: u32 = 32; // 三号 16pt
const TITLE_SIZE: u32 = 36; // 小二 18pt
const LINE_150: u32 = 360; // 1.5 倍行距
const FIRST_LINE_INDENT: u32 = 420; // 首行缩进 0.74cm，约 2 字符

pub fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// 楷体黑色的 run 属性，必须带 eastAsia 字体，否则中文回落到默认字体
fn run_props(size: u32, bold: bool) -> String {
    let mut rpr = String::new();
    rpr.push_str(r#"<w:rPr><w:rFonts w:ascii="楷体" w:hAnsi="楷体" w:eastAsia="楷体"/>"#);
    if bold {
        rpr.push_str("<w:b/>");
    }
    rpr.push_str(&format!(r#"<w:color w:val="000000"/><w:sz w:val="{}"/></w:rPr>"#, size));
    rpr
}

/// 扉页段落：书名、简介，1.5 倍行距
fn front_paragraph(text: &str) -> String {
    format!(
        r#"<w:p><w:pPr><w:spacing w:line="{line}" w:lineRule="auto"/></w:pPr><w:r>{rpr}<w:t xml:space="preserve">{text}</w:t></w:r></w:p>"#,
        line = LINE_150,
        rpr = run_props(BODY_SIZE, false),
        text = xml_escape(text),
    )
}

/// 章节标题段落：Heading1 样式，居中加粗
fn heading_paragraph(title: &str) -> String {
    format!(
        r#"<w:p><w:pPr><w:pStyle w:val="Heading1"/><w:jc w:val="center"/></w:pPr><w:r>{rpr}<w:t xml:space="preserve">{text}</w:t></w:r></w:p>"#,
        rpr = run_props(TITLE_SIZE, true),
        text = xml_escape(title),
    )
}

/// 正文段落：段前 0、段后 0.2 磅、1.5 倍行距、首行缩进两字符。
/// 章内小标题段落用三号加粗。
fn body_paragraph(paragraph: &Paragraph) -> String {
    let (size, bold) = match paragraph.kind {
        ParagraphKind::Text => (BODY_SIZE, false),
        ParagraphKind::Heading => (INLINE_HEADING_SIZE, true),
    };
    format!(
        r#"<w:p><w:pPr><w:spacing w:before="0" w:after="4" w:line="{line}" w:lineRule="auto"/><w:ind w:firstLine="{indent}"/></w:pPr><w:r>{rpr}<w:t xml:space="preserve">{text}</w:t></w:r></w:p>"#,
        line = LINE_150,
        indent = FIRST_LINE_INDENT,
        rpr = run_props(size, bold),
        text = xml_escape(paragraph.content.trim()),
    )
}

fn page_break() -> &'static str {
    r#"<w:p><w:r><w:br w:type="page"/></w:r></w:p>"#
}

/// 组装 word/document.xml：扉页、逐章标题与正文，章与章之间分页
pub fn generate_document(book: &Book) -> String {
    let mut xml = String::new();

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>"#);

    // 书名与简介
    xml.push_str(&front_paragraph(&book.info.title));
    xml.push_str(&front_paragraph(&book.info.desc));
    xml.push_str(page_break());

    // 逐章写入内容
    for (index, chapter) in book.chapters.iter().enumerate() {
        xml.push_str(&heading_paragraph(&chapter.title));
        for paragraph in &chapter.paragraphs {
            xml.push_str(&body_paragraph(paragraph));
        }
        // 最后一章之后不再分页
        if index + 1 < book.chapters.len() {
            xml.push_str(page_break());
        }
    }

    xml.push_str(r#"<w:sectPr><w:pgSz w:w="11906" w:h="16838"/></w:sectPr></w:body></w:document>"#);
    xml
}
