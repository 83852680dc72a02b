/// 站点用 Unicode 私有区字形替换生僻字，复制出来就是乱码。
/// 这里统一替换成 ### 标记，让缺字在导出文件里可见。
pub fn replace_pua_chars(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if ('\u{E000}'..='\u{F8FF}').contains(&c) {
            out.push_str("###");
        } else {
            out.push(c);
        }
    }
    out
}

/// 移除不可见控制字符（\x00-\x1F、\x7F-\x9F）
pub fn replace_control_chars(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '\u{0000}'..='\u{001F}' | '\u{007F}'..='\u{009F}'))
        .collect()
}

/// 综合清洗：乱码标记、控制符移除、空白折叠
pub fn clean_text(text: &str) -> String {
    let text = replace_pua_chars(text);
    let text = replace_control_chars(&text);

    // 连续空白折叠为单个空格
    let mut out = String::with_capacity(text.len());
    let mut in_whitespace = false;
    for c in text.chars() {
        if c.is_whitespace() {
            in_whitespace = true;
        } else {
            if in_whitespace && !out.is_empty() {
                out.push(' ');
            }
            in_whitespace = false;
            out.push(c);
        }
    }
    out
}

/// 清洗段落列表，自动过滤空段
pub fn clean_paragraphs(paragraphs: &[String]) -> Vec<String> {
    paragraphs
        .iter()
        .map(|p| clean_text(p))
        .filter(|p| !p.is_empty())
        .collect()
}
