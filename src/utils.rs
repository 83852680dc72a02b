use anyhow::Result;
use std::io::{self, Write};

pub fn get_user_input() -> Result<String> {
    print!("请输入书籍目录链接: ");
    io::stdout().flush()?;
    let mut url = String::new();
    io::stdin().read_line(&mut url)?;
    Ok(url.trim().to_string())
}

/// 去掉 Windows 文件名里的非法字符
pub fn sanitize_filename(title: &str) -> String {
    title
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' | '\u{0000}'))
        .collect()
}

/// 只处理古诗文网及其镜像站的链接
pub fn is_supported_link(url: &str) -> bool {
    url.starts_with("http") && url.contains("gushiwen")
}
