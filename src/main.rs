use std::fs;
use std::io::{self, Write};
use std::time::Duration;

use gsw_fetch::{GswCrawler, get_user_input, is_supported_link};

const LINKS_FILE: &str = "links.txt";

/// 单个链接的下载入口，链接不合法时跳过
async fn download_article(crawler: &GswCrawler, down_url: &str) {
    if down_url.is_empty() {
        println!("警告：链接为空，跳过。");
        return;
    }

    if is_supported_link(down_url) {
        println!("正在下载: {}", down_url);
        crawler.crawl_book(down_url).await;
    } else {
        println!("不支持该类型的链接: {}", down_url);
    }
}

/// 批量模式：逐行处理 links.txt 里的链接
async fn run_batch(crawler: &GswCrawler, content: &str) {
    let links: Vec<&str> = content.lines().map(str::trim).filter(|l| !l.is_empty()).collect();

    for (index, &link) in links.iter().enumerate() {
        if matches!(link.to_lowercase().as_str(), "q" | "exit") {
            println!("收到退出指令，程序结束。");
            return;
        }

        println!("\n[{}/{}] 正在处理: {}", index + 1, links.len(), link);
        download_article(crawler, link).await;

        println!("下载完成，延迟 10 秒...");
        tokio::time::sleep(Duration::from_secs(10)).await;
    }
}

/// 交互模式：没有 links.txt 时手动输入链接
async fn run_interactive(crawler: &GswCrawler) -> anyhow::Result<()> {
    loop {
        match get_user_input() {
            Ok(url) => {
                if matches!(url.to_lowercase().as_str(), "q" | "exit") {
                    println!("收到退出指令，程序结束。");
                    return Ok(());
                }
                println!("\n开始下载...");
                download_article(crawler, &url).await;
            }
            Err(e) => {
                println!("输入错误: {}", e);
            }
        }

        print!("\n是否继续下载其他书籍? (y/n): ");
        io::stdout().flush()?;
        let mut continue_choice = String::new();
        io::stdin().read_line(&mut continue_choice)?;
        if continue_choice.trim().to_lowercase() != "y" {
            return Ok(());
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("欢迎使用文章下载工具！");

    let crawler = GswCrawler::new();

    match fs::read_to_string(LINKS_FILE) {
        Ok(content) => run_batch(&crawler, &content).await,
        Err(_) => {
            println!("未找到 {}，进入交互模式。", LINKS_FILE);
            run_interactive(&crawler).await?;
        }
    }

    println!("所有链接处理完成，程序结束。");
    Ok(())
}
