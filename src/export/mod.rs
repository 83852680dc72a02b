pub mod json;
pub mod text;

use anyhow::Result;

use crate::config;
use crate::docx::DocxBuilder;
use crate::models::Book;

/// 导出全书：纯文本、JSON、Word 文档各存一份。
/// 单个格式失败不影响其余格式。
pub fn save_all(book: &Book) -> Result<()> {
    match text::save_txt(book, &config::txt_dir()) {
        Ok(path) => println!("📄 文本已保存: {}", path.display()),
        Err(e) => println!("❌ 保存文本失败: {}", e),
    }

    match json::save_json(book, &config::json_dir()) {
        Ok(path) => println!("📄 JSON 已保存: {}", path.display()),
        Err(e) => println!("❌ 保存 JSON 失败: {}", e),
    }

    match DocxBuilder::new().book(book).out_dir(config::word_dir()).build() {
        Ok(path) => println!("🎉 成功保存：{}", path.display()),
        Err(e) => println!("❌ 保存 Word 文档失败: {}", e),
    }

    Ok(())
}
