pub mod compression;
pub mod document;
pub mod styles;

pub use compression::DocxCompressor;

use anyhow::{Result, anyhow};
use std::path::PathBuf;

use crate::config;
use crate::models::Book;
use crate::utils::sanitize_filename;

pub struct DocxBuilder<'a> {
    book: Option<&'a Book>,
    out_dir: Option<PathBuf>,
}

impl<'a> DocxBuilder<'a> {
    pub fn new() -> Self {
        Self { book: None, out_dir: None }
    }

    pub fn book(mut self, book: &'a Book) -> Self {
        self.book = Some(book);
        self
    }

    pub fn out_dir<P: Into<PathBuf>>(mut self, out_dir: P) -> Self {
        self.out_dir = Some(out_dir.into());
        self
    }

    /// 生成 document.xml 和 styles.xml，打包成 docx 文件
    pub fn build(self) -> Result<PathBuf> {
        let book = self.book.ok_or_else(|| anyhow!("缺少书籍内容"))?;
        let out_dir = self.out_dir.ok_or_else(|| anyhow!("缺少输出目录"))?;

        config::ensure_dir(&out_dir)?;

        let document_xml = document::generate_document(book);
        let styles_xml = styles::generate_styles();

        let path = out_dir.join(format!("{}.docx", sanitize_filename(&book.info.title)));
        DocxCompressor::new().write_package(&path, &document_xml, &styles_xml)?;

        Ok(path)
    }
}
