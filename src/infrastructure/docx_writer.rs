//! DOCX 写入 - 基础设施层
//!
//! 按顺序累积段落块，最后一次性打包为 WordprocessingML 文档。
//! 只支持本工具需要的少量样式：主标题、一级标题、正文、分页符。

use crate::error::{AppResult, FileError, ReportError};
use quick_xml::escape::escape;
use std::fs;
use std::io::{Cursor, Seek, Write};
use std::path::Path;
use zip::result::ZipResult;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// 文档中的一个块
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocBlock {
    /// 主标题（文件名）
    Title(String),
    /// 一级标题（工作表名）
    Heading(String),
    /// 正文段落，内部的换行渲染为软换行
    Paragraph(String),
    /// 分页符
    PageBreak,
}

/// 正在构建的 DOCX 文档
#[derive(Debug, Clone, Default)]
pub struct DocxDocument {
    blocks: Vec<DocBlock>,
}

impl DocxDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_title(&mut self, text: impl Into<String>) {
        self.blocks.push(DocBlock::Title(text.into()));
    }

    pub fn add_heading(&mut self, text: impl Into<String>) {
        self.blocks.push(DocBlock::Heading(text.into()));
    }

    pub fn add_paragraph(&mut self, text: impl Into<String>) {
        self.blocks.push(DocBlock::Paragraph(text.into()));
    }

    pub fn add_page_break(&mut self) {
        self.blocks.push(DocBlock::PageBreak);
    }

    pub fn blocks(&self) -> &[DocBlock] {
        &self.blocks
    }

    /// 保存到文件；目标已存在时先删除，避免残留旧内容
    pub fn save(&self, path: &Path) -> AppResult<()> {
        let shown = path.display().to_string();
        let bytes = self.to_bytes()?;

        if path.exists() {
            fs::remove_file(path).map_err(|source| FileError::DeleteFailed {
                path: shown.clone(),
                source,
            })?;
        }

        fs::write(path, bytes).map_err(|source| FileError::write_failed(&shown, source))?;
        Ok(())
    }

    /// 打包到内存
    pub fn to_bytes(&self) -> AppResult<Vec<u8>> {
        let cursor = self
            .write_package(Cursor::new(Vec::new()))
            .map_err(|source| ReportError::DocxPackFailed {
                path: "<内存>".to_string(),
                source,
            })?;
        Ok(cursor.into_inner())
    }

    fn write_package<W: Write + Seek>(&self, writer: W) -> ZipResult<W> {
        let mut zip = ZipWriter::new(writer);
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

        let document = self.document_xml();
        let parts: [(&str, &str); 4] = [
            ("[Content_Types].xml", CONTENT_TYPES_XML),
            ("_rels/.rels", ROOT_RELS_XML),
            ("word/_rels/document.xml.rels", DOCUMENT_RELS_XML),
            ("word/styles.xml", STYLES_XML),
        ];

        for (name, content) in parts {
            zip.start_file(name, options)?;
            zip.write_all(content.as_bytes())?;
        }
        zip.start_file("word/document.xml", options)?;
        zip.write_all(document.as_bytes())?;

        zip.finish()
    }

    /// 生成 word/document.xml
    pub fn document_xml(&self) -> String {
        let mut body = String::new();
        for block in &self.blocks {
            match block {
                DocBlock::Title(text) => push_styled_paragraph(&mut body, Some("Title"), text),
                DocBlock::Heading(text) => push_styled_paragraph(&mut body, Some("Heading1"), text),
                DocBlock::Paragraph(text) => push_styled_paragraph(&mut body, None, text),
                DocBlock::PageBreak => body.push_str(r#"<w:p><w:r><w:br w:type="page"/></w:r></w:p>"#),
            }
        }

        format!(
            concat!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
                r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
                "<w:body>{}",
                r#"<w:sectPr><w:pgSz w:w="11906" w:h="16838"/>"#,
                r#"<w:pgMar w:top="1440" w:right="1800" w:bottom="1440" w:left="1800" w:header="851" w:footer="992" w:gutter="0"/></w:sectPr>"#,
                "</w:body></w:document>"
            ),
            body
        )
    }
}

fn push_styled_paragraph(body: &mut String, style: Option<&str>, text: &str) {
    body.push_str("<w:p>");
    if let Some(style) = style {
        body.push_str(&format!(r#"<w:pPr><w:pStyle w:val="{}"/></w:pPr>"#, style));
    }
    if !text.is_empty() {
        body.push_str("<w:r>");
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                body.push_str("<w:br/>");
            }
            body.push_str(&format!(
                r#"<w:t xml:space="preserve">{}</w:t>"#,
                escape(line)
            ));
        }
        body.push_str("</w:r>");
    }
    body.push_str("</w:p>");
}

const CONTENT_TYPES_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    r#"<Default Extension="xml" ContentType="application/xml"/>"#,
    r#"<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>"#,
    r#"<Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>"#,
    "</Types>"
);

const ROOT_RELS_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>"#,
    "</Relationships>"
);

const DOCUMENT_RELS_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>"#,
    "</Relationships>"
);

// 正文：宋体 12pt，东亚字体微软雅黑；主标题 30pt、一级标题 24pt，均加粗黑色
const STYLES_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
    r#"<w:docDefaults><w:rPrDefault><w:rPr>"#,
    r#"<w:rFonts w:ascii="SimSun" w:hAnsi="SimSun" w:eastAsia="Microsoft YaHei" w:cs="SimSun"/>"#,
    r#"<w:sz w:val="24"/><w:szCs w:val="24"/>"#,
    r#"</w:rPr></w:rPrDefault></w:docDefaults>"#,
    r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:qFormat/></w:style>"#,
    r#"<w:style w:type="paragraph" w:styleId="Title"><w:name w:val="Title"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/>"#,
    r#"<w:pPr><w:jc w:val="left"/><w:spacing w:after="240"/></w:pPr>"#,
    r#"<w:rPr><w:b/><w:color w:val="000000"/><w:sz w:val="60"/><w:szCs w:val="60"/></w:rPr></w:style>"#,
    r#"<w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/>"#,
    r#"<w:pPr><w:keepNext/><w:spacing w:before="240" w:after="120"/><w:outlineLvl w:val="0"/></w:pPr>"#,
    r#"<w:rPr><w:b/><w:color w:val="000000"/><w:sz w:val="48"/><w:szCs w:val="48"/></w:rPr></w:style>"#,
    "</w:styles>"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_xml_escapes_and_breaks_lines() {
        let mut doc = DocxDocument::new();
        doc.add_heading("登录<测试>");
        doc.add_paragraph("第一行\n第二行 & 结尾");
        doc.add_page_break();

        let xml = doc.document_xml();
        assert!(xml.contains(r#"<w:pStyle w:val="Heading1"/>"#));
        assert!(xml.contains("登录&lt;测试&gt;"));
        assert!(xml.contains("第一行</w:t><w:br/><w:t xml:space=\"preserve\">第二行 &amp; 结尾"));
        assert!(xml.contains(r#"<w:br w:type="page"/>"#));
    }

    #[test]
    fn test_empty_paragraph_has_no_run() {
        let mut doc = DocxDocument::new();
        doc.add_paragraph("");
        assert!(doc.document_xml().contains("<w:body><w:p></w:p>"));
    }

    #[test]
    fn test_package_is_zip() {
        let mut doc = DocxDocument::new();
        doc.add_title("人力助手");
        let bytes = doc.to_bytes().unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_save_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.docx");
        std::fs::write(&path, vec![0u8; 1 << 16]).unwrap();

        let mut doc = DocxDocument::new();
        doc.add_title("t");
        doc.save(&path).unwrap();

        let saved = std::fs::read(&path).unwrap();
        assert_eq!(&saved[..2], b"PK");
        assert!(saved.len() < 1 << 16);
    }
}
