//! An in-memory word processing document, and a writer for it.
//!
//! The document is an owned tree: the document holds body blocks, tables hold rows and cells,
//! cells and the footer hold paragraphs, and paragraphs hold runs. Children are created through
//! `add_*` methods that hand back a mutable reference to the new node, so the tree is built
//! top down and never shares nodes.

use crate::{Result, TriTabulaError};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::instrument;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

mod border;
mod footer;
mod ooxml;
mod paragraph;
mod table;
mod xml_builder;

pub use border::*;
pub use footer::*;
pub use paragraph::*;
pub use table::*;

#[derive(Debug, Eq, PartialEq, Clone, Default)]
pub struct DocumentProperties {
    pub title: String,
    pub creator: String,
    pub description: String,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
}

#[derive(Debug, PartialEq, Clone, Default)]
pub struct ReportDocument {
    pub properties: DocumentProperties,
    body: Vec<Block>,
    footer: Option<Footer>,
}

impl ReportDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.properties.title = title.to_string();
        self
    }

    pub fn set_creator(&mut self, creator: &str) -> &mut Self {
        self.properties.creator = creator.to_string();
        self
    }

    pub fn set_description(&mut self, description: &str) -> &mut Self {
        self.properties.description = description.to_string();
        self
    }

    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.body.push(Block::Paragraph(Paragraph::default()));
        match self.body.last_mut() {
            Some(Block::Paragraph(paragraph)) => paragraph,
            _ => unreachable!("a paragraph was just pushed"),
        }
    }

    pub fn add_table(&mut self, row_count: usize, column_count: usize) -> &mut Table {
        self.body.push(Block::Table(Table::new(row_count, column_count)));
        match self.body.last_mut() {
            Some(Block::Table(table)) => table,
            _ => unreachable!("a table was just pushed"),
        }
    }

    /// Sets the footer of the document, replacing any footer added before.
    pub fn add_footer(&mut self, kind: FooterKind) -> &mut Footer {
        self.footer.insert(Footer::new(kind))
    }

    pub fn blocks(&self) -> &[Block] {
        &self.body
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.body.iter().filter_map(|b| match b {
            Block::Table(table) => Some(table),
            Block::Paragraph(_) => None,
        })
    }

    pub fn footer(&self) -> Option<&Footer> {
        self.footer.as_ref()
    }

    /// Writes the document as a `.docx` package, creating parent directories as needed.
    #[instrument(skip(self))]
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(path)?;
        let mut zip = ZipWriter::new(BufWriter::new(file));

        let persist_error = |source| TriTabulaError::Persist {
            path: path.to_path_buf(),
            source,
        };

        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        let has_footer = self.footer.is_some();

        let mut parts = vec![
            ("[Content_Types].xml", ooxml::content_types_xml(has_footer)),
            ("_rels/.rels", ooxml::package_relationships_xml()),
            ("docProps/core.xml", ooxml::core_properties_xml(self)),
            ("docProps/app.xml", ooxml::app_properties_xml(self)),
            ("word/document.xml", ooxml::document_xml(self)),
            (
                "word/_rels/document.xml.rels",
                ooxml::document_relationships_xml(has_footer),
            ),
        ];

        if let Some(footer) = &self.footer {
            parts.push(("word/footer1.xml", ooxml::footer_xml(footer)));
        }

        for (name, content) in parts {
            zip.start_file(name, options).map_err(persist_error)?;
            zip.write_all(content.as_bytes())?;
        }

        let mut writer = zip.finish().map_err(persist_error)?;
        writer.flush()?;

        tracing::info!("Document saved to {}", path.display());

        Ok(())
    }
}
