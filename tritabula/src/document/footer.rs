use crate::document::paragraph::{Alignment, FieldCode, Paragraph};

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum FooterKind {
    Default,
}

impl FooterKind {
    pub(crate) fn ooxml_value(&self) -> &'static str {
        match self {
            FooterKind::Default => "default",
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Footer {
    pub kind: FooterKind,
    pub paragraphs: Vec<Paragraph>,
}

impl Footer {
    pub fn new(kind: FooterKind) -> Self {
        Footer {
            kind,
            paragraphs: vec![],
        }
    }

    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.paragraphs.push(Paragraph::default());
        let idx = self.paragraphs.len() - 1;
        &mut self.paragraphs[idx]
    }

    /// Adds a centered paragraph holding the current page number.
    pub fn add_page_number(&mut self) -> &mut Paragraph {
        let paragraph = self.add_paragraph();
        paragraph.set_alignment(Alignment::Center);
        paragraph.add_run().add_text("1").set_field(FieldCode::Page);
        paragraph
    }

    pub fn has_field(&self, field: FieldCode) -> bool {
        self.paragraphs
            .iter()
            .flat_map(|p| p.runs.iter())
            .any(|r| r.field == Some(field))
    }
}
