use crate::document::border::{Border, BorderSide, Borders};
use crate::document::paragraph::{Alignment, Paragraph};

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum TableWidth {
    /// Percentage of the text width.
    Percent(u32),
}

/// A grid with a fixed number of rows and columns, decided when it is created.
#[derive(Debug, PartialEq, Clone)]
pub struct Table {
    rows: Vec<TableRow>,
    column_count: usize,
    pub width: Option<TableWidth>,
    pub alignment: Option<Alignment>,
    pub borders: Borders,
}

#[derive(Debug, PartialEq, Clone)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

#[derive(Debug, PartialEq, Clone, Default)]
pub struct TableCell {
    pub paragraphs: Vec<Paragraph>,
    pub borders: Borders,
}

impl Table {
    pub fn new(row_count: usize, column_count: usize) -> Self {
        let rows = (0..row_count)
            .map(|_| TableRow {
                cells: (0..column_count).map(|_| TableCell::default()).collect(),
            })
            .collect();

        Table {
            rows,
            column_count,
            width: None,
            alignment: None,
            borders: Borders::default(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn row_mut(&mut self, row: usize) -> Option<&mut TableRow> {
        self.rows.get_mut(row)
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&TableCell> {
        self.rows.get(row).and_then(|r| r.cells.get(column))
    }

    pub fn cell_mut(&mut self, row: usize, column: usize) -> Option<&mut TableCell> {
        self.rows.get_mut(row).and_then(|r| r.cells.get_mut(column))
    }

    pub fn set_width(&mut self, width: TableWidth) -> &mut Self {
        self.width = Some(width);
        self
    }

    pub fn set_alignment(&mut self, alignment: Alignment) -> &mut Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn set_borders(&mut self, side: BorderSide, border: Border) -> &mut Self {
        self.borders.set(side, border);
        self
    }
}

impl TableCell {
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.paragraphs.push(Paragraph::default());
        let idx = self.paragraphs.len() - 1;
        &mut self.paragraphs[idx]
    }

    pub fn set_borders(&mut self, side: BorderSide, border: Border) -> &mut Self {
        self.borders.set(side, border);
        self
    }

    pub fn text(&self) -> String {
        self.paragraphs.iter().map(|p| p.text()).collect::<Vec<_>>().join("\n")
    }
}
