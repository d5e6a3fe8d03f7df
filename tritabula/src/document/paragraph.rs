#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum Alignment {
    Center,
}

impl Alignment {
    pub(crate) fn ooxml_value(&self) -> &'static str {
        match self {
            Alignment::Center => "center",
        }
    }
}

/// Fields that are computed by the program displaying the document.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum FieldCode {
    Page,
}

impl FieldCode {
    pub(crate) fn instruction(&self) -> &'static str {
        match self {
            FieldCode::Page => " PAGE ",
        }
    }
}

#[derive(Debug, PartialEq, Clone, Default)]
pub struct Paragraph {
    pub alignment: Option<Alignment>,
    /// Spacing in twentieths of a point.
    pub spacing_before: Option<u32>,
    pub spacing_after: Option<u32>,
    /// Multiple of a single line, e.g. `1.5`.
    pub line_spacing: Option<f64>,
    pub runs: Vec<Run>,
}

impl Paragraph {
    pub fn set_alignment(&mut self, alignment: Alignment) -> &mut Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn set_spacing_before(&mut self, twips: u32) -> &mut Self {
        self.spacing_before = Some(twips);
        self
    }

    pub fn set_spacing_after(&mut self, twips: u32) -> &mut Self {
        self.spacing_after = Some(twips);
        self
    }

    pub fn set_line_spacing(&mut self, multiple: f64) -> &mut Self {
        self.line_spacing = Some(multiple);
        self
    }

    pub fn add_run(&mut self) -> &mut Run {
        self.runs.push(Run::default());
        let idx = self.runs.len() - 1;
        &mut self.runs[idx]
    }

    /// The text of all runs. Fields contribute their placeholder text.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

#[derive(Debug, Eq, PartialEq, Clone, Default)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    /// Size in half points, so `21` is 10.5pt.
    pub font_size: Option<u32>,
    pub font_family: Option<String>,
    pub field: Option<FieldCode>,
}

impl Run {
    pub fn add_text(&mut self, text: &str) -> &mut Self {
        self.text.push_str(text);
        self
    }

    pub fn set_bold(&mut self, bold: bool) -> &mut Self {
        self.bold = bold;
        self
    }

    pub fn set_font_size(&mut self, half_points: u32) -> &mut Self {
        self.font_size = Some(half_points);
        self
    }

    pub fn set_font_family(&mut self, family: &str) -> &mut Self {
        self.font_family = Some(family.to_string());
        self
    }

    /// Turns the run into a field. The text of the run is shown until the field is updated.
    pub fn set_field(&mut self, field: FieldCode) -> &mut Self {
        self.field = Some(field);
        self
    }
}
