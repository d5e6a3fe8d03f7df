#[derive(Debug, Eq, PartialEq, Copy, Clone, Default)]
pub enum BorderStyle {
    #[default]
    None,
    Single,
}

impl BorderStyle {
    pub(crate) fn ooxml_value(&self) -> &'static str {
        match self {
            BorderStyle::None => "none",
            BorderStyle::Single => "single",
        }
    }
}

/// A single border line.
#[derive(Debug, Eq, PartialEq, Clone, Default)]
pub struct Border {
    pub style: BorderStyle,
    /// Width in eighths of a point.
    pub size: u32,
    /// Hex rgb color, e.g. `000000`. Empty means automatic.
    pub color: String,
}

impl Border {
    pub fn new(style: BorderStyle, size: u32, color: &str) -> Self {
        Border {
            style,
            size,
            color: color.to_string(),
        }
    }

    /// A border that is explicitly switched off.
    pub fn none() -> Self {
        Border::default()
    }

    pub fn is_visible(&self) -> bool {
        self.style != BorderStyle::None && self.size > 0
    }
}

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum BorderSide {
    Top,
    Left,
    Bottom,
    Right,
    InsideHorizontal,
    InsideVertical,
    /// Every side, including the inside ones.
    All,
}

/// Border configuration of a table or a cell. Unset sides are inherited from the defaults
/// of whatever opens the document.
#[derive(Debug, Eq, PartialEq, Clone, Default)]
pub struct Borders {
    pub top: Option<Border>,
    pub left: Option<Border>,
    pub bottom: Option<Border>,
    pub right: Option<Border>,
    pub inside_horizontal: Option<Border>,
    pub inside_vertical: Option<Border>,
}

impl Borders {
    pub fn set(&mut self, side: BorderSide, border: Border) {
        match side {
            BorderSide::Top => self.top = Some(border),
            BorderSide::Left => self.left = Some(border),
            BorderSide::Bottom => self.bottom = Some(border),
            BorderSide::Right => self.right = Some(border),
            BorderSide::InsideHorizontal => self.inside_horizontal = Some(border),
            BorderSide::InsideVertical => self.inside_vertical = Some(border),
            BorderSide::All => {
                self.top = Some(border.clone());
                self.left = Some(border.clone());
                self.bottom = Some(border.clone());
                self.right = Some(border.clone());
                self.inside_horizontal = Some(border.clone());
                self.inside_vertical = Some(border);
            }
        }
    }

    pub fn get(&self, side: BorderSide) -> Option<&Border> {
        match side {
            BorderSide::Top => self.top.as_ref(),
            BorderSide::Left => self.left.as_ref(),
            BorderSide::Bottom => self.bottom.as_ref(),
            BorderSide::Right => self.right.as_ref(),
            BorderSide::InsideHorizontal => self.inside_horizontal.as_ref(),
            BorderSide::InsideVertical => self.inside_vertical.as_ref(),
            BorderSide::All => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sides().all(|(_, b)| b.is_none())
    }

    /// The individual sides, in the order the document format expects them.
    pub(crate) fn sides(&self) -> impl Iterator<Item = (&'static str, Option<&Border>)> {
        [
            ("w:top", self.top.as_ref()),
            ("w:left", self.left.as_ref()),
            ("w:bottom", self.bottom.as_ref()),
            ("w:right", self.right.as_ref()),
            ("w:insideH", self.inside_horizontal.as_ref()),
            ("w:insideV", self.inside_vertical.as_ref()),
        ]
        .into_iter()
    }
}
