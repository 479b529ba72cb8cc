//! Column and table specifications.

/// How a column's width is decided.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Width {
    /// Exactly this many columns.
    Fixed(usize),
    /// Sized from content, clamped to the bounds.
    Bounded {
        min: Option<usize>,
        max: Option<usize>,
    },
    /// Whatever space is left after the other columns.
    Fill,
}

impl Default for Width {
    fn default() -> Self {
        Width::Bounded {
            min: None,
            max: None,
        }
    }
}

/// Horizontal placement of cell content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// A single column: header text, width rule and alignment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Column {
    pub width: Width,
    pub align: Align,
    pub header: String,
}

impl Column {
    /// An unnamed column with the given width rule.
    pub fn new(width: Width) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// A content-sized column with a header.
    pub fn named(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            ..Self::default()
        }
    }

    /// Replaces the width rule.
    #[must_use]
    pub fn width(mut self, width: Width) -> Self {
        self.width = width;
        self
    }

    /// Sets the alignment of header and cells.
    #[must_use]
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Shorthand for `align(Align::Center)`.
    #[must_use]
    pub fn center(self) -> Self {
        self.align(Align::Center)
    }

    /// Content-sized, but never narrower than `min`.
    #[must_use]
    pub fn min_width(mut self, min: usize) -> Self {
        self.width = match self.width {
            Width::Bounded { max, .. } => Width::Bounded {
                min: Some(min),
                max,
            },
            _ => Width::Bounded {
                min: Some(min),
                max: None,
            },
        };
        self
    }

    /// Content-sized, but never wider than `max`.
    #[must_use]
    pub fn max_width(mut self, max: usize) -> Self {
        self.width = match self.width {
            Width::Bounded { min, .. } => Width::Bounded {
                min,
                max: Some(max),
            },
            _ => Width::Bounded {
                min: None,
                max: Some(max),
            },
        };
        self
    }
}

/// Characters placed around and between cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Decorations {
    pub separator: String,
    pub prefix: String,
    pub suffix: String,
}

impl Decorations {
    /// Columns taken by decorations for a row of `num_columns` cells.
    pub fn overhead(&self, num_columns: usize) -> usize {
        use unicode_width::UnicodeWidthStr;

        if num_columns == 0 {
            return 0;
        }
        self.prefix.width()
            + self.suffix.width()
            + self.separator.width() * (num_columns - 1)
    }
}

/// Columns plus decorations; the input to width resolution.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableSpec {
    pub columns: Vec<Column>,
    pub decorations: Decorations,
}

impl TableSpec {
    /// Starts an empty spec.
    pub fn builder() -> TableSpecBuilder {
        TableSpecBuilder::default()
    }

    /// Number of columns.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }
}

#[derive(Clone, Debug, Default)]
pub struct TableSpecBuilder {
    columns: Vec<Column>,
    decorations: Decorations,
}

impl TableSpecBuilder {
    /// Appends a column.
    #[must_use]
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Text between adjacent cells.
    #[must_use]
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.decorations.separator = separator.into();
        self
    }

    /// Text before the first cell.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.decorations.prefix = prefix.into();
        self
    }

    /// Text after the last cell.
    #[must_use]
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.decorations.suffix = suffix.into();
        self
    }

    /// Finishes the spec.
    pub fn build(self) -> TableSpec {
        TableSpec {
            columns: self.columns,
            decorations: self.decorations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overhead() {
        let decorations = Decorations {
            separator: " │ ".to_string(),
            prefix: "│ ".to_string(),
            suffix: " │".to_string(),
        };
        assert_eq!(decorations.overhead(0), 0);
        assert_eq!(decorations.overhead(1), 4);
        assert_eq!(decorations.overhead(3), 10);
    }

    #[test]
    fn test_min_then_max_width() {
        let column = Column::named("Location").min_width(10).max_width(80);
        assert_eq!(
            column.width,
            Width::Bounded {
                min: Some(10),
                max: Some(80)
            }
        );
    }

    #[test]
    fn test_min_width_replaces_fill() {
        let column = Column::new(Width::Fill).min_width(3);
        assert_eq!(
            column.width,
            Width::Bounded {
                min: Some(3),
                max: None
            }
        );
    }
}
