//! Column width resolution.
//!
//! Widths are settled in three steps:
//!
//! 1. `Fixed` columns take their width; `Bounded` columns take their measured
//!    content width clamped to `[min, max]`.
//! 2. If that overflows the space left after decorations, `Bounded` columns
//!    are narrowed one cell at a time, widest first, down to their minimum.
//! 3. Whatever is left is split between `Fill` columns, leftmost first.

use super::types::{TableSpec, Width};

/// Final width of every column, decorations excluded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedWidths {
    pub widths: Vec<usize>,
}

impl ResolvedWidths {
    /// Width of one column.
    pub fn get(&self, index: usize) -> Option<usize> {
        self.widths.get(index).copied()
    }

    /// Sum of the column widths, decorations excluded.
    pub fn total(&self) -> usize {
        self.widths.iter().sum()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// True for a table with no columns.
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

impl TableSpec {
    /// Widths with no content to look at: `Bounded` columns sit at their
    /// minimum.
    pub fn resolve_widths(&self, total_width: usize) -> ResolvedWidths {
        self.resolve_widths_measured(total_width, &[])
    }

    /// Widths for content whose visible width per column is already known.
    ///
    /// Callers holding markup measure it themselves, since tags take no
    /// space on screen.
    ///
    /// # Example
    ///
    /// ```rust
    /// use richwx_render::table::{Column, TableSpec, Width};
    ///
    /// let spec = TableSpec::builder()
    ///     .column(Column::new(Width::Bounded { min: Some(5), max: Some(20) }))
    ///     .column(Column::new(Width::Fill))
    ///     .separator("  ")
    ///     .build();
    ///
    /// // "Tornado Warning" is 15 wide; the fill column takes the rest.
    /// let widths = spec.resolve_widths_measured(80, &[15, 7]);
    /// assert_eq!(widths.widths, vec![15, 63]);
    /// ```
    pub fn resolve_widths_measured(&self, total_width: usize, content_widths: &[usize]) -> ResolvedWidths {
        let available = total_width.saturating_sub(self.decorations.overhead(self.columns.len()));

        let mut widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| match col.width {
                Width::Fixed(w) => w,
                Width::Bounded { min, max } => content_widths
                    .get(i)
                    .copied()
                    .unwrap_or(0)
                    .max(min.unwrap_or(0))
                    .min(max.unwrap_or(usize::MAX)),
                Width::Fill => 0,
            })
            .collect();

        self.shrink_bounded(&mut widths, available);
        self.spread_fill(&mut widths, available);
        ResolvedWidths { widths }
    }

    fn shrink_bounded(&self, widths: &mut [usize], available: usize) {
        let floors: Vec<Option<usize>> = self
            .columns
            .iter()
            .map(|col| match col.width {
                Width::Bounded { min, .. } => Some(min.unwrap_or(1).max(1)),
                _ => None,
            })
            .collect();

        let mut excess = widths.iter().sum::<usize>().saturating_sub(available);
        while excess > 0 {
            // ties go to the leftmost column
            let Some(i) = (0..widths.len())
                .filter(|&i| floors[i].is_some_and(|floor| widths[i] > floor))
                .max_by_key(|&i| (widths[i], std::cmp::Reverse(i)))
            else {
                break;
            };
            widths[i] -= 1;
            excess -= 1;
        }
    }

    fn spread_fill(&self, widths: &mut [usize], available: usize) {
        let fills: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .filter(|(_, col)| matches!(col.width, Width::Fill))
            .map(|(i, _)| i)
            .collect();
        if fills.is_empty() {
            return;
        }

        let left = available.saturating_sub(widths.iter().sum());
        let share = left / fills.len();
        let extra = left % fills.len();
        for (n, &i) in fills.iter().enumerate() {
            widths[i] = share + usize::from(n < extra);
        }
    }
}
