//! Rendered item sequence for the current level.
//!
//! Levels with enough items are rendered as three back-to-back copies so the
//! viewport can be kept inside the middle copy. Shorter levels render as-is.

use dishview_model::MenuItem;

use crate::infra::constants::carousel::eligibility::COPIES;

/// Whether `len` items are enough to run the loop illusion.
pub fn is_infinite_eligible(len: usize, min_items: usize) -> bool {
    len > 0 && len >= min_items
}

/// The current level's (optionally filtered) items and how to render them.
#[derive(Debug, Clone)]
pub struct Strip<'a> {
    items: Vec<&'a MenuItem>,
    looped: bool,
}

impl<'a> Strip<'a> {
    /// Filter `items` by `query` (empty matches all), then decide eligibility.
    pub fn build(
        items: &'a [MenuItem],
        query: Option<&str>,
        min_items: usize,
    ) -> Self {
        let items: Vec<&MenuItem> = match query {
            Some(q) if !q.trim().is_empty() => {
                items.iter().filter(|item| item.matches_query(q)).collect()
            }
            _ => items.iter().collect(),
        };
        let looped = is_infinite_eligible(items.len(), min_items);
        Self { items, looped }
    }

    /// True when the strip is rendered as three copies.
    pub fn is_looped(&self) -> bool {
        self.looped
    }

    /// Items in one copy.
    pub fn copy_len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn rendered_len(&self) -> usize {
        if self.looped {
            self.items.len() * COPIES
        } else {
            self.items.len()
        }
    }

    /// One slice per rendered copy: three when looped, one otherwise.
    pub fn copies(&self) -> impl Iterator<Item = &[&'a MenuItem]> + '_ {
        let copies = if self.looped { COPIES } else { 1 };
        (0..copies).map(move |_| self.items.as_slice())
    }

    /// Items in render order, repeated when looped.
    pub fn rendered(&self) -> impl Iterator<Item = &'a MenuItem> + '_ {
        self.copies().flatten().copied()
    }

    /// Rows of a `columns`-wide grid. Every copy starts on a fresh row and
    /// its last row is padded with `None`, so all copies span the same rows.
    pub fn grid_rows(&self, columns: usize) -> Vec<Vec<Option<&'a MenuItem>>> {
        let columns = columns.max(1);
        self.copies()
            .flat_map(|copy| copy.chunks(columns))
            .map(|chunk| {
                let mut cells: Vec<_> = chunk.iter().copied().map(Some).collect();
                cells.resize(columns, None);
                cells
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<MenuItem> {
        (0..n)
            .map(|i| MenuItem::new(format!("dish-{i}"), format!("Dish {i}")))
            .collect()
    }

    #[test]
    fn short_lists_render_unchanged() {
        for (len, min) in [(0, 3), (2, 3), (3, 4)] {
            let source = items(len);
            let strip = Strip::build(&source, None, min);
            assert!(!strip.is_looped());
            let rendered: Vec<_> = strip.rendered().cloned().collect();
            assert_eq!(rendered, source);
        }
    }

    #[test]
    fn eligible_lists_render_three_copies_in_order() {
        for (len, min) in [(3, 3), (4, 4), (7, 3)] {
            let source = items(len);
            let strip = Strip::build(&source, None, min);
            assert!(strip.is_looped());
            assert_eq!(strip.rendered_len(), len * 3);

            let rendered: Vec<_> = strip.rendered().cloned().collect();
            let expected = [source.clone(), source.clone(), source].concat();
            assert_eq!(rendered, expected);
        }
    }

    #[test]
    fn grid_copies_start_on_fresh_rows() {
        let source = items(5);
        let strip = Strip::build(&source, None, 4);
        let rows = strip.grid_rows(2);

        // 5 items in 2 columns: three rows per copy, last one half empty.
        assert_eq!(rows.len(), 9);
        for copy in 0..3 {
            let first = &rows[copy * 3];
            assert_eq!(first[0].map(|i| i.id.as_str()), Some("dish-0"));
            let last = &rows[copy * 3 + 2];
            assert_eq!(last[0].map(|i| i.id.as_str()), Some("dish-4"));
            assert!(last[1].is_none());
        }
    }

    #[test]
    fn short_grid_is_a_single_copy() {
        let source = items(3);
        let rows = Strip::build(&source, None, 4).grid_rows(2);
        assert_eq!(rows.len(), 2);
        assert!(rows[1][1].is_none());
    }

    #[test]
    fn query_filters_before_eligibility() {
        let mut source = items(5);
        source[1].description = Some("Spicy".into());
        source[3].label = "Spicy Wings".into();

        let strip = Strip::build(&source, Some("spicy"), 4);
        assert_eq!(strip.copy_len(), 2);
        assert!(!strip.is_looped());

        let strip = Strip::build(&source, Some("   "), 4);
        assert_eq!(strip.copy_len(), 5);
        assert!(strip.is_looped());
    }
}
