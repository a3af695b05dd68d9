use liquid_core::model::ValueView;
use serde::{Deserialize, Serialize};

/// Number of page links shown in a pagination widget
pub const PAGE_RANGE_LIMIT: i64 = 5;

/// Pagination state for the current page, mirroring the `paginator` object
/// Jekyll-compatible generators expose to templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginator {
    pub page: i64,
    pub total_pages: i64,
}

impl Paginator {
    /// Extract a paginator from a Liquid value
    ///
    /// Returns `None` for nil input, non-object input, or objects without
    /// integer `page`/`total_pages` fields, so pages rendered outside a
    /// pagination context can skip the widget instead of failing.
    pub fn from_view(value: &dyn ValueView) -> Option<Self> {
        let object = value.as_object()?;

        let page = object.get("page")?.as_scalar()?.to_integer()?;
        let total_pages = object.get("total_pages")?.as_scalar()?.to_integer()?;

        Some(Paginator { page, total_pages })
    }

    /// Compute the page numbers to display in the pagination widget
    ///
    /// The window is centered on the current page, up to PAGE_RANGE_LIMIT
    /// wide, and always stays inside `[1, total_pages]`. When the centered
    /// window is truncated at either end, the opposite bound is pushed out
    /// so the widget keeps its full width whenever enough pages exist.
    pub fn page_range(&self) -> Vec<i64> {
        let half = PAGE_RANGE_LIMIT / 2;

        let mut min_page = self.page - half;
        if min_page < 1 {
            min_page = 1;
        }

        let mut max_page = self.page + half;
        if max_page > self.total_pages {
            max_page = self.total_pages;
        }

        // Truncated at the low end: extend the upper bound first
        if max_page - min_page < PAGE_RANGE_LIMIT - 1 {
            let extended = min_page + PAGE_RANGE_LIMIT - 1;
            max_page = if extended > self.total_pages {
                self.total_pages
            } else {
                extended
            };
        }

        // Still short, so we are near the end of the range: pull the
        // lower bound back by the remaining shortfall
        if max_page - min_page < PAGE_RANGE_LIMIT - 1 {
            let shortfall = PAGE_RANGE_LIMIT - 1 - (max_page - min_page);
            let extended = min_page - shortfall;
            min_page = if extended < 1 { 1 } else { extended };
        }

        (min_page..=max_page).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use liquid_core::model::{Object, Value};

    fn paginator(page: i64, total_pages: i64) -> Paginator {
        Paginator { page, total_pages }
    }

    #[test]
    fn test_first_page_anchors_window_at_start() {
        assert_eq!(paginator(1, 10).page_range(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_last_page_anchors_window_at_end() {
        assert_eq!(paginator(10, 10).page_range(), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_middle_page_centers_window() {
        assert_eq!(paginator(5, 10).page_range(), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_near_start_extends_upward() {
        assert_eq!(paginator(2, 10).page_range(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_near_end_extends_downward() {
        assert_eq!(paginator(9, 10).page_range(), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_fewer_pages_than_window_shows_all() {
        assert_eq!(paginator(1, 3).page_range(), vec![1, 2, 3]);
        assert_eq!(paginator(2, 3).page_range(), vec![1, 2, 3]);
        assert_eq!(paginator(3, 3).page_range(), vec![1, 2, 3]);
    }

    #[test]
    fn test_single_page_site() {
        assert_eq!(paginator(1, 1).page_range(), vec![1]);
    }

    #[test]
    fn test_window_properties_hold_across_in_range_pages() {
        for total_pages in 5..=20 {
            for page in 1..=total_pages {
                let range = paginator(page, total_pages).page_range();

                assert_eq!(range.len() as i64, PAGE_RANGE_LIMIT);
                assert!(range.contains(&page));
                assert!(*range.first().unwrap() >= 1);
                assert!(*range.last().unwrap() <= total_pages);
                for pair in range.windows(2) {
                    assert_eq!(pair[1], pair[0] + 1);
                }
            }
        }
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        // Callers don't guarantee page stays in bounds
        assert_eq!(paginator(0, 10).page_range(), vec![1, 2, 3, 4, 5]);
        assert_eq!(paginator(-3, 10).page_range(), vec![1, 2, 3, 4, 5]);
        assert_eq!(paginator(15, 10).page_range(), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_no_pages_yields_empty_range() {
        assert_eq!(paginator(1, 0).page_range(), Vec::<i64>::new());
    }

    #[test]
    fn test_from_view_reads_paginator_object() {
        let mut object = Object::new();
        object.insert("page".into(), Value::scalar(3i64));
        object.insert("total_pages".into(), Value::scalar(12i64));
        let value = Value::Object(object);

        assert_eq!(Paginator::from_view(value.as_view()), Some(paginator(3, 12)));
    }

    #[test]
    fn test_from_view_rejects_nil_and_non_objects() {
        assert_eq!(Paginator::from_view(Value::Nil.as_view()), None);
        assert_eq!(Paginator::from_view(Value::scalar(7i64).as_view()), None);
    }

    #[test]
    fn test_from_view_rejects_incomplete_objects() {
        let mut object = Object::new();
        object.insert("page".into(), Value::scalar(3i64));
        let value = Value::Object(object);

        assert_eq!(Paginator::from_view(value.as_view()), None);
    }
}
