use std::ops::Range;

use serde::Serialize;

/// Listings shown per page.
pub const PAGE_SIZE: usize = 9;

/// Page counts up to this many are shown in full.
const MAX_VISIBLE_PAGES: usize = 5;

/// One slot in the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

pub fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// Index range of the 1-based `page` within `len` items, clamped to `len`.
pub fn page_bounds(len: usize, page: usize) -> Range<usize> {
    let start = (page.saturating_sub(1) * PAGE_SIZE).min(len);
    let end = (page * PAGE_SIZE).min(len);
    start..end
}

pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    &items[page_bounds(items.len(), page)]
}

/// Page numbers to show in the pagination bar for `current` of `total`.
pub fn page_window(current: usize, total: usize) -> Vec<PageItem> {
    use PageItem::{Ellipsis, Page};

    if total <= MAX_VISIBLE_PAGES {
        return (1..=total).map(Page).collect();
    }
    if current <= 3 {
        let mut items: Vec<_> = (1..=4).map(Page).collect();
        items.extend([Ellipsis, Page(total)]);
        items
    } else if current >= total - 2 {
        let mut items = vec![Page(1), Ellipsis];
        items.extend((total - 3..=total).map(Page));
        items
    } else {
        vec![
            Page(1),
            Ellipsis,
            Page(current - 1),
            Page(current),
            Page(current + 1),
            Ellipsis,
            Page(total),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::PageItem::{Ellipsis, Page};
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(9), 1);
        assert_eq!(total_pages(10), 2);
        assert_eq!(total_pages(27), 3);
        assert_eq!(total_pages(28), 4);
    }

    #[test]
    fn test_pages_concatenate_to_input() {
        for len in [0, 1, 8, 9, 10, 18, 19, 50] {
            let items: Vec<usize> = (0..len).collect();
            let rebuilt: Vec<usize> = (1..=total_pages(len))
                .flat_map(|p| page_slice(&items, p).iter().copied())
                .collect();
            assert_eq!(rebuilt, items, "len {len}");
        }
    }

    #[test]
    fn test_out_of_range_pages_are_empty() {
        let items: Vec<u8> = (0..10).collect();
        assert!(page_slice(&items, 0).is_empty());
        assert!(page_slice(&items, 3).is_empty());
        assert_eq!(page_slice(&items, 2), &[9]);
    }

    #[test]
    fn test_window_small_totals_show_everything() {
        assert!(page_window(1, 0).is_empty());
        assert_eq!(
            page_window(2, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn test_window_near_start() {
        let expected = vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)];
        assert_eq!(page_window(1, 10), expected);
        assert_eq!(page_window(3, 10), expected);
    }

    #[test]
    fn test_window_near_end() {
        let expected = vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)];
        assert_eq!(page_window(8, 10), expected);
        assert_eq!(page_window(10, 10), expected);
    }

    #[test]
    fn test_window_middle() {
        assert_eq!(
            page_window(5, 10),
            vec![
                Page(1),
                Ellipsis,
                Page(4),
                Page(5),
                Page(6),
                Ellipsis,
                Page(10)
            ]
        );
        // six pages: 4 is both past the start and at the end window
        assert_eq!(
            page_window(4, 6),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Page(6)]
        );
    }
}
