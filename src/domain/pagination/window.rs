//! Page-window selection
//!
//! Picks the contiguous run of page numbers shown as links around the
//! current page, pinning the window to the first or last page when the
//! current page sits near either end.

use serde::Serialize;

/// A page number inside the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    number: u64,
    is_current: bool,
}

impl Page {
    pub fn new(number: u64, is_current: bool) -> Self {
        Self { number, is_current }
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn is_current(&self) -> bool {
        self.is_current
    }
}

/// Compute the window of page numbers to display.
///
/// * `linked_count == 0` yields an empty window.
/// * `linked_count == 1` or a single page yields just `current`.
/// * When every page fits, all pages are returned.
/// * Otherwise the window is `linked_count` wide. An even width shows one
///   more page before `current` than after it.
pub fn page_window(current: u64, total_pages: u64, linked_count: u64) -> Vec<Page> {
    if linked_count == 0 {
        return Vec::new();
    }

    if linked_count == 1 || total_pages == 1 {
        return vec![Page::new(current, true)];
    }

    if total_pages <= linked_count {
        return (1..=total_pages)
            .map(|number| Page::new(number, number == current))
            .collect();
    }

    let radius = linked_count / 2;
    let previous_count = radius;
    let next_count = if linked_count % 2 == 0 {
        radius - 1
    } else {
        radius
    };

    // total_pages > linked_count here, so none of these subtractions underflow
    let (first, last) = if current <= previous_count {
        (1, linked_count)
    } else if current >= total_pages - next_count {
        (total_pages - linked_count + 1, total_pages)
    } else {
        (current - previous_count, current + next_count)
    };

    (first..=last)
        .map(|number| Page::new(number, number == current))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(pages: &[Page]) -> Vec<u64> {
        pages.iter().map(Page::number).collect()
    }

    #[test]
    fn test_zero_linked_count_is_empty() {
        assert!(page_window(2, 3, 0).is_empty());
        assert!(page_window(1, 1, 0).is_empty());
    }

    #[test]
    fn test_single_link_is_current_only() {
        let pages = page_window(2, 3, 1);
        assert_eq!(pages, vec![Page::new(2, true)]);
    }

    #[test]
    fn test_single_page_ignores_linked_count() {
        for linked in 2..10 {
            assert_eq!(page_window(1, 1, linked), vec![Page::new(1, true)]);
        }
    }

    #[test]
    fn test_all_pages_fit() {
        let pages = page_window(2, 2, 5);
        assert_eq!(numbers(&pages), vec![1, 2]);
        assert!(!pages[0].is_current());
        assert!(pages[1].is_current());

        let pages = page_window(3, 4, 4);
        assert_eq!(numbers(&pages), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_odd_window_positions() {
        // 7 pages, 3 links
        assert_eq!(numbers(&page_window(1, 7, 3)), vec![1, 2, 3]);
        assert_eq!(numbers(&page_window(3, 7, 3)), vec![2, 3, 4]);
        assert_eq!(numbers(&page_window(6, 7, 3)), vec![5, 6, 7]);
        assert_eq!(numbers(&page_window(7, 7, 3)), vec![5, 6, 7]);
    }

    #[test]
    fn test_even_window_favors_previous_pages() {
        // 7 pages, 4 links: two before current, one after
        assert_eq!(numbers(&page_window(1, 7, 4)), vec![1, 2, 3, 4]);
        assert_eq!(numbers(&page_window(4, 7, 4)), vec![2, 3, 4, 5]);
        assert_eq!(numbers(&page_window(5, 7, 4)), vec![3, 4, 5, 6]);
        assert_eq!(numbers(&page_window(6, 7, 4)), vec![4, 5, 6, 7]);
    }

    #[test]
    fn test_current_is_marked() {
        let pages = page_window(4, 10, 5);
        let current: Vec<u64> = pages
            .iter()
            .filter(|p| p.is_current())
            .map(Page::number)
            .collect();
        assert_eq!(current, vec![4]);
    }

    #[test]
    fn test_window_invariants_hold_over_grid() {
        for linked in 2..=9u64 {
            let radius = linked / 2;
            let previous_count = radius;
            let next_count = if linked % 2 == 0 { radius - 1 } else { radius };

            for total_pages in (linked + 1)..=30 {
                for current in 1..=total_pages {
                    let pages = page_window(current, total_pages, linked);
                    let nums = numbers(&pages);

                    assert_eq!(nums.len() as u64, linked, "width for {current}/{total_pages}/{linked}");
                    assert!(nums.windows(2).all(|w| w[1] == w[0] + 1), "consecutive");
                    assert!(nums[0] >= 1 && *nums.last().unwrap() <= total_pages, "in range");

                    let idx = nums.iter().position(|&n| n == current).expect("contains current");
                    assert!(pages[idx].is_current());
                    assert_eq!(pages.iter().filter(|p| p.is_current()).count(), 1);

                    let pinned_start = current <= previous_count;
                    let pinned_end = current >= total_pages - next_count;
                    if !pinned_start && !pinned_end {
                        assert_eq!(idx as u64, previous_count, "centered offset");
                    }
                }
            }
        }
    }
}
