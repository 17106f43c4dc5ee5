use crate::options::NormalizedOptions;

/// Decide whether the digit at `digit_index` stays readable.
///
/// Non-empty visible ranges take over completely; otherwise the leading
/// `show_first` and trailing `show_last` positions are kept. Non-positive
/// counts reveal nothing at their end.
pub fn is_visible(digit_index: usize, total_digits: usize, options: &NormalizedOptions) -> bool {
    let idx = digit_index as i64;

    if let Some(ranges) = options.visible_ranges.as_deref() {
        if !ranges.is_empty() {
            return ranges.iter().any(|r| r.contains(idx));
        }
    }

    let leading = options.show_first > 0 && idx < options.show_first;
    let trailing = options.show_last > 0 && idx >= total_digits as i64 - options.show_last;
    leading || trailing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{resolve, MaskOptions, VisibleRange};

    fn opts(first: i64, last: i64) -> NormalizedOptions {
        resolve(Some(&MaskOptions::new().show_first(first).show_last(last)))
    }

    #[test]
    fn first_and_last_windows() {
        let o = opts(2, 3);
        let visible: Vec<usize> = (0..10).filter(|&i| is_visible(i, 10, &o)).collect();
        assert_eq!(visible, vec![0, 1, 7, 8, 9]);
    }

    #[test]
    fn negative_counts_reveal_nothing() {
        let o = opts(-1, -3);
        assert!((0..10).all(|i| !is_visible(i, 10, &o)));
    }

    #[test]
    fn show_last_larger_than_total() {
        let o = opts(0, 20);
        assert!((0..5).all(|i| is_visible(i, 5, &o)));
    }

    #[test]
    fn ranges_override_first_last() {
        let mut o = opts(5, 5);
        o.visible_ranges = Some(vec![VisibleRange(3, 3)]);
        let visible: Vec<usize> = (0..10).filter(|&i| is_visible(i, 10, &o)).collect();
        assert_eq!(visible, vec![3]);
    }

    #[test]
    fn overlapping_ranges_union() {
        let mut o = opts(0, 0);
        o.visible_ranges = Some(vec![VisibleRange(0, 4), VisibleRange(2, 6)]);
        let visible: Vec<usize> = (0..10).filter(|&i| is_visible(i, 10, &o)).collect();
        assert_eq!(visible, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn empty_ranges_fall_back_to_windows() {
        let mut o = opts(1, 1);
        o.visible_ranges = Some(Vec::new());
        assert!(is_visible(0, 4, &o));
        assert!(!is_visible(1, 4, &o));
        assert!(is_visible(3, 4, &o));
    }
}
