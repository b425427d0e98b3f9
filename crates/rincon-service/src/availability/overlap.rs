//! The one interval-overlap predicate.
//!
//! Every overlap decision in the system — availability search, the
//! pre-write booking check, admin reservation modification — goes through
//! this function. Do not inline a second copy anywhere; the test suites
//! pin all call sites to this truth table.

use chrono::NaiveDate;

/// Check whether two half-open date intervals `[a_start, a_end)` and
/// `[b_start, b_end)` share at least one night.
///
/// Touching boundaries do not overlap: a stay ending on the day another
/// begins leaves the room free for the second guest.
pub fn dates_overlap(
    a_start: NaiveDate,
    a_end: NaiveDate,
    b_start: NaiveDate,
    b_end: NaiveDate,
) -> bool {
    a_start < b_end && a_end > b_start
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_touching_boundaries_do_not_overlap() {
        let jan1 = date(2024, 1, 1);
        let jan5 = date(2024, 1, 5);
        let jan9 = date(2024, 1, 9);
        assert!(!dates_overlap(jan1, jan5, jan5, jan9));
        assert!(!dates_overlap(jan5, jan9, jan1, jan5));
    }

    #[test]
    fn test_partial_overlap() {
        let a = (date(2024, 1, 1), date(2024, 1, 5));
        let b = (date(2024, 1, 3), date(2024, 1, 7));
        assert!(dates_overlap(a.0, a.1, b.0, b.1));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = (date(2024, 1, 1), date(2024, 1, 31));
        let inner = (date(2024, 1, 10), date(2024, 1, 12));
        assert!(dates_overlap(outer.0, outer.1, inner.0, inner.1));
        assert!(dates_overlap(inner.0, inner.1, outer.0, outer.1));
    }

    #[test]
    fn test_disjoint_ranges() {
        assert!(!dates_overlap(
            date(2024, 1, 1),
            date(2024, 1, 5),
            date(2024, 2, 1),
            date(2024, 2, 5),
        ));
    }

    #[test]
    fn test_symmetry() {
        let cases = [
            (date(2024, 1, 1), date(2024, 1, 5), date(2024, 1, 5), date(2024, 1, 9)),
            (date(2024, 1, 1), date(2024, 1, 5), date(2024, 1, 3), date(2024, 1, 7)),
            (date(2024, 3, 1), date(2024, 3, 2), date(2024, 3, 2), date(2024, 3, 3)),
            (date(2024, 1, 1), date(2024, 1, 31), date(2024, 1, 10), date(2024, 1, 12)),
        ];
        for (a1, a2, b1, b2) in cases {
            assert_eq!(
                dates_overlap(a1, a2, b1, b2),
                dates_overlap(b1, b2, a1, a2),
                "overlap must be symmetric for {a1}..{a2} vs {b1}..{b2}"
            );
        }
    }
}
