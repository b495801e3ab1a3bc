//! Behavioural properties of the HPD estimator

use phylo_stats::{hpd, window_size, HpdError};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case(vec![1.0, 2.0, 3.0, 4.0, 5.0, 100.0], 0.5, (1.0, 3.0))]
#[case(vec![1.0, 2.0, 3.0, 10.0, 11.0, 12.0], 0.5, (1.0, 3.0))]
#[case(vec![12.0, 11.0, 10.0, 3.0, 2.0, 1.0], 0.5, (1.0, 3.0))]
#[case(vec![1.0, 5.0, 6.0, 7.0, 20.0], 0.6, (5.0, 7.0))]
#[case(vec![2.0, 2.0, 2.0, 9.0], 0.75, (2.0, 2.0))]
fn test_known_intervals(#[case] data: Vec<f64>, #[case] level: f64, #[case] expected: (f64, f64)) {
    let interval = hpd(&data, level).unwrap().unwrap();
    assert_eq!(interval.bounds(), expected);
}

#[rstest]
#[case(0.0)]
#[case(1.5)]
#[case(-1.0)]
fn test_level_out_of_range(#[case] level: f64) {
    assert!(matches!(
        hpd(&[1.0, 2.0, 3.0], level),
        Err(HpdError::InvalidLevel { .. })
    ));
}

#[test]
fn test_full_level_spans_all_samples() {
    let data = vec![4.0, -1.0, 7.5, 2.0];
    let interval = hpd(&data, 1.0).unwrap().unwrap();
    assert_eq!(interval.bounds(), (-1.0, 7.5));
    assert_eq!(interval.count, 4);
}

fn samples() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6..1.0e6f64, 0..200)
}

proptest! {
    #[test]
    fn test_order_does_not_matter(data in samples(), level in 0.01..=1.0f64) {
        let mut reversed = data.clone();
        reversed.reverse();
        let mut rotated = data.clone();
        if !rotated.is_empty() {
            let mid = rotated.len() / 2;
            rotated.rotate_left(mid);
        }

        let expected = hpd(&data, level).unwrap();
        prop_assert_eq!(hpd(&reversed, level).unwrap(), expected);
        prop_assert_eq!(hpd(&rotated, level).unwrap(), expected);
    }

    #[test]
    fn test_wider_level_never_narrows(data in samples(), a in 0.01..=1.0f64, b in 0.01..=1.0f64) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        if let (Some(narrow), Some(wide)) = (hpd(&data, low).unwrap(), hpd(&data, high).unwrap()) {
            prop_assert!(wide.width() >= narrow.width());
        }
    }

    #[test]
    fn test_interval_encloses_window(data in samples(), level in 0.01..=1.0f64) {
        match hpd(&data, level).unwrap() {
            Some(interval) => {
                prop_assert!(interval.lower <= interval.upper);
                prop_assert!(data.contains(&interval.lower));
                prop_assert!(data.contains(&interval.upper));
                let inside = data.iter().filter(|x| interval.contains(**x)).count();
                prop_assert!(inside >= interval.count);
                prop_assert_eq!(interval.count, window_size(level, data.len()));
            }
            None => prop_assert!(window_size(level, data.len()) < 2),
        }
    }

    #[test]
    fn test_no_narrower_window_exists(data in samples(), level in 0.01..=1.0f64) {
        if let Some(interval) = hpd(&data, level).unwrap() {
            let mut sorted = data.clone();
            sorted.sort_by(f64::total_cmp);
            let last = interval.count - 1;
            for start in 0..=(sorted.len() - interval.count) {
                prop_assert!(sorted[start + last] - sorted[start] >= interval.width());
            }
        }
    }
}
