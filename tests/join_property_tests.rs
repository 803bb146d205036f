use std::collections::HashSet;

use proptest::prelude::*;

use interest_charts::core::{InterestPoint, PricePoint, join_by_date};

fn date_key() -> impl Strategy<Value = String> {
    (2020u32..2026, 1u32..13, 1u32..29).prop_map(|(y, m, d)| format!("{y:04}-{m:02}-{d:02}"))
}

fn price_points() -> impl Strategy<Value = Vec<PricePoint>> {
    prop::collection::vec(
        (date_key(), -1.0e6f64..1.0e6).prop_map(|(date, close)| PricePoint { date, close }),
        0..32,
    )
}

fn interest_points() -> impl Strategy<Value = Vec<InterestPoint>> {
    prop::collection::vec(
        (date_key(), 0.0f64..1.0e4).prop_map(|(date, mentions)| InterestPoint { date, mentions }),
        0..32,
    )
}

proptest! {
    #[test]
    fn labels_always_mirror_price_dates(prices in price_points(), interest in interest_points()) {
        let aligned = join_by_date(&prices, &interest);

        let expected: Vec<&str> = prices.iter().map(|p| p.date.as_str()).collect();
        let labels: Vec<&str> = aligned.labels.iter().map(String::as_str).collect();
        prop_assert_eq!(labels, expected);

        let closes: Vec<f64> = prices.iter().map(|p| p.close).collect();
        prop_assert_eq!(&aligned.primary, &closes);
    }

    #[test]
    fn aligned_lengths_always_agree(prices in price_points(), interest in interest_points()) {
        let aligned = join_by_date(&prices, &interest);
        prop_assert!(aligned.validate().is_ok());
        prop_assert_eq!(aligned.len(), prices.len());
    }

    #[test]
    fn unmatched_rows_are_exactly_zero(prices in price_points(), interest in interest_points()) {
        let aligned = join_by_date(&prices, &interest);
        let known: HashSet<&str> = interest.iter().map(|p| p.date.as_str()).collect();

        for (label, mentions) in aligned.labels.iter().zip(&aligned.secondary) {
            if !known.contains(label.as_str()) {
                prop_assert_eq!(*mentions, 0.0);
            }
        }
    }
}
