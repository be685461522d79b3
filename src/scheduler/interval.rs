//! Review interval model.
//!
//! Maps a mastery level and a performance grade to the next review date, and
//! answers whether an item is due at a given instant:
//! - Each mastery level has a base interval in days (0, 1, 3, 7, 14, 30)
//! - The grade scales that interval: difficult 0.6, ok 1.0, easy 1.5
//! - The scaled interval is rounded to the nearest whole day
//! - A stored `next_review_date` is authoritative; without one, due-ness falls
//!   back to whole days elapsed since `last_reviewed`

use crate::models::{Grade, VocabularyItem};
use chrono::{DateTime, Duration, Utc};

/// Base interval in days, indexed by mastery level.
pub const BASE_INTERVAL_DAYS: [i64; 6] = [0, 1, 3, 7, 14, 30];

/// Interval multipliers, in `Grade::ALL` order.
pub const EASE_FACTORS: [(Grade, f64); 3] = [
    (Grade::Difficult, 0.6),
    (Grade::Ok, 1.0),
    (Grade::Easy, 1.5),
];

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Base interval for a raw mastery level. Unknown levels map to 0 (due immediately).
pub fn base_interval_days(mastery_level: u8) -> i64 {
    BASE_INTERVAL_DAYS
        .get(usize::from(mastery_level))
        .copied()
        .unwrap_or(0)
}

pub fn ease_factor(grade: Grade) -> f64 {
    EASE_FACTORS
        .iter()
        .find(|(g, _)| *g == grade)
        .map(|(_, factor)| *factor)
        .unwrap_or(1.0)
}

/// Whole days until the next review: base interval times ease, rounded.
pub fn interval_days(mastery_level: u8, grade: Grade) -> i64 {
    (base_interval_days(mastery_level) as f64 * ease_factor(grade)).round() as i64
}

/// `now` plus the rounded, ease-adjusted interval for `mastery_level`.
pub fn next_review_date(mastery_level: u8, grade: Grade, now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::days(interval_days(mastery_level, grade))
}

/// Floor of the whole days from `from` to `to` (negative when `to` is earlier).
pub fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    (to - from).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

pub fn is_due(item: &VocabularyItem, now: DateTime<Utc>) -> bool {
    if let Some(next) = item.next_review_date {
        return now >= next;
    }

    match item.last_reviewed {
        // Never studied
        None => true,
        Some(last) => {
            days_between(last, now) >= base_interval_days(item.mastery_level.value())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MasteryLevel, NewWord};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 9, 30, 0).unwrap()
    }

    fn item(level: i64) -> VocabularyItem {
        let mut item = VocabularyItem::new(NewWord {
            word: "clause".to_string(),
            meaning: "một phần trong hợp đồng".to_string(),
            ..Default::default()
        });
        item.mastery_level = MasteryLevel::clamped(level);
        item
    }

    #[test]
    fn test_base_interval_table() {
        let expected = [0, 1, 3, 7, 14, 30];
        for (level, days) in expected.iter().enumerate() {
            assert_eq!(base_interval_days(level as u8), *days);
        }
        assert_eq!(base_interval_days(6), 0);
        assert_eq!(base_interval_days(200), 0);
    }

    #[test]
    fn test_ease_factors() {
        assert_eq!(ease_factor(Grade::Difficult), 0.6);
        assert_eq!(ease_factor(Grade::Ok), 1.0);
        assert_eq!(ease_factor(Grade::Easy), 1.5);
    }

    #[test]
    fn test_level_zero_is_due_now() {
        for grade in Grade::ALL {
            assert_eq!(next_review_date(0, grade, now()), now());
        }
    }

    #[test]
    fn test_difficult_level_three_rounds_down() {
        // 7 * 0.6 = 4.2
        assert_eq!(
            next_review_date(3, Grade::Difficult, now()),
            now() + Duration::days(4)
        );
    }

    #[test]
    fn test_rounding_is_to_nearest() {
        // 1 * 0.6 = 0.6 -> 1, 3 * 0.6 = 1.8 -> 2, 1 * 1.5 = 1.5 -> 2, 7 * 1.5 = 10.5 -> 11
        assert_eq!(interval_days(1, Grade::Difficult), 1);
        assert_eq!(interval_days(2, Grade::Difficult), 2);
        assert_eq!(interval_days(1, Grade::Easy), 2);
        assert_eq!(interval_days(3, Grade::Easy), 11);
        assert_eq!(interval_days(4, Grade::Difficult), 8);
        assert_eq!(interval_days(5, Grade::Difficult), 18);
        assert_eq!(interval_days(5, Grade::Easy), 45);
    }

    #[test]
    fn test_due_uses_next_review_date() {
        let mut past = item(2);
        past.next_review_date = Some(now() - Duration::hours(1));
        assert!(is_due(&past, now()));

        let mut exact = item(2);
        exact.next_review_date = Some(now());
        assert!(is_due(&exact, now()));

        let mut future = item(2);
        future.next_review_date = Some(now() + Duration::hours(1));
        assert!(!is_due(&future, now()));
    }

    #[test]
    fn test_never_reviewed_is_due() {
        assert!(is_due(&item(0), now()));
        assert!(is_due(&item(5), now()));
    }

    #[test]
    fn test_next_review_date_supersedes_fallback() {
        // Fallback alone would say due (reviewed 40 days ago at level 5).
        let mut item = item(5);
        item.last_reviewed = Some(now() - Duration::days(40));
        item.next_review_date = Some(now() + Duration::days(1));
        assert!(!is_due(&item, now()));
    }

    #[test]
    fn test_fallback_counts_whole_days() {
        let mut item = item(3);
        item.last_reviewed = Some(now() - Duration::days(7) + Duration::minutes(1));
        assert!(!is_due(&item, now()));

        item.last_reviewed = Some(now() - Duration::days(7));
        assert!(is_due(&item, now()));
    }

    #[test]
    fn test_days_between_floors() {
        assert_eq!(days_between(now(), now() + Duration::hours(47)), 1);
        assert_eq!(days_between(now(), now() - Duration::hours(1)), -1);
    }
}
