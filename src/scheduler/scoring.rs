//! Allocation scoring for the daily planner.
//!
//! Blends deadline pressure, topic priority, and subject difficulty into
//! one comparable scalar, in the spirit of critical-ratio dispatching:
//! urgency grows with the inverse of the days left before the exam.
//!
//! # Score Convention
//! Higher score = scheduled earlier in a day's allocation order. (The
//! opposite of machine-shop rule tables, where lower wins; here the
//! consumer sorts descending.)

/// Deadline urgency for a topic: inverse days-to-exam, boosted by
/// priority. `days_until_exam` below 1 is clamped to 1.
pub fn urgency(days_until_exam: i64, priority: u8) -> f64 {
    let days = days_until_exam.max(1) as f64;
    (1.0 / days) * (1.0 + priority as f64 / 5.0)
}

/// Full allocation score: urgency weighted by topic priority and subject
/// difficulty. Ranks the day's candidate topics.
pub fn allocation_score(days_until_exam: i64, priority: u8, difficulty: u8) -> f64 {
    urgency(days_until_exam, priority) * (priority as f64 / 3.0) * (difficulty as f64 / 3.0)
}

/// Hours to hand a topic out of today's remaining capacity.
///
/// Never below the pace needed to finish by the exam
/// (`remaining / days_until_exam`), biased toward contiguous blocks of at
/// least two hours rather than thin slices across many topics, and never
/// above the remaining capacity or the topic's remaining need.
pub fn suggested_hours(
    remaining: f64,
    days_until_exam: i64,
    capacity_left: f64,
    candidates: usize,
) -> f64 {
    let min_daily = remaining / days_until_exam.max(1) as f64;
    let block = remaining.min(f64::max(2.0, capacity_left / candidates.max(1) as f64));
    capacity_left.min(min_daily.max(block))
}

/// Rounds an allocation to one decimal place for recording.
pub fn round_hours(hours: f64) -> f64 {
    (hours * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgency_rises_as_exam_nears() {
        assert!(urgency(2, 3) > urgency(10, 3));
        assert!(urgency(1, 3) > urgency(2, 3));
    }

    #[test]
    fn test_urgency_clamps_days_below_one() {
        assert_eq!(urgency(0, 3), urgency(1, 3));
        assert_eq!(urgency(-5, 3), urgency(1, 3));
    }

    #[test]
    fn test_urgency_priority_boost() {
        assert!(urgency(5, 5) > urgency(5, 1));
        // priority 5 → (1/5) * 2.0
        assert!((urgency(5, 5) - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_score_orders_nearer_deadline_first() {
        // Physics: exam in 5 days, priority 4, difficulty 3.
        // Math: exam in 10 days, priority 5, difficulty 4.
        let physics = allocation_score(5, 4, 3);
        let math = allocation_score(10, 5, 4);
        assert!(physics > math);
    }

    #[test]
    fn test_score_weights_priority_and_difficulty() {
        assert!(allocation_score(10, 5, 4) > allocation_score(10, 3, 4));
        assert!(allocation_score(10, 5, 4) > allocation_score(10, 5, 2));
    }

    #[test]
    fn test_suggested_hours_prefers_two_hour_blocks() {
        // Plenty of need and time: the 2-hour block floor wins over the
        // thin per-candidate slice (4.0 / 4 = 1.0).
        let h = suggested_hours(10.0, 20, 4.0, 4);
        assert!((h - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_suggested_hours_capped_by_capacity() {
        assert!((suggested_hours(10.0, 1, 3.0, 1) - 3.0).abs() < 1e-9);
        assert_eq!(suggested_hours(10.0, 20, 0.0, 2), 0.0);
    }

    #[test]
    fn test_suggested_hours_capped_by_remaining_need() {
        // 0.5h left on the topic, loose deadline: hand out just the 0.5.
        let h = suggested_hours(0.5, 20, 4.0, 1);
        assert!((h - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_suggested_hours_respects_deadline_pace() {
        // 9h remaining, 3 days left: must study at least 3h/day even
        // though the block heuristic alone would give 2h.
        let h = suggested_hours(9.0, 3, 4.0, 2);
        assert!((h - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_round_hours() {
        assert_eq!(round_hours(1.333), 1.3);
        assert_eq!(round_hours(1.35), 1.4);
        assert_eq!(round_hours(0.04), 0.0);
        assert_eq!(round_hours(2.0), 2.0);
    }
}
