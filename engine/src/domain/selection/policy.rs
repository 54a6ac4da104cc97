//! Weighted roulette policy.
//!
//! Weights are `ln(rating + 20)`: the offset and the logarithm compress the
//! range so a two-point rating spread produces only a mild selection bias.
//! This is intentional low-variance weighting.

use crate::domain::Candidate;

const RATING_WEIGHT_OFFSET: f64 = 20.0;

/// Selection weight for a rating.
pub(super) fn selection_weight(rating: f64) -> f64 {
    (rating + RATING_WEIGHT_OFFSET).ln()
}

/// Single-draw weighted roulette over `pool` in its stable order.
///
/// `unit` must be uniform in `[0, 1)`; it is scaled by the total weight and
/// walked down the pool. Floating-point drift cannot leave the draw without
/// an answer: the final candidate absorbs any leftover remainder.
pub(super) fn pick_weighted(pool: &[Candidate], unit: f64) -> Option<&Candidate> {
    let last = pool.last()?;
    let total: f64 = pool
        .iter()
        .map(|candidate| selection_weight(candidate.rating))
        .sum();

    let mut remainder = unit * total;
    for candidate in pool {
        remainder -= selection_weight(candidate.rating);
        if remainder <= 0.0 {
            return Some(candidate);
        }
    }
    Some(last)
}

#[cfg(test)]
mod tests {
    //! Distribution and totality coverage for the weighted draw.
    use super::*;
    use crate::domain::SmallRngRandomSource;
    use crate::domain::ports::RandomSource;
    use rstest::rstest;

    fn rated(id: &str, rating: f64) -> Candidate {
        Candidate {
            id: id.to_owned(),
            name: format!("place {id}"),
            category: "Korean".to_owned(),
            latitude: 37.4841,
            longitude: 127.0162,
            distance_meters: 100.0,
            walk_minutes: 2,
            rating,
        }
    }

    #[rstest]
    fn zero_draw_selects_the_first_candidate() {
        let pool = vec![rated("a", 5.0), rated("b", 3.0)];
        let winner = pick_weighted(&pool, 0.0).expect("non-empty pool");
        assert_eq!(winner.id, "a");
    }

    #[rstest]
    fn draws_near_one_select_the_last_candidate() {
        let pool = vec![rated("a", 4.0), rated("b", 4.0), rated("c", 4.0)];
        let winner = pick_weighted(&pool, 0.999_999).expect("non-empty pool");
        assert_eq!(winner.id, "c");
    }

    #[rstest]
    fn empty_pool_yields_no_winner() {
        assert!(pick_weighted(&[], 0.5).is_none());
    }

    #[rstest]
    fn every_draw_in_range_lands_on_a_candidate() {
        let pool = vec![rated("a", 3.0), rated("b", 4.4), rated("c", 5.0)];
        for step in 0..1000 {
            let unit = f64::from(step) / 1000.0;
            assert!(
                pick_weighted(&pool, unit).is_some(),
                "draw {unit} produced no winner"
            );
        }
    }

    #[rstest]
    fn seeded_draw_frequencies_match_the_log_weights() {
        let pool = vec![rated("a", 3.0), rated("b", 4.0), rated("c", 5.0)];
        let total: f64 = pool.iter().map(|c| selection_weight(c.rating)).sum();
        let random = SmallRngRandomSource::seeded(0x5eed);

        const DRAWS: usize = 100_000;
        let mut counts = [0_usize; 3];
        for _ in 0..DRAWS {
            let winner = pick_weighted(&pool, random.unit()).expect("non-empty pool");
            match winner.id.as_str() {
                "a" => counts[0] += 1,
                "b" => counts[1] += 1,
                _ => counts[2] += 1,
            }
        }

        for (index, candidate) in pool.iter().enumerate() {
            let expected = selection_weight(candidate.rating) / total;
            let observed = counts[index] as f64 / DRAWS as f64;
            assert!(
                (observed - expected).abs() < 0.02,
                "candidate {} observed {observed:.4}, expected {expected:.4}",
                candidate.id
            );
        }

        // The log compression keeps the spread very small: every share sits
        // close to an even third.
        for count in counts {
            let share = count as f64 / DRAWS as f64;
            assert!((share - 1.0 / 3.0).abs() < 0.02, "share {share:.4} too far");
        }
    }
}
