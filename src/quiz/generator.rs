use super::rng::SeededRandom;
use super::{Category, DifficultyTier, QuestionRecord};

pub const DEFAULT_SEED: u32 = 12345;
pub const DEFAULT_COUNT: usize = 25;

/// Builds a reproducible quiz out of `pool`.
///
/// The same `(seed, requested, categories)` always yields the same questions in
/// the same order. An empty `categories` slice means no filtering; categories
/// with no questions simply contribute nothing. When fewer questions are
/// requested than are available, roughly a third is drawn from each difficulty
/// tier and any shortfall is filled from whatever is left.
///
/// A request for zero questions gives an empty quiz.
pub fn generate_quiz<'a>(
    pool: &'a [QuestionRecord],
    seed: u32,
    requested: usize,
    categories: &[Category],
) -> Vec<&'a QuestionRecord> {
    if requested == 0 {
        return Vec::new();
    }

    let mut rng = SeededRandom::new(seed);

    let candidates: Vec<&QuestionRecord> = pool
        .iter()
        .filter(|q| categories.is_empty() || categories.contains(&q.category))
        .collect();

    if requested >= candidates.len() {
        return rng.shuffle(&candidates);
    }

    let per_tier = requested.div_ceil(3);
    let mut selected: Vec<&QuestionRecord> = Vec::with_capacity(requested);
    for tier in DifficultyTier::ALL {
        let group: Vec<&QuestionRecord> = candidates
            .iter()
            .copied()
            .filter(|q| q.tier == tier)
            .collect();
        let take = per_tier.min(group.len());
        selected.extend(rng.select_random(&group, take));
    }

    // An under-populated tier leaves a gap; fill it from everything not yet picked.
    if selected.len() < requested {
        let remaining: Vec<&QuestionRecord> = candidates
            .iter()
            .copied()
            .filter(|q| !selected.iter().any(|s| std::ptr::eq(*s, *q)))
            .collect();
        let needed = requested - selected.len();
        selected.extend(rng.select_random(&remaining, needed));
    }

    let mut quiz = rng.shuffle(&selected);
    quiz.truncate(requested.min(candidates.len()));
    quiz
}

/// The quiz handed out when nobody asked for anything in particular.
pub fn default_quiz(pool: &[QuestionRecord]) -> Vec<&QuestionRecord> {
    generate_quiz(pool, DEFAULT_SEED, DEFAULT_COUNT, &[])
}

pub fn questions_by_category(pool: &[QuestionRecord], category: Category) -> Vec<&QuestionRecord> {
    pool.iter().filter(|q| q.category == category).collect()
}

pub fn questions_by_tier(pool: &[QuestionRecord], tier: DifficultyTier) -> Vec<&QuestionRecord> {
    pool.iter().filter(|q| q.tier == tier).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::bank;
    use std::collections::HashSet;

    fn ids(quiz: &[&QuestionRecord]) -> Vec<u32> {
        quiz.iter().map(|q| q.id).collect()
    }

    fn record(id: u32, tier: DifficultyTier, category: Category) -> QuestionRecord {
        QuestionRecord {
            id,
            prompt: "Same prompt?",
            options: ["a", "b", "c", "d"],
            correct_option_index: 0,
            tier,
            category,
        }
    }

    #[test]
    fn full_pool_is_a_reproducible_permutation() {
        let first = generate_quiz(bank::all(), 12345, 50, &[]);
        let second = generate_quiz(bank::all(), 12345, 50, &[]);
        assert_eq!(first.len(), 50);
        assert_eq!(ids(&first), ids(&second));

        let mut sorted = ids(&first);
        sorted.sort();
        assert_eq!(sorted, (1..=50).collect::<Vec<u32>>());
    }

    #[test]
    fn full_pool_order_is_actually_shuffled() {
        let quiz = generate_quiz(bank::all(), 12345, 50, &[]);
        assert_ne!(ids(&quiz), (1..=50).collect::<Vec<u32>>());
    }

    #[test]
    fn exact_count_for_small_requests() {
        assert_eq!(generate_quiz(bank::all(), 12345, 5, &[]).len(), 5);
    }

    #[test]
    fn oversized_request_is_capped_at_pool_size() {
        assert_eq!(generate_quiz(bank::all(), 12345, 100, &[]).len(), 50);
    }

    #[test]
    fn different_seeds_start_differently() {
        let a = generate_quiz(bank::all(), 11111, 50, &[]);
        let b = generate_quiz(bank::all(), 22222, 50, &[]);
        assert_ne!(a[0].id, b[0].id);
    }

    #[test]
    fn two_questions_is_more_than_one() {
        let one = generate_quiz(bank::all(), 12345, 1, &[]);
        let two = generate_quiz(bank::all(), 12345, 2, &[]);
        assert_eq!(one.len(), 1);
        assert!(two.len() > one.len());
    }

    #[test]
    fn shared_seeds_keep_their_questions() {
        assert_eq!(ids(&generate_quiz(bank::all(), 12345, 5, &[])), vec![26, 10, 37, 6, 5]);
        assert_eq!(
            ids(&generate_quiz(bank::all(), 12345, 10, &[])),
            vec![22, 33, 10, 37, 18, 44, 5, 36, 7, 35],
        );
    }

    #[test]
    fn zero_requested_is_empty() {
        assert!(generate_quiz(bank::all(), 12345, 0, &[]).is_empty());
    }

    #[test]
    fn count_bound_and_no_duplicates_across_seeds() {
        for seed in [0, 1, 42, 12345, 999_999, u32::MAX] {
            for requested in 1..=60 {
                let quiz = generate_quiz(bank::all(), seed, requested, &[]);
                assert_eq!(quiz.len(), requested.min(50), "seed {seed}, n {requested}");
                let unique: HashSet<u32> = quiz.iter().map(|q| q.id).collect();
                assert_eq!(unique.len(), quiz.len(), "seed {seed}, n {requested}");
            }
        }
    }

    #[test]
    fn determinism_for_subsets() {
        for requested in [1, 3, 7, 10, 26, 49] {
            assert_eq!(
                ids(&generate_quiz(bank::all(), 4242, requested, &[])),
                ids(&generate_quiz(bank::all(), 4242, requested, &[])),
            );
        }
    }

    #[test]
    fn small_requests_are_stratified() {
        // With every tier holding at least 16 questions, nine questions are three per tier.
        let quiz = generate_quiz(bank::all(), 777, 9, &[]);
        for tier in DifficultyTier::ALL {
            assert_eq!(quiz.iter().filter(|q| q.tier == tier).count(), 3, "{}", tier.label());
        }
    }

    #[test]
    fn category_filter_is_respected() {
        let wanted = [Category::Space, Category::Food];
        let quiz = generate_quiz(bank::all(), 12345, 6, &wanted);
        assert_eq!(quiz.len(), 6);
        assert!(quiz.iter().all(|q| wanted.contains(&q.category)));

        let everything = generate_quiz(bank::all(), 12345, 50, &wanted);
        assert_eq!(everything.len(), 10);
        assert!(everything.iter().all(|q| wanted.contains(&q.category)));
    }

    #[test]
    fn category_with_no_questions_contributes_nothing() {
        let pool = [
            record(1, DifficultyTier::Mild, Category::Science),
            record(2, DifficultyTier::Medium, Category::Science),
        ];
        assert!(generate_quiz(&pool, 1, 5, &[Category::Film]).is_empty());
        assert_eq!(generate_quiz(&pool, 1, 5, &[Category::Film, Category::Science]).len(), 2);
    }

    #[test]
    fn empty_pool_is_empty() {
        assert!(generate_quiz(&[], 12345, 10, &[]).is_empty());
    }

    #[test]
    fn shortfall_is_filled_from_identical_looking_records() {
        // Every record has identical text, and one tier holds nearly all of them,
        // so the fill step must tell records apart by identity.
        let mut pool = vec![
            record(1, DifficultyTier::Mild, Category::Science),
            record(2, DifficultyTier::Medium, Category::Science),
        ];
        for id in 3..=12 {
            pool.push(record(id, DifficultyTier::Extreme, Category::Science));
        }
        for seed in [1, 2, 3, 12345] {
            let quiz = generate_quiz(&pool, seed, 9, &[]);
            assert_eq!(quiz.len(), 9);
            let unique: HashSet<u32> = quiz.iter().map(|q| q.id).collect();
            assert_eq!(unique.len(), 9);
            assert!(quiz.iter().all(|q| pool.iter().any(|p| std::ptr::eq(p, *q))));
        }
    }

    #[test]
    fn default_quiz_matches_explicit_call() {
        assert_eq!(
            ids(&default_quiz(bank::all())),
            ids(&generate_quiz(bank::all(), DEFAULT_SEED, DEFAULT_COUNT, &[])),
        );
        assert_eq!(default_quiz(bank::all()).len(), DEFAULT_COUNT);
    }

    #[test]
    fn lookup_helpers() {
        assert_eq!(questions_by_category(bank::all(), Category::Animals).len(), 5);
        let total: usize = DifficultyTier::ALL
            .iter()
            .map(|t| questions_by_tier(bank::all(), *t).len())
            .sum();
        assert_eq!(total, bank::POOL_SIZE);
    }
}
