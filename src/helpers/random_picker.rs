use rand::seq::SliceRandom;
use rand::Rng;
use crate::errors::{PromptError, PromptResult};

/// Picks `count` distinct items from `pool` in random order.
pub fn pick_many<'a, R>(pool: &[&'a str], count: usize, rng: &mut R) -> PromptResult<Vec<&'a str>>
where
    R: Rng + ?Sized,
{
    if pool.len() < count {
        return Err(PromptError::composition(
            "selecting",
            &format!("candidate pool has {} entries, {} requested", pool.len(), count),
        ));
    }

    Ok(pool.choose_multiple(rng, count).copied().collect())
}

pub fn pick_one<'a, R>(pool: &[&'a str], rng: &mut R) -> PromptResult<&'a str>
where
    R: Rng + ?Sized,
{
    pool.choose(rng)
        .copied()
        .ok_or_else(|| PromptError::composition("selecting", "candidate pool is empty"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const POOL: &[&str] = &["a", "b", "c", "d"];

    #[test]
    fn same_seed_same_picks() {
        let first = pick_many(POOL, 2, &mut StdRng::seed_from_u64(7)).unwrap();
        let second = pick_many(POOL, 2, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn picks_are_distinct_members_of_the_pool() {
        let picks = pick_many(POOL, 3, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(picks.len(), 3);
        assert!(picks.iter().all(|p| POOL.contains(p)));
        assert!(picks[0] != picks[1] && picks[1] != picks[2] && picks[0] != picks[2]);
    }

    #[test]
    fn empty_pool_is_a_composition_error() {
        let error = pick_one(&[], &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert!(matches!(error, PromptError::Composition { .. }));
        assert!(pick_many(POOL, 5, &mut StdRng::seed_from_u64(1)).is_err());
    }
}
