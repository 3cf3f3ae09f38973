use super::{coefficients::CoefficientTriple, error::BatchError, solver::Solution};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// solve on the calling thread
    Sequential,
    /// # Description
    /// solve on a dedicated pool of `jobs` threads
    /// ## Comments
    /// - without the `rayon` feature this falls back to `Sequential`
    Parallel { jobs: usize },
}

impl Default for Strategy {
    #[cfg(feature = "rayon")]
    fn default() -> Self {
        Strategy::Parallel {
            jobs: crate::config::default_jobs(),
        }
    }

    #[cfg(not(feature = "rayon"))]
    fn default() -> Self {
        Strategy::Sequential
    }
}

/// # Description
/// Solves every triple independently
/// ## Returns
/// One `Solution` per triple, in the same order as `triples` regardless of `strategy`
pub fn solve_all(
    triples: &[CoefficientTriple],
    strategy: Strategy,
) -> Result<Vec<Solution>, BatchError> {
    match strategy {
        Strategy::Sequential => Ok(solve_sequential(triples)),
        Strategy::Parallel { jobs } => solve_parallel(triples, jobs),
    }
}

fn solve_sequential(triples: &[CoefficientTriple]) -> Vec<Solution> {
    triples.iter().map(CoefficientTriple::solve).collect()
}

#[cfg(feature = "rayon")]
fn solve_parallel(
    triples: &[CoefficientTriple],
    jobs: usize,
) -> Result<Vec<Solution>, BatchError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map_err(|err| BatchError::WorkerPool {
            jobs,
            reason: err.to_string(),
        })?;

    //indexed collect keeps input order no matter which worker finishes first
    Ok(pool.install(|| triples.par_iter().map(CoefficientTriple::solve).collect()))
}

#[cfg(not(feature = "rayon"))]
fn solve_parallel(
    triples: &[CoefficientTriple],
    _jobs: usize,
) -> Result<Vec<Solution>, BatchError> {
    Ok(solve_sequential(triples))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coefficients::group;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn random_batch(len: usize) -> Vec<CoefficientTriple> {
        let mut rng = StdRng::seed_from_u64(7);
        (0..len)
            .map(|index| {
                //mix in degenerate triples so every branch shows up
                let a = if index % 7 == 0 { 0.0 } else { rng.gen_range(-10.0..10.0) };
                let b = if index % 11 == 0 { 0.0 } else { rng.gen_range(-10.0..10.0) };
                CoefficientTriple::new(a, b, rng.gen_range(-10.0..10.0))
            })
            .collect()
    }

    #[test]
    fn sequential_keeps_order() {
        let grouping = group(&["1", "-5", "6", "0", "-1", "6", "0", "0", "0"]);
        let lines = solve_all(&grouping.triples, Strategy::Sequential)
            .unwrap()
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>();
        assert_eq!(vec!["(2, 3) Xmin 2.5", "(6)", "(inf)"], lines);
    }

    #[test]
    fn parallel_matches_sequential() {
        let triples = random_batch(5_000);
        let expected = solve_all(&triples, Strategy::Sequential).unwrap();
        for &jobs in &[1, 2, 4, 8] {
            let solutions = solve_all(&triples, Strategy::Parallel { jobs }).unwrap();
            assert_eq!(expected, solutions, "jobs = {}", jobs);
        }
    }

    #[test]
    fn empty_batch() {
        assert!(solve_all(&[], Strategy::default()).unwrap().is_empty());
        assert!(solve_all(&[], Strategy::Sequential).unwrap().is_empty());
    }
}
