//! Differential tester for list implementations.
//!
//! A seeded generator produces a stream of list operations together with the
//! answers a `Vec` gave for them. The stream is replayed against the target
//! and the first divergence, in either an answer or the visible contents, is
//! reported with enough context to play it back.

use core::fmt::{self, Debug, Display, Formatter};

use linked_list_adt::prelude::*;
use log::{error, info};
use rand::{rngs::StdRng, Rng, SeedableRng};

pub mod config;
pub mod ops;
pub mod traits;

pub use config::TesterConfig;
use ops::{snapshot, ListOperation, ListOperationGenerator, ListOutcome};
use traits::*;

/// Number of operations shown before the failing one during playback.
const PLAYBACK_WINDOW: usize = 5;

#[derive(Debug)]
pub struct OperationFailure {
    pub seed: u64,
    pub op_num: usize,
    /// Every generated operation up to and including the failing one.
    pub operations: Vec<(ListOperation<u8>, ListOutcome<u8>)>,
    pub actual: ListOutcome<u8>,
    /// Reference contents after the failing operation.
    pub data: Vec<u8>,
    /// Target contents after the failing operation.
    pub target: Vec<u8>,
}

impl OperationFailure {
    /// Replays the recorded operations on a fresh `L`, logging the last few.
    pub fn playback<L>(&self)
    where
        L: ListAdt<u8> + Default + Debug,
    {
        info!("running playback of seed {}", self.seed);
        let mut lst = L::default();
        let lower = self.op_num.saturating_sub(PLAYBACK_WINDOW);
        for (ind, (op, expected)) in self.operations.iter().enumerate() {
            let actual = op.apply(&mut lst);
            if ind < lower {
                continue;
            }
            info!("--------- operation {ind} ----------");
            info!("operation: {op:?}");
            info!("list state: {lst:?}");
            if ind == self.op_num {
                error!("expected / actual : {expected:?}, {actual:?}");
            } else {
                info!("expected / actual : {expected:?}, {actual:?}");
            }
        }
        error!("reference state: {:?}", self.data);
    }
}

impl Display for OperationFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "list diverged from the reference at operation {} (seed {})",
            self.op_num, self.seed
        )
    }
}

impl std::error::Error for OperationFailure {}

/// Runs `ops` generated operations against a fresh `L`.
pub fn test_target<L, R>(seed: u64, ops: usize) -> Result<(), OperationFailure>
where
    L: ListAdt<u8> + Default,
    R: Rng + SeedableRng,
{
    let mut target = L::default();
    let mut gen = ListOperationGenerator::<R>::from_seed(seed);
    for op_num in 0..ops {
        let Some((op, expected)) = gen.next() else {
            break;
        };
        let actual = op.apply(&mut target);
        let contents = snapshot(&target);
        if actual != expected || contents != *gen.reference() {
            let mut replay = ListOperationGenerator::<R>::from_seed(seed);
            let operations = (&mut replay).take(op_num + 1).collect();
            return Err(OperationFailure {
                seed,
                op_num,
                operations,
                actual,
                data: replay.data(),
                target: contents,
            });
        }
    }
    Ok(())
}

pub fn test_list<R: Rng + SeedableRng>(seed: u64, ops: usize) -> Result<(), OperationFailure> {
    test_target::<SinglyLinkedList<u8>, R>(seed, ops)
}

/// Runs the linked list under `config`, logging the seed so a failure can be
/// reproduced through [`config::SEED_VAR`].
pub fn run(config: &TesterConfig) -> Result<(), OperationFailure> {
    let seed = config.seed_or_random();
    info!("testing {} operations with seed {seed}", config.ops);
    test_list::<StdRng>(seed, config.ops)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_logger() {
        let mut builder = pretty_env_logger::formatted_builder();
        if let Ok(filters) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filters);
        }
        let _ = builder.is_test(true).try_init();
    }

    fn check(result: Result<(), OperationFailure>) {
        if let Err(failure) = result {
            failure.playback::<SinglyLinkedList<u8>>();
            panic!("{failure}");
        }
    }

    #[test]
    fn fixed_seeds() {
        init_logger();
        for seed in 0..32 {
            check(test_list::<StdRng>(seed, 500));
        }
    }

    #[test]
    fn configured_run() {
        init_logger();
        check(run(&TesterConfig::from_env()));
    }

    // puts new heads at the back, so order diverges once the contents differ
    #[derive(Debug, Default)]
    struct BackwardsList(Vec<u8>);

    impl ListAdt<u8> for BackwardsList {
        fn add(&mut self, item: u8) {
            self.0.push(item)
        }
        fn add_first(&mut self, item: u8) {
            self.0.push(item)
        }
        fn replace(&mut self, old_item: &u8, new_item: u8) -> Result<u8, ListError> {
            self.0.replace(old_item, new_item)
        }
        fn count(&self) -> usize {
            self.0.len()
        }
        fn get_value(&self, index: isize) -> Result<&u8, ListError> {
            self.0.get_value(index)
        }
        fn index_of(&self, item: &u8) -> isize {
            self.0.index_of(item)
        }
        fn clear(&mut self) {
            self.0.clear()
        }
        fn remove(&mut self, item: &u8) -> Result<u8, ListError> {
            ListAdt::remove(&mut self.0, item)
        }
        fn remove_first(&mut self) -> Result<u8, ListError> {
            self.0.remove_first()
        }
        fn remove_last(&mut self) -> Result<u8, ListError> {
            self.0.remove_last()
        }
    }

    #[test]
    fn divergence_is_reported() {
        init_logger();
        let failure = test_target::<BackwardsList, StdRng>(3, 2000)
            .expect_err("a list that appends on add_first should diverge");
        assert_eq!(failure.seed, 3);
        assert_eq!(failure.operations.len(), failure.op_num + 1);
        assert_ne!(failure.data, failure.target);
        failure.playback::<BackwardsList>();
        assert!(failure.to_string().contains("seed 3"));
    }
}
