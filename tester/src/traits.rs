use rand::{Rng, SeedableRng};

/// deterministically applies an operation to a target returning the result
pub trait Operation<Target> {
    type Result: Sized;
    fn apply(&self, target: &mut Target) -> Self::Result;
}

// deterministically generates a sequence of valid operations, tracking what a
// reference implementation answered for each one
pub trait OperationGenerator<R>: Sized
where
    R: Rng + SeedableRng,
{
    type Operation;
    type ReferenceImpl;
    fn from_seed(seed: u64) -> Self;
    fn reference(&self) -> &Self::ReferenceImpl;
    fn data(self) -> Self::ReferenceImpl;
}
