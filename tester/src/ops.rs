use linked_list_adt::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::traits::{Operation, OperationGenerator};

/// Values are drawn from `0..VALUE_SPACE` so duplicates and hits are common.
pub const VALUE_SPACE: u8 = 16;

/// One call against the list ADT.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListOperation<T> {
    Add(T),
    AddLast(T),
    AddFirst(T),
    Replace(T, T),
    Count,
    GetValue(isize),
    IndexOf(T),
    Contains(T),
    IsEmpty,
    Clear,
    Remove(T),
    RemoveFirst,
    RemoveLast,
}

/// What a call answered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListOutcome<T> {
    Done,
    Value(T),
    Count(usize),
    Index(isize),
    Flag(bool),
    Failed(ListError),
}

impl<T, L> Operation<L> for ListOperation<T>
where
    T: Clone + PartialEq,
    L: ListAdt<T>,
{
    type Result = ListOutcome<T>;

    fn apply(&self, target: &mut L) -> Self::Result {
        match self {
            Self::Add(v) => {
                target.add(v.clone());
                ListOutcome::Done
            }
            Self::AddLast(v) => {
                target.add_last(v.clone());
                ListOutcome::Done
            }
            Self::AddFirst(v) => {
                target.add_first(v.clone());
                ListOutcome::Done
            }
            Self::Replace(old, new) => target
                .replace(old, new.clone())
                .map_or_else(ListOutcome::Failed, ListOutcome::Value),
            Self::Count => ListOutcome::Count(target.count()),
            Self::GetValue(index) => target
                .get_value(*index)
                .map_or_else(ListOutcome::Failed, |v| ListOutcome::Value(v.clone())),
            Self::IndexOf(v) => ListOutcome::Index(target.index_of(v)),
            Self::Contains(v) => ListOutcome::Flag(target.contains(v)),
            Self::IsEmpty => ListOutcome::Flag(target.is_empty()),
            Self::Clear => {
                target.clear();
                ListOutcome::Done
            }
            Self::Remove(v) => target
                .remove(v)
                .map_or_else(ListOutcome::Failed, ListOutcome::Value),
            Self::RemoveFirst => target
                .remove_first()
                .map_or_else(ListOutcome::Failed, ListOutcome::Value),
            Self::RemoveLast => target
                .remove_last()
                .map_or_else(ListOutcome::Failed, ListOutcome::Value),
        }
    }
}

/// Seeded stream of list operations, each paired with the outcome a `Vec`
/// reference produced for it.
pub struct ListOperationGenerator<R = StdRng> {
    rng: R,
    data: Vec<u8>,
}

impl<R: Rng + SeedableRng> ListOperationGenerator<R> {
    fn fresh_value(&mut self) -> u8 {
        self.rng.gen_range(0..VALUE_SPACE)
    }

    // mostly picks a value that is already stored so lookups and removals hit
    fn pick_value(&mut self) -> u8 {
        if !self.data.is_empty() && self.rng.gen_bool(0.75) {
            let ind = self.rng.gen_range(0..self.data.len());
            self.data[ind]
        } else {
            self.fresh_value()
        }
    }

    fn pick_operation(&mut self) -> ListOperation<u8> {
        // adds and removals are weighted about evenly so the list stays short
        match self.rng.gen_range(0..100u32) {
            0..=9 => ListOperation::Add(self.fresh_value()),
            10..=16 => ListOperation::AddLast(self.fresh_value()),
            17..=26 => ListOperation::AddFirst(self.fresh_value()),
            27..=36 => {
                let old = self.pick_value();
                ListOperation::Replace(old, self.fresh_value())
            }
            37..=41 => ListOperation::Count,
            42..=55 => {
                // one past each end is included on purpose
                let len = self.data.len() as isize;
                ListOperation::GetValue(self.rng.gen_range(-1..=len))
            }
            56..=63 => ListOperation::IndexOf(self.pick_value()),
            64..=69 => ListOperation::Contains(self.pick_value()),
            70..=72 => ListOperation::IsEmpty,
            73..=74 => ListOperation::Clear,
            75..=86 => ListOperation::Remove(self.pick_value()),
            87..=93 => ListOperation::RemoveFirst,
            _ => ListOperation::RemoveLast,
        }
    }
}

impl<R: Rng + SeedableRng> OperationGenerator<R> for ListOperationGenerator<R> {
    type Operation = ListOperation<u8>;
    type ReferenceImpl = Vec<u8>;

    fn from_seed(seed: u64) -> Self {
        Self {
            rng: R::seed_from_u64(seed),
            data: Vec::new(),
        }
    }

    fn reference(&self) -> &Self::ReferenceImpl {
        &self.data
    }

    fn data(self) -> Self::ReferenceImpl {
        self.data
    }
}

impl<R: Rng + SeedableRng> Iterator for ListOperationGenerator<R> {
    type Item = (ListOperation<u8>, ListOutcome<u8>);

    fn next(&mut self) -> Option<Self::Item> {
        let op = self.pick_operation();
        let res = op.apply(&mut self.data);
        Some((op, res))
    }
}

/// Reads the visible contents of any list through the ADT surface.
pub fn snapshot<T, L>(lst: &L) -> Vec<T>
where
    T: Clone + PartialEq,
    L: ListAdt<T>,
{
    (0..lst.count() as isize)
        .filter_map(|i| lst.get_value(i).ok().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let a: Vec<_> = ListOperationGenerator::<StdRng>::from_seed(7)
            .take(200)
            .collect();
        let b: Vec<_> = ListOperationGenerator::<StdRng>::from_seed(7)
            .take(200)
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn stream_covers_failures_and_hits() {
        let outcomes: Vec<_> = ListOperationGenerator::<StdRng>::from_seed(11)
            .take(2000)
            .map(|(_, res)| res)
            .collect();
        assert!(outcomes
            .iter()
            .any(|r| matches!(r, ListOutcome::Failed(ListError::EmptyCollection))));
        assert!(outcomes
            .iter()
            .any(|r| matches!(r, ListOutcome::Failed(ListError::IndexOutOfRange { .. }))));
        assert!(outcomes.iter().any(|r| matches!(r, ListOutcome::Index(-1))));
        assert!(outcomes.iter().any(|r| matches!(r, ListOutcome::Value(_))));
    }

    #[test]
    fn apply_matches_between_list_and_vec() {
        let script = [
            ListOperation::AddLast(1u8),
            ListOperation::AddLast(2),
            ListOperation::AddFirst(0),
            ListOperation::IndexOf(2),
            ListOperation::Remove(1),
            ListOperation::RemoveLast,
            ListOperation::Replace(5, 9),
            ListOperation::GetValue(1),
            ListOperation::Clear,
            ListOperation::IsEmpty,
            ListOperation::RemoveFirst,
        ];
        let mut lst = SinglyLinkedList::<u8>::new();
        let mut v = Vec::<u8>::new();
        for op in script.iter() {
            assert_eq!(op.apply(&mut lst), op.apply(&mut v), "diverged on {op:?}");
            assert_eq!(snapshot(&lst), snapshot(&v));
        }
        assert_eq!(
            ListOperation::<u8>::RemoveFirst.apply(&mut lst),
            ListOutcome::Failed(ListError::EmptyCollection)
        );
    }

    #[test]
    fn snapshot_reads_in_order() {
        let lst: SinglyLinkedList<u8> = [4, 2, 9].into_iter().collect();
        assert_eq!(snapshot(&lst), vec![4, 2, 9]);
    }
}
