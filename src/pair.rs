use crate::traits::Take;

/// Two named slots with independent lifetimes.
///
/// Copying and ownership transfer are member-wise: cloning clones both
/// members, [`Take::take`] transfers both and leaves the source members
/// vacant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pair<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> Pair<A, B> {
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Splits into the two members.
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }

    /// Borrows both members.
    pub const fn as_refs(&self) -> (&A, &B) {
        (&self.first, &self.second)
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Self { first, second }
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    fn from(pair: Pair<A, B>) -> Self {
        (pair.first, pair.second)
    }
}

impl<A: Take, B: Take> Take for Pair<A, B> {
    fn take(&mut self) -> Self {
        Self {
            first: self.first.take(),
            second: self.second.take(),
        }
    }
}
