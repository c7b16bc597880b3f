use std::collections::BTreeSet;

/// Ordered set of pending stops. The scheduler is written purely against
/// this capability set.
pub trait OrderedStops {
    /// Inserting a floor that is already pending is a no-op.
    fn insert(&mut self, floor: u8);
    fn remove(&mut self, floor: u8) -> bool;
    fn min(&self) -> Option<u8>;
    fn max(&self) -> Option<u8>;
    /// Smallest pending floor `>= floor`.
    fn ceiling(&self, floor: u8) -> Option<u8>;
    /// Largest pending floor `<= floor`.
    fn floor(&self, floor: u8) -> Option<u8>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StopSet {
    floors: BTreeSet<u8>,
}

impl StopSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.floors.iter().copied()
    }

    pub fn merge(&mut self, other: &StopSet) {
        self.floors.extend(other.iter());
    }
}

impl FromIterator<u8> for StopSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        StopSet {
            floors: iter.into_iter().collect(),
        }
    }
}

impl OrderedStops for StopSet {
    fn insert(&mut self, floor: u8) {
        self.floors.insert(floor);
    }

    fn remove(&mut self, floor: u8) -> bool {
        self.floors.remove(&floor)
    }

    fn min(&self) -> Option<u8> {
        self.floors.first().copied()
    }

    fn max(&self) -> Option<u8> {
        self.floors.last().copied()
    }

    fn ceiling(&self, floor: u8) -> Option<u8> {
        self.floors.range(floor..).next().copied()
    }

    fn floor(&self, floor: u8) -> Option<u8> {
        self.floors.range(..=floor).next_back().copied()
    }

    fn len(&self) -> usize {
        self.floors.len()
    }
}
