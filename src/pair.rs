//! Generic offset pair

use std::ops::{Add, Sub};

use num_traits::One;

/// A pair of values bracketing its inputs: the first input shifted down by
/// one unit, the second shifted up by one unit. Both offsets are applied
/// exactly once, at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetPair<T> {
    lower: T,
    /// The second input, incremented by one unit.
    pub upper: T,
}

impl<T> OffsetPair<T>
where
    T: Add<Output = T> + Sub<Output = T> + One,
{
    /// Build the pair from two values of the same type.
    ///
    /// The arithmetic is unchecked: overflow behaves however `T` defines it.
    pub fn new(x: T, y: T) -> Self {
        Self {
            lower: x - T::one(),
            upper: y + T::one(),
        }
    }
}

impl<T> OffsetPair<T> {
    /// The first input, decremented by one unit.
    pub fn lower(&self) -> &T {
        &self.lower
    }
}
