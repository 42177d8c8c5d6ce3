// File: crates/tics-core/src/grid.rs
// Summary: Evenly spaced tic runs and iteration over their values.

/// `count` values starting at `first`, `delta` apart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TicSequence {
    pub count: usize,
    pub delta: f64,
    pub first: f64,
}

impl TicSequence {
    pub const fn new(count: usize, delta: f64, first: f64) -> Self {
        Self { count, delta, first }
    }

    /// Value of the last tic, if there is one.
    pub fn last(&self) -> Option<f64> {
        if self.count == 0 { return None; }
        Some(self.value(self.count - 1))
    }

    #[inline]
    pub fn value(&self, index: usize) -> f64 {
        self.first + index as f64 * self.delta
    }

    pub fn values(&self) -> TicValues {
        tic_values(self.first, self.delta, self.count)
    }
}

/// Iterator over `first + i * delta` for `i in 0..count`.
///
/// Each value is computed from its index, so rounding error does not
/// build up along long runs.
#[derive(Clone, Debug)]
pub struct TicValues {
    first: f64,
    delta: f64,
    front: usize,
    back: usize,
}

pub fn tic_values(first: f64, delta: f64, count: usize) -> TicValues {
    TicValues { first, delta, front: 0, back: count }
}

impl Iterator for TicValues {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.front >= self.back { return None; }
        let v = self.first + self.front as f64 * self.delta;
        self.front += 1;
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for TicValues {
    fn next_back(&mut self) -> Option<f64> {
        if self.front >= self.back { return None; }
        self.back -= 1;
        Some(self.first + self.back as f64 * self.delta)
    }
}

impl ExactSizeIterator for TicValues {}
