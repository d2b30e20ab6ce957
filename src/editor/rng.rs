// src/editor/rng.rs

use rand::Rng;

/// The random source the placers draw from.
///
/// Every `rand::Rng` is a `RoomRng`, so production code passes a thread or
/// ChaCha generator while tests can substitute a scripted sequence.
pub trait RoomRng {
    /// A uniformly distributed value in `low..=high`.
    fn roll(&mut self, low: usize, high: usize) -> usize;
}

impl<R: Rng> RoomRng for R {
    fn roll(&mut self, low: usize, high: usize) -> usize {
        self.random_range(low..=high)
    }
}

#[cfg(test)]
pub(crate) mod scripted {
    use std::collections::VecDeque;

    use super::RoomRng;

    /// Replays a fixed list of draws. Each value is clamped into the
    /// requested range so scripts stay readable.
    pub struct Scripted {
        draws: VecDeque<usize>,
    }

    impl Scripted {
        pub fn new(draws: &[usize]) -> Self {
            Self {
                draws: draws.iter().copied().collect(),
            }
        }

        pub fn remaining(&self) -> usize {
            self.draws.len()
        }
    }

    impl RoomRng for Scripted {
        fn roll(&mut self, low: usize, high: usize) -> usize {
            let value = self.draws.pop_front().expect("scripted draws exhausted");
            value.clamp(low, high)
        }
    }
}
