//! Nonce generation.
//!
//! Nodes reject a transaction whose `(sender, nonce)` pair they have already
//! seen. The SDK does not track which nonces were used; a [`NonceSource`]
//! only has to make collisions unlikely (random) or impossible within one
//! process (sequential).

use std::sync::atomic::{AtomicU64, Ordering};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Produces nonces for outgoing transactions.
pub trait NonceSource: Send {
    fn next_nonce(&mut self) -> u64;
}

/// Uniformly random 64-bit nonces.
#[derive(Debug)]
pub struct RandomNonce<R: RngCore = StdRng> {
    rng: R,
}

impl RandomNonce<StdRng> {
    /// Seeds a `StdRng` from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl<R: RngCore> RandomNonce<R> {
    /// Draws nonces from the given generator. A seeded generator gives a
    /// reproducible sequence, which is useful in tests.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for RandomNonce<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: RngCore + Send> NonceSource for RandomNonce<R> {
    fn next_nonce(&mut self) -> u64 {
        self.rng.next_u64()
    }
}

/// Strictly increasing nonces starting from a chosen value.
#[derive(Debug, Default)]
pub struct SequentialNonce {
    next: AtomicU64,
}

impl SequentialNonce {
    pub fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }

    /// Returns the next nonce. Safe to share across threads; wraps at
    /// `u64::MAX`.
    pub fn advance(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl NonceSource for SequentialNonce {
    fn next_nonce(&mut self) -> u64 {
        self.advance()
    }
}

/// A one-off random nonce from a thread-local generator.
pub fn generate_nonce() -> u64 {
    rand::random()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seeded_random_nonce_is_reproducible() {
        let mut a = RandomNonce::with_rng(StdRng::seed_from_u64(42));
        let mut b = RandomNonce::with_rng(StdRng::seed_from_u64(42));
        for _ in 0..10 {
            assert_eq!(a.next_nonce(), b.next_nonce());
        }
    }

    #[test]
    fn random_nonces_do_not_repeat_in_practice() {
        let mut source = RandomNonce::from_entropy();
        let seen: HashSet<u64> = (0..1000).map(|_| source.next_nonce()).collect();
        assert_eq!(seen.len(), 1000);
    }

    #[test]
    fn sequential_counts_up() {
        let mut source = SequentialNonce::starting_at(10);
        assert_eq!(source.next_nonce(), 10);
        assert_eq!(source.next_nonce(), 11);
        assert_eq!(source.advance(), 12);
    }

    #[test]
    fn sequential_wraps() {
        let source = SequentialNonce::starting_at(u64::MAX);
        assert_eq!(source.advance(), u64::MAX);
        assert_eq!(source.advance(), 0);
    }

    #[test]
    fn generate_nonce_varies() {
        let a: HashSet<u64> = (0..100).map(|_| generate_nonce()).collect();
        assert!(a.len() > 90);
    }
}
