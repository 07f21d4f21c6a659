//! Quantum key distribution protocol runs.
//!
//! Each protocol is a free `run` function that executes one complete
//! trial and returns a result struct exposing the raw sequences next to
//! the sifted keys, so callers can compute their own statistics.

pub mod bb84;
