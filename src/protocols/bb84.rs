//! BB84 Quantum Key Distribution Protocol.
//!
//! Alice encodes random bits in random bases, Bob measures with bases
//! of his own, and classical sifting keeps the positions where the two
//! basis choices agreed. With no eavesdropper the sifted keys are
//! identical; under intercept-resend roughly a quarter of the sifted
//! bits disagree.

use crate::core::errors::SiftError;
use crate::core::{Basis, decode, encode};
use crate::{eavesdrop, reconcile};
use rand::Rng;

/// BB84 results
#[derive(Debug, Clone, PartialEq)]
pub struct Bb84Result {
    /// Number of photons sent.
    pub raw_length: usize,
    /// Length of each sifted key.
    pub sifted_length: usize,
    /// Positions where the two sifted keys disagree.
    pub errors: usize,
    /// Quantum Bit Error Rate over the sifted key, as a percentage.
    pub qber: f64,
    pub alice_bits: Vec<bool>,
    pub alice_bases: Vec<Basis>,
    pub bob_bases: Vec<Basis>,
    pub bob_results: Vec<bool>,
    /// Indices where the bases agreed, ascending.
    pub matching_indices: Vec<usize>,
    /// Alice's sifted key.
    pub alice_key: Vec<bool>,
    /// Bob's sifted key.
    pub bob_key: Vec<bool>,
}

/// Runs one BB84 trial over an untapped channel.
///
/// # Arguments
///
/// * `photon_count` - Number of photons Alice sends; 0 yields empty keys.
/// * `rng` - Source for every bit and basis draw. Seed it to reproduce
///   a trial exactly.
pub fn run<R: Rng + ?Sized>(photon_count: usize, rng: &mut R) -> Result<Bb84Result, SiftError> {
    run_trial(photon_count, false, rng)
}

/// Runs one BB84 trial with Eve intercepting every photon in transit
/// and forwarding her own re-preparation to Bob.
pub fn run_intercepted<R: Rng + ?Sized>(
    photon_count: usize,
    rng: &mut R,
) -> Result<Bb84Result, SiftError> {
    run_trial(photon_count, true, rng)
}

fn run_trial<R: Rng + ?Sized>(
    photon_count: usize,
    eve: bool,
    rng: &mut R,
) -> Result<Bb84Result, SiftError> {
    // Alice draws her bits and bases
    let mut alice_bits = Vec::with_capacity(photon_count);
    let mut alice_bases = Vec::with_capacity(photon_count);

    for _ in 0..photon_count {
        alice_bits.push(rng.random_bool(0.5));
        alice_bases.push(rng.random::<Basis>());
    }

    // Alice prepares the photon stream
    let mut photons: Vec<_> = alice_bits
        .iter()
        .zip(&alice_bases)
        .map(|(&bit, &basis)| encode(bit, basis))
        .collect();

    // Eve intercepts in transit and resends
    if eve {
        photons = eavesdrop::intercept(&photons, rng).resend();
    }

    // Bob measures
    let mut bob_bases = Vec::with_capacity(photon_count);
    let mut bob_results = Vec::with_capacity(photon_count);

    for &photon in &photons {
        let basis: Basis = rng.random();
        bob_results.push(decode(photon, basis, rng));
        bob_bases.push(basis);
    }

    // Sifting stage
    let matching_indices = reconcile::matching_indices(&alice_bases, &bob_bases)?;
    let (alice_key, bob_key) =
        reconcile::filter_by_indices(&alice_bits, &bob_results, &matching_indices)?;

    let errors = alice_key
        .iter()
        .zip(&bob_key)
        .filter(|(a, b)| a != b)
        .count();

    let sifted_length = alice_key.len();
    let qber = if sifted_length > 0 {
        (errors as f64 / sifted_length as f64) * 100.0
    } else {
        0.0
    };

    Ok(Bb84Result {
        raw_length: photon_count,
        sifted_length,
        errors,
        qber,
        alice_bits,
        alice_bases,
        bob_bases,
        bob_results,
        matching_indices,
        alice_key,
        bob_key,
    })
}
