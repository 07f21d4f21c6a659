//! Eavesdropper simulation.
//!
//! Eve taps the photon stream between Alice and Bob and measures each
//! photon in a basis of her own, chosen uniformly at random. In the
//! minimal model she only observes; [`Interception::resend`] builds the
//! freshly prepared replacement stream of the intercept-resend attack.

use crate::core::{Basis, PhotonState, decode, encode};
use rand::Rng;

/// What Eve learned from one pass over the photon stream.
#[derive(Debug, Clone)]
pub struct Interception {
    /// Eve's measurement outcomes, one per photon.
    pub bits: Vec<bool>,
    /// The bases Eve measured in, one per photon.
    pub bases: Vec<Basis>,
}

impl Interception {
    /// Re-encodes each measured bit in the basis Eve used, producing the
    /// disturbed stream a receiver sees under intercept-resend.
    pub fn resend(&self) -> Vec<PhotonState> {
        self.bits
            .iter()
            .zip(&self.bases)
            .map(|(&bit, &basis)| encode(bit, basis))
            .collect()
    }
}

/// Measures every photon in transit with an independently random basis.
///
/// Where Eve's basis happens to match the sender's, the outcome is the
/// true bit; elsewhere it is a coin flip. Output lengths equal the
/// input length.
pub fn intercept<R: Rng + ?Sized>(photons: &[PhotonState], rng: &mut R) -> Interception {
    let mut bits = Vec::with_capacity(photons.len());
    let mut bases = Vec::with_capacity(photons.len());

    for &photon in photons {
        let basis: Basis = rng.random();
        bits.push(decode(photon, basis, rng));
        bases.push(basis);
    }

    Interception { bits, bases }
}
