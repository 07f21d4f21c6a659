use rand::Rng;
use rand::distr::{Distribution, StandardUniform};
use std::fmt;

/// Encoding/measurement basis for a single photon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Basis {
    /// Basis 0, reference states |0> and |1>.
    Rectilinear,
    /// Basis 1, reference states |+> and |->.
    Diagonal,
}

impl Distribution<Basis> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Basis {
        if rng.random_bool(0.5) {
            Basis::Diagonal
        } else {
            Basis::Rectilinear
        }
    }
}

/// A photon prepared in one of the four BB84 states.
///
/// States are produced only by [`encode`] and consumed by [`decode`],
/// so a `PhotonState` in flight is always well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotonState {
    /// |0>: bit 0 in the rectilinear basis.
    RectZero,
    /// |1>: bit 1 in the rectilinear basis.
    RectOne,
    /// |+>: bit 0 in the diagonal basis.
    DiagPlus,
    /// |->: bit 1 in the diagonal basis.
    DiagMinus,
}

impl PhotonState {
    /// The basis the photon was prepared in.
    pub fn basis(&self) -> Basis {
        match self {
            PhotonState::RectZero | PhotonState::RectOne => Basis::Rectilinear,
            PhotonState::DiagPlus | PhotonState::DiagMinus => Basis::Diagonal,
        }
    }

    /// The bit the photon encodes.
    pub fn bit(&self) -> bool {
        match self {
            PhotonState::RectZero | PhotonState::DiagPlus => false,
            PhotonState::RectOne | PhotonState::DiagMinus => true,
        }
    }
}

impl fmt::Display for PhotonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ket = match self {
            PhotonState::RectZero => "|0>",
            PhotonState::RectOne => "|1>",
            PhotonState::DiagPlus => "|+>",
            PhotonState::DiagMinus => "|->",
        };
        write!(f, "{ket}")
    }
}

/// Prepares a photon carrying `bit` in the given basis.
pub fn encode(bit: bool, basis: Basis) -> PhotonState {
    match (basis, bit) {
        (Basis::Rectilinear, false) => PhotonState::RectZero,
        (Basis::Rectilinear, true) => PhotonState::RectOne,
        (Basis::Diagonal, false) => PhotonState::DiagPlus,
        (Basis::Diagonal, true) => PhotonState::DiagMinus,
    }
}

/// Measures a photon in `basis`.
///
/// A matching basis recovers the encoded bit exactly; a mismatched one
/// collapses the state to a uniformly random outcome.
pub fn decode<R: Rng + ?Sized>(state: PhotonState, basis: Basis, rng: &mut R) -> bool {
    if basis == state.basis() {
        state.bit()
    } else {
        rng.random_bool(0.5)
    }
}
