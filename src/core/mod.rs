pub mod errors;
mod photon;

pub use photon::{Basis, PhotonState, decode, encode};
