mod core;
pub mod eavesdrop;
pub mod protocols;
pub mod reconcile;

pub use crate::core::{Basis, PhotonState, decode, encode, errors};
