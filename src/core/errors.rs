use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiftError {
    #[error("Sequence lengths do not match ({alice} vs {bob})")]
    LengthMismatch { alice: usize, bob: usize },

    #[error("Matching index {index} out of range for key of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
