//! Classical reconciliation (sifting).
//!
//! After transmission Alice and Bob publicly compare their basis choices
//! and keep only the positions where they agree. Both steps are pure
//! functions over borrowed slices, usable standalone to re-sift after an
//! eavesdropper has disturbed one party's bases or keys.

use crate::core::Basis;
use crate::core::errors::SiftError;

/// Returns, in ascending order, every index where the two basis
/// sequences agree.
///
/// # Errors
///
/// [`SiftError::LengthMismatch`] if the sequences differ in length.
pub fn matching_indices(
    alice_bases: &[Basis],
    bob_bases: &[Basis],
) -> Result<Vec<usize>, SiftError> {
    if alice_bases.len() != bob_bases.len() {
        return Err(SiftError::LengthMismatch {
            alice: alice_bases.len(),
            bob: bob_bases.len(),
        });
    }

    Ok(alice_bases
        .iter()
        .zip(bob_bases)
        .enumerate()
        .filter_map(|(i, (a, b))| (a == b).then_some(i))
        .collect())
}

/// Filters both raw keys down to the given positions, preserving the
/// order of `indices`.
///
/// # Errors
///
/// [`SiftError::LengthMismatch`] if the keys differ in length, or
/// [`SiftError::IndexOutOfRange`] if an index exceeds them.
pub fn filter_by_indices(
    alice_key: &[bool],
    bob_key: &[bool],
    indices: &[usize],
) -> Result<(Vec<bool>, Vec<bool>), SiftError> {
    if alice_key.len() != bob_key.len() {
        return Err(SiftError::LengthMismatch {
            alice: alice_key.len(),
            bob: bob_key.len(),
        });
    }

    let mut alice_final = Vec::with_capacity(indices.len());
    let mut bob_final = Vec::with_capacity(indices.len());

    for &i in indices {
        if i >= alice_key.len() {
            return Err(SiftError::IndexOutOfRange {
                index: i,
                len: alice_key.len(),
            });
        }
        alice_final.push(alice_key[i]);
        bob_final.push(bob_key[i]);
    }

    Ok((alice_final, bob_final))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bases(bits: &[u8]) -> Vec<Basis> {
        bits.iter()
            .map(|&b| {
                if b == 0 {
                    Basis::Rectilinear
                } else {
                    Basis::Diagonal
                }
            })
            .collect()
    }

    #[test]
    fn matching_indices_finds_every_agreement() {
        let alice = bases(&[0, 1, 0, 1, 0]);
        let bob = bases(&[0, 1, 1, 0, 0]);

        assert_eq!(matching_indices(&alice, &bob).unwrap(), vec![0, 1, 4]);
    }

    #[test]
    fn matching_indices_length_is_bounded_by_input() {
        let alice = bases(&[0, 0, 1, 1]);
        let bob = bases(&[1, 0, 1, 0]);

        let indices = matching_indices(&alice, &bob).unwrap();
        assert!(indices.len() <= alice.len());
    }

    #[test]
    fn matching_indices_rejects_length_mismatch() {
        let alice = bases(&[0, 1]);
        let bob = bases(&[0]);

        assert_eq!(
            matching_indices(&alice, &bob),
            Err(SiftError::LengthMismatch { alice: 2, bob: 1 })
        );
    }

    #[test]
    fn filter_keeps_only_the_matching_positions() {
        let alice_key = [false, true, false, true, false];
        let bob_key = [false, true, true, true, false];

        let (alice_final, bob_final) =
            filter_by_indices(&alice_key, &bob_key, &[0, 1, 4]).unwrap();

        assert_eq!(alice_final, vec![false, true, false]);
        assert_eq!(bob_final, vec![false, true, false]);
    }

    #[test]
    fn filter_rejects_out_of_range_index() {
        assert_eq!(
            filter_by_indices(&[false], &[true], &[3]),
            Err(SiftError::IndexOutOfRange { index: 3, len: 1 })
        );
    }

    #[test]
    fn filter_rejects_unequal_keys() {
        assert_eq!(
            filter_by_indices(&[false, true], &[true], &[0]),
            Err(SiftError::LengthMismatch { alice: 2, bob: 1 })
        );
    }

    #[test]
    fn empty_inputs_sift_to_empty() {
        assert_eq!(matching_indices(&[], &[]).unwrap(), Vec::<usize>::new());

        let (a, b) = filter_by_indices(&[], &[], &[]).unwrap();
        assert!(a.is_empty() && b.is_empty());
    }
}
