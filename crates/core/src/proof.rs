//! Commitments, public inputs, and the verifier capability seam.
//!
//! The state machine never sees a solution, guess, or secret; it sees only
//! the values defined here. `Commitment` is opaque bytes at this layer so
//! that the core carries no curve arithmetic; the zk crate owns the mapping
//! to and from field elements.

/// Byte length of a commitment digest (one BN254 field element, canonical
/// compressed encoding).
pub const COMMITMENT_LENGTH: usize = 32;

/// A hiding, binding digest of `(secret, code)`.
///
/// Immutable once produced. Equality is byte equality; the verifier rejects
/// byte patterns that do not decode to a canonical field element.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Commitment([u8; COMMITMENT_LENGTH]);

impl Commitment {
    pub const fn from_bytes(bytes: [u8; COMMITMENT_LENGTH]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; COMMITMENT_LENGTH] {
        &self.0
    }
}

impl core::fmt::Debug for Commitment {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Commitment(")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

impl core::fmt::Display for Commitment {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// The public-input bundle a proof is checked against.
///
/// Field order is part of the protocol: verifiers consume the fields
/// positionally as (guess commitment, solution commitment, exact, partial),
/// and any reordering or single-field tamper must break verification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PublicInputs {
    /// Commitment to the guess under the code-maker's secret.
    pub guess_commitment: Commitment,
    /// Commitment to the solution the round was started with.
    pub solution_commitment: Commitment,
    /// Declared exact-match count.
    pub exact_matches: u8,
    /// Declared partial-match count.
    pub partial_matches: u8,
}

/// Capability interface over the proof system.
///
/// The state machine trusts a declared hint only because the proof is
/// unforgeable evidence that it was computed from the committed data, so the
/// implementation must satisfy completeness (valid witnesses always verify)
/// and soundness (forged proofs are rejected except with negligible
/// probability). Malformed material verifies as `false`, never panics.
pub trait ProofVerifier {
    fn verify(&self, proof: &[u8], public_inputs: &PublicInputs) -> bool;
}
