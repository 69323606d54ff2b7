//! Rejection sampling of the extended key.
//!
//! The master seed is hashed with HMAC-SHA512 and re-hashed until the third highest bit of the
//! last scalar byte is clear. Only then does clamping yield a scalar that BIP32-Ed25519 child
//! derivation can add to without overflowing.

use hmac::{Hmac, Mac};
use sha2::Sha512;
use tracing::trace;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constants::{ED25519_SEED_KEY, EXTENDED_KEY_LEN, SCALAR_LAST_BYTE};

/// Bit of the last scalar byte that must be clear for a candidate to be accepted.
pub const REJECTION_BIT: u8 = 0b0010_0000;

/// A single round of the rejection sampler, mapping one 64-byte candidate to the next.
pub trait RoundFunction {
    /// Computes the candidate that follows `input`.
    fn round(&self, input: &[u8; EXTENDED_KEY_LEN]) -> [u8; EXTENDED_KEY_LEN];
}

impl<F> RoundFunction for F
where
    F: Fn(&[u8; EXTENDED_KEY_LEN]) -> [u8; EXTENDED_KEY_LEN],
{
    fn round(&self, input: &[u8; EXTENDED_KEY_LEN]) -> [u8; EXTENDED_KEY_LEN] {
        self(input)
    }
}

/// HMAC-SHA512 keyed with `"ed25519 seed"`, the round used by the hardware wallet.
#[derive(Debug, Clone, Copy, Default)]
pub struct HmacSha512Round;

impl RoundFunction for HmacSha512Round {
    fn round(&self, input: &[u8; EXTENDED_KEY_LEN]) -> [u8; EXTENDED_KEY_LEN] {
        let mut mac = Hmac::<Sha512>::new_from_slice(ED25519_SEED_KEY)
            .expect("HMAC accepts keys of any length");
        mac.update(input);

        let mut out = [0u8; EXTENDED_KEY_LEN];
        out.copy_from_slice(&mac.finalize().into_bytes());
        out
    }
}

/// A candidate that passed [`is_accepted`], along with the number of rounds it took.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct AcceptedScalar {
    scalar: [u8; EXTENDED_KEY_LEN],
    rounds: usize,
}

impl AcceptedScalar {
    /// The accepted, not yet clamped, 64 bytes.
    pub const fn as_bytes(&self) -> &[u8; EXTENDED_KEY_LEN] {
        &self.scalar
    }

    /// Number of rounds computed, at least 1.
    pub const fn rounds(&self) -> usize {
        self.rounds
    }
}

impl std::fmt::Debug for AcceptedScalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AcceptedScalar")
            .field("rounds", &self.rounds)
            .finish_non_exhaustive()
    }
}

/// Returns `true` if the third highest bit of the last scalar byte is clear.
pub const fn is_accepted(candidate: &[u8; EXTENDED_KEY_LEN]) -> bool {
    candidate[SCALAR_LAST_BYTE] & REJECTION_BIT == 0
}

/// Runs the rejection sampler over `seed` with [`HmacSha512Round`].
pub fn accept(seed: &[u8; EXTENDED_KEY_LEN]) -> AcceptedScalar {
    accept_with(seed, &HmacSha512Round)
}

/// Runs the rejection sampler over `seed` with the given round function.
///
/// The seed itself is never a candidate: at least one round is always computed. There is no upper
/// bound on the number of rounds, each round is accepted with probability 1/2 for a uniformly
/// random round function.
pub fn accept_with<R>(seed: &[u8; EXTENDED_KEY_LEN], round: &R) -> AcceptedScalar
where
    R: RoundFunction + ?Sized,
{
    let mut candidate = round.round(seed);
    let mut rounds = 1;

    while !is_accepted(&candidate) {
        let next = round.round(&candidate);
        candidate.zeroize();
        candidate = next;
        rounds += 1;
    }

    trace!(%rounds, "accepted candidate scalar");

    let accepted = AcceptedScalar {
        scalar: candidate,
        rounds,
    };
    candidate.zeroize();
    accepted
}
