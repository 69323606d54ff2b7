//! Ed25519 clamping of the accepted scalar.

use crate::constants::{EXTENDED_KEY_LEN, SCALAR_LAST_BYTE};

/// Clamps the scalar half of an extended key in place.
///
/// The lowest three bits of the first byte are cleared so the scalar is a multiple of the
/// cofactor, and the last scalar byte has its top bit cleared and its second highest bit set. The
/// nonce extension in the upper 32 bytes is left untouched.
pub fn tweak_bits(x: &mut [u8; EXTENDED_KEY_LEN]) {
    x[0] &= 0b1111_1000;
    x[SCALAR_LAST_BYTE] &= 0b0111_1111;
    x[SCALAR_LAST_BYTE] |= 0b0100_0000;
}

/// Returns `true` if `x` satisfies every post-condition of [`tweak_bits`].
pub fn is_tweaked(x: &[u8; EXTENDED_KEY_LEN]) -> bool {
    x[0] & 0b0000_0111 == 0
        && x[SCALAR_LAST_BYTE] & 0b1000_0000 == 0
        && x[SCALAR_LAST_BYTE] & 0b0100_0000 == 0b0100_0000
}
