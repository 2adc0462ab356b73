use tracing::debug;

use crate::error::Result;
use crate::group::{Point, VerificationKey};
use crate::pairing::Pairing;
use crate::params::params;

/// Check that `output == sk * H(message)` for the `sk` behind `public_key`.
///
/// Holds iff `e(H(message), pk) == e(output, generator)`, which bilinearity
/// makes checkable without the secret.
pub fn verify(public_key: &VerificationKey, message: &[u8], output: &Point) -> Result<bool> {
    params()?;
    // both sides collapse to 1 in GT for an identity key or output
    if public_key.is_identity() || output.is_identity() {
        debug!("identity key or output rejected");
        return Ok(false);
    }
    let h = Point::hash(message)?;
    let generator = VerificationKey::generator()?;

    let lhs = Pairing::pair(&h, public_key);
    let rhs = Pairing::pair(output, &generator);

    let valid = lhs == rhs;
    if !valid {
        debug!(message_len = message.len(), "output rejected");
    }
    Ok(valid)
}

impl VerificationKey {
    pub fn verify(&self, message: &[u8], output: &Point) -> Result<bool> {
        verify(self, message, output)
    }
}
