use rand_core::{CryptoRng, RngCore};
use tracing::trace;

use crate::error::Result;
use crate::group::Point;
use crate::params::params;
use crate::scalar::Scalar;

/// Hash `message` onto G1 and mask it with a fresh non-zero blinding factor.
///
/// Returns `(r, r * H(message))`. The blinded point goes to the server; `r`
/// stays with the client until [`unblind`]. Anyone holding both `r` and the
/// message can link the blinded point back to the message.
pub fn blind(message: &[u8], mut rng: impl RngCore + CryptoRng) -> Result<(Scalar, Point)> {
    let h = Point::hash(message)?;
    let r = Scalar::random(&mut rng);
    let blinded = &h * &r;
    trace!(message_len = message.len(), "blinded input");
    Ok((r, blinded))
}

/// Strip the blinding factor from the server's response.
///
/// `r^-1 * (sk * (r * H)) = sk * H`, so the result does not depend on `r`.
pub fn unblind(evaluated: &Point, blinding_factor: &Scalar) -> Result<Point> {
    params()?;
    let r_inv = blinding_factor.inverse()?;
    trace!("unblinded evaluation");
    Ok(evaluated * &r_inv)
}
