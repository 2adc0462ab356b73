use tracing::trace;

use crate::error::Result;
use crate::group::Point;
use crate::keys::{check_private_key, KeyPair};
use crate::params::params;
use crate::scalar::Scalar;

/// Apply the secret key to a blinded point.
///
/// The server cannot tell which message, if any, `blinded` came from and
/// does not try to.
pub fn evaluate(private_key: &Scalar, blinded: &Point) -> Result<Point> {
    params()?;
    check_private_key(private_key)?;
    trace!("evaluated blinded input");
    Ok(blinded * private_key)
}

/// The PRF value `sk * H(message)` computed directly by the key holder.
/// Matches what a client obtains through blind, evaluate and unblind.
pub fn evaluate_direct(private_key: &Scalar, message: &[u8]) -> Result<Point> {
    check_private_key(private_key)?;
    Ok(&Point::hash(message)? * private_key)
}

impl KeyPair {
    pub fn evaluate(&self, blinded: &Point) -> Result<Point> {
        evaluate(self.private_key(), blinded)
    }

    pub fn evaluate_direct(&self, message: &[u8]) -> Result<Point> {
        evaluate_direct(self.private_key(), message)
    }
}
