use core::fmt;

use halo2curves::pairing::Engine;
use subtle::{Choice, ConstantTimeEq};

use crate::curve::{Gt, PairingEngine};
use crate::group::{Point, VerificationKey};

/// An element of the pairing target group GT.
#[derive(Clone, Copy, Debug)]
pub struct Pairing(Gt);

impl Pairing {
    /// e(p, q).
    pub fn pair(p: &Point, q: &VerificationKey) -> Self {
        Pairing(PairingEngine::pairing(&p.to_affine(), &q.to_affine()))
    }
}

impl ConstantTimeEq for Pairing {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for Pairing {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Pairing {}

impl fmt::Display for Pairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
