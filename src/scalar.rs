use core::fmt;

use halo2curves::ff::{Field, PrimeField};
use rand_core::{CryptoRng, RngCore};

use crate::curve::Fr;
use crate::codec::Codec;
use crate::error::{Result, VoprfError};

/// An element of the scalar field Fr: a secret key, a blinding factor, or an
/// inverse of one.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Scalar(pub(crate) Fr);

impl Scalar {
    /// Sample a uniformly random non-zero scalar.
    pub fn random(mut rng: impl RngCore + CryptoRng) -> Self {
        loop {
            let s = Fr::random(&mut rng);
            if !bool::from(s.is_zero()) {
                return Scalar(s);
            }
        }
    }

    /// The multiplicative inverse mod r.
    pub fn inverse(&self) -> Result<Self> {
        Option::from(self.0.invert())
            .map(Scalar)
            .ok_or(VoprfError::InvalidScalar("zero has no inverse"))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero().into()
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Scalar(Fr::from(value))
    }
}

// secrets stay out of logs
impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Scalar(..)")
    }
}

impl Codec for Scalar {
    const KIND: &'static str = "scalar";

    fn encoded_len() -> usize {
        Fr::default().to_repr().as_ref().len()
    }

    fn write_encoding(&self, out: &mut [u8]) {
        out.copy_from_slice(self.0.to_repr().as_ref());
    }

    fn decode(bytes: &[u8]) -> Result<Self> {
        let mut repr = <Fr as PrimeField>::Repr::default();
        if bytes.len() != repr.as_ref().len() {
            return Err(VoprfError::Deserialization {
                kind: Self::KIND,
                reason: "wrong length",
            });
        }
        repr.as_mut().copy_from_slice(bytes);
        Option::from(Fr::from_repr(repr))
            .map(Scalar)
            .ok_or(VoprfError::InvalidScalar("encoding is not reduced mod r"))
    }
}
