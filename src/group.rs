use core::fmt;
use core::ops::Mul;
use core::str::FromStr;

use halo2curves::ff::Field;
use halo2curves::group::{Curve, Group, GroupEncoding};
use halo2curves::CurveExt;
use subtle::{Choice, ConstantTimeEq};

use crate::curve::{Fr, G1Affine, G2Affine, G1, G2};
use crate::codec::{decode_repr, repr_len, Codec};
use crate::error::{Result, VoprfError};
use crate::params::params;
use crate::scalar::Scalar;

/// An element of G1: a hashed message, a blinded or evaluated input, or a
/// VOPRF output.
#[derive(Clone, Copy, Debug)]
pub struct Point(pub(crate) G1);

/// An element of G2: a server public key, or the protocol generator.
#[derive(Clone, Copy, Debug)]
pub struct VerificationKey(pub(crate) G2);

/// `r * p == 0`, computed as `(r - 1) * p + p` since scalar multiplication
/// walks the canonical bits of the scalar without reducing by the point's order.
pub(crate) fn in_prime_subgroup<G: Group<Scalar = Fr>>(p: &G) -> bool {
    (*p * -Fr::ONE + p).is_identity().into()
}

fn check_element<G: Group<Scalar = Fr>>(p: G, kind: &'static str) -> Result<G> {
    if bool::from(p.is_identity()) {
        return Err(VoprfError::Deserialization {
            kind,
            reason: "identity element",
        });
    }
    if !in_prime_subgroup(&p) {
        return Err(VoprfError::Deserialization {
            kind,
            reason: "not in the prime-order subgroup",
        });
    }
    Ok(p)
}

impl Point {
    /// Map `message` onto G1 under the configured domain tag.
    pub fn hash(message: &[u8]) -> Result<Self> {
        let params = params()?;
        let hasher = G1::hash_to_curve(params.hash_domain());
        Ok(Point(hasher(message)))
    }

    pub fn is_identity(&self) -> bool {
        self.0.is_identity().into()
    }

    pub(crate) fn to_affine(&self) -> G1Affine {
        self.0.to_affine()
    }
}

impl VerificationKey {
    /// The protocol-wide G2 generator.
    pub fn generator() -> Result<Self> {
        Ok(VerificationKey(G2::from(*params()?.generator())))
    }

    pub fn is_identity(&self) -> bool {
        self.0.is_identity().into()
    }

    pub(crate) fn to_affine(&self) -> G2Affine {
        self.0.to_affine()
    }
}

impl Mul<&Scalar> for &Point {
    type Output = Point;

    fn mul(self, rhs: &Scalar) -> Point {
        Point(self.0 * rhs.0)
    }
}

impl Mul<&Scalar> for &VerificationKey {
    type Output = VerificationKey;

    fn mul(self, rhs: &Scalar) -> VerificationKey {
        VerificationKey(self.0 * rhs.0)
    }
}

impl ConstantTimeEq for Point {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Point {}

impl ConstantTimeEq for VerificationKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for VerificationKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for VerificationKey {}

impl Codec for Point {
    const KIND: &'static str = "G1 point";

    fn encoded_len() -> usize {
        repr_len::<G1>()
    }

    fn write_encoding(&self, out: &mut [u8]) {
        out.copy_from_slice(self.0.to_bytes().as_ref());
    }

    fn decode(bytes: &[u8]) -> Result<Self> {
        let p = decode_repr::<G1>(bytes, Self::KIND)?;
        check_element(p, Self::KIND).map(Point)
    }
}

impl Codec for VerificationKey {
    const KIND: &'static str = "G2 verification key";

    fn encoded_len() -> usize {
        repr_len::<G2>()
    }

    fn write_encoding(&self, out: &mut [u8]) {
        out.copy_from_slice(self.0.to_bytes().as_ref());
    }

    fn decode(bytes: &[u8]) -> Result<Self> {
        let q = decode_repr::<G2>(bytes, Self::KIND)?;
        check_element(q, Self::KIND).map(VerificationKey)
    }
}

macro_rules! impl_display_fromstr {
    ($type:ty) => {
        impl fmt::Display for $type {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.to_base64().map_err(|_| fmt::Error)?)
            }
        }

        impl FromStr for $type {
            type Err = VoprfError;

            fn from_str(s: &str) -> Result<Self> {
                <$type as Codec>::from_base64(s)
            }
        }
    };
}

impl_display_fromstr!(Point);
impl_display_fromstr!(VerificationKey);
