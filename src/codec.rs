//! Fixed-capacity byte serialization shared by scalars and group elements.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use halo2curves::group::GroupEncoding;

use crate::error::{Result, VoprfError};

/// Fixed-width byte encoding.
///
/// Implementors provide the exact encoded length, an infallible writer into a
/// slice of exactly that length, and a validating decoder. Buffer handling,
/// allocation and Base64 string forms are shared.
pub trait Codec: Sized {
    /// Human readable name used in error reports.
    const KIND: &'static str;

    /// Length in bytes of every encoding of this type.
    fn encoded_len() -> usize;

    /// Write the encoding into `out`, which is exactly [`Codec::encoded_len`] long.
    fn write_encoding(&self, out: &mut [u8]);

    /// Parse an encoding, rejecting anything that is not a valid value.
    fn decode(bytes: &[u8]) -> Result<Self>;

    /// Bytes needed by [`Codec::write_to`].
    fn byte_size(&self) -> usize {
        Self::encoded_len()
    }

    /// Serialize into the front of `buf`, returning the number of bytes written.
    /// `buf` is not modified when it is too short.
    fn write_to(&self, buf: &mut [u8]) -> Result<usize> {
        let required = Self::encoded_len();
        if buf.len() < required {
            return Err(VoprfError::BufferTooSmall {
                required,
                provided: buf.len(),
            });
        }
        self.write_encoding(&mut buf[..required]);
        Ok(required)
    }

    /// Serialize into a freshly allocated vector.
    fn to_bytes(&self) -> Result<Vec<u8>> {
        let len = Self::encoded_len();
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(len)
            .map_err(|_| VoprfError::AllocationFailure(Self::KIND))?;
        bytes.resize(len, 0);
        self.write_encoding(&mut bytes);
        Ok(bytes)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::decode(bytes)
    }

    /// Standard Base64 of the encoding.
    fn to_base64(&self) -> Result<String> {
        Ok(STANDARD.encode(self.to_bytes()?))
    }

    fn from_base64(encoded: &str) -> Result<Self> {
        let bytes = STANDARD
            .decode(encoded)
            .map_err(|_| VoprfError::Deserialization {
                kind: Self::KIND,
                reason: "invalid base64",
            })?;
        Self::decode(&bytes)
    }
}

/// Length of the compressed encoding of `G`.
pub(crate) fn repr_len<G: GroupEncoding>() -> usize {
    G::Repr::default().as_ref().len()
}

/// Parse a compressed group encoding of exactly the right length. Only checks
/// what the curve library checks; callers add subgroup and identity rules.
pub(crate) fn decode_repr<G: GroupEncoding>(bytes: &[u8], kind: &'static str) -> Result<G> {
    let mut repr = G::Repr::default();
    if bytes.len() != repr.as_ref().len() {
        return Err(VoprfError::Deserialization {
            kind,
            reason: "wrong length",
        });
    }
    repr.as_mut().copy_from_slice(bytes);
    Option::from(G::from_bytes(&repr)).ok_or(VoprfError::Deserialization {
        kind,
        reason: "not a point on the curve",
    })
}
