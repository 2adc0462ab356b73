use halo2curves::ff::FromUniformBytes;
use rand_core::{CryptoRng, OsRng, RngCore};
use sha2::Digest;
use sha2::Sha512;

use crate::curve::Fr;
use crate::error::{Result, VoprfError};
use crate::group::VerificationKey;
use crate::scalar::Scalar;

/// A server secret together with its public image under the G2 generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPair {
    private_key: Scalar,
    public_key: VerificationKey,
}

impl KeyPair {
    /// Build a new pair of keys from a 32-byte seed
    pub fn new(seed: [u8; 32]) -> Result<Self> {
        let mut hasher = Sha512::new();
        hasher.update(seed);
        let output: [u8; 64] = hasher.finalize().into();
        // 64 bytes so the reduction mod r stays uniform
        let sk = Scalar(Fr::from_uniform_bytes(&output));
        Self::from_private_key(sk)
    }

    /// Build a new pair of keys from rng
    pub fn random(mut rng: impl RngCore + CryptoRng) -> Result<Self> {
        Self::from_private_key(Scalar::random(&mut rng))
    }

    /// Fresh keys from the operating system's randomness.
    pub fn generate() -> Result<Self> {
        Self::random(OsRng)
    }

    /// Pair an existing secret with its public key.
    pub fn from_private_key(private_key: Scalar) -> Result<Self> {
        Ok(KeyPair {
            private_key,
            public_key: public_key(&private_key)?,
        })
    }

    pub fn private_key(&self) -> &Scalar {
        &self.private_key
    }

    pub fn public_key(&self) -> &VerificationKey {
        &self.public_key
    }
}

/// `sk * generator`. Fails for a zero secret.
pub fn public_key(private_key: &Scalar) -> Result<VerificationKey> {
    check_private_key(private_key)?;
    Ok(&VerificationKey::generator()? * private_key)
}

pub(crate) fn check_private_key(private_key: &Scalar) -> Result<()> {
    if private_key.is_zero() {
        return Err(VoprfError::InvalidScalar("zero private key"));
    }
    Ok(())
}
