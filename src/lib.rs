//! A verifiable oblivious PRF over the BN254 pairing.
//!
//! A server holding a secret scalar `sk` evaluates `F(sk, m) = sk * H(m)` on a
//! blinded `m` without learning it, and anyone holding `pk = sk * g2` can
//! check an output with two pairings.
//!
//! ```
//! use ark_std::test_rng;
//! use pairing_voprf::{blind, evaluate, init, unblind, verify, KeyPair};
//!
//! init();
//! let mut rng = test_rng();
//! let keypair = KeyPair::random(&mut rng).unwrap();
//!
//! let (r, blinded) = blind(b"test-input", &mut rng).unwrap();
//! let evaluated = evaluate(keypair.private_key(), &blinded).unwrap();
//! let output = unblind(&evaluated, &r).unwrap();
//!
//! assert!(verify(keypair.public_key(), b"test-input", &output).unwrap());
//! ```

mod client;
mod codec;
mod curve;
mod error;
mod group;
mod keys;
mod pairing;
mod params;
mod scalar;
mod server;
mod verify;

pub use client::{blind, unblind};
pub use codec::Codec;
pub use error::{Result, VoprfError};
pub use group::{Point, VerificationKey};
pub use keys::{public_key, KeyPair};
pub use pairing::Pairing;
pub use params::{
    init, init_with, params, Config, Params, DEFAULT_GENERATOR_SEED, DEFAULT_HASH_DOMAIN,
};
pub use scalar::Scalar;
pub use server::{evaluate, evaluate_direct};
pub use verify::verify;
