//! Process-wide pairing parameters.
//!
//! The parameters are installed once by [`init`] or [`init_with`] and are
//! read-only afterwards. Every protocol entry point fetches them through
//! [`params`], which fails with [`VoprfError::UninitializedLibrary`] until
//! initialization has happened.

use std::sync::OnceLock;

use halo2curves::ff::FromUniformBytes;
use halo2curves::group::Curve;
use sha2::{Digest, Sha512};
use tracing::{debug, warn};

use crate::curve::{Fr, G2Affine, G2};
use crate::error::{Result, VoprfError};

/// Domain tag fed to hash-to-curve when none is configured.
pub const DEFAULT_HASH_DOMAIN: &str = "pairing-voprf-bn256-g1";

/// Seed the G2 generator is derived from when none is configured.
pub const DEFAULT_GENERATOR_SEED: &[u8] = b"pairing-voprf-bn256-g2-generator";

static PARAMS: OnceLock<Params> = OnceLock::new();

/// Tunables of a deployment. All participants must agree on both values,
/// otherwise outputs will not verify across them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Domain separation tag for hashing messages onto G1.
    pub hash_domain: String,
    /// Seed mapped into G2 to obtain the protocol-wide generator.
    pub generator_seed: Vec<u8>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            hash_domain: DEFAULT_HASH_DOMAIN.to_owned(),
            generator_seed: DEFAULT_GENERATOR_SEED.to_vec(),
        }
    }
}

/// Installed parameters: the configuration and the generator derived from it.
#[derive(Debug)]
pub struct Params {
    config: Config,
    generator: G2Affine,
}

impl Params {
    fn derive(config: Config) -> Self {
        let mut hasher = Sha512::new();
        hasher.update(&config.generator_seed);
        let output: [u8; 64] = hasher.finalize().into();
        // 64 bytes keep the reduction mod r uniform
        let k = Fr::from_uniform_bytes(&output);
        let generator = (G2::generator() * k).to_affine();

        Params { config, generator }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn hash_domain(&self) -> &str {
        &self.config.hash_domain
    }

    pub(crate) fn generator(&self) -> &G2Affine {
        &self.generator
    }
}

/// Install the default parameters. Safe to call any number of times.
pub fn init() -> &'static Params {
    init_with(Config::default())
}

/// Install parameters built from `config`.
///
/// Only the first call has an effect; later calls return the parameters that
/// are already installed, whatever `config` they pass.
pub fn init_with(config: Config) -> &'static Params {
    let mut fresh = false;
    let params = PARAMS.get_or_init(|| {
        fresh = true;
        Params::derive(config.clone())
    });

    if fresh {
        debug!(hash_domain = %params.config.hash_domain, "pairing parameters initialized");
    } else if params.config != config {
        warn!(
            installed = %params.config.hash_domain,
            requested = %config.hash_domain,
            "pairing parameters already initialized; ignoring new configuration"
        );
    }
    params
}

/// The installed parameters.
pub fn params() -> Result<&'static Params> {
    PARAMS.get().ok_or(VoprfError::UninitializedLibrary)
}
