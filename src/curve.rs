//! The pairing-friendly curve the crate is instantiated with.
//!
//! Everything else names the groups and the scalar field through these
//! aliases, so moving to another halo2curves pairing engine only touches
//! this file.

pub(crate) use halo2curves::bn256::{
    Bn256 as PairingEngine, Fr, G1Affine, G2Affine, Gt, G1, G2,
};
