//! Runs in its own process, where the parameters are never installed.

use ark_std::test_rng;
use pairing_voprf::{
    blind, evaluate, init, params, unblind, verify, Codec, KeyPair, Point, Scalar,
    VerificationKey, VoprfError,
};

#[test]
fn test_operations_before_init() {
    let mut rng = test_rng();
    let s = Scalar::random(&mut rng);

    assert_eq!(params().err(), Some(VoprfError::UninitializedLibrary));
    assert_eq!(
        KeyPair::random(&mut rng).err(),
        Some(VoprfError::UninitializedLibrary)
    );
    assert_eq!(
        blind(b"early", &mut rng).err(),
        Some(VoprfError::UninitializedLibrary)
    );
    assert_eq!(
        VerificationKey::generator().err(),
        Some(VoprfError::UninitializedLibrary)
    );
    assert_eq!(Point::hash(b"early").err(), Some(VoprfError::UninitializedLibrary));

    // scalar arithmetic and codecs need no parameters
    assert_eq!(s.inverse().unwrap().inverse().unwrap(), s);
    assert_eq!(Scalar::from_bytes(&s.to_bytes().unwrap()).unwrap(), s);

    init();
    let keypair = KeyPair::random(&mut rng).unwrap();
    let (r, blinded) = blind(b"late", &mut rng).unwrap();
    let output = unblind(&evaluate(keypair.private_key(), &blinded).unwrap(), &r).unwrap();
    assert!(verify(keypair.public_key(), b"late", &output).unwrap());
}
