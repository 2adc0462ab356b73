/// Errors surfaced by the VOPRF core.
///
/// Every operation either returns a value or exactly one of these; nothing is
/// retried internally and output buffers are left untouched on failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VoprfError {
    /// An operation ran before [`crate::init`] installed the pairing parameters.
    #[error("pairing parameters are not initialized; call init() first")]
    UninitializedLibrary,

    /// Zero was inverted, or a decoded scalar is not canonically reduced.
    #[error("invalid scalar: {0}")]
    InvalidScalar(&'static str),

    /// Bytes do not encode a valid element of the expected type.
    #[error("could not deserialize {kind}: {reason}")]
    Deserialization {
        kind: &'static str,
        reason: &'static str,
    },

    /// The caller's output buffer cannot hold the encoding.
    #[error("buffer too small: {required} bytes required, {provided} provided")]
    BufferTooSmall { required: usize, provided: usize },

    /// Memory for an owned encoding could not be reserved.
    #[error("allocation failure while building {0}")]
    AllocationFailure(&'static str),
}

pub type Result<T, E = VoprfError> = std::result::Result<T, E>;
