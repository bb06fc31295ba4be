use std::fmt;

/// A normalized sequencer signature.
///
/// The raw signature blob attached to a sequencer transaction is normalized
/// into its `(r, s, v)` components. A blob too short to split is recorded as
/// [`Self::Empty`], which is distinct from a transaction carrying no
/// signature at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeqSignature {
    /// The signature blob was present but too short to hold the components.
    Empty,
    /// The normalized signature components, leading zeros stripped.
    Components {
        /// The hex-encoded r value.
        r: String,
        /// The hex-encoded s value.
        s: String,
        /// The hex-encoded recovery parameter.
        v: String,
    },
}

impl SeqSignature {
    /// Returns the all-zero component triple.
    pub fn zero() -> Self {
        Self::Components { r: "0x0".to_string(), s: "0x0".to_string(), v: "0x0".to_string() }
    }
}

impl fmt::Display for SeqSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Components { r, s, v } => write!(f, "{r},{s},{v}"),
        }
    }
}
