use crate::error::CodecError;
use crate::id::UrlId;
use crate::shortcode::ShortCode;

/// Reversible mapping between [`UrlId`] and [`ShortCode`].
///
/// Implementations must be pure: the output depends only on the input and
/// the configuration the codec was constructed with.
pub trait IdCodec: Send + Sync + 'static {
    /// Encodes a non-negative identifier.
    ///
    /// Fails with an encoding error if the codec is misconfigured or the
    /// identifier is negative.
    fn encode(&self, id: UrlId) -> Result<ShortCode, CodecError>;

    /// Decodes a code previously produced by [`IdCodec::encode`].
    ///
    /// Fails with [`CodecError::InvalidCode`] if the input does not decode to
    /// exactly one identifier.
    fn decode(&self, code: &str) -> Result<UrlId, CodecError>;
}
