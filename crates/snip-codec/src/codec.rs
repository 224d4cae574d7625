use snip_core::shortcode::MIN_LENGTH;
use snip_core::{CodecError, IdCodec, ShortCode, UrlId};
use sqids::Sqids;
use typed_builder::TypedBuilder;

/// Configuration of a [`SqidsCodec`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct CodecSettings {
    /// The secret alphabet. Must hold at least 3 unique single-byte characters.
    #[builder(setter(into))]
    alphabet: String,
}

struct Engine {
    sqids: Sqids,
    /// Length of the code of the largest identifier; nothing longer is canonical.
    max_code_len: usize,
}

/// An [`IdCodec`] backed by the Sqids scheme.
///
/// The alphabet is validated once at construction. A bad alphabet does not
/// fail construction: every later `encode`/`decode` reports
/// [`CodecError::InvalidAlphabet`] instead. Use [`SqidsCodec::check`] to validate
/// the configuration eagerly.
pub struct SqidsCodec {
    engine: Result<Engine, CodecError>,
}

impl SqidsCodec {
    pub fn new(settings: CodecSettings) -> Self {
        Self {
            engine: Self::build_engine(&settings),
        }
    }

    fn build_engine(settings: &CodecSettings) -> Result<Engine, CodecError> {
        let sqids = Sqids::builder()
            .alphabet(settings.alphabet.chars().collect())
            .min_length(MIN_LENGTH)
            .build()
            .map_err(|e| CodecError::InvalidAlphabet(e.to_string()))?;

        let max_code_len = sqids
            .encode(&[i64::MAX as u64])
            .map_err(|e| CodecError::InvalidAlphabet(e.to_string()))?
            .len();

        Ok(Engine {
            sqids,
            max_code_len,
        })
    }

    /// Returns the configuration error, if any.
    pub fn check(&self) -> Result<(), CodecError> {
        self.engine().map(|_| ())
    }

    fn engine(&self) -> Result<&Engine, CodecError> {
        self.engine.as_ref().map_err(Clone::clone)
    }
}

impl std::fmt::Debug for SqidsCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqidsCodec")
            .field("configured", &self.engine.is_ok())
            .finish()
    }
}

impl IdCodec for SqidsCodec {
    fn encode(&self, id: UrlId) -> Result<ShortCode, CodecError> {
        let engine = self.engine()?;
        if !id.is_non_negative() {
            return Err(CodecError::NegativeId(id.get()));
        }

        let code = engine
            .sqids
            .encode(&[id.get() as u64])
            .map_err(|e| CodecError::Encode(e.to_string()))?;

        Ok(ShortCode::new_unchecked(code))
    }

    fn decode(&self, code: &str) -> Result<UrlId, CodecError> {
        let engine = self.engine()?;
        let invalid = || CodecError::InvalidCode(code.to_string());

        if code.len() < MIN_LENGTH as usize || code.len() > engine.max_code_len {
            return Err(invalid());
        }

        let numbers = engine.sqids.decode(code);
        let [number] = numbers.as_slice() else {
            return Err(invalid());
        };
        let id = i64::try_from(*number).map_err(|_| invalid())?;

        // Several strings can decode to the same number; only the one encode
        // produces is accepted.
        let canonical = engine.sqids.encode(&[*number]).map_err(|_| invalid())?;
        if canonical != code {
            return Err(invalid());
        }

        Ok(UrlId::new(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALPHABET: &str = "k3G7QAe51FCsPW92uEOyq4Bg6Sp8YzVTmnU0liwDdHXLajZrfxNhobJIRcMvKt";
    const OTHER_ALPHABET: &str = "aB3dE5fG7hJ9kLmNpQrStUvWxYz2C4D6F8H0iKjMnObPqRsTuVwXyZe1g";

    fn codec(alphabet: &str) -> SqidsCodec {
        SqidsCodec::new(CodecSettings::builder().alphabet(alphabet).build())
    }

    #[test]
    fn round_trip() {
        let codec = codec(ALPHABET);
        for raw in (0..2_000).chain([1_000_000, 987_654_321_012, i64::MAX]) {
            let id = UrlId::new(raw);
            let code = codec.encode(id).unwrap();
            assert_eq!(codec.decode(code.as_str()).unwrap(), id, "code {code}");
        }
    }

    #[test]
    fn codes_have_minimum_length() {
        let codec = codec(ALPHABET);
        for raw in [0, 1, 9, 61, 62, 12_345, i64::MAX] {
            let code = codec.encode(UrlId::new(raw)).unwrap();
            assert!(code.as_str().len() >= MIN_LENGTH as usize, "code {code}");
        }
    }

    #[test]
    fn encoding_is_deterministic() {
        let first = codec(ALPHABET);
        let second = codec(ALPHABET);

        let id = UrlId::new(4242);
        assert_eq!(first.encode(id).unwrap(), first.encode(id).unwrap());
        assert_eq!(first.encode(id).unwrap(), second.encode(id).unwrap());
    }

    #[test]
    fn alphabet_changes_codes() {
        let id = UrlId::new(1);
        let a = codec(ALPHABET).encode(id).unwrap();
        let b = codec(OTHER_ALPHABET).encode(id).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn sequential_ids_do_not_share_a_prefix() {
        let codec = codec(ALPHABET);
        let first = codec.encode(UrlId::new(1)).unwrap();
        let second = codec.encode(UrlId::new(2)).unwrap();
        assert_ne!(first.as_str()[..3], second.as_str()[..3]);
    }

    #[test]
    fn negative_id_is_rejected() {
        let err = codec(ALPHABET).encode(UrlId::new(-1)).unwrap_err();
        assert_eq!(err, CodecError::NegativeId(-1));
    }

    #[test]
    fn empty_alphabet_fails_on_use() {
        let codec = codec("");
        assert!(matches!(codec.check(), Err(CodecError::InvalidAlphabet(_))));
        assert!(matches!(
            codec.encode(UrlId::new(1)),
            Err(CodecError::InvalidAlphabet(_))
        ));
        assert!(matches!(
            codec.decode("86Rf07xd4z"),
            Err(CodecError::InvalidAlphabet(_))
        ));
    }

    #[test]
    fn repeated_characters_are_rejected() {
        let codec = codec("aabcdefghijk");
        assert!(matches!(codec.check(), Err(CodecError::InvalidAlphabet(_))));
    }

    #[test]
    fn valid_alphabet_passes_check() {
        assert!(codec(ALPHABET).check().is_ok());
        assert!(codec("abc").check().is_ok());
    }

    #[test]
    fn malformed_codes_are_invalid() {
        let codec = codec(ALPHABET);
        for input in ["", "not-a-real-code", "abc", "!!!!!!!!!!!!", "ünicode-ünicode"] {
            assert!(
                matches!(codec.decode(input), Err(CodecError::InvalidCode(_))),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn truncated_code_is_invalid() {
        let codec = codec(ALPHABET);
        let code = codec.encode(UrlId::new(77)).unwrap();
        let truncated = &code.as_str()[..code.as_str().len() - 1];
        assert!(matches!(
            codec.decode(truncated),
            Err(CodecError::InvalidCode(_))
        ));
    }

    #[test]
    fn extended_code_is_invalid() {
        let codec = codec(ALPHABET);
        let code = codec.encode(UrlId::new(77)).unwrap();
        let extended = format!("{code}k");
        assert!(matches!(
            codec.decode(&extended),
            Err(CodecError::InvalidCode(_))
        ));
    }

    #[test]
    fn code_from_another_alphabet_is_invalid() {
        let foreign = codec(OTHER_ALPHABET).encode(UrlId::new(5)).unwrap();
        let result = codec(ALPHABET).decode(foreign.as_str());
        assert!(matches!(result, Err(CodecError::InvalidCode(_))));
    }

    #[test]
    fn tiny_alphabet_round_trips() {
        let codec = codec("abc");
        for raw in [0, 1, 2, 3, 100, 65_535] {
            let id = UrlId::new(raw);
            let code = codec.encode(id).unwrap();
            assert!(code.as_str().chars().all(|c| "abc".contains(c)));
            assert_eq!(codec.decode(code.as_str()).unwrap(), id);
        }
    }
}
