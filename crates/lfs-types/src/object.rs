use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use sha2::{Digest, Sha256};

use crate::error::TypeError;

/// Length of a textual object identifier (hex-encoded SHA-256).
pub const OID_LEN: usize = 64;

/// Content-addressed identifier for a stored object.
///
/// An `ObjectId` is the lowercase hex SHA-256 digest of the object's bytes.
/// It can only be constructed through [`ObjectId::parse`] (or
/// [`ObjectId::for_content`]), so holding one guarantees the string is
/// exactly [`OID_LEN`] characters of `0-9a-f`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    /// Returns `true` iff `candidate` is a well-formed identifier.
    ///
    /// Uppercase hex is rejected: identifiers are always lowercase on the
    /// wire and on disk.
    pub fn is_valid(candidate: &str) -> bool {
        candidate.len() == OID_LEN && candidate.bytes().all(is_lower_hex)
    }

    /// Parse and validate an identifier.
    pub fn parse(candidate: &str) -> Result<Self, TypeError> {
        if candidate.len() != OID_LEN {
            return Err(TypeError::InvalidLength {
                expected: OID_LEN,
                actual: candidate.len(),
            });
        }
        if let Some((offset, ch)) = candidate
            .char_indices()
            .find(|(_, c)| !c.is_ascii() || !is_lower_hex(*c as u8))
        {
            return Err(TypeError::InvalidCharacter { ch, offset });
        }
        Ok(Self(candidate.to_owned()))
    }

    /// The identifier a store would file `data` under.
    pub fn for_content(data: &[u8]) -> Self {
        Self(hex::encode(Sha256::digest(data)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short form (first 8 characters) for log lines.
    pub fn short(&self) -> &str {
        &self.0[..8]
    }
}

fn is_lower_hex(b: u8) -> bool {
    matches!(b, b'0'..=b'9' | b'a'..=b'f')
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", self.short())
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ObjectId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_lowercase_hex() {
        let s = "a".repeat(64);
        assert!(ObjectId::is_valid(&s));
        assert_eq!(ObjectId::parse(&s).unwrap().as_str(), s);
    }

    #[test]
    fn rejects_empty_and_wrong_length() {
        assert!(!ObjectId::is_valid(""));
        assert!(!ObjectId::is_valid(&"a".repeat(63)));
        assert!(!ObjectId::is_valid(&"a".repeat(65)));
        assert_eq!(
            ObjectId::parse("abc"),
            Err(TypeError::InvalidLength { expected: 64, actual: 3 })
        );
    }

    #[test]
    fn rejects_uppercase() {
        let s = "A".repeat(64);
        assert!(!ObjectId::is_valid(&s));
        assert_eq!(
            ObjectId::parse(&s),
            Err(TypeError::InvalidCharacter { ch: 'A', offset: 0 })
        );
    }

    #[test]
    fn rejects_non_hex_alphanumerics() {
        let mut s = "0".repeat(63);
        s.push('g');
        assert!(!ObjectId::is_valid(&s));
        assert!(matches!(
            ObjectId::parse(&s),
            Err(TypeError::InvalidCharacter { ch: 'g', offset: 63 })
        ));
    }

    #[test]
    fn rejects_multibyte_of_matching_byte_length() {
        // 62 ASCII bytes + one 2-byte char = 64 bytes
        let s = format!("{}é", "0".repeat(62));
        assert_eq!(s.len(), 64);
        assert!(!ObjectId::is_valid(&s));
        assert!(ObjectId::parse(&s).is_err());
    }

    #[test]
    fn for_content_is_sha256() {
        let id = ObjectId::for_content(b"");
        assert_eq!(
            id.as_str(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn short_is_8_chars() {
        let id = ObjectId::for_content(b"test");
        assert_eq!(id.short().len(), 8);
        assert!(id.as_str().starts_with(id.short()));
    }

    #[test]
    fn serde_rejects_invalid() {
        let id = ObjectId::for_content(b"serde test");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
        let parsed: ObjectId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
        assert!(serde_json::from_str::<ObjectId>("\"nothex\"").is_err());
    }

    proptest! {
        #[test]
        fn valid_iff_64_lower_hex(s in "[0-9a-f]{64}") {
            prop_assert!(ObjectId::is_valid(&s));
            prop_assert!(ObjectId::parse(&s).is_ok());
        }

        #[test]
        fn wrong_length_is_invalid(s in "[0-9a-f]{0,128}") {
            prop_assume!(s.len() != 64);
            prop_assert!(!ObjectId::is_valid(&s));
        }

        #[test]
        fn any_foreign_char_is_invalid(
            prefix in "[0-9a-f]{0,63}",
            bad in "[^0-9a-f]",
        ) {
            let mut s = prefix.clone();
            s.push_str(&bad);
            while s.len() < 64 {
                s.push('0');
            }
            prop_assert!(!ObjectId::is_valid(&s));
        }
    }
}
