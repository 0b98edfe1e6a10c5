//! Canonical binary encoding and the serde glue shared by fixed-size values.
//!
//! The canonical form is `bincode` 1.x with its default options: fields in
//! declaration order, fixed-width little-endian integers, `u64` length
//! prefixes for strings and sequences, `u32` enum tags. It is deterministic
//! for every type in this crate because none of them contain maps.
//!
//! Signatures cover exactly these bytes, so any change here is a hard fork
//! of the wire format.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Encodes a value into its canonical byte stream.
pub fn to_canonical_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, bincode::Error> {
    bincode::serialize(value)
}

/// Decodes a value from its canonical byte stream.
pub fn from_canonical_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, bincode::Error> {
    bincode::deserialize(bytes)
}

/// Serde helpers for `[u8; N]`: hex string in human-readable formats,
/// length-prefixed raw bytes in binary ones.
pub(crate) mod fixed_bytes {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer, const N: usize>(
        bytes: &[u8; N],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&hex::encode(bytes))
        } else {
            serializer.serialize_bytes(bytes)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>, const N: usize>(
        deserializer: D,
    ) -> Result<[u8; N], D::Error> {
        let raw = if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            hex::decode(s).map_err(D::Error::custom)?
        } else {
            Vec::<u8>::deserialize(deserializer)?
        };
        let len = raw.len();
        raw.try_into()
            .map_err(|_| D::Error::custom(format!("expected {} bytes, got {}", N, len)))
    }
}

/// Serde helpers for variable-length byte blobs: standard base64 in
/// human-readable formats, length-prefixed raw bytes in binary ones.
pub(crate) mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&STANDARD.encode(bytes))
        } else {
            serializer.serialize_bytes(bytes)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            STANDARD.decode(s).map_err(D::Error::custom)
        } else {
            Vec::<u8>::deserialize(deserializer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Wrapper {
        #[serde(with = "fixed_bytes")]
        bytes: [u8; 4],
    }

    #[test]
    fn fixed_bytes_json_is_hex() {
        let w = Wrapper {
            bytes: [0xde, 0xad, 0xbe, 0xef],
        };
        let json = serde_json::to_string(&w).unwrap();
        assert_eq!(json, r#"{"bytes":"deadbeef"}"#);
        assert_eq!(serde_json::from_str::<Wrapper>(&json).unwrap(), w);
    }

    #[test]
    fn fixed_bytes_binary_is_length_prefixed() {
        let w = Wrapper { bytes: [1, 2, 3, 4] };
        let bin = to_canonical_bytes(&w).unwrap();
        assert_eq!(bin, vec![4, 0, 0, 0, 0, 0, 0, 0, 1, 2, 3, 4]);
        assert_eq!(from_canonical_bytes::<Wrapper>(&bin).unwrap(), w);
    }

    #[test]
    fn fixed_bytes_rejects_wrong_length() {
        assert!(serde_json::from_str::<Wrapper>(r#"{"bytes":"dead"}"#).is_err());
        assert!(serde_json::from_str::<Wrapper>(r#"{"bytes":"not hex"}"#).is_err());
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Blob {
        #[serde(with = "base64_bytes")]
        data: Vec<u8>,
    }

    #[test]
    fn base64_bytes_json_and_binary() {
        let b = Blob {
            data: b"hi".to_vec(),
        };
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, r#"{"data":"aGk="}"#);
        assert_eq!(serde_json::from_str::<Blob>(&json).unwrap(), b);

        let bin = to_canonical_bytes(&b).unwrap();
        assert_eq!(bin, vec![2, 0, 0, 0, 0, 0, 0, 0, b'h', b'i']);
        assert_eq!(from_canonical_bytes::<Blob>(&bin).unwrap(), b);
    }

    #[test]
    fn canonical_bytes_are_stable() {
        let a = to_canonical_bytes(&(1u64, "x")).unwrap();
        let b = to_canonical_bytes(&(1u64, "x")).unwrap();
        assert_eq!(a, b);
    }
}
