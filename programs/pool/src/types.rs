//! Identifier types shared across the pool program and its ledger

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;

macro_rules! bytes32_id {
    ($name:ident, $seed_tag:literal, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub [u8; 32]);

        impl $name {
            /// Deterministic identity from a human-readable seed string.
            /// The CLI and test fixtures derive throwaway identities this
            /// way instead of generating keypairs.
            pub fn from_seed(seed: &str) -> Self {
                let mut hasher = Sha256::new();
                hasher.update($seed_tag);
                hasher.update(seed.as_bytes());
                Self(hasher.finalize().into())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&bs58::encode(&self.0).into_string())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&bs58::encode(&self.0).into_string())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = String::deserialize(deserializer)?;
                let bytes = bs58::decode(&text)
                    .into_vec()
                    .map_err(de::Error::custom)?;
                let bytes: [u8; 32] = bytes
                    .try_into()
                    .map_err(|_| de::Error::custom("expected 32 bytes"))?;
                Ok($name(bytes))
            }
        }
    };
}

bytes32_id!(
    Address,
    b"tarn:actor:",
    "32-byte ledger address: depositors, traders, pools, custody authorities"
);
bytes32_id!(
    AssetId,
    b"tarn:asset:",
    "32-byte identity of a fungible asset in the ledger environment"
);
