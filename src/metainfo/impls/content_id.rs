use std::fmt;
use std::fmt::Formatter;
use rand::RngExt;
use crate::common::common::{bin2hex, hex2bin};
use crate::metainfo::structs::content_id::ContentId;

impl ContentId {
    pub fn random() -> ContentId {
        let mut rng = rand::rng();
        ContentId(rng.random())
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        bin2hex(&self.0, f)
    }
}

impl std::str::FromStr for ContentId {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 40 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut result = ContentId([0u8; 20]);
        hex::decode_to_slice(s, &mut result.0)?;
        Ok(result)
    }
}

impl From<[u8; 20]> for ContentId {
    fn from(data: [u8; 20]) -> Self {
        ContentId(data)
    }
}

impl serde::ser::Serialize for ContentId {
    fn serialize<S: serde::ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(self.0))
    }
}

impl<'de> serde::de::Deserialize<'de> for ContentId {
    fn deserialize<D: serde::de::Deserializer<'de>>(des: D) -> Result<Self, D::Error> {
        struct ContentIdVisitor;

        impl<'de> serde::de::Visitor<'de> for ContentIdVisitor {
            type Value = ContentId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a 40 character hex string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                hex2bin::<20>(v).map(ContentId).ok_or_else(|| {
                    serde::de::Error::invalid_value(
                        serde::de::Unexpected::Str(v),
                        &"expected a 40 character hexadecimal string",
                    )
                })
            }
        }
        des.deserialize_str(ContentIdVisitor)
    }
}
