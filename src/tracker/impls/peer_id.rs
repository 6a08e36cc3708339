use std::fmt;
use std::fmt::Formatter;
use rand::RngExt;
use crate::common::common::{bin2hex, hex2bin};
use crate::tracker::structs::peer_id::PeerId;

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        bin2hex(&self.0, f)
    }
}

impl PeerId {
    /// Builds a peer id from an Azureus-style prefix (e.g. `-RS0300-`) padded with
    /// random bytes. Prefixes longer than 20 bytes are truncated.
    pub fn generate(prefix: &str) -> PeerId {
        let mut rng = rand::rng();
        let mut id: [u8; 20] = rng.random();
        let prefix = prefix.as_bytes();
        let length = prefix.len().min(20);
        id[..length].copy_from_slice(&prefix[..length]);
        PeerId(id)
    }

    pub fn get_client_name(&self) -> Option<&'static str> {
        if self.0[0] != b'-' {
            return None;
        }
        let name = match &self.0[1..3] {
            b"RS" => "rtc-swarm",
            b"WW" => "WebTorrent",
            b"WD" => "WebTorrent Desktop",
            b"qB" => "qBittorrent",
            b"TR" => "Transmission",
            b"LT" => "libtorrent",
            b"lt" => "libTorrent",
            b"UT" => "µTorrent",
            b"DE" => "DelugeTorrent",
            _ => return None,
        };
        Some(name)
    }
}

impl std::str::FromStr for PeerId {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 40 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut result = PeerId([0u8; 20]);
        hex::decode_to_slice(s, &mut result.0)?;
        Ok(result)
    }
}

impl From<[u8; 20]> for PeerId {
    fn from(data: [u8; 20]) -> PeerId {
        PeerId(data)
    }
}

impl serde::ser::Serialize for PeerId {
    fn serialize<S: serde::ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(self.0))
    }
}

impl<'de> serde::de::Deserialize<'de> for PeerId {
    fn deserialize<D: serde::de::Deserializer<'de>>(des: D) -> Result<Self, D::Error> {
        struct PeerIdVisitor;

        impl<'de> serde::de::Visitor<'de> for PeerIdVisitor {
            type Value = PeerId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a 40 character long hash")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                hex2bin::<20>(v).map(PeerId).ok_or_else(|| {
                    serde::de::Error::invalid_value(
                        serde::de::Unexpected::Str(v),
                        &"expected a 40 character hexadecimal string",
                    )
                })
            }
        }

        des.deserialize_str(PeerIdVisitor)
    }
}
