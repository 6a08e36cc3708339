use std::fmt;
use std::fmt::Formatter;

/// Encodes raw bytes as a "binary string": every byte becomes the char with the
/// same code point. This is how WebTorrent trackers carry info hashes, peer ids
/// and offer ids inside JSON.
pub fn to_binary_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Reverses [`to_binary_string`]. Returns `None` when a char is outside the
/// single-byte range.
pub fn from_binary_string(value: &str) -> Option<Vec<u8>> {
    value
        .chars()
        .map(|c| u8::try_from(u32::from(c)).ok())
        .collect()
}

/// Decodes a binary string into a fixed-length array.
pub fn from_binary_string_fixed<const N: usize>(value: &str) -> Option<[u8; N]> {
    let bytes = from_binary_string(value)?;
    bytes.try_into().ok()
}

pub(crate) fn bin2hex(data: &[u8], f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", hex::encode(data))
}

pub(crate) fn hex2bin<const N: usize>(value: &str) -> Option<[u8; N]> {
    let mut out = [0u8; N];
    hex::decode_to_slice(value, &mut out).ok()?;
    Some(out)
}

/// Resolves once the flag is raised, or once its sender is gone.
pub async fn flag_raised(flag: &mut tokio::sync::watch::Receiver<bool>) {
    let _ = flag.wait_for(|raised| *raised).await;
}
