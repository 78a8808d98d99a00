#![allow(dead_code)]

pub mod command;
pub mod file;

/// Decode a hex object id into its 20 raw bytes
pub fn raw_oid(hex: &str) -> Vec<u8> {
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).expect("invalid hex object id"))
        .collect()
}

/// Serialize tree entries given as `(mode, name, hex oid)` in their on-disk order
pub fn tree_payload(entries: &[(&str, &str, &str)]) -> Vec<u8> {
    let mut payload = Vec::new();
    for (mode, name, oid) in entries {
        payload.extend_from_slice(format!("{mode} {name}\0").as_bytes());
        payload.extend_from_slice(&raw_oid(oid));
    }
    payload
}
