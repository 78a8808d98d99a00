//! Key-value list with message
//!
//! Commit and tag payloads are a sequence of `key SP value LF` header lines, a
//! blank line, and a free-form message:
//!
//! ```text
//! tree 29ff16c9c14e2652b22f8b78bb08a5a07930c147
//! parent 206941306e8a8af65b66eaaaea388a7ae24d49a0
//! author Thibault Polge <thibault@thb.lt> 1527025023 +0200
//! gpgsig -----BEGIN PGP SIGNATURE-----
//!  iQIzBAABCAAdFiEExwXquOM8bWb4Q2zVGxM2FxoLkGQFAlsEjZQACgkQGxM2FxoL
//!  -----END PGP SIGNATURE-----
//!
//! Create first draft
//! ```
//!
//! A value continues onto every following line that starts with a single
//! space; the space is dropped when parsing and put back when serializing.
//! Keys may repeat (merge commits carry one `parent` per line).

use crate::errors::GitError;
use bytes::Bytes;

/// Value of one key: a scalar, or every value in order once the key repeats
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KvlmValue {
    Single(Bytes),
    Multiple(Vec<Bytes>),
}

impl KvlmValue {
    pub fn first(&self) -> &Bytes {
        match self {
            KvlmValue::Single(value) => value,
            KvlmValue::Multiple(values) => &values[0],
        }
    }

    pub fn values(&self) -> &[Bytes] {
        match self {
            KvlmValue::Single(value) => std::slice::from_ref(value),
            KvlmValue::Multiple(values) => values,
        }
    }
}

/// Header lines in their original order plus the trailing message
///
/// Values of a repeated key are grouped by [`Kvlm::get`], but the lines keep
/// their positions, so a record whose repeats are interleaved with other keys
/// serializes back to the same bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Kvlm {
    lines: Vec<(Bytes, Bytes)>,
    message: Bytes,
}

impl Kvlm {
    pub fn new(message: Bytes) -> Self {
        Kvlm {
            lines: Vec::new(),
            message,
        }
    }

    /// Every value of `key`, in order
    pub fn get(&self, key: &[u8]) -> Option<KvlmValue> {
        let mut values = self
            .lines
            .iter()
            .filter(|(k, _)| k.as_ref() == key)
            .map(|(_, value)| value.clone())
            .collect::<Vec<_>>();

        match values.len() {
            0 => None,
            1 => values.pop().map(KvlmValue::Single),
            _ => Some(KvlmValue::Multiple(values)),
        }
    }

    /// Add a header line after the existing ones
    pub fn append(&mut self, key: impl Into<Bytes>, value: impl Into<Bytes>) {
        self.lines.push((key.into(), value.into()));
    }

    /// Keys of the header lines, one per line
    pub fn keys(&self) -> impl Iterator<Item = &Bytes> {
        self.lines.iter().map(|(key, _)| key)
    }

    pub fn message(&self) -> &Bytes {
        &self.message
    }

    pub fn parse(raw: &[u8]) -> anyhow::Result<Self> {
        let mut kvlm = Kvlm::default();
        let mut start = 0;

        loop {
            let space = find(raw, b' ', start);
            let newline = find(raw, b'\n', start);

            // a newline before any space is the blank line opening the message
            let space = match (space, newline) {
                (Some(space), Some(newline)) if space < newline => Some(space),
                (Some(space), None) => Some(space),
                _ => None,
            };

            let Some(space) = space else {
                if newline != Some(start) {
                    return Err(GitError::MalformedObject(format!(
                        "expected a blank line before the message at offset {start}"
                    ))
                    .into());
                }
                kvlm.message = Bytes::copy_from_slice(&raw[start + 1..]);
                return Ok(kvlm);
            };

            let key = &raw[start..space];

            // the value runs until a newline that is not followed by a space
            let mut end = start;
            loop {
                end = find(raw, b'\n', end + 1).ok_or_else(|| {
                    GitError::MalformedObject(format!(
                        "unterminated value for key {:?}",
                        String::from_utf8_lossy(key)
                    ))
                })?;
                if raw.get(end + 1) != Some(&b' ') {
                    break;
                }
            }

            let value = unfold(&raw[space + 1..end]);
            kvlm.append(Bytes::copy_from_slice(key), value);

            start = end + 1;
        }
    }

    pub fn serialize(&self) -> Bytes {
        let mut raw = Vec::new();

        for (key, value) in &self.lines {
            raw.extend_from_slice(key);
            raw.push(b' ');
            raw.extend_from_slice(&fold(value));
            raw.push(b'\n');
        }

        raw.push(b'\n');
        raw.extend_from_slice(&self.message);

        Bytes::from(raw)
    }
}

fn find(raw: &[u8], needle: u8, from: usize) -> Option<usize> {
    raw.get(from..)?
        .iter()
        .position(|&b| b == needle)
        .map(|offset| from + offset)
}

/// Drop the space opening each continuation line
fn unfold(raw: &[u8]) -> Vec<u8> {
    let mut value = Vec::with_capacity(raw.len());
    let mut bytes = raw.iter().peekable();

    while let Some(&b) = bytes.next() {
        value.push(b);
        if b == b'\n' && bytes.peek() == Some(&&b' ') {
            bytes.next();
        }
    }

    value
}

/// Open every line after the first with a space
fn fold(value: &[u8]) -> Vec<u8> {
    let mut raw = Vec::with_capacity(value.len());

    for &b in value {
        raw.push(b);
        if b == b'\n' {
            raw.push(b' ');
        }
    }

    raw
}
