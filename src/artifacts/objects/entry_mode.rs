use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::GitError;

/// Classification of a tree entry by the leading two digits of its mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// `04xxxx`
    Directory,
    /// `10xxxx`
    File,
    /// `12xxxx`
    Symlink,
    /// `16xxxx` (gitlink)
    Submodule,
}

/// File-mode code of a tree entry
///
/// The digits are kept exactly as they appear in the tree payload (Git writes
/// directories as the 5-digit `40000`), so re-encoding a parsed tree reproduces
/// its bytes. [`EntryMode::padded`] gives the 6-digit rendering used for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryMode {
    digits: String,
    kind: EntryKind,
}

impl EntryMode {
    pub fn directory() -> Self {
        Self::known("40000", EntryKind::Directory)
    }

    pub fn regular() -> Self {
        Self::known("100644", EntryKind::File)
    }

    pub fn executable() -> Self {
        Self::known("100755", EntryKind::File)
    }

    pub fn symlink() -> Self {
        Self::known("120000", EntryKind::Symlink)
    }

    pub fn submodule() -> Self {
        Self::known("160000", EntryKind::Submodule)
    }

    fn known(digits: &str, kind: EntryKind) -> Self {
        EntryMode {
            digits: digits.to_string(),
            kind,
        }
    }

    pub fn from_octal_bytes(digits: &[u8]) -> anyhow::Result<Self> {
        if !(digits.len() == 5 || digits.len() == 6)
            || !digits.iter().all(|b| (b'0'..=b'7').contains(b))
        {
            return Err(GitError::MalformedObject(format!(
                "invalid tree entry mode {:?}",
                String::from_utf8_lossy(digits)
            ))
            .into());
        }

        // only ASCII octal digits past this point
        let digits = String::from_utf8_lossy(digits).into_owned();
        let padded = format!("{digits:0>6}");
        let kind = match &padded[..2] {
            "04" => EntryKind::Directory,
            "10" => EntryKind::File,
            "12" => EntryKind::Symlink,
            "16" => EntryKind::Submodule,
            _ => {
                return Err(
                    GitError::MalformedObject(format!("unknown tree entry mode {digits}")).into(),
                );
            }
        };

        Ok(EntryMode { digits, kind })
    }

    /// Mode digits as stored in the tree payload
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Mode digits left-padded with `0` to six characters
    pub fn padded(&self) -> String {
        format!("{:0>6}", self.digits)
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_tree(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Kind of object the entry is expected to point at
    pub fn object_type(&self) -> ObjectType {
        match self.kind {
            EntryKind::Directory => ObjectType::Tree,
            EntryKind::File | EntryKind::Symlink => ObjectType::Blob,
            EntryKind::Submodule => ObjectType::Commit,
        }
    }
}

impl TryFrom<&str> for EntryMode {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> anyhow::Result<Self> {
        Self::from_octal_bytes(value.as_bytes())
    }
}

impl std::fmt::Display for EntryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.digits)
    }
}
