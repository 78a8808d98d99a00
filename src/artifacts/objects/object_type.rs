use crate::errors::GitError;

/// Type keyword of a framed object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Blob,
    Tree,
    Commit,
    Tag,
}

/// Closed mapping from the type keyword found in a frame header to its kind
const OBJECT_TYPES: phf::Map<&'static str, ObjectType> = phf::phf_map! {
    "blob" => ObjectType::Blob,
    "tree" => ObjectType::Tree,
    "commit" => ObjectType::Commit,
    "tag" => ObjectType::Tag,
};

impl ObjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Blob => "blob",
            ObjectType::Tree => "tree",
            ObjectType::Commit => "commit",
            ObjectType::Tag => "tag",
        }
    }

    pub fn from_keyword(keyword: &[u8]) -> anyhow::Result<ObjectType> {
        let keyword = String::from_utf8_lossy(keyword);
        Self::try_from(keyword.as_ref())
    }
}

impl TryFrom<&str> for ObjectType {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> anyhow::Result<Self> {
        OBJECT_TYPES
            .get(value)
            .copied()
            .ok_or_else(|| GitError::UnknownObjectType(value.to_string()).into())
    }
}

impl std::str::FromStr for ObjectType {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> anyhow::Result<Self> {
        Self::try_from(value)
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
