use crate::artifacts::branch::INVALID_REF_NAME_REGEX;
use anyhow::Context;
use derive_new::new;

/// Path of a reference file relative to `.git`, e.g. `HEAD` or `refs/heads/master`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord, new)]
pub struct SymRefName(String);

impl SymRefName {
    pub fn as_ref_path(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SymRefName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Short name of a reference, e.g. `master`, `v1.0` or `feature/x`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct RefName(String);

impl RefName {
    pub fn try_parse(name: String) -> anyhow::Result<Self> {
        if name.is_empty() {
            anyhow::bail!("reference name cannot be empty");
        }

        let re = regex::Regex::new(INVALID_REF_NAME_REGEX)
            .with_context(|| format!("invalid ref name regex: {INVALID_REF_NAME_REGEX}"))?;

        if re.is_match(&name) {
            anyhow::bail!("invalid reference name: {}", name);
        } else {
            Ok(Self(name))
        }
    }

    /// Reference file for this name under `namespace` (e.g. `refs/tags`)
    pub fn in_namespace(&self, namespace: &str) -> SymRefName {
        SymRefName::new(format!("{namespace}/{}", self.0))
    }
}

impl AsRef<str> for RefName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RefName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
