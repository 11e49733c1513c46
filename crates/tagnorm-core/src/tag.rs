// crates/tagnorm-core/src/tag.rs

use std::fmt;

/// A normalized tag value. Only a `Normalizer` can build one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    pub(crate) fn from_normalized(value: String) -> Self {
        Tag(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `key:value`, e.g. `instance:web-01`. The key is used verbatim.
    pub fn with_key(&self, key: &str) -> String {
        format!("{key}:{}", self.0)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Tag> for String {
    fn from(t: Tag) -> String {
        t.0
    }
}
