//! Typed-default dictionary scaffolds.
//!
//! A scaffold is a pre-populated mapping used as an accumulator: every key
//! starts at the empty value of its group. Groups are applied in
//! [`DefaultKind::APPLY_ORDER`] (integers, strings, sequences, mappings), so
//! a key listed in more than one group keeps the default of the last group.
//! The key keeps its first insertion position.

use sigadj_model::{DefaultKind, Scaffold};
use tracing::{debug, info};

/// Keys for each default group. Unset groups are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldKeys {
    pub integer_keys: Vec<String>,
    pub string_keys: Vec<String>,
    pub sequence_keys: Vec<String>,
    pub mapping_keys: Vec<String>,
}

impl ScaffoldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_integer_keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.integer_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_string_keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.string_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_sequence_keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.sequence_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_mapping_keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.mapping_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn keys_for(&self, kind: DefaultKind) -> &[String] {
        match kind {
            DefaultKind::Integer => &self.integer_keys,
            DefaultKind::String => &self.string_keys,
            DefaultKind::Sequence => &self.sequence_keys,
            DefaultKind::Mapping => &self.mapping_keys,
        }
    }

    pub fn build(&self) -> Scaffold {
        build_scaffold(self)
    }
}

/// Build a scaffold from the key groups.
///
/// # Example
///
/// ```
/// use sigadj_transform::{ScaffoldKeys, build_scaffold};
///
/// let keys = ScaffoldKeys::new()
///     .with_integer_keys(["count"])
///     .with_string_keys(["name"]);
/// let scaffold = build_scaffold(&keys);
/// assert_eq!(scaffold["count"], 0);
/// assert_eq!(scaffold["name"], "");
/// ```
pub fn build_scaffold(keys: &ScaffoldKeys) -> Scaffold {
    let mut scaffold = Scaffold::new();
    for kind in DefaultKind::APPLY_ORDER {
        for key in keys.keys_for(kind) {
            if scaffold.insert(key.clone(), kind.default_value()).is_some() {
                debug!(key = key.as_str(), group = kind.as_str(), "scaffold key overwritten");
            }
        }
    }
    info!(keys = scaffold.len(), "scaffold built");
    scaffold
}
