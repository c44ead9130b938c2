//! Default-value kinds for dictionary scaffolds.

use serde_json::{Map, Value};

/// Insertion-ordered mapping produced by the scaffold builder.
pub type Scaffold = Map<String, Value>;

/// The group a scaffold key belongs to, which decides its default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultKind {
    Integer,
    String,
    Sequence,
    Mapping,
}

impl DefaultKind {
    /// Groups in the order they are applied. A key listed in several groups
    /// ends up with the default of the last one.
    pub const APPLY_ORDER: [Self; 4] = [Self::Integer, Self::String, Self::Sequence, Self::Mapping];

    pub fn default_value(self) -> Value {
        match self {
            Self::Integer => Value::from(0),
            Self::String => Value::String(String::new()),
            Self::Sequence => Value::Array(Vec::new()),
            Self::Mapping => Value::Object(Map::new()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::String => "string",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
        }
    }
}
