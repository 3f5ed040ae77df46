use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// See [ShapePolicy].
    pub shape: ShapePolicy,
}

/// What to do with payloads that don't match the supported shapes.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapePolicy {
    /// Unknown payload shapes and records that aren't friend objects are decode errors.
    #[default]
    Strict,

    /// Unknown payload shapes decode to an empty list and invalid records are skipped, both with
    /// a warning.
    Lenient,
}
