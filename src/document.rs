//! The two specification documents the generator understands.

use std::fmt;

/// Which UI Events specification a pipeline run is processing.
///
/// `Key` is the logical meaning of a keypress, `Code` the physical key
/// position. Each document yields one generated module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocKind {
    Key,
    Code,
}

impl DocKind {
    /// Published location of the specification document.
    pub fn url(self) -> &'static str {
        match self {
            DocKind::Key => "https://w3c.github.io/uievents-key/",
            DocKind::Code => "https://w3c.github.io/uievents-code/",
        }
    }

    /// File name of the generated module.
    pub fn output_file(self) -> &'static str {
        match self {
            DocKind::Key => "key.rs",
            DocKind::Code => "code.rs",
        }
    }

    /// Name of the generated enum.
    pub fn type_name(self) -> &'static str {
        match self {
            DocKind::Key => "Key",
            DocKind::Code => "Code",
        }
    }

    /// Name of the generated parse-failure type.
    pub fn error_type(self) -> &'static str {
        match self {
            DocKind::Key => "UnrecognizedKeyError",
            DocKind::Code => "UnrecognizedCodeError",
        }
    }
}

impl fmt::Display for DocKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocKind::Key => write!(f, "key"),
            DocKind::Code => write!(f, "code"),
        }
    }
}

impl std::str::FromStr for DocKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "key" => Ok(DocKind::Key),
            "code" => Ok(DocKind::Code),
            other => Err(format!("unknown document kind '{other}' (expected 'key' or 'code')")),
        }
    }
}
