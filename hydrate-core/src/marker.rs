use crate::Value;
use std::{
    borrow::Cow,
    fmt::{self, Display},
};

/// Declarative configuration attached to an entity field.
///
/// The engine never interprets markers besides [`Marker::Contingent`]: it collects
/// the ones of the kind a converter asks for and hands them over untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Marker {
    /// The field is optional in Rust but the database must never store null in it.
    Contingent,
    /// Layout in the `time` format description syntax, e.g. `[year]-[month]-[day]`.
    DateTimeFormat(Cow<'static, str>),
    /// Open ended marker, identified by its kind and carrying a value.
    Tagged(&'static str, Value),
}

impl Marker {
    pub fn kind(&self) -> MarkerKind {
        match self {
            Marker::Contingent => MarkerKind::Contingent,
            Marker::DateTimeFormat(..) => MarkerKind::DateTimeFormat,
            Marker::Tagged(kind, ..) => MarkerKind::Tagged(kind),
        }
    }

    pub fn is(&self, kind: MarkerKind) -> bool {
        self.kind() == kind
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    Contingent,
    DateTimeFormat,
    Tagged(&'static str),
}

impl Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerKind::Contingent => f.write_str("contingent"),
            MarkerKind::DateTimeFormat => f.write_str("format"),
            MarkerKind::Tagged(kind) => write!(f, "tag({kind})"),
        }
    }
}
