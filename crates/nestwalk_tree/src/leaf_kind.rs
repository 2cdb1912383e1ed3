//! Leaf kind definitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The closed set of leaf kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeafKind {
    /// A reference to an external resource. The payload is its URL, e.g. a
    /// link href or an image src.
    ResourceReference,
    /// A structural marker. The payload is a free-form label.
    Marker,
}

impl LeafKind {
    /// Returns true if the payload of this kind is a resource URL.
    #[inline]
    pub const fn is_resource_reference(&self) -> bool {
        matches!(self, LeafKind::ResourceReference)
    }

    /// Returns the kebab-case name used in serialized trees.
    pub const fn as_str(&self) -> &'static str {
        match self {
            LeafKind::ResourceReference => "resource-reference",
            LeafKind::Marker => "marker",
        }
    }
}

impl fmt::Display for LeafKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown leaf kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown leaf kind: {0}")]
pub struct UnknownLeafKind(pub String);

impl FromStr for LeafKind {
    type Err = UnknownLeafKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "resource-reference" => Ok(LeafKind::ResourceReference),
            "marker" => Ok(LeafKind::Marker),
            other => Err(UnknownLeafKind(other.to_string())),
        }
    }
}
