use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::LocatorError;

/// Keys a locator predicate can constrain on
///
/// Each key serializes to a fixed lowercase tag. Keys past `Offset` are
/// recognized by the grammar but have no predicate semantics in the engine
/// yet; [`Locator::predicate`](crate::Locator::predicate) rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredicateKey {
    /// Match on the engine-assigned element ID
    Id,
    /// Match on the element's window class
    Class,
    /// Match on the control type (see [`ControlType`])
    Type,
    /// Match on the element's name/label
    Name,
    /// Match on the element's positional offset
    Offset,
    /// Reserved, not yet supported
    Subname,
    /// Reserved, not yet supported
    Index,
    /// Reserved, not yet supported
    Handle,
    /// Reserved, not yet supported
    Depth,
    /// Reserved, not yet supported
    Path,
    /// Reserved, not yet supported
    Desktop,
    /// Reserved, not yet supported
    Executable,
    /// Reserved, not yet supported
    Regex,
    /// Reserved, not yet supported
    Process,
}

impl PredicateKey {
    /// The tag emitted in serialized queries
    pub fn as_tag(&self) -> &'static str {
        match self {
            PredicateKey::Id => "id",
            PredicateKey::Class => "class",
            PredicateKey::Type => "type",
            PredicateKey::Name => "name",
            PredicateKey::Offset => "offset",
            PredicateKey::Subname => "subname",
            PredicateKey::Index => "index",
            PredicateKey::Handle => "handle",
            PredicateKey::Depth => "depth",
            PredicateKey::Path => "path",
            PredicateKey::Desktop => "desktop",
            PredicateKey::Executable => "executable",
            PredicateKey::Regex => "regex",
            PredicateKey::Process => "process",
        }
    }

    /// Whether the engine implements predicates on this key
    pub fn is_supported(&self) -> bool {
        matches!(
            self,
            PredicateKey::Id
                | PredicateKey::Class
                | PredicateKey::Type
                | PredicateKey::Name
                | PredicateKey::Offset
        )
    }
}

impl fmt::Display for PredicateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for PredicateKey {
    type Err = LocatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(PredicateKey::Id),
            "class" => Ok(PredicateKey::Class),
            "type" => Ok(PredicateKey::Type),
            "name" => Ok(PredicateKey::Name),
            "offset" => Ok(PredicateKey::Offset),
            "subname" => Ok(PredicateKey::Subname),
            "index" => Ok(PredicateKey::Index),
            "handle" => Ok(PredicateKey::Handle),
            "depth" => Ok(PredicateKey::Depth),
            "path" => Ok(PredicateKey::Path),
            "desktop" => Ok(PredicateKey::Desktop),
            "executable" => Ok(PredicateKey::Executable),
            "regex" => Ok(PredicateKey::Regex),
            "process" => Ok(PredicateKey::Process),
            _ => Err(LocatorError::InvalidArgument(format!(
                "Unknown predicate key: \"{s}\". Use one of 'id', 'class', 'type', 'name' or 'offset'."
            ))),
        }
    }
}

/// Control kinds a `type` predicate can target
///
/// Tags are case-sensitive and emitted bare, never quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlType {
    Button,
    Edit,
    Combobox,
}

impl ControlType {
    /// The tag emitted in serialized queries
    pub fn as_tag(&self) -> &'static str {
        match self {
            ControlType::Button => "Button",
            ControlType::Edit => "Edit",
            ControlType::Combobox => "Combobox",
        }
    }
}

impl fmt::Display for ControlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for ControlType {
    type Err = LocatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Button" => Ok(ControlType::Button),
            "Edit" => Ok(ControlType::Edit),
            "Combobox" => Ok(ControlType::Combobox),
            _ => Err(LocatorError::InvalidArgument(format!(
                "Unknown control type: \"{s}\". Use one of 'Button', 'Edit' or 'Combobox'."
            ))),
        }
    }
}

/// The value side of a single predicate
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PredicateValue {
    /// Free text
    Text(String),
    /// A control kind, for `type` predicates
    Control(ControlType),
}

impl From<&str> for PredicateValue {
    fn from(s: &str) -> Self {
        PredicateValue::Text(s.to_string())
    }
}

impl From<String> for PredicateValue {
    fn from(s: String) -> Self {
        PredicateValue::Text(s)
    }
}

impl From<ControlType> for PredicateValue {
    fn from(control: ControlType) -> Self {
        PredicateValue::Control(control)
    }
}

impl fmt::Display for PredicateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // empty values and values with space characters must be quoted
            PredicateValue::Text(s) if s.is_empty() || s.contains(' ') => write!(f, "\"{s}\""),
            PredicateValue::Text(s) => f.write_str(s),
            PredicateValue::Control(control) => f.write_str(control.as_tag()),
        }
    }
}
