//! The normalized, flat record shape the index operates over.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which source variant produced a search record. Drives icon and label
/// selection in the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordKind {
    Class,
    Function,
    Enum,
    Constant,
    Event,
    UiEnum,
    UiEvent,
}

impl RecordKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Function => "function",
            Self::Enum => "enum",
            Self::Constant => "constant",
            Self::Event => "event",
            Self::UiEnum => "ui-enum",
            Self::UiEvent => "ui-event",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The navigational section a record belongs to, used to restrict queries
/// contextually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scope {
    LuaApi,
    GameEvents,
    UiApi,
    UiEvents,
}

impl Scope {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LuaApi => "lua-api",
            Self::GameEvents => "game-events",
            Self::UiApi => "ui-api",
            Self::UiEvents => "ui-events",
        }
    }

    /// Human-readable section title.
    pub const fn label(self) -> &'static str {
        match self {
            Self::LuaApi => "Lua API",
            Self::GameEvents => "Game Events",
            Self::UiApi => "UI API",
            Self::UiEvents => "UI Events",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The normalized, flat unit the index is built over and queries return.
///
/// `target_path` doubles as the record's identity: it is unique across the
/// full record set, and a member record's path extends its parent's path with
/// an `#anchor` suffix (path-prefix convention, no object references).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localized_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    pub category: &'static str,
    pub scope: Scope,
    pub target_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
}
