//! Source record shapes for the seven pre-crawled API collections.
//!
//! Each collection file on disk is a [`DataFile`]: a metadata header followed
//! by an ordered list of domain records. The structs here mirror the wire
//! shape one-to-one; localized fields use the `_cn` suffix on the wire and are
//! renamed to `localized_*` here. Every field that can be absent in older
//! captures carries `#[serde(default)]` so a sparse record degrades to empty
//! match fields instead of failing the whole load.

use serde::Deserialize;

/// Header describing where a collection came from and when it was captured.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Metadata {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub source: String,
    #[serde(rename = "crawledAt")]
    pub crawled_at: Option<String>,
    #[serde(default)]
    pub count: usize,
    pub translated_at: Option<String>,
    pub model: Option<String>,
    #[serde(rename = "recommendedCount")]
    pub recommended_count: Option<usize>,
}

/// One collection file: metadata header plus the ordered record list.
#[derive(Debug, Deserialize)]
pub struct DataFile<T> {
    #[serde(default)]
    pub metadata: Metadata,
    pub items: Vec<T>,
}

/// A parameter of a scripting-API method or standalone function.
#[derive(Debug, Clone, Deserialize)]
pub struct LuaParameter {
    pub name: String,
    #[serde(rename = "type", default)]
    pub param_type: String,
    #[serde(rename = "isOptional", default)]
    pub is_optional: bool,
    #[serde(rename = "description_cn")]
    pub localized_description: Option<String>,
}

/// A method nested under a scripting-API class.
#[derive(Debug, Clone, Deserialize)]
pub struct LuaMethod {
    pub name: String,
    #[serde(default)]
    pub signature: String,
    pub description: Option<String>,
    #[serde(default)]
    pub server: bool,
    #[serde(default)]
    pub client: bool,
    #[serde(default)]
    pub parameters: Vec<LuaParameter>,
    #[serde(rename = "returnType", default)]
    pub return_type: String,
    #[serde(rename = "name_cn")]
    pub localized_name: Option<String>,
    #[serde(rename = "description_cn")]
    pub localized_description: Option<String>,
    #[serde(default)]
    pub deprecated: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A scripting-API class and its methods.
#[derive(Debug, Clone, Deserialize)]
pub struct LuaClass {
    pub name: String,
    pub extends: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub server: bool,
    #[serde(default)]
    pub client: bool,
    #[serde(rename = "name_cn")]
    pub localized_name: Option<String>,
    #[serde(rename = "description_cn")]
    pub localized_description: Option<String>,
    #[serde(default)]
    pub methods: Vec<LuaMethod>,
    #[serde(default)]
    pub deprecated: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A standalone scripting-API function (same shape family as [`LuaMethod`]).
#[derive(Debug, Clone, Deserialize)]
pub struct LuaFunction {
    pub name: String,
    #[serde(default)]
    pub signature: String,
    pub description: Option<String>,
    #[serde(default)]
    pub server: bool,
    #[serde(default)]
    pub client: bool,
    #[serde(default)]
    pub parameters: Vec<LuaParameter>,
    #[serde(rename = "returnType", default)]
    pub return_type: String,
    #[serde(rename = "name_cn")]
    pub localized_name: Option<String>,
    #[serde(rename = "description_cn")]
    pub localized_description: Option<String>,
    #[serde(default)]
    pub deprecated: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LuaEnumMember {
    pub name: String,
    #[serde(default)]
    pub value: i64,
    pub description: Option<String>,
    #[serde(rename = "description_cn")]
    pub localized_description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LuaEnum {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub members: Vec<LuaEnumMember>,
    #[serde(rename = "name_cn")]
    pub localized_name: Option<String>,
    #[serde(rename = "description_cn")]
    pub localized_description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A scripting-API constant. The value is kept as raw JSON since captures
/// contain both numeric and string constants.
#[derive(Debug, Clone, Deserialize)]
pub struct LuaConstant {
    pub name: String,
    #[serde(default)]
    pub value: serde_json::Value,
    #[serde(rename = "valueType", default)]
    pub value_type: String,
    #[serde(rename = "name_cn")]
    pub localized_name: Option<String>,
    #[serde(rename = "description_cn")]
    pub localized_description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventParameter {
    pub name: String,
    #[serde(rename = "type", default)]
    pub param_type: String,
    #[serde(rename = "description_cn")]
    pub localized_description: Option<String>,
}

/// A game event dispatched by the engine to scripting listeners.
#[derive(Debug, Clone, Deserialize)]
pub struct GameEvent {
    pub name: String,
    #[serde(default)]
    pub signature: String,
    pub description: Option<String>,
    #[serde(default)]
    pub parameters: Vec<EventParameter>,
    #[serde(rename = "isRecommended", default)]
    pub recommended: bool,
    #[serde(rename = "name_cn")]
    pub localized_name: Option<String>,
    #[serde(rename = "description_cn")]
    pub localized_description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A member of a UI-framework enum. Some members map to a panel method.
#[derive(Debug, Clone, Deserialize)]
pub struct UiEnumMember {
    pub name: String,
    #[serde(default)]
    pub value: i64,
    pub description: Option<String>,
    #[serde(rename = "methodName")]
    pub method_name: Option<String>,
    #[serde(rename = "description_cn")]
    pub localized_description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiEnum {
    pub name: String,
    #[serde(default)]
    pub members: Vec<UiEnumMember>,
    #[serde(rename = "name_cn")]
    pub localized_name: Option<String>,
    #[serde(rename = "description_cn")]
    pub localized_description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiEventParameter {
    pub name: String,
    #[serde(rename = "type", default)]
    pub param_type: String,
    #[serde(rename = "description_cn")]
    pub localized_description: Option<String>,
}

/// A UI-framework event panels can fire or subscribe to.
#[derive(Debug, Clone, Deserialize)]
pub struct UiEvent {
    pub name: String,
    #[serde(default)]
    pub signature: String,
    pub description: Option<String>,
    #[serde(default)]
    pub parameters: Vec<UiEventParameter>,
    #[serde(rename = "name_cn")]
    pub localized_name: Option<String>,
    #[serde(rename = "description_cn")]
    pub localized_description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}
