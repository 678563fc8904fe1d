//! Flattening the source collections into the uniform search record set.
//!
//! This is a pure transform: each source variant has one total mapping
//! function, so every field mapping is explicit per variant rather than a
//! sequence of structural presence checks. Parent records (classes, enums)
//! produce one record for themselves plus one independent record per child;
//! parent and child share only a `target_path` prefix.

use crate::catalog::ApiCatalog;
use crate::model::{
    GameEvent, LuaClass, LuaConstant, LuaEnum, LuaEnumMember, LuaFunction, LuaMethod, UiEnum,
    UiEnumMember, UiEvent,
};
use crate::search::record::{RecordKind, Scope, SearchRecord};

/// Flatten the whole catalog into the searchable record list.
///
/// Order is deterministic (collection order, then source order within each
/// collection); it does not affect correctness, only tie determinism.
pub fn collect_records(catalog: &ApiCatalog) -> Vec<SearchRecord> {
    let mut records = Vec::with_capacity(catalog.source_count());

    for class in &catalog.classes {
        records.push(class_record(class));
        for method in &class.methods {
            records.push(method_record(class, method));
        }
    }
    for function in &catalog.functions {
        records.push(function_record(function));
    }
    for enumeration in &catalog.enums {
        records.push(enum_record(enumeration));
        for member in &enumeration.members {
            records.push(enum_member_record(enumeration, member));
        }
    }
    for constant in &catalog.constants {
        records.push(constant_record(constant));
    }
    for event in &catalog.game_events {
        records.push(event_record(event));
    }
    for enumeration in &catalog.ui_enums {
        records.push(ui_enum_record(enumeration));
        for member in &enumeration.members {
            records.push(ui_enum_member_record(enumeration, member));
        }
    }
    for event in &catalog.ui_events {
        records.push(ui_event_record(event));
    }

    records
}

fn class_record(class: &LuaClass) -> SearchRecord {
    SearchRecord {
        name: class.name.clone(),
        localized_name: non_empty(class.localized_name.as_deref()),
        kind: RecordKind::Class,
        category: "Classes",
        scope: Scope::LuaApi,
        target_path: format!("/lua-api/classes/{}", class.name),
        description: non_empty(class.localized_description.as_deref()),
        keywords: join_words(class.methods.iter().map(|m| m.name.as_str())),
    }
}

/// Method records stand on their own: they carry the method's fields only,
/// never the parent class's description or keywords.
fn method_record(class: &LuaClass, method: &LuaMethod) -> SearchRecord {
    SearchRecord {
        name: format!("{}.{}", class.name, method.name),
        localized_name: non_empty(method.localized_name.as_deref()),
        kind: RecordKind::Function,
        category: "Methods",
        scope: Scope::LuaApi,
        target_path: format!("/lua-api/classes/{}#{}", class.name, method.name),
        description: non_empty(method.localized_description.as_deref()),
        keywords: join_words(method.parameters.iter().map(|p| p.name.as_str())),
    }
}

fn function_record(function: &LuaFunction) -> SearchRecord {
    SearchRecord {
        name: function.name.clone(),
        localized_name: non_empty(function.localized_name.as_deref()),
        kind: RecordKind::Function,
        category: "Functions",
        scope: Scope::LuaApi,
        target_path: format!("/lua-api/functions/{}", function.name),
        description: non_empty(function.localized_description.as_deref()),
        keywords: join_words(function.parameters.iter().map(|p| p.name.as_str())),
    }
}

fn enum_record(enumeration: &LuaEnum) -> SearchRecord {
    SearchRecord {
        name: enumeration.name.clone(),
        localized_name: non_empty(enumeration.localized_name.as_deref()),
        kind: RecordKind::Enum,
        category: "Enums",
        scope: Scope::LuaApi,
        target_path: format!("/lua-api/enums/{}", enumeration.name),
        description: non_empty(enumeration.localized_description.as_deref()),
        keywords: join_words(
            enumeration
                .members
                .iter()
                .map(|m| format!("{} {}", m.name, m.value)),
        ),
    }
}

/// Members have no localized name of their own; their localized description
/// serves as one, which is what makes them findable by translated text.
fn enum_member_record(enumeration: &LuaEnum, member: &LuaEnumMember) -> SearchRecord {
    SearchRecord {
        name: member.name.clone(),
        localized_name: non_empty(member.localized_description.as_deref()),
        kind: RecordKind::Enum,
        category: "Enum Members",
        scope: Scope::LuaApi,
        target_path: format!("/lua-api/enums/{}#{}", enumeration.name, member.name),
        description: Some(member_description(
            enumeration.localized_name.as_deref(),
            &enumeration.name,
            member.value,
        )),
        keywords: None,
    }
}

fn constant_record(constant: &LuaConstant) -> SearchRecord {
    SearchRecord {
        name: constant.name.clone(),
        localized_name: non_empty(constant.localized_name.as_deref()),
        kind: RecordKind::Constant,
        category: "Constants",
        scope: Scope::LuaApi,
        target_path: format!("/lua-api/constants/{}", constant.name),
        description: non_empty(constant.localized_description.as_deref()),
        keywords: value_keyword(&constant.value),
    }
}

fn event_record(event: &GameEvent) -> SearchRecord {
    SearchRecord {
        name: event.name.clone(),
        localized_name: non_empty(event.localized_name.as_deref()),
        kind: RecordKind::Event,
        category: "Game Events",
        scope: Scope::GameEvents,
        target_path: format!("/game-events/{}", event.name),
        description: non_empty(event.localized_description.as_deref()),
        keywords: join_words(event.parameters.iter().map(|p| p.name.as_str())),
    }
}

fn ui_enum_record(enumeration: &UiEnum) -> SearchRecord {
    SearchRecord {
        name: enumeration.name.clone(),
        localized_name: non_empty(enumeration.localized_name.as_deref()),
        kind: RecordKind::UiEnum,
        category: "UI Enums",
        scope: Scope::UiApi,
        target_path: format!("/ui-api/{}", enumeration.name),
        description: non_empty(enumeration.localized_description.as_deref()),
        keywords: join_words(
            enumeration
                .members
                .iter()
                .map(|m| format!("{} {}", m.name, m.value)),
        ),
    }
}

fn ui_enum_member_record(enumeration: &UiEnum, member: &UiEnumMember) -> SearchRecord {
    SearchRecord {
        name: member.name.clone(),
        localized_name: non_empty(member.localized_description.as_deref()),
        kind: RecordKind::UiEnum,
        category: "UI Enum Members",
        scope: Scope::UiApi,
        target_path: format!("/ui-api/{}#{}", enumeration.name, member.name),
        description: Some(member_description(
            enumeration.localized_name.as_deref(),
            &enumeration.name,
            member.value,
        )),
        keywords: None,
    }
}

fn ui_event_record(event: &UiEvent) -> SearchRecord {
    SearchRecord {
        name: event.name.clone(),
        localized_name: non_empty(event.localized_name.as_deref()),
        kind: RecordKind::UiEvent,
        category: "UI Events",
        scope: Scope::UiEvents,
        target_path: format!("/ui-events/{}", event.name),
        description: non_empty(event.localized_description.as_deref()),
        keywords: join_words(event.parameters.iter().map(|p| p.name.as_str())),
    }
}

/// Synthesized description for enum member records: the parent enum's
/// localized name (falling back to its identifier) plus the member's value.
fn member_description(localized: Option<&str>, fallback: &str, value: i64) -> String {
    let label = localized
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or(fallback);
    format!("{label} - value: {value}")
}

/// Space-join auxiliary terms into a keywords field; empty input means no
/// keywords field at all.
fn join_words<I>(words: I) -> Option<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut joined = String::new();
    for word in words {
        let word = word.as_ref().trim();
        if word.is_empty() {
            continue;
        }
        if !joined.is_empty() {
            joined.push(' ');
        }
        joined.push_str(word);
    }
    (!joined.is_empty()).then_some(joined)
}

/// String form of a constant's value, usable as a keyword.
fn value_keyword(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(text) => non_empty(Some(text.as_str())),
        other => Some(other.to_string()),
    }
}

/// Treat blank localized fields the same as absent ones.
fn non_empty(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
}
