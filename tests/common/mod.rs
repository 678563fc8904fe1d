//! Shared test fixtures and utilities for integration tests.
//!
//! The sample corpus below is one JSON value per collection, in the exact
//! wire shape the crawler writes. `sample_catalog` parses it straight into
//! memory for search tests; `write_data_dir` lays it out as the seven data
//! files for loader tests. Keeping both paths on the same JSON means the
//! loader and the in-memory fixtures can never drift apart.

use dotadocs_search::model::DataFile;
use dotadocs_search::{ApiCatalog, SearchIndex};
use rstest::fixture;
use serde_json::{Value, json};
use std::path::Path;

#[allow(dead_code)] // Used across different integration test crates
pub fn classes_json() -> Value {
    json!({
        "metadata": {
            "type": "luaapi-classes",
            "source": "https://developer.valvesoftware.com/scripting-api",
            "crawledAt": "2025-11-02T10:00:00Z",
            "count": 2
        },
        "items": [
            {
                "name": "CDOTA_BaseNPC",
                "name_cn": "基础NPC",
                "description_cn": "所有单位与英雄的基类",
                "server": true,
                "client": true,
                "methods": [
                    {
                        "name": "SetHealth",
                        "signature": "SetHealth(amount: number): void",
                        "returnType": "void",
                        "parameters": [
                            {"name": "amount", "type": "number", "isOptional": false}
                        ]
                    },
                    {
                        "name": "GetHealth",
                        "signature": "GetHealth(): number",
                        "returnType": "number",
                        "name_cn": "获取生命值",
                        "description_cn": "返回单位当前生命值"
                    }
                ]
            },
            {
                "name": "CDOTA_Item",
                "name_cn": "物品",
                "description_cn": "可被单位持有的物品",
                "methods": [
                    {"name": "GetPurchaser", "returnType": "CDOTA_BaseNPC"}
                ]
            }
        ]
    })
}

#[allow(dead_code)]
pub fn functions_json() -> Value {
    json!({
        "metadata": {"type": "luaapi-functions", "source": "scripting-api", "count": 2},
        "items": [
            {
                "name": "CreateUnitByName",
                "name_cn": "按名称创建单位",
                "description_cn": "在指定位置创建一个单位",
                "parameters": [
                    {"name": "unit_name", "type": "string"},
                    {"name": "location", "type": "Vector"}
                ]
            },
            {
                "name": "GetGoldAmount",
                "description_cn": "返回玩家当前金钱"
            }
        ]
    })
}

#[allow(dead_code)]
pub fn enums_json() -> Value {
    json!({
        "metadata": {"type": "luaapi-enums", "source": "scripting-api", "count": 1},
        "items": [
            {
                "name": "DOTATeam_t",
                "name_cn": "队伍",
                "members": [
                    {"name": "DOTA_TEAM_GOODGUYS", "value": 2, "description_cn": "天辉"},
                    {"name": "DOTA_TEAM_BADGUYS", "value": 3, "description_cn": "夜魇"}
                ]
            }
        ]
    })
}

#[allow(dead_code)]
pub fn constants_json() -> Value {
    json!({
        "metadata": {"type": "luaapi-constants", "source": "scripting-api", "count": 1},
        "items": [
            {
                "name": "DOTA_ITEM_INVENTORY_SIZE",
                "value": 9,
                "valueType": "number",
                "description_cn": "物品栏格数"
            }
        ]
    })
}

#[allow(dead_code)]
pub fn game_events_json() -> Value {
    json!({
        "metadata": {"type": "gameevents", "source": "game-events", "count": 1},
        "items": [
            {
                "name": "entity_killed",
                "name_cn": "单位死亡",
                "description_cn": "单位被击杀时触发，可在 Lua 中监听",
                "parameters": [
                    {"name": "entindex_killed", "type": "short"},
                    {"name": "entindex_attacker", "type": "short"}
                ]
            }
        ]
    })
}

#[allow(dead_code)]
pub fn ui_enums_json() -> Value {
    json!({
        "metadata": {"type": "panoramaapi", "source": "ui-framework", "count": 1},
        "items": [
            {
                "name": "PanelEventType",
                "name_cn": "面板事件类型",
                "members": [
                    {"name": "PANEL_EVENT_ON_ACTIVATE", "value": 1, "methodName": "onactivate"}
                ]
            }
        ]
    })
}

#[allow(dead_code)]
pub fn ui_events_json() -> Value {
    json!({
        "metadata": {"type": "panoramaevents", "source": "ui-framework", "count": 1},
        "items": [
            {
                "name": "DOTAScenePanelSceneLoaded",
                "description_cn": "场景面板加载完成时触发",
                "parameters": [
                    {"name": "panel", "type": "Panel"}
                ]
            }
        ]
    })
}

#[allow(dead_code)]
fn items<T: serde::de::DeserializeOwned>(value: Value) -> Vec<T> {
    serde_json::from_value::<DataFile<T>>(value)
        .expect("fixture JSON matches the wire shape")
        .items
}

/// The sample corpus parsed into memory, skipping the filesystem.
#[allow(dead_code)]
pub fn sample_catalog() -> ApiCatalog {
    ApiCatalog {
        classes: items(classes_json()),
        functions: items(functions_json()),
        enums: items(enums_json()),
        constants: items(constants_json()),
        game_events: items(game_events_json()),
        ui_enums: items(ui_enums_json()),
        ui_events: items(ui_events_json()),
    }
}

/// An index over the sample corpus.
#[fixture]
#[allow(dead_code)]
pub fn sample_index() -> SearchIndex {
    SearchIndex::from_catalog(&sample_catalog())
}

/// Write the sample corpus as the seven data files under `dir`.
#[allow(dead_code)]
pub fn write_data_dir(dir: &Path) {
    let files = [
        ("luaapi/classes_cn.json", classes_json()),
        ("luaapi/functions_cn.json", functions_json()),
        ("luaapi/enums_cn.json", enums_json()),
        ("luaapi/constants.json", constants_json()),
        ("gameevents/events_cn.json", game_events_json()),
        ("panoramaapi/enums.json", ui_enums_json()),
        ("panoramaevents/events.json", ui_events_json()),
    ];

    for (relative, value) in files {
        let path = dir.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).expect("create data subdirectory");
        std::fs::write(&path, serde_json::to_string_pretty(&value).unwrap())
            .expect("write data file");
    }
}
