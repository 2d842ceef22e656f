use pretty_assertions::assert_eq;
use varcast_core::VariableSnapshot;
use varcast_export::export_css;

fn snapshot(json: &str) -> VariableSnapshot {
    serde_json::from_str(json).expect("snapshot fixture should parse")
}

#[test]
fn test_spacing_tokens_end_to_end() {
    // 1. 单集合、单 mode、单 FLOAT 变量的最小快照
    let snap = snapshot(
        r#"{
            "collections": [
                {
                    "name": "Spacing Tokens",
                    "modes": [{ "modeId": "1:0", "name": "Base" }],
                    "variableIds": ["VariableID:1"]
                }
            ],
            "variables": {
                "VariableID:1": {
                    "name": "Gap/Small",
                    "resolvedType": "FLOAT",
                    "valuesByMode": { "1:0": 8 }
                }
            }
        }"#,
    );

    // 2. 导出并逐字节比对
    let css = export_css(&snap);
    assert_eq!(css, "/* Spacing Tokens */\n:root {\n  --gap-small: 0.5rem;\n}\n\n");
}

#[test]
fn test_light_block_precedes_dark_block_regardless_of_input_order() {
    // Dark Mode 在宿主 mode 序列里排第一，输出仍应后置
    let snap = snapshot(
        r#"{
            "collections": [
                {
                    "name": "Color Tokens",
                    "modes": [
                        { "modeId": "1:1", "name": "Dark Mode" },
                        { "modeId": "1:0", "name": "Light Mode" }
                    ],
                    "variableIds": ["VariableID:1"]
                }
            ],
            "variables": {
                "VariableID:1": {
                    "name": "Surface",
                    "resolvedType": "COLOR",
                    "valuesByMode": {
                        "1:0": { "r": 1, "g": 1, "b": 1, "a": 1 },
                        "1:1": { "r": 0, "g": 0, "b": 0, "a": 1 }
                    }
                }
            }
        }"#,
    );

    let css = export_css(&snap);
    assert_eq!(
        css,
        "/* Color Tokens */\n\
         :root {\n  --surface: #ffffff;\n}\n\n\
         @media (prefers-color-scheme: dark) {\n  :root {\n    --surface: #000000;\n  }\n}\n\n"
    );
}

#[test]
fn test_full_export_with_aliases_and_breakpoints() {
    let snap = snapshot(
        r#"{
            "collections": [
                {
                    "name": "Color Tokens",
                    "modes": [{ "modeId": "1:0", "name": "Light Mode" }],
                    "variableIds": ["VariableID:1", "VariableID:2"]
                },
                {
                    "name": "Theming",
                    "modes": [{ "modeId": "2:0", "name": "Base" }],
                    "variableIds": ["VariableID:3"]
                },
                {
                    "name": "Breakpoints",
                    "modes": [
                        { "modeId": "3:0", "name": "Mobile" },
                        { "modeId": "3:1", "name": "Desktop" }
                    ],
                    "variableIds": ["VariableID:4"]
                },
                {
                    "name": "Random Tokens",
                    "modes": [{ "modeId": "4:0", "name": "Base" }],
                    "variableIds": ["VariableID:1"]
                }
            ],
            "variables": {
                "VariableID:1": {
                    "name": "Brand/Primary",
                    "resolvedType": "COLOR",
                    "valuesByMode": { "1:0": { "r": 1, "g": 0, "b": 0, "a": 1 } }
                },
                "VariableID:2": {
                    "name": "Brand/Overlay",
                    "resolvedType": "COLOR",
                    "valuesByMode": { "1:0": { "r": 1, "g": 0, "b": 0, "a": 0.5 } }
                },
                "VariableID:3": {
                    "name": "Button/Background",
                    "resolvedType": "COLOR",
                    "valuesByMode": { "2:0": { "type": "VARIABLE_ALIAS", "id": "VariableID:1" } }
                },
                "VariableID:4": {
                    "name": "Page/Gutter",
                    "resolvedType": "FLOAT",
                    "valuesByMode": { "3:0": 16, "3:1": 48 }
                }
            }
        }"#,
    );

    let css = export_css(&snap);
    assert_eq!(
        css,
        "/* Color Tokens */\n\
         :root {\n  --brand-primary: #ff0000;\n  --brand-overlay: rgba(255, 0, 0, 0.5000);\n}\n\n\
         /* Theming */\n\
         :root {\n  --button-background: var(--brand-primary);\n}\n\n\
         /* Breakpoints */\n\
         :root {\n  --page-gutter: 1rem;\n}\n\n\
         @media (min-width: 64em) {\n  :root {\n    --page-gutter: 3rem;\n  }\n}\n\n"
    );

    // 白名单外的集合不应出现
    assert!(!css.contains("Random Tokens"));
}

#[test]
fn test_export_is_byte_deterministic() {
    let snap = snapshot(
        r#"{
            "collections": [
                {
                    "name": "Color Tokens",
                    "modes": [
                        { "modeId": "1:0", "name": "Light Mode" },
                        { "modeId": "1:1", "name": "Dark Mode" }
                    ],
                    "variableIds": ["VariableID:1"]
                }
            ],
            "variables": {
                "VariableID:1": {
                    "name": "Surface",
                    "resolvedType": "COLOR",
                    "valuesByMode": {
                        "1:0": { "r": 1, "g": 1, "b": 1, "a": 1 },
                        "1:1": { "r": 0.1, "g": 0.1, "b": 0.1, "a": 1 }
                    }
                }
            }
        }"#,
    );

    let first = export_css(&snap);
    let second = export_css(&snap);
    assert_eq!(first, second);
}

#[test]
fn test_empty_snapshot_exports_empty_string() {
    let snap = VariableSnapshot::default();
    assert_eq!(export_css(&snap), "");
}
