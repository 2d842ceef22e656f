/// 基本使用示例：从 JSON 快照导出 CSS
///
/// 运行示例：
/// ```bash
/// cargo run --example export_snapshot -p varcast-export
/// ```
use varcast_core::VariableSnapshot;
use varcast_export::export_css;

fn main() {
    println!("=== varcast 导出示例 ===\n");

    // 1. 准备宿主快照（实际场景由插件边界传入）
    let snapshot_json = r#"{
        "collections": [
            {
                "name": "Color Tokens",
                "modes": [
                    { "modeId": "1:0", "name": "Light Mode" },
                    { "modeId": "1:1", "name": "Dark Mode" }
                ],
                "variableIds": ["VariableID:1", "VariableID:2"]
            },
            {
                "name": "Spacing Tokens",
                "modes": [
                    { "modeId": "2:0", "name": "Mobile" },
                    { "modeId": "2:1", "name": "Desktop" }
                ],
                "variableIds": ["VariableID:3"]
            },
            {
                "name": "Theming",
                "modes": [{ "modeId": "3:0", "name": "Base" }],
                "variableIds": ["VariableID:4"]
            }
        ],
        "variables": {
            "VariableID:1": {
                "name": "Brand/Primary",
                "resolvedType": "COLOR",
                "valuesByMode": {
                    "1:0": { "r": 0.2, "g": 0.4, "b": 1, "a": 1 },
                    "1:1": { "r": 0.4, "g": 0.6, "b": 1, "a": 1 }
                }
            },
            "VariableID:2": {
                "name": "Brand/Overlay",
                "resolvedType": "COLOR",
                "valuesByMode": {
                    "1:0": { "r": 0, "g": 0, "b": 0, "a": 0.4 },
                    "1:1": { "r": 1, "g": 1, "b": 1, "a": 0.4 }
                }
            },
            "VariableID:3": {
                "name": "Gap/Small",
                "resolvedType": "FLOAT",
                "valuesByMode": { "2:0": 8, "2:1": 12 }
            },
            "VariableID:4": {
                "name": "Button/Background",
                "resolvedType": "COLOR",
                "valuesByMode": { "3:0": { "type": "VARIABLE_ALIAS", "id": "VariableID:1" } }
            }
        }
    }"#;

    let snapshot: VariableSnapshot =
        serde_json::from_str(snapshot_json).expect("Failed to parse snapshot");
    println!(
        "✓ 加载快照：{} 个集合，{} 个变量",
        snapshot.collections.len(),
        snapshot.variables.len()
    );

    // 2. 导出
    let css = export_css(&snapshot);
    println!("\n生成的 CSS:\n{}", css);

    println!("=== 示例完成 ===");
}
