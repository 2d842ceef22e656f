pub mod emit;
pub mod media;
pub mod processor;

// Re-exports
pub use emit::emit_css;
pub use media::{media_query_for_mode, DESKTOP_BREAKPOINT};
pub use processor::{process_collections, REM_BASE_PX};

use varcast_core::{VariableSnapshot, VariableSource};

/// 从宿主快照一步导出 CSS 文本
///
/// 解析（集合过滤 + 逐 mode 求值）再序列化（media query 分组排序）。
/// 流水线内部不产生错误：查不到的数据一律静默省略，
/// 快照本身损坏与否由边界层（反序列化）把关。
///
/// # 示例
///
/// ```
/// use varcast_core::VariableSnapshot;
/// use varcast_export::export_css;
///
/// let snapshot: VariableSnapshot = serde_json::from_str(r#"{
///     "collections": [{
///         "name": "Spacing Tokens",
///         "modes": [{ "modeId": "1:0", "name": "Base" }],
///         "variableIds": ["VariableID:1"]
///     }],
///     "variables": {
///         "VariableID:1": {
///             "name": "Gap/Small",
///             "resolvedType": "FLOAT",
///             "valuesByMode": { "1:0": 8 }
///         }
///     }
/// }"#).unwrap();
///
/// let css = export_css(&snapshot);
/// assert_eq!(css, "/* Spacing Tokens */\n:root {\n  --gap-small: 0.5rem;\n}\n\n");
/// ```
pub fn export_css(snapshot: &VariableSnapshot) -> String {
    let variable_sets = process_collections(snapshot.collections(), snapshot);
    emit_css(&variable_sets)
}
