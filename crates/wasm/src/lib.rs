use wasm_bindgen::prelude::*;
use serde::{Deserialize, Serialize};

use varcast_core::VariableSnapshot;
use varcast_export::export_css as rs_export_css;

// ── JS 侧 serde 镜像类型 ──────────────────────────────────────

/// UI → 插件的入站消息（无载荷触发）
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
enum JsUiMessage {
    Export,
}

/// 插件 → UI 的出站消息
#[derive(Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
enum JsPluginMessage {
    #[serde(rename_all = "camelCase")]
    ExportResult { css: String },
}

// ── 边界辅助 ──────────────────────────────────────────────────

fn parse_snapshot(snapshot: JsValue) -> Result<VariableSnapshot, JsError> {
    serde_wasm_bindgen::from_value(snapshot)
        .map_err(|e| JsError::new(&format!("Invalid snapshot: {}", e)))
}

// ── WASM 导出函数 ─────────────────────────────────────────────

/// 初始化 panic hook（自动调用）
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 从宿主快照导出 CSS 文本
///
/// @param snapshot - `{ collections, variables }` 快照对象
/// @returns 生成的 CSS 字符串
///
/// 快照损坏时整体失败（JsError），不产出部分结果；
/// 快照内查不到的数据由流水线静默省略。
#[wasm_bindgen(js_name = "exportCss")]
pub fn export_css(snapshot: JsValue) -> Result<String, JsError> {
    let snapshot = parse_snapshot(snapshot)?;
    Ok(rs_export_css(&snapshot))
}

/// 处理一条 UI 消息，返回应回传 UI 的消息对象
///
/// @param message  - 入站消息，目前仅 `{ type: "EXPORT" }`
/// @param snapshot - 宿主快照对象
/// @returns `{ type: "EXPORT_RESULT", css }`
#[wasm_bindgen(js_name = "handleUiMessage")]
pub fn handle_ui_message(message: JsValue, snapshot: JsValue) -> Result<JsValue, JsError> {
    let JsUiMessage::Export = serde_wasm_bindgen::from_value(message)
        .map_err(|e| JsError::new(&format!("Unknown message: {}", e)))?;

    let snapshot = parse_snapshot(snapshot)?;
    let reply = JsPluginMessage::ExportResult {
        css: rs_export_css(&snapshot),
    };

    serde_wasm_bindgen::to_value(&reply)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
