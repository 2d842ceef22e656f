//! 中间模型 → 最终 CSS 文本
//!
//! 输出是逐字节确定的文本契约：缩进、换行、块间空行都固定，
//! 同一份输入序列化任意多次得到完全相同的字符串。

use varcast_core::{VariableSet, VariableSetCollection};

/// 裸 `:root` 块内的声明缩进
const INDENT: &str = "  ";
/// `@media` 包裹时多一层嵌套的声明缩进
const INDENT_NESTED: &str = "    ";

/// 将整个中间模型渲染为 CSS 文本
///
/// 每个集合按插入顺序输出 `/* 集合名 */` 注释行加各 VariableSet 块。
/// 集合内先按"是否带 media query 值"稳定排序：无值的裸 `:root` 块在前，
/// 带值的 `@media` 块在后，组内保持原 mode 顺序。
pub fn emit_css(collection: &VariableSetCollection) -> String {
    let mut output = String::new();

    for (collection_name, variable_sets) in collection {
        // sort_by_key 是稳定排序，false (无值) 排在 true (有值) 前
        let mut ordered: Vec<&VariableSet> = variable_sets.iter().collect();
        ordered.sort_by_key(|set| set.media_query.value.is_some());

        output.push_str(&format!("/* {} */\n", collection_name));
        for set in ordered {
            output.push_str(&emit_variable_set(set));
        }
    }

    output
}

/// 渲染单个 VariableSet 块
fn emit_variable_set(set: &VariableSet) -> String {
    match &set.media_query.value {
        Some(value) => format!(
            "@media ({}: {}) {{\n  :root {{{}\n  }}\n}}\n\n",
            set.media_query.kind,
            value,
            emit_declarations(set, INDENT_NESTED)
        ),
        None => format!(":root {{{}\n}}\n\n", emit_declarations(set, INDENT)),
    }
}

/// 渲染声明列表，每条前置换行和缩进
fn emit_declarations(set: &VariableSet, indent: &str) -> String {
    let mut output = String::new();

    for (name, value) in &set.variables {
        output.push_str(&format!("\n{}{}: {};", indent, name, value));
    }

    output
}
