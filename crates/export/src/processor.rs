//! 集合 → 规范中间模型（VariableSetCollection）的解析器
//!
//! 对每个允许导出的集合，按宿主给定的 mode 顺序逐一解析变量值：
//! 别名解引用、px → rem 换算、颜色编码。所有查不到/不支持的情况
//! 一律静默跳过，不产生条目也不报错。

use phf::{phf_set, Set};
use varcast_core::color::encode;
use varcast_core::naming::normalize;
use varcast_core::{
    RawCollection, ResolvedType, VariableSet, VariableSetCollection, VariableSource,
    VariableValue,
};

use crate::media::media_query_for_mode;

/// px → rem 的换算基准，固定 16px（非配置项）
pub const REM_BASE_PX: f64 = 16.0;

/// 允许导出的集合名（固定白名单）
static EXPORTED_COLLECTIONS: Set<&'static str> = phf_set! {
    "Color Tokens",
    "Spacing Tokens",
    "Theming",
    "Breakpoints",
};

/// 将宿主集合解析为规范中间模型
///
/// - 白名单外的集合整体跳过；
/// - 白名单内零 mode 的集合仍以空序列占位；
/// - 变量缺失、类型不支持、该 mode 无值、别名目标缺失 → 静默省略；
/// - 同名规范化冲突时后写覆盖先写（保留首次写入位置）。
pub fn process_collections(
    collections: &[RawCollection],
    source: &dyn VariableSource,
) -> VariableSetCollection {
    let mut result = VariableSetCollection::new();

    for collection in collections {
        if !EXPORTED_COLLECTIONS.contains(collection.name.as_str()) {
            continue;
        }

        let mut variable_sets = Vec::with_capacity(collection.modes.len());

        for mode in &collection.modes {
            let mut set = VariableSet::new(media_query_for_mode(&mode.name));

            for variable_id in &collection.variable_ids {
                let Some(variable) = source.variable_by_id(variable_id) else {
                    continue;
                };
                if !matches!(
                    variable.resolved_type,
                    ResolvedType::Float | ResolvedType::Color
                ) {
                    continue;
                }
                let Some(value) = variable.values_by_mode.get(&mode.mode_id) else {
                    continue;
                };

                let name = normalize(&variable.name);
                match value {
                    VariableValue::Alias(target_id) => {
                        // 目标不存在则整条省略
                        if let Some(target) = source.variable_by_id(target_id) {
                            set.variables
                                .insert(name, format!("var({})", normalize(&target.name)));
                        }
                    }
                    VariableValue::Float(px) => {
                        set.variables.insert(name, px_to_rem(*px));
                    }
                    VariableValue::Color(color) => {
                        set.variables.insert(name, encode(color));
                    }
                    VariableValue::Unsupported(_) => {}
                }
            }

            variable_sets.push(set);
        }

        result.insert(collection.name.clone(), variable_sets);
    }

    result
}

/// px 值 → rem 文本（纯除法，不舍入）
fn px_to_rem(px: f64) -> String {
    format!("{}rem", px / REM_BASE_PX)
}
