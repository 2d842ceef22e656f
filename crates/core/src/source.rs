use indexmap::IndexMap;
use serde::Deserialize;

use crate::types::{RawCollection, RawVariable, VariableId};

/// 宿主变量查询 API 的抽象
///
/// 对应宿主的 `listCollections()` / `getVariableById()`：同步、只读、
/// 可重复查询。按 id 查询以 `Option` 表达记录存在与否，
/// 查不到由调用方静默跳过，不是错误。
pub trait VariableSource {
    fn collections(&self) -> &[RawCollection];
    fn variable_by_id(&self, id: &str) -> Option<&RawVariable>;
}

/// 单次导出的宿主数据快照
///
/// 宿主在触发导出时一次性传入；导出完成后整体丢弃，不跨导出复用。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableSnapshot {
    #[serde(default)]
    pub collections: Vec<RawCollection>,
    /// 变量 id → 变量记录
    #[serde(default)]
    pub variables: IndexMap<VariableId, RawVariable>,
}

impl VariableSource for VariableSnapshot {
    fn collections(&self) -> &[RawCollection] {
        &self.collections
    }

    fn variable_by_id(&self, id: &str) -> Option<&RawVariable> {
        self.variables.get(id)
    }
}
