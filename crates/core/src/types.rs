use indexmap::IndexMap;
use serde::Deserialize;

/// 宿主侧的变量 id（不透明字符串）
pub type VariableId = String;

/// 输入：宿主提供的变量集合记录
///
/// 每次导出时由宿主查询 API 提供，只读。
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCollection {
    pub name: String,
    /// mode 序列，顺序由宿主决定
    pub modes: Vec<Mode>,
    /// 集合内变量的 id 列表，顺序由宿主决定
    pub variable_ids: Vec<VariableId>,
}

/// 集合内的一个变体（如 "Desktop"、"Dark Mode"）
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mode {
    pub mode_id: String,
    pub name: String,
}

impl Mode {
    pub fn new(mode_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            mode_id: mode_id.into(),
            name: name.into(),
        }
    }
}

/// 输入：宿主提供的单个变量记录（按 id 查询）
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVariable {
    pub name: String,
    pub resolved_type: ResolvedType,
    /// modeId → 该 mode 下的值。缺失表示变量在该 mode 下未定义
    #[serde(default)]
    pub values_by_mode: IndexMap<String, VariableValue>,
}

/// 宿主的变量类型标签
///
/// 只有 FLOAT 和 COLOR 参与导出，其余标签（STRING、BOOLEAN 及未来新增）
/// 一律折叠为 `Other` 并被处理器跳过。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ResolvedType {
    Float,
    Color,
    Other,
}

impl From<String> for ResolvedType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "FLOAT" => ResolvedType::Float,
            "COLOR" => ResolvedType::Color,
            _ => ResolvedType::Other,
        }
    }
}

/// 单个 mode 下的变量值
///
/// 宿主的 JSON 形态：数字、`{r,g,b,a}` 颜色对象，
/// 或 `{"type":"VARIABLE_ALIAS","id":...}` 别名引用。
/// 其余形态（字符串、布尔等）落入 `Unsupported`，由处理器静默跳过，
/// 避免单个不支持的变量导致整份快照反序列化失败。
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "ValueRepr")]
pub enum VariableValue {
    Float(f64),
    Color(Rgba),
    /// 单层别名引用，指向另一个变量
    Alias(VariableId),
    Unsupported(serde_json::Value),
}

/// `VariableValue` 的 JSON 线上形态（仅用于反序列化）
#[derive(Deserialize)]
#[serde(untagged)]
enum ValueRepr {
    Float(f64),
    Color(Rgba),
    Alias {
        #[serde(rename = "type")]
        _tag: AliasTag,
        id: VariableId,
    },
    Unsupported(serde_json::Value),
}

#[derive(Deserialize)]
enum AliasTag {
    #[serde(rename = "VARIABLE_ALIAS")]
    VariableAlias,
}

impl From<ValueRepr> for VariableValue {
    fn from(repr: ValueRepr) -> Self {
        match repr {
            ValueRepr::Float(n) => VariableValue::Float(n),
            ValueRepr::Color(c) => VariableValue::Color(c),
            ValueRepr::Alias { id, .. } => VariableValue::Alias(id),
            ValueRepr::Unsupported(v) => VariableValue::Unsupported(v),
        }
    }
}

/// RGBA 颜色，各通道取值 [0, 1]
///
/// 宿主偶尔省略 alpha（纯 RGB 载荷），按完全不透明处理。
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

impl Rgba {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

/// media query 条件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaQueryKind {
    MinWidth,
    PrefersColorScheme,
}

impl MediaQueryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaQueryKind::MinWidth => "min-width",
            MediaQueryKind::PrefersColorScheme => "prefers-color-scheme",
        }
    }
}

impl std::fmt::Display for MediaQueryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 一个 VariableSet 的 media query 上下文
///
/// `value` 为 None 表示无条件输出（裸 `:root` 块）。
#[derive(Debug, Clone, PartialEq)]
pub struct MediaQuery {
    pub kind: MediaQueryKind,
    pub value: Option<String>,
}

/// 一个 (collection, mode) 对解析出的 CSS 声明集
///
/// `variables` 保持写入顺序；同名后写覆盖先写（保留首次写入的位置）。
#[derive(Debug, Clone, PartialEq)]
pub struct VariableSet {
    pub media_query: MediaQuery,
    /// CSS 自定义属性名 → CSS 值文本
    pub variables: IndexMap<String, String>,
}

impl VariableSet {
    pub fn new(media_query: MediaQuery) -> Self {
        Self {
            media_query,
            variables: IndexMap::new(),
        }
    }
}

/// 规范中间模型：集合名 → 该集合的 VariableSet 序列（每个 mode 一个）
///
/// 插入顺序即处理顺序，序列化按此顺序输出。
pub type VariableSetCollection = IndexMap<String, Vec<VariableSet>>;
