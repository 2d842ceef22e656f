//! mode 名 → media query 的固定映射
//!
//! 闭合的硬编码表：只认识 Desktop / Mobile / Dark Mode 三个 mode 名，
//! 其余一律落到无值的 prefers-color-scheme（合法但语义中性，不报错）。
//! 无值表示该 VariableSet 无条件输出（不包 `@media`）。

use phf::phf_map;
use varcast_core::{MediaQuery, MediaQueryKind};

/// Desktop 断点，固定 64em（非配置项）
pub const DESKTOP_BREAKPOINT: &str = "64em";

static MODE_MEDIA_QUERIES: phf::Map<&'static str, (MediaQueryKind, Option<&'static str>)> = phf_map! {
    "Desktop" => (MediaQueryKind::MinWidth, Some(DESKTOP_BREAKPOINT)),
    "Mobile" => (MediaQueryKind::MinWidth, None),
    "Dark Mode" => (MediaQueryKind::PrefersColorScheme, Some("dark")),
};

/// 由 mode 名得到 media query 描述
pub fn media_query_for_mode(mode_name: &str) -> MediaQuery {
    let (kind, value) = MODE_MEDIA_QUERIES
        .get(mode_name)
        .copied()
        .unwrap_or((MediaQueryKind::PrefersColorScheme, None));

    MediaQuery {
        kind,
        value: value.map(str::to_string),
    }
}
