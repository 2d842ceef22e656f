use crate::types::Rgba;

/// 将 RGBA 颜色编码为最短的等价 CSS 文本
///
/// - alpha 恰好为 1 → 6 位小写 hex（`#ff0000`）
/// - 其余 → `rgba(R, G, B, A)`，alpha 固定 4 位小数（`rgba(255, 0, 0, 0.5000)`）
///
/// 通道按 `round(c * 255)` 取整，舍入方式为 round-half-away-from-zero
/// （`f64::round`，与 JS `Math.round` 在非负输入上一致）。
/// 不做范围校验：越界通道按算术结果原样输出，不截断。
pub fn encode(color: &Rgba) -> String {
    if color.a == 1.0 {
        return format!(
            "#{:02x}{:02x}{:02x}",
            channel_byte(color.r),
            channel_byte(color.g),
            channel_byte(color.b)
        );
    }

    format!(
        "rgba({}, {}, {}, {:.4})",
        channel_byte(color.r),
        channel_byte(color.g),
        channel_byte(color.b),
        color.a
    )
}

/// [0,1] 通道 → 0-255 整数（不截断，越界值原样放大）
fn channel_byte(channel: f64) -> i64 {
    (channel * 255.0).round() as i64
}
