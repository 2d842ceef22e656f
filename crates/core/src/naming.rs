/// 将 token 名转换为合法的 CSS 自定义属性名
///
/// 规则：小写化，首个 `/` 和首个空格各替换为 `-`，再加 `--` 前缀。
/// 只替换首次出现（非全局替换）：`Brand/Primary/Dark` → `--brand-primary/dark`。
/// 下游消费者依赖生成的标识符，此行为不可扩大。
pub fn normalize(name: &str) -> String {
    let normalized = name.to_lowercase().replacen('/', "-", 1).replacen(' ', "-", 1);
    format!("--{}", normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_name_is_lowercased() {
        assert_eq!(normalize("Primary"), "--primary");
        assert_eq!(normalize("BLUE500"), "--blue500");
    }

    #[test]
    fn test_first_slash_replaced() {
        assert_eq!(normalize("Brand/Primary"), "--brand-primary");
    }

    #[test]
    fn test_only_first_slash_replaced() {
        // 第二个 `/` 保持原样
        assert_eq!(normalize("Brand/Primary/Dark"), "--brand-primary/dark");
    }

    #[test]
    fn test_first_space_replaced() {
        assert_eq!(normalize("Gap Small"), "--gap-small");
        assert_eq!(normalize("A B C"), "--a-b c");
    }

    #[test]
    fn test_slash_and_space_combined() {
        assert_eq!(normalize("Gap/Small Extra"), "--gap-small-extra");
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(normalize(""), "--");
    }
}
