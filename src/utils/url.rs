/*!
 * URL 路径拼接工具
 */

/// 拼接 URL 前缀与路径片段
///
/// 无论前缀是否以斜杠结尾、片段是否以斜杠开头，连接处都恰好保留
/// 一个分隔符；前缀开头的斜杠保持不变。不做百分号编码或 scheme
/// 处理。
pub fn join(prefix: &str, suffix: &str) -> String {
    let head = prefix.trim_end_matches('/');
    let tail = suffix.trim_start_matches('/');

    if head.is_empty() && !prefix.starts_with('/') {
        return tail.to_string();
    }

    format!("{}/{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_basic() {
        assert_eq!(join("/user/alice", "home"), "/user/alice/home");
    }

    #[test]
    fn test_join_trailing_slash() {
        assert_eq!(join("/user/alice/", "home"), "/user/alice/home");
        assert_eq!(join("/user/alice//", "home"), "/user/alice/home");
    }

    #[test]
    fn test_join_leading_slash_suffix() {
        assert_eq!(join("/u/bob", "/logout"), "/u/bob/logout");
        assert_eq!(join("/u/bob/", "/logout"), "/u/bob/logout");
    }

    #[test]
    fn test_join_root_prefix() {
        assert_eq!(join("/", "home"), "/home");
    }

    #[test]
    fn test_join_empty_prefix() {
        assert_eq!(join("", "home"), "home");
    }
}
