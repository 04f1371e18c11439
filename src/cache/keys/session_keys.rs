/// 会话令牌缓存键前缀
const SESSION_PREFIX: &str = "session:";

/// 生成会话令牌缓存键
pub fn session_key(token: &str) -> String {
    format!("{}{}", SESSION_PREFIX, token)
}
