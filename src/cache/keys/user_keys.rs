/// 用户资料缓存键前缀
const USER_DETAILS_PREFIX: &str = "user:details:";

/// 生成用户资料缓存键
pub fn user_details_key(username: &str) -> String {
    format!("{}{}", USER_DETAILS_PREFIX, username)
}
