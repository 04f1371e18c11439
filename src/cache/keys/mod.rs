/// 缓存键模块
/// 用户资料与会话令牌使用各自独立的键空间

pub mod session_keys;
pub mod user_keys;

pub use session_keys::session_key;
pub use user_keys::user_details_key;
