use std::cmp::Ordering;

use crate::models::{SortField, UserProfile};

/// 按指定字段升序排序，字符串字段忽略大小写，缺失值排在最后
pub fn sort_users(users: &mut [UserProfile], field: SortField) {
    match field {
        SortField::Name => users.sort_by(|a, b| cmp_text(a.name.as_deref(), b.name.as_deref())),
        SortField::Login => users.sort_by(|a, b| cmp_text(a.login.as_deref(), b.login.as_deref())),
        SortField::Followers => users.sort_by(|a, b| cmp_present_first(a.followers, b.followers)),
    }
}

fn cmp_text(a: Option<&str>, b: Option<&str>) -> Ordering {
    cmp_present_first(a.map(str::to_lowercase), b.map(str::to_lowercase))
}

fn cmp_present_first<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: Option<&str>, login: &str, followers: Option<u64>) -> UserProfile {
        UserProfile {
            name: name.map(String::from),
            login: Some(login.to_string()),
            followers,
            ..Default::default()
        }
    }

    fn logins(users: &[UserProfile]) -> Vec<&str> {
        users.iter().filter_map(|u| u.login.as_deref()).collect()
    }

    #[test]
    fn sorts_by_name_ignoring_case() {
        let mut users = vec![
            user(Some("charlie"), "c", None),
            user(Some("Alice"), "a", None),
            user(Some("bob"), "b", None),
        ];
        sort_users(&mut users, SortField::Name);

        assert_eq!(logins(&users), ["a", "b", "c"]);
    }

    #[test]
    fn missing_names_sort_last() {
        let mut users = vec![
            user(None, "ghost", None),
            user(Some("Zed"), "z", None),
            user(Some("amy"), "a", None),
        ];
        sort_users(&mut users, SortField::Name);

        assert_eq!(logins(&users), ["a", "z", "ghost"]);
    }

    #[test]
    fn sorts_by_login_ignoring_case() {
        let mut users = vec![
            user(None, "Mona", None),
            user(None, "defunkt", None),
            user(None, "Atom", None),
        ];
        sort_users(&mut users, SortField::Login);

        assert_eq!(logins(&users), ["Atom", "defunkt", "Mona"]);
    }

    #[test]
    fn sorts_by_followers_ascending() {
        let mut users = vec![
            user(None, "many", Some(900)),
            user(None, "unknown", None),
            user(None, "few", Some(2)),
        ];
        sort_users(&mut users, SortField::Followers);

        assert_eq!(logins(&users), ["few", "many", "unknown"]);
    }
}
