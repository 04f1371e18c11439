use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 上游返回的公开用户资料，所有字段都可能缺失
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: Option<String>,
    pub login: Option<String>,
    pub company: Option<String>,
    pub followers: Option<u64>,
    pub public_repos: Option<u64>,
}

impl UserProfile {
    /// 所有字段都缺失，不代表一条有效记录
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.login.is_none()
            && self.company.is_none()
            && self.followers.is_none()
            && self.public_repos.is_none()
    }
}

/// 上游查询结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileLookup {
    Found(UserProfile),
    NotFound,
}

impl From<UserProfile> for ProfileLookup {
    fn from(profile: UserProfile) -> Self {
        if profile.is_empty() {
            ProfileLookup::NotFound
        } else {
            ProfileLookup::Found(profile)
        }
    }
}

/// 结果排序字段
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    Name,
    Login,
    Followers,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown sort field {0:?}")]
pub struct UnknownSortField(String);

impl FromStr for SortField {
    type Err = UnknownSortField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SortField::Name),
            "login" => Ok(SortField::Login),
            "follower" | "followers" => Ok(SortField::Followers),
            other => Err(UnknownSortField(other.to_string())),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortField::Name => "name",
            SortField::Login => "login",
            SortField::Followers => "followers",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_absent_profile_is_not_found() {
        assert_eq!(ProfileLookup::from(UserProfile::default()), ProfileLookup::NotFound);
    }

    #[test]
    fn profile_without_name_is_still_found() {
        let profile = UserProfile {
            login: Some("octocat".into()),
            ..Default::default()
        };
        assert!(matches!(ProfileLookup::from(profile), ProfileLookup::Found(_)));
    }

    #[test]
    fn parses_sort_fields() {
        assert_eq!("Name".parse::<SortField>().unwrap(), SortField::Name);
        assert_eq!("login".parse::<SortField>().unwrap(), SortField::Login);
        assert_eq!("follower".parse::<SortField>().unwrap(), SortField::Followers);
        assert!("company".parse::<SortField>().is_err());
    }

    #[test]
    fn absent_fields_serialize_as_null() {
        let json = serde_json::to_value(UserProfile {
            login: Some("octocat".into()),
            followers: Some(3),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(json["login"], "octocat");
        assert_eq!(json["followers"], 3);
        assert!(json["name"].is_null());
        assert!(json["public_repos"].is_null());
    }
}
