//! Storage-to-wire conversion

use super::model::{User, UserInfo};

/// Convert stored users to wire records, keeping order. Only the id and nickname travel.
pub fn users_db_to_pb(users: &[User]) -> Vec<UserInfo> {
    users
        .iter()
        .map(|user| UserInfo {
            user_id: user.user_id.clone(),
            nickname: user.nickname.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_db_to_pb_keeps_order() {
        let users = vec![
            User {
                face_url: "https://cdn.local/a.png".to_string(),
                create_time: 1,
                ..User::new("u-1", "alice")
            },
            User::new("u-2", "bob"),
        ];

        let infos = users_db_to_pb(&users);

        assert_eq!(
            infos,
            vec![
                UserInfo {
                    user_id: "u-1".to_string(),
                    nickname: "alice".to_string(),
                },
                UserInfo {
                    user_id: "u-2".to_string(),
                    nickname: "bob".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_users_db_to_pb_empty() {
        assert!(users_db_to_pb(&[]).is_empty());
    }
}
