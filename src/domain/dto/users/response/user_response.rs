use serde::{Deserialize, Serialize};

use crate::domain::entities::users::User;

/// 사용자 정보 응답
///
/// 비밀번호는 저장소에 평문으로 남아 있더라도 응답에는 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub last_name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            last_name,
            email,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            last_name,
            email,
        }
    }
}
