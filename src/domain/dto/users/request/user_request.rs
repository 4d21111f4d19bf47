use serde::{Deserialize, Serialize};

use crate::domain::entities::users::User;

/// 사용자 생성/수정 요청 본문
///
/// 구조적인 JSON 바인딩 외에는 검증하지 않습니다. 누락된 필드는 빈 문자열이 되고,
/// 수정 요청에서는 그 값이 기존 값을 덮어씁니다. `id` 등 알 수 없는 필드는 무시됩니다.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserRequest {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl From<UserRequest> for User {
    fn from(request: UserRequest) -> Self {
        User::new(request.name, request.last_name, request.email, request.password)
    }
}
