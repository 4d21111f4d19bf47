//! User Entity Implementation
//!
//! 사용자 컬렉션에 저장되는 문서 구조입니다.

use mongodb::bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 문서 레이아웃: `{ _id, name, lastName, email, password }`.
/// 유니크 제약이나 필수 필드 검증은 없으며, 누락된 필드는 빈 문자열로 읽힙니다.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// 저장소가 할당하는 식별자 (삽입 전에는 None)
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    /// 평문 비밀번호. 응답 DTO로 변환할 때 제외됩니다.
    #[serde(default)]
    pub password: String,
}

impl User {
    pub fn new(name: String, last_name: String, email: String, password: String) -> Self {
        Self {
            id: None,
            name,
            last_name,
            email,
            password,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// `$set` 연산에 사용할 쓰기 가능 필드 문서
    ///
    /// `_id`는 포함하지 않으므로 수정으로 식별자가 바뀌지 않습니다.
    pub fn writable_fields(&self) -> Document {
        doc! {
            "name": self.name.as_str(),
            "lastName": self.last_name.as_str(),
            "email": self.email.as_str(),
            "password": self.password.as_str(),
        }
    }
}
