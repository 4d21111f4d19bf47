//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 프로세스당 하나의 [`Database`]를 `main`에서 생성하고,
//! 리포지토리 생성자에 명시적으로 전달합니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use users_service::config::MongoConfig;
//! use users_service::db::Database;
//!
//! let config = MongoConfig::from_env();
//! let database = Database::connect(&config).await?;
//! let users = database.collection::<User>(&config.collection_name);
//! ```

use log::info;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};

use crate::config::MongoConfig;

/// MongoDB 데이터베이스 연결 래퍼
///
/// `mongodb::Client`는 내부적으로 커넥션 풀을 가지며 동시 사용에 안전하므로,
/// 복제해서 여러 워커에서 공유할 수 있습니다.
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 새 MongoDB 데이터베이스 연결을 생성합니다.
    ///
    /// 연결 URI를 파싱하고, 연결/서버 선택 타임아웃을 설정한 뒤
    /// `ping` 명령으로 연결 상태를 검증합니다.
    ///
    /// # Errors
    ///
    /// URI 파싱 실패, 타임아웃 내 서버 응답 없음 등 드라이버 에러를 그대로 반환합니다.
    pub async fn connect(config: &MongoConfig) -> Result<Self, mongodb::error::Error> {
        let mut client_options = ClientOptions::parse(&config.uri).await?;

        client_options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        client_options.connect_timeout = Some(config.connect_timeout);
        client_options.server_selection_timeout = Some(config.connect_timeout);

        let client = Client::with_options(client_options)?;

        client
            .database(&config.database_name)
            .run_command(doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 이름으로 타입 지정된 컬렉션 핸들을 반환합니다.
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.get_database().collection::<T>(name)
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
