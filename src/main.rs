//! 사용자 CRUD 서비스 메인 애플리케이션
//!
//! MongoDB 연결을 설정하고 리포지토리 → 서비스 → 핸들러 순서로 의존성을 조립한 뒤
//! Actix-web HTTP 서버를 구동합니다.

use std::process;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use users_service::config::{MongoConfig, RateLimitConfig, ServerConfig};
use users_service::db::Database;
use users_service::repositories::users::MongoUserRepository;
use users_service::routes::configure_all_routes;
use users_service::services::users::{DefaultUserService, UserService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 서비스 시작중...");

    let mongo_config = MongoConfig::from_env();
    let user_service = build_user_service(&mongo_config).await;

    start_http_server(user_service).await
}

/// 저장소 연결부터 서비스까지 의존성을 조립합니다
///
/// 저장소에 연결할 수 없으면 에러를 기록하고 0이 아닌 코드로 종료합니다.
/// 시작 시점에만 허용되는 fail-fast 동작입니다.
async fn build_user_service(config: &MongoConfig) -> Arc<dyn UserService> {
    info!("📡 데이터베이스 연결 중... ({})", config.database_name);

    let database = match Database::connect(config).await {
        Ok(database) => database,
        Err(e) => {
            error!("MongoDB 연결 실패: {}", e);
            process::exit(1);
        }
    };

    let user_repo = Arc::new(MongoUserRepository::new(&database, &config.collection_name));
    info!("✅ 사용자 리포지토리 준비됨: {}.{}", database.database_name(), user_repo.collection_name());

    Arc::new(DefaultUserService::new(user_repo))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, Rate Limiting, 요청 로깅 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(user_service: Arc<dyn UserService>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Rate Limiting 설정이 올바르지 않습니다 (0 값은 허용되지 않음)",
            )
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let user_data = web::Data::from(user_service);

    HttpServer::new(move || {
        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .app_data(user_data.clone())
            .configure(configure_all_routes)
    })
    .bind(&bind_address)?
    .workers(ServerConfig::workers())
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 파일이 없어도 종료하지 않고 프로세스 환경 변수를 그대로 사용합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // 로거 초기화 전이므로 결과는 eprintln으로 남깁니다.
    let result = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    match result {
        Ok(file) => eprintln!("[{}] {} 파일 로드 됨", profile, file),
        Err(e) => eprintln!("[{}] 환경 파일 로드 실패: {}", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 `info,actix_web=info`를 사용합니다.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// 로컬 개발용 프론트엔드 출처만 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
