//! 개발자 커뮤니티 백엔드 메인 애플리케이션
//!
//! 환경 설정을 읽고 저장소를 연결한 뒤 Actix-web HTTP 서버를 구동합니다.

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use dev_connector_backend::config::{DatabaseConfig, ServerConfig, StorageBackend};
use dev_connector_backend::core::AppContainer;
use dev_connector_backend::db::Database;
use dev_connector_backend::routes::configure_all_routes;
use dev_connector_backend::services::auth::{PasswordService, TokenService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 개발자 커뮤니티 서비스 시작중...");

    let (container, database) = initialize_container().await?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    let result = start_http_server(container).await;

    if let Some(database) = database {
        database.shutdown().await;
    }

    result
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 요청 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(container: AppContainer) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        let container = container.clone();

        App::new()
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(|cfg| container.register(cfg))
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(4)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전에 호출되므로 결과는 표준 에러로 출력합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    match loaded {
        Ok(file) => eprintln!("[{}] {} 파일 로드 됨", profile, file),
        Err(e) => eprintln!("[{}] 환경 파일 로드 실패, 프로세스 환경변수만 사용: {}", profile, e),
    }
}

/// `RUST_LOG` 가 없으면 `info,actix_web=debug`
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// 저장소 백엔드를 골라 서비스 컨테이너를 만듭니다
///
/// MongoDB 백엔드면 연결 핸들도 함께 돌려주며, 서버 종료 후 닫습니다.
async fn initialize_container() -> std::io::Result<(AppContainer, Option<Database>)> {
    match DatabaseConfig::storage_backend() {
        StorageBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::connect().await.map_err(|e| {
                error!("데이터베이스 연결 실패: {}", e);
                std::io::Error::other(e.to_string())
            })?;

            let container = AppContainer::with_mongo(&database).await.map_err(|e| {
                error!("서비스 초기화 실패: {}", e);
                std::io::Error::other(e.to_string())
            })?;

            Ok((container, Some(database)))
        }
        StorageBackend::Memory => {
            info!("🧪 메모리 저장소 사용: 재시작 시 데이터가 사라집니다");

            let container = AppContainer::in_memory(PasswordService::from_env(), TokenService::from_env());
            Ok((container, None))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// * `http://localhost:3000` - React 개발 서버
/// * `http://localhost:5000` - 자체 서버
/// * `127.0.0.1` 동등한 주소들
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:5000")
        .allowed_origin("http://127.0.0.1:5000")
        .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .supports_credentials()
        .max_age(3600)
}
