//! 아이덴티티 백엔드 메인 애플리케이션
//!
//! 설정을 읽고 MongoDB에 연결한 뒤, 서비스를 조립해 Actix-web HTTP 서버를 구동합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use identity_backend::config::{AppConfig, FrontendConfig};
use identity_backend::core::AppState;
use identity_backend::db::Database;
use identity_backend::repositories::accounts::AccountRepository;
use identity_backend::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    // .env 파일의 RUST_LOG가 적용되도록 로깅보다 먼저 로드
    let env_status = load_env_file();
    init_logging();
    match env_status {
        Ok(message) => info!("{}", message),
        Err(message) => error!("{}", message),
    }

    info!("🚀 아이덴티티 백엔드 시작중...");

    let config = AppConfig::from_env();
    let state = initialize_state(config).await.map_err(|e| {
        error!("❌ 서비스 초기화 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(web::Data::new(state)).await
}

/// 저장소 연결과 서비스 조립
///
/// MongoDB 연결과 인덱스 생성이 실패하면 서버를 띄우지 않습니다.
async fn initialize_state(config: AppConfig) -> Result<AppState, Box<dyn std::error::Error>> {
    info!("📡 데이터베이스 연결 중...");
    let database = Database::connect(&config.database).await?;

    let repository = AccountRepository::new(&database);
    repository.create_indexes().await?;

    let http = config.http_client.build_client()?;

    Ok(AppState::new(config, Arc::new(repository), http))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(state: web::Data<AppState>) -> std::io::Result<()> {
    let bind_address = state.config.server.bind_address();
    let workers = state.config.server.workers;

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        let cors = configure_cors(&state.config.frontend);

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(state.clone())
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(workers)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// 로거가 아직 없으므로 결과 메시지를 반환하고, 호출자가 로깅 초기화 후 남깁니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// # Examples
///
/// ```bash
/// PROFILE=prod cargo run
/// ```
fn load_env_file() -> Result<String, String> {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());
    load_profile_env(&profile)
}

fn load_profile_env(profile: &str) -> Result<String, String> {
    let filename = match profile {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => {
            dotenv().ok();
            return Ok(format!("Current profile: {}, 기본 .env 파일 로드", profile));
        }
    };

    dotenv::from_filename(filename)
        .map(|_| format!("Current profile: {}, {} 파일 로드 됨", profile, filename))
        .map_err(|e| format!("Current profile: {}, {} 파일 로드 실패: {}", profile, filename, e))
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=identity_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// 프론트엔드 origin에서 자격 증명을 포함한 요청을 허용합니다.
fn configure_cors(frontend: &FrontendConfig) -> Cors {
    Cors::default()
        .allowed_origin(frontend.origin())
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}
