//! 크라우드펀딩 백엔드 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 저장소, 업로더, 서비스를 초기화합니다.
//! 사용자와 캠페인 레코드를 MongoDB에 저장하고 이미지는 Cloudinary에 업로드합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use crowdfund_backend::config::{CorsConfig, DatabaseConfig, Environment, ServerConfig, StoreBackend};
use crowdfund_backend::core::errors::AppResult;
use crowdfund_backend::db::Database;
use crowdfund_backend::domain::entities::{campaigns::Campaign, users::User, Record};
use crowdfund_backend::repositories::{InMemoryRecordStore, MongoRecordStore, RecordStore};
use crowdfund_backend::routes::configure_all_routes;
use crowdfund_backend::services::records::{CampaignService, UserService};
use crowdfund_backend::services::uploads::{CloudinaryUploader, ImageUploader, UploadConstraints};
use crowdfund_backend::utils::display_terminal::{
    print_boxed_title, print_final_summary, print_step_complete, print_step_start, print_sub_task,
};

/// 엔티티별 레코드 저장소
struct Stores {
    users: Arc<dyn RecordStore<User>>,
    campaigns: Arc<dyn RecordStore<Campaign>>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    print_boxed_title("🚀 CROWDFUND BACKEND");
    info!("🏷️ 실행 환경: {:?}", Environment::current());

    let (user_service, campaign_service) = match initialize_services().await {
        Ok(services) => services,
        Err(e) => {
            error!("❌ 서비스 초기화 실패: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(user_service, campaign_service).await
}

/// 저장소와 업로더를 만들고 서비스에 주입합니다
async fn initialize_services() -> AppResult<(web::Data<UserService>, web::Data<CampaignService>)> {
    let backend = DatabaseConfig::backend();

    print_step_start(1, "레코드 저장소 초기화");
    let stores = initialize_stores(backend).await?;
    print_step_complete(1, "레코드 저장소 초기화");

    print_step_start(2, "이미지 업로더 구성");
    let uploader: Arc<dyn ImageUploader> = Arc::new(CloudinaryUploader::from_env()?);
    let constraints = UploadConstraints::from_env();
    print_sub_task("folder", &constraints.folder);
    print_sub_task("allowed_formats", &constraints.allowed_formats.join(","));
    print_step_complete(2, "이미지 업로더 구성");

    let user_service = UserService::new(stores.users, uploader.clone(), constraints.clone());
    let campaign_service = CampaignService::new(stores.campaigns, uploader, constraints);

    print_final_summary(
        &format!("{:?}", backend),
        &[User::COLLECTION, Campaign::COLLECTION],
        &ServerConfig::bind_address(),
    );

    Ok((web::Data::new(user_service), web::Data::new(campaign_service)))
}

/// 선택된 백엔드에 맞는 저장소를 초기화합니다
///
/// * `StoreBackend::Mongo` - MongoDB 연결 후 검색 필드 인덱스 생성
/// * `StoreBackend::Memory` - 프로세스 메모리 (재시작 시 데이터 소멸)
async fn initialize_stores(backend: StoreBackend) -> AppResult<Stores> {
    match backend {
        StoreBackend::Mongo => {
            info!("📡 데이터베이스 연결 중...");
            let database = Database::new().await?;
            print_sub_task("MongoDB", database.database_name());

            let users = MongoRecordStore::<User>::new(&database);
            let campaigns = MongoRecordStore::<Campaign>::new(&database);

            users.create_indexes().await?;
            campaigns.create_indexes().await?;
            print_sub_task("indexes", "ready");

            Ok(Stores {
                users: Arc::new(users),
                campaigns: Arc::new(campaigns),
            })
        }
        StoreBackend::Memory => {
            info!("🧪 인메모리 저장소를 사용합니다 (데이터는 재시작 시 사라집니다)");
            print_sub_task("memory", "ready");

            Ok(Stores {
                users: Arc::new(InMemoryRecordStore::<User>::new()),
                campaigns: Arc::new(InMemoryRecordStore::<Campaign>::new()),
            })
        }
    }
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    user_service: web::Data<UserService>,
    campaign_service: web::Data<CampaignService>,
) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();
    let allowed_origins = CorsConfig::allowed_origins();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(user_service.clone())
            .app_data(campaign_service.clone())
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(workers)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// `CORS_ALLOWED_ORIGINS`가 비어 있으면 모든 Origin을 허용합니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    let cors = if allowed_origins.is_empty() {
        Cors::default().allow_any_origin()
    } else {
        allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
