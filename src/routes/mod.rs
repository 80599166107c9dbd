//! # Route Configuration
//!
//! 엔드포인트와 제네릭 핸들러를 연결합니다. 사용자와 캠페인은 같은 핸들러를
//! 타입 인자만 바꾸어 사용합니다.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | `POST` | `/users/regist` | `register::<User>` |
//! | `GET` | `/users/searchByAddress?address=` | `search::<User>` |
//! | `PUT` | `/users/update/{id}` | `modify::<User>` |
//! | `DELETE` | `/users/delete/{id}` | `remove::<User>` |
//! | `GET` | `/users/allData` | `list::<User>` |
//! | `POST` | `/campaigns/createCampaign` | `register::<Campaign>` |
//! | `GET` | `/campaigns/getCampaign/{id}` | `get_one::<Campaign>` |
//! | `PUT` | `/campaigns/updateCampaign/{id}` | `modify::<Campaign>` |
//! | `DELETE` | `/campaigns/deleteCampaign/{id}` | `remove::<Campaign>` |
//! | `GET` | `/campaigns/getAllCampaign` | `list::<Campaign>` |
//! | `GET` | `/` | 상태 문자열 |
//! | `GET` | `/health` | 헬스체크 JSON |

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::config::Environment;
use crate::domain::entities::{campaigns::Campaign, users::User};
use crate::handlers::records;

/// 모든 라우트를 설정합니다
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new()
///     .app_data(web::Data::new(user_service))
///     .app_data(web::Data::new(campaign_service))
///     .configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index));
    cfg.service(health_check);

    configure_user_routes(cfg);
    configure_campaign_routes(cfg);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("/regist", web::post().to(records::register::<User>))
            .route("/searchByAddress", web::get().to(records::search::<User>))
            .route("/update/{id}", web::put().to(records::modify::<User>))
            .route("/delete/{id}", web::delete().to(records::remove::<User>))
            .route("/allData", web::get().to(records::list::<User>))
    );
}

fn configure_campaign_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/campaigns")
            .route("/createCampaign", web::post().to(records::register::<Campaign>))
            .route("/getCampaign/{id}", web::get().to(records::get_one::<Campaign>))
            .route("/updateCampaign/{id}", web::put().to(records::modify::<Campaign>))
            .route("/deleteCampaign/{id}", web::delete().to(records::remove::<Campaign>))
            .route("/getAllCampaign", web::get().to(records::list::<Campaign>))
    );
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().body("API is running...")
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:3000/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "crowdfund_backend",
///   "version": "0.1.0",
///   "environment": "Production",
///   "timestamp": "2026-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB",
///     "image_storage": "Cloudinary"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "environment": format!("{:?}", Environment::current()),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "image_storage": "Cloudinary"
        }
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};
    use serde_json::Value;

    use super::*;
    use crate::handlers::multipart::MAX_TEXT_FIELD_BYTES;
    use crate::repositories::InMemoryRecordStore;
    use crate::services::records::{CampaignService, UserService};
    use crate::services::uploads::stub::{StubUploader, STUB_URL_PREFIX};
    use crate::services::uploads::UploadConstraints;

    const BOUNDARY: &str = "----crowdfund-test-boundary";

    fn services() -> (web::Data<UserService>, web::Data<CampaignService>) {
        let (users, campaigns, _) = services_with(UploadConstraints::default());
        (users, campaigns)
    }

    fn services_with(
        constraints: UploadConstraints,
    ) -> (web::Data<UserService>, web::Data<CampaignService>, Arc<StubUploader>) {
        let uploader = Arc::new(StubUploader::new());

        let users = UserService::new(
            Arc::new(InMemoryRecordStore::<User>::new()),
            uploader.clone(),
            constraints.clone(),
        );
        let campaigns = CampaignService::new(
            Arc::new(InMemoryRecordStore::<Campaign>::new()),
            uploader.clone(),
            constraints,
        );

        (web::Data::new(users), web::Data::new(campaigns), uploader)
    }

    fn multipart_body(fields: &[(&str, &str)], image: Option<(&str, &[u8])>) -> Vec<u8> {
        let mut body = Vec::new();

        for (name, value) in fields {
            body.extend_from_slice(format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                BOUNDARY, name, value
            ).as_bytes());
        }

        if let Some((file_name, bytes)) = image {
            body.extend_from_slice(format!(
                "--{}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{}\"\r\nContent-Type: image/jpeg\r\n\r\n",
                BOUNDARY, file_name
            ).as_bytes());
            body.extend_from_slice(bytes);
            body.extend_from_slice(b"\r\n");
        }

        body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
        body
    }

    fn multipart_request(
        request: test::TestRequest,
        fields: &[(&str, &str)],
        image: Option<(&str, &[u8])>,
    ) -> test::TestRequest {
        request
            .insert_header((
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            ))
            .set_payload(multipart_body(fields, image))
    }

    const USER_FIELDS: &[(&str, &str)] = &[
        ("address", "0x1"),
        ("name", "Alice"),
        ("email", "alice@x.com"),
        ("social", "@alice"),
    ];

    const CAMPAIGN_FIELDS: &[(&str, &str)] = &[
        ("contractAddress", "0xC0FFEE"),
        ("name", "Otters"),
        ("typeAnimal", "otter"),
        ("description", "river otters"),
    ];

    const JPG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0];

    #[actix_web::test]
    async fn test_index_and_health() {
        let (users, campaigns) = services();
        let app = test::init_service(
            App::new().app_data(users).app_data(campaigns).configure(configure_all_routes),
        ).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, "API is running...");

        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_register_user_returns_created() {
        let (users, campaigns) = services();
        let app = test::init_service(
            App::new().app_data(users).app_data(campaigns).configure(configure_all_routes),
        ).await;

        let req = multipart_request(test::TestRequest::post().uri("/users/regist"), USER_FIELDS, Some(("a.jpg", JPG)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["message"].is_string());
        assert_eq!(body["user"]["address"], "0x1");
        assert_eq!(body["user"]["_id"].as_str().map(str::len), Some(24));
        assert!(body["user"]["image"].as_str().unwrap().starts_with(STUB_URL_PREFIX));
    }

    #[actix_web::test]
    async fn test_register_without_image_is_bad_request() {
        let (users, campaigns) = services();
        let app = test::init_service(
            App::new().app_data(users.clone()).app_data(campaigns).configure(configure_all_routes),
        ).await;

        let req = multipart_request(test::TestRequest::post().uri("/users/regist"), USER_FIELDS, None)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
        assert!(users.list().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_oversized_image_is_rejected_while_reading() {
        let constraints = UploadConstraints {
            max_bytes: 8,
            ..UploadConstraints::default()
        };
        let (users, campaigns, uploader) = services_with(constraints);
        let app = test::init_service(
            App::new().app_data(users.clone()).app_data(campaigns).configure(configure_all_routes),
        ).await;

        let image = vec![0xFF; 4 * 1024];
        let req = multipart_request(test::TestRequest::post().uri("/users/regist"), USER_FIELDS, Some(("big.jpg", image.as_slice())))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(uploader.calls(), 0);
        assert!(users.list().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_oversized_text_field_is_bad_request() {
        let (users, campaigns, uploader) = services_with(UploadConstraints::default());
        let app = test::init_service(
            App::new().app_data(users.clone()).app_data(campaigns).configure(configure_all_routes),
        ).await;

        let long_name = "a".repeat(MAX_TEXT_FIELD_BYTES + 1);
        let fields = [
            ("address", "0x1"),
            ("name", long_name.as_str()),
            ("email", "alice@x.com"),
            ("social", "@alice"),
        ];
        let req = multipart_request(test::TestRequest::post().uri("/users/regist"), &fields, Some(("a.jpg", JPG)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(uploader.calls(), 0);
        assert!(users.list().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_search_users_by_address() {
        let (users, campaigns) = services();
        let app = test::init_service(
            App::new().app_data(users).app_data(campaigns).configure(configure_all_routes),
        ).await;

        let req = multipart_request(test::TestRequest::post().uri("/users/regist"), USER_FIELDS, Some(("a.jpg", JPG)))
            .to_request();
        test::call_service(&app, req).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/users/searchByAddress?address=0X1").to_request(),
        ).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body.as_array().map(Vec::len), Some(1));

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/users/searchByAddress?address=0x9").to_request(),
        ).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/users/searchByAddress").to_request(),
        ).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_get_campaign_with_malformed_id() {
        let (users, campaigns) = services();
        let app = test::init_service(
            App::new().app_data(users).app_data(campaigns).configure(configure_all_routes),
        ).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/campaigns/getCampaign/abc").to_request(),
        ).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "유효하지 않은 ID 형식입니다");
    }

    #[actix_web::test]
    async fn test_campaign_lifecycle() {
        let (users, campaigns) = services();
        let app = test::init_service(
            App::new().app_data(users).app_data(campaigns).configure(configure_all_routes),
        ).await;

        let req = multipart_request(
            test::TestRequest::post().uri("/campaigns/createCampaign"),
            CAMPAIGN_FIELDS,
            Some(("otter.png", JPG)),
        ).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        let id = body["campaign"]["_id"].as_str().unwrap().to_string();
        let image = body["campaign"]["image"].as_str().unwrap().to_string();

        let req = multipart_request(
            test::TestRequest::put().uri(&format!("/campaigns/updateCampaign/{}", id)),
            &[("typeAnimal", "sea otter")],
            None,
        ).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["campaign"]["typeAnimal"], "sea otter");
        assert_eq!(body["campaign"]["contractAddress"], "0xC0FFEE");
        assert_eq!(body["campaign"]["image"], image.as_str());

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri(&format!("/campaigns/getCampaign/{}", id)).to_request(),
        ).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["typeAnimal"], "sea otter");

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/campaigns/getAllCampaign").to_request(),
        ).await;
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body.as_array().map(Vec::len), Some(1));

        let resp = test::call_service(
            &app,
            test::TestRequest::delete().uri(&format!("/campaigns/deleteCampaign/{}", id)).to_request(),
        ).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri(&format!("/campaigns/getCampaign/{}", id)).to_request(),
        ).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_update_and_delete_unknown_user() {
        let (users, campaigns) = services();
        let app = test::init_service(
            App::new().app_data(users).app_data(campaigns).configure(configure_all_routes),
        ).await;
        let unknown = mongodb::bson::oid::ObjectId::new().to_hex();

        let req = multipart_request(
            test::TestRequest::put().uri(&format!("/users/update/{}", unknown)),
            &[("name", "Bob")],
            None,
        ).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let resp = test::call_service(
            &app,
            test::TestRequest::delete().uri(&format!("/users/delete/{}", unknown)).to_request(),
        ).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = test::call_service(
            &app,
            test::TestRequest::delete().uri("/users/delete/not-an-id").to_request(),
        ).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = test::call_service(&app, test::TestRequest::get().uri("/users/allData").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!([]));
    }
}
