use actix_files::Files;
use actix_web::{web, HttpResponse};
use log::{error, info, warn};
use serde::Serialize;
use shared::{AssessmentInput, ValidationErrors};

use crate::upstream::PredictionService;

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<ValidationErrors>,
}

impl ErrorResponse {
    fn new(error: &str) -> Self {
        Self {
            error: error.to_string(),
            fields: None,
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: String) {
    configure_api(cfg);
    cfg.service(Files::new("/", frontend_dir).index_file("index.html"));
}

pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/options").route(web::get().to(get_options)))
        .service(web::resource("/api/predict").route(web::post().to(predict)));
}

async fn get_options(service: web::Data<dyn PredictionService>) -> HttpResponse {
    match service.fetch_options().await {
        Ok(options) => HttpResponse::Ok().json(options),
        Err(e) => {
            error!("Failed to fetch options: {}", e);
            HttpResponse::BadGateway().json(ErrorResponse::new("Failed to load options"))
        }
    }
}

async fn predict(
    service: web::Data<dyn PredictionService>,
    body: web::Json<AssessmentInput>,
) -> HttpResponse {
    let input = body.into_inner();

    if let Err(errors) = input.validate() {
        warn!("Rejected assessment: {}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Invalid assessment input".to_string(),
            fields: Some(errors),
        });
    }

    match service.predict(&input).await {
        Ok(response) => {
            info!("Prediction completed: {}", response.result);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            error!("Prediction request failed: {}", e);
            HttpResponse::BadGateway().json(ErrorResponse::new("Failed to predict result"))
        }
    }
}
