//! AWS Lambda HTTP endpoint
//!
//! POST a JSON `ProjectionParameters` body; receive the snapshots and
//! summary. Set `PROJECTION_CONFIG` to a JSON config path to override
//! defaults.

use compound_growth::{AppConfig, ProjectionEngine, ProjectionParameters, ProjectionResult, ProjectionSummary};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectionResponse {
    #[serde(flatten)]
    result: ProjectionResult,
    summary: ProjectionSummary,
}

fn json_response(status: u16, body: String) -> Result<Response<Body>, Error> {
    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body))?;
    Ok(response)
}

async fn handler(event: Request, config: &AppConfig) -> Result<Response<Body>, Error> {
    let bytes: &[u8] = event.body().as_ref();
    let params: ProjectionParameters = if bytes.is_empty() {
        ProjectionParameters::default()
    } else {
        match serde_json::from_slice(bytes) {
            Ok(params) => params,
            Err(e) => {
                log::warn!("Rejected request body: {}", e);
                let body = serde_json::json!({ "error": e.to_string() }).to_string();
                return json_response(400, body);
            }
        }
    };

    let params = config.bounds.clamp(params);
    let result = ProjectionEngine::new(config.projection.clone()).project(&params);
    let summary = result.summary();
    log::info!(
        "Projected {} years, final value {:.2}",
        params.years,
        summary.final_value
    );

    let body = serde_json::to_string(&ProjectionResponse { result, summary })?;
    json_response(200, body)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let config = match std::env::var("PROJECTION_CONFIG") {
        Ok(path) => AppConfig::from_json_file(path)?,
        Err(_) => AppConfig::default(),
    };
    let config = &config;

    run(service_fn(move |event: Request| async move { handler(event, config).await })).await
}
