use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;
use warp::http::StatusCode;
use warp::reply::{Json, WithStatus};
use warp::{Filter, Rejection};
use crate::config::constants::{sleep_duration_millis, SERVER_SHUTDOWN_GRACE_PERIOD_MS};
use crate::errors::{RepoAnalyzerError, RepoAnalyzerResult};
use crate::services::job_facade::JobFacade;
use crate::structs::api::create_job_request::CreateJobRequest;
use crate::structs::api::error_response::ErrorResponse;
use crate::structs::config::server_config::ServerConfig;

#[derive(Deserialize, Debug)]
struct StatusQuery {
    job_id: String,
}

#[derive(Deserialize, Debug)]
struct SummaryQuery {
    job_id: String,
    analysis_type: Option<String>,
}

pub struct ApiServer {
    facade: Arc<JobFacade>,
    config: ServerConfig,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl ApiServer {
    pub fn new(facade: JobFacade, config: ServerConfig) -> Self {
        Self {
            facade: Arc::new(facade),
            config,
            shutdown_tx: None,
        }
    }

    /// Binds and serves in the background; returns the bound address.
    pub async fn start(&mut self) -> RepoAnalyzerResult<SocketAddr> {
        let requested = format!("{}:{}", self.config.host, self.config.port);
        let addr = tokio::net::lookup_host(requested.as_str())
            .await?
            .next()
            .ok_or_else(|| RepoAnalyzerError::config_error(
                &format!("cannot resolve '{}'", requested),
                Some("server.host"),
                None,
            ))?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        self.shutdown_tx = Some(shutdown_tx);

        let (bound, server) = warp::serve(routes(Arc::clone(&self.facade), &self.config.allowed_origins))
            .try_bind_with_graceful_shutdown(addr, async {
                shutdown_rx.await.ok();
            })
            .map_err(|e| RepoAnalyzerError::system_error(&format!("binding {}", addr), &e.to_string()))?;

        tokio::spawn(server);

        log::info!("🌐 API server listening on http://{}", bound);
        Ok(bound)
    }

    pub async fn shutdown(&mut self) -> RepoAnalyzerResult<()> {
        log::info!("🛑 Shutting down API server...");

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx.send(()).map_err(|_|
                RepoAnalyzerError::system_error("shutdown", "Failed to send shutdown signal")
            )?;
        }

        tokio::time::sleep(sleep_duration_millis(SERVER_SHUTDOWN_GRACE_PERIOD_MS)).await;
        log::info!("✅ API server shutdown complete");

        Ok(())
    }
}

/// Every HTTP route, with CORS and JSON error bodies applied.
pub fn routes(
    facade: Arc<JobFacade>,
    allowed_origins: &[String],
) -> impl Filter<Extract = impl warp::Reply, Error = Rejection> + Clone {
    let facade_filter = warp::any().map(move || Arc::clone(&facade));

    let health = warp::path!("health")
        .and(warp::get())
        .and(facade_filter.clone())
        .map(|facade: Arc<JobFacade>| ok_reply(&facade.health()));

    let api_status = warp::path!("api-status")
        .and(warp::get())
        .and(facade_filter.clone())
        .map(|facade: Arc<JobFacade>| ok_reply(&facade.api_status()));

    let summarize_repo = warp::path!("summarize-repo")
        .and(warp::post())
        .and(warp::body::json())
        .and(facade_filter.clone())
        .and_then(summarize_repo_handler);

    let summary_status = warp::path!("summary-status")
        .and(warp::get())
        .and(warp::query::<StatusQuery>())
        .and(facade_filter.clone())
        .and_then(summary_status_handler);

    let get_summary = warp::path!("get-summary")
        .and(warp::get())
        .and(warp::query::<SummaryQuery>())
        .and(facade_filter.clone())
        .and_then(get_summary_handler);

    let analyze = warp::path!("analyze")
        .and(warp::post())
        .and(warp::body::json())
        .and(facade_filter)
        .and_then(analyze_handler);

    health
        .or(api_status)
        .or(summarize_repo)
        .or(summary_status)
        .or(get_summary)
        .or(analyze)
        .recover(handle_rejection)
        .with(cors(allowed_origins))
}

fn cors(allowed_origins: &[String]) -> warp::cors::Builder {
    let builder = warp::cors()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET", "POST", "OPTIONS"]);

    if allowed_origins.iter().any(|origin| origin == "*") {
        return builder.allow_any_origin();
    }

    let origins: Vec<&str> = allowed_origins
        .iter()
        .map(String::as_str)
        .filter(|origin| is_valid_origin(origin))
        .collect();
    builder.allow_origins(origins)
}

pub(crate) fn is_valid_origin(origin: &str) -> bool {
    match origin.split_once("://") {
        Some((scheme, rest)) => {
            matches!(scheme, "http" | "https") && !rest.is_empty() && !rest.contains('/')
        }
        None => false,
    }
}

async fn summarize_repo_handler(request: CreateJobRequest, facade: Arc<JobFacade>) -> Result<WithStatus<Json>, Infallible> {
    Ok(result_reply(facade.create_job(&request.repo_url)))
}

async fn summary_status_handler(query: StatusQuery, facade: Arc<JobFacade>) -> Result<WithStatus<Json>, Infallible> {
    Ok(result_reply(facade.job_status(&query.job_id)))
}

async fn get_summary_handler(query: SummaryQuery, facade: Arc<JobFacade>) -> Result<WithStatus<Json>, Infallible> {
    Ok(result_reply(facade.job_summary(&query.job_id, query.analysis_type.as_deref())))
}

async fn analyze_handler(request: CreateJobRequest, facade: Arc<JobFacade>) -> Result<WithStatus<Json>, Infallible> {
    match facade.quick_analyze(&request.repo_url).await {
        Ok(result) => Ok(ok_reply(&result)),
        Err(e) => {
            log::error!("❌ Quick analysis failed: {}", e);
            Ok(error_reply(&e, StatusCode::INTERNAL_SERVER_ERROR))
        }
    }
}

fn ok_reply<T: Serialize>(body: &T) -> WithStatus<Json> {
    warp::reply::with_status(warp::reply::json(body), StatusCode::OK)
}

fn result_reply<T: Serialize>(result: RepoAnalyzerResult<T>) -> WithStatus<Json> {
    match result {
        Ok(body) => ok_reply(&body),
        Err(e) => {
            let status = StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            if status.is_server_error() {
                log::error!("❌ Request failed: {}", e);
            }
            error_reply(&e, status)
        }
    }
}

fn error_reply(error: &RepoAnalyzerError, status: StatusCode) -> WithStatus<Json> {
    warp::reply::with_status(warp::reply::json(&ErrorResponse::from(error)), status)
}

async fn handle_rejection(rejection: Rejection) -> Result<WithStatus<Json>, Infallible> {
    let (status, tag, detail) = if rejection.is_not_found() {
        (StatusCode::NOT_FOUND, "NOT_FOUND", "Not Found".to_string())
    } else if let Some(e) = rejection.find::<warp::filters::body::BodyDeserializeError>() {
        (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR", e.to_string())
    } else if let Some(e) = rejection.find::<warp::reject::InvalidQuery>() {
        (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR", e.to_string())
    } else if rejection.find::<warp::reject::UnsupportedMediaType>().is_some() {
        (StatusCode::UNSUPPORTED_MEDIA_TYPE, "UNSUPPORTED_MEDIA_TYPE", "Expected a JSON body".to_string())
    } else if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "METHOD_NOT_ALLOWED", "Method Not Allowed".to_string())
    } else {
        log::error!("❌ Unhandled rejection: {:?}", rejection);
        (StatusCode::INTERNAL_SERVER_ERROR, "SYSTEM_ERROR", "Internal Server Error".to_string())
    };

    let body = ErrorResponse {
        detail,
        tag: tag.to_string(),
    };
    Ok(warp::reply::with_status(warp::reply::json(&body), status))
}
