use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use lzcost_core::domain::profile::OrganizationProfile;
use lzcost_core::error::EstimateError;
use lzcost_core::pricing::{PriceEntry, PricingTable};
use lzcost_core::CostReport;
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = lzcost_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let pricing = match settings.load_pricing() {
        Ok(pricing) => pricing,
        Err(e) => {
            sentry_anyhow::capture_anyhow(&e);
            tracing::error!(error = %e, "pricing file could not be loaded");
            return Err(e);
        }
    };
    tracing::info!(version = %pricing.version, region = %pricing.region, "pricing table loaded");

    let state = AppState {
        pricing: Arc::new(pricing),
    };

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!(%addr, "api listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/pricing", get(get_pricing))
        .route("/estimate", post(post_estimate))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> &'static str {
    "ok"
}

#[derive(Debug, Clone)]
struct AppState {
    pricing: Arc<PricingTable>,
}

#[derive(Debug, Serialize)]
struct ApiPricing {
    table: PricingTable,
    entries: Vec<PriceEntry>,
}

#[derive(Debug, Serialize)]
struct ApiEstimate {
    request_id: Uuid,
    report: CostReport,
}

#[derive(Debug, Serialize)]
struct ApiError {
    error: String,
}

async fn get_pricing(State(state): State<AppState>) -> Json<ApiPricing> {
    Json(ApiPricing {
        table: state.pricing.as_ref().clone(),
        entries: state.pricing.entries(),
    })
}

async fn post_estimate(
    State(state): State<AppState>,
    Json(profile): Json<OrganizationProfile>,
) -> Result<Json<ApiEstimate>, (StatusCode, Json<ApiError>)> {
    let request_id = Uuid::new_v4();

    match lzcost_core::estimate(&state.pricing, &profile) {
        Ok(report) => {
            tracing::info!(%request_id, profile = %profile.name, "estimate served");
            Ok(Json(ApiEstimate { request_id, report }))
        }
        Err(EstimateError::Profile(e)) => Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiError {
                error: e.to_string(),
            }),
        )),
        Err(e @ EstimateError::Pricing(_)) => {
            let err = anyhow::Error::new(e);
            sentry_anyhow::capture_anyhow(&err);
            tracing::error!(%request_id, error = %err, "estimate failed on server pricing");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError {
                    error: "pricing table is invalid".to_string(),
                }),
            ))
        }
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

fn init_sentry(settings: &lzcost_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState {
            pricing: Arc::new(PricingTable::default()),
        }
    }

    #[tokio::test]
    async fn estimate_returns_full_report_for_defaults() {
        let Json(body) = post_estimate(State(state()), Json(OrganizationProfile::default()))
            .await
            .unwrap();
        assert_eq!(body.report.cost_breakdown.services.len(), 8);

        let v = serde_json::to_value(&body).unwrap();
        assert!(v["request_id"].is_string());
        assert_eq!(
            v["report"]["cost_breakdown"]["services"][0]["name"],
            "AWS Control Tower"
        );
    }

    #[tokio::test]
    async fn invalid_profile_is_unprocessable() {
        let profile = OrganizationProfile {
            accounts_count: 0,
            ..OrganizationProfile::default()
        };
        let (status, Json(body)) = post_estimate(State(state()), Json(profile))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.error, "accounts_count must be at least 1");
    }

    #[tokio::test]
    async fn invalid_pricing_is_a_server_error() {
        let mut pricing = PricingTable::default();
        pricing.config.item = -1.0;
        let state = AppState {
            pricing: Arc::new(pricing),
        };
        let (status, Json(body)) = post_estimate(State(state), Json(OrganizationProfile::default()))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "pricing table is invalid");
    }

    #[tokio::test]
    async fn pricing_lists_entries() {
        let Json(body) = get_pricing(State(state())).await;
        assert_eq!(body.table.version, "us-east-1-2024-09");
        assert!(!body.entries.is_empty());
    }
}
