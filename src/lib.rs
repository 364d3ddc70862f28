//! Backend for the FutureOS course-catalog site.
//!
//! Serves the static course catalog (courses, curricula, testimonials, FDP
//! schedule) over a JSON API and relays form submissions as formatted emails
//! via SMTP or a transactional provider. There is no database; catalog data
//! is compile-time and form submissions exist only as the emails they
//! produce.
//!
//! # Endpoints
//!
//! - `POST /api/send-email/fdp-registration` | `/testimonial` | `/contact`
//!   (rate-limited per client IP)
//! - `GET /api/send-email/health`
//! - `GET /api/courses`, `/api/courses/{id}`, `/api/courses/{id}/payment-plans`
//! - `GET /api/testimonials`, `/api/fdp/events`
//!
//! # Email delivery
//!
//! SMTP is used when `SMTP_USER`/`SMTP_PASS` are set; otherwise the
//! transactional provider when `SENDGRID_API_KEY` is set; otherwise sends
//! fail with 503. See [`config::Config`] for the full variable list.

use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    middleware::from_fn_with_state,
    routing::{get, post},
};
use tokio::{
    net::TcpListener,
    signal::{self, unix::SignalKind},
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod catalog;
pub mod config;
pub mod error;
pub mod fdp;
pub mod forms;
pub mod limit;
pub mod mailer;
pub mod routes;
pub mod state;
pub mod templates;
pub mod testimonials;

use state::AppState;

/// Builds the full application router over the given state.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let send_email = Router::new()
        .route("/fdp-registration", post(routes::fdp_registration_handler))
        .route("/testimonial", post(routes::testimonial_handler))
        .route("/contact", post(routes::contact_handler))
        .route_layer(from_fn_with_state(state.clone(), routes::email_rate_limit))
        .route("/health", get(routes::health_handler));

    Router::new()
        .nest("/api/send-email", send_email)
        .route("/api/courses", get(routes::list_courses_handler))
        .route("/api/courses/{id}", get(routes::course_handler))
        .route(
            "/api/courses/{id}/payment-plans",
            get(routes::payment_plans_handler),
        )
        .route("/api/testimonials", get(routes::testimonials_handler))
        .route("/api/fdp/events", get(routes::fdp_events_handler))
        .fallback(routes::not_found_handler)
        .layer(cors)
        .with_state(state)
}

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new();

    info!("Starting server...");
    let router = app(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address)
        .await
        .expect("Failed to bind listen address");
    info!("Server running on {address}");

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .expect("Server error");

    info!("Server shut down");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
