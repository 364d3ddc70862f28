use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json,
    extract::{ConnectInfo, FromRequest, Path, Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::json;
use tracing::info;

use crate::{
    catalog::{self, Category, CourseDetail, CourseFilter, CourseSummary, Level, PaymentPlan},
    error::{AppError, FieldError},
    fdp::{self, FdpEvent},
    forms::{ContactMessage, FdpRegistration, TestimonialSubmission, Validate},
    state::AppState,
    templates,
    testimonials::{self, Testimonial},
};

/// JSON extractor that maps body rejections onto [`AppError::MalformedPayload`].
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|_| AppError::MalformedPayload)?;
        Ok(Self(value))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendResponse {
    pub success: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
}

pub async fn email_rate_limit(
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !state.limiter.try_acquire(addr.ip()).await {
        return Err(AppError::RateLimited);
    }
    Ok(next.run(request).await)
}

pub async fn fdp_registration_handler(
    State(state): State<Arc<AppState>>,
    AppJson(mut form): AppJson<FdpRegistration>,
) -> Result<Json<SendResponse>, AppError> {
    form.normalize();
    form.validate()?;

    let email = templates::fdp_registration(&form);
    let message_id = state.mailer.send(None, &email.subject, &email.html).await?;
    info!(college = %form.college_name, "FDP registration relayed");

    Ok(Json(SendResponse {
        success: true,
        message: "FDP registration request sent successfully",
        message_id,
    }))
}

pub async fn testimonial_handler(
    State(state): State<Arc<AppState>>,
    AppJson(mut form): AppJson<TestimonialSubmission>,
) -> Result<Json<SendResponse>, AppError> {
    form.normalize();
    form.validate()?;

    let email = templates::testimonial(&form);
    let message_id = state.mailer.send(None, &email.subject, &email.html).await?;
    info!(name = %form.name, rating = form.rating, "testimonial relayed");

    Ok(Json(SendResponse {
        success: true,
        message: "Testimonial submitted successfully",
        message_id,
    }))
}

pub async fn contact_handler(
    State(state): State<Arc<AppState>>,
    AppJson(mut form): AppJson<ContactMessage>,
) -> Result<Json<SendResponse>, AppError> {
    form.normalize();
    form.validate()?;

    let email = templates::contact(&form);
    let message_id = state.mailer.send(None, &email.subject, &email.html).await?;
    info!(subject = %form.subject, "contact message relayed");

    Ok(Json(SendResponse {
        success: true,
        message: "Contact form submitted successfully",
        message_id,
    }))
}

pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({
        "success": true,
        "message": "Email service is running",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    pub q: Option<String>,
    pub level: Option<String>,
    pub category: Option<String>,
}

#[derive(Serialize)]
pub struct CourseListResponse {
    pub success: bool,
    pub total: usize,
    pub count: usize,
    pub courses: Vec<CourseSummary>,
}

/// Turns a filter query value into an enum constraint. Absent or `all` means
/// unconstrained; anything unrecognized is a validation error.
fn parse_filter<T>(
    value: Option<&str>,
    field: &'static str,
    message: &'static str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>, AppError> {
    match value {
        None => Ok(None),
        Some(raw) if raw.is_empty() || raw.eq_ignore_ascii_case("all") => Ok(None),
        Some(raw) => parse(raw)
            .map(Some)
            .ok_or_else(|| AppError::Validation(vec![FieldError { field, message }])),
    }
}

pub async fn list_courses_handler(
    Query(query): Query<CatalogQuery>,
) -> Result<Json<CourseListResponse>, AppError> {
    let filter = CourseFilter {
        query: query.q,
        level: parse_filter(
            query.level.as_deref(),
            "level",
            "Level must be one of Beginner, Intermediate, Advanced",
            Level::parse,
        )?,
        category: parse_filter(
            query.category.as_deref(),
            "category",
            "Category must be one of Generative AI, Pharma",
            Category::parse,
        )?,
    };

    let matched = catalog::search(&filter);

    Ok(Json(CourseListResponse {
        success: true,
        total: catalog::all().len(),
        count: matched.len(),
        courses: matched.into_iter().map(|c| c.summary()).collect(),
    }))
}

pub async fn course_handler(Path(id): Path<u32>) -> Result<Json<CourseDetail>, AppError> {
    let course = catalog::find(id).ok_or(AppError::CourseNotFound(id))?;
    Ok(Json(course.detail()))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPlansResponse {
    pub success: bool,
    pub course_id: u32,
    pub title: &'static str,
    pub price: String,
    pub plans: Vec<PaymentPlan>,
}

pub async fn payment_plans_handler(
    Path(id): Path<u32>,
) -> Result<Json<PaymentPlansResponse>, AppError> {
    let course = catalog::find(id).ok_or(AppError::CourseNotFound(id))?;

    Ok(Json(PaymentPlansResponse {
        success: true,
        course_id: course.id,
        title: course.title,
        price: catalog::format_inr(course.price),
        plans: catalog::payment_plans(course),
    }))
}

#[derive(Serialize)]
pub struct TestimonialsResponse {
    pub success: bool,
    pub testimonials: &'static [Testimonial],
}

pub async fn testimonials_handler() -> Json<TestimonialsResponse> {
    Json(TestimonialsResponse {
        success: true,
        testimonials: testimonials::approved(),
    })
}

#[derive(Serialize)]
pub struct FdpEventsResponse {
    pub success: bool,
    pub events: &'static [FdpEvent],
}

pub async fn fdp_events_handler() -> Json<FdpEventsResponse> {
    Json(FdpEventsResponse {
        success: true,
        events: fdp::schedule(),
    })
}

pub async fn not_found_handler() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "success": false, "message": "Endpoint not found" })),
    )
        .into_response()
}
