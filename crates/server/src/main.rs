// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::NaiveDate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use seva_roster_api::{
    ApiError, CreateShiftRequest, CreateShiftResponse, DropSignupRequest, MonthStatusResponse,
    MyShiftsResponse, RegisterVolunteerRequest, RegisterVolunteerResponse, SeedMonthResponse,
    SignupOutcome, SignupRequest, VolunteerInfo, approve_volunteer, create_shift, drop_signup,
    list_volunteers, month_status, my_shifts, register_volunteer, reject_volunteer,
    remove_volunteer, request_signup, seed_month,
};
use seva_roster_persistence::Persistence;

/// Seva Roster Server - HTTP server for the volunteer shift roster
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses an
    /// in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for roster tables.
    persistence: Arc<Mutex<Persistence>>,
}

/// API request for coordinator-gated volunteer actions.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CoordinatorActionRequest {
    /// The coordinator performing this action.
    approver_id: i64,
}

/// API request for seeding a month of shifts.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct SeedMonthApiRequest {
    /// The year to seed.
    year: i32,
    /// The month to seed (1-12).
    month: u32,
}

/// Query parameters for volunteer listings.
#[derive(Debug, Deserialize)]
struct ListVolunteersQuery {
    /// Optional status filter (`pending`, `approved`, `rejected`).
    status: Option<String>,
}

/// Query parameters for month-scoped endpoints.
#[derive(Debug, Deserialize)]
struct MonthQuery {
    /// The year.
    year: i32,
    /// The month (1-12).
    month: u32,
}

/// Query parameters for a volunteer's month roster.
#[derive(Debug, Deserialize)]
struct MyShiftsQuery {
    /// The volunteer.
    volunteer_id: i64,
    /// The year.
    year: i32,
    /// The month (1-12).
    month: u32,
}

/// API response for signup attempts.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SignupApiResponse {
    /// Whether the signup was stored.
    success: bool,
    /// The signup ID when stored.
    #[serde(skip_serializing_if = "Option::is_none")]
    signup_id: Option<i64>,
    /// The violation reasons when rejected.
    violations: Vec<String>,
}

/// API response for drop and remove operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WriteResponse {
    /// Success indicator.
    success: bool,
    /// A human-readable message.
    message: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal API error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Returns the server's notion of "today".
///
/// Phase classification depends on the calendar date, so this is read
/// once at the HTTP boundary and passed down explicitly.
fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Handler for POST `/volunteers`.
///
/// Registers a volunteer in the `pending` state.
async fn handle_register_volunteer(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RegisterVolunteerRequest>,
) -> Result<Json<RegisterVolunteerResponse>, HttpError> {
    info!(phone = %req.phone, "Handling register_volunteer request");

    let mut persistence = app_state.persistence.lock().await;
    let response: RegisterVolunteerResponse = register_volunteer(&mut persistence, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/volunteers`.
async fn handle_list_volunteers(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ListVolunteersQuery>,
) -> Result<Json<Vec<VolunteerInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let volunteers: Vec<VolunteerInfo> =
        list_volunteers(&mut persistence, query.status.as_deref())?;
    drop(persistence);

    Ok(Json(volunteers))
}

/// Handler for POST `/volunteers/{id}/approve`.
async fn handle_approve_volunteer(
    AxumState(app_state): AxumState<AppState>,
    Path(volunteer_id): Path<i64>,
    Json(req): Json<CoordinatorActionRequest>,
) -> Result<Json<VolunteerInfo>, HttpError> {
    info!(
        volunteer_id,
        approver_id = req.approver_id,
        "Handling approve_volunteer request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let info: VolunteerInfo = approve_volunteer(&mut persistence, volunteer_id, req.approver_id)?;
    drop(persistence);

    Ok(Json(info))
}

/// Handler for POST `/volunteers/{id}/reject`.
async fn handle_reject_volunteer(
    AxumState(app_state): AxumState<AppState>,
    Path(volunteer_id): Path<i64>,
    Json(req): Json<CoordinatorActionRequest>,
) -> Result<Json<VolunteerInfo>, HttpError> {
    info!(
        volunteer_id,
        approver_id = req.approver_id,
        "Handling reject_volunteer request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let info: VolunteerInfo = reject_volunteer(&mut persistence, volunteer_id, req.approver_id)?;
    drop(persistence);

    Ok(Json(info))
}

/// Handler for POST `/volunteers/{id}/remove`.
async fn handle_remove_volunteer(
    AxumState(app_state): AxumState<AppState>,
    Path(volunteer_id): Path<i64>,
    Json(req): Json<CoordinatorActionRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    info!(
        volunteer_id,
        approver_id = req.approver_id,
        "Handling remove_volunteer request"
    );

    let mut persistence = app_state.persistence.lock().await;
    remove_volunteer(&mut persistence, volunteer_id, req.approver_id)?;
    drop(persistence);

    Ok(Json(WriteResponse {
        success: true,
        message: format!("Removed volunteer {volunteer_id}"),
    }))
}

/// Handler for POST `/shifts`.
async fn handle_create_shift(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateShiftRequest>,
) -> Result<Json<CreateShiftResponse>, HttpError> {
    info!(date = %req.date, category = %req.category, "Handling create_shift request");

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateShiftResponse = create_shift(&mut persistence, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/shifts/seed`.
///
/// Seeds one kakad and one robe shift per day of the month.
async fn handle_seed_month(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SeedMonthApiRequest>,
) -> Result<Json<SeedMonthResponse>, HttpError> {
    info!(year = req.year, month = req.month, "Handling seed_month request");

    let mut persistence = app_state.persistence.lock().await;
    let response: SeedMonthResponse = seed_month(&mut persistence, req.year, req.month)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/status`.
///
/// Returns the coordinator fill-status view for a month.
async fn handle_month_status(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<MonthStatusResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: MonthStatusResponse = month_status(&mut persistence, query.year, query.month)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/signups`.
///
/// Validates the signup and stores it when every rule passes. Rule
/// denials come back as HTTP 422 carrying the violation reasons.
async fn handle_create_signup(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Response, HttpError> {
    info!(
        volunteer_id = req.volunteer_id,
        shift_id = req.shift_id,
        "Handling create_signup request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let outcome: SignupOutcome = request_signup(&mut persistence, &req, today())?;
    drop(persistence);

    match outcome {
        SignupOutcome::Created { signup_id } => Ok((
            StatusCode::CREATED,
            Json(SignupApiResponse {
                success: true,
                signup_id: Some(signup_id),
                violations: Vec::new(),
            }),
        )
            .into_response()),
        SignupOutcome::Rejected { violations } => {
            let reasons: Vec<String> = violations.into_iter().map(|v| v.reason).collect();
            Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(SignupApiResponse {
                    success: false,
                    signup_id: None,
                    violations: reasons,
                }),
            )
                .into_response())
        }
    }
}

/// Handler for POST `/signups/drop`.
async fn handle_drop_signup(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<DropSignupRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    info!(
        volunteer_id = req.volunteer_id,
        shift_id = req.shift_id,
        "Handling drop_signup request"
    );

    let mut persistence = app_state.persistence.lock().await;
    drop_signup(&mut persistence, &req)?;
    drop(persistence);

    Ok(Json(WriteResponse {
        success: true,
        message: String::from("Signup dropped"),
    }))
}

/// Handler for GET `/signups`.
///
/// Returns a volunteer's active signups for a month.
async fn handle_my_shifts(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<MyShiftsQuery>,
) -> Result<Json<MyShiftsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: MyShiftsResponse = my_shifts(
        &mut persistence,
        query.volunteer_id,
        query.year,
        query.month,
    )?;
    drop(persistence);

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/volunteers", post(handle_register_volunteer))
        .route("/volunteers", get(handle_list_volunteers))
        .route("/volunteers/{volunteer_id}/approve", post(handle_approve_volunteer))
        .route("/volunteers/{volunteer_id}/reject", post(handle_reject_volunteer))
        .route("/volunteers/{volunteer_id}/remove", post(handle_remove_volunteer))
        .route("/shifts", post(handle_create_shift))
        .route("/shifts/seed", post(handle_seed_month))
        .route("/status", get(handle_month_status))
        .route("/signups", post(handle_create_signup))
        .route("/signups", get(handle_my_shifts))
        .route("/signups/drop", post(handle_drop_signup))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Seva Roster Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
