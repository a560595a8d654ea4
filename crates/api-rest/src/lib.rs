//! # API REST
//!
//! REST API implementation for medrec.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, status-code mapping)
//!
//! Uses `medrec-core` for the domain model, parsing, and stores.

#![warn(rust_2018_idioms)]

pub mod error;

use axum::{
    extract::{Path as AxumPath, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

use medrec_core::{
    parse, Diagnosis, DiagnosisService, Discharge, Entry, Gender, HealthCheckRating, NewDiagnosis,
    NewEntry, NewPatient, NonSensitivePatient, Patient, PatientService, RecordResult, SickLeave,
};

use error::ApiError;

/// Application state shared across REST API handlers.
///
/// Holds the service handles for patient and diagnosis data operations.
#[derive(Clone)]
pub struct AppState {
    pub patient_service: PatientService,
    pub diagnosis_service: DiagnosisService,
}

impl AppState {
    /// Builds the state with both stores seeded from the embedded sample data.
    pub fn seeded() -> RecordResult<Self> {
        Ok(Self {
            patient_service: PatientService::seeded()?,
            diagnosis_service: DiagnosisService::seeded()?,
        })
    }
}

/// Health check response body.
#[derive(Serialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        ping,
        health,
        list_patients,
        create_patient,
        get_patient,
        add_entry,
        list_diagnoses,
        create_diagnosis,
    ),
    components(schemas(
        HealthRes,
        Patient,
        NonSensitivePatient,
        NewPatient,
        Gender,
        Entry,
        NewEntry,
        HealthCheckRating,
        Discharge,
        SickLeave,
        Diagnosis,
        NewDiagnosis,
    ))
)]
struct ApiDoc;

/// Builds the application router.
///
/// All endpoints live under `/api`; Swagger UI is served at `/swagger-ui`
/// with the OpenAPI document at `/api-docs/openapi.json`. CORS is permissive
/// because the SPA is served from another origin.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/ping", get(ping))
        .route("/api/health", get(health))
        .route("/api/patients", get(list_patients))
        .route("/api/patients", post(create_patient))
        .route("/api/patients/:id", get(get_patient))
        .route("/api/patients/:id/entries", post(add_entry))
        .route("/api/diagnoses", get(list_diagnoses))
        .route("/api/diagnoses", post(create_diagnosis))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/ping",
    responses(
        (status = 200, description = "Liveness probe", body = String)
    )
)]
/// Liveness probe.
///
/// # Returns
/// * `&'static str` - Always the string `pong`
#[axum::debug_handler]
async fn ping() -> &'static str {
    tracing::debug!("someone pinged here");
    "pong"
}

#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API.
///
/// Used for monitoring and load balancer health checks.
///
/// # Returns
/// * `Json<HealthRes>` - Health status response containing service status
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "medrec REST API is alive".into(),
    })
}

#[utoipa::path(
    get,
    path = "/api/patients",
    responses(
        (status = 200, description = "List of patients without sensitive fields", body = [NonSensitivePatient])
    )
)]
/// List all patients in their non-sensitive projection.
///
/// The social security number and the entry list are omitted from every
/// record; fetch a single patient to see them.
///
/// # Returns
/// * `Json<Vec<NonSensitivePatient>>` - All known patients
#[axum::debug_handler]
async fn list_patients(State(state): State<AppState>) -> Json<Vec<NonSensitivePatient>> {
    Json(state.patient_service.list_non_sensitive())
}

#[utoipa::path(
    post,
    path = "/api/patients",
    request_body = NewPatient,
    responses(
        (status = 201, description = "Patient created", body = Patient),
        (status = 400, description = "Validation failure")
    )
)]
/// Create a new patient record.
///
/// The body is narrowed field by field; a validation failure yields `400`
/// with a message naming the offending field. On success the created record
/// is returned with server-assigned ids.
///
/// # Errors
/// Returns `400 Bad Request` when the body fails validation.
#[axum::debug_handler]
async fn create_patient(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Patient>), ApiError> {
    let new = parse::parse_new_patient(&body)?;
    let patient = state.patient_service.add(new);
    Ok((StatusCode::CREATED, Json(patient)))
}

#[utoipa::path(
    get,
    path = "/api/patients/{id}",
    params(
        ("id" = Uuid, Path, description = "Patient identifier")
    ),
    responses(
        (status = 200, description = "Full patient record", body = Patient),
        (status = 404, description = "No patient with the given id")
    )
)]
/// Fetch a full patient record by id, entries included.
///
/// # Errors
/// Returns `404 Not Found` when no patient has the given id.
#[axum::debug_handler]
async fn get_patient(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<Uuid>,
) -> Result<Json<Patient>, ApiError> {
    state
        .patient_service
        .get(id)
        .map(Json)
        .ok_or_else(|| medrec_core::RecordError::PatientNotFound(id).into())
}

#[utoipa::path(
    post,
    path = "/api/patients/{id}/entries",
    params(
        ("id" = Uuid, Path, description = "Patient identifier")
    ),
    request_body = NewEntry,
    responses(
        (status = 201, description = "Entry created", body = Entry),
        (status = 400, description = "Validation failure"),
        (status = 404, description = "No patient with the given id")
    )
)]
/// Add a medical entry to an existing patient.
///
/// The body must carry a `type` tag of `HealthCheck`, `Hospital`, or
/// `OccupationalHealthcare` plus the variant's required fields.
///
/// # Errors
/// Returns `400 Bad Request` when the body fails validation and
/// `404 Not Found` when no patient has the given id.
#[axum::debug_handler]
async fn add_entry(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<Uuid>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Entry>), ApiError> {
    let new = parse::parse_new_entry(&body)?;
    let entry = state.patient_service.add_entry(id, new)?;
    Ok((StatusCode::CREATED, Json(entry)))
}

#[utoipa::path(
    get,
    path = "/api/diagnoses",
    responses(
        (status = 200, description = "List of diagnosis codes", body = [Diagnosis])
    )
)]
/// List all known diagnosis codes.
#[axum::debug_handler]
async fn list_diagnoses(State(state): State<AppState>) -> Json<Vec<Diagnosis>> {
    Json(state.diagnosis_service.list())
}

#[utoipa::path(
    post,
    path = "/api/diagnoses",
    request_body = NewDiagnosis,
    responses(
        (status = 201, description = "Diagnosis created", body = Diagnosis),
        (status = 400, description = "Validation failure or duplicate code")
    )
)]
/// Create a new diagnosis code.
///
/// # Errors
/// Returns `400 Bad Request` when the body fails validation or the code
/// already exists.
#[axum::debug_handler]
async fn create_diagnosis(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Diagnosis>), ApiError> {
    let new = parse::parse_new_diagnosis(&body)?;
    let diagnosis = state.diagnosis_service.add(new)?;
    Ok((StatusCode::CREATED, Json(diagnosis)))
}
