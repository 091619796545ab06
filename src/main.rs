use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post, put},
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use meditrack_ai::{NotesSummarizer, SummarizerConfig};
use meditrack_core::{
    ActionError, Appointment, AppointmentStatus, Doctor, DoctorDetail, HospitalService,
    NewAppointment, NewDoctor, NewPatient, Patient, PatientDetail, Room, Urgency,
};

/// Application state shared across REST API handlers.
///
/// Holds the hospital action services (over the one seeded store) and the
/// summarization client.
#[derive(Clone)]
struct AppState {
    hospital: HospitalService,
    summarizer: NotesSummarizer,
}

/// Health check response.
#[derive(Serialize, ToSchema)]
struct HealthRes {
    ok: bool,
    message: String,
}

/// Request body for the notes-summarization endpoint.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
struct SummarizeNotesReq {
    patient_notes: String,
}

/// Envelope for summarization results, matching the portal contract:
/// success with a summary, or failure with a plain-language error message.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
struct SummarizeNotesRes {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Request body for the room occupancy endpoint.
///
/// `patientId` names the occupant when `isOccupied` is true; the display name
/// is resolved server-side so the denormalized copy cannot drift at write
/// time.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
struct UpdateOccupancyReq {
    is_occupied: bool,
    #[serde(default)]
    patient_id: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        list_patients,
        create_patient,
        get_patient,
        update_patient,
        delete_patient,
        list_doctors,
        create_doctor,
        get_doctor,
        update_doctor,
        delete_doctor,
        list_appointments,
        create_appointment,
        update_appointment,
        delete_appointment,
        list_rooms,
        update_room_occupancy,
        summarize_notes
    ),
    components(schemas(
        HealthRes,
        Patient,
        PatientDetail,
        NewPatient,
        Doctor,
        DoctorDetail,
        NewDoctor,
        Appointment,
        NewAppointment,
        AppointmentStatus,
        Urgency,
        Room,
        UpdateOccupancyReq,
        SummarizeNotesReq,
        SummarizeNotesRes
    ))
)]
struct ApiDoc;

/// Main entry point for the MediTrack Lite REST server.
///
/// All record data is in-memory and reseeded from the fixed dataset at every
/// start. The summarization provider is external and configured via
/// environment variables.
///
/// # Environment Variables
/// - `MEDITRACK_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `SUMMARIZER_URL`: summarization endpoint (default: "http://127.0.0.1:8090/v1/summarize")
/// - `SUMMARIZER_MODEL`: model name sent to the provider (default: "medical-summarizer")
/// - `SUMMARIZER_API_KEY`: optional bearer token for the provider
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("meditrack=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr =
        std::env::var("MEDITRACK_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let summarizer_cfg = SummarizerConfig::new(
        std::env::var("SUMMARIZER_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8090/v1/summarize".into()),
        std::env::var("SUMMARIZER_MODEL").unwrap_or_else(|_| "medical-summarizer".into()),
        std::env::var("SUMMARIZER_API_KEY").ok(),
    )?;

    tracing::info!("++ Starting MediTrack REST on {}", rest_addr);

    let state = AppState {
        hospital: HospitalService::seeded(),
        summarizer: NotesSummarizer::new(summarizer_cfg),
    };

    let app = Router::new()
        .route("/health", get(health))
        .route("/patients", get(list_patients).post(create_patient))
        .route(
            "/patients/:id",
            get(get_patient).put(update_patient).delete(delete_patient),
        )
        .route("/doctors", get(list_doctors).post(create_doctor))
        .route(
            "/doctors/:id",
            get(get_doctor).put(update_doctor).delete(delete_doctor),
        )
        .route(
            "/appointments",
            get(list_appointments).post(create_appointment),
        )
        .route(
            "/appointments/:id",
            put(update_appointment).delete(delete_appointment),
        )
        .route("/rooms", get(list_rooms))
        .route("/rooms/:id/occupancy", put(update_room_occupancy))
        .route("/summarize-notes", post(summarize_notes))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Maps action failures to HTTP responses with a plain-language message.
fn error_response(err: ActionError) -> (StatusCode, String) {
    let status = match &err {
        ActionError::NotFound { .. } => StatusCode::NOT_FOUND,
        ActionError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        ActionError::DanglingReference { .. } => StatusCode::UNPROCESSABLE_ENTITY,
    };
    tracing::warn!("action failed: {err}");
    (status, err.to_string())
}

fn not_found(entity: &str, id: &str) -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, format!("{entity} {id} not found"))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "MediTrack is alive".into(),
    })
}

#[utoipa::path(
    get,
    path = "/patients",
    responses(
        (status = 200, description = "List of patients", body = [Patient])
    )
)]
async fn list_patients(State(state): State<AppState>) -> Json<Vec<Patient>> {
    Json(state.hospital.patients.list())
}

#[utoipa::path(
    post,
    path = "/patients",
    request_body = NewPatient,
    responses(
        (status = 201, description = "Patient created", body = Patient),
        (status = 400, description = "Invalid input")
    )
)]
/// Create a new patient record.
///
/// The id and avatar are assigned server-side; `isFlagged` defaults to false
/// when unset.
async fn create_patient(
    State(state): State<AppState>,
    Json(req): Json<NewPatient>,
) -> Result<(StatusCode, Json<Patient>), (StatusCode, String)> {
    let patient = state.hospital.patients.add(req).map_err(error_response)?;
    Ok((StatusCode::CREATED, Json(patient)))
}

#[utoipa::path(
    get,
    path = "/patients/{id}",
    params(("id" = String, Path, description = "Patient id")),
    responses(
        (status = 200, description = "Patient with derived appointment list", body = PatientDetail),
        (status = 404, description = "Patient not found")
    )
)]
/// Fetch a patient together with its appointment list, recomputed from the
/// canonical appointment collection.
async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PatientDetail>, (StatusCode, String)> {
    state
        .hospital
        .patients
        .get(&id)
        .map(Json)
        .ok_or_else(|| not_found("patient", &id))
}

#[utoipa::path(
    put,
    path = "/patients/{id}",
    params(("id" = String, Path, description = "Patient id")),
    request_body = Patient,
    responses(
        (status = 200, description = "Patient updated (full replace)", body = Patient),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Patient not found")
    )
)]
/// Replace a patient record wholesale. The body's id must match the path.
async fn update_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patient): Json<Patient>,
) -> Result<Json<Patient>, (StatusCode, String)> {
    if patient.id != id {
        return Err((
            StatusCode::BAD_REQUEST,
            "body id does not match path id".into(),
        ));
    }
    let stored = state
        .hospital
        .patients
        .update(patient)
        .map_err(error_response)?;
    Ok(Json(stored))
}

#[utoipa::path(
    delete,
    path = "/patients/{id}",
    params(("id" = String, Path, description = "Patient id")),
    responses(
        (status = 204, description = "Patient deleted"),
        (status = 404, description = "Patient not found")
    )
)]
async fn delete_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    state.hospital.patients.delete(&id).map_err(error_response)?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/doctors",
    responses(
        (status = 200, description = "List of doctors", body = [Doctor])
    )
)]
async fn list_doctors(State(state): State<AppState>) -> Json<Vec<Doctor>> {
    Json(state.hospital.doctors.list())
}

#[utoipa::path(
    post,
    path = "/doctors",
    request_body = NewDoctor,
    responses(
        (status = 201, description = "Doctor created", body = Doctor),
        (status = 400, description = "Invalid input")
    )
)]
async fn create_doctor(
    State(state): State<AppState>,
    Json(req): Json<NewDoctor>,
) -> Result<(StatusCode, Json<Doctor>), (StatusCode, String)> {
    let doctor = state.hospital.doctors.add(req).map_err(error_response)?;
    Ok((StatusCode::CREATED, Json(doctor)))
}

#[utoipa::path(
    get,
    path = "/doctors/{id}",
    params(("id" = String, Path, description = "Doctor id")),
    responses(
        (status = 200, description = "Doctor with derived schedule", body = DoctorDetail),
        (status = 404, description = "Doctor not found")
    )
)]
async fn get_doctor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DoctorDetail>, (StatusCode, String)> {
    state
        .hospital
        .doctors
        .get(&id)
        .map(Json)
        .ok_or_else(|| not_found("doctor", &id))
}

#[utoipa::path(
    put,
    path = "/doctors/{id}",
    params(("id" = String, Path, description = "Doctor id")),
    request_body = Doctor,
    responses(
        (status = 200, description = "Doctor updated (full replace)", body = Doctor),
        (status = 404, description = "Doctor not found")
    )
)]
async fn update_doctor(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(doctor): Json<Doctor>,
) -> Result<Json<Doctor>, (StatusCode, String)> {
    if doctor.id != id {
        return Err((
            StatusCode::BAD_REQUEST,
            "body id does not match path id".into(),
        ));
    }
    let stored = state
        .hospital
        .doctors
        .update(doctor)
        .map_err(error_response)?;
    Ok(Json(stored))
}

#[utoipa::path(
    delete,
    path = "/doctors/{id}",
    params(("id" = String, Path, description = "Doctor id")),
    responses(
        (status = 204, description = "Doctor deleted"),
        (status = 404, description = "Doctor not found")
    )
)]
async fn delete_doctor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    state.hospital.doctors.delete(&id).map_err(error_response)?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/appointments",
    responses(
        (status = 200, description = "List of appointments", body = [Appointment])
    )
)]
async fn list_appointments(State(state): State<AppState>) -> Json<Vec<Appointment>> {
    Json(state.hospital.appointments.list())
}

#[utoipa::path(
    post,
    path = "/appointments",
    request_body = NewAppointment,
    responses(
        (status = 201, description = "Appointment created", body = Appointment),
        (status = 400, description = "Invalid input"),
        (status = 422, description = "Referenced patient or doctor does not exist")
    )
)]
/// Create an appointment. The patient and doctor names are denormalized from
/// the referenced records; dangling references are refused.
async fn create_appointment(
    State(state): State<AppState>,
    Json(req): Json<NewAppointment>,
) -> Result<(StatusCode, Json<Appointment>), (StatusCode, String)> {
    let appointment = state
        .hospital
        .appointments
        .add(req)
        .map_err(error_response)?;
    Ok((StatusCode::CREATED, Json(appointment)))
}

#[utoipa::path(
    put,
    path = "/appointments/{id}",
    params(("id" = String, Path, description = "Appointment id")),
    request_body = Appointment,
    responses(
        (status = 200, description = "Appointment updated (full replace)", body = Appointment),
        (status = 404, description = "Appointment not found")
    )
)]
async fn update_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(appointment): Json<Appointment>,
) -> Result<Json<Appointment>, (StatusCode, String)> {
    if appointment.id != id {
        return Err((
            StatusCode::BAD_REQUEST,
            "body id does not match path id".into(),
        ));
    }
    let stored = state
        .hospital
        .appointments
        .update(appointment)
        .map_err(error_response)?;
    Ok(Json(stored))
}

#[utoipa::path(
    delete,
    path = "/appointments/{id}",
    params(("id" = String, Path, description = "Appointment id")),
    responses(
        (status = 204, description = "Appointment deleted"),
        (status = 404, description = "Appointment not found")
    )
)]
async fn delete_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    state
        .hospital
        .appointments
        .delete(&id)
        .map_err(error_response)?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/rooms",
    responses(
        (status = 200, description = "List of rooms", body = [Room])
    )
)]
async fn list_rooms(State(state): State<AppState>) -> Json<Vec<Room>> {
    Json(state.hospital.rooms.list())
}

#[utoipa::path(
    put,
    path = "/rooms/{id}/occupancy",
    params(("id" = String, Path, description = "Room id")),
    request_body = UpdateOccupancyReq,
    responses(
        (status = 200, description = "Room occupancy updated", body = Room),
        (status = 404, description = "Room not found"),
        (status = 422, description = "Occupant patient does not exist")
    )
)]
/// Update a room's occupancy. Occupant fields are set or cleared together.
async fn update_room_occupancy(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateOccupancyReq>,
) -> Result<Json<Room>, (StatusCode, String)> {
    let occupant = if req.is_occupied {
        match &req.patient_id {
            Some(patient_id) => Some(patient_id.as_str()),
            None => {
                return Err((
                    StatusCode::BAD_REQUEST,
                    "patientId is required when isOccupied is true".into(),
                ));
            }
        }
    } else {
        None
    };

    let room = state
        .hospital
        .rooms
        .set_occupancy(&id, occupant)
        .map_err(error_response)?;
    Ok(Json(room))
}

#[utoipa::path(
    post,
    path = "/summarize-notes",
    request_body = SummarizeNotesReq,
    responses(
        (status = 200, description = "Summarization result envelope", body = SummarizeNotesRes)
    )
)]
/// Summarize free-text patient notes via the external provider.
///
/// Empty input is rejected before any provider call. Provider failures are
/// surfaced in the envelope as a descriptive message; nothing is retried.
async fn summarize_notes(
    State(state): State<AppState>,
    Json(req): Json<SummarizeNotesReq>,
) -> Json<SummarizeNotesRes> {
    match state.summarizer.summarize(&req.patient_notes).await {
        Ok(summary) => Json(SummarizeNotesRes {
            success: true,
            summary: Some(summary),
            error: None,
        }),
        Err(e) => {
            tracing::error!("summarize notes error: {e}");
            Json(SummarizeNotesRes {
                success: false,
                summary: None,
                error: Some(format!("Failed to summarize notes: {e}")),
            })
        }
    }
}
