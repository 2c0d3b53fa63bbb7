//! Web server: upload a division, query elimination status via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).
//! SCHEDULE_FILE (optional) preloads a schedule at startup; its id is logged.

use actix_web::{
    delete, get, post,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::{DateTime, Utc};
use division_elimination::{
    elimination_report, parse_schedule, team_status, Division, EliminationError, Team,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Unique identifier for a stored division.
type DivisionId = Uuid;

/// Per-division entry: division data + timestamps (for auto-cleanup).
struct DivisionEntry {
    division: Division,
    created_at: DateTime<Utc>,
    last_activity: Instant,
}

/// In-memory state: divisions by ID. Entries are removed after 12h inactivity.
type AppState = Data<RwLock<HashMap<DivisionId, DivisionEntry>>>;

/// Inactivity threshold: divisions not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateDivisionBody {
    teams: Vec<Team>,
}

#[derive(Serialize)]
struct DivisionResponse<'a> {
    id: DivisionId,
    created_at: DateTime<Utc>,
    teams: &'a [Team],
}

/// Path segment: division id (e.g. /api/divisions/{id})
#[derive(Deserialize)]
struct DivisionPath {
    id: DivisionId,
}

/// Path segments: division id and team name (e.g. /api/divisions/{id}/teams/{team})
#[derive(Deserialize)]
struct DivisionTeamPath {
    id: DivisionId,
    team: String,
}

fn not_found(what: &str) -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": what }))
}

fn elimination_error(e: EliminationError) -> HttpResponse {
    match e {
        EliminationError::UnknownTeam(_) => not_found(&e.to_string()),
        EliminationError::InvalidGraph(_) => {
            log::error!("elimination query failed: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() }))
        }
    }
}

fn division_response(id: DivisionId, entry: &DivisionEntry) -> HttpResponse {
    HttpResponse::Ok().json(DivisionResponse {
        id,
        created_at: entry.created_at,
        teams: entry.division.team_records(),
    })
}

/// Why a store access failed.
#[derive(Debug)]
enum StoreError {
    Lock,
    NotFound,
}

impl StoreError {
    fn response(&self) -> HttpResponse {
        match self {
            StoreError::Lock => HttpResponse::InternalServerError().body("lock error"),
            StoreError::NotFound => not_found("No division"),
        }
    }
}

/// Put a division in the store and return its new id.
fn store_division(state: &AppState, division: Division) -> Result<DivisionId, StoreError> {
    let id = Uuid::new_v4();
    let teams = division.number_of_teams();
    let mut g = state.write().map_err(|_| StoreError::Lock)?;
    g.insert(
        id,
        DivisionEntry {
            division,
            created_at: Utc::now(),
            last_activity: Instant::now(),
        },
    );
    log::info!("Stored division {} ({} teams)", id, teams);
    Ok(id)
}

/// Refresh last_activity and copy the division out, so queries run without holding the lock.
fn touch_division(state: &AppState, id: DivisionId) -> Result<Division, StoreError> {
    let mut g = state.write().map_err(|_| StoreError::Lock)?;
    let entry = g.get_mut(&id).ok_or(StoreError::NotFound)?;
    entry.last_activity = Instant::now();
    Ok(entry.division.clone())
}

/// Respond with a stored division (client keeps the id for later requests).
fn stored_response(state: &AppState, id: DivisionId) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return StoreError::Lock.response(),
    };
    match g.get(&id) {
        Some(entry) => division_response(id, entry),
        None => StoreError::NotFound.response(),
    }
}

fn create_response(state: &AppState, division: Division) -> HttpResponse {
    match store_division(state, division) {
        Ok(id) => stored_response(state, id),
        Err(e) => e.response(),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "division-elimination",
    })
}

/// Create a division from a JSON team list.
#[post("/api/divisions")]
async fn api_create_division(state: AppState, body: Json<CreateDivisionBody>) -> HttpResponse {
    match Division::new(body.into_inner().teams) {
        Ok(division) => create_response(&state, division),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Create a division from schedule text (same format as the CLI reads).
#[post("/api/divisions/schedule")]
async fn api_upload_schedule(state: AppState, body: String) -> HttpResponse {
    match parse_schedule(&body) {
        Ok(division) => create_response(&state, division),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Get a division by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/divisions/{id}")]
async fn api_get_division(state: AppState, path: Path<DivisionPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            division_response(path.id, entry)
        }
        None => not_found("No division"),
    }
}

#[delete("/api/divisions/{id}")]
async fn api_delete_division(state: AppState, path: Path<DivisionPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.remove(&path.id) {
        Some(_) => HttpResponse::NoContent().finish(),
        None => not_found("No division"),
    }
}

/// Elimination status of every team in the division.
#[get("/api/divisions/{id}/report")]
async fn api_division_report(state: AppState, path: Path<DivisionPath>) -> HttpResponse {
    let division = match touch_division(&state, path.id) {
        Ok(d) => d,
        Err(e) => return e.response(),
    };
    match elimination_report(&division) {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e) => elimination_error(e),
    }
}

/// Elimination status (and certificate) of one team.
#[get("/api/divisions/{id}/teams/{team}/elimination")]
async fn api_team_elimination(state: AppState, path: Path<DivisionTeamPath>) -> HttpResponse {
    let division = match touch_division(&state, path.id) {
        Ok(d) => d,
        Err(e) => return e.response(),
    };
    match team_status(&division, &path.team) {
        Ok(status) => HttpResponse::Ok().json(status),
        Err(e) => elimination_error(e),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Load SCHEDULE_FILE into the store, if set. Failures are logged, not fatal.
async fn preload_schedule(state: &AppState) {
    let Ok(path) = std::env::var("SCHEDULE_FILE") else {
        return;
    };
    let text = match tokio::fs::read_to_string(&path).await {
        Ok(text) => text,
        Err(e) => {
            log::warn!("Could not read SCHEDULE_FILE {}: {}", path, e);
            return;
        }
    };
    match parse_schedule(&text) {
        Ok(division) => match store_division(state, division) {
            Ok(id) => log::info!("Preloaded {} as division {}", path, id),
            Err(e) => log::warn!("Could not store SCHEDULE_FILE {}: {:?}", path, e),
        },
        Err(e) => log::warn!("Ignoring SCHEDULE_FILE {}: {}", path, e),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<DivisionId, DivisionEntry>::new()));
    preload_schedule(&state).await;

    // Background task: every 30 minutes, remove divisions inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive division(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_create_division)
            .service(api_upload_schedule)
            .service(api_get_division)
            .service(api_delete_division)
            .service(api_division_report)
            .service(api_team_elimination)
    })
    .bind(bind)?
    .run()
    .await
}
