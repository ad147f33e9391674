//! Single binary web server: operator page from templates/, scoreboard API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Log level via RUST_LOG (default info).

use actix_web::{
    delete, get, post,
    http::header,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use match_scoreboard_web::{
    events_to_csv, MatchId, MatchSetup, PlayerId, Scoreboard, ScoreboardAction, ScoreboardError,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-scoreboard entry: live state + last activity time (for auto-cleanup).
struct ScoreboardEntry {
    scoreboard: Scoreboard,
    last_activity: Instant,
}

/// In-memory state: open scoreboards by id. Nothing survives a restart.
type AppState = Data<RwLock<HashMap<MatchId, ScoreboardEntry>>>;

/// Scoreboards not touched for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

/// Clock step.
const TICK_PERIOD: Duration = Duration::from_secs(1);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct ConfirmPlayerBody {
    player_id: PlayerId,
}

/// Path segment: scoreboard id (e.g. /api/scoreboards/{id})
#[derive(Deserialize)]
struct ScoreboardPath {
    id: MatchId,
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No scoreboard" }))
}

fn bad_request(e: ScoreboardError) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

/// Look up a scoreboard, refresh its activity time and run `f` on it.
/// Responds with the updated scoreboard, or the error `f` returned.
fn with_scoreboard<F>(state: &AppState, id: MatchId, f: F) -> HttpResponse
where
    F: FnOnce(&mut Scoreboard) -> Result<(), ScoreboardError>,
{
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    match f(&mut entry.scoreboard) {
        Ok(()) => HttpResponse::Ok().json(&entry.scoreboard),
        Err(e) => {
            log::debug!("scoreboard {}: rejected: {}", id, e);
            bad_request(e)
        }
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "match-scoreboard-web",
    })
}

#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Open a scoreboard for a match (returns it with id; client keeps the id for later calls).
#[post("/api/scoreboards")]
async fn api_open_scoreboard(state: AppState, body: Json<MatchSetup>) -> HttpResponse {
    let scoreboard = Scoreboard::new(body.into_inner());
    let id = scoreboard.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    log::info!(
        "Opened {} scoreboard {}: {} vs {}",
        scoreboard.sport(),
        id,
        scoreboard.setup.home.name,
        scoreboard.setup.away.name
    );
    let resp = HttpResponse::Ok().json(&scoreboard);
    g.insert(
        id,
        ScoreboardEntry {
            scoreboard,
            last_activity: Instant::now(),
        },
    );
    resp
}

#[get("/api/scoreboards/{id}")]
async fn api_get_scoreboard(state: AppState, path: Path<ScoreboardPath>) -> HttpResponse {
    with_scoreboard(&state, path.id, |_| Ok(()))
}

/// Close a scoreboard; its state is gone afterwards.
#[delete("/api/scoreboards/{id}")]
async fn api_close_scoreboard(state: AppState, path: Path<ScoreboardPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.remove(&path.id) {
        Some(entry) => {
            log::info!(
                "Closed scoreboard {} after {} event(s)",
                path.id,
                entry.scoreboard.events().len()
            );
            HttpResponse::NoContent().finish()
        }
        None => not_found(),
    }
}

/// Apply an operator action (unattributed).
#[post("/api/scoreboards/{id}/actions")]
async fn api_apply_action(
    state: AppState,
    path: Path<ScoreboardPath>,
    body: Json<ScoreboardAction>,
) -> HttpResponse {
    let action = body.into_inner();
    with_scoreboard(&state, path.id, move |sb| sb.apply(action))
}

/// Open player selection for an action; it is applied on confirm.
#[post("/api/scoreboards/{id}/selection")]
async fn api_request_player(
    state: AppState,
    path: Path<ScoreboardPath>,
    body: Json<ScoreboardAction>,
) -> HttpResponse {
    let action = body.into_inner();
    with_scoreboard(&state, path.id, move |sb| sb.request_player(action))
}

#[post("/api/scoreboards/{id}/selection/confirm")]
async fn api_confirm_player(
    state: AppState,
    path: Path<ScoreboardPath>,
    body: Json<ConfirmPlayerBody>,
) -> HttpResponse {
    let player_id = body.player_id;
    with_scoreboard(&state, path.id, move |sb| sb.confirm_player(player_id))
}

/// Dismiss player selection; the pending action is dropped.
#[delete("/api/scoreboards/{id}/selection")]
async fn api_dismiss_selection(state: AppState, path: Path<ScoreboardPath>) -> HttpResponse {
    with_scoreboard(&state, path.id, |sb| {
        sb.dismiss_selection();
        Ok(())
    })
}

#[post("/api/scoreboards/{id}/clock/toggle")]
async fn api_toggle_clock(state: AppState, path: Path<ScoreboardPath>) -> HttpResponse {
    with_scoreboard(&state, path.id, Scoreboard::toggle_clock)
}

#[post("/api/scoreboards/{id}/clock/reset")]
async fn api_reset_clock(state: AppState, path: Path<ScoreboardPath>) -> HttpResponse {
    with_scoreboard(&state, path.id, Scoreboard::reset_clock)
}

/// Player and team stats with leaders, derived from the event log.
#[get("/api/scoreboards/{id}/stats")]
async fn api_stats(state: AppState, path: Path<ScoreboardPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(entry.scoreboard.stats())
        }
        None => not_found(),
    }
}

/// Event log as CSV download.
#[get("/api/scoreboards/{id}/events.csv")]
async fn api_events_csv(state: AppState, path: Path<ScoreboardPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get(&path.id) {
        Some(e) => e,
        None => return not_found(),
    };
    match events_to_csv(entry.scoreboard.events()) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"match-{}.csv\"", path.id),
            ))
            .body(body),
        Err(e) => {
            log::error!("CSV export failed for scoreboard {}: {}", path.id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({ "error": "export failed" }))
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
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

    let state = Data::new(RwLock::new(HashMap::<MatchId, ScoreboardEntry>::new()));

    // Background task: drive running match clocks once per second
    let state_clock = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(TICK_PERIOD);
        loop {
            interval.tick().await;
            let mut g = match state_clock.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            for (id, entry) in g.iter_mut() {
                if let Some(t) = entry.scoreboard.tick() {
                    if t.is_zero() {
                        log::info!("Clock of scoreboard {} reached 00:00", id);
                    }
                }
            }
        }
    });

    // Background task: every 30 minutes, remove scoreboards inactive for 12+ hours
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
                log::info!("Cleaned up {} inactive scoreboard(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_open_scoreboard)
            .service(api_get_scoreboard)
            .service(api_close_scoreboard)
            .service(api_apply_action)
            .service(api_request_player)
            .service(api_confirm_player)
            .service(api_dismiss_selection)
            .service(api_toggle_clock)
            .service(api_reset_clock)
            .service(api_stats)
            .service(api_events_csv)
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
