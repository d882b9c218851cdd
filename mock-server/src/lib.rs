use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

/// Where the team collection is mounted.
pub const COLLECTION_PATH: &str = "/teams";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub goals: i64,
    #[serde(default)]
    pub logo: String,
}

/// Teams in insertion order, the way a JSON-array backed store lists them.
pub type Db = Arc<RwLock<Vec<Team>>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

pub fn app_with(teams: Vec<Team>) -> Router {
    let db: Db = Arc::new(RwLock::new(teams));
    Router::new()
        .route(COLLECTION_PATH, get(list_teams).post(create_team))
        .route("/teams/{id}", get(get_team).put(update_team).delete(delete_team))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, Vec::new()).await
}

pub async fn run_with(listener: TcpListener, teams: Vec<Team>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(teams)).await
}

/// Read a JSON array of teams used to pre-populate the store.
pub async fn load_seed(path: &std::path::Path) -> Result<Vec<Team>, std::io::Error> {
    let raw = tokio::fs::read_to_string(path).await?;
    serde_json::from_str(&raw).map_err(std::io::Error::other)
}

async fn list_teams(State(db): State<Db>) -> Json<Vec<Team>> {
    let teams = db.read().await;
    Json(teams.clone())
}

async fn create_team(
    State(db): State<Db>,
    Json(input): Json<Team>,
) -> Result<(StatusCode, Json<Team>), StatusCode> {
    if input.id.trim().is_empty() {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    let mut teams = db.write().await;
    if teams.iter().any(|t| t.id == input.id) {
        log::warn!("rejected duplicate team id {}", input.id);
        return Err(StatusCode::CONFLICT);
    }
    log::info!("created team {} ({})", input.id, input.name);
    teams.push(input.clone());
    Ok((StatusCode::CREATED, Json(input)))
}

async fn get_team(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Team>, StatusCode> {
    let teams = db.read().await;
    teams
        .iter()
        .find(|t| t.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// Full replace: fields missing from the body fall back to their defaults.
async fn update_team(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(mut input): Json<Team>,
) -> Result<Json<Team>, StatusCode> {
    let mut teams = db.write().await;
    let slot = teams
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    input.id = id;
    *slot = input.clone();
    log::info!("replaced team {}", input.id);
    Ok(Json(input))
}

async fn delete_team(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let mut teams = db.write().await;
    let index = teams
        .iter()
        .position(|t| t.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    teams.remove(index);
    log::info!("deleted team {id}");
    Ok(StatusCode::NO_CONTENT)
}
