use axum::{routing::post, Json, Router};
use chrono::{Local, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::io::Cursor;

use super::profile::OperatorProfile;
use super::resolver::{resolve, ParsedName};
use super::roster::{RosterImporter, RosterProfile};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub(crate) struct ResolveRequest {
    pub(crate) email: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProfileRequest {
    pub(crate) email: String,
    #[serde(default, deserialize_with = "deserialize_optional_time")]
    pub(crate) time: Option<NaiveTime>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RosterResponse {
    pub(crate) operators: Vec<RosterProfile>,
}

/// Router exposing name resolution to the desk front end.
pub fn identity_router() -> Router {
    Router::new()
        .route("/api/v1/identity/resolve", post(resolve_handler))
        .route("/api/v1/identity/profile", post(profile_handler))
        .route("/api/v1/identity/roster", post(roster_handler))
}

pub(crate) async fn resolve_handler(Json(request): Json<ResolveRequest>) -> Json<ParsedName> {
    Json(resolve(&request.email))
}

pub(crate) async fn profile_handler(Json(request): Json<ProfileRequest>) -> Json<OperatorProfile> {
    let now = request.time.unwrap_or_else(|| Local::now().time());
    Json(OperatorProfile::from_email(&request.email, now))
}

pub(crate) async fn roster_handler(body: String) -> Result<Json<RosterResponse>, AppError> {
    let now = Local::now().time();
    let operators = RosterImporter::from_reader(Cursor::new(body.into_bytes()), now)?;
    Ok(Json(RosterResponse { operators }))
}

pub fn parse_clock_time(raw: &str) -> Result<NaiveTime, String> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map_err(|err| format!("failed to parse '{raw}' as HH:MM ({err})"))
}

fn deserialize_optional_time<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|value| parse_clock_time(&value).map_err(serde::de::Error::custom))
        .transpose()
}
