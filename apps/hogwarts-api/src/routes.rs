use axum::{
	Json, Router,
	extract::{Query, State},
	http::{StatusCode, Uri},
	response::{IntoResponse, Response},
	routing::get,
};
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use hogwarts_domain::{House, filter};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/houses", get(houses))
		.fallback(not_found)
		.layer(TraceLayer::new_for_http())
		.layer(CorsLayer::permissive())
		.with_state(state)
}

#[derive(Debug, Default, Deserialize)]
pub struct HousesQuery {
	/// Case-insensitive substring of the house name. Absent or empty returns everything.
	pub name: Option<String>,
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn houses(
	State(state): State<AppState>,
	Query(query): Query<HousesQuery>,
) -> Json<Vec<House>> {
	let houses = match query.name.as_deref().filter(|name| !name.is_empty()) {
		Some(name) => state
			.catalogue
			.iter()
			.filter(|house| filter::name_matches(&house.name, name))
			.cloned()
			.collect::<Vec<_>>(),
		None => state.catalogue.as_ref().clone(),
	};

	tracing::debug!(name = ?query.name, count = houses.len(), "Serving houses.");

	Json(houses)
}

async fn not_found(uri: Uri) -> ApiError {
	ApiError::new(StatusCode::NOT_FOUND, "not_found", format!("No route for {}.", uri.path()))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}
impl ApiError {
	fn new(status: StatusCode, error_code: impl Into<String>, message: impl Into<String>) -> Self {
		Self { status, error_code: error_code.into(), message: message.into() }
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}
