//! Food HTTP Routes
//!
//! CRUD endpoints over the food store.
//!
//! - `GET /foods` - list, or search when `name`/`description`/`venue` is given
//! - `GET /foods/:id` - one food
//! - `POST /foods` - create from a form body
//! - `PUT /foods/:id` - replace from a form body
//! - `DELETE /foods/:id` - remove
//!
//! A missing or unreadable form body reads as empty fields.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Form, Router,
};

use crate::encoding::{EncodeResult, Format};
use crate::observability::{log_event_with_fields, Event, MetricsRegistry};
use crate::store::{Food, FoodFilter, FoodRepository, NewFood};

use super::errors::{ApiError, ApiResult};

// ==================
// Shared State
// ==================

/// State shared by every handler
pub struct FoodsState {
    pub store: Arc<dyn FoodRepository>,
    pub metrics: MetricsRegistry,
}

impl FoodsState {
    pub fn new(store: Arc<dyn FoodRepository>) -> Self {
        Self {
            store,
            metrics: MetricsRegistry::new(),
        }
    }

    /// Count and log a fault at ERROR
    pub(crate) fn record_fault(&self, message: &str) {
        self.metrics.increment_store_faults();
        log_event_with_fields(Event::StoreFault, &[("error", message)]);
    }

    /// Count, log and render a failed request
    fn reject(&self, err: ApiError, format: Format) -> Response {
        if err.is_fault() {
            self.record_fault(&err.to_string());
        }

        match &err {
            ApiError::NotFound(_) => self.metrics.increment_not_found(),
            ApiError::AlreadyExists { name, venue } => {
                self.metrics.increment_conflicts();
                log_event_with_fields(
                    Event::WriteConflict,
                    &[("name", name.as_str()), ("venue", venue.as_str())],
                );
            }
            ApiError::BadRequest(reason) => {
                log_event_with_fields(Event::RequestRejected, &[("reason", reason.as_str())]);
            }
            _ => {}
        }
        err.render(format)
    }
}

// ==================
// Food Routes
// ==================

/// Create food routes
pub fn food_routes(state: Arc<FoodsState>) -> Router {
    Router::new()
        .route("/foods", get(list_foods_handler).post(create_food_handler))
        .route(
            "/foods/:id",
            get(get_food_handler)
                .put(update_food_handler)
                .delete(delete_food_handler),
        )
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Ids that do not parse are reported exactly like unknown ids
fn parse_id(raw: &str) -> ApiResult<u64> {
    raw.parse()
        .map_err(|_| ApiError::NotFound(raw.to_string()))
}

/// Form fields, or empty ones when the body is absent or not a form
fn form_fields(form: Result<Form<NewFood>, FormRejection>) -> NewFood {
    form.map(|Form(input)| input).unwrap_or_default()
}

/// Build a response from an encoded body
fn encoded(format: Format, status: StatusCode, body: EncodeResult<String>) -> ApiResult<Response> {
    let content_type = HeaderValue::from_static(format.encoder().content_type());
    Ok((status, [(header::CONTENT_TYPE, content_type)], body?).into_response())
}

// ==================
// Handlers
// ==================

async fn list_foods_handler(
    State(state): State<Arc<FoodsState>>,
    headers: HeaderMap,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    let format = Format::negotiate(&headers);
    list_foods(&state, format, query).unwrap_or_else(|err| state.reject(err, format))
}

fn list_foods(
    state: &FoodsState,
    format: Format,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<Response> {
    let Query(pairs) = query.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let filter = FoodFilter::from_pairs(pairs);

    let foods = if filter.is_empty() {
        state.store.get_all()?
    } else {
        state.store.find(&filter)?
    };
    encoded(format, StatusCode::OK, format.encoder().encode_foods(&foods))
}

async fn get_food_handler(
    State(state): State<Arc<FoodsState>>,
    headers: HeaderMap,
    Path(raw_id): Path<String>,
) -> Response {
    let format = Format::negotiate(&headers);
    get_food(&state, format, &raw_id).unwrap_or_else(|err| state.reject(err, format))
}

fn get_food(state: &FoodsState, format: Format, raw_id: &str) -> ApiResult<Response> {
    let id = parse_id(raw_id)?;
    let food = state
        .store
        .get(id)?
        .ok_or_else(|| ApiError::NotFound(raw_id.to_string()))?;
    encoded(format, StatusCode::OK, format.encoder().encode_food(&food))
}

async fn create_food_handler(
    State(state): State<Arc<FoodsState>>,
    headers: HeaderMap,
    form: Result<Form<NewFood>, FormRejection>,
) -> Response {
    let format = Format::negotiate(&headers);
    create_food(&state, format, form_fields(form)).unwrap_or_else(|err| state.reject(err, format))
}

fn create_food(state: &FoodsState, format: Format, input: NewFood) -> ApiResult<Response> {
    let id = state.store.create(input.clone())?;
    let food = Food::with_id(id, input);

    state.metrics.increment_created();
    let id_field = id.to_string();
    log_event_with_fields(
        Event::FoodCreated,
        &[
            ("id", id_field.as_str()),
            ("name", food.name.as_str()),
            ("venue", food.venue.as_str()),
        ],
    );

    let mut response = encoded(format, StatusCode::CREATED, format.encoder().encode_food(&food))?;
    // Relative reference; clients resolve it against the request URI
    if let Ok(location) = HeaderValue::from_str(&format!("/foods/{}", id)) {
        response.headers_mut().insert(header::LOCATION, location);
    }
    Ok(response)
}

async fn update_food_handler(
    State(state): State<Arc<FoodsState>>,
    headers: HeaderMap,
    Path(raw_id): Path<String>,
    form: Result<Form<NewFood>, FormRejection>,
) -> Response {
    let format = Format::negotiate(&headers);
    update_food(&state, format, &raw_id, form_fields(form)).unwrap_or_else(|err| state.reject(err, format))
}

fn update_food(
    state: &FoodsState,
    format: Format,
    raw_id: &str,
    input: NewFood,
) -> ApiResult<Response> {
    let id = parse_id(raw_id)?;
    let food = Food::with_id(id, input);
    state.store.update(&food)?;

    state.metrics.increment_updated();
    log_event_with_fields(Event::FoodUpdated, &[("id", raw_id)]);

    encoded(format, StatusCode::OK, format.encoder().encode_food(&food))
}

async fn delete_food_handler(
    State(state): State<Arc<FoodsState>>,
    headers: HeaderMap,
    Path(raw_id): Path<String>,
) -> Response {
    let format = Format::negotiate(&headers);
    delete_food(&state, &raw_id).unwrap_or_else(|err| state.reject(err, format))
}

/// The store's delete is a silent no-op for unknown ids; the API reports
/// them as 404 instead.
fn delete_food(state: &FoodsState, raw_id: &str) -> ApiResult<Response> {
    let id = parse_id(raw_id)?;
    state
        .store
        .delete(id)?
        .ok_or_else(|| ApiError::NotFound(raw_id.to_string()))?;

    state.metrics.increment_deleted();
    log_event_with_fields(Event::FoodDeleted, &[("id", raw_id)]);

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("17").unwrap(), 17);
        assert!(matches!(parse_id("abc"), Err(ApiError::NotFound(raw)) if raw == "abc"));
        assert!(matches!(parse_id("-1"), Err(ApiError::NotFound(_))));
    }
}
