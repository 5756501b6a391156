use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/members", post(handlers::add_member_form))
        .route("/add_member", post(handlers::add_member))
        .route("/get_trainees", get(handlers::get_trainees))
        .route("/get_completed", get(handlers::get_completed))
        .route("/get_officials", get(handlers::get_officials))
        .route("/login", post(handlers::login))
        .route("/login/form", post(handlers::login_form))
        .with_state(state)
}
