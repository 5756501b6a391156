use crate::auth::check_login;
use crate::errors::{AppError, RosterError};
use crate::models::{
    AddMemberRequest, AddMemberResponse, LoginRequest, LoginResponse, Member, Role,
};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    Form, Json,
    extract::State,
    response::{Html, Redirect},
};
use chrono::Local;
use tracing::{info, warn};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let roster = state.roster.lock().await;
    Html(render_index(&roster))
}

pub async fn add_member(
    State(state): State<AppState>,
    Json(payload): Json<AddMemberRequest>,
) -> Result<Json<AddMemberResponse>, AppError> {
    match apply_add(&state, payload).await? {
        Ok(_) => Ok(Json(AddMemberResponse::ok())),
        Err(err) => Ok(Json(AddMemberResponse::failed(err.to_string()))),
    }
}

pub async fn add_member_form(
    State(state): State<AppState>,
    Form(payload): Form<AddMemberRequest>,
) -> Result<Redirect, AppError> {
    apply_add(&state, payload).await??;
    Ok(Redirect::to("/"))
}

pub async fn get_trainees(State(state): State<AppState>) -> Json<Vec<Member>> {
    list_role(&state, Role::Trainee).await
}

pub async fn get_completed(State(state): State<AppState>) -> Json<Vec<Member>> {
    list_role(&state, Role::Completed).await
}

pub async fn get_officials(State(state): State<AppState>) -> Json<Vec<Member>> {
    list_role(&state, Role::Official).await
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Json<LoginResponse> {
    let outcome = check_login(&state.credentials, &payload.login, &payload.password);
    info!(login = payload.login.trim(), ?outcome, "login attempt");
    Json(LoginResponse {
        success: outcome.is_success(),
        message: outcome.message().to_string(),
    })
}

pub async fn login_form(
    State(state): State<AppState>,
    Form(payload): Form<LoginRequest>,
) -> Html<String> {
    let outcome = check_login(&state.credentials, &payload.login, &payload.password);
    info!(login = payload.login.trim(), ?outcome, "login attempt");
    Html(format!(
        "<p>{}</p><p><a href=\"/\">Back</a></p>",
        outcome.message()
    ))
}

async fn list_role(state: &AppState, role: Role) -> Json<Vec<Member>> {
    let roster = state.roster.lock().await;
    Json(roster.list(role))
}

/// The outer error is a storage failure; the inner one is a rejected request
/// that left the roster untouched.
async fn apply_add(
    state: &AppState,
    request: AddMemberRequest,
) -> Result<Result<Member, RosterError>, AppError> {
    let today = Local::now().date_naive();
    let mut roster = state.roster.lock().await;

    let member = match roster.add_member(request, today) {
        Ok(member) => member,
        Err(err) => {
            warn!("member rejected: {err}");
            return Ok(Err(err));
        }
    };

    if let Err(err) = persist_data(&state.data_path, &roster).await {
        roster.members.pop();
        return Err(err);
    }

    info!(name = %member.name, role = ?member.role, "member added");
    Ok(Ok(member))
}
