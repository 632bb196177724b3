//! Account handlers.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};

use common::AppResult;
use domain::{
    ChangeDetailsForm, ChangePasswordForm, LoginForm, RegistrationForm, UserResponse,
    DETAILS_CHANGED, PASSWORD_CHANGED,
};

use crate::extractors::JsonForm;
use crate::state::AppState;

/// Create account routes
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/get-all-users", get(list_users))
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/change-password", post(change_password))
        .route("/change-details", post(change_details))
}

/// List all accounts
#[utoipa::path(
    get,
    path = "/api/account/get-all-users",
    tag = "Accounts",
    responses(
        (status = 200, description = "All registered accounts", body = Vec<UserResponse>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.accounts.list_users().await?;
    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/api/account/register",
    tag = "Accounts",
    request_body = RegistrationForm,
    responses(
        (status = 200, description = "Account created", body = UserResponse),
        (status = 400, description = "Validation failed", body = String, content_type = "text/plain"),
        (status = 409, description = "Email already registered", body = String, content_type = "text/plain")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    JsonForm(form): JsonForm<RegistrationForm>,
) -> AppResult<Json<UserResponse>> {
    let user = state.accounts.register(form).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/api/account/login",
    tag = "Accounts",
    request_body = LoginForm,
    responses(
        (status = 200, description = "Credentials accepted", body = UserResponse),
        (status = 400, description = "Validation failed", body = String, content_type = "text/plain"),
        (status = 401, description = "Wrong password", body = String, content_type = "text/plain"),
        (status = 404, description = "Unknown email", body = String, content_type = "text/plain")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    JsonForm(form): JsonForm<LoginForm>,
) -> AppResult<Json<UserResponse>> {
    let user = state.accounts.login(form).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Change the password of an account
#[utoipa::path(
    post,
    path = "/api/account/change-password",
    tag = "Accounts",
    request_body = ChangePasswordForm,
    responses(
        (status = 200, description = "Password replaced", body = String, content_type = "text/plain"),
        (status = 400, description = "Validation failed or old password mismatch", body = String, content_type = "text/plain"),
        (status = 404, description = "Unknown email", body = String, content_type = "text/plain")
    )
)]
pub async fn change_password(
    State(state): State<AppState>,
    JsonForm(form): JsonForm<ChangePasswordForm>,
) -> AppResult<&'static str> {
    state.accounts.change_password(form).await?;
    Ok(PASSWORD_CHANGED)
}

/// Change the profile details of an account
#[utoipa::path(
    post,
    path = "/api/account/change-details",
    tag = "Accounts",
    request_body = ChangeDetailsForm,
    responses(
        (status = 200, description = "Details replaced", body = String, content_type = "text/plain"),
        (status = 400, description = "Validation failed", body = String, content_type = "text/plain"),
        (status = 404, description = "Unknown email", body = String, content_type = "text/plain")
    )
)]
pub async fn change_details(
    State(state): State<AppState>,
    JsonForm(form): JsonForm<ChangeDetailsForm>,
) -> AppResult<&'static str> {
    state.accounts.change_details(form).await?;
    Ok(DETAILS_CHANGED)
}
