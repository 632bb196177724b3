//! OpenAPI documentation.

use utoipa::OpenApi;

use domain::{ChangeDetailsForm, ChangePasswordForm, LoginForm, RegistrationForm, UserResponse};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::account_handler::list_users,
        crate::handlers::account_handler::register,
        crate::handlers::account_handler::login,
        crate::handlers::account_handler::change_password,
        crate::handlers::account_handler::change_details,
    ),
    components(
        schemas(
            RegistrationForm,
            LoginForm,
            ChangePasswordForm,
            ChangeDetailsForm,
            UserResponse,
        )
    ),
    tags(
        (name = "Accounts", description = "Account registration, login and profile management"),
    )
)]
pub struct ApiDoc;
