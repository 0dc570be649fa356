use std::sync::Arc;

use crate::api::dto::account::{AccountDTO, SignUpDTO};
use crate::api::error::ApiResult;
use crate::api::middlewares::json::Json;
use crate::domain::error::{AppError, AppResult, ServiceError};
use crate::domain::models::account::AccountInput;
use crate::domain::services::{account::AddAccount, email_validator::EmailValidator};

use actix_web::{HttpResponse, post, web::Data as State};

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(signup);
}

/// Validates a sign up form and hands the account over to [`AddAccount`].
///
/// Validation stops at the first failure, in this order: empty form,
/// missing field (`name`, `email`, `password`, `passwordConfirmation`),
/// password confirmation mismatch, malformed email. Collaborator failures
/// become `ServerError` responses carrying the collaborator's message.
pub struct SignUpController {
    email_validator: Arc<dyn EmailValidator>,
    add_account: Arc<dyn AddAccount>,
}

impl SignUpController {
    pub fn new(email_validator: Arc<dyn EmailValidator>, add_account: Arc<dyn AddAccount>) -> Self {
        Self {
            email_validator,
            add_account,
        }
    }

    pub async fn handle(&self, request: SignUpDTO) -> ApiResult {
        let account = validate(request).inspect_err(log_rejection)?;

        if !self
            .email_validator
            .is_valid(&account.email)
            .map_err(server_error)?
        {
            let err = AppError::InvalidParam("email");
            log_rejection(&err);
            return Err(err);
        }

        let created_account = self.add_account.add(account).await.map_err(server_error)?;

        tracing::info!(id = %created_account.id, "account created");

        Ok(HttpResponse::Ok().json(AccountDTO::from(created_account)))
    }
}

fn validate(request: SignUpDTO) -> AppResult<AccountInput> {
    if request.is_empty() {
        return Err(AppError::EmptyData());
    }

    let SignUpDTO {
        name,
        email,
        password,
        password_confirmation,
        ..
    } = request;

    let name = required("name", name)?;
    let email = required("email", email)?;
    let password = required("password", password)?;
    let password_confirmation = required("passwordConfirmation", password_confirmation)?;

    if password != password_confirmation {
        return Err(AppError::PasswordMismatch());
    }

    Ok(AccountInput {
        name,
        email,
        password,
    })
}

fn required(field: &str, value: Option<String>) -> AppResult<String> {
    value
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::MissingParam(field))
}

fn log_rejection(err: &AppError) {
    tracing::info!(error = ?err.error, param = ?err.param, "sign up rejected");
}

fn server_error(err: ServiceError) -> AppError {
    tracing::error!(error = %err, "sign up collaborator failed");

    AppError::from(err)
}

#[utoipa::path(
    responses(
        (status = 200, body = AccountDTO, description = "Account Created"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body = SignUpDTO,
    tag = "Account",
)]
#[post("/signup")]
pub async fn signup(payload: Json<SignUpDTO>, controller: State<SignUpController>) -> ApiResult {
    controller.handle(payload.into_inner()).await
}
