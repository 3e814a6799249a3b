use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use contracts::shared::action_state::{ActionState, FieldErrors};

pub const CUSTOMERS_PATH: &str = "/dashboard/customers";
pub const INVOICES_PATH: &str = "/dashboard/invoices";

/// Результат мутирующего действия
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// Upstream принял изменение; `revalidated` уже инвалидирован
    Success {
        revalidated: &'static str,
        redirect_to: &'static str,
    },
    /// Форма не прошла валидацию, в upstream ничего не отправлялось
    Invalid(ActionState),
    /// Действие ссылается на объект, которого в upstream уже нет
    Rejected(ActionState),
    /// Upstream вернул ошибку; детали только в логе
    Failed(ActionState),
    /// Upstream операцию пока не поддерживает
    Unsupported(String),
}

impl ActionOutcome {
    pub fn success(path: &'static str) -> Self {
        Self::Success {
            revalidated: path,
            redirect_to: path,
        }
    }

    pub fn invalid(errors: FieldErrors, message: &str) -> Self {
        Self::Invalid(ActionState::invalid(errors, message))
    }

    pub fn failed(message: &str) -> Self {
        Self::Failed(ActionState::message(message))
    }
}

impl IntoResponse for ActionOutcome {
    fn into_response(self) -> Response {
        match self {
            Self::Success {
                revalidated,
                redirect_to,
            } => ([("x-revalidate", revalidated)], Redirect::to(redirect_to)).into_response(),
            Self::Invalid(state) => (StatusCode::UNPROCESSABLE_ENTITY, Json(state)).into_response(),
            Self::Rejected(state) => (StatusCode::CONFLICT, Json(state)).into_response(),
            Self::Failed(state) => (StatusCode::BAD_GATEWAY, Json(state)).into_response(),
            Self::Unsupported(message) => (
                StatusCode::NOT_IMPLEMENTED,
                Json(ActionState::message(message)),
            )
                .into_response(),
        }
    }
}
