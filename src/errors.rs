use leptos::logging;
use serde::{Deserialize, Serialize};
use serde_urlencoded::ser;
use strum_macros::Display;

#[derive(Default, Display, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "error", content = "message", rename_all = "snake_case")]
pub enum AppErrorType {
  #[default]
  Unknown,

  InternalServerError,
  InternalClientError,
  ParamsError,

  ApiError { status: u16, detail: Option<String> },

  EmptyEmail,
  EmptyActivity,
}

#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
  pub context: String,
  pub error_type: AppErrorType,
  pub description: String,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
  pub fn api(status: u16, detail: Option<String>) -> Self {
    AppError {
      context: "server rejected request".into(),
      description: format!("status {} detail {:?}", status, detail),
      error_type: AppErrorType::ApiError { status, detail },
    }
  }

  pub fn server_detail(&self) -> Option<&str> {
    match &self.error_type {
      AppErrorType::ApiError { detail: Some(d), .. } => Some(d),
      _ => None,
    }
  }

  /// True for non-2xx responses the server produced, as opposed to
  /// transport or decode failures.
  pub fn is_rejection(&self) -> bool {
    matches!(self.error_type, AppErrorType::ApiError { .. })
  }
}

/// Text shown to the user for a failed call. Prefers the server's own
/// detail message, then validation messages, then the caller's fallback.
/// The full error is logged either way.
pub fn message_from_error(error: &AppError, fallback: &str) -> String {
  let s = if let Some(detail) = error.server_detail() {
    detail.to_string()
  } else {
    match &error.error_type {
      AppErrorType::EmptyEmail => "Please enter an email address.".to_string(),
      AppErrorType::EmptyActivity => "Please select an activity.".to_string(),
      _ => fallback.to_string(),
    }
  };
  logging::error!("{}\n{:#?}", s, error);
  s
}

impl serde::ser::StdError for AppError {}

impl core::fmt::Debug for AppError {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("AppError")
      .field("context", &self.context)
      .field("error_type", &self.error_type)
      .field("description", &self.description)
      .finish()
  }
}

impl core::fmt::Display for AppError {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    write!(f, "{{\"error_type\":\"{}\"}}", &self.error_type)
  }
}

impl From<AppErrorType> for AppError {
  fn from(error_type: AppErrorType) -> Self {
    AppError {
      context: "AppErrorType error".into(),
      description: format!("{:#?}", error_type),
      error_type,
    }
  }
}

impl From<ser::Error> for AppError {
  fn from(value: ser::Error) -> Self {
    Self {
      context: "Serde URL error".into(),
      error_type: AppErrorType::ParamsError,
      description: format!("{:#?}", value),
    }
  }
}

impl From<serde_json::error::Error> for AppError {
  fn from(value: serde_json::error::Error) -> Self {
    Self {
      context: "Serde JSON error".into(),
      error_type: AppErrorType::InternalServerError,
      description: format!("{:#?}", value),
    }
  }
}

#[cfg(target_arch = "wasm32")]
impl From<gloo_net::Error> for AppError {
  fn from(value: gloo_net::Error) -> Self {
    Self {
      context: "Gloo error".into(),
      error_type: AppErrorType::InternalClientError,
      description: format!("{:#?}", value),
    }
  }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<reqwest::Error> for AppError {
  fn from(value: reqwest::Error) -> Self {
    Self {
      context: "Reqwest error".into(),
      error_type: AppErrorType::InternalClientError,
      description: format!("{:#?}", value),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn server_detail_surfaces_api_detail() {
    let e = AppError::api(400, Some("Not registered".into()));
    assert_eq!(e.server_detail(), Some("Not registered"));
    assert!(e.is_rejection());
  }

  #[test]
  fn server_detail_absent_for_other_errors() {
    let e = AppError::from(AppErrorType::Unknown);
    assert_eq!(e.server_detail(), None);
    assert!(!e.is_rejection());
  }

  #[test]
  fn message_prefers_detail_over_fallback() {
    let e = AppError::api(404, Some("Activity not found".into()));
    assert_eq!(message_from_error(&e, "Failed to remove participant."), "Activity not found");
  }

  #[test]
  fn message_falls_back_when_detail_missing() {
    let rejected = AppError::api(500, None);
    assert_eq!(message_from_error(&rejected, "An error occurred"), "An error occurred");

    let transport = AppError::from(AppErrorType::InternalClientError);
    assert_eq!(
      message_from_error(&transport, "Failed to sign up. Please try again."),
      "Failed to sign up. Please try again."
    );
  }

  #[test]
  fn validation_errors_have_their_own_text() {
    assert_eq!(
      message_from_error(&AppErrorType::EmptyEmail.into(), "unused"),
      "Please enter an email address."
    );
    assert_eq!(
      message_from_error(&AppErrorType::EmptyActivity.into(), "unused"),
      "Please select an activity."
    );
  }

  #[test]
  fn json_errors_map_to_internal_server_error() {
    let e: AppError = serde_json::from_str::<serde_json::Value>("not json").unwrap_err().into();
    assert_eq!(e.error_type, AppErrorType::InternalServerError);
  }
}
