use serde::{Deserialize, Serialize};

use super::request::RequestState;

/// Identity of a recovery contact channel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ResetOptionName {
    Primary,
    Secondary,
}

/// One recovery channel with its masked contact details
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResetOption {
    pub name: ResetOptionName,
    pub email: Option<String>,
    pub sms: Option<String>,
}

/// Flat body returned by the account-recovery lookup endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LookupResponse {
    #[serde(default)]
    pub primary_email: Option<String>,
    #[serde(default)]
    pub primary_sms: Option<String>,
    #[serde(default)]
    pub secondary_email: Option<String>,
    #[serde(default)]
    pub secondary_sms: Option<String>,
}

impl From<LookupResponse> for Vec<ResetOption> {
    fn from(response: LookupResponse) -> Self {
        vec![
            ResetOption {
                name: ResetOptionName::Primary,
                email: response.primary_email,
                sms: response.primary_sms,
            },
            ResetOption {
                name: ResetOptionName::Secondary,
                email: response.secondary_email,
                sms: response.secondary_sms,
            },
        ]
    }
}

/// Body of the request-reset call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasswordResetRequest {
    pub user: String,
    pub method: String,
}

/// Failure of a remote operation, as reported by the transport.
///
/// When the server answers with a `{status, message}` body it is carried
/// over unchanged; otherwise the HTTP status and the transport's message are
/// used.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemoteError {
    pub status: Option<u16>,
    pub message: String,
}

impl RemoteError {
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for RemoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "HTTP {status}: {}", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Identity fields collected from the user during recovery
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub user: String,
    pub first_name: String,
    pub last_name: String,
    pub url: String,
}

/// Update of exactly one [`UserData`] field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum UserDataUpdate {
    User(String),
    FirstName(String),
    LastName(String),
    Url(String),
}

impl UserDataUpdate {
    pub fn login(user: impl Into<String>) -> Self {
        Self::User(user.into())
    }

    pub fn first_name(first_name: impl Into<String>) -> Self {
        Self::FirstName(first_name.into())
    }

    pub fn last_name(last_name: impl Into<String>) -> Self {
        Self::LastName(last_name.into())
    }

    pub fn site_url(url: impl Into<String>) -> Self {
        Self::Url(url.into())
    }
}

impl UserData {
    pub fn apply(&mut self, update: UserDataUpdate) {
        match update {
            UserDataUpdate::User(value) => self.user = value,
            UserDataUpdate::FirstName(value) => self.first_name = value,
            UserDataUpdate::LastName(value) => self.last_name = value,
            UserDataUpdate::Url(value) => self.url = value,
        }
    }
}

/// Reset options lookup state
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResetOptionsState {
    pub request: RequestState,
    /// Last received options; kept while a newer lookup is in flight.
    pub items: Vec<ResetOption>,
}

impl ResetOptionsState {
    pub fn is_requesting(&self) -> bool {
        self.request.is_pending()
    }

    pub fn error(&self) -> Option<&RemoteError> {
        self.request.error()
    }
}

/// Complete account-recovery reset state
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResetState {
    pub options: ResetOptionsState,
    pub user_data: UserData,
    pub picked_method: Option<String>,
    pub reset_request: RequestState,
}
