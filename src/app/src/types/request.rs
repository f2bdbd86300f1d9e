use serde::{Deserialize, Serialize};

use super::reset::RemoteError;

/// Sequence number assigned to a remote request when it starts
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestId(pub u64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle of a remote request
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    Idle,
    Pending,
    Fulfilled,
    Rejected(RemoteError),
}

/// Request lifecycle plus the id of the most recently issued request.
///
/// Only the settle of the latest issued request may move the status out of
/// `Pending`; settles of superseded requests are dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequestState {
    pub status: RequestStatus,
    pub latest: RequestId,
}

impl RequestState {
    /// Issue a new request id and enter `Pending`
    pub fn start(&mut self) -> RequestId {
        self.latest = RequestId(self.latest.0 + 1);
        self.status = RequestStatus::Pending;
        self.latest
    }

    /// Whether a settle for `id` would be applied
    pub fn accepts(&self, id: RequestId) -> bool {
        self.is_pending() && id == self.latest
    }

    pub fn fulfill(&mut self, id: RequestId) -> bool {
        self.settle(id, RequestStatus::Fulfilled)
    }

    pub fn reject(&mut self, id: RequestId, error: RemoteError) -> bool {
        self.settle(id, RequestStatus::Rejected(error))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, RequestStatus::Pending)
    }

    pub fn is_fulfilled(&self) -> bool {
        matches!(self.status, RequestStatus::Fulfilled)
    }

    pub fn error(&self) -> Option<&RemoteError> {
        match &self.status {
            RequestStatus::Rejected(error) => Some(error),
            _ => None,
        }
    }

    fn settle(&mut self, id: RequestId, status: RequestStatus) -> bool {
        if !self.accepts(id) {
            log::debug!("dropping settle of superseded request {id} (latest {})", self.latest);
            return false;
        }
        self.status = status;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_issues_increasing_ids() {
        let mut state = RequestState::default();

        let first = state.start();
        let second = state.start();

        assert!(second > first);
        assert_eq!(state.latest, second);
        assert!(state.is_pending());
    }

    #[test]
    fn settle_of_superseded_request_is_dropped() {
        let mut state = RequestState::default();
        let first = state.start();
        let second = state.start();

        assert!(!state.reject(first, RemoteError::new(Some(500), "late")));
        assert!(state.is_pending());

        assert!(state.fulfill(second));
        assert!(state.is_fulfilled());
    }

    #[test]
    fn second_settle_of_same_request_is_dropped() {
        let mut state = RequestState::default();
        let id = state.start();

        assert!(state.fulfill(id));
        assert!(!state.reject(id, RemoteError::new(None, "again")));
        assert_eq!(state.error(), None);
    }
}
