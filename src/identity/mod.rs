use crate::request_error::{RequestError, RequestResult};

mod guard;

pub use guard::CurrentPlayer;

/// The resolved identity of an authenticated player.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns the caller's identity, or rejects the request as unauthorized when
/// none was resolved. Operations that need a player call this before touching
/// the store.
pub fn require_player(current: CurrentPlayer) -> RequestResult<PlayerId> {
    current.0.ok_or(RequestError::Unauthorized)
}
