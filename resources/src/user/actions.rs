//! User container actions.

use super::state::{AuthenticatedUser, GoogleCredential, User, UserId};

/// Where a `SetCurrentUser` command takes the user from.
#[derive(Debug, Clone, PartialEq)]
pub enum CurrentUserSource {
    /// A bare bearer token; its claims seed a provisional profile.
    Token(String),
    /// A full profile with token, e.g. restored from an earlier login.
    Profile(AuthenticatedUser),
}

/// All possible inputs to the user reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    /// Fetch the full user list.
    FetchAll,

    /// A list fetch settled successfully.
    Fetched {
        /// Tag of the fetch this settle belongs to.
        seq: u64,
        /// The backend's current user list.
        users: Vec<User>,
    },

    /// A list fetch settled with an error.
    FetchFailed {
        /// Tag of the fetch this settle belongs to.
        seq: u64,
        /// Failure message.
        error: String,
    },

    /// Fetch one user by id (the authoritative profile fetch).
    FetchById {
        /// Id of the user to fetch.
        id: UserId,
    },

    /// A by-id fetch settled successfully.
    FetchedById {
        /// The fetched profile.
        user: User,
    },

    /// A by-id fetch settled with an error.
    FetchByIdFailed {
        /// Failure message.
        error: String,
    },

    /// Exchange an identity-provider credential for a bearer token.
    GoogleAuth {
        /// The provider credential.
        credential: GoogleCredential,
    },

    /// The credential exchange settled successfully.
    GoogleAuthSucceeded {
        /// The authenticated user with their token.
        user: AuthenticatedUser,
    },

    /// The credential exchange settled with an error.
    GoogleAuthFailed {
        /// Failure message.
        error: String,
    },

    /// Set or clear the current user directly.
    ///
    /// `None` logs out: the current user and the persisted token are both
    /// cleared.
    SetCurrentUser {
        /// Where to take the user from, or `None` to log out.
        source: Option<CurrentUserSource>,
    },
}
