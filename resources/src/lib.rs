//! # Evalix Resources
//!
//! Domain layer of the Evalix client: one module per resource (users,
//! skills, vacancies, resumes, evaluations), each owning its record types,
//! REST service, and asynchronous state container, composed into a single
//! application store.
//!
//! ## Architecture
//!
//! Every container follows the same lifecycle:
//!
//! ```text
//! Command action → reducer (loading = true) → Effect → service → backend
//!                                                      │
//! Event action ← reducer (list updated, settled) ←─────┘
//! ```
//!
//! Commands (`FetchAll`, `Create`, …) mark the container as loading and
//! describe the network call as an effect; events (`Fetched`, `Created`, …)
//! apply the settled result. List-replacing fetches carry a sequence tag so
//! a stale response can never overwrite a fresher one.
//!
//! ## Example
//!
//! ```ignore
//! use evalix_resources::app::{AppAction, AppEnvironment, AppReducer, AppState};
//! use evalix_resources::config::EvalixConfig;
//! use evalix_resources::skill::SkillAction;
//! use evalix_runtime::Store;
//!
//! let env = AppEnvironment::from_config(EvalixConfig::new("https://api.example.com"))?;
//! let store = Store::new(AppState::default(), AppReducer::new(), env);
//!
//! store.send(AppAction::Skill(SkillAction::FetchAll)).await;
//! let skills = store.state(|s| s.skills.list.clone()).await;
//! ```

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]

// Public modules
pub mod app;
pub mod config;
pub mod evaluation;
pub mod jwt;
pub mod resume;
pub mod skill;
pub mod user;
pub mod vacancy;

// Re-export main types for convenience
pub use app::{AppAction, AppEnvironment, AppReducer, AppState};
pub use config::EvalixConfig;
