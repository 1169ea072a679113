//! Evaluation resource
//!
//! An evaluation matches one resume against one vacancy; creating one
//! triggers analysis work on the backend, so its client uses the longest
//! timeout of the stack.

mod actions;
mod reducer;
mod service;
mod state;

pub use actions::EvaluationAction;
pub use reducer::{EvaluationEnvironment, EvaluationReducer};
pub use service::EvaluationService;
pub use state::{Evaluation, EvaluationId, EvaluationState, NewEvaluation};
