//! # Evalix Runtime
//!
//! Store runtime for the Evalix client architecture.
//!
//! This crate provides the Store that coordinates reducer execution and
//! effect handling.
//!
//! ## Core Components
//!
//! - **Store**: Holds state behind a lock, runs the reducer, executes effects
//! - **Effect Executor**: Executes effect descriptions and feeds produced
//!   actions back into the reducer
//!
//! ## Dispatch semantics
//!
//! `send` drives one dispatch to completion: the action is reduced, the
//! returned effects are executed, and any actions they produce are reduced
//! in turn, until the feedback loop settles. Within one dispatch the
//! pending → settled ordering is therefore strict. Independent dispatches
//! are not serialized against each other: callers that overlap two `send`
//! calls observe interleaving at every await point, which is why the
//! containers tag their list fetches with sequence numbers.
//!
//! ## Example
//!
//! ```ignore
//! use evalix_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action and wait for it to settle
//! store.send(Action::FetchAll).await;
//!
//! // Read state
//! let count = store.state(|s| s.list.len()).await;
//! ```

use evalix_core::effect::Effect;
use evalix_core::reducer::Reducer;
use futures::future::{BoxFuture, FutureExt, join_all};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The Store - holds state and drives the action → reducer → effect loop
///
/// # Type Parameters
///
/// - `S`: State type
/// - `A`: Action type
/// - `E`: Environment type
/// - `R`: Reducer implementation
///
/// # Example
///
/// ```ignore
/// let store = Store::new(AppState::default(), AppReducer::new(), env);
///
/// store.send(AppAction::Skill(SkillAction::FetchAll)).await;
/// let skills = store.state(|s| s.skills.list.clone()).await;
/// ```
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: Arc<RwLock<S>>,
    reducer: Arc<R>,
    environment: Arc<E>,
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
    A: Send + 'static,
    S: Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    /// Create a new store with initial state, reducer, and environment
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial_state)),
            reducer: Arc::new(reducer),
            environment: Arc::new(environment),
        }
    }

    /// Send an action and drive its dispatch to completion
    ///
    /// The action is reduced under the state lock; the lock is released
    /// before any effect is executed, so effects (network calls) never block
    /// readers. Actions produced by effects are reduced in arrival order
    /// until no effects remain.
    #[tracing::instrument(skip_all, name = "store_send")]
    pub async fn send(&self, action: A) {
        let mut queue: VecDeque<A> = VecDeque::new();
        queue.push_back(action);

        while let Some(action) = queue.pop_front() {
            let effects = {
                let mut state = self.state.write().await;
                self.reducer.reduce(&mut state, action, &self.environment)
            };

            for effect in effects {
                let produced = execute(effect).await;
                queue.extend(produced);
            }
        }
    }

    /// Read a value derived from the current state
    ///
    /// # Arguments
    ///
    /// - `f`: Closure that receives a reference to state and returns a value
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        let state = self.state.read().await;
        f(&state)
    }

    /// Access the injected environment
    #[must_use]
    pub fn environment(&self) -> &E {
        &self.environment
    }
}

impl<S, A, E, R> Clone for Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            reducer: Arc::clone(&self.reducer),
            environment: Arc::clone(&self.environment),
        }
    }
}

/// Execute one effect, collecting every action it produces
///
/// Parallel effects run concurrently via `join_all`; sequential effects run
/// in order. Produced actions are returned in completion order for parallel
/// effects and declaration order for sequential ones.
fn execute<A>(effect: Effect<A>) -> BoxFuture<'static, Vec<A>>
where
    A: Send + 'static,
{
    async move {
        match effect {
            Effect::None => Vec::new(),
            Effect::Future(future) => future.await.into_iter().collect(),
            Effect::Parallel(effects) => {
                let results = join_all(effects.into_iter().map(execute)).await;
                results.into_iter().flatten().collect()
            },
            Effect::Sequential(effects) => {
                let mut produced = Vec::new();
                for effect in effects {
                    produced.extend(execute(effect).await);
                }
                produced
            },
        }
    }
    .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use evalix_core::{SmallVec, smallvec};

    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    struct CounterState {
        count: i32,
        settled: bool,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum CounterAction {
        Increment,
        IncrementLater,
        Settled,
        FanOut,
    }

    struct CounterReducer;

    impl Reducer for CounterReducer {
        type State = CounterState;
        type Action = CounterAction;
        type Environment = ();

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            match action {
                CounterAction::Increment => {
                    state.count += 1;
                    SmallVec::new()
                },
                CounterAction::IncrementLater => {
                    smallvec![Effect::future(async { Some(CounterAction::Increment) })]
                },
                CounterAction::Settled => {
                    state.settled = true;
                    SmallVec::new()
                },
                CounterAction::FanOut => {
                    smallvec![Effect::Parallel(vec![
                        Effect::future(async { Some(CounterAction::Increment) }),
                        Effect::future(async { Some(CounterAction::Increment) }),
                        Effect::Sequential(vec![
                            Effect::future(async { Some(CounterAction::Increment) }),
                            Effect::future(async { Some(CounterAction::Settled) }),
                        ]),
                    ])]
                },
            }
        }
    }

    #[tokio::test]
    async fn send_applies_state_change() {
        let store = Store::new(CounterState::default(), CounterReducer, ());

        store.send(CounterAction::Increment).await;

        assert_eq!(store.state(|s| s.count).await, 1);
    }

    #[tokio::test]
    async fn effect_feedback_reaches_reducer() {
        let store = Store::new(CounterState::default(), CounterReducer, ());

        store.send(CounterAction::IncrementLater).await;

        assert_eq!(store.state(|s| s.count).await, 1);
    }

    #[tokio::test]
    async fn parallel_and_sequential_effects_all_settle() {
        let store = Store::new(CounterState::default(), CounterReducer, ());

        store.send(CounterAction::FanOut).await;

        let state = store.state(Clone::clone).await;
        assert_eq!(state.count, 3);
        assert!(state.settled);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = Store::new(CounterState::default(), CounterReducer, ());
        let clone = store.clone();

        store.send(CounterAction::Increment).await;
        clone.send(CounterAction::Increment).await;

        assert_eq!(store.state(|s| s.count).await, 2);
    }
}
