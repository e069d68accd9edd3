//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::StoreState;

/// Result of a successful reduction: the next state and what happened.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<S, E> {
    pub state: S,
    pub events: Vec<E>,
}

impl<S, E> Transition<S, E> {
    pub fn new(state: S, events: Vec<E>) -> Self {
        Self { state, events }
    }
}

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (&State, Intent) -> Result<(State, Events)>.
/// Persistence and notification are the caller's job.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: StoreState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Events emitted alongside the new state.
    type Event;

    /// Rejection reason. On error the input state is left as it was.
    type Error;

    /// Process an intent and return the new state.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(
        state: &Self::State,
        intent: Self::Intent,
    ) -> Result<Transition<Self::State, Self::Event>, Self::Error>;
}
