//! Model-View-Intent (MVI) primitives.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ (State, Events) ──→ persist ──→ notify ──→ View
//!    ↑                                                               │
//!    └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of application state
//! - **Intent**: Typed mutation request issued by a view
//! - **Reducer**: Pure function that turns a state and an intent into the
//!   next state plus the events describing what changed

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{Reducer, Transition};
pub use state::StoreState;
