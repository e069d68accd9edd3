use crate::store::AppState;

use super::{MalformedPersistedState, PersistenceError};

/// Serialize the full state to its JSON snapshot.
pub fn encode(state: &AppState) -> Result<String, PersistenceError> {
    serde_json::to_string(state).map_err(PersistenceError::Encode)
}

/// Parse a JSON snapshot.
///
/// Missing keys take their defaults. Modals always come back closed and
/// pagination is brought back in line with the loaded employees.
pub fn decode(text: &str) -> Result<AppState, MalformedPersistedState> {
    let mut state: AppState = serde_json::from_str(text)?;
    state.restore_invariants();
    Ok(state)
}
