use std::sync::Arc;

use todo_store::TodoRepository;

use crate::failure::StatusPolicy;
use crate::settings::ApiSettings;

/// Shared per-process state handed to every handler
///
/// The repository is injected by the bootstrap; handlers never open
/// connections themselves.
#[derive(Clone)]
pub struct AppState {
    pub todos: Arc<dyn TodoRepository>,
    pub policy: StatusPolicy,
}

impl AppState {
    pub fn new(todos: Arc<dyn TodoRepository>, settings: &ApiSettings) -> Self {
        Self {
            todos,
            policy: StatusPolicy::from(settings),
        }
    }
}
