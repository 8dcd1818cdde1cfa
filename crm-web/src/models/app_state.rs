use shared::Session;
use yewdux::Store;

/// Reactive mirror of the session store for components.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub session: Session,
}
