//! Server-side shared pieces: application state and the system router.

mod health;
mod router;
mod state;

pub use router::system_router;
pub use state::{AppState, AppStateInner};
