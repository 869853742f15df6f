pub mod domain;
pub mod goal_store;
pub mod session_store;
pub mod validate;

pub use domain::{
    FocusSession, Goal, GoalRecord, GoalSnapshot, Priority, SessionRecord, SessionSummary,
};
pub use goal_store::{GoalDraft, GoalStore, EMPTY_SNAPSHOT_LABEL};
pub use session_store::{SessionDraft, SessionStore};
pub use validate::ValidationErrors;
