//! crates/focusdeck_core/src/session_store.rs
//!
//! The bounded, in-memory collection of focus sessions plus its derived
//! summary statistics.

use crate::domain::{FocusSession, SessionRecord, SessionSummary};
use crate::validate::{
    int_in_range, raw_scalar, required_with_max, trimmed, truncate_chars, ValidationErrors,
};
use chrono::{Duration, Utc};
use serde::Deserialize;
use std::collections::VecDeque;
use uuid::Uuid;

/// Raw, untyped field values for a session as a form or JSON body delivered
/// them. Nothing here is trusted; [`SessionStore::add_session`] parses and
/// validates every field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionDraft {
    #[serde(deserialize_with = "raw_scalar")]
    pub title: Option<String>,
    #[serde(deserialize_with = "raw_scalar")]
    pub focus_minutes: Option<String>,
    #[serde(deserialize_with = "raw_scalar")]
    pub break_minutes: Option<String>,
    #[serde(deserialize_with = "raw_scalar")]
    pub cycles: Option<String>,
    #[serde(deserialize_with = "raw_scalar")]
    pub mood: Option<String>,
}

/// Owns the focus-session collection.
///
/// Records are kept in insertion order; when an insert would push the
/// collection past [`SessionStore::CAPACITY`], the oldest-inserted record is
/// evicted first. Listing order (most recent first) is applied per query and
/// never affects eviction.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: VecDeque<FocusSession>,
}

impl SessionStore {
    pub const CAPACITY: usize = 20;

    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the demo sessions shown on first
    /// run. State is ephemeral, so this seed is the whole of "startup data".
    pub fn seeded() -> Self {
        let now = Utc::now();
        let seed = |title: &str, focus: u32, brk: u32, cycles: u32, mood: &str, age: Duration| {
            FocusSession {
                id: Uuid::new_v4(),
                title: title.to_string(),
                focus_minutes: focus,
                break_minutes: brk,
                cycles,
                mood: mood.to_string(),
                created_at: now - age,
            }
        };

        Self {
            sessions: VecDeque::from([
                seed("Algorithms Drill", 25, 5, 4, "Focused", Duration::days(2)),
                seed("UX Research Review", 25, 5, 3, "Steady", Duration::days(1)),
                seed("Capstone Planning", 50, 10, 2, "Energized", Duration::hours(6)),
            ]),
        }
    }

    /// Validates a draft and, when every field passes, stores a new session.
    ///
    /// On failure the field-to-message map is returned and nothing is stored.
    /// On success the new record is appended and, if the collection now
    /// exceeds capacity, the oldest-inserted session is evicted silently.
    pub fn add_session(
        &mut self,
        draft: &SessionDraft,
    ) -> Result<SessionRecord, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let title = trimmed(draft.title.as_deref());
        required_with_max(
            &mut errors,
            "title",
            title,
            60,
            "Give this session a descriptive name.",
            "Session name should be 60 characters or less.",
        );

        let focus_minutes = int_in_range(
            &mut errors,
            "focusMinutes",
            draft.focus_minutes.as_deref(),
            10,
            90,
            "Focus minutes should be between 10 and 90.",
        );
        let break_minutes = int_in_range(
            &mut errors,
            "breakMinutes",
            draft.break_minutes.as_deref(),
            3,
            30,
            "Break minutes should be between 3 and 30.",
        );
        let cycles = int_in_range(
            &mut errors,
            "cycles",
            draft.cycles.as_deref(),
            1,
            8,
            "Pick between 1 and 8 cycles.",
        );

        // Mood fails open: empty defaults, over-length truncates, never errors.
        let mood = match trimmed(draft.mood.as_deref()) {
            "" => "Neutral".to_string(),
            m => truncate_chars(m, 40),
        };

        match (focus_minutes, break_minutes, cycles) {
            (Some(focus_minutes), Some(break_minutes), Some(cycles)) if errors.is_empty() => {
                let session = FocusSession {
                    id: Uuid::new_v4(),
                    title: title.to_string(),
                    focus_minutes,
                    break_minutes,
                    cycles,
                    mood,
                    created_at: Utc::now(),
                };
                let record = SessionRecord::from(&session);

                self.sessions.push_back(session);
                if self.sessions.len() > Self::CAPACITY {
                    self.sessions.pop_front();
                }

                Ok(record)
            }
            _ => Err(errors),
        }
    }

    /// Returns a snapshot of every session, most recently created first.
    pub fn list_sessions(&self) -> Vec<SessionRecord> {
        let mut ordered: Vec<&FocusSession> = self.sessions.iter().collect();
        ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        ordered.into_iter().map(SessionRecord::from).collect()
    }

    /// Computes aggregate statistics over the current collection.
    ///
    /// Recomputed on every call; the collection is capped at [`Self::CAPACITY`]
    /// entries so there is nothing worth caching.
    pub fn summary(&self) -> SessionSummary {
        let total_cycles: u32 = self.sessions.iter().map(|s| s.cycles).sum();
        if total_cycles == 0 {
            return SessionSummary {
                total_focus_minutes: 0,
                total_cycles: 0,
                average_focus_block: 0,
            };
        }

        let total_focus_minutes: u32 = self
            .sessions
            .iter()
            .map(|s| s.focus_minutes * s.cycles)
            .sum();
        let average_focus_block =
            (f64::from(total_focus_minutes) / f64::from(total_cycles)).round() as u32;

        SessionSummary {
            total_focus_minutes,
            total_cycles,
            average_focus_block,
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Drops every session. Exposed for tests and explicit resets.
    pub fn clear(&mut self) {
        self.sessions.clear();
    }
}
