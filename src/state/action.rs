//! Per-Action State
//!
//! Each dashboard action slot (email, WhatsApp, Instagram, clustering) owns
//! one `ActionState` in an `RwSignal`, held by the component that issues the
//! request. The variants replace the parallel loading/error/data lookup
//! tables the dashboard would otherwise need: a slot is always in exactly
//! one of these states, and slots never share state with each other.

/// Lifecycle of a single fire-and-forget backend action.
#[derive(Clone, Debug, PartialEq)]
pub enum ActionState<T> {
    /// Nothing issued yet, or the last result was cleared.
    Idle,
    /// A request is outstanding; re-submission is refused until it resolves.
    InFlight,
    /// The last request finished with this payload.
    Succeeded(T),
    /// The last request failed with this message.
    Failed(String),
}

impl<T> Default for ActionState<T> {
    fn default() -> Self {
        ActionState::Idle
    }
}

impl<T> ActionState<T> {
    /// True while a request is outstanding.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, ActionState::InFlight)
    }

    /// True when the slot may issue a new request. The click handler checks
    /// this in addition to disabling the control, so a double trigger can
    /// never put two requests in flight for the same slot.
    pub fn can_submit(&self) -> bool {
        !self.is_in_flight()
    }

    /// Last failure message, if the slot is in the failed state.
    pub fn error(&self) -> Option<&str> {
        match self {
            ActionState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Last successful payload, if the slot is in the succeeded state.
    pub fn payload(&self) -> Option<&T> {
        match self {
            ActionState::Succeeded(value) => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_slot_accepts_submission() {
        let state: ActionState<u32> = ActionState::Idle;
        assert!(state.can_submit());
        assert!(!state.is_in_flight());
        assert_eq!(state.error(), None);
        assert_eq!(state.payload(), None);
    }

    #[test]
    fn test_in_flight_slot_refuses_resubmission() {
        let state: ActionState<u32> = ActionState::InFlight;
        assert!(!state.can_submit());
        assert!(state.is_in_flight());
    }

    #[test]
    fn test_resolved_slots_accept_retry() {
        let ok: ActionState<u32> = ActionState::Succeeded(7);
        assert!(ok.can_submit());
        assert_eq!(ok.payload(), Some(&7));

        let failed: ActionState<u32> = ActionState::Failed("boom".to_string());
        assert!(failed.can_submit());
        assert_eq!(failed.error(), Some("boom"));
        assert_eq!(failed.payload(), None);
    }
}
