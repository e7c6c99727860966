//! The send gate.

use chrono::Utc;
use tracing::info;

use super::model::Draft;
use crate::triage::{Confirmation, DecisionSource};
use crate::{Error, Result};

/// Sends `draft` if, and only if, the decision source explicitly confirms.
///
/// The confirmation is always asked here, separately from whatever action
/// produced the draft. Returns `Ok(true)` once the draft is marked sent and
/// `Ok(false)` if the confirmation was declined, in which case the draft is
/// untouched.
///
/// # Errors
///
/// Returns [`Error::InvalidState`] if the draft was already sent, or any
/// error raised by the decision source.
pub fn send(draft: &mut Draft, decisions: &mut dyn DecisionSource) -> Result<bool> {
    if draft.is_sent() {
        return Err(Error::invalid_state(format!(
            "draft {} was already sent",
            draft.id
        )));
    }

    let confirmation = Confirmation::Send {
        kind: draft.kind,
        recipient: draft.recipient.clone(),
    };
    if !decisions.confirm(&confirmation)? {
        info!(draft = %draft.id, "Send declined; message remains a draft");
        return Ok(false);
    }

    draft.mark_sent(Utc::now())?;
    info!(draft = %draft.id, recipient = %draft.recipient, "Draft sent");
    Ok(true)
}
