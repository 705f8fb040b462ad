//! Board Helpers
//!
//! Pure column logic for the gig board. The drop decision runs before any
//! optimistic state change, so no-op drops never touch the gig list.

use crate::models::Gig;

/// Board columns in display order. The column index doubles as the DnD
/// drop-target id.
pub const BOARD_COLUMNS: [&str; 4] = ["Open", "In Progress", "Completed", "Archived"];

/// Decide what dropping a card on a column means.
///
/// `Some(new_status)` = apply optimistically and tell the backend.
/// `None` = no-op: the column index is off the board, or it is the card's
/// own column.
pub fn drop_transition(current_status: &str, column: usize) -> Option<&'static str> {
    let target = BOARD_COLUMNS.get(column)?;
    if *target == current_status {
        None
    } else {
        Some(target)
    }
}

/// Apply a status change to the local gig list. Only the matching gig's
/// status field changes; every other gig is left untouched.
pub fn apply_status(gigs: &mut [Gig], gig_id: &str, status: &str) {
    if let Some(gig) = gigs.iter_mut().find(|g| g.id == gig_id) {
        gig.status = status.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gig(id: &str, status: &str) -> Gig {
        Gig {
            id: id.to_string(),
            title: format!("Gig {}", id),
            description: None,
            client_name: None,
            total_value: 100.0,
            status: status.to_string(),
            due_date: None,
        }
    }

    #[test]
    fn test_drop_on_other_column_transitions() {
        assert_eq!(drop_transition("Open", 1), Some("In Progress"));
        assert_eq!(drop_transition("In Progress", 3), Some("Archived"));
    }

    #[test]
    fn test_drop_on_own_column_is_noop() {
        assert_eq!(drop_transition("Open", 0), None);
        assert_eq!(drop_transition("Completed", 2), None);
    }

    #[test]
    fn test_drop_off_board_is_noop() {
        assert_eq!(drop_transition("Open", 4), None);
        assert_eq!(drop_transition("Open", usize::MAX), None);
    }

    #[test]
    fn test_apply_status_touches_only_the_target_gig() {
        let mut gigs = vec![gig("g1", "Open"), gig("g2", "Open")];
        let untouched = gigs[1].clone();

        apply_status(&mut gigs, "g1", "Completed");

        assert_eq!(gigs[0].status, "Completed");
        assert_eq!(gigs[0].title, "Gig g1");
        assert_eq!(gigs[1], untouched);
    }

    #[test]
    fn test_apply_status_on_unknown_id_changes_nothing() {
        let mut gigs = vec![gig("g1", "Open")];
        let before = gigs.clone();
        apply_status(&mut gigs, "missing", "Completed");
        assert_eq!(gigs, before);
    }
}
