//! Text rendering of the proposal board.

use super::state::{ViewState, WritePhase};
use std::fmt::Write as _;
use std::time::{Duration, UNIX_EPOCH};

fn format_deadline(deadline: u64) -> String {
    humantime::format_rfc3339_seconds(UNIX_EPOCH + Duration::from_secs(deadline)).to_string()
}

/// Render the full board: connection line, surfaced error, and one block per
/// proposal. Action hints appear only on open proposals, only while a wallet
/// is connected, and never while a write is in flight.
pub fn render_board(state: &ViewState) -> String {
    let mut out = String::new();

    out.push_str("🗳️  Governance proposals\n");
    match state.account {
        Some(account) => {
            let _ = writeln!(out, "wallet: {account}");
        }
        None => out.push_str("wallet: not connected\n"),
    }
    if let WritePhase::Submitting(_) = state.phase {
        out.push_str("⏳ submission in flight...\n");
    }
    if let Some(error) = &state.last_error {
        let _ = writeln!(out, "⚠️  {error}");
    }
    out.push('\n');

    if state.proposals.is_empty() {
        out.push_str("No proposals yet.\n");
        return out;
    }

    let actions_enabled = state.account.is_some() && state.can_submit();
    for proposal in &state.proposals {
        let _ = writeln!(out, "#{} {}", proposal.id, proposal.description);
        let _ = writeln!(
            out,
            "   for {} | against {} | deadline {}",
            proposal.votes_for,
            proposal.votes_against,
            format_deadline(proposal.deadline)
        );
        if proposal.executed {
            out.push_str("   status: executed\n");
        } else {
            out.push_str("   status: pending\n");
            if actions_enabled {
                let _ = writeln!(
                    out,
                    "   actions: vote-for {id} | vote-against {id} | execute {id}",
                    id = proposal.id
                );
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::types::{Address, Proposal};
    use crate::view::state::WriteKind;

    fn two_proposal_state() -> ViewState {
        ViewState::new()
            .with_account(Address::from_bytes(&[1u8; 20]))
            .with_snapshot(vec![
                Proposal {
                    id: 0,
                    description: "A".to_string(),
                    votes_for: 4,
                    votes_against: 1,
                    deadline: 1_700_000_000,
                    executed: false,
                },
                Proposal {
                    id: 1,
                    description: "B".to_string(),
                    votes_for: 0,
                    votes_against: 0,
                    deadline: 1_700_100_000,
                    executed: true,
                },
            ])
    }

    #[test]
    fn test_open_proposal_shows_actions_executed_shows_none() {
        let board = render_board(&two_proposal_state());

        let first = board.find("#0 A").unwrap();
        let second = board.find("#1 B").unwrap();
        assert!(first < second);

        // Proposal 0 is open: actions present between the two blocks.
        let block0 = &board[first..second];
        assert!(block0.contains("for 4 | against 1"));
        assert!(block0.contains("status: pending"));
        assert!(block0.contains("actions: vote-for 0 | vote-against 0 | execute 0"));

        // Proposal 1 is executed: status only, no actions.
        let block1 = &board[second..];
        assert!(block1.contains("status: executed"));
        assert!(!block1.contains("actions:"));
    }

    #[test]
    fn test_disconnected_board_has_no_actions() {
        let mut state = two_proposal_state();
        state.account = None;
        let board = render_board(&state);

        assert!(board.contains("wallet: not connected"));
        assert!(board.contains("#0 A"));
        assert!(!board.contains("actions:"));
    }

    #[test]
    fn test_in_flight_board_disables_actions() {
        let state = two_proposal_state().with_phase(WritePhase::Submitting(WriteKind::Vote));
        let board = render_board(&state);

        assert!(board.contains("submission in flight"));
        assert!(!board.contains("actions:"));
    }

    #[test]
    fn test_empty_board() {
        let board = render_board(&ViewState::new());
        assert!(board.contains("No proposals yet."));
    }

    #[test]
    fn test_surfaced_error_is_rendered() {
        let state = ViewState::new().with_error("refresh failed: transport error");
        let board = render_board(&state);
        assert!(board.contains("⚠️  refresh failed: transport error"));
    }

    #[test]
    fn test_deadline_is_rfc3339() {
        let rendered = format_deadline(0);
        assert_eq!(rendered, "1970-01-01T00:00:00Z");
    }
}
