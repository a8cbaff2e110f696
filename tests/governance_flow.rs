//! Integration test for the end-to-end governance flow.
//!
//! Covers the complete lifecycle over mock boundaries:
//! 1. Connect a wallet session
//! 2. Refresh the proposal snapshot (count + per-index reads)
//! 3. Create a proposal, await settlement, observe the refreshed board
//! 4. Vote and execute with the same send → settle → refresh pattern
//! 5. Degradation and gating: partial read failures, empty drafts,
//!    disconnected sessions, failed writes

use agora::chain::{MockGovernanceClient, Proposal};
use agora::view::{render_board, SyncError, Synchronizer};
use agora::wallet::{MockWalletProvider, Session, WalletError};

async fn connected_session() -> Session {
    let provider = MockWalletProvider::new();
    let mut session = Session::new();
    session.connect(&provider).await.expect("mock wallet connects");
    session
}

#[tokio::test]
async fn test_refresh_issues_count_plus_one_reads() {
    for n in [0u64, 1, 5] {
        let mock = MockGovernanceClient::new();
        for i in 0..n {
            mock.seed_proposal(&format!("proposal {i}"), 0, 0, 1_000 + i, false);
        }
        let mut sync = Synchronizer::new(mock.clone());

        sync.refresh().await.expect("refresh succeeds");

        assert_eq!(mock.count_calls(), 1, "one count read for n={n}");
        assert_eq!(mock.proposal_calls(), n, "n per-proposal reads for n={n}");
        assert_eq!(sync.state().proposals.len() as u64, n);
    }
}

#[tokio::test]
async fn test_partial_read_failure_yields_empty_list() {
    let mock = MockGovernanceClient::new();
    mock.seed_proposal("A", 0, 0, 100, false);
    mock.seed_proposal("B", 0, 0, 200, false);
    mock.seed_proposal("C", 0, 0, 300, false);
    mock.fail_proposal_read(Some(1));
    let mut sync = Synchronizer::new(mock.clone());

    let err = sync.refresh().await.unwrap_err();
    assert!(matches!(err, SyncError::Read(_)));

    // Empty, never partial, and the cause is surfaced.
    assert!(sync.state().proposals.is_empty());
    assert!(sync.state().last_error.is_some());

    // The failing read aborts the pass: index 0 succeeded, index 1 failed,
    // index 2 was never fetched.
    assert_eq!(mock.proposal_calls(), 2);
}

#[tokio::test]
async fn test_count_read_failure_yields_empty_list() {
    let mock = MockGovernanceClient::new();
    mock.seed_proposal("A", 0, 0, 100, false);
    mock.fail_count_reads(true);
    let mut sync = Synchronizer::new(mock.clone());

    assert!(sync.refresh().await.is_err());
    assert!(sync.state().proposals.is_empty());
    assert_eq!(mock.proposal_calls(), 0);
}

#[tokio::test]
async fn test_create_vote_execute_end_to_end() {
    let mock = MockGovernanceClient::new();
    let session = connected_session().await;
    let account = session.account().unwrap();
    let mut sync = Synchronizer::new(mock.clone());
    sync.connect_account(account);

    // 1. Initial read pass over an empty contract.
    sync.refresh().await.unwrap();
    assert!(sync.state().proposals.is_empty());
    assert_eq!(mock.count_calls(), 1);

    // 2. Create: settle, clear the draft, refresh exactly once.
    sync.set_draft("Fund the sequencer audit");
    let receipt = sync.submit_create(&session).await.unwrap();
    assert!(receipt.block > 0);
    assert_eq!(sync.state().draft_description, "");
    assert_eq!(mock.count_calls(), 2);
    assert_eq!(sync.state().proposals.len(), 1);
    assert_eq!(sync.state().proposals[0].description, "Fund the sequencer audit");

    // 3. Vote in favor, then against, observing refreshed tallies.
    sync.submit_vote(&session, 0, true).await.unwrap();
    sync.submit_vote(&session, 0, false).await.unwrap();
    assert_eq!(mock.count_calls(), 4);
    let p = &sync.state().proposals[0];
    assert_eq!((p.votes_for, p.votes_against), (1, 1));
    assert!(!p.executed);

    // 4. Execute and observe the executed flag in the refreshed snapshot.
    sync.submit_execute(&session, 0).await.unwrap();
    assert_eq!(mock.count_calls(), 5);
    assert!(sync.state().proposals[0].executed);

    // 5. Every write went through the connected account.
    let writes = mock.submitted_writes();
    assert_eq!(writes.len(), 4);
    assert!(writes.iter().all(|w| w.from == account));
    assert_eq!(writes[0].call, "create(Fund the sequencer audit)");
    assert_eq!(writes[3].call, "execute(0)");
}

#[tokio::test]
async fn test_empty_description_performs_no_call_and_no_state_change() {
    let mock = MockGovernanceClient::new();
    mock.seed_proposal("A", 2, 0, 100, false);
    let session = connected_session().await;
    let mut sync = Synchronizer::new(mock.clone());
    sync.refresh().await.unwrap();

    let before = sync.state().clone();
    let err = sync.submit_create(&session).await.unwrap_err();

    assert!(matches!(err, SyncError::EmptyDescription));
    assert!(mock.submitted_writes().is_empty());
    assert_eq!(sync.state(), &before);
}

#[tokio::test]
async fn test_disconnected_session_writes_unreachable() {
    let mock = MockGovernanceClient::new();
    mock.seed_proposal("A", 0, 0, 100, false);
    let session = Session::new();
    let mut sync = Synchronizer::new(mock.clone());
    sync.set_draft("should never reach the contract");

    assert!(matches!(
        sync.submit_create(&session).await.unwrap_err(),
        SyncError::NotConnected
    ));
    assert!(matches!(
        sync.submit_vote(&session, 0, true).await.unwrap_err(),
        SyncError::NotConnected
    ));
    assert!(matches!(
        sync.submit_execute(&session, 0).await.unwrap_err(),
        SyncError::NotConnected
    ));
    assert!(mock.submitted_writes().is_empty());
}

#[tokio::test]
async fn test_missing_wallet_blocks_connection_but_not_reads() {
    let provider = MockWalletProvider::unavailable();
    let mut session = Session::new();

    let err = session.connect(&provider).await.unwrap_err();
    assert!(matches!(err, WalletError::Unavailable(_)));
    assert!(!session.is_connected());

    // The read path runs without any identity.
    let mock = MockGovernanceClient::new();
    mock.seed_proposal("A", 1, 0, 100, false);
    let mut sync = Synchronizer::new(mock);
    sync.refresh().await.unwrap();
    assert_eq!(sync.state().proposals.len(), 1);
}

#[tokio::test]
async fn test_exactly_one_refresh_per_settled_write() {
    let mock = MockGovernanceClient::new();
    mock.seed_proposal("A", 0, 0, 100, false);
    let session = connected_session().await;
    let mut sync = Synchronizer::new(mock.clone());

    let before = mock.count_calls();
    sync.submit_vote(&session, 0, true).await.unwrap();
    assert_eq!(mock.count_calls(), before + 1);
}

#[tokio::test]
async fn test_write_failure_is_surfaced_and_triggers_no_refresh() {
    let mock = MockGovernanceClient::new();
    mock.seed_proposal("A", 0, 0, 100, false);
    mock.fail_writes(Some("rejected signature"));
    let session = connected_session().await;
    let mut sync = Synchronizer::new(mock.clone());

    let err = sync.submit_execute(&session, 0).await.unwrap_err();
    assert!(matches!(err, SyncError::Write(_)));
    assert!(err.to_string().contains("rejected signature"));

    assert_eq!(mock.count_calls(), 0);
    assert!(sync.state().can_submit(), "view returns to idle");
    assert!(sync
        .state()
        .last_error
        .as_deref()
        .unwrap()
        .contains("rejected signature"));
}

#[tokio::test]
async fn test_board_scenario_two_proposals() {
    // count=2: proposal 0 open with tallies 4/1, proposal 1 executed.
    let mock = MockGovernanceClient::new();
    mock.seed_proposal("A", 4, 1, 1_700_000_000, false);
    mock.seed_proposal("B", 0, 0, 1_700_100_000, true);

    let session = connected_session().await;
    let mut sync = Synchronizer::new(mock);
    sync.connect_account(session.account().unwrap());
    sync.refresh().await.unwrap();

    assert_eq!(
        sync.state().proposals,
        vec![
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
        ]
    );

    let board = render_board(sync.state());
    let first = board.find("#0 A").expect("proposal 0 rendered");
    let second = board.find("#1 B").expect("proposal 1 rendered");
    assert!(first < second);

    // Open proposal: vote/execute actions offered.
    let block0 = &board[first..second];
    assert!(block0.contains("for 4 | against 1"));
    assert!(block0.contains("actions: vote-for 0 | vote-against 0 | execute 0"));

    // Executed proposal: status only, no actions.
    let block1 = &board[second..];
    assert!(block1.contains("status: executed"));
    assert!(!block1.contains("actions:"));
}
