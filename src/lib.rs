//! Agora - Governance Proposal Client
//!
//! A wallet-backed client for viewing, creating, and voting on governance
//! proposals held by an external on-chain contract, and for triggering
//! execution once a proposal is resolved.
//!
//! Key principles:
//! - The contract owns all proposal state; the client holds read-only snapshots
//! - Full-snapshot refresh only (no incremental merge, no caching)
//! - Every mutating call is awaited to on-chain settlement before the view
//!   treats it as complete
//! - All failures are surfaced to the user; nothing is swallowed

pub mod chain;
pub mod view;
pub mod wallet;
