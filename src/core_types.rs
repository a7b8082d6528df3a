//! Core identifier types shared by all modules.
//!
//! Semantic aliases keep signatures readable and leave room for newtype
//! hardening later without touching every call site.

/// User ID - globally unique, immutable after assignment.
///
/// Supplied by the surrounding auth layer with every ledger call. The core
/// trusts the identity itself and only re-checks account ownership.
pub type UserId = i64;

/// Account number - unique, immutable once the account is opened.
///
/// Doubles as the key of the in-process lock table. The lexicographic order
/// of account numbers is the canonical lock-acquisition order for
/// two-account operations.
pub type AccountNo = String;
