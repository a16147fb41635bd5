//! Core types used throughout the system
//!
//! These are fundamental type aliases shared by both registries.

/// Record ID - identity assigned by a record store.
///
/// # Constraints:
/// - **Store-assigned**: never supplied by a client on create
/// - **Immutable**: once assigned, NEVER changes
/// - **Never reused**: ids are handed out from a monotonic counter starting at 1
pub type RecordId = u64;

/// User ID - the identity of a record in the user store.
///
/// Orders reference users through this id as a soft foreign key.
pub type UserId = RecordId;

/// Order ID - the identity of a record in the order store.
pub type OrderId = RecordId;

/// First id handed out by an empty store.
pub const FIRST_RECORD_ID: RecordId = 1;
