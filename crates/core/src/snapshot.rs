//! Persisted cart snapshots.
//!
//! The cart is persisted as an explicit, versioned JSON record rather than
//! an ad-hoc dump of the in-memory state, so that malformed or
//! future-versioned data restores along a deliberate code path.

use serde::{Deserialize, Serialize};

use crate::{cart::Cart, lines::CartLine};

/// Snapshot format version written by the current code.
pub const SNAPSHOT_VERSION: u32 = 1;

/// The serialized form of a cart held in durable storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSnapshot {
    /// Record format version.
    pub version: u32,

    /// The cart lines in insertion order.
    pub lines: Vec<CartLine>,
}

impl CartSnapshot {
    /// Captures the current state of `cart`.
    pub fn of(cart: &Cart) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            lines: cart.lines().to_vec(),
        }
    }

    /// An empty snapshot at the current version.
    pub fn empty() -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            lines: Vec::new(),
        }
    }

    /// Parses a stored record.
    ///
    /// Anything other than a well-formed snapshot at the current version is
    /// treated as "no cart": malformed JSON and unknown versions both yield
    /// the empty snapshot, never an error.
    pub fn parse_or_default(raw: &str) -> Self {
        match serde_json::from_str::<Self>(raw) {
            Ok(snapshot) if snapshot.version == SNAPSHOT_VERSION => snapshot,
            Ok(_) | Err(_) => Self::empty(),
        }
    }

    /// Serializes the snapshot for storage.
    ///
    /// # Errors
    ///
    /// Returns an error when JSON serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Rebuilds the cart this snapshot was captured from.
    pub fn into_cart(self) -> Cart {
        Cart::from_lines(self.lines)
    }
}
