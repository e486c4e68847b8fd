//! Rules-oracle seam: move legality and terminal detection live behind this
//! trait.
//!
//! The core treats the oracle as a pure function: given a position encoding
//! and a candidate move it either rejects the move or returns the resulting
//! position together with an optional terminal report. The oracle holds no
//! state of its own and never observes clocks, wagers, or participants.

use crate::domain::game::Side;
use crate::errors::domain::DomainError;

/// How a match ended, as reported by the oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalOutcome {
    Decisive { winner: Side },
    Draw,
}

/// Oracle-reported end of a match, with a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalReport {
    pub outcome: TerminalOutcome,
    pub reason: String,
}

/// Result of a successfully validated move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveVerdict {
    /// Position after the move is applied.
    pub position: String,
    /// Present when the move ended the match.
    pub terminal: Option<TerminalReport>,
}

/// External authority on move legality and terminal detection.
///
/// Implementations must be deterministic: the position after move *n* is a
/// pure function of the initial position and moves 1..*n*.
pub trait RulesOracle: Send + Sync {
    /// Position encoding of a match before the first move.
    fn initial_position(&self) -> String;

    /// Validate `notation` against `position`.
    ///
    /// Rejections surface as [`DomainError::IllegalMove`]; a corrupt position
    /// encoding (which indicates a bug, not a caller error) surfaces as
    /// [`DomainError::Validation`].
    fn validate(&self, position: &str, notation: &str) -> Result<MoveVerdict, DomainError>;
}
