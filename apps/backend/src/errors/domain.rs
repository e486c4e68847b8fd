//! Domain-level error type used across the match core, services, and store.
//!
//! This error type is HTTP-agnostic. Handlers should return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::game::Side;

/// Domain-level not found entities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundKind {
    User,
    Match,
}

/// Domain-level conflict kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    WalletTaken,
    Other(String),
}

/// Central domain error type.
///
/// The match-lifecycle variants map 1:1 to the typed failures of the state
/// machine; `Validation`, `Conflict`, and `NotFound` cover the outer surface
/// (registration, lookups). All variants are local, synchronous, and
/// non-retryable.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Operation not valid for the match's current status
    InvalidTransition(String),
    /// Move submitted while the match is not accepting moves
    NotActive,
    /// Actor is not the side whose turn it is
    OutOfTurn { expected: Side },
    /// Rules oracle rejected the move
    IllegalMove(String),
    /// The mover's clock ran out; the match has been forced to completion
    ClockExpired { side: Side },
    /// Client-reported remaining time is outside the server bound
    InvalidClockClaim { claimed: i64, bound: i64 },
    /// Second participant equals the first
    SelfJoin,
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Input/user validation or business rule violation
    Validation(String),
    /// Semantic conflict
    Conflict(ConflictKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::InvalidTransition(d) => write!(f, "invalid transition: {d}"),
            DomainError::NotActive => write!(f, "match is not active"),
            DomainError::OutOfTurn { expected } => {
                write!(f, "out of turn: it is {expected:?}'s turn to move")
            }
            DomainError::IllegalMove(d) => write!(f, "illegal move: {d}"),
            DomainError::ClockExpired { side } => write!(f, "clock expired for {side:?}"),
            DomainError::InvalidClockClaim { claimed, bound } => {
                write!(f, "invalid clock claim: {claimed}s not within [0, {bound}]")
            }
            DomainError::SelfJoin => write!(f, "cannot join your own match"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Validation(d) => write!(f, "validation error: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn illegal_move(detail: impl Into<String>) -> Self {
        Self::IllegalMove(detail.into())
    }
    pub fn invalid_transition(detail: impl Into<String>) -> Self {
        Self::InvalidTransition(detail.into())
    }
}
