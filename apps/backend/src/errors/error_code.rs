//! Error codes for the Gambit backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the Gambit backend API.
///
/// This enum ensures type safety and prevents the use of ad-hoc error codes.
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that appears
/// in HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Match lifecycle
    /// Operation not valid for the match's current status
    InvalidTransition,
    /// Match is not accepting moves
    NotActive,
    /// Not the caller's turn to move
    OutOfTurn,
    /// Rules oracle rejected the move
    IllegalMove,
    /// The mover's clock ran out; the match has been completed
    ClockExpired,
    /// Client-reported remaining time outside the server bound
    InvalidClockClaim,
    /// Creator attempted to join their own match
    SelfJoin,

    // Request Validation
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    /// Match not found
    MatchNotFound,
    /// User not found
    UserNotFound,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    /// Wallet address already registered
    WalletTaken,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Canonical SCREAMING_SNAKE_CASE string for this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidTransition => "INVALID_TRANSITION",
            ErrorCode::NotActive => "NOT_ACTIVE",
            ErrorCode::OutOfTurn => "OUT_OF_TURN",
            ErrorCode::IllegalMove => "ILLEGAL_MOVE",
            ErrorCode::ClockExpired => "CLOCK_EXPIRED",
            ErrorCode::InvalidClockClaim => "INVALID_CLOCK_CLAIM",
            ErrorCode::SelfJoin => "SELF_JOIN",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::MatchNotFound => "MATCH_NOT_FOUND",
            ErrorCode::UserNotFound => "USER_NOT_FOUND",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::WalletTaken => "WALLET_TAKEN",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::Internal => "INTERNAL",
            ErrorCode::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
