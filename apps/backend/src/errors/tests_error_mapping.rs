use actix_web::http::StatusCode;

use crate::domain::game::Side;
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::errors::ErrorCode;

fn assert_mapping(err: DomainError, code: ErrorCode, status: StatusCode) {
    let app: AppError = err.clone().into();
    assert_eq!(app.code(), code, "code for {err:?}");
    assert_eq!(app.status(), status, "status for {err:?}");
}

#[test]
fn lifecycle_errors_map_to_conflicts() {
    assert_mapping(
        DomainError::invalid_transition("already active"),
        ErrorCode::InvalidTransition,
        StatusCode::CONFLICT,
    );
    assert_mapping(
        DomainError::NotActive,
        ErrorCode::NotActive,
        StatusCode::CONFLICT,
    );
    assert_mapping(
        DomainError::ClockExpired { side: Side::White },
        ErrorCode::ClockExpired,
        StatusCode::CONFLICT,
    );
}

#[test]
fn caller_errors_map_to_bad_requests() {
    assert_mapping(
        DomainError::OutOfTurn {
            expected: Side::Black,
        },
        ErrorCode::OutOfTurn,
        StatusCode::BAD_REQUEST,
    );
    assert_mapping(
        DomainError::illegal_move("square b2 is already occupied"),
        ErrorCode::IllegalMove,
        StatusCode::BAD_REQUEST,
    );
    assert_mapping(
        DomainError::InvalidClockClaim {
            claimed: 700,
            bound: 600,
        },
        ErrorCode::InvalidClockClaim,
        StatusCode::BAD_REQUEST,
    );
    assert_mapping(
        DomainError::SelfJoin,
        ErrorCode::SelfJoin,
        StatusCode::BAD_REQUEST,
    );
    assert_mapping(
        DomainError::validation("time budget out of range"),
        ErrorCode::ValidationError,
        StatusCode::BAD_REQUEST,
    );
}

#[test]
fn lookups_map_to_not_found() {
    assert_mapping(
        DomainError::not_found(NotFoundKind::Match, "match x not found"),
        ErrorCode::MatchNotFound,
        StatusCode::NOT_FOUND,
    );
    assert_mapping(
        DomainError::not_found(NotFoundKind::User, "user y not found"),
        ErrorCode::UserNotFound,
        StatusCode::NOT_FOUND,
    );
}

#[test]
fn wallet_conflicts_keep_their_specific_code() {
    assert_mapping(
        DomainError::conflict(ConflictKind::WalletTaken, "wallet w already registered"),
        ErrorCode::WalletTaken,
        StatusCode::CONFLICT,
    );
    assert_mapping(
        DomainError::conflict(ConflictKind::Other("seat".into()), "taken"),
        ErrorCode::Conflict,
        StatusCode::CONFLICT,
    );
}
