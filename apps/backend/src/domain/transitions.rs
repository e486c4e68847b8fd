//! Pure lifecycle transitions for a match.
//!
//! These functions mutate an owned [`Game`] and never touch storage. Callers
//! persist the result only after a transition succeeds, so a failed call
//! leaves the stored match exactly as it was.

use time::OffsetDateTime;

use crate::domain::clock;
use crate::domain::game::{Game, GameOutcome, GameStatus, MoveRecord, Side};
use crate::domain::oracle::{MoveVerdict, TerminalOutcome};
use crate::errors::domain::DomainError;

/// Seat the second participant and open play.
///
/// The sole transition out of `Waiting` into play; stamps the action clock so
/// the first mover's countdown starts here.
pub fn join(game: &mut Game, user_id: &str, now: OffsetDateTime) -> Result<(), DomainError> {
    if game.status != GameStatus::Waiting {
        return Err(DomainError::invalid_transition(format!(
            "cannot join a match in status {:?}",
            game.status
        )));
    }
    if game.white_id == user_id {
        return Err(DomainError::SelfJoin);
    }
    game.black_id = Some(user_id.to_string());
    game.status = GameStatus::Active;
    game.last_action_at = Some(now);
    Ok(())
}

/// Creator-only cancellation of a match nobody has joined yet.
pub fn cancel(game: &mut Game, user_id: &str) -> Result<(), DomainError> {
    if game.status != GameStatus::Waiting {
        return Err(DomainError::invalid_transition(format!(
            "cannot cancel a match in status {:?}",
            game.status
        )));
    }
    if game.white_id != user_id {
        return Err(DomainError::validation("only the creator may cancel a match"));
    }
    game.status = GameStatus::Cancelled;
    Ok(())
}

/// Resolve the caller to the side whose turn it is.
///
/// Turn parity is derived from the accepted move counter, never from
/// client-asserted state. A caller who is not seated on the expected side —
/// including a non-participant — is out of turn.
pub fn ensure_mover(game: &Game, user_id: &str) -> Result<Side, DomainError> {
    if game.status != GameStatus::Active {
        return Err(DomainError::NotActive);
    }
    let expected = game.side_to_move();
    match game.user_for(expected) {
        Some(id) if id == user_id => Ok(expected),
        _ => Err(DomainError::OutOfTurn { expected }),
    }
}

/// Apply an oracle-accepted move to the match.
///
/// The clock claim is bounds-checked before any mutation, so a rejected claim
/// leaves the match untouched. Returns the move record for the caller to
/// persist; when the verdict reports a terminal condition the match is
/// transitioned to `Completed` with the outcome fixed.
pub fn apply_accepted_move(
    game: &mut Game,
    mover: Side,
    notation: &str,
    verdict: &MoveVerdict,
    claimed_remaining: i64,
    now: OffsetDateTime,
) -> Result<MoveRecord, DomainError> {
    clock::validate_claim(claimed_remaining, game.remaining_for(mover))?;

    game.move_count += 1;
    game.position = verdict.position.clone();
    game.set_remaining(mover, claimed_remaining);
    game.last_action_at = Some(now);

    if let Some(report) = &verdict.terminal {
        game.status = GameStatus::Completed;
        game.completed_at = Some(now);
        game.outcome = match report.outcome {
            TerminalOutcome::Decisive { winner } => GameOutcome::win_for(winner),
            TerminalOutcome::Draw => GameOutcome::Draw,
        };
    }

    Ok(MoveRecord {
        game_id: game.id.clone(),
        seq: game.move_count,
        notation: notation.to_string(),
        position: game.position.clone(),
        remaining_time: claimed_remaining,
        created_at: now,
    })
}

/// Force a timed-out match to completion, crediting the waiting side.
///
/// When both clocks could be judged expired at the same instant, the side to
/// move is the one charged.
pub fn force_timeout(game: &mut Game, now: OffsetDateTime) -> GameOutcome {
    let loser = game.side_to_move();
    game.set_remaining(loser, 0);
    game.status = GameStatus::Completed;
    game.completed_at = Some(now);
    game.outcome = GameOutcome::win_for(loser.opponent());
    game.outcome
}
