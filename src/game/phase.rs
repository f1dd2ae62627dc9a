//! Round progression as an explicit state machine.
//!
//! The phase replaces a set of loosely coupled booleans with one tagged
//! value and one transition validator, so inconsistent flag combinations
//! cannot be represented. A round walks
//! Dealt → AwaitingSelections → ReadyForScoring → ReadyForReview and
//! rolls back over to Dealt.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Where the current round stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Hands and prompt are dealt; no selections yet.
    #[default]
    Dealt,
    /// At least one, but not all, non-czar selections are in.
    AwaitingSelections,
    /// Every expected selection is in; the czar may judge.
    ReadyForScoring,
    /// The czar picked a winner; waiting for everyone to ready up.
    ReadyForReview,
}

impl RoundPhase {
    /// Validate and apply a transition, returning the new phase.
    ///
    /// Staying in place while selections accumulate is legal; any other
    /// edge not in the round cycle is an [`GameError::InvalidTransition`].
    pub fn advance(self, to: RoundPhase) -> Result<RoundPhase> {
        use RoundPhase::*;
        let legal = matches!(
            (self, to),
            (Dealt, AwaitingSelections)
                | (Dealt, ReadyForScoring)
                | (AwaitingSelections, AwaitingSelections)
                | (AwaitingSelections, ReadyForScoring)
                | (ReadyForScoring, ReadyForReview)
                | (ReadyForReview, Dealt)
        );
        if legal {
            Ok(to)
        } else {
            Err(GameError::InvalidTransition { from: self, to })
        }
    }

    /// Whether players may still submit or change selections.
    #[must_use]
    pub fn accepts_selections(self) -> bool {
        matches!(self, RoundPhase::Dealt | RoundPhase::AwaitingSelections)
    }
}

impl std::fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RoundPhase::Dealt => "Dealt",
            RoundPhase::AwaitingSelections => "AwaitingSelections",
            RoundPhase::ReadyForScoring => "ReadyForScoring",
            RoundPhase::ReadyForReview => "ReadyForReview",
        };
        write!(f, "{name}")
    }
}
