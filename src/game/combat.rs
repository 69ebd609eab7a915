//! Combat resolution.
//!
//! The knight that moves onto an occupied tile attacks with a half-point
//! surprise bonus. Stats are integers, so the bonus also rules out ties.

use crate::game::{ItemId, Knight, KnightId};

/// Score added to the attacker's attack for the fight it starts.
pub const SURPRISE_BONUS: f64 = 0.5;

/// Outcome of a single fight. Exactly one side dies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FightOutcome {
    /// Knight that started the fight.
    pub attacker: KnightId,
    /// Knight that was attacked.
    pub defender: KnightId,
    /// Surviving knight.
    pub winner: KnightId,
    /// Knight that died.
    pub loser: KnightId,
    /// Item the loser was holding, now lying unequipped on its tile.
    pub released: Option<ItemId>,
}

impl FightOutcome {
    /// Check if the attacker survived.
    #[must_use]
    pub fn attacker_won(&self) -> bool {
        self.winner == self.attacker
    }
}

/// Score the attacker brings to a fight.
#[must_use]
pub fn attack_score(attacker: &Knight) -> f64 {
    f64::from(attacker.attack) + SURPRISE_BONUS
}

/// Score the defender brings to a fight.
#[must_use]
pub fn defense_score(defender: &Knight) -> f64 {
    f64::from(defender.defense)
}

/// Resolve a fight between two knights.
///
/// The attacker wins only if its score is strictly greater than the
/// defender's. The loser is marked dead and gives up its item; the caller
/// unequips the released item, which stays on the loser's tile.
pub fn fight(attacker: &mut Knight, defender: &mut Knight) -> FightOutcome {
    let attacker_id = attacker.id;
    let defender_id = defender.id;

    let (winner, loser) = if attack_score(attacker) > defense_score(defender) {
        (attacker_id, defender)
    } else {
        (defender_id, attacker)
    };
    let released = loser.die();

    tracing::info!(
        winner = %winner,
        loser = %loser.id,
        position = ?loser.position,
        released = ?released,
        "knight killed in combat"
    );

    FightOutcome {
        attacker: attacker_id,
        defender: defender_id,
        winner,
        loser: loser.id,
        released,
    }
}

/// Kani formal verification proofs.
///
/// Run with: `cargo kani`
#[cfg(kani)]
mod kani_proofs {
    /// Prove that integer stats plus the surprise bonus never tie a defender.
    #[kani::proof]
    fn prove_surprise_bonus_breaks_ties() {
        let attack: u8 = kani::any();
        let defense: u8 = kani::any();

        let attacker_score = f64::from(attack) + super::SURPRISE_BONUS;
        let defender_score = f64::from(defense);

        assert!(attacker_score > defender_score || attacker_score < defender_score);
    }
}
