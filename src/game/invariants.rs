//! Game invariants - sanity checks that detect bugs.
//!
//! No sequence of moves should ever trip these. A violation means the rule
//! engine mutated knights and items out of step with each other.

use crate::game::{BASE_STAT, Game, KnightStatus};

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all game invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(game: &Game) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let mut violation = |message: String| violations.push(InvariantViolation { message });

    for knight in &game.knights {
        let id = knight.id;
        let zeroed = knight.attack == 0 && knight.defense == 0;

        // Position is cleared exactly when drowned
        if (knight.status == KnightStatus::Drowned) != knight.position.is_none() {
            violation(format!(
                "Knight {id} is {} with position {:?}",
                knight.status, knight.position
            ));
        }

        if knight.status == KnightStatus::Live {
            let expected = match knight.item.and_then(|held| game.item(held)) {
                Some(item) => (BASE_STAT + item.attack_bonus, BASE_STAT + item.defense_bonus),
                None => (BASE_STAT, BASE_STAT),
            };
            if (knight.attack, knight.defense) != expected {
                violation(format!(
                    "Knight {id} has stats ({}, {}), expected {expected:?}",
                    knight.attack, knight.defense
                ));
            }
        } else {
            if !zeroed {
                violation(format!(
                    "{} knight {id} has stats ({}, {})",
                    knight.status, knight.attack, knight.defense
                ));
            }
            if let Some(held) = knight.item {
                violation(format!("{} knight {id} still holds {held}", knight.status));
            }
        }

        // A held item is equipped and shares the holder's tile
        if let Some(held) = knight.item {
            match game.item(held) {
                Some(item) if !item.equipped => {
                    violation(format!("Knight {id} holds {held} but it is not equipped"));
                }
                Some(item) if Some(item.position) != knight.position => {
                    violation(format!(
                        "Knight {id} at {:?} holds {held} lying at {}",
                        knight.position, item.position
                    ));
                }
                Some(_) => {}
                None => violation(format!("Knight {id} holds {held} which is not in play")),
            }
        }
    }

    // Every equipped item has exactly one holder
    for item in &game.items {
        let holders = game
            .knights
            .iter()
            .filter(|k| k.item == Some(item.id))
            .count();
        if item.equipped && holders != 1 {
            violation(format!("Item {} is equipped by {holders} knights", item.id));
        }
        if !item.equipped && holders != 0 {
            violation(format!("Item {} is unequipped but held", item.id));
        }
        if !item.position.in_bounds() {
            violation(format!("Item {} lies off the board at {}", item.id, item.position));
        }
    }

    violations
}

/// Assert all game invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(game: &Game) {
    let violations = check_invariants(game);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Game invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_game: &Game) {}
