//! Game state management.

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use crate::error::{GameError, GameResult};
use crate::game::{
    Direction, FightOutcome, FinalState, Item, ItemId, Knight, KnightId, Step, assert_invariants,
    fight,
};

/// A single scripted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// Knight to move.
    pub knight: KnightId,
    /// Direction of the step.
    pub direction: Direction,
}

impl Move {
    /// Create a new move.
    #[must_use]
    pub const fn new(knight: KnightId, direction: Direction) -> Self {
        Self { knight, direction }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.knight, self.direction)
    }
}

/// Parses a `<knight>:<direction>` token such as `R:N`.
impl FromStr for Move {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((knight, direction)) = s.split_once(':') else {
            return Err(GameError::InvalidMove(s.to_string()));
        };
        Ok(Self {
            knight: knight.parse()?,
            direction: direction.parse()?,
        })
    }
}

/// Everything a single move did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    /// Knight that was moved.
    pub knight: KnightId,
    /// Effect of the step itself.
    pub step: Step,
    /// Item equipped after arriving, if any.
    pub picked_up: Option<ItemId>,
    /// Fights started by the mover, in the order they were fought.
    pub fights: Vec<FightOutcome>,
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// All knights, in roster order.
    pub knights: Vec<Knight>,
    /// All items, in roster order.
    pub items: Vec<Item>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create a game with the fixed starting layout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            knights: KnightId::ALL.into_iter().map(Knight::new).collect(),
            items: ItemId::ALL.into_iter().map(Item::new).collect(),
        }
    }

    /// Get a knight by ID.
    #[must_use]
    pub fn knight(&self, id: KnightId) -> Option<&Knight> {
        self.knights.iter().find(|k| k.id == id)
    }

    /// Get an item by ID.
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    /// Get all live knights.
    pub fn live_knights(&self) -> impl Iterator<Item = &Knight> {
        self.knights.iter().filter(|k| k.is_live())
    }

    /// Move a knight one step, then resolve pickup and battles.
    ///
    /// Pickup always happens before the battle check, so an item found on the
    /// destination tile already counts in the fights that follow.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::KnightNotFound`] if the knight is not on the roster.
    pub fn move_knight(&mut self, id: KnightId, direction: Direction) -> GameResult<MoveReport> {
        let idx = self
            .knights
            .iter()
            .position(|k| k.id == id)
            .ok_or(GameError::KnightNotFound(id))?;

        let step = self.knights[idx].step(direction);
        self.place_held_item(idx, step);

        let mut report = MoveReport {
            knight: id,
            step,
            picked_up: None,
            fights: Vec::new(),
        };

        match step {
            Step::Ignored => {
                tracing::debug!(knight = %id, %direction, "move ignored, knight is not live");
            }
            Step::Moved { from, to } => {
                tracing::debug!(knight = %id, %direction, %from, %to, "knight moved");
            }
            Step::Drowned {
                last_valid,
                dropped,
            } => {
                tracing::info!(knight = %id, %direction, %last_valid, ?dropped, "knight drowned");
            }
        }

        if self.knights[idx].is_live() {
            report.picked_up = self.handle_item_pickup(idx);
            report.fights = self.check_for_battles(idx);
        }

        Ok(report)
    }

    /// Keep a carried item on its holder's tile, or leave a drowned knight's
    /// item on the last tile it stood on.
    fn place_held_item(&mut self, idx: usize, step: Step) {
        match step {
            Step::Ignored => {}
            Step::Moved { to, .. } => {
                let held = self.knights[idx].item;
                if let Some(item) = held.and_then(|id| self.item_mut(id)) {
                    item.position = to;
                }
            }
            Step::Drowned {
                last_valid,
                dropped: Some(dropped),
            } => {
                if let Some(item) = self.item_mut(dropped) {
                    item.position = last_valid;
                    item.unequip();
                }
            }
            Step::Drowned { dropped: None, .. } => {}
        }
    }

    /// Equip the best unequipped item on the knight's tile.
    ///
    /// Highest priority wins; equal priorities fall back to roster order.
    fn handle_item_pickup(&mut self, idx: usize) -> Option<ItemId> {
        let knight = &mut self.knights[idx];
        if knight.item.is_some() {
            return None;
        }
        let tile = knight.position?;

        let best = self
            .items
            .iter_mut()
            .filter(|item| item.is_available_at(tile))
            .min_by_key(|item| (Reverse(item.priority), item.id))?;

        best.equipped = true;
        knight.equip(best);

        tracing::info!(
            knight = %knight.id,
            item = %best.id,
            attack = knight.attack,
            defense = knight.defense,
            "item picked up"
        );

        Some(best.id)
    }

    /// Fight every other live knight on the mover's tile, in roster order.
    ///
    /// Stops as soon as the mover itself dies.
    fn check_for_battles(&mut self, idx: usize) -> Vec<FightOutcome> {
        let mut fights = Vec::new();

        for other in 0..self.knights.len() {
            if other == idx {
                continue;
            }

            let mover = &self.knights[idx];
            let Some(tile) = mover.position.filter(|_| mover.is_live()) else {
                break;
            };
            if !self.knights[other].is_live_at(tile) {
                continue;
            }

            let (attacker, defender) = pair_mut(&mut self.knights, idx, other);
            let outcome = fight(attacker, defender);
            if let Some(item) = outcome.released.and_then(|id| self.item_mut(id)) {
                item.unequip();
            }
            fights.push(outcome);
        }

        fights
    }

    /// Apply moves strictly in order.
    ///
    /// Moves for knights that are no longer live are no-ops.
    ///
    /// # Errors
    ///
    /// Stops at the first move that fails; earlier moves stay applied.
    pub fn process_moves(&mut self, moves: &[Move]) -> GameResult<()> {
        for mv in moves {
            self.move_knight(mv.knight, mv.direction)?;
            assert_invariants(self);
        }
        Ok(())
    }

    /// Project the current state of every knight and item.
    #[must_use]
    pub fn final_state(&self) -> FinalState {
        FinalState::capture(&self.knights, &self.items)
    }
}

/// Borrow two distinct elements of a slice mutably.
fn pair_mut<T>(slice: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(a, b);
    if a < b {
        let (low, high) = slice.split_at_mut(b);
        (&mut low[a], &mut high[0])
    } else {
        let (low, high) = slice.split_at_mut(a);
        (&mut high[0], &mut low[b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Coord, KnightStatus};

    use crate::game::Direction::{East, North, South, West};

    fn play(game: &mut Game, moves: &[(KnightId, Direction)]) {
        for &(id, direction) in moves {
            game.move_knight(id, direction).unwrap();
        }
    }

    #[test]
    fn test_game_creation() {
        let game = Game::new();
        assert_eq!(game.knights.len(), 4);
        assert_eq!(game.items.len(), 4);
        assert_eq!(game.live_knights().count(), 4);
        assert_eq!(
            game.knight(KnightId::Yellow).unwrap().position,
            Some(Coord::new(0, 7))
        );
    }

    #[test]
    fn test_move_parse() {
        assert_eq!(
            "G:W".parse::<Move>(),
            Ok(Move::new(KnightId::Green, West))
        );
        assert_eq!(
            "GW".parse::<Move>(),
            Err(GameError::InvalidMove("GW".to_string()))
        );
        assert_eq!(
            "Q:N".parse::<Move>(),
            Err(GameError::InvalidKnight("Q".to_string()))
        );
        assert_eq!(
            "R:X".parse::<Move>(),
            Err(GameError::InvalidDirection("X".to_string()))
        );
        assert_eq!(Move::new(KnightId::Blue, North).to_string(), "B:N");
    }

    #[test]
    fn test_knight_not_on_roster() {
        let mut game = Game::new();
        game.knights.retain(|k| k.id != KnightId::Blue);
        assert_eq!(
            game.move_knight(KnightId::Blue, North),
            Err(GameError::KnightNotFound(KnightId::Blue))
        );
    }

    #[test]
    fn test_pickup_on_arrival() {
        let mut game = Game::new();
        play(
            &mut game,
            &[
                (KnightId::Red, South),
                (KnightId::Red, South),
                (KnightId::Red, East),
            ],
        );
        let report = game.move_knight(KnightId::Red, East).unwrap();
        assert_eq!(report.picked_up, Some(ItemId::Axe));

        let red = game.knight(KnightId::Red).unwrap();
        assert_eq!((red.attack, red.defense), (3, 1));
        assert!(game.item(ItemId::Axe).unwrap().equipped);
    }

    #[test]
    fn test_carried_item_follows_knight() {
        let mut game = Game::new();
        play(
            &mut game,
            &[
                (KnightId::Red, South),
                (KnightId::Red, South),
                (KnightId::Red, East),
                (KnightId::Red, East),
                (KnightId::Red, South),
            ],
        );
        let axe = game.item(ItemId::Axe).unwrap();
        assert_eq!(axe.position, Coord::new(3, 2));
        assert!(axe.equipped);
    }

    #[test]
    fn test_holder_ignores_other_items() {
        let mut game = Game::new();
        // Red picks up the axe, then walks onto the dagger.
        play(
            &mut game,
            &[
                (KnightId::Red, South),
                (KnightId::Red, South),
                (KnightId::Red, East),
                (KnightId::Red, East),
                (KnightId::Red, East),
                (KnightId::Red, East),
            ],
        );
        let report = game.move_knight(KnightId::Red, East).unwrap();
        assert_eq!(report.picked_up, None);
        assert_eq!(game.knight(KnightId::Red).unwrap().item, Some(ItemId::Axe));
        assert!(!game.item(ItemId::Dagger).unwrap().equipped);
    }

    #[test]
    fn test_pickup_prefers_priority() {
        let mut game = Game::new();
        // Pile every item onto (1, 0).
        for item in &mut game.items {
            item.position = Coord::new(1, 0);
        }
        let report = game.move_knight(KnightId::Red, South).unwrap();
        assert_eq!(report.picked_up, Some(ItemId::Axe));
    }

    #[test]
    fn test_pickup_priority_tie_uses_roster_order() {
        let mut game = Game::new();
        for item in &mut game.items {
            item.position = Coord::new(1, 0);
            item.priority = 7;
        }
        let report = game.move_knight(KnightId::Red, South).unwrap();
        assert_eq!(report.picked_up, Some(ItemId::Axe));

        let mut game = Game::new();
        for item in &mut game.items {
            item.position = Coord::new(1, 0);
            item.priority = 7;
        }
        game.items.reverse();
        let report = game.move_knight(KnightId::Red, South).unwrap();
        assert_eq!(report.picked_up, Some(ItemId::Axe));
    }

    #[test]
    fn test_drowning_drops_item_behind_last_good_step() {
        let mut game = Game::new();
        play(
            &mut game,
            &[
                (KnightId::Red, South),
                (KnightId::Red, South),
                (KnightId::Red, East),
                (KnightId::Red, East),
                (KnightId::Red, North),
                (KnightId::Red, North),
            ],
        );
        let report = game.move_knight(KnightId::Red, North).unwrap();
        assert_eq!(
            report.step,
            Step::Drowned {
                last_valid: Coord::new(1, 2),
                dropped: Some(ItemId::Axe)
            }
        );

        // Red drowned from (0, 2); the axe stays one step back on (1, 2).
        let axe = game.item(ItemId::Axe).unwrap();
        assert_eq!(axe.position, Coord::new(1, 2));
        assert!(!axe.equipped);
        let red = game.knight(KnightId::Red).unwrap();
        assert_eq!(red.status, KnightStatus::Drowned);
        assert_eq!(red.item, None);
    }

    #[test]
    fn test_dropped_item_can_be_picked_up_again() {
        let mut game = Game::new();
        play(
            &mut game,
            &[
                (KnightId::Red, South),
                (KnightId::Red, South),
                (KnightId::Red, East),
                (KnightId::Red, East),
                (KnightId::Red, North),
                (KnightId::Red, North),
                (KnightId::Red, North),
            ],
        );
        // Yellow walks along row 0 to (0, 2).
        for _ in 0..4 {
            game.move_knight(KnightId::Yellow, West).unwrap();
        }
        let report = game.move_knight(KnightId::Yellow, West).unwrap();
        assert_eq!(report.picked_up, Some(ItemId::Axe));
        assert_eq!(
            game.knight(KnightId::Yellow).unwrap().position,
            Some(Coord::new(0, 2))
        );
    }

    #[test]
    fn test_battle_on_shared_tile() {
        let mut game = Game::new();
        // Red to (0, 6), then yellow steps west onto it.
        for _ in 0..6 {
            game.move_knight(KnightId::Red, East).unwrap();
        }
        let report = game.move_knight(KnightId::Yellow, West).unwrap();
        assert_eq!(report.fights.len(), 1);
        assert_eq!(report.fights[0].winner, KnightId::Yellow);
        assert_eq!(
            game.knight(KnightId::Red).unwrap().status,
            KnightStatus::Dead
        );
        assert_eq!(
            game.knight(KnightId::Red).unwrap().position,
            Some(Coord::new(0, 6))
        );
    }

    #[test]
    fn test_no_fight_with_dead_knight() {
        let mut game = Game::new();
        for _ in 0..6 {
            game.move_knight(KnightId::Red, East).unwrap();
        }
        game.move_knight(KnightId::Yellow, West).unwrap();
        // Yellow steps away and comes back onto dead red.
        game.move_knight(KnightId::Yellow, South).unwrap();
        let report = game.move_knight(KnightId::Yellow, North).unwrap();
        assert!(report.fights.is_empty());
    }

    #[test]
    fn test_mover_that_dies_stops_fighting() {
        let mut game = Game::new();
        let tile = Coord::new(4, 4);
        // Blue and green wait on (4, 4) wearing helmets; red arrives bare.
        for id in [KnightId::Blue, KnightId::Green] {
            let knight = game.knights.iter_mut().find(|k| k.id == id).unwrap();
            knight.position = Some(tile);
            knight.defense = 2;
        }
        let red = game.knights.iter_mut().find(|k| k.id == KnightId::Red).unwrap();
        red.position = Some(Coord::new(3, 4));

        let report = game.move_knight(KnightId::Red, South).unwrap();
        assert_eq!(report.fights.len(), 1);
        assert_eq!(report.fights[0].defender, KnightId::Blue);
        assert_eq!(report.fights[0].loser, KnightId::Red);
        assert_eq!(
            game.knight(KnightId::Green).unwrap().status,
            KnightStatus::Live
        );
    }

    #[test]
    fn test_mover_fights_each_defender_in_roster_order() {
        let mut game = Game::new();
        let tile = Coord::new(4, 4);
        for id in [KnightId::Green, KnightId::Blue] {
            let knight = game.knights.iter_mut().find(|k| k.id == id).unwrap();
            knight.position = Some(tile);
        }
        let red = game.knights.iter_mut().find(|k| k.id == KnightId::Red).unwrap();
        red.position = Some(Coord::new(3, 4));

        let report = game.move_knight(KnightId::Red, South).unwrap();
        let defenders: Vec<_> = report.fights.iter().map(|f| f.defender).collect();
        assert_eq!(defenders, [KnightId::Blue, KnightId::Green]);
        assert!(report.fights.iter().all(FightOutcome::attacker_won));
    }

    #[test]
    fn test_pickup_before_fight() {
        let mut game = Game::new();
        // Blue waits on the axe tile with a helmet-level defense of 2.
        let blue = game.knights.iter_mut().find(|k| k.id == KnightId::Blue).unwrap();
        blue.position = Some(Coord::new(2, 2));
        blue.defense = 2;
        let red = game.knights.iter_mut().find(|k| k.id == KnightId::Red).unwrap();
        red.position = Some(Coord::new(2, 1));

        // Bare red (1.5) would lose to 2; the axe makes it 3.5.
        let report = game.move_knight(KnightId::Red, East).unwrap();
        assert_eq!(report.picked_up, Some(ItemId::Axe));
        assert_eq!(report.fights.len(), 1);
        assert!(report.fights[0].attacker_won());
    }

    #[test]
    fn test_process_moves_skips_terminal_knights() {
        let mut game = Game::new();
        let moves = [
            Move::new(KnightId::Red, North),
            Move::new(KnightId::Red, South),
            Move::new(KnightId::Red, South),
        ];
        game.process_moves(&moves).unwrap();
        let red = game.knight(KnightId::Red).unwrap();
        assert_eq!(red.status, KnightStatus::Drowned);
        assert_eq!(red.position, None);
    }

    #[test]
    fn test_pair_mut() {
        let mut values = [1, 2, 3];
        let (a, b) = pair_mut(&mut values, 2, 0);
        std::mem::swap(a, b);
        assert_eq!(values, [3, 2, 1]);
    }
}
