//! Prime-sum game implementation.

use crate::core::{Card, GameConfig, GameState, Moves, PlayerId, PrimeTable};
use crate::error::{Error, Result};
use crate::rules::RulesEngine;

/// The prime-sum card game: configuration plus its primality table.
#[derive(Clone, Debug)]
pub struct PrimeSumGame {
    config: GameConfig,
    primes: PrimeTable,
}

impl Default for PrimeSumGame {
    /// Both players hold 1 through 10; primes up to 200.
    fn default() -> Self {
        let config = GameConfig::default();
        let primes = PrimeTable::new(config.prime_bound);
        Self { config, primes }
    }
}

impl PrimeSumGame {
    /// Build a game from a configuration, rejecting configurations whose
    /// prime table cannot cover every reachable sum.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let primes = PrimeTable::new(config.prime_bound);
        Ok(Self { config, primes })
    }

    /// Get the game configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get the primality table.
    pub fn primes(&self) -> &PrimeTable {
        &self.primes
    }

    /// Display name for a seat.
    pub fn player_name(&self, player: PlayerId) -> &str {
        self.config.player_name(player)
    }

    /// Play a card after checking it is legal for `player` right now.
    ///
    /// Unlike `GameState::play_card`, this also rejects held cards that
    /// would not make the sum prime.
    pub fn play_legal(&self, state: &GameState, player: PlayerId, card: Card) -> Result<GameState> {
        if !self.legal_moves(state, player).contains(&card) {
            if !state.hand(player).contains(&card) {
                return Err(Error::CardNotInHand { player, card });
            }
            return Err(Error::IllegalMove {
                player,
                card,
                sum: state.sum,
            });
        }
        state.play_card(player, card)
    }
}

impl RulesEngine for PrimeSumGame {
    type State = GameState;
    type Move = Card;

    fn initial_state(&self) -> GameState {
        GameState::new(self.config.hand.iter().copied())
    }

    fn legal_moves(&self, state: &GameState, player: PlayerId) -> Moves {
        state.legal_moves(player, &self.primes)
    }

    fn apply(&self, state: &GameState, player: PlayerId, card: Card) -> Result<GameState> {
        state.play_card(player, card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::GameResult;

    #[test]
    fn test_default_game() {
        let game = PrimeSumGame::default();

        assert_eq!(game.initial_state(), GameState::initial());
        assert_eq!(game.primes().bound(), 200);
        assert_eq!(game.player_name(PlayerId::FIRST), "Jo");
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = GameConfig::default().with_prime_bound(50);
        assert!(matches!(PrimeSumGame::new(config), Err(Error::InvalidConfig { .. })));

        let overflowing = GameConfig::default()
            .with_hand([3_000_000_000])
            .with_prime_bound(Card::MAX);
        assert!(matches!(PrimeSumGame::new(overflowing), Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn test_custom_hand() {
        let game = PrimeSumGame::new(GameConfig::default().with_hand([1, 2, 3])).unwrap();
        let state = game.initial_state();

        assert_eq!(state.cards_remaining(), 6);
        assert_eq!(game.legal_moves(&state, PlayerId::FIRST).as_slice(), &[2, 3]);
    }

    #[test]
    fn test_play_legal() {
        let game = PrimeSumGame::default();
        let state = game.initial_state();

        let next = game.play_legal(&state, PlayerId::FIRST, 5).unwrap();
        assert_eq!(next.sum, 5);

        assert!(matches!(
            game.play_legal(&state, PlayerId::FIRST, 4),
            Err(Error::IllegalMove { card: 4, sum: 0, .. })
        ));
        assert!(matches!(
            game.play_legal(&next, PlayerId::FIRST, 5),
            Err(Error::CardNotInHand { card: 5, .. })
        ));
    }

    #[test]
    fn test_terminal_state() {
        // 0 + 2 = 2, then 2 + 1 = 3; the first player is left holding 1 on 3.
        let game = PrimeSumGame::new(GameConfig::default().with_hand([1, 2])).unwrap();
        assert_eq!(game.is_terminal(&game.initial_state(), PlayerId::FIRST), None);

        let (state, to_act) = game.replay(&[2, 1]).unwrap();

        assert_eq!(state.sum, 3);
        assert_eq!(to_act, PlayerId::FIRST);
        assert_eq!(
            game.is_terminal(&state, to_act),
            Some(GameResult::Winner(PlayerId::SECOND))
        );
    }
}
