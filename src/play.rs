//! Single-game loop between two strategies.

use std::fmt;

use crate::core::{Card, GameState, PlayerId};
use crate::error::Result;
use crate::games::PrimeSumGame;
use crate::players::Player;
use crate::rules::{GameResult, RulesEngine};

/// One card played during a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ply {
    /// Who played.
    pub player: PlayerId,
    /// The card played.
    pub card: Card,
    /// Running sum after the card.
    pub sum: Card,
}

impl fmt::Display for Ply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} has chosen {}. New sum: {}", self.player, self.card, self.sum)
    }
}

/// Outcome of a finished game.
#[derive(Clone, Debug)]
pub struct GameRecord {
    /// Who won.
    pub result: GameResult,
    /// Cards in the order they were played.
    pub moves: Vec<Card>,
    /// State in which the loser had no legal card.
    pub final_state: GameState,
}

impl GameRecord {
    /// The winning player.
    #[must_use]
    pub fn winner(&self) -> PlayerId {
        self.result.winner()
    }
}

/// Play one game from the initial state, player 0 first.
///
/// Every choice is checked against the legal moves before it is applied;
/// a strategy proposing anything else aborts the game with an error.
/// `observer` sees each ply after it is applied.
pub fn play_game(
    game: &PrimeSumGame,
    mut players: [&mut dyn Player; 2],
    mut observer: impl FnMut(&Ply),
) -> Result<GameRecord> {
    let mut state = game.initial_state();
    let mut turn = PlayerId::FIRST;
    let mut moves = Vec::new();

    loop {
        if let Some(result) = game.is_terminal(&state, turn) {
            log::info!("{} wins after {} plies (sum {})", result.winner(), moves.len(), state.sum);
            return Ok(GameRecord {
                result,
                moves,
                final_state: state,
            });
        }

        let card = players[turn.index()].choose(game, turn, &state)?;
        state = game.play_legal(&state, turn, card)?;
        moves.push(card);

        let ply = Ply {
            player: turn,
            card,
            sum: state.sum,
        };
        log::debug!("{}", ply);
        observer(&ply);

        turn = turn.other();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::players::{FirstPlayer, RandomPlayer};

    /// Always plays the same card, legal or not.
    struct Stubborn(Card);

    impl Player for Stubborn {
        fn choose(&mut self, _: &PrimeSumGame, _: PlayerId, _: &GameState) -> Result<Card> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_first_vs_first() {
        // Sums 2, 3, 7, 11, 17, 19, 29, 37; the first player then holds
        // {1, 3, 5, 7, 8, 9} and 38, 40, 42, 44, 45, 46 are all composite.
        let game = PrimeSumGame::default();
        let mut plies = Vec::new();

        let record = play_game(&game, [&mut FirstPlayer, &mut FirstPlayer], |ply| plies.push(*ply)).unwrap();

        assert_eq!(record.moves, vec![2, 1, 4, 4, 6, 2, 10, 8]);
        assert_eq!(record.winner(), PlayerId::SECOND);
        assert_eq!(record.final_state.sum, 37);
        assert_eq!(plies.len(), 8);
        assert_eq!(plies[1].to_string(), "Player 1 has chosen 1. New sum: 3");
    }

    #[test]
    fn test_random_game_is_replayable() {
        let game = PrimeSumGame::default();
        let mut a = RandomPlayer::from_seed(1);
        let mut b = RandomPlayer::from_seed(2);

        let record = play_game(&game, [&mut a, &mut b], |_| {}).unwrap();

        let (state, to_act) = game.replay(&record.moves).unwrap();
        assert_eq!(state, record.final_state);
        assert_eq!(game.is_terminal(&state, to_act), Some(record.result));
        assert!(record.moves.len() <= 20);
    }

    #[test]
    fn test_illegal_choice_aborts() {
        let game = PrimeSumGame::default();

        let err = play_game(&game, [&mut Stubborn(4), &mut FirstPlayer], |_| {}).unwrap_err();

        assert!(matches!(
            err,
            Error::IllegalMove { player: PlayerId::FIRST, card: 4, sum: 0 }
        ));
    }
}
