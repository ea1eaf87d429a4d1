//! Interactive player reading card choices from a text stream.

use std::io::{BufRead, Write};

use super::strategy::Player;
use crate::core::{Card, GameState, PlayerId};
use crate::error::{Error, Result};
use crate::games::PrimeSumGame;
use crate::rules::RulesEngine;

/// Prompts on `output` and reads one card per line from `input`.
///
/// Anything that is not a legal card is rejected and the player is asked
/// again; the game state is untouched until a legal card arrives.
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Create a player over arbitrary streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn choose(&mut self, game: &PrimeSumGame, player: PlayerId, state: &GameState) -> Result<Card> {
        let moves = game.legal_moves(state, player);
        let hand: Vec<Card> = state.hand(player).iter().copied().collect();

        writeln!(
            self.output,
            "Enter card value. Sum: {}, Cards: {:?}, Options: {:?}",
            state.sum,
            hand,
            moves.as_slice()
        )?;
        self.output.flush()?;

        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Error::InputClosed);
            }

            match line.trim().parse::<Card>() {
                Ok(card) if moves.contains(&card) => return Ok(card),
                _ => {
                    log::debug!("{} rejected input {:?}", player, line.trim());
                    writeln!(self.output, "Input invalid, please try again.")?;
                    self.output.flush()?;
                }
            }
        }
    }
}

/// Interactive player on the process's standard input and output.
///
/// Standard input is locked only while a card is being chosen, so two
/// console players can share one terminal.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsolePlayer;

impl Player for ConsolePlayer {
    fn choose(&mut self, game: &PrimeSumGame, player: PlayerId, state: &GameState) -> Result<Card> {
        HumanPlayer::new(std::io::stdin().lock(), std::io::stdout().lock()).choose(game, player, state)
    }
}
