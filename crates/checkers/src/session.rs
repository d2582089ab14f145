//! Interactive play: setup, turns and the play-again loop.

use crate::prompt::Prompter;
use crate::settings::GameSettings;
use anyhow::{Context, Result};
use checkers_core::{BoardSize, Game, GameStatus, MoveError, Player, Players, Storage, render};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Choices fixed for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Setup {
    players: Players,
    storage: Storage,
    size: BoardSize,
}

/// Runs games over a prompter until the players stop or input runs out.
#[derive(Debug)]
pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    settings: GameSettings,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session; choices present in `settings` are not prompted.
    pub fn new(prompter: Prompter<R, W>, settings: GameSettings) -> Self {
        Self { prompter, settings }
    }

    /// Consumes the session, returning the prompter.
    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }

    /// Plays games until a player declines another or input is exhausted.
    pub fn run(&mut self) -> Result<()> {
        self.run_from(None)
    }

    /// Like [`Session::run`], but the first game is played on `first`
    /// instead of a freshly set up board.
    #[instrument(skip(self, first), fields(settings = ?self.settings))]
    pub(crate) fn run_from(&mut self, mut first: Option<Game>) -> Result<()> {
        self.prompter.say("Welcome to Checkers!")?;

        loop {
            let Some(setup) = self.setup()? else {
                break;
            };
            info!(?setup, "Starting game");

            let game = first
                .take()
                .unwrap_or_else(|| Game::new(setup.storage.build(setup.size, setup.players)));
            let Some(winner) = self.play(game)? else {
                break;
            };
            info!(?winner, "Game finished");

            match self.prompter.ask_yes_no("Do you want to play again? (Y/N)")? {
                Some(true) => continue,
                _ => break,
            }
        }

        self.prompter.say("Thanks for playing!")?;
        Ok(())
    }

    fn setup(&mut self) -> Result<Option<Setup>> {
        let preset_two = *self.settings.player_two();
        let one = match self.settings.player_one() {
            Some(symbol) => *symbol,
            None => match self.prompter.ask_symbol("Player 1", preset_two)? {
                Some(symbol) => symbol,
                None => return Ok(None),
            },
        };
        let two = match self.settings.player_two() {
            Some(symbol) => *symbol,
            None => match self.prompter.ask_symbol("Player 2", Some(one))? {
                Some(symbol) => symbol,
                None => return Ok(None),
            },
        };
        let players = Players::new(one, two).context("Invalid piece letters")?;

        let storage = match self.settings.storage() {
            Some(storage) => *storage,
            None => match self.prompter.ask_storage()? {
                Some(storage) => storage,
                None => return Ok(None),
            },
        };
        let size = match self.settings.size() {
            Some(size) => *size,
            None => match self.prompter.ask_size()? {
                Some(size) => size,
                None => return Ok(None),
            },
        };

        Ok(Some(Setup {
            players,
            storage,
            size,
        }))
    }

    /// Plays one game, returning the winner or `None` if input ran out.
    #[instrument(skip(self, game), fields(size = %game.board().size()))]
    fn play(&mut self, mut game: Game) -> Result<Option<Player>> {
        let players = game.board().players();
        self.prompter.say(render(game.board()))?;

        loop {
            let player = game.to_move();
            let symbol = players.symbol_of(player);

            let Some(pos) = self.prompter.ask_position(symbol)? else {
                return Ok(None);
            };
            let directions = match game.legal_directions(pos) {
                Ok(directions) => directions,
                Err(MoveError::NotYourPiece(..)) => {
                    debug!(%pos, "Selected tile is not the mover's");
                    self.prompter.say(format!(
                        "Player {}, that isn't your piece. Pick one of your own.",
                        symbol
                    ))?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            if directions.is_empty() {
                warn!(%pos, ?player, "Selected piece has no legal move; turn forfeited");
                self.prompter.say(format!(
                    "That piece can't move. Player {} loses the turn.",
                    symbol
                ))?;
                game.pass();
                self.prompter.say(render(game.board()))?;
                continue;
            }

            let Some(dir) = self.prompter.ask_direction(&directions)? else {
                return Ok(None);
            };
            let turn = game.play(pos, dir)?;

            self.prompter.say(render(game.board()))?;
            if let Some(captured) = turn.captured {
                self.prompter
                    .say(format!("Player {} captured the piece at {}.", symbol, captured))?;
            }
            if turn.crowned {
                self.prompter
                    .say(format!("Player {}'s piece at {} is now a king!", symbol, turn.to))?;
            }
            if let GameStatus::Won(winner) = turn.status {
                self.prompter.say(format!("Player {} wins!", symbol))?;
                return Ok(Some(winner));
            }
        }
    }
}
