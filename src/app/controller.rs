//! Interactive menu loop driving a [`Game`] from a line-based terminal.

use super::help;
use super::input::Prompter;
use super::{settle_round, Ending};
use crate::model::game::{Game, Removal};
use crate::model::Resource;
use crate::ui::renderer;
use anyhow::Result;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Add,
    Remove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Main,
    Period,
    Manage(Resource),
    Amount(Resource, Action),
}

enum Step {
    Go(Screen),
    End(Ending),
}

pub struct Controller<R, W> {
    game: Game,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Controller<R, W> {
    pub fn new(game: Game, input: R, output: W) -> Self {
        Self {
            game,
            prompter: Prompter::new(input, output),
        }
    }

    pub fn into_parts(self) -> (Game, W) {
        (self.game, self.prompter.into_output())
    }

    /// Plays until the game is decided or the player quits.
    pub fn run(&mut self) -> Result<Ending> {
        help::write_welcome(self.prompter.output(), &self.game)?;

        let mut screen = Screen::Main;
        let ending = loop {
            let next = match screen {
                Screen::Main => self.main_menu()?,
                Screen::Period => self.period_menu()?,
                Screen::Manage(resource) => self.manage_menu(resource)?,
                Screen::Amount(resource, action) => self.amount_prompt(resource, action)?,
            };
            match next {
                Step::Go(next_screen) => screen = next_screen,
                Step::End(ending) => break ending,
            }
        };

        renderer::write_ending(
            self.prompter.output(),
            &ending,
            self.game.name(),
            self.game.max_plant_size(),
        )?;
        tracing::info!(?ending, rounds = self.game.metrics().rounds(), "Session finished");
        Ok(ending)
    }

    fn main_menu(&mut self) -> Result<Step> {
        match self.prompter.choose(2, help::write_main_menu)? {
            Some(1) => {
                writeln!(self.prompter.output())?;
                writeln!(self.prompter.output(), "Starting game...")?;
                Ok(Step::Go(Screen::Period))
            }
            _ => Ok(Step::End(Ending::Quit)),
        }
    }

    fn period_menu(&mut self) -> Result<Step> {
        let period = self.game.time_period();
        let choice = self.prompter.choose(6, |w| help::write_period_menu(w, period))?;
        Ok(match choice {
            Some(1) => {
                renderer::write_status(self.prompter.output(), &self.game.status_report())?;
                Step::Go(Screen::Period)
            }
            Some(2) => Step::Go(Screen::Manage(Resource::Water)),
            Some(3) => Step::Go(Screen::Manage(Resource::Light)),
            Some(4) => Step::Go(Screen::Manage(Resource::Nutrients)),
            Some(5) => self.next_round()?,
            _ => Step::End(Ending::Quit),
        })
    }

    fn next_round(&mut self) -> Result<Step> {
        writeln!(self.prompter.output())?;
        writeln!(
            self.prompter.output(),
            "Moving to Next Time Period and updating Plant..."
        )?;
        let outcome = self.game.update();
        renderer::write_status(self.prompter.output(), &outcome.report)?;
        Ok(match settle_round(&mut self.game, &outcome) {
            Some(ending) => Step::End(ending),
            None => Step::Go(Screen::Period),
        })
    }

    fn manage_menu(&mut self, resource: Resource) -> Result<Step> {
        let period = self.game.time_period();
        let choice = self
            .prompter
            .choose(4, |w| help::write_manage_menu(w, resource, period))?;
        Ok(match choice {
            Some(1) => {
                renderer::write_status(self.prompter.output(), &self.game.status_report())?;
                Step::Go(Screen::Manage(resource))
            }
            Some(2) => Step::Go(Screen::Amount(resource, Action::Add)),
            Some(3) => Step::Go(Screen::Amount(resource, Action::Remove)),
            Some(4) => Step::Go(Screen::Period),
            _ => Step::End(Ending::Quit),
        })
    }

    fn amount_prompt(&mut self, resource: Resource, action: Action) -> Result<Step> {
        let question = match action {
            Action::Add => help::add_question(resource),
            Action::Remove => help::remove_question(resource),
        };
        let Some(amount) = self.prompter.amount(&question)? else {
            return Ok(Step::End(Ending::Quit));
        };
        // Zero cancels.
        if amount > 0 {
            match action {
                Action::Add => self.game.add(resource, amount)?,
                Action::Remove => {
                    if self.game.remove(resource, amount)? == Removal::Depleted {
                        writeln!(
                            self.prompter.output(),
                            "{}",
                            renderer::depletion_warning(resource)
                        )?;
                    }
                }
            }
        }
        Ok(Step::Go(Screen::Manage(resource)))
    }
}
