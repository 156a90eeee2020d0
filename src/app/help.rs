//! Fixed menu and introduction text.

use crate::model::game::Game;
use crate::model::Resource;
use std::io::{self, Write};

const RULE_MENU: &str = "==============================================================";

pub fn write_welcome<W: Write>(w: &mut W, game: &Game) -> io::Result<()> {
    writeln!(w, "============================================")?;
    writeln!(w, "Welcome to the {} game! 🌱 🌱 🌱", game.name())?;
    writeln!(w, "============================================")?;
    writeln!(w)?;
    writeln!(
        w,
        "The goal of the game is to grow a plant to {} inches tall",
        game.max_plant_size()
    )?;
    writeln!(
        w,
        "To do so you will have {} time periods in which you'll have to:",
        game.max_time_period()
    )?;
    writeln!(w, "- Decide how much you want to water the plant 💧")?;
    writeln!(w, "- Decide how much light you want to provide to the plant 🌞")?;
    writeln!(w, "- Decide how much nutrient pills you want to feed the plant 💊")?;
    writeln!(w)
}

pub fn write_main_menu<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w, "Please chose between the following options:")?;
    writeln!(w, "👍  Start Game: Press 1")?;
    writeln!(w, "👎  Quit Game: Press 2")
}

pub fn write_period_menu<W: Write>(w: &mut W, time_period: i64) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{RULE_MENU}")?;
    writeln!(
        w,
        "What would you like to perform for the time period #{time_period}"
    )?;
    writeln!(w, "Please chose between the following options:")?;
    writeln!(w, "--> View Game Status 🌱 : Press 1")?;
    writeln!(w, "--> Manage Water 💧 : Press 2")?;
    writeln!(w, "--> Manage Light 🌞 : Press 3")?;
    writeln!(w, "--> Manage Nutrients 💊 : Press 4")?;
    writeln!(w, "--> Nothing. Continue to the next round! 📍 : Press 5")?;
    writeln!(w, "--> Quit Game 👎 : Press 6")?;
    writeln!(w, "{RULE_MENU}")
}

pub fn write_manage_menu<W: Write>(
    w: &mut W,
    resource: Resource,
    time_period: i64,
) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{RULE_MENU}")?;
    writeln!(
        w,
        "You can either add or remove/reduce {}  {} ({}) for the time period #{}",
        resource.icon(),
        resource,
        resource.unit(),
        time_period
    )?;
    writeln!(w, "Please chose between the following options:")?;
    writeln!(w, "--> View Game Status 🌱 : Press 1")?;
    writeln!(w, "--> Add {resource} ➕ : Press 2")?;
    writeln!(w, "--> Remove/Reduce {resource} ➖ : Press 3")?;
    writeln!(w, "--> I'm good. Get back to previous menu 👍 : Press 4")?;
    writeln!(w, "{RULE_MENU}")
}

#[must_use]
pub fn add_question(resource: Resource) -> String {
    format!(
        "How much {}  {} {} do you want to add (enter 0 to cancel)?",
        resource.icon(),
        resource,
        resource.unit()
    )
}

#[must_use]
pub fn remove_question(resource: Resource) -> String {
    format!(
        "How many {}  {} {} do you want to remove/reduce (enter 0 to cancel)?",
        resource.icon(),
        resource,
        resource.unit()
    )
}
