//! Text rendering for the terminal front end.

use crate::app::Ending;
use crate::model::{Resource, StatusReport};
use std::io::{self, Write};

const RULE_HEAVY: &str = "************************************************";
const RULE_LIGHT: &str = "-----------------------------------------------";

pub fn write_status<W: Write>(w: &mut W, report: &StatusReport) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{RULE_HEAVY}")?;
    writeln!(w, "Current Plant Size 📍 : {:.3} inches", report.size)?;
    for (resource, level) in report.available.iter() {
        writeln!(
            w,
            "{} level {} : {:.3} {}",
            capitalize(resource.name()),
            resource.icon(),
            level,
            resource.unit()
        )?;
    }
    writeln!(w, "{RULE_LIGHT}")?;
    writeln!(w, "Plant growth 📏 : {:.3} inches", report.growth)?;
    for (resource, consumed) in report.consumption.iter() {
        writeln!(
            w,
            "{} {} : {:.3} {}",
            consumption_label(resource),
            resource.icon(),
            consumed,
            resource.unit()
        )?;
    }
    writeln!(w, "{RULE_LIGHT}")?;
    for (resource, delta) in report.delta.iter() {
        writeln!(
            w,
            "{} {} : {:.3} {}",
            delta_label(resource),
            resource.icon(),
            delta,
            resource.unit()
        )?;
    }
    writeln!(w, "{RULE_HEAVY}")
}

pub fn write_ending<W: Write>(
    w: &mut W,
    ending: &Ending,
    game_name: &str,
    goal_size: f64,
) -> io::Result<()> {
    writeln!(w)?;
    match ending {
        Ending::Won => {
            writeln!(w, "CONGRATULATIONS! 👏")?;
            writeln!(
                w,
                "PLANT IS ALIVE 💚  and has reached the {goal_size:.2} inches goal!"
            )?;
        }
        Ending::Died { reason } => {
            writeln!(w, "GAME OVER! 💀  Try again...")?;
            writeln!(w, "PLANT DIED 💔  because of: {reason}")?;
            return Ok(());
        }
        Ending::OutOfRounds => {
            writeln!(
                w,
                "Seems like you've reached the time period limit of the game! 🙈"
            )?;
            writeln!(w, "GAME OVER! 💀  Try again...")?;
        }
        Ending::Quit => {
            writeln!(w, "Quitting game...")?;
        }
    }
    writeln!(w, "Thank you for playing the 🌱  {game_name} game!")
}

/// Warning shown when a removal empties the pool.
#[must_use]
pub fn depletion_warning(resource: Resource) -> &'static str {
    match resource {
        Resource::Water => "After removal seems like there is no water left!",
        Resource::Light => "After removal seems like light has been turned off!",
        Resource::Nutrients => "After removal seems like there are no nutrients left!",
    }
}

fn consumption_label(resource: Resource) -> &'static str {
    match resource {
        Resource::Water => "Water consumption",
        Resource::Light => "Light used",
        Resource::Nutrients => "Nutrients consumption",
    }
}

fn delta_label(resource: Resource) -> &'static str {
    match resource {
        Resource::Water => "Plant water consumption vs need",
        Resource::Light => "Plant light provided vs need",
        Resource::Nutrients => "Plant nutrients consumption vs need",
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PerResource;

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_status_lists_every_resource() {
        let report = StatusReport {
            size: 1.99,
            available: PerResource::new(0.0, 10.0, 0.0),
            growth: 0.99,
            consumption: PerResource::new(100.0, 10.0, 5.0),
            delta: PerResource::default(),
        };
        let text = render(|w| write_status(w, &report));
        assert!(text.contains("Current Plant Size 📍 : 1.990 inches"));
        assert!(text.contains("Light level 🌞 : 10.000 units"));
        assert!(text.contains("Plant growth 📏 : 0.990 inches"));
        assert!(text.contains("Water consumption 💧 : 100.000 drops"));
        assert!(text.contains("Plant nutrients consumption vs need 💊 : 0.000 pills"));
    }

    #[test]
    fn test_death_ending_shows_reason() {
        let ending = Ending::Died {
            reason: "not enough water".to_string(),
        };
        let text = render(|w| write_ending(w, &ending, "Plant", 10.0));
        assert!(text.contains("PLANT DIED 💔  because of: not enough water"));
        assert!(!text.contains("Thank you"));
    }

    #[test]
    fn test_win_ending_shows_goal() {
        let text = render(|w| write_ending(w, &Ending::Won, "Fern", 12.0));
        assert!(text.contains("12.00 inches goal"));
        assert!(text.contains("the 🌱  Fern game"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("nutrients"), "Nutrients");
        assert_eq!(capitalize(""), "");
    }
}
