// commands/mod.rs
// Console commands: parsing of input lines into SimCommand and their handlers.

pub mod dispatcher;
pub mod particle;
pub mod state;

pub use dispatcher::{process_command, Flow};

use crate::error::{Result, SimError};

/// One request from the console to the simulation thread.
#[derive(Clone, Debug, PartialEq)]
pub enum SimCommand {
    /// Raw text fields; parsing (and the random fallback) happens on the simulation side.
    AddParticle { charge: String, mass: String },
    AddRandom,
    ToggleBoundaries,
    Regenerate,
    DeleteAll,
    Setup { count: usize },
    Slower,
    Faster,
    TogglePause,
    Status,
    StepOnce,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  add <charge C> <mass kg>  add a particle at a random position
  random                    add a random particle
  setup <count>             replace all particles with <count> random ones
  clear                     destroy every particle
  regen                     put every particle at rest at a new random position
  bounds                    toggle the containment walls
  slower | faster           halve or double the time scale
  pause                     pause or resume time
  step                      advance one tick and stay paused
  status                    print a diagnostics snapshot
  help                      show this text
  quit                      stop the simulation";

/// Parse one console line. Blank lines are not commands and return `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<SimCommand>> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();
    let cmd = match (head.to_ascii_lowercase().as_str(), args.as_slice()) {
        ("add", [charge, mass]) => SimCommand::AddParticle {
            charge: (*charge).to_owned(),
            mass: (*mass).to_owned(),
        },
        ("add", _) => return Err(SimError::Command("usage: add <charge> <mass>".into())),
        ("random", []) => SimCommand::AddRandom,
        ("setup", [count]) => {
            let count = count
                .parse()
                .map_err(|_| SimError::Command(format!("not a particle count: {count}")))?;
            SimCommand::Setup { count }
        }
        ("setup", _) => return Err(SimError::Command("usage: setup <count>".into())),
        ("clear", []) => SimCommand::DeleteAll,
        ("regen", []) => SimCommand::Regenerate,
        ("bounds", []) => SimCommand::ToggleBoundaries,
        ("slower", []) => SimCommand::Slower,
        ("faster", []) => SimCommand::Faster,
        ("pause", []) => SimCommand::TogglePause,
        ("step", []) => SimCommand::StepOnce,
        ("status", []) => SimCommand::Status,
        ("help" | "?", []) => SimCommand::Help,
        ("quit" | "exit", []) => SimCommand::Quit,
        (other, []) => return Err(SimError::Command(format!("unknown command: {other}"))),
        (other, _) => {
            return Err(SimError::Command(format!(
                "unexpected arguments for {other}"
            )))
        }
    };
    Ok(Some(cmd))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> SimCommand {
        parse_command(line).unwrap().unwrap()
    }

    #[test]
    fn parses_every_command() {
        assert_eq!(
            parse("add 1e-3 10"),
            SimCommand::AddParticle {
                charge: "1e-3".into(),
                mass: "10".into()
            }
        );
        assert_eq!(parse("random"), SimCommand::AddRandom);
        assert_eq!(parse("setup 25"), SimCommand::Setup { count: 25 });
        assert_eq!(parse("clear"), SimCommand::DeleteAll);
        assert_eq!(parse("regen"), SimCommand::Regenerate);
        assert_eq!(parse("bounds"), SimCommand::ToggleBoundaries);
        assert_eq!(parse("slower"), SimCommand::Slower);
        assert_eq!(parse("faster"), SimCommand::Faster);
        assert_eq!(parse("pause"), SimCommand::TogglePause);
        assert_eq!(parse("step"), SimCommand::StepOnce);
        assert_eq!(parse("status"), SimCommand::Status);
        assert_eq!(parse("?"), SimCommand::Help);
        assert_eq!(parse("exit"), SimCommand::Quit);
    }

    #[test]
    fn case_and_whitespace_are_ignored() {
        assert_eq!(parse("   BOUNDS  "), SimCommand::ToggleBoundaries);
        assert_eq!(parse("\tsetup\t3"), SimCommand::Setup { count: 3 });
    }

    #[test]
    fn add_keeps_unparsable_text_for_the_fallback() {
        assert_eq!(
            parse("add abc -2"),
            SimCommand::AddParticle {
                charge: "abc".into(),
                mass: "-2".into()
            }
        );
    }

    #[test]
    fn blank_line_is_not_a_command() {
        assert_eq!(parse_command("   ").unwrap(), None);
    }

    #[test]
    fn malformed_lines_are_errors() {
        for line in ["add 1", "setup", "setup many", "setup -1", "frobnicate", "pause now"] {
            let err = parse_command(line).unwrap_err();
            assert!(matches!(err, SimError::Command(_)), "{line}: {err}");
        }
    }
}
