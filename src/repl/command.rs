//! Command parsing
//!
//! Turns one line of user input into a [`Command`].

use crate::error::{PokedexError, Result};

/// A parsed REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Map,
    MapBack,
    Explore(String),
    Catch(String),
    Inspect(String),
    Pokedex,
    Exit,
}

/// Usage line and description for every command, in help order.
pub const COMMANDS: &[(&str, &str)] = &[
    ("help", "Displays this help message"),
    ("map", "Displays the next 20 location areas"),
    ("mapb", "Displays the previous 20 location areas"),
    ("explore <area>", "Lists the Pokemon found in a location area"),
    ("catch <pokemon>", "Throws a Pokeball and adds the Pokemon to your Pokedex"),
    ("inspect <pokemon>", "Shows details of a caught Pokemon"),
    ("pokedex", "Lists every Pokemon you have caught"),
    ("exit", "Exits the Pokedex"),
];

impl Command {
    /// Parses a line of input.
    ///
    /// Returns `Ok(None)` for a blank line. The command word is matched
    /// case-insensitively; extra arguments beyond the first are ignored.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let arg = words.next().map(str::to_lowercase);

        let command = match name.to_lowercase().as_str() {
            "help" => Command::Help,
            "map" => Command::Map,
            "mapb" => Command::MapBack,
            "explore" => Command::Explore(arg.ok_or(PokedexError::MissingArgument("area name"))?),
            "catch" => Command::Catch(arg.ok_or(PokedexError::MissingArgument("pokemon name"))?),
            "inspect" => {
                Command::Inspect(arg.ok_or(PokedexError::MissingArgument("pokemon name"))?)
            }
            "pokedex" => Command::Pokedex,
            "exit" | "quit" => Command::Exit,
            other => return Err(PokedexError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("help").unwrap(), Some(Command::Help));
        assert_eq!(Command::parse("map").unwrap(), Some(Command::Map));
        assert_eq!(Command::parse("mapb").unwrap(), Some(Command::MapBack));
        assert_eq!(Command::parse("pokedex").unwrap(), Some(Command::Pokedex));
        assert_eq!(Command::parse("exit").unwrap(), Some(Command::Exit));
    }

    #[test]
    fn test_parse_with_argument() {
        assert_eq!(
            Command::parse("  explore   canalave-city-area ").unwrap(),
            Some(Command::Explore("canalave-city-area".to_string()))
        );
        assert_eq!(
            Command::parse("CATCH Pikachu").unwrap(),
            Some(Command::Catch("pikachu".to_string()))
        );
        assert_eq!(
            Command::parse("inspect pidgey extra").unwrap(),
            Some(Command::Inspect("pidgey".to_string()))
        );
    }

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   \t").unwrap(), None);
    }

    #[test]
    fn test_parse_missing_argument() {
        assert!(matches!(
            Command::parse("catch"),
            Err(PokedexError::MissingArgument("pokemon name"))
        ));
        assert!(matches!(
            Command::parse("explore"),
            Err(PokedexError::MissingArgument("area name"))
        ));
    }

    #[test]
    fn test_parse_unknown_command() {
        match Command::parse("fly") {
            Err(PokedexError::UnknownCommand(name)) => assert_eq!(name, "fly"),
            other => panic!("unexpected parse result: {:?}", other),
        }
    }

    #[test]
    fn test_every_command_is_documented() {
        for (usage, _) in COMMANDS {
            let word = usage.split_whitespace().next().unwrap();
            let line = format!("{} arg", word);
            assert!(Command::parse(&line).unwrap().is_some(), "{} should parse", word);
        }
    }
}
