//! REPL session
//!
//! Holds pagination state and the pokedex, and executes commands against the
//! API client. Output goes to any `Write` so handlers can be tested.

use std::io::Write;

use rand::Rng;
use tracing::debug;

use crate::api::PokeApiClient;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::pokedex::Pokedex;
use crate::repl::command::{Command, COMMANDS};

/// What the read loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Exit,
}

/// Mutable state shared by all commands of one REPL run.
#[derive(Debug)]
pub struct Session {
    client: PokeApiClient,
    pokedex: Pokedex,
    next: Option<String>,
    previous: Option<String>,
    catch_threshold: u32,
}

impl Session {
    /// Creates a session positioned before the first page of location areas.
    pub fn new(client: PokeApiClient, config: &Config) -> Self {
        let next = Some(client.first_page_url());
        Self {
            client,
            pokedex: Pokedex::new(),
            next,
            previous: None,
            catch_threshold: config.catch_threshold.min(100),
        }
    }

    pub fn pokedex(&self) -> &Pokedex {
        &self.pokedex
    }

    /// Runs one command, writing its output to `out`.
    pub async fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<ControlFlow> {
        debug!(?command, "executing command");

        match command {
            Command::Help => self.help(out)?,
            Command::Map => {
                let url = self.next.clone().ok_or(PokedexError::NoNextPage)?;
                self.show_page(&url, out).await?;
            }
            Command::MapBack => {
                let url = self.previous.clone().ok_or(PokedexError::NoPreviousPage)?;
                self.show_page(&url, out).await?;
            }
            Command::Explore(area) => self.explore(&area, out).await?,
            Command::Catch(name) => self.catch(&name, out).await?,
            Command::Inspect(name) => self.inspect(&name, out)?,
            Command::Pokedex => self.list_pokedex(out)?,
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(ControlFlow::Exit);
            }
        }

        Ok(ControlFlow::Continue)
    }

    fn help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Welcome to the Pokedex!")?;
        writeln!(out, "Usage:")?;
        writeln!(out)?;
        for (usage, description) in COMMANDS {
            writeln!(out, "{}: {}", usage, description)?;
        }
        Ok(())
    }

    async fn show_page<W: Write>(&mut self, url: &str, out: &mut W) -> Result<()> {
        let page = self.client.location_area_page(url).await?;

        for name in page.names() {
            writeln!(out, "{}", name)?;
        }

        // Only move once the page decoded, so a failed fetch can be retried
        self.next = page.next;
        self.previous = page.previous;
        Ok(())
    }

    async fn explore<W: Write>(&self, area: &str, out: &mut W) -> Result<()> {
        writeln!(out, "Exploring {}...", area)?;
        let location = self.client.location_area(area).await?;

        writeln!(out, "Found Pokemon:")?;
        for name in location.pokemon_names() {
            writeln!(out, " - {}", name)?;
        }
        Ok(())
    }

    async fn catch<W: Write>(&mut self, name: &str, out: &mut W) -> Result<()> {
        let pokemon = self.client.pokemon(name).await?;
        writeln!(out, "Throwing a Pokeball at {}...", name)?;

        let roll: u32 = rand::rng().random_range(0..100);
        debug!(name, roll, threshold = self.catch_threshold, "catch roll");

        if roll < self.catch_threshold {
            writeln!(out, "{} escaped!", name)?;
        } else {
            writeln!(out, "{} was caught!", name)?;
            writeln!(out, "You may now inspect it with the inspect command.")?;
            self.pokedex.add(name, pokemon);
        }
        Ok(())
    }

    fn inspect<W: Write>(&self, name: &str, out: &mut W) -> Result<()> {
        let pokemon = self
            .pokedex
            .get(name)
            .ok_or_else(|| PokedexError::NotCaught(name.to_string()))?;

        writeln!(out, "Name: {}", name)?;
        writeln!(out, "Height: {}", pokemon.height)?;
        writeln!(out, "Weight: {}", pokemon.weight)?;
        writeln!(out, "Stats:")?;
        for stat in &pokemon.stats {
            writeln!(out, "  -{}: {}", stat.stat.name, stat.base_stat)?;
        }
        writeln!(out, "Types:")?;
        for kind in &pokemon.types {
            writeln!(out, "  - {}", kind.kind.name)?;
        }
        Ok(())
    }

    fn list_pokedex<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.pokedex.is_empty() {
            writeln!(out, "Your Pokedex is empty")?;
            return Ok(());
        }

        writeln!(out, "Your Pokedex:")?;
        for name in self.pokedex.names() {
            writeln!(out, " - {}", name)?;
        }
        Ok(())
    }
}
