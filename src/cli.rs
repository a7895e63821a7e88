// src/cli.rs
//
// Terminal front end over the same lookups the GUI tabs run. Lines go to
// stdout, notices to stderr. A failed fetch or bad input exits non-zero.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{eyre, Result, WrapErr};

use crate::config::consts::{DATA_ENV, DEFAULT_DATASET, DM_LINKS, SPELLS_FILTER};
use crate::config::options::EncounterSource;
use crate::controller::{Notice, ViewController};
use crate::core::{Fetcher, HttpFetcher};
use crate::initiative::{TurnEntry, TurnOrder};
use crate::reference::ReferenceTable;
use crate::specs::{self, Request};

#[derive(Parser, Debug)]
#[command(name = "dm_screen", version, about = "Dungeon master screen lookups")]
pub struct Cli {
    /// Reference table for `treasure`
    #[arg(long, global = true, env = DATA_ENV, default_value = DEFAULT_DATASET)]
    pub data: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Spell text from aidedd.org
    Spell {
        /// English spell name, e.g. "Magic Missile"
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Random encounters or a townsfolk backstory
    Encounter {
        /// dungeon | city | grassland | forest | backstory
        source: EncounterSource,
    },
    /// SRD condition description
    Condition {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// One row of the d100 table
    Treasure {
        /// 1-based row number
        row: usize,
    },
    /// Sort combatants by initiative, highest first
    Initiative {
        /// NAME:INITIATIVE:AC
        #[arg(required = true)]
        entries: Vec<TurnEntry>,
    },
    /// Print the DM link list
    Links,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let fetcher = HttpFetcher::new();
    let stdout = io::stdout();
    execute(cli, &fetcher, &mut stdout.lock())
}

/// Run one parsed command against `fetcher`, writing results to `out`.
pub fn execute(cli: Cli, fetcher: &dyn Fetcher, out: &mut dyn Write) -> Result<()> {
    match cli.command {
        Command::Spell { name } => {
            let req = specs::spells::request(&name.join(" "))?;
            lookup(fetcher, req, out)
        }
        Command::Encounter { source } => lookup(fetcher, specs::encounters::request(source), out),
        Command::Condition { name } => {
            let req = specs::conditions::request(&name.join(" "))?;
            lookup(fetcher, req, out)
        }
        Command::Treasure { row } => {
            let table = ReferenceTable::load(&cli.data)?;
            let row = table.get(row)?;
            writeln!(out, "Selected Row Number: {}", row.index)?;
            for (col, val) in row.iter() {
                writeln!(out, "{col}: {val}")?;
            }
            Ok(())
        }
        Command::Initiative { entries } => {
            let mut order = TurnOrder::new();
            for e in entries {
                order.add(e);
            }
            order.sort_descending_by_initiative();
            writeln!(out, "{:<24} {:>10} {:>4}", "Name", "Initiative", "AC")?;
            for e in order.all() {
                writeln!(out, "{:<24} {:>10} {:>4}", e.name, e.initiative, e.armor_class)?;
            }
            Ok(())
        }
        Command::Links => {
            for (label, url) in DM_LINKS.iter().chain(std::iter::once(&SPELLS_FILTER)) {
                writeln!(out, "{label}: {url}")?;
            }
            Ok(())
        }
    }
}

fn lookup(fetcher: &dyn Fetcher, req: Request, out: &mut dyn Write) -> Result<()> {
    let url = req.url.clone();
    let mut view = ViewController::new();
    view.submit(fetcher, req);

    for n in view.notices() {
        match n {
            Notice::Error(msg) => return Err(eyre!("{msg}")).wrap_err_with(|| format!("GET {url}")),
            Notice::Warning(msg) | Notice::Info(msg) => eprintln!("{msg}"),
        }
    }
    for line in view.output() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
