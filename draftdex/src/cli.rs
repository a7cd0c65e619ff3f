//! Command line arguments and the interactive team prompts

use clap::Parser;
use draftdex_common::Side;
use owo_colors::OwoColorize;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

/// Compare the level-100 stats of two draft teams, fastest first.
#[derive(Debug, Parser)]
#[command(name = "draftdex", version, about)]
pub struct Args {
    /// Your team, comma separated (asked for interactively when omitted)
    #[arg(long)]
    pub mine: Option<String>,

    /// Your opponent's team, comma separated (asked for interactively when omitted)
    #[arg(long)]
    pub opponent: Option<String>,

    /// Path to the TOML config file
    #[arg(long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Disable ANSI colours
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    /// Colour only when asked for, allowed by config, and writing to a terminal
    pub fn use_color(&self, config_color: bool) -> bool {
        !self.no_color && config_color && io::stdout().is_terminal()
    }
}

/// Prompt text for one side, e.g.
/// "Write the names of the Pokémon on your team, separated by comma: "
pub fn prompt_text(side: Side, color: bool) -> String {
    let label = side.team_label();
    let label = match (color, side) {
        (false, _) => label.to_string(),
        (true, Side::Mine) => label.red().to_string(),
        (true, Side::Opponent) => label.blue().to_string(),
    };
    format!("Write the names of the Pokémon on {}, separated by comma: ", label)
}

/// Read one team from `input`, printing the prompt to `output` first
pub fn read_team<R: BufRead, W: Write>(
    side: Side,
    color: bool,
    input: &mut R,
    output: &mut W,
) -> io::Result<String> {
    write!(output, "{}", prompt_text(side, color))?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Use the argument when given, otherwise prompt on stdin
pub fn team_or_prompt(arg: Option<&str>, side: Side, color: bool) -> io::Result<String> {
    match arg {
        Some(team) => Ok(team.to_string()),
        None => read_team(side, color, &mut io::stdin().lock(), &mut io::stdout()),
    }
}
