use crate::{Cli, render::Renderer};
use anyhow::Result;
use datepick_core::Config;

/// What a mode did with the command line.
pub enum CliModeResult {
    /// The mode handled the request; stop here.
    Finish,
    /// The flags were not meant for this mode; try the next one.
    NothingToDo,
}

pub type CliMode = fn(&Cli, &Renderer, &Config) -> Result<CliModeResult>;
