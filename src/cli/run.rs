use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, init::init, render::render, translate::translate},
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Init) => init(),
        Some(Command::Translate(cmd)) => translate(cmd),
        Some(Command::Render(cmd)) => render(cmd),
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}
