use anyhow::{Context, Result, bail};
use std::process::Command;

/// Opens committed destinations with the configured command
#[derive(Debug, Clone)]
pub struct Launcher {
    command: Vec<String>,
}

impl Launcher {
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }

    /// Build the process that opens `destination`, without spawning it
    pub fn command_for(&self, destination: &str) -> Result<Command> {
        let Some((program, args)) = self.command.split_first() else {
            bail!("open_command is empty, cannot open {}", destination);
        };

        let mut command = Command::new(program);
        command.args(args).arg(destination);
        Ok(command)
    }

    pub fn launch(&self, destination: &str) -> Result<()> {
        let mut command = self.command_for(destination)?;
        log::debug!("Opening {} with {:?}", destination, command);

        command
            .spawn()
            .with_context(|| format!("Failed to run {:?} for {}", self.command, destination))?;
        Ok(())
    }
}
