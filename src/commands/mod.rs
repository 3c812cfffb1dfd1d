/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod create;
pub mod errors;
pub mod find;

pub use errors::CommandError;

use crate::cli::args::Command;
use crate::store::KeyValueRepository;
use crate::types::EntryOutput;

/// Successful result of a command, rendered by the output layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// A record was appended.
    Created(EntryOutput),
    /// A record was resolved.
    Found(EntryOutput),
}

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns `CommandError` on any command failure.
pub fn dispatch(
    command: &Command,
    repo: &dyn KeyValueRepository,
) -> Result<CommandOutput, CommandError> {
    match command {
        Command::Create(args) => create::run(args, repo),
        Command::Find(args) => find::run(args, repo),
    }
}
