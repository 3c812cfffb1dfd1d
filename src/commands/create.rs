/// `create` command: append a new id/name record.
use super::{CommandError, CommandOutput};
use crate::cli::args::CreateArgs;
use crate::store::KeyValueRepository;
use crate::types::EntryOutput;

/// Run `kv-cli create`.
///
/// # Errors
///
/// Returns `CommandError::Create` if the store cannot be appended to.
pub fn run(
    args: &CreateArgs,
    repo: &dyn KeyValueRepository,
) -> Result<CommandOutput, CommandError> {
    repo.create(&args.id, &args.name).map_err(CommandError::Create)?;

    tracing::info!(id = %args.id, "created entry");
    Ok(CommandOutput::Created(EntryOutput::new(&args.id, &args.name)))
}
