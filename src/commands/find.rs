/// `find` command: print the name stored for an id.
use super::{CommandError, CommandOutput};
use crate::cli::args::FindArgs;
use crate::store::{KeyValueRepository, Lookup};
use crate::types::EntryOutput;

/// Run `kv-cli find`.
///
/// Without `--strict` an unreadable store is reported the same way as a
/// missing id. With it, read failures become `CommandError::Find`. A record
/// with an empty name counts as missing.
///
/// # Errors
///
/// Returns `CommandError::NotFound` when no record matches, and
/// `CommandError::Find` when the repository fails.
pub fn run(
    args: &FindArgs,
    repo: &dyn KeyValueRepository,
) -> Result<CommandOutput, CommandError> {
    let name = if args.strict {
        match repo.lookup(&args.id) {
            Lookup::Found(name) => Some(name),
            Lookup::NotFound => None,
            Lookup::Unreadable(err) => return Err(CommandError::Find(err)),
        }
    } else {
        repo.find(&args.id).map_err(CommandError::Find)?
    };

    let name = name
        .filter(|name| !name.is_empty())
        .ok_or_else(|| CommandError::NotFound {
            id: args.id.clone(),
        })?;
    Ok(CommandOutput::Found(EntryOutput::new(&args.id, name)))
}
