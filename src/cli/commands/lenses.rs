use crate::cli::parser::LensesArgs;
use crate::cli::Context;
use crate::core::discovery::{load_snapshot_metadata, JsonDiscovery};
use crate::core::lens::provide_lenses;
use crate::utils::Result;

pub fn execute(ctx: &Context, args: LensesArgs) -> Result<i32> {
    if !args.tree.exists() {
        return Err(args.tree.into());
    }

    let snapshots = match &args.snapshots {
        Some(path) => load_snapshot_metadata(path)?,
        None => Vec::new(),
    };

    let lenses = provide_lenses(
        &JsonDiscovery,
        &args.tree,
        &snapshots,
        &ctx.config,
        args.dirty,
    );
    println!("{}", serde_json::to_string_pretty(&lenses)?);
    Ok(0)
}
