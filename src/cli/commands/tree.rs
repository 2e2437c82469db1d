use crate::cli::parser::TreeArgs;
use crate::core::discovery::JsonDiscovery;
use crate::core::explorer::items_for_file;
use crate::utils::Result;
use tracing::debug;

pub fn execute(args: TreeArgs) -> Result<i32> {
    if !args.tree.exists() {
        return Err(args.tree.into());
    }

    let items = items_for_file(&JsonDiscovery, &args.tree);
    debug!(count = items.len(), "built explorer items");
    println!("{}", serde_json::to_string_pretty(&items)?);
    Ok(0)
}
