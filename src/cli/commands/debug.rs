use crate::cli::parser::DebugArgs;
use crate::cli::Context;
use crate::core::command::{build_debug_launch, RunRequest};
use crate::utils::Result;
use tracing::debug;

pub fn execute(ctx: &Context, args: DebugArgs) -> Result<i32> {
    let mut req = RunRequest::new(args.file)
        .with_extra_args(args.extra)
        .with_env_string(args.env.unwrap_or_default());
    req.test_name = args.test_name;
    req.validate()?;

    let launch = build_debug_launch(&req, &ctx.config, ctx.platform);
    debug!(workspace = %ctx.workspace.display(), "launching debugger");
    println!(
        "{}",
        serde_json::to_string_pretty(&launch.to_launch_configuration())?
    );
    Ok(0)
}
