use crate::cli::parser::RunArgs;
use crate::cli::Context;
use crate::core::command::{build_run_command, RunRequest};
use crate::utils::Result;
use tracing::debug;

pub fn execute(ctx: &Context, args: RunArgs) -> Result<i32> {
    let mut config = ctx.config.clone();
    if args.quotes.is_some() {
        config.argument_quotes_to_use = args.quotes;
    }

    let req = request_from_args(args);
    req.validate()?;

    let command = build_run_command(&req, &config, ctx.platform);
    debug!(
        terminal = command.terminal_name(),
        workspace = %ctx.workspace.display(),
        "sending command to terminal"
    );
    println!("{}", command.into_string());
    Ok(0)
}

fn request_from_args(args: RunArgs) -> RunRequest {
    let mut req = RunRequest::new(args.file)
        .with_update_snapshots(args.update_snapshots)
        .with_extra_args(args.extra)
        .with_env_string(args.env.unwrap_or_default());
    req.test_name = args.test_name;
    req
}
