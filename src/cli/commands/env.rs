use crate::cli::parser::EnvArgs;
use crate::core::env::parse_environment_string;
use crate::utils::Result;

pub fn execute(args: EnvArgs) -> Result<i32> {
    let env = parse_environment_string(&args.value);
    println!("{}", serde_json::to_string_pretty(&env)?);
    Ok(0)
}
