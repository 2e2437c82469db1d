use crate::cli::parser::MatchesArgs;
use crate::cli::Context;
use crate::core::matcher::TestFileMatcher;
use crate::utils::Result;

/// Exit status 0 for a test file, 1 otherwise, so shells can branch on it.
pub fn execute(ctx: &Context, args: MatchesArgs) -> Result<i32> {
    let matcher = TestFileMatcher::from_config(&ctx.config)?;
    let is_test_file = matcher.is_match(&args.file);
    println!("{}", is_test_file);
    Ok(if is_test_file { 0 } else { 1 })
}
