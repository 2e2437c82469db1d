pub mod command;
pub mod discovery;
pub mod env;
pub mod explorer;
pub mod lens;
pub mod matcher;
pub mod quote;
