pub mod completion;
pub mod config;
pub mod debug;
pub mod env;
pub mod lenses;
pub mod matches;
pub mod run;
pub mod tree;
