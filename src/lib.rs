pub mod config;
pub mod dom;
pub mod filter;
pub mod model;
pub mod notifier;
pub mod parser;
pub mod storage;
pub mod utils;
pub mod validator;
