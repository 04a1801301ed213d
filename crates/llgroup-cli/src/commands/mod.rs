pub mod check;
pub mod dump;
pub mod layout_loader;
pub mod resolve;

#[cfg(test)]
mod commands_tests;
