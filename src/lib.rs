pub mod config;
pub mod dynamodb;
pub mod logging;

#[cfg(test)]
mod testing;
