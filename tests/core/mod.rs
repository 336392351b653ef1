// tests/core/mod.rs

#[cfg(test)]
mod codec;
#[cfg(test)]
mod config;
