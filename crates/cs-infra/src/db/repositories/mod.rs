mod clip_store;

pub use clip_store::*;

#[cfg(test)]
mod clip_store_test;
