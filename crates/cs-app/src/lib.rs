//! ClipStack application layer
//!
//! Use cases orchestrating the clipboard source, the clip store and the
//! order engine. Everything here runs synchronously on the caller's thread.

pub mod deps;
pub mod order_engine;
pub mod usecase_factory;
pub mod usecases;

#[cfg(test)]
pub(crate) mod testing;

pub use deps::AppDeps;
pub use order_engine::OrderEngine;
pub use usecase_factory::UseCaseFactory;
