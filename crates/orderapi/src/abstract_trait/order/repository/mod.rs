mod command;
mod query;

pub use self::command::{
    CreateOrderOutcome, DynOrderCommandRepository, OrderCommandRepositoryTrait,
};
pub use self::query::{DynOrderQueryRepository, OrderQueryRepositoryTrait};
