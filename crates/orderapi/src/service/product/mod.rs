mod command;
mod query;

pub use self::command::ProductCommandService;
pub use self::query::ProductQueryService;
