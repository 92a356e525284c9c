//! CLI command handlers, one file per command.

mod canonicalize;
mod check;
mod delete;
mod list;
mod mark;
mod save;
mod tags;

pub use canonicalize::run_canonicalize;
pub use check::run_check;
pub use delete::run_delete;
pub use list::run_list;
pub use mark::run_mark;
pub use save::run_save;
pub use tags::run_tags;
