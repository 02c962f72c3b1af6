pub mod ast;
pub mod config;
mod file_reader;
mod generate;
pub mod loc;
pub mod naming;
pub mod operation;
mod query_formatter;
mod registry;
pub mod resolver;
pub mod schema;
pub mod source;

pub use file_reader::read_content;
pub use file_reader::ReadContentError;
pub use generate::generate;
pub use generate::Catalogue;
pub use query_formatter::CanonicalQueryFormatter;
pub use query_formatter::QueryFormatter;
pub use registry::ModelRegistry;
