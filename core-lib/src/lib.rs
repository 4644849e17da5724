pub mod pipeline;
pub mod table;
pub mod translate;

// Re-export common types
pub use pipeline::{write_handlers, GenerationSummary};
pub use table::{InstructionSet, OpcodeEntry, OperandRef, TableError};
pub use translate::{translate, Handler, Service, Stmt};
