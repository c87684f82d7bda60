pub mod context;
pub mod embedded_target;
pub mod record_rewriter;
pub mod reverter;
pub mod rule_table;
pub mod writer;

pub use context::RewriteContext;
pub use embedded_target::EmbeddedTarget;
pub use record_rewriter::RecordRewriter;
pub use reverter::{ResponseReverter, ReverterState};
pub use rule_table::RuleTable;
pub use writer::ResponseWriter;
