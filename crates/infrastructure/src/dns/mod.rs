pub mod rewrite;

pub use rewrite::{
    EmbeddedTarget, RecordRewriter, ResponseReverter, ResponseWriter, ReverterState,
    RewriteContext, RuleTable,
};
