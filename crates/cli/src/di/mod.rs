mod rewrite;

pub use rewrite::RewriteServices;
