pub mod continuation;
pub mod field_kind;
pub mod matcher;
pub mod rule;
pub mod section;

pub use continuation::Continuation;
pub use field_kind::FieldKind;
pub use matcher::NameMatcher;
pub use rule::RewriteRule;
pub use section::{RecordSection, SectionScope};
