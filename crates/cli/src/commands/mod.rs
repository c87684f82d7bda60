pub mod check;
pub mod preview;

pub use check::run_check;
pub use preview::{run_preview, PreviewArgs};
