//! Terminal presentation: styled text, markdown replies, and a pending-call spinner.

pub mod markdown;
pub mod spinner;
pub mod styled;

pub use markdown::{render_markdown, reply_skin};
pub use spinner::Spinner;
pub use styled::{Styles, paint};
