pub mod diagnostic;
pub mod types;

pub use diagnostic::{Anchor, AnchorKind, Diagnostic, Fix, MessageKind};
pub use types::{Comment, CommentKind, Position, SourceFile, Span, Statement};
