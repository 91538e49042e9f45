//! A reusable lexical scanning core: declarative rules, longest-match-with-priority scanning,
//! error recovery, a token-stream cursor, and a paired-delimiter nesting tracker.

pub mod dsl;
pub mod kind;
pub mod match_at;
pub mod nesting;
pub mod rule;
pub mod scanner;
pub mod token;
pub mod token_stream;

pub use kind::Kind;
pub use match_at::MatchAt;
pub use nesting::NestingTracker;
pub use rule::{ErrorHandler, HandlerId, Rule, RuleSet};
pub use scanner::{ScanOutcome, Scanner};
pub use token::Token;
pub use token_stream::{TokenStream, TokenStreamError};
