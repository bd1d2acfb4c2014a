//! The showroom assistant - canned Q&A with heuristic matching
//!
//! A static answer table plus a pure matcher. No model, no network: the
//! assistant either returns a prepared answer with a confidence score or
//! says it has nothing, and callers must handle both.
//!
//! # Example
//!
//! ```
//! use paddock::assistant::{builtin, match_query};
//!
//! let table = builtin();
//! match match_query("what is the best suv?", &table) {
//!     Some(m) => println!("{} (confidence {:.2})", m.answer, m.confidence),
//!     None => println!("No good answer for that one."),
//! }
//! ```

pub mod answers;
pub mod matcher;

pub use answers::{builtin, load_from_file, CannedAnswer, LinkKind, RelatedLink};
pub use matcher::{match_query, AnswerMatch, CONFIDENCE_THRESHOLD, TAG_BONUS};
