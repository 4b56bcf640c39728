//! Save decoding.
//!
//! [`decode`] is the entry point: it hashes the upload, picks the newest
//! finished checkpoint and derives every gameplay fact from its flags.
//!
//! ```ignore
//! use choku_wrapped::save::decode;
//!
//! let record = decode(&std::fs::read("chokuretsu.sav")?);
//! if record.is_valid {
//!     println!("{} topics", record.num_topics_obtained);
//! }
//! ```

mod decode;
mod error;
pub mod fixture;
pub mod format;
mod record;
pub mod rules;

pub use decode::{content_hash, decode, try_decode};
pub use error::SaveError;
pub use format::{FlagSource, SaveFile, SaveSlot, SaveTime};
pub use record::{FriendshipLevels, SaveRecord};
