pub mod clock;
pub mod id;
pub mod note;
pub mod relative;
pub mod search;
pub mod validate;

pub use clock::{Clock, SystemClock};
pub use note::{NewNote, Note, NotePatch, sort_recent_first};
