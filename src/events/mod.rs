pub mod pointer;
pub mod scroll;

pub use pointer::{mount_cursor_follower, wire_magnetic, CursorFollower};
pub use scroll::{wire_scroll, ScrollMount};
