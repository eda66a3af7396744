pub mod chat;
pub mod confetti;
pub mod constants;
pub mod contact;
pub mod content;
pub mod motion;
pub mod nav;
pub mod particles;
pub mod preloader;
pub mod reveal;
pub mod terminal;
pub mod theme;
pub mod typewriter;

pub use constants::*;
pub use particles::*;
pub use reveal::*;
pub use theme::*;
