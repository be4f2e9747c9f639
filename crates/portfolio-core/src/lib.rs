pub mod config;
pub mod constants;
pub mod content;
pub mod markup;
pub mod menu;
pub mod motion;
pub mod page;
pub mod pointer;
pub mod reveal;
pub mod scroll;

pub use config::*;
pub use menu::*;
pub use motion::*;
pub use pointer::*;
pub use reveal::*;
pub use scroll::*;
