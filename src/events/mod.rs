pub mod menu;
pub mod pointer;
pub mod scroll;

pub use menu::NavMenu;
pub use pointer::HeroLighting;
pub use scroll::NavScroll;
