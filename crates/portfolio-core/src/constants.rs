// Shared layout, interaction and DOM constants used by the web frontend.

// Scroll
pub const SCROLL_THRESHOLD_PX: f64 = 20.0; // nav turns translucent strictly above this offset

// Pointer lighting
pub const GLOW_FALLOFF_PX: f32 = 200.0; // distance at which a hexagon stops glowing
pub const GLOW_DIAMETER_PX: f32 = 256.0; // decorative disc that follows the pointer
pub const HEX_SIZE_PX: f32 = 45.0;
pub const HEX_GLOW_ALPHA: f32 = 0.4; // alpha of a fully lit hexagon
pub const HEX_GLOW_RGB: [u8; 3] = [251, 191, 36];

// Reveal thresholds (fraction of the block that must be visible)
pub const CARD_REVEAL_THRESHOLD: f64 = 0.2;
pub const TIMELINE_REVEAL_THRESHOLD: f64 = 0.3;
pub const SECTION_REVEAL_THRESHOLD: f64 = 0.0; // any intersection
pub const REVEAL_RATIO_TOLERANCE: f64 = 1e-6; // float noise only

// Navigation
pub const NAV_BLUR_PX: u32 = 10;
pub const BRAND: &str = "SN";

// Element ids the web frontend wires listeners to
pub const ROOT_ID: &str = "app";
pub const NAV_ID: &str = "site-nav";
pub const MENU_TOGGLE_ID: &str = "menu-toggle";
pub const MENU_ICON_ID: &str = "menu-icon";
pub const MOBILE_MENU_ID: &str = "mobile-menu";
pub const HERO_ID: &str = "hero";
pub const HEX_GRID_ID: &str = "hex-grid";
pub const HERO_GLOW_ID: &str = "hero-glow";

// Data attributes carried by the markup tree
pub const DATA_REVEAL: &str = "data-reveal"; // threshold, e.g. "0.2"
pub const DATA_REVEAL_STYLE: &str = "data-reveal-style"; // inline style once revealed
pub const DATA_REVEAL_CLASS: &str = "data-reveal-class"; // class added once revealed
pub const DATA_REVEAL_FOLLOW: &str = "data-reveal-follow"; // revealed with the closest block
pub const DATA_NAV_LINK: &str = "data-nav-link";

// Menu icon paths (24x24 viewbox)
pub const MENU_ICON_OPEN_PATH: &str = "M4 6h16M4 12h16M4 18h16";
pub const MENU_ICON_CLOSE_PATH: &str = "M6 18L18 6M6 6l12 12";
