use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose chrome logging while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Trunk copies `frontend/assets` to this path in the dist dir.
pub const ASSET_BASE: &str = "/assets";

pub fn asset(name: &str) -> String {
    format!("{}/{}", ASSET_BASE, name.trim_start_matches('/'))
}

// Chrome
pub const COMPACT_SCROLL_THRESHOLD: f64 = 20.0;
pub const VIEW_EXIT_MS: u32 = 300;
pub const MENU_EXIT_MS: u32 = 300;
pub const CARD_EXIT_MS: u32 = 300;
pub const LOGO_SWAP_MS: u32 = 3000;
/// Slide in/out time of each logo label, inside its LOGO_SWAP_MS slot.
pub const LOGO_SLIDE_MS: u32 = 600;

// Pointer trail
pub const TRAIL_CAPACITY: usize = 15;
pub const TRAIL_FADE_MS: u32 = 600;
pub const TRAIL_SWEEP_MS: u32 = 100;

// Contact
pub const CONTACT_EMAIL: &str = "umairapcoms@gmial.com";
pub const INSTAGRAM_HANDLE: &str = "@umair_vision";
pub const BUDGET_RANGES: [&str; 3] = ["$500 - $1,500", "$1,500 - $5,000", "$5,000+"];
