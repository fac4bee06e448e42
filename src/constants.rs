//! Constants used throughout the library
//!
//! This module centralizes UI text, defaults and bounds shared between the
//! components, the configuration layer and the showcase.

// Application
pub const APP_NAME: &str = "pickem-ui";
pub const CONFIG_FILE_NAME: &str = "pickem-ui.toml";
pub const LOG_FILE_NAME: &str = "pickem-ui.log";
pub const DEFAULT_HEADER_TITLE: &str = "Football Pickem";

// Date picker
pub const DEFAULT_PICKER_PLACEHOLDER: &str = "Select date range";
pub const DEFAULT_CALENDARS: u8 = 2;
pub const MIN_CALENDARS: u8 = 1;
pub const MAX_CALENDARS: u8 = 3;
/// Areas narrower than this many columns get the full screen picker
pub const DEFAULT_MOBILE_BREAKPOINT: u16 = 60;
pub const MIN_MOBILE_BREAKPOINT: u16 = 30;
pub const MAX_MOBILE_BREAKPOINT: u16 = 200;
/// Columns taken by one rendered month, borders excluded
pub const CALENDAR_WIDTH: u16 = 22;
/// Extra columns taken by the week number gutter
pub const WEEK_NUMBER_WIDTH: u16 = 4;

// Pick form
pub const DEFAULT_MAX_CONFIDENCE: u32 = 16;
pub const MAX_CONFIDENCE_LIMIT: u32 = 32;
pub const ERROR_SELECT_TEAM: &str = "Please select a team";
pub const ERROR_SELECT_CONFIDENCE: &str = "Please select confidence points";

// Input fields
pub const DEFAULT_TEXTAREA_ROWS: u16 = 3;
pub const INPUT_CURSOR: &str = "█";

// Standings
pub const STANDINGS_TITLE: &str = "League Standings";
pub const STANDINGS_EMPTY: &str = "No standings data available";
pub const STANDINGS_LOADING: &str = "Loading standings...";

// Modal widths as a percentage of the screen
pub const MODAL_WIDTH_SM: u16 = 40;
pub const MODAL_WIDTH_MD: u16 = 60;
pub const MODAL_WIDTH_LG: u16 = 80;
pub const MODAL_WIDTH_XL: u16 = 95;

// Showcase
pub const ACTION_LOG_CAPACITY: usize = 200;
pub const TICK_RATE_MS: u64 = 100;
