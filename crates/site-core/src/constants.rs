// Shared timing and layout tuning used by the web front-end and its tests.

// Carousel geometry
pub const SEAM_BUFFER_PX: f64 = 10.0; // soft boundary kept clear of the exact seam
pub const AUTO_SCROLL_PX_PER_FRAME: f64 = 0.5;
pub const INITIAL_SCROLL_OFFSET_PX: f64 = 50.0; // leaves room to drag left on first paint
pub const CARD_GAP_PX: f64 = 25.0;
pub const DEFAULT_CARD_STRIDE_PX: f64 = 375.0; // 350px card + gap, used before layout

// Carousel input scaling
pub const MOUSE_DRAG_MULTIPLIER: f64 = 1.5;
pub const TOUCH_DRAG_MULTIPLIER: f64 = 1.0;
pub const WHEEL_MULTIPLIER: f64 = 0.5;

// Carousel settle delays (ms)
pub const CAROUSEL_START_DELAY_MS: u32 = 100;
pub const DRAG_SETTLE_MS: u32 = 100;
pub const WHEEL_SETTLE_MS: u32 = 100;
pub const KEY_SETTLE_MS: u32 = 500;
pub const SCROLL_RECHECK_MS: u32 = 50;
pub const SCROLL_ECHO_TOLERANCE_PX: f64 = 1.0;

// Multi-step form
pub const FORM_STEP_COUNT: u8 = 5;
pub const OPTION_FEEDBACK_MS: u32 = 1000;
pub const STEP_ACTIVATE_MS: u32 = 150;
pub const FORM_FOCUS_DELAY_MS: u32 = 200;

// Optimistic submit timeline
pub const SUBMIT_PROCESSING_MS: u32 = 2000;
pub const SUBMIT_RESET_MS: u32 = 1000;
pub const RESUBMIT_COOLDOWN_MS: u64 = 3000;

// Popups
pub const SUCCESS_POPUP_MS: u32 = 8500;
pub const POPUP_EXIT_MS: u32 = 300;
pub const NOTIFICATION_MS: u32 = 6000;
pub const NOTIFICATION_EXIT_MS: u32 = 400;
pub const FORM_ERROR_MS: u32 = 5000;

// Page chrome
pub const HERO_SLIDE_MS: u32 = 5000;
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 100.0;
pub const NAV_SCROLL_THROTTLE_MS: u32 = 100;
pub const SECTION_SCROLL_OFFSET_PX: f64 = -80.0;
pub const SECTION_FOCUS_DELAY_MS: u32 = 600;
pub const LEAD_CAPTURE_LEAD_PX: f64 = 200.0; // fire this far above #projects
pub const LEAD_CAPTURE_DELAY_MS: u32 = 500;
pub const LEAD_CAPTURE_FOCUS_MS: u32 = 150;
pub const PACKAGES_FADE_IN_MS: u32 = 50;
pub const PACKAGES_SCROLL_MS: u32 = 400;
pub const PACKAGES_HIDE_MS: u32 = 300;
pub const DROPDOWN_OPEN_MAX_HEIGHT_PX: u32 = 400;

// Manifest defaults
pub const DEFAULT_IMAGE_WIDTH: u32 = 1920;
pub const DEFAULT_IMAGE_HEIGHT: u32 = 1080;
pub const PLACEHOLDER_IMAGE: &str = "placeholder.jpg";
pub const LCP_PRELOAD_MAX_WIDTH: u32 = 768;
