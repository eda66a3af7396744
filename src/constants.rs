// DOM contract between the page markup and the WASM front-end.

// Canvases
pub const AMBIENT_CANVAS_ID: &str = "ambient-canvas";
pub const HERO_CANVAS_ID: &str = "hero-canvas";

// Scroll reveal
pub const REVEAL_SELECTOR: &str = ".reveal";
pub const REVEAL_ACTIVE_CLASS: &str = "active";
pub const REVEAL_ID_ATTR: &str = "data-reveal-id";

// Navigation and progress
pub const NAVBAR_ID: &str = "main-navbar";
pub const NAV_SCROLLED_CLASS: &str = "scrolled";
pub const NAV_ACTIVE_CLASS: &str = "active";
pub const SCROLL_PROGRESS_ID: &str = "scroll-progress";

// Theme engine
pub const LIGHT_MODE_CLASS: &str = "light-mode";
pub const THEME_MODE_BUTTON_ID: &str = "theme-mode-btn";
pub const THEME_SETTINGS_BUTTON_ID: &str = "theme-settings-btn";
pub const THEME_PANEL_ID: &str = "theme-panel";
pub const THEME_PANEL_OPEN_CLASS: &str = "open";
pub const THEME_ID_ATTR: &str = "data-theme-id";
pub const THEME_SELECTED_CLASS: &str = "selected";

// Hero
pub const TYPEWRITER_ID: &str = "typewriter";
pub const MAGNETIC_SELECTOR: &str = ".magnetic";
pub const CURSOR_DOT_ID: &str = "cursor-dot";
pub const CURSOR_TRAILER_ID: &str = "cursor-trailer";
pub const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";

// Projects
pub const PROJECT_FILTER_ATTR: &str = "data-project-filter";
pub const PROJECT_CATEGORY_ATTR: &str = "data-project-category";
pub const FILTER_SELECTED_CLASS: &str = "selected";

// Contact flow
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_LABEL_ID: &str = "contact-label";
pub const CONTACT_PROGRESS_ID: &str = "contact-progress";
pub const CONTACT_STEP_ID: &str = "contact-step";
pub const CONTACT_INPUT_PREFIX: &str = "contact-"; // + step key, e.g. contact-email

// Chat assistant
pub const CHAT_FORM_ID: &str = "chat-form";
pub const CHAT_INPUT_ID: &str = "chat-input";
pub const CHAT_LOG_ID: &str = "chat-log";
pub const CHAT_PENDING_CLASS: &str = "pending";

// Image viewer and fallbacks
pub const VIEWER_ID: &str = "image-viewer";
pub const VIEWER_CLOSE_ID: &str = "viewer-close";
pub const VIEWER_IMAGE_ID: &str = "viewer-image";
pub const VIEWER_TITLE_ID: &str = "viewer-title";
pub const VIEWER_SUBTITLE_ID: &str = "viewer-subtitle";
pub const VIEWER_BADGE_ID: &str = "viewer-kind";
pub const VIEWER_TAGS_ID: &str = "viewer-tags";
pub const VIEWER_DESCRIPTION_ID: &str = "viewer-description";
pub const HIDDEN_CLASS: &str = "hidden";
pub const VIEWER_KIND_ATTR: &str = "data-viewer-kind";
pub const VIEWER_INDEX_ATTR: &str = "data-viewer-index";
pub const FALLBACK_TITLE_ATTR: &str = "data-fallback-title";
pub const FALLBACK_FAILURES_ATTR: &str = "data-failures";
pub const IMAGE_FAILED_CLASS: &str = "img-failed";

// Preloader
pub const PRELOADER_ID: &str = "preloader";
pub const PRELOADER_BAR_ID: &str = "preloader-bar";
pub const PRELOADER_PERCENT_ID: &str = "preloader-percent";
pub const PRELOADER_STATUS_ID: &str = "preloader-status";
pub const PRELOADER_BADGE_ID: &str = "preloader-badge";

// Code terminal
pub const TERMINAL_ID: &str = "code-terminal";
pub const TERMINAL_LINE_CLASS: &str = "code-line";
pub const TERMINAL_GUTTER_CLASS: &str = "code-gutter";

// Copy email
pub const COPY_EMAIL_BUTTON_ID: &str = "copy-email-btn";
pub const COPY_EMAIL_LABEL_ID: &str = "copy-email-label";
pub const COPIED_CLASS: &str = "copied";
pub const CONFETTI_CANVAS_ID: &str = "confetti-canvas";
