//! Setting keys read by the engine.

pub const SINGLE_DISABLED: &str = "POPUP_SINGLE_DISABLED";
pub const GROUP_DISABLED: &str = "POPUP_GROUP_DISABLED";
pub const KEYWORD_DIFFERENT: &str = "POPUP_KEYWORD_DIFFERENT";
pub const GROUP_DIFFERENT: &str = "POPUP_GROUP_DIFFERENT";

pub const BACKGROUND_COLOR: &str = "POPUP_BACKGROUND_COLOR";
pub const HEADER_COLOR: &str = "POPUP_HEADER_COLOR";
pub const TEXT_COLOR: &str = "POPUP_TEXT_COLOR";
pub const DURATION: &str = "POPUP_DURATION";

pub const GROUP_BACKGROUND_COLOR: &str = "POPUP_GROUP_BACKGROUND_COLOR";
pub const GROUP_HEADER_COLOR: &str = "POPUP_GROUP_HEADER_COLOR";
pub const GROUP_TEXT_COLOR: &str = "POPUP_GROUP_TEXT_COLOR";
pub const GROUP_DURATION: &str = "POPUP_GROUP_DURATION";

pub const KEYWORD_BACKGROUND_COLOR: &str = "POPUP_KEYWORD_BACKGROUND_COLOR";
pub const KEYWORD_HEADER_COLOR: &str = "POPUP_KEYWORD_HEADER_COLOR";
pub const KEYWORD_TEXT_COLOR: &str = "POPUP_KEYWORD_TEXT_COLOR";
pub const KEYWORD_DURATION: &str = "POPUP_KEYWORD_DURATION";

/// Comma-separated, case-sensitive keyword list.
pub const KEYWORDS: &str = "POPUP_KEYWORDS";
