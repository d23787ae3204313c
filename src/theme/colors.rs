//! Light palette used by the syntax theme.

// === SURFACES ===
pub const CODE_BG: &str = "#f7fafc";
pub const INLINE_CODE_BG: &str = "#e2e8f0";

// === TEXT ===
pub const TEXT: &str = "#2d3748";
pub const TEXT_SUBTLE: &str = "#4a5568";
pub const COMMENT: &str = "#718096";

// === ACCENTS ===
pub const ORANGE: &str = "#d97706";
pub const PURPLE: &str = "#7c3aed";
pub const GREEN: &str = "#059669";
pub const BLUE: &str = "#2563eb";
pub const RED: &str = "#e53e3e";

pub const MONO_FONT_STACK: &str =
    r#"ui-monospace, SFMono-Regular, Consolas, "Liberation Mono", Menlo, monospace"#;
