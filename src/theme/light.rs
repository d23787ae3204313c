// Light syntax theme: slate text on a near-white background, brand accents for tokens.

use super::colors::*;
use super::{index_rules, Declaration, StyleRule, SyntaxTheme};
use std::collections::HashMap;

const BLOCK_BASE: &[Declaration] = &[
    ("color", TEXT),
    ("background", CODE_BG),
    ("fontFamily", MONO_FONT_STACK),
    ("textAlign", "left"),
    ("whiteSpace", "pre"),
    ("wordSpacing", "normal"),
    ("wordBreak", "normal"),
    ("wordWrap", "normal"),
    ("lineHeight", "1.5"),
    ("MozTabSize", "4"),
    ("OTabSize", "4"),
    ("tabSize", "4"),
    ("WebkitHyphens", "none"),
    ("MozHyphens", "none"),
    ("msHyphens", "none"),
    ("hyphens", "none"),
];

const CODE_BASE: &[Declaration] = &[
    ("color", TEXT),
    ("background", "none"),
    ("fontFamily", MONO_FONT_STACK),
    ("textAlign", "left"),
    ("whiteSpace", "pre"),
    ("wordSpacing", "normal"),
    ("wordBreak", "normal"),
    ("wordWrap", "normal"),
    ("lineHeight", "1.5"),
    ("MozTabSize", "4"),
    ("OTabSize", "4"),
    ("tabSize", "4"),
    ("WebkitHyphens", "none"),
    ("MozHyphens", "none"),
    ("msHyphens", "none"),
    ("hyphens", "none"),
];

macro_rules! rule {
    ($selector:expr, [$(($k:expr, $v:expr)),* $(,)?]) => {
        StyleRule { selector: $selector, declarations: &[$(($k, $v)),*] }
    };
    ($selector:expr, $decls:expr) => {
        StyleRule { selector: $selector, declarations: $decls }
    };
}

static RULES: &[StyleRule] = &[
    rule!(r#"pre[class*="language-"]"#, BLOCK_BASE),
    rule!(r#"code[class*="language-"]"#, CODE_BASE),
    rule!(
        r#":not(pre) > code[class*="language-"]"#,
        [
            ("background", INLINE_CODE_BG),
            ("padding", ".1em .3em"),
            ("borderRadius", ".3em"),
            ("whiteSpace", "normal"),
        ]
    ),
    rule!("comment", [("color", COMMENT)]),
    rule!("prolog", [("color", COMMENT)]),
    rule!("doctype", [("color", COMMENT)]),
    rule!("cdata", [("color", COMMENT)]),
    rule!("punctuation", [("color", TEXT_SUBTLE)]),
    rule!(".namespace", [("opacity", "0.7")]),
    rule!("property", [("color", ORANGE)]),
    rule!("tag", [("color", ORANGE)]),
    rule!("boolean", [("color", ORANGE)]),
    rule!("number", [("color", ORANGE)]),
    rule!("constant", [("color", ORANGE)]),
    rule!("symbol", [("color", ORANGE)]),
    rule!("deleted", [("color", RED)]),
    rule!("selector", [("color", PURPLE)]),
    rule!("attr-name", [("color", PURPLE)]),
    rule!("string", [("color", GREEN)]),
    rule!("char", [("color", GREEN)]),
    rule!("builtin", [("color", PURPLE)]),
    rule!("operator", [("color", TEXT_SUBTLE)]),
    rule!("entity", [("color", TEXT_SUBTLE), ("cursor", "help")]),
    rule!("url", [("color", PURPLE)]),
    rule!(".language-css .token.string", [("color", GREEN)]),
    rule!(".style .token.string", [("color", GREEN)]),
    rule!("inserted", [("color", GREEN)]),
    rule!("atrule", [("color", PURPLE)]),
    rule!("attr-value", [("color", GREEN)]),
    rule!("keyword", [("color", PURPLE)]),
    rule!("function", [("color", BLUE)]),
    rule!("class-name", [("color", PURPLE)]),
    rule!("regex", [("color", ORANGE)]),
    rule!("important", [("color", ORANGE), ("fontWeight", "bold")]),
    rule!("variable", [("color", ORANGE)]),
    rule!("bold", [("fontWeight", "bold")]),
    rule!("italic", [("fontStyle", "italic")]),
];

fn build_index() -> HashMap<&'static str, usize> {
    index_rules(RULES)
}

pub static LIGHT_SYNTAX_THEME: SyntaxTheme = SyntaxTheme::new("light", RULES, build_index);
