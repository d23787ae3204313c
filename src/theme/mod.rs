//! Syntax highlighting themes.
//!
//! A theme is a static table of selector rules in the shape prism-style
//! highlighters consume: keys are token class names (`comment`, `keyword`)
//! or full CSS selectors (`pre[class*="language-"]`), values are style
//! declarations with camelCase property names.

pub mod colors;
mod light;

pub use light::LIGHT_SYNTAX_THEME;

use once_cell::sync::Lazy;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt::Write;

/// One `(property, value)` pair, property in camelCase.
pub type Declaration = (&'static str, &'static str);

#[derive(Debug, Clone, Copy)]
pub struct StyleRule {
    pub selector: &'static str,
    pub declarations: &'static [Declaration],
}

#[derive(Debug)]
pub struct SyntaxTheme {
    pub name: &'static str,
    rules: &'static [StyleRule],
    index: Lazy<HashMap<&'static str, usize>, fn() -> HashMap<&'static str, usize>>,
}

impl SyntaxTheme {
    pub const fn new(
        name: &'static str,
        rules: &'static [StyleRule],
        build_index: fn() -> HashMap<&'static str, usize>,
    ) -> Self {
        Self { name, rules, index: Lazy::new(build_index) }
    }

    pub fn rules(&self) -> &'static [StyleRule] {
        self.rules
    }

    /// Selectors in declaration order.
    pub fn selectors(&self) -> impl Iterator<Item = &'static str> {
        self.rules.iter().map(|r| r.selector)
    }

    pub fn style(&self, selector: &str) -> Option<&'static [Declaration]> {
        self.index.get(selector).map(|&i| self.rules[i].declarations)
    }

    /// Value of one property for a selector.
    pub fn property(&self, selector: &str, property: &str) -> Option<&'static str> {
        self.style(selector)?
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| *value)
    }

    pub fn color(&self, token_class: &str) -> Option<&'static str> {
        self.property(token_class, "color")
    }

    /// Object keyed by selector, the form a JS highlighter component takes as its `style` prop.
    pub fn to_json(&self) -> Value {
        let mut theme = Map::new();
        for rule in self.rules {
            let style: Map<String, Value> = rule
                .declarations
                .iter()
                .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
                .collect();
            theme.insert(rule.selector.to_string(), Value::Object(style));
        }
        Value::Object(theme)
    }

    /// Plain stylesheet for renderers that take CSS instead of a style object.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        let _ = writeln!(css, "/* {} syntax theme */", self.name);
        for rule in self.rules {
            let _ = writeln!(css, "{} {{", css_selector(rule.selector));
            for (property, value) in rule.declarations {
                let _ = writeln!(css, "  {}: {};", kebab_case(property), value);
            }
            css.push_str("}\n");
        }
        css
    }
}

/// Index builder shared by the static themes; maps selector to rule position.
fn index_rules(rules: &'static [StyleRule]) -> HashMap<&'static str, usize> {
    rules.iter().enumerate().map(|(i, r)| (r.selector, i)).collect()
}

// Bare token class names are styled through prism's `.token.<class>` markup
fn css_selector(selector: &str) -> String {
    let is_token_class = !selector.is_empty()
        && selector.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
    if is_token_class {
        format!(".token.{}", selector)
    } else {
        selector.to_string()
    }
}

/// `fontFamily` -> `font-family`, `MozTabSize` -> `-moz-tab-size`, `msHyphens` -> `-ms-hyphens`.
pub fn kebab_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 4);
    if property.starts_with("ms") && property[2..].starts_with(|c: char| c.is_ascii_uppercase()) {
        out.push('-');
    }
    for c in property.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
