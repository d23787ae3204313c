use recent_projects_lib::theme::colors;
use recent_projects_lib::LIGHT_SYNTAX_THEME;

#[test]
fn test_json_export_matches_highlighter_shape() {
    let json = LIGHT_SYNTAX_THEME.to_json();
    let theme = json.as_object().expect("theme is an object");

    assert_eq!(theme.len(), LIGHT_SYNTAX_THEME.rules().len());
    assert_eq!(theme["keyword"]["color"], "#7c3aed");
    assert_eq!(theme["important"]["fontWeight"], "bold");
    assert_eq!(theme[".namespace"]["opacity"], "0.7");

    let pre = &theme[r#"pre[class*="language-"]"#];
    assert_eq!(pre["background"], colors::CODE_BG);
    assert_eq!(pre["MozTabSize"], "4");
    assert_eq!(pre["fontFamily"], colors::MONO_FONT_STACK);
}

#[test]
fn test_css_export() {
    let css = LIGHT_SYNTAX_THEME.to_css();

    assert_eq!(LIGHT_SYNTAX_THEME.name, "light");
    assert!(css.starts_with("/* light syntax theme */\n"));

    assert!(css.contains(".token.comment {\n  color: #718096;\n}\n"));
    assert!(css.contains(".token.class-name {\n  color: #7c3aed;\n}\n"));
    assert!(css.contains(".language-css .token.string {\n  color: #059669;\n}\n"));
    assert!(css.contains("  -webkit-hyphens: none;\n"));
    assert!(css.contains("  -ms-hyphens: none;\n"));
    assert!(css.contains(":not(pre) > code[class*=\"language-\"] {\n  background: #e2e8f0;\n"));
    assert_eq!(css.matches('{').count(), LIGHT_SYNTAX_THEME.rules().len());
}

#[test]
fn test_selectors_keep_declaration_order() {
    let selectors: Vec<_> = LIGHT_SYNTAX_THEME.selectors().collect();
    assert_eq!(selectors.first(), Some(&r#"pre[class*="language-"]"#));
    assert_eq!(selectors.last(), Some(&"italic"));
    assert!(LIGHT_SYNTAX_THEME.style("not-a-selector").is_none());
}
