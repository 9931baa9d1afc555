//! Theme application: tokens become CSS custom properties on the document.

use prodash_core::{ThemeMode, ThemeTokens};

/// Attribute carrying the active mode for mode-specific selectors.
pub const DATA_THEME_ATTR: &str = "data-theme";

/// Tokens as an inline `style` value, e.g. for the shell root element.
#[must_use]
pub fn inline_style(tokens: &ThemeTokens) -> String {
    tokens
        .css_variables()
        .iter()
        .map(|(name, value)| format!("{name}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Write tokens and mode onto `<html>`.
#[cfg(target_arch = "wasm32")]
pub(crate) fn apply_theme(tokens: &ThemeTokens, mode: ThemeMode) {
    use gloo::console;
    use gloo::utils::document_element;
    use wasm_bindgen::JsCast;
    use web_sys::HtmlElement;

    let root = document_element();
    if let Err(err) = root.set_attribute(DATA_THEME_ATTR, mode.as_str()) {
        console::error!("failed to set theme attribute", err);
    }
    let Ok(root) = root.dyn_into::<HtmlElement>() else {
        return;
    };
    let style = root.style();
    for (name, value) in tokens.css_variables() {
        if let Err(err) = style.set_property(name, value) {
            console::error!("failed to set css variable", name, err);
        }
    }
}

/// Label for the theme toggle: the mode it switches to.
#[must_use]
pub const fn toggle_label(mode: ThemeMode) -> &'static str {
    match mode.toggled() {
        ThemeMode::Light => "Light mode",
        ThemeMode::Dark => "Dark mode",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prodash_core::DemoContext;

    #[test]
    fn inline_style_lists_every_variable() {
        let context = DemoContext::builtin();
        assert_eq!(
            inline_style(context.tokens()),
            "--color-primary: #ef4444; --color-secondary: #84cc16; --color-accent: #f97316; --color-background: #ffffff; --color-text: #1f2937;"
        );
    }

    #[test]
    fn toggle_label_names_the_other_mode() {
        assert_eq!(toggle_label(ThemeMode::Light), "Dark mode");
        assert_eq!(toggle_label(ThemeMode::Dark), "Light mode");
    }
}
