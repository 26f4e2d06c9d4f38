//! Accessible-name locators compiled to page-side JavaScript
//!
//! The dashboard under verification is localized (Arabic), so elements are
//! found by their user-facing labels rather than markup structure: an input's
//! placeholder, a button's accessible name, or a heading's text. Each locator
//! compiles to a self-contained JS expression evaluated in the page.

use std::fmt;

/// A strategy for finding a UI element by its semantic role and label
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// An input or textarea with the given placeholder text
    Placeholder(String),
    /// A button (or `role="button"`) with the given accessible name
    Button(String),
    /// A heading with the given text
    Heading(String),
}

/// Shared page-side visibility predicate
const VISIBLE_JS: &str = "const visible = (e) => { \
     const r = e.getBoundingClientRect(); \
     const s = window.getComputedStyle(e); \
     return r.width > 0 && r.height > 0 && s.visibility !== 'hidden' && s.display !== 'none'; \
     };";

impl Locator {
    /// Locate an input by placeholder text
    pub fn placeholder(text: impl Into<String>) -> Self {
        Self::Placeholder(text.into())
    }

    /// Locate a button by accessible name
    pub fn button(name: impl Into<String>) -> Self {
        Self::Button(name.into())
    }

    /// Locate a heading by text
    pub fn heading(name: impl Into<String>) -> Self {
        Self::Heading(name.into())
    }

    /// JS snippet producing `els`, the array of matching elements
    fn finder_js(&self) -> String {
        match self {
            Self::Placeholder(text) => format!(
                "const name = {}; \
                 const els = Array.from(document.querySelectorAll('input, textarea')) \
                 .filter(e => (e.getAttribute('placeholder') || '') === name);",
                js_string(text)
            ),
            Self::Button(name) => format!(
                "const name = {}; \
                 const els = Array.from(document.querySelectorAll('button, [role=\"button\"]')) \
                 .filter(e => ((e.getAttribute('aria-label') || e.textContent || '').replace(/\\s+/g, ' ').trim()) === name);",
                js_string(name)
            ),
            Self::Heading(name) => format!(
                "const name = {}; \
                 const els = Array.from(document.querySelectorAll('h1, h2, h3, h4, [role=\"heading\"]')) \
                 .filter(e => ((e.textContent || '').replace(/\\s+/g, ' ').trim()) === name);",
                js_string(name)
            ),
        }
    }

    /// Expression returning whether any matching element is visible
    pub fn visible_js(&self) -> String {
        format!(
            "(() => {{ {} {} return els.some(visible); }})()",
            VISIBLE_JS,
            self.finder_js()
        )
    }

    /// Expression counting visible matching elements
    pub fn count_js(&self) -> String {
        format!(
            "(() => {{ {} {} return els.filter(visible).length; }})()",
            VISIBLE_JS,
            self.finder_js()
        )
    }

    /// Expression clicking the first visible match; returns whether one existed
    pub fn click_js(&self) -> String {
        format!(
            "(() => {{ {} {} \
             const el = els.filter(visible)[0]; \
             if (!el) return false; \
             el.click(); \
             return true; }})()",
            VISIBLE_JS,
            self.finder_js()
        )
    }

    /// Expression filling the first visible match; returns whether one existed
    ///
    /// Controlled React inputs ignore direct `.value` writes, so the value
    /// goes through the prototype setter and an `input` event is dispatched.
    pub fn fill_js(&self, value: &str) -> String {
        format!(
            "(() => {{ {} {} \
             const el = els.filter(visible)[0]; \
             if (!el) return false; \
             const proto = el instanceof HTMLTextAreaElement \
                 ? HTMLTextAreaElement.prototype : HTMLInputElement.prototype; \
             Object.getOwnPropertyDescriptor(proto, 'value').set.call(el, {}); \
             el.dispatchEvent(new Event('input', {{ bubbles: true }})); \
             el.dispatchEvent(new Event('change', {{ bubbles: true }})); \
             return true; }})()",
            VISIBLE_JS,
            self.finder_js(),
            js_string(value)
        )
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Placeholder(text) => write!(f, "input with placeholder {:?}", text),
            Self::Button(name) => write!(f, "button {:?}", name),
            Self::Heading(name) => write!(f, "heading {:?}", name),
        }
    }
}

/// Encode a string as a JS string literal (JSON is a JS subset)
fn js_string(s: &str) -> String {
    serde_json::Value::String(s.to_owned()).to_string()
}
