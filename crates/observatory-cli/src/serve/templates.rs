//! HTML template rendering for the dashboard page.
//!
//! Templates are stored as separate files for maintainability:
//! - `templates/index.html` - HTML structure
//! - `templates/styles.css` - CSS styles
//! - `templates/app.js` - JavaScript application code
//!
//! Files are embedded at compile time using `include_str!`.

use observatory_core::config::{CHART_CAPTION, PAGE_SUBTITLE, PAGE_TITLE};
use observatory_core::Dashboard;

// Embed template files at compile time
const HTML_TEMPLATE: &str = include_str!("templates/index.html");
const STYLES: &str = include_str!("templates/styles.css");
const SCRIPT: &str = include_str!("templates/app.js");

/// Render the dashboard page.
///
/// Assembles the final HTML by substituting placeholders in the template:
/// - `{{TITLE}}`, `{{SUBTITLE}}`, `{{CAPTION}}` - Page text
/// - `{{CLASS_OPTIONS}}` - Dropdown `<option>` list, default preselected
/// - `{{STYLES}}` - CSS styles
/// - `{{SCRIPT}}` - JavaScript code
pub fn render_dashboard_page(dashboard: &Dashboard) -> String {
    HTML_TEMPLATE
        .replace("{{TITLE}}", &html_escape(PAGE_TITLE))
        .replace("{{SUBTITLE}}", &html_escape(PAGE_SUBTITLE))
        .replace("{{CAPTION}}", &html_escape(CHART_CAPTION))
        .replace("{{CLASS_OPTIONS}}", &render_class_options(dashboard))
        .replace("{{STYLES}}", STYLES)
        .replace("{{SCRIPT}}", SCRIPT)
}

fn render_class_options(dashboard: &Dashboard) -> String {
    let default = dashboard.default_class();
    dashboard
        .catalog()
        .classes()
        .iter()
        .map(|class| {
            let selected = if class == default { " selected" } else { "" };
            let escaped = html_escape(class);
            format!(r#"<option value="{}"{}>{}</option>"#, escaped, selected, escaped)
        })
        .collect::<Vec<_>>()
        .join("\n          ")
}

/// Escape HTML special characters to prevent XSS.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }
}
