//! Renders a redirect form as an auto-submitting HTML page.

use crate::domain::hosted_payment::RedirectForm;

/// Renders `form` as an HTML page that posts itself on load.
///
/// Hidden inputs appear in field order. Every attribute value is escaped.
pub fn render_auto_submit(form: &RedirectForm) -> String {
    let name = html_escape(&form.form_name);
    let mut html = String::with_capacity(256 + form.fields.len() * 64);

    html.push_str("<html><head></head>");
    html.push_str(&format!(r#"<body onload="document.{}.submit()">"#, name));
    html.push_str(&format!(
        r#"<form name="{}" method="{}" action="{}">"#,
        name,
        html_escape(&form.method),
        html_escape(&form.action)
    ));
    for (field, value) in form.fields.iter() {
        html.push_str(&format!(
            r#"<input name="{}" type="hidden" value="{}">"#,
            html_escape(field.as_str()),
            html_escape(value)
        ));
    }
    html.push_str("</form></body></html>");

    html
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
