//! Static HTML views.
//!
//! Every page shares one layout: a fixed header bar naming the application
//! and linking home, followed by the page body. Pages are rendered once on
//! first use.

use once_cell::sync::Lazy;

/// Application name shown in the header and page titles.
pub const APP_NAME: &str = "Box Office";

const STYLES: &str = "\
body{margin:0;font-family:system-ui,-apple-system,sans-serif;color:#1f2933;background:#f5f7fa}\
header{position:fixed;top:0;left:0;right:0;height:56px;display:flex;align-items:center;\
padding:0 24px;background:#1f2933}\
header a{color:#fff;font-weight:600;font-size:1.25rem;text-decoration:none}\
main{max-width:640px;margin:0 auto;padding:120px 24px 48px;text-align:center}\
h1{font-size:2rem;margin-bottom:8px}\
p{color:#52606d}\
.action{display:inline-block;margin-top:24px;padding:10px 20px;border:0;border-radius:6px;\
background:#2563eb;color:#fff;font-size:1rem;text-decoration:none;cursor:pointer}\
pre{text-align:left;overflow-x:auto;padding:12px;background:#e4e7eb;border-radius:6px}";

/// The fixed header bar.
pub fn header() -> String {
    format!(r#"<header><a href="/">{APP_NAME}</a></header>"#)
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {APP_NAME}</title>
<style>{STYLES}</style>
</head>
<body>
{header}
<main>
{body}
</main>
</body>
</html>
"#,
        header = header(),
    )
}

/// Escapes text for inclusion in HTML element content.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub static HOME_PAGE: Lazy<String> = Lazy::new(|| {
    layout(
        "Home",
        &format!("<h1>{APP_NAME}</h1>\n<p>Book your seats and pay securely.</p>"),
    )
});

pub static NOT_FOUND_PAGE: Lazy<String> = Lazy::new(|| {
    layout(
        "Page not found",
        r#"<h1>404</h1>
<p>The page you are looking for does not exist.</p>
<a class="action" href="/">Go back home</a>"#,
    )
});

fn server_error_body(detail: Option<&str>) -> String {
    let detail = detail
        .map(|d| format!("\n<pre>{}</pre>", escape_html(d)))
        .unwrap_or_default();
    format!(
        r#"<h1>Something went wrong</h1>
<p>An unexpected error occurred. Please try again.</p>{detail}
<button class="action" type="button" onclick="window.location.reload()">Reload page</button>"#
    )
}

pub static SERVER_ERROR_PAGE: Lazy<String> =
    Lazy::new(|| layout("Server error", &server_error_body(None)));

/// Server error page including a diagnostic detail line.
pub fn server_error_page_with_detail(detail: &str) -> String {
    layout("Server error", &server_error_body(Some(detail)))
}

pub static MAINTENANCE_PAGE: Lazy<String> = Lazy::new(|| {
    layout(
        "Under maintenance",
        r#"<h1>Under maintenance</h1>
<p>We are making some improvements and will be back shortly.</p>"#,
    )
});
