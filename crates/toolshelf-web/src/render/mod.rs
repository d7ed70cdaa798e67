//! Server-side HTML rendering.
//!
//! Views are plain functions from data to `String`. Every piece of dynamic
//! text passes through [`escape`]; URLs placed in `href` additionally go
//! through [`safe_href`] so that only `http(s)` links are emitted.

pub mod detail;
pub mod listing;

use std::fmt::Write;

use chrono::Datelike;

/// Document title shared by every page.
pub const SITE_TITLE: &str = "SaaS Platforms - Compare AI Tools";
const SITE_DESCRIPTION: &str = "Compare and find the best AI SaaS platforms";

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

/// Escaped `href` value for an outbound URL, or `#` for non-http(s) schemes.
pub fn safe_href(url: &str) -> String {
    let trimmed = url.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        escape(trimmed)
    } else {
        "#".to_string()
    }
}

/// Percent-encode a single path segment (RFC 3986 unreserved characters pass).
pub fn encode_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for b in raw.bytes() {
        if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~') {
            out.push(b as char);
        } else {
            let _ = write!(out, "%{b:02X}");
        }
    }
    out
}

/// Path of the detail page for a tool id.
pub fn detail_path(id: &str) -> String {
    format!("/tools/{}", encode_segment(id))
}

/// An outbound link that opens in a new browsing context without leaking the
/// referrer or an `opener` handle.
pub fn outbound_link(url: &str, class: &str, inner_html: &str) -> String {
    format!(
        r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="{}">{}</a>"#,
        safe_href(url),
        class,
        inner_html
    )
}

/// Wrap `body` in the shared document shell.
pub fn layout(title: &str, body: &str) -> String {
    let year = chrono::Utc::now().year();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="description" content="{description}">
<meta name="referrer" content="no-referrer">
<title>{title}</title>
<style>{STYLES}</style>
</head>
<body>
{body}
<footer class="footer"><p>&copy; {year} SaaS Platforms</p></footer>
</body>
</html>
"#,
        description = escape(SITE_DESCRIPTION),
        title = escape(title),
    )
}

const STYLES: &str = r#"
*{box-sizing:border-box}body{margin:0;font-family:system-ui,sans-serif;background:#f9fafb;color:#111827}
a{color:inherit}.container{max-width:80rem;margin:0 auto;padding:0 1rem}
.hero{background:linear-gradient(90deg,#2563eb,#9333ea);color:#fff;padding:4rem 0;text-align:center}
.hero h1{font-size:3rem;margin:0 0 1rem}.hero p{font-size:1.25rem;color:#dbeafe;margin:0}
.filters{background:#fff;border-bottom:1px solid #e5e7eb;position:sticky;top:0;z-index:10}
.filters form{display:flex;flex-wrap:wrap;gap:1rem;padding:1rem 0}
.filters input{flex:1;min-width:12rem;padding:.5rem 1rem;border:1px solid #d1d5db;border-radius:.5rem}
.filters select,.filters button{padding:.5rem 1rem;border:1px solid #d1d5db;border-radius:.5rem;background:#fff}
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(22rem,1fr));gap:1.5rem;padding:2rem 0}
.card{background:#fff;border:1px solid #e5e7eb;border-radius:.5rem;padding:1.5rem;display:flex;gap:1rem}
.logo{width:4rem;height:4rem;flex-shrink:0;border:1px solid #e5e7eb;border-radius:.5rem;background:#f9fafb;display:flex;align-items:center;justify-content:center;font-size:1.5rem;font-weight:700;color:#9ca3af}
.logo.large{width:6rem;height:6rem;font-size:2.5rem;background:#fff}
.card h3{margin:0 0 .5rem;font-size:1.25rem}.card h3 a{text-decoration:none}
.star{color:#eab308}.desc{color:#4b5563;font-size:.875rem}
.chip{display:inline-block;padding:.25rem .75rem;border-radius:9999px;font-size:.75rem;margin-right:.5rem}
.chip.category{background:#dbeafe;color:#1d4ed8}.chip.pricing{background:#dcfce7;color:#15803d}
.card-footer{display:flex;justify-content:space-between;align-items:center;margin-top:.75rem}
.price{font-size:1.125rem;font-weight:700}
.btn{display:inline-block;padding:.5rem 1rem;background:#2563eb;color:#fff;border-radius:.5rem;text-decoration:none;font-size:.875rem}
.btn.block{display:block;text-align:center;padding:1rem;font-size:1.125rem;font-weight:600}
.state{text-align:center;padding:5rem 0;font-size:1.25rem;color:#4b5563}
.spinner{width:2rem;height:2rem;margin:0 auto;border:3px solid #bfdbfe;border-top-color:#2563eb;border-radius:50%;animation:spin 1s linear infinite}
@keyframes spin{to{transform:rotate(360deg)}}
.detail-hero{background:linear-gradient(90deg,#2563eb,#9333ea);color:#fff;padding:2rem 0}
.detail-hero .back{color:rgba(255,255,255,.8);text-decoration:none;display:inline-block;margin-bottom:1.5rem}
.detail-head{display:flex;gap:1.5rem;align-items:flex-start}.detail-head h1{margin:0 0 .5rem;font-size:2.25rem}
.detail-head .chip{background:rgba(255,255,255,.2);color:#fff;font-size:.875rem}
.badge{background:#facc15;color:#713f12;padding:.25rem .75rem;border-radius:9999px;font-size:.875rem;font-weight:700}
.detail-body{display:grid;grid-template-columns:2fr 1fr;gap:2rem;padding:3rem 0}
.panel{background:#fff;border-radius:.75rem;padding:1.5rem;box-shadow:0 1px 2px rgba(0,0,0,.05);margin-bottom:2rem}
.panel h2{margin:0 0 1rem}.big-price{font-size:2.25rem;font-weight:700}
.features{list-style:none;padding:0;display:grid;grid-template-columns:1fr 1fr;gap:.75rem}
.features li::before{content:"\2713  ";color:#16a34a}
.integration{display:inline-block;padding:.25rem .75rem;background:#f3f4f6;border-radius:9999px;font-size:.875rem;margin:0 .5rem .5rem 0}
.muted{color:#4b5563;font-size:.875rem;display:block;text-align:center;margin-top:1rem;word-break:break-all}
.footer{background:#111827;color:#fff;text-align:center;padding:2rem 0;margin-top:4rem}
"#;
