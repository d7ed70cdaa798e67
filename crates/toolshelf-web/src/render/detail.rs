//! Detail page, plus the not-found and failure pages.

use toolshelf::Tool;

use super::{SITE_TITLE, escape, layout, outbound_link};

pub const NOT_FOUND_MESSAGE: &str = "Tool not found";
pub const FAILED_MESSAGE: &str = "Something went wrong";

/// Full attribute view of one tool.
pub fn page(tool: &Tool) -> String {
    let badge = if tool.featured {
        r#" <span class="badge">Featured</span>"#
    } else {
        ""
    };

    let mut sections = String::new();
    sections.push_str(&format!(
        r#"<section class="panel"><h2>Pricing</h2>
<div><span class="big-price">{price}</span> <span class="desc">starting price</span></div>
<p class="desc">{pricing} pricing model</p></section>
"#,
        price = escape(&tool.starting_price),
        pricing = escape(&tool.pricing_model),
    ));

    if !tool.features.is_empty() {
        sections.push_str(r#"<section class="panel"><h2>Key Features</h2><ul class="features">"#);
        for feature in &tool.features {
            sections.push_str(&format!("<li>{}</li>", escape(feature)));
        }
        sections.push_str("</ul></section>\n");
    }

    if !tool.integrations.is_empty() {
        sections.push_str(r#"<section class="panel"><h2>Integrations</h2><div>"#);
        for integration in &tool.integrations {
            sections.push_str(&format!(
                r#"<span class="integration">{}</span>"#,
                escape(integration)
            ));
        }
        sections.push_str("</div></section>\n");
    }

    let visit_label = format!("Visit {} &#8599;", escape(&tool.name));
    let sidebar = format!(
        r#"<aside><div class="panel">
{cta}
{website}
<div style="margin-top:1.5rem;padding-top:1.5rem;border-top:1px solid #e5e7eb">
<h3>Category</h3><p class="desc">{category}</p>
</div>
</div></aside>"#,
        cta = outbound_link(tool.outbound_url(), "btn block", &visit_label),
        website = outbound_link(&tool.website_url, "muted", &escape(&tool.website_url)),
        category = escape(&tool.category_label()),
    );

    let body = format!(
        r#"<header class="detail-hero"><div class="container">
<a class="back" href="/">&larr; Back to all tools</a>
<div class="detail-head">
<div class="logo large">{initial}</div>
<div>
<h1>{name}{badge}</h1>
<p>{description}</p>
<div><span class="chip">{category}</span><span class="chip">{pricing}</span></div>
</div>
</div>
</div></header>
<main class="container detail-body">
<div>{sections}</div>
{sidebar}
</main>"#,
        initial = escape(&tool.initial()),
        name = escape(&tool.name),
        description = escape(&tool.description),
        category = escape(&tool.category),
        pricing = escape(&tool.pricing_model),
    );

    layout(&format!("{} | {SITE_TITLE}", tool.name), &body)
}

/// Page for an identifier the store does not know.
pub fn not_found() -> String {
    message_page(NOT_FOUND_MESSAGE, "&larr; Back to home")
}

/// Page for a failed fetch. Carries no error detail.
pub fn failed() -> String {
    message_page(FAILED_MESSAGE, "&larr; Back to all tools")
}

fn message_page(heading: &str, back_label: &str) -> String {
    let body = format!(
        r#"<main class="container state"><h1>{}</h1><p><a href="/">{back_label}</a></p></main>"#,
        escape(heading)
    );
    layout(&format!("{heading} | {SITE_TITLE}"), &body)
}
