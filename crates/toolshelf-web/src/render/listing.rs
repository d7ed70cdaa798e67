//! Listing page: hero, filter controls, and the tool summary grid.

use std::fmt::Write;

use toolshelf::{ALL_CATEGORIES, CATEGORIES, FilterParams, ListingView, Tool};

use super::{SITE_TITLE, detail_path, escape, layout, outbound_link};

/// Message shown when nothing survives the filters.
pub const EMPTY_MESSAGE: &str = "No tools found.";

/// The full listing page.
pub fn page(params: &FilterParams, view: &ListingView) -> String {
    let mut body = String::new();
    body.push_str(
        r#"<header class="hero"><div class="container">
<h1>Find Your Perfect SaaS Tool</h1>
<p>Compare AI-powered platforms and find the best fit for your business</p>
</div></header>
"#,
    );
    body.push_str(&filter_bar(params));
    body.push_str(r#"<main class="container">"#);
    body.push_str(&results(view));
    body.push_str("</main>");
    layout(SITE_TITLE, &body)
}

/// Search input and category select, submitted as `GET /?q=&category=`.
pub fn filter_bar(params: &FilterParams) -> String {
    let selected = params.selected_category();
    let mut options = String::new();
    let option = |out: &mut String, value: &str, label: &str| {
        let sel = if value == selected { " selected" } else { "" };
        let _ = write!(
            out,
            r#"<option value="{}"{sel}>{}</option>"#,
            escape(value),
            escape(label)
        );
    };
    option(&mut options, ALL_CATEGORIES, "All Categories");
    for category in CATEGORIES {
        option(&mut options, category.slug, category.name);
    }

    format!(
        r#"<div class="filters"><div class="container">
<form method="get" action="/" role="search">
<input type="text" name="q" placeholder="Search tools..." value="{query}" aria-label="Search tools">
<select name="category" aria-label="Category">{options}</select>
<button type="submit">Filter</button>
</form>
</div></div>
"#,
        query = escape(&params.query),
    )
}

/// Loading spinner, empty message, or the card grid.
pub fn results(view: &ListingView) -> String {
    match view {
        ListingView::Loading => {
            r#"<div class="state" aria-busy="true"><div class="spinner"></div></div>"#.to_string()
        }
        ListingView::Empty => format!(r#"<div class="state"><p>{EMPTY_MESSAGE}</p></div>"#),
        ListingView::Tools { tools } => {
            let mut grid = String::from(r#"<div class="grid">"#);
            for tool in tools {
                grid.push_str(&card(tool));
            }
            grid.push_str("</div>");
            grid
        }
    }
}

/// Compact summary card for one tool.
pub fn card(tool: &Tool) -> String {
    let star = if tool.featured {
        r#" <span class="star" title="Featured">&#9733;</span>"#
    } else {
        ""
    };
    format!(
        r#"<article class="card" data-id="{id}">
<div class="logo">{initial}</div>
<div>
<h3><a href="{href}">{name}</a>{star}</h3>
<p class="desc">{description}</p>
<div><span class="chip category">{category}</span><span class="chip pricing">{pricing}</span></div>
<div class="card-footer"><span class="price">{price}</span>{visit}</div>
</div>
</article>
"#,
        id = escape(&tool.id),
        initial = escape(&tool.initial()),
        href = escape(&detail_path(&tool.id)),
        name = escape(&tool.name),
        description = escape(&tool.description),
        category = escape(&tool.category),
        pricing = escape(&tool.pricing_model),
        price = escape(&tool.starting_price),
        visit = outbound_link(tool.outbound_url(), "btn", "Visit Site &#8599;"),
    )
}
