use chrono::DateTime;
use proptest::prelude::*;
use toolshelf::{CategoryFilter, Tool, filter};

const STORED_CATEGORIES: &[&str] = &[
    "sales-marketing",
    "customer-service",
    "productivity",
    "development",
];

const SELECTIONS: &[&str] = &[
    "all",
    "sales-marketing",
    "customer-service",
    "productivity",
    "content-creation",
    "development",
    "not-a-category",
];

fn arb_tool() -> impl Strategy<Value = Tool> {
    (
        0i64..100_000,
        prop::sample::select(STORED_CATEGORIES),
        "[a-cA-C ]{0,6}",
        "[a-cA-C ]{0,10}",
        any::<bool>(),
    )
        .prop_map(|(n, category, name, description, featured)| Tool {
            id: n.to_string(),
            name,
            description,
            logo_url: String::new(),
            website_url: format!("https://t{n}.example"),
            category: category.to_string(),
            pricing_model: "subscription".to_string(),
            starting_price: String::new(),
            features: vec![],
            integrations: vec![],
            affiliate_link: None,
            featured,
            created_at: DateTime::from_timestamp(n * 3600, 0).unwrap_or_default(),
        })
}

fn arb_collection() -> impl Strategy<Value = Vec<Tool>> {
    prop::collection::vec(arb_tool(), 0..12)
}

fn arb_selection() -> impl Strategy<Value = CategoryFilter> {
    prop::sample::select(SELECTIONS).prop_map(CategoryFilter::parse)
}

proptest! {
    #[test]
    fn category_filter_keeps_exact_matches_in_order(
        tools in arb_collection(),
        selection in arb_selection(),
    ) {
        let out = filter(&tools, &selection, "");
        let expected: Vec<Tool> = match &selection {
            CategoryFilter::All => tools.clone(),
            CategoryFilter::Slug(slug) => {
                tools.iter().filter(|t| t.category == *slug).cloned().collect()
            }
        };
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn all_with_empty_query_is_identity(tools in arb_collection()) {
        prop_assert_eq!(filter(&tools, &CategoryFilter::All, ""), tools);
    }

    #[test]
    fn query_narrows_to_case_insensitive_matches(
        tools in arb_collection(),
        query in "[a-cA-C ]{0,3}",
    ) {
        let all = filter(&tools, &CategoryFilter::All, "");
        let out = filter(&tools, &CategoryFilter::All, &query);
        let needle = query.to_lowercase();

        for t in &out {
            prop_assert!(all.contains(t));
            prop_assert!(
                t.name.to_lowercase().contains(&needle)
                    || t.description.to_lowercase().contains(&needle)
            );
        }
        // Nothing that matches is dropped.
        let matching = tools
            .iter()
            .filter(|t| {
                t.name.to_lowercase().contains(&needle)
                    || t.description.to_lowercase().contains(&needle)
            })
            .count();
        prop_assert_eq!(out.len(), matching);
    }

    #[test]
    fn combined_filter_is_intersection(
        tools in arb_collection(),
        selection in arb_selection(),
        query in "[a-cA-C ]{0,3}",
    ) {
        let combined = filter(&tools, &selection, &query);
        let by_category = filter(&tools, &selection, "");
        let by_query = filter(&tools, &CategoryFilter::All, &query);
        let intersection: Vec<Tool> = by_category
            .into_iter()
            .filter(|t| by_query.contains(t))
            .collect();
        prop_assert_eq!(combined, intersection);
    }

    #[test]
    fn filtering_is_idempotent(
        tools in arb_collection(),
        selection in arb_selection(),
        query in "[a-cA-C ]{0,3}",
    ) {
        let once = filter(&tools, &selection, &query);
        let twice = filter(&once, &selection, &query);
        prop_assert_eq!(once, twice);
    }
}
