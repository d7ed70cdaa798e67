//! The `Tool` record and the fixed category vocabulary.
//!
//! Tools are read-only from the application's point of view: they are
//! deserialized from store rows, displayed, and dropped with the page view.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Sentinel category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// A category in the fixed vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Display name (e.g., "Sales & Marketing").
    pub name: &'static str,
    /// Slug stored in the `category` column (e.g., "sales-marketing").
    pub slug: &'static str,
}

/// The categories offered by the filter controls, in display order.
pub const CATEGORIES: &[Category] = &[
    Category {
        name: "Sales & Marketing",
        slug: "sales-marketing",
    },
    Category {
        name: "Customer Service",
        slug: "customer-service",
    },
    Category {
        name: "Productivity",
        slug: "productivity",
    },
    Category {
        name: "Content Creation",
        slug: "content-creation",
    },
    Category {
        name: "Development",
        slug: "development",
    },
];

/// Look up a category by slug.
pub fn category_by_slug(slug: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.slug == slug)
}

/// A single SaaS product listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub logo_url: String,
    pub website_url: String,
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pricing_model: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub starting_price: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub features: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub integrations: Vec<String>,
    #[serde(default)]
    pub affiliate_link: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
    #[serde(deserialize_with = "utc_or_naive")]
    pub created_at: DateTime<Utc>,
}

/// PostgREST returns `null` for unset array and text columns.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `timestamptz` columns carry an offset; plain `timestamp` columns do not
/// and are read as UTC.
fn utc_or_naive<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(ts) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(&raw, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|naive| naive.and_utc())
        .map_err(|e| serde::de::Error::custom(format!("invalid created_at {raw:?}: {e}")))
}

impl Tool {
    /// URL used for outbound "Visit" links.
    ///
    /// The affiliate link takes precedence over the plain website URL when
    /// present and non-blank.
    pub fn outbound_url(&self) -> &str {
        match self.affiliate_link.as_deref() {
            Some(link) if !link.trim().is_empty() => link,
            _ => &self.website_url,
        }
    }

    /// Uppercased first character of the name, used as a placeholder logo.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    /// Human-readable category name.
    pub fn category_label(&self) -> String {
        category_label(&self.category)
    }

    /// Whether `needle` (already lowercased) occurs in the name or description.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// Display label for a category slug.
///
/// Known slugs map to their display name; anything else is shown with
/// hyphens turned into spaces and each word capitalized.
pub fn category_label(slug: &str) -> String {
    if let Some(category) = category_by_slug(slug) {
        return category.name.to_string();
    }
    slug.split('-')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use chrono::TimeZone;

    /// Build a tool with the given fields and neutral defaults for the rest.
    pub fn tool(id: &str, name: &str, category: &str, featured: bool, day: u32) -> Tool {
        Tool {
            id: id.to_string(),
            name: name.to_string(),
            description: format!("{name} description"),
            logo_url: String::new(),
            website_url: format!("https://{id}.example"),
            category: category.to_string(),
            pricing_model: "subscription".to_string(),
            starting_price: "$10/mo".to_string(),
            features: vec![],
            integrations: vec![],
            affiliate_link: None,
            featured,
            created_at: Utc.with_ymd_and_hms(2025, 1, day, 0, 0, 0).unwrap(),
        }
    }
}
