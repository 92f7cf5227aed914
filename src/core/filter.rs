use crate::core::extract::extract_record;
use crate::domain::ports::StoreOptions;
use crate::page::{Document, NodeId};
use crate::utils::error::Result;
use url::Url;

/// Search and filter state for a listing page.
///
/// The canonical submit path is a server round-trip, so `to_url` builds the
/// query string; `apply` is the client-side preview that hides non-matching
/// wrappers in place without touching their order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    pub query: String,
    pub species: String,
    pub max_age_months: Option<u32>,
}

impl FilterQuery {
    /// Resets every field, mirroring the "clear filters" affordance.
    pub fn clear(&mut self) {
        *self = FilterQuery::default();
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.species.is_empty() && self.max_age_months.is_none()
    }

    /// Builds the search URL with only the populated fields as query pairs.
    /// An empty filter leaves the query string off entirely.
    pub fn to_url(&self, base: &str) -> Result<Url> {
        let mut url = Url::parse(base)?;
        if self.is_empty() {
            return Ok(url);
        }
        {
            let mut pairs = url.query_pairs_mut();
            if !self.query.is_empty() {
                pairs.append_pair("query", &self.query);
            }
            if !self.species.is_empty() {
                pairs.append_pair("species", &self.species);
            }
            if let Some(age) = self.max_age_months {
                pairs.append_pair("max_age", &age.to_string());
            }
        }
        Ok(url)
    }

    /// Hides wrappers that do not match, shows the ones that do. Order is
    /// untouched; filtering composes with any current sort.
    pub fn apply(&self, doc: &mut Document, opts: &dyn StoreOptions, container: NodeId) {
        let wrappers: Vec<NodeId> = doc.children(container).to_vec();
        let mut hidden = 0;
        for wrapper in wrappers {
            if self.matches(doc, opts, wrapper) {
                doc.remove_class(wrapper, opts.hidden_class());
            } else {
                doc.add_class(wrapper, opts.hidden_class());
                hidden += 1;
            }
        }
        tracing::debug!("Filter hid {} wrappers", hidden);
    }

    fn matches(&self, doc: &Document, opts: &dyn StoreOptions, wrapper: NodeId) -> bool {
        if !self.species.is_empty() {
            let species = doc
                .find_by_attribute(wrapper, "data-species")
                .and_then(|node| doc.attribute(node, "data-species"));
            if species != Some(self.species.as_str()) {
                return false;
            }
        }
        if !self.query.is_empty() {
            let name = extract_record(doc, opts, wrapper).name.to_lowercase();
            if !name.contains(&self.query.to_lowercase()) {
                return false;
            }
        }
        true
    }
}

/// Display text for the age-range slider: months below one year, whole years
/// after that.
pub fn format_age(months: u32) -> String {
    if months < 12 {
        format!("{} months", months)
    } else {
        let years = months / 12;
        if years == 1 {
            "1 year".to_string()
        } else {
            format!("{} years", years)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::DefaultOptions;
    use crate::domain::model::CatalogItem;
    use crate::page::builder::render_listing;

    fn pet(id: u64, name: &str, species: &str) -> CatalogItem {
        CatalogItem {
            id,
            name: name.to_string(),
            price: "$0.00".to_string(),
            species: Some(species.to_string()),
        }
    }

    #[test]
    fn to_url_includes_only_populated_fields() {
        let filter = FilterQuery {
            query: "terrier".to_string(),
            species: String::new(),
            max_age_months: Some(24),
        };
        let url = filter.to_url("https://example.org/pets").unwrap();
        assert_eq!(url.as_str(), "https://example.org/pets?query=terrier&max_age=24");
    }

    #[test]
    fn empty_filter_builds_bare_url() {
        let filter = FilterQuery::default();
        let url = filter.to_url("https://example.org/pets").unwrap();
        assert_eq!(url.query(), None);
        assert!(filter.is_empty());
    }

    #[test]
    fn clear_resets_every_field() {
        let mut filter = FilterQuery {
            query: "x".to_string(),
            species: "dog".to_string(),
            max_age_months: Some(6),
        };
        filter.clear();
        assert!(filter.is_empty());
    }

    #[test]
    fn apply_hides_non_matching_species() {
        let mut doc = Document::new();
        let opts = DefaultOptions::default();
        let items = vec![pet(1, "Rex", "dog"), pet(2, "Whiskers", "cat")];
        let container = render_listing(&mut doc, &opts, &items);

        let filter = FilterQuery {
            species: "dog".to_string(),
            ..FilterQuery::default()
        };
        filter.apply(&mut doc, &opts, container);

        let wrappers = doc.children(container).to_vec();
        assert!(!doc.has_class(wrappers[0], opts.hidden_class()));
        assert!(doc.has_class(wrappers[1], opts.hidden_class()));
    }

    #[test]
    fn relaxing_the_filter_unhides_wrappers() {
        let mut doc = Document::new();
        let opts = DefaultOptions::default();
        let items = vec![pet(1, "Rex", "dog"), pet(2, "Whiskers", "cat")];
        let container = render_listing(&mut doc, &opts, &items);

        let mut filter = FilterQuery {
            species: "dog".to_string(),
            ..FilterQuery::default()
        };
        filter.apply(&mut doc, &opts, container);
        filter.clear();
        filter.apply(&mut doc, &opts, container);

        for wrapper in doc.children(container).to_vec() {
            assert!(!doc.has_class(wrapper, opts.hidden_class()));
        }
    }

    #[test]
    fn query_matches_name_case_insensitively() {
        let mut doc = Document::new();
        let opts = DefaultOptions::default();
        let items = vec![pet(1, "Rex", "dog"), pet(2, "Trex Junior", "dog")];
        let container = render_listing(&mut doc, &opts, &items);

        let filter = FilterQuery {
            query: "REX".to_string(),
            ..FilterQuery::default()
        };
        filter.apply(&mut doc, &opts, container);

        for wrapper in doc.children(container).to_vec() {
            assert!(!doc.has_class(wrapper, opts.hidden_class()));
        }
    }

    #[test]
    fn age_formats_as_months_then_years() {
        assert_eq!(format_age(0), "0 months");
        assert_eq!(format_age(11), "11 months");
        assert_eq!(format_age(12), "1 year");
        assert_eq!(format_age(30), "2 years");
    }
}
