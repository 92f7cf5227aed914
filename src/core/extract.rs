use crate::domain::model::ItemRecord;
use crate::domain::ports::StoreOptions;
use crate::page::{Document, NodeId};

/// Derives the comparable view of one wrapper element.
///
/// Fails soft on every path: a missing sub-element or unparseable price text
/// yields `NaN`/an empty name instead of an error, so one malformed card can
/// never abort a whole sort.
pub fn extract_record(doc: &Document, opts: &dyn StoreOptions, wrapper: NodeId) -> ItemRecord {
    let price = doc
        .find_by_class(wrapper, opts.price_class())
        .map(|node| parse_price(&doc.text_content(node), opts.currency_symbol()))
        .unwrap_or(f64::NAN);

    let name = doc
        .find_by_class(wrapper, opts.name_class())
        .map(|node| doc.text_content(node).trim().to_string())
        .unwrap_or_default();

    ItemRecord {
        node: wrapper,
        price,
        name,
    }
}

/// Strips one leading currency symbol and parses the remainder as a decimal.
/// Anything that does not parse comes back as `NaN`.
pub fn parse_price(text: &str, currency_symbol: &str) -> f64 {
    let trimmed = text.trim();
    let numeric = trimmed.strip_prefix(currency_symbol).unwrap_or(trimmed);
    numeric.trim().parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::DefaultOptions;

    #[test]
    fn parse_price_strips_currency_prefix() {
        assert_eq!(parse_price("$10.00", "$"), 10.0);
        assert_eq!(parse_price("$5", "$"), 5.0);
        assert_eq!(parse_price("  $20.50  ", "$"), 20.5);
    }

    #[test]
    fn parse_price_without_symbol_still_parses() {
        assert_eq!(parse_price("7.25", "$"), 7.25);
    }

    #[test]
    fn parse_price_rejects_non_numeric_text() {
        assert!(parse_price("Contact us", "$").is_nan());
        assert!(parse_price("", "$").is_nan());
        assert!(parse_price("$", "$").is_nan());
    }

    #[test]
    fn extract_reads_price_and_name_sub_elements() {
        let mut doc = Document::new();
        let opts = DefaultOptions::default();
        let wrapper = doc.create_element("div");
        let price = doc.create_element("p");
        doc.add_class(price, opts.price_class());
        doc.set_text(price, "$12.50");
        let name = doc.create_element("h5");
        doc.add_class(name, opts.name_class());
        doc.set_text(name, "  Alpha  ");
        doc.append_child(wrapper, price);
        doc.append_child(wrapper, name);

        let record = extract_record(&doc, &opts, wrapper);
        assert_eq!(record.price, 12.5);
        assert_eq!(record.name, "Alpha");
        assert_eq!(record.node, wrapper);
    }

    #[test]
    fn missing_sub_elements_degrade_instead_of_failing() {
        let mut doc = Document::new();
        let opts = DefaultOptions::default();
        let wrapper = doc.create_element("div");

        let record = extract_record(&doc, &opts, wrapper);
        assert!(record.price.is_nan());
        assert_eq!(record.name, "");
    }
}
