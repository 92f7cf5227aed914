use crate::domain::model::{ItemRecord, SortMode};
use std::cmp::Ordering;

/// Returns the ordering function for a sort mode.
///
/// Pure and DOM-free by contract. `Newest` (and therefore every unrecognized
/// selector value, which parses to `Newest`) yields the identity comparator:
/// under a stable sort it leaves the insertion order untouched.
pub fn comparator(mode: SortMode) -> fn(&ItemRecord, &ItemRecord) -> Ordering {
    match mode {
        SortMode::PriceAsc => price_asc,
        SortMode::PriceDesc => price_desc,
        SortMode::NameAsc => name_asc,
        SortMode::NameDesc => name_desc,
        SortMode::Newest => identity,
    }
}

fn identity(_: &ItemRecord, _: &ItemRecord) -> Ordering {
    Ordering::Equal
}

/// `NaN` prices sort after every valid price in BOTH directions, so records
/// with unparseable price text get a deterministic tail position instead of
/// floating around with the comparison direction.
fn price_asc(a: &ItemRecord, b: &ItemRecord) -> Ordering {
    match (a.price.is_nan(), b.price.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
    }
}

fn price_desc(a: &ItemRecord, b: &ItemRecord) -> Ordering {
    match (a.price.is_nan(), b.price.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.price.partial_cmp(&a.price).unwrap_or(Ordering::Equal),
    }
}

fn name_asc(a: &ItemRecord, b: &ItemRecord) -> Ordering {
    collate(&a.name, &b.name)
}

fn name_desc(a: &ItemRecord, b: &ItemRecord) -> Ordering {
    collate(&b.name, &a.name)
}

/// Collation-style comparison: case-insensitive character order first, exact
/// order as the tiebreak so the result stays total and deterministic.
fn collate(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}
