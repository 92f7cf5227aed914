use crate::core::comparator::comparator;
use crate::core::extract::extract_record;
use crate::domain::model::SortMode;
use crate::domain::ports::StoreOptions;
use crate::page::{Document, NodeId};

/// Reorders the container's wrapper children in place according to `mode`.
///
/// The snapshot-sort-reappend shape gives two invariants:
/// - stability: `Vec::sort_by` is stable and the snapshot carries the original
///   index implicitly, so equal keys never transpose and a repeat call with
///   the same mode is idempotent
/// - state survival: wrappers are MOVED by repeated append, never recreated,
///   so descendant attributes and anything keyed on a [`NodeId`] ride along
///
/// An empty container is a no-op. Nothing in here can fail: unparseable
/// records degrade inside the comparator, unknown modes arrive as `Newest`.
pub fn reflow(doc: &mut Document, opts: &dyn StoreOptions, container: NodeId, mode: SortMode) {
    let wrappers: Vec<NodeId> = doc.children(container).to_vec();
    if wrappers.is_empty() {
        return;
    }

    let mut records: Vec<_> = wrappers
        .iter()
        .map(|wrapper| extract_record(doc, opts, *wrapper))
        .collect();

    let cmp = comparator(mode);
    records.sort_by(|a, b| cmp(a, b));

    for record in &records {
        doc.append_child(container, record.node);
    }

    tracing::debug!(
        "Reflowed {} items with mode '{}'",
        records.len(),
        mode.as_value()
    );
}
