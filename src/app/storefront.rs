use crate::core::extract::extract_record;
use crate::core::filter::FilterQuery;
use crate::core::reflow::reflow;
use crate::core::toast::ToastScheduler;
use crate::domain::model::{CatalogItem, ItemRecord, SortMode};
use crate::domain::ports::{Clock, Delay, StoreOptions};
use crate::page::builder::render_listing;
use crate::page::{Document, NodeId};

/// What a page element is for, independent of where it sits in the markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRole {
    SortSelect,
    AddToCart,
    CategoryLink,
    SpeciesFilter,
    ClearFilters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Change,
    Click,
    Input,
}

/// A user event as delivered by the page framework: the role and kind select
/// the handler, the target and value carry the payload.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    pub role: ElementRole,
    pub kind: EventKind,
    pub target: Option<NodeId>,
    pub value: &'a str,
}

impl<'a> Event<'a> {
    pub fn change(role: ElementRole, value: &'a str) -> Self {
        Self {
            role,
            kind: EventKind::Change,
            target: None,
            value,
        }
    }

    pub fn click(role: ElementRole, target: NodeId) -> Self {
        Self {
            role,
            kind: EventKind::Click,
            target: Some(target),
            value: "",
        }
    }
}

/// Wires the listing container, toast scheduler and filter state to the
/// dispatch table. All handlers run synchronously to completion, so only one
/// reflow can ever be in flight per container.
pub struct Storefront<O: StoreOptions, C: Clock> {
    doc: Document,
    opts: O,
    toasts: ToastScheduler<C>,
    container: NodeId,
    filter: FilterQuery,
}

impl<O: StoreOptions, C: Clock> Storefront<O, C> {
    pub fn new(opts: O, clock: C, items: &[CatalogItem]) -> Self {
        let mut doc = Document::new();
        let container = render_listing(&mut doc, &opts, items);
        let toasts = ToastScheduler::new(clock, opts.toast_visible(), opts.toast_fade());
        Self {
            doc,
            opts,
            toasts,
            container,
            filter: FilterQuery::default(),
        }
    }

    pub fn doc(&self) -> &Document {
        &self.doc
    }

    pub fn doc_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    pub fn active_toasts(&self) -> usize {
        self.toasts.active()
    }

    /// Dispatch table from (role, kind) to handler. Unmatched pairs are
    /// absorbed with a debug log; no event can break the page.
    pub fn dispatch(&mut self, event: Event<'_>) {
        match (event.role, event.kind) {
            (ElementRole::SortSelect, EventKind::Change) => {
                let mode = SortMode::from_value(event.value);
                reflow(&mut self.doc, &self.opts, self.container, mode);
            }
            (ElementRole::AddToCart, EventKind::Click) => {
                let name = event
                    .target
                    .and_then(|target| self.doc.attribute(target, "data-product-name"))
                    .unwrap_or("Item")
                    .to_string();
                self.toasts.show(&mut self.doc, &name);
            }
            (ElementRole::CategoryLink, EventKind::Click) => {
                if let Some(target) = event.target {
                    self.activate_category_link(target);
                }
            }
            (ElementRole::SpeciesFilter, EventKind::Change) => {
                self.filter.species = event.value.to_string();
                self.filter.apply(&mut self.doc, &self.opts, self.container);
            }
            (ElementRole::ClearFilters, EventKind::Click) => {
                self.filter.clear();
                self.filter.apply(&mut self.doc, &self.opts, self.container);
            }
            (role, kind) => {
                tracing::debug!("No handler for {:?}/{:?}", role, kind);
            }
        }
    }

    /// Moves the active class to the clicked link within its sibling group.
    fn activate_category_link(&mut self, target: NodeId) {
        if let Some(group) = self.doc.parent(target) {
            for link in self.doc.children(group).to_vec() {
                self.doc.remove_class(link, "active");
            }
        }
        self.doc.add_class(target, "active");
    }

    /// Snapshot of the listing in its current order.
    pub fn records(&self) -> Vec<ItemRecord> {
        self.doc
            .children(self.container)
            .iter()
            .map(|wrapper| extract_record(&self.doc, &self.opts, *wrapper))
            .collect()
    }

    /// Applies due toast transitions against the scheduler's clock.
    pub fn poll_toasts(&mut self) {
        self.toasts.poll(&mut self.doc);
    }

    /// Drives all pending toasts to removal.
    pub async fn run_toasts(&mut self, delay: &dyn Delay) {
        self.toasts.run_until_idle(&mut self.doc, delay).await;
    }
}

/// Builds a category sidebar of the shape the dispatcher's active-class flip
/// expects. Collaborator-side markup, like [`render_listing`].
pub fn render_category_links(doc: &mut Document, categories: &[&str]) -> Vec<NodeId> {
    let group = doc.create_element("div");
    doc.add_class(group, "list-group");
    let body = doc.body();
    doc.append_child(body, group);

    categories
        .iter()
        .map(|category| {
            let link = doc.create_element("a");
            doc.add_class(link, "list-group-item-action");
            doc.set_text(link, category);
            doc.append_child(group, link);
            link
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::DefaultOptions;
    use crate::domain::ports::SystemClock;

    fn item(id: u64, name: &str, price: &str, species: &str) -> CatalogItem {
        CatalogItem {
            id,
            name: name.to_string(),
            price: price.to_string(),
            species: Some(species.to_string()),
        }
    }

    fn storefront() -> Storefront<DefaultOptions, SystemClock> {
        let items = vec![
            item(1, "Bravo", "$10.00", "dog"),
            item(2, "Alpha", "$5.00", "cat"),
            item(3, "Charlie", "$20.00", "dog"),
        ];
        Storefront::new(DefaultOptions::default(), SystemClock, &items)
    }

    fn names(store: &Storefront<DefaultOptions, SystemClock>) -> Vec<String> {
        store.records().into_iter().map(|r| r.name).collect()
    }

    #[test]
    fn sort_change_reorders_the_listing() {
        let mut store = storefront();
        store.dispatch(Event::change(ElementRole::SortSelect, "priceAsc"));
        assert_eq!(names(&store), ["Alpha", "Bravo", "Charlie"]);

        store.dispatch(Event::change(ElementRole::SortSelect, "nameDesc"));
        assert_eq!(names(&store), ["Charlie", "Bravo", "Alpha"]);
    }

    #[test]
    fn bogus_sort_value_keeps_insertion_order() {
        let mut store = storefront();
        store.dispatch(Event::change(ElementRole::SortSelect, "bogus"));
        assert_eq!(names(&store), ["Bravo", "Alpha", "Charlie"]);
    }

    #[test]
    fn add_to_cart_click_shows_a_named_toast() {
        let mut store = storefront();
        let wrapper = store.doc().children(store.container())[0];
        let button = store.doc().find_by_class(wrapper, "add-to-cart").unwrap();

        store.dispatch(Event::click(ElementRole::AddToCart, button));
        assert_eq!(store.active_toasts(), 1);

        let body = store.doc().body();
        let toast = store.doc().find_by_class(body, "toast").unwrap();
        let text = store.doc().find_by_class(toast, "toast-body").unwrap();
        assert_eq!(
            store.doc().text_content(text),
            "Bravo has been added to your cart."
        );
    }

    #[test]
    fn category_click_moves_the_active_class() {
        let mut store = storefront();
        let links = render_category_links(store.doc_mut(), &["Toys", "Food", "Beds"]);
        store.dispatch(Event::click(ElementRole::CategoryLink, links[0]));
        store.dispatch(Event::click(ElementRole::CategoryLink, links[2]));

        assert!(!store.doc().has_class(links[0], "active"));
        assert!(!store.doc().has_class(links[1], "active"));
        assert!(store.doc().has_class(links[2], "active"));
    }

    #[test]
    fn species_filter_then_clear_round_trips_visibility() {
        let mut store = storefront();
        store.dispatch(Event::change(ElementRole::SpeciesFilter, "cat"));

        let hidden: Vec<bool> = store
            .doc()
            .children(store.container())
            .iter()
            .map(|w| store.doc().has_class(*w, "d-none"))
            .collect();
        assert_eq!(hidden, [true, false, true]);

        let body = store.doc().body();
        let clear = {
            let doc = store.doc_mut();
            let button = doc.create_element("button");
            doc.append_child(body, button);
            button
        };
        store.dispatch(Event::click(ElementRole::ClearFilters, clear));
        for wrapper in store.doc().children(store.container()).to_vec() {
            assert!(!store.doc().has_class(wrapper, "d-none"));
        }
    }

    #[test]
    fn unhandled_role_kind_pairs_are_absorbed() {
        let mut store = storefront();
        store.dispatch(Event {
            role: ElementRole::SortSelect,
            kind: EventKind::Input,
            target: None,
            value: "priceAsc",
        });
        assert_eq!(names(&store), ["Bravo", "Alpha", "Charlie"]);
    }
}
