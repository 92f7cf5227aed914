use crate::domain::model::CatalogItem;
use crate::domain::ports::StoreOptions;
use crate::page::{Document, NodeId};

/// Builds the listing markup the core consumes: a container whose direct
/// children are one wrapper per catalog item, each carrying a price element
/// and a name element addressable by class.
///
/// This is the page-rendering collaborator's side of the contract. The sort
/// and toast code never depends on how the markup got there.
pub fn render_listing(doc: &mut Document, opts: &dyn StoreOptions, items: &[CatalogItem]) -> NodeId {
    let container = doc.create_element("div");
    doc.add_class(container, "row");
    doc.add_class(container, "row-cols-1");
    let body = doc.body();
    doc.append_child(body, container);

    for item in items {
        let wrapper = render_item(doc, opts, item);
        doc.append_child(container, wrapper);
    }

    tracing::debug!("Rendered listing with {} items", items.len());
    container
}

fn render_item(doc: &mut Document, opts: &dyn StoreOptions, item: &CatalogItem) -> NodeId {
    let wrapper = doc.create_element("div");
    doc.add_class(wrapper, "col");

    let card = doc.create_element("div");
    doc.add_class(card, "card");
    doc.add_class(card, "product-card");
    if let Some(species) = &item.species {
        doc.set_attribute(card, "data-species", species);
    }
    doc.append_child(wrapper, card);

    let title = doc.create_element("h5");
    doc.add_class(title, opts.name_class());
    doc.set_text(title, &item.name);
    doc.append_child(card, title);

    let price = doc.create_element("p");
    doc.add_class(price, opts.price_class());
    doc.set_text(price, &item.price);
    doc.append_child(card, price);

    let button = doc.create_element("button");
    doc.add_class(button, "btn");
    doc.add_class(button, "add-to-cart");
    doc.set_attribute(button, "data-product-id", &item.id.to_string());
    doc.set_attribute(button, "data-product-name", &item.name);
    doc.append_child(card, button);

    wrapper
}
