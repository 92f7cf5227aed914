use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use storefront_ui::{
    CatalogItem, Clock, DefaultOptions, Delay, ElementRole, Event, Storefront,
};

#[derive(Clone)]
struct ManualClock(Arc<Mutex<Instant>>);

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.0.lock().unwrap()
    }
}

struct ManualDelay(ManualClock);

#[async_trait]
impl Delay for ManualDelay {
    async fn sleep(&self, duration: Duration) {
        *self.0 .0.lock().unwrap() += duration;
    }
}

fn catalog() -> Vec<CatalogItem> {
    [
        (1, "Bravo Chew Toy", "$10.00", "dog"),
        (2, "Alpha Scratching Post", "$5.00", "cat"),
        (3, "Charlie Leash", "$20.00", "dog"),
        (4, "Deluxe Aquarium", "Contact us", "fish"),
    ]
    .into_iter()
    .map(|(id, name, price, species)| CatalogItem {
        id,
        name: name.to_string(),
        price: price.to_string(),
        species: Some(species.to_string()),
    })
    .collect()
}

#[tokio::test]
async fn full_session_sort_filter_and_cart_confirmation() {
    let clock = ManualClock(Arc::new(Mutex::new(Instant::now())));
    let delay = ManualDelay(clock.clone());
    let mut store = Storefront::new(DefaultOptions::default(), clock.clone(), &catalog());

    // Sort cheapest first; the priceless item falls to the end.
    store.dispatch(Event::change(ElementRole::SortSelect, "priceAsc"));
    let names: Vec<String> = store.records().into_iter().map(|r| r.name).collect();
    assert_eq!(
        names,
        [
            "Alpha Scratching Post",
            "Bravo Chew Toy",
            "Charlie Leash",
            "Deluxe Aquarium"
        ]
    );

    // Filter to dogs only; order is untouched, the rest is hidden.
    store.dispatch(Event::change(ElementRole::SpeciesFilter, "dog"));
    let hidden: Vec<bool> = store
        .doc()
        .children(store.container())
        .iter()
        .map(|w| store.doc().has_class(*w, "d-none"))
        .collect();
    assert_eq!(hidden, [true, false, false, true]);

    // Add the first visible item to the cart and let the toast expire.
    let wrapper = store.doc().children(store.container())[1];
    let button = store.doc().find_by_class(wrapper, "add-to-cart").unwrap();
    store.dispatch(Event::click(ElementRole::AddToCart, button));
    assert_eq!(store.active_toasts(), 1);

    let body = store.doc().body();
    let toast = store.doc().find_by_class(body, "toast").unwrap();
    assert!(store.doc().has_class(toast, "show"));

    store.run_toasts(&delay).await;
    assert_eq!(store.active_toasts(), 0);
    assert!(store.doc().find_by_class(body, "toast").is_none());

    // The listing itself is unaffected by the toast lifecycle.
    let names: Vec<String> = store.records().into_iter().map(|r| r.name).collect();
    assert_eq!(names[0], "Alpha Scratching Post");
}
