use anyhow::Context;
use clap::Parser;
use storefront_ui::utils::{logger, validation::Validate};
use storefront_ui::{
    CatalogItem, CliConfig, ElementRole, Event, ItemRecord, Storefront, SystemClock, TokioDelay,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting storefront-ui demo");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let items = match &config.catalog {
        Some(path) => load_catalog(path)?,
        None => sample_catalog(),
    };
    tracing::info!("Loaded {} catalog items", items.len());

    let sort_value = config.sort.clone();
    let species = config.species.clone();
    let export_path = config.export_csv.clone();

    let mut store = Storefront::new(config, SystemClock, &items);

    store.dispatch(Event::change(ElementRole::SortSelect, &sort_value));
    if let Some(species) = &species {
        store.dispatch(Event::change(ElementRole::SpeciesFilter, species));
    }

    let records = store.records();
    println!("Listing order ({}):", sort_value);
    for (position, record) in records.iter().enumerate() {
        if record.price.is_nan() {
            println!("  {}. {} (price unavailable)", position + 1, record.name);
        } else {
            println!("  {}. {} ({:.2})", position + 1, record.name, record.price);
        }
    }

    if let Some(path) = &export_path {
        export_csv(&records, path)?;
        println!("Order exported to: {}", path);
    }

    // Play one add-to-cart confirmation through its full lifecycle.
    if let Some(wrapper) = store.doc().children(store.container()).first().copied() {
        if let Some(button) = store.doc().find_by_class(wrapper, "add-to-cart") {
            store.dispatch(Event::click(ElementRole::AddToCart, button));
            tracing::info!("Waiting for the cart confirmation to expire");
            store.run_toasts(&TokioDelay).await;
        }
    }

    tracing::info!("Done");
    Ok(())
}

fn load_catalog(path: &str) -> anyhow::Result<Vec<CatalogItem>> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading catalog file {}", path))?;
    let items: Vec<CatalogItem> =
        serde_json::from_str(&content).with_context(|| format!("parsing catalog file {}", path))?;
    Ok(items)
}

fn sample_catalog() -> Vec<CatalogItem> {
    let entries = [
        (1, "Bravo Chew Toy", "$10.00", "dog"),
        (2, "Alpha Scratching Post", "$5.00", "cat"),
        (3, "Charlie Leash", "$20.00", "dog"),
        (4, "Deluxe Aquarium", "Contact us", "fish"),
    ];
    entries
        .into_iter()
        .map(|(id, name, price, species)| CatalogItem {
            id,
            name: name.to_string(),
            price: price.to_string(),
            species: Some(species.to_string()),
        })
        .collect()
}

fn export_csv(records: &[ItemRecord], path: &str) -> storefront_ui::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["position", "name", "price"])?;
    for (position, record) in records.iter().enumerate() {
        let price = if record.price.is_nan() {
            String::new()
        } else {
            format!("{:.2}", record.price)
        };
        writer.write_record([(position + 1).to_string(), record.name.clone(), price])?;
    }
    writer.flush()?;
    Ok(())
}
