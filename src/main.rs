use anyhow::Result;

use warehouse::config::Settings;
use warehouse::{Warehouse, WarehouseSummary};

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Warehouse report starting");

    let settings = Settings::load()?;
    let min_price = settings.general.min_price_in_pence;

    let warehouses: Vec<(String, Warehouse)> = settings
        .warehouses
        .iter()
        .map(|config| (config.label.clone(), config.build()))
        .collect();

    for (label, warehouse) in &warehouses {
        let summary = WarehouseSummary::new(label.as_str(), warehouse);
        println!("{}", serde_json::to_string_pretty(&summary)?);

        let filtered = warehouse.make_new_warehouse_with(min_price);
        log::info!(
            "{}: {} of {} article(s) priced at or above {}",
            label,
            filtered.number_of_articles(),
            warehouse.number_of_articles(),
            min_price
        );
    }

    let candidates: Vec<Option<&Warehouse>> = warehouses.iter().map(|(_, w)| Some(w)).collect();
    match Warehouse::most_valued_warehouse(&candidates) {
        Some(best) => {
            let label = warehouses
                .iter()
                .find(|(_, w)| std::ptr::eq(w, best))
                .map(|(label, _)| label.as_str())
                .unwrap_or("?");
            println!("Most valued: {} with {} pence", label, best.total_price_in_pence());
        }
        None => log::warn!("No warehouses configured"),
    }

    log::info!("Warehouse report finished");
    Ok(())
}
