use storefront_app::demo;
use storefront_catalog::{CategoryFilter, ProductId};

fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let mut session = demo::session()?;
    tracing::info!(store = %session.store().name, "storefront session ready");

    println!("{}", serde_json::to_string_pretty(&session.sidebar()?)?);

    // A short scripted interaction mirroring the sidebar controls.
    let garlic_bread: ProductId = "garlic-bread".parse()?;
    session.add_suggested(&garlic_bread)?;
    session.add_suggested(&garlic_bread)?;

    let pizza: ProductId = "margherita-pizza".parse()?;
    session.increment(&pizza)?;

    let salad: ProductId = "caesar-salad".parse()?;
    session.remove(&salad)?;

    println!("{}", serde_json::to_string_pretty(&session.sidebar()?)?);

    let hits = session.catalog().search("pizza", CategoryFilter::All);
    tracing::info!(hits = hits.len(), "catalog search for \"pizza\"");

    Ok(())
}
