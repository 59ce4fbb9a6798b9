use product_store::domain::product;
use product_store::infra::config;
use product_store::{CollectionStore, JsonFileStore};

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight\n\
         \n\
         Reads env vars (all optional):\n\
           PORT (default 3000), HOST (default 0.0.0.0), PRODUCTS_FILE (default products.json)\n\
         and checks that the products file can be loaded.\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    let addr = config::bind_addr()?;
    let data_file = config::data_file();

    println!("> Preflight:");
    println!("  bind address = {}", addr);
    println!("  PRODUCTS_FILE = {}", data_file.display());

    if !data_file.exists() {
        println!("  products file does not exist yet (it will be created on the first write)");
        return Ok(());
    }

    let store = JsonFileStore::new(&data_file);
    let products = store
        .load()
        .await
        .map_err(|e| anyhow::anyhow!("products file check failed: {}", e))?;
    let in_stock = products.iter().filter(|p| p.in_stock).count();
    let next_id = product::next_id(&products)
        .ok_or_else(|| anyhow::anyhow!("products file already uses the maximum id"))?;
    println!(
        "  products: {} ({} in stock), next id = {}",
        products.len(),
        in_stock,
        next_id
    );

    let mut ids: Vec<u64> = products.iter().map(|p| p.id).collect();
    ids.sort_unstable();
    ids.dedup();
    if ids.len() != products.len() {
        anyhow::bail!("products file contains duplicate ids");
    }

    println!("> Preflight OK");
    Ok(())
}
