//! Timing loop for field-object serialization.
//! Run with: cargo bench -p ga-ecommerce

use ga_ecommerce::{FieldObject, ProductFieldObject, Tracking};

fn sample_product(i: i32) -> ProductFieldObject {
    ProductFieldObject::new()
        .with_id(format!("P{i:05}"))
        .with_name("Android Warhol T-Shirt")
        .with_brand("Google")
        .with_category("Apparel/Mens/T-Shirts")
        .with_variant("Black")
        .with_price(29.2)
        .with_quantity(1)
        .with_position(i)
}

fn main() -> anyhow::Result<()> {
    let tracking = Tracking::default();
    let products: Vec<ProductFieldObject> = (1..=64).map(sample_product).collect();

    // Warmup
    for product in &products {
        product.to_command("ec:addProduct")?;
    }

    let iterations = 10_000u32;
    let start = std::time::Instant::now();
    let mut bytes = 0usize;

    for _ in 0..iterations {
        for product in &products {
            bytes += product.to_command("ec:addProduct")?.len();
        }
        bytes += tracking
            .track_promotion_click("PROMO1", "Summer Sale", Some("summer_banner_1"), Some("top"), None)?
            .len();
    }

    let elapsed = start.elapsed();
    let calls = iterations as usize * (products.len() + 1);

    println!("=== Serialization Benchmark ===");
    println!("Iterations:  {}", iterations);
    println!("Total time:  {:?}", elapsed);
    println!("Per call:    {:?}", elapsed / calls as u32);
    println!("Throughput:  {:.0} calls/sec", calls as f64 / elapsed.as_secs_f64());
    println!("Output:      {} bytes", bytes);
    Ok(())
}
