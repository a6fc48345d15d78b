use atelier::{
    config::AtelierConfig,
    redirect::{Brand, Product},
};

/// # Redirect – where does a product click go?
///
/// Builds a few product/brand records and prints the destination chosen for
/// each, together with the candidate that won.
///
/// ```bash
/// ATELIER_HOMEPAGE_URL=https://shop.example cargo run -p atelier --example redirect
/// ```
fn main() -> anyhow::Result<()> {
    let resolver = AtelierConfig::from_env()?.redirect_resolver();

    let brand = Brand {
        name: "Kain Studio".into(),
        whatsapp_number: Some("0812-3456-7890".into()),
        website_url: Some("https://kainstudio.id".into()),
        ..Brand::default()
    };

    let products = [
        Product {
            name: "Linen Shirt".into(),
            whatsapp_message_template: Some(
                "Hello {brand_name}, do you have {product_name} in size M?".into(),
            ),
            ..Product::default()
        },
        Product {
            name: "Batik Blazer".into(),
            shopee_url: Some("https://shopee.co.id/kainstudio/batik-blazer".into()),
            ..Product::default()
        },
        Product {
            name: "Wide Trousers".into(),
            ..Product::default()
        },
    ];

    for product in &products {
        let resolution = resolver.resolve(product, &brand);
        println!("{:<14} [{}] {}", product.name, resolution.source, resolution.url);
    }

    let unknown = resolver.resolve(&Product::default(), &Brand::default());
    println!("{:<14} [{}] {}", "(no data)", unknown.source, unknown.url);

    Ok(())
}
