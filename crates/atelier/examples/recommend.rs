use atelier::{
    RecommendationCategory, config::AtelierConfig, service::Prediction,
    service::RecommendationService,
};

/// # Recommend – the full fallback chain from the environment
///
/// Reads every configured provider (Groq, then Gemini, then the custom
/// gateway), asks for colors and styles for one prediction and prints which
/// provider answered.
///
/// ```bash
/// export GROQ_API_KEY=gsk_…       # any subset of the three keys works
/// export GEMINI_API_KEY=…
/// RUST_LOG=atelier_core=info cargo run -p atelier --example recommend -- Medium Hourglass
/// ```
///
/// With no key set the chain is empty and both parts come back as `None`.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    atelier::telemetry::init_tracing();

    let mut args = std::env::args().skip(1);
    let skin_tone = args.next().unwrap_or_else(|| "Medium".to_owned());
    let body_type = args.next().unwrap_or_else(|| "Hourglass".to_owned());

    let service = RecommendationService::from_config(&AtelierConfig::from_env()?);
    println!("Providers: {:?}", service.chain().provider_names());

    // Strict call: surfaces every provider failure.
    match service
        .recommend(&RecommendationCategory::color(skin_tone.as_str())?)
        .await
    {
        Ok(colors) => println!("{} → {:?}", colors.provider, colors.items),
        Err(error) => {
            println!("Color recommendations failed: {error}");
            for failure in error.failures() {
                println!("  {failure}");
            }
        }
    }

    // Best-effort call used by the prediction flow.
    let enrichment = service
        .enrich(&Prediction {
            skin_tone: Some(skin_tone),
            body_type: Some(body_type),
        })
        .await;
    println!("{}", serde_json::to_string_pretty(&enrichment)?);

    Ok(())
}
