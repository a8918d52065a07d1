use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tablet_layout::config::Config;
use tablet_layout::layout::AreaPurpose;
use tablet_layout::{get_template_config, layout_columns, ScriptNormalizer};

const USAGE: &str = "usage: tablet-preview <template-id> <area-id> <text>";

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("tablet_layout={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [template_id, area_id, text] = args.as_slice() else {
        bail!("{USAGE}");
    };

    let template = get_template_config(template_id)
        .with_context(|| format!("cannot preview template '{template_id}'"))?;
    let area = template.area(area_id)?;

    let normalizer = ScriptNormalizer::from_config(&config);
    info!(
        locale = ?normalizer.locale(),
        policy = %normalizer.policy(),
        "Previewing {template_id}/{area_id}"
    );

    let conversion = normalizer.convert_to_traditional(text).await;
    let text = conversion.text();
    let multi_column = area.purpose == AreaPurpose::Main && template.allows_multi_column();
    let layout = layout_columns(text, area, multi_column);

    let output = serde_json::json!({
        "template": template,
        "area": area,
        "text": text,
        "conversionFallback": conversion.is_fallback(),
        "layout": layout,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
