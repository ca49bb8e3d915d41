use clap::Parser;
use safe_chain::utils::error::ErrorSeverity;
use safe_chain::utils::{logger, validation::Validate};
use safe_chain::{CatalogConfig, CatalogError, CliConfig, ItemResolver};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(config).await {
        tracing::error!(
            "❌ Lookup failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

async fn run(config: CliConfig) -> Result<(), CatalogError> {
    config.validate()?;
    let field = config.item_field()?;

    let catalog = match &config.catalog {
        Some(path) => {
            tracing::info!("📂 Loading catalog from {}", path);
            CatalogConfig::from_file(path)?
        }
        None => {
            tracing::info!("📂 No catalog given, using built-in sample items");
            CatalogConfig::sample()
        }
    };
    catalog.validate()?;

    let fallback = config.fallback_for(&catalog);
    let resolver = Arc::new(ItemResolver::new(catalog.into_source()));
    let ids = config.ids_for(resolver.source())?;

    if config.trace {
        let traced = resolver.trace_ids(&ids, field)?;
        if config.json {
            println!("{}", serde_json::to_string_pretty(&traced)?);
            return Ok(());
        }
        for entry in &traced {
            match entry.absent_link {
                None => println!("{}: {}", entry.id, entry.value_or(&fallback)),
                Some(link) => println!(
                    "{}: {} (absent at '{}', {}/{} links resolved)",
                    entry.id,
                    fallback,
                    link,
                    entry.depth,
                    field.links() + 1
                ),
            }
        }
        return Ok(());
    }

    let resolved = resolver.resolve_async(ids, field).await?;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    } else {
        for entry in &resolved {
            println!("{}: {}", entry.id, entry.value_or(&fallback));
        }
    }

    Ok(())
}
