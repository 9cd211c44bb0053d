use clap::Parser;
use pizza_me::domain::ports::{ConfigProvider, LocationProvider};
use pizza_me::utils::{logger, validation::Validate};
use pizza_me::{
    render, CliConfig, FinderEngine, FixedLocation, HttpLocationProvider, HttpSearchService,
    RestaurantList, Settings, SortOrder,
};
use std::io::BufRead;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting pizza-me");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = match Settings::resolve(cli) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Failed to resolve configuration: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let timeout = Duration::from_secs(settings.timeout_seconds());
    let search = HttpSearchService::new(settings.search_endpoint().to_string(), timeout)?;
    let locator: Box<dyn LocationProvider> = match &settings.zip {
        Some(zip) => {
            tracing::info!("Using fixed zip {}", zip);
            Box::new(FixedLocation::new(zip.clone()))
        }
        None => Box::new(HttpLocationProvider::new(
            settings.location_endpoint().to_string(),
            timeout,
        )?),
    };

    println!("🍕 Searching for pizza near you...");
    let mut engine = FinderEngine::new(locator, search);

    match engine.run().await {
        Ok(mut list) => {
            let order = settings.sort;
            order.apply(&mut list);
            tracing::info!("Found {} restaurants", list.count());
            show(&list, order, &settings);
            if settings.interactive {
                sort_loop(&mut list, order, &settings);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Search failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn show(list: &RestaurantList, order: SortOrder, settings: &Settings) {
    println!();
    print!("{}", render::render_table(list, settings.limit));
    if settings.interactive {
        println!();
        println!("{}", render::render_footer(order));
    }
}

/// Re-sorts the existing model in place per user keystroke and re-renders.
/// The model is never rebuilt here; only its order changes.
fn sort_loop(list: &mut RestaurantList, mut order: SortOrder, settings: &Settings) {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        match line.trim() {
            "d" => order = SortOrder::Distance,
            "n" => order = SortOrder::Name,
            "q" => break,
            "" => continue,
            other => {
                println!("Unknown command '{}'. Use d, n, or q.", other);
                continue;
            }
        }
        order.apply(list);
        show(list, order, settings);
    }
}
