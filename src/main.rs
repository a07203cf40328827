//! # Listing Search CLI Driver
//!
//! ## Purpose
//! Command-line front end for the listing search engine: generates the
//! deterministic mock dataset, runs queries and facet filters against it,
//! and prints suggestions or formatted results.
//!
//! ## Input/Output Specification
//! - **Input**: Configuration file, command line arguments
//! - **Output**: Matching listings or suggestions on stdout
//!
//! ## Architecture Flow
//! 1. Parse command line arguments and load configuration
//! 2. Initialize logging and tracing
//! 3. Generate the in-memory listing dataset
//! 4. Run the requested suggestion or search pipeline
//! 5. Print formatted results

use anyhow::Context;
use clap::{Arg, ArgAction, Command};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use realty_search::{
    config::Config,
    engine::ListingSearchEngine,
    filter::{FacetValue, FilterSpec},
    utils::{format_area, format_won, TextUtils},
    PropertyRecord, SortKey, TransactionType,
};

fn main() -> anyhow::Result<()> {
    let matches = Command::new("realty-search-cli")
        .version("0.1.0")
        .author("Realty Search Team")
        .about("Commercial listing search over a deterministic mock dataset")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
                .default_value("config.toml"),
        )
        .arg(
            Arg::new("count")
                .short('n')
                .long("count")
                .value_name("COUNT")
                .help("Number of listings to generate")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("query")
                .short('q')
                .long("query")
                .value_name("TEXT")
                .help("Free-text search query")
                .default_value(""),
        )
        .arg(
            Arg::new("suggest")
                .long("suggest")
                .value_name("PARTIAL")
                .help("Print suggestions for a partial query and exit"),
        )
        .arg(
            Arg::new("sort")
                .short('s')
                .long("sort")
                .value_name("KEY")
                .help("Sort key: latest, price-low, price-high, area-large, area-small")
                .default_value("latest"),
        )
        .arg(
            Arg::new("price-range")
                .long("price-range")
                .value_name("BAND")
                .help("Price band, e.g. 1억이하 (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("area-range")
                .long("area-range")
                .value_name("BAND")
                .help("Area band, e.g. 10-30평 (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("transaction-type")
                .long("transaction-type")
                .value_name("TYPE")
                .help("sale/lease or 매매/임대 (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("property-type")
                .long("property-type")
                .value_name("TYPE")
                .help("office/retail/... or 사무실/상가/... (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("floor-range")
                .long("floor-range")
                .value_name("BAND")
                .help("Floor band, e.g. 저층(1-3층) (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("amenity")
                .long("amenity")
                .value_name("NAME")
                .help("Required amenity, any may match (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("feature")
                .long("feature")
                .value_name("NAME")
                .help("Special feature: 급매, 큰길가, 역세권 (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("limit")
                .short('l')
                .long("limit")
                .value_name("N")
                .help("Maximum listings to print")
                .value_parser(clap::value_parser!(usize))
                .default_value("20"),
        )
        .get_matches();

    let config_path = matches.get_one::<String>("config").unwrap();
    let mut config = Config::from_file(config_path)
        .with_context(|| format!("loading configuration from {}", config_path))?;

    if let Some(count) = matches.get_one::<usize>("count") {
        config.generator.default_count = *count;
    }

    init_logging(&config)?;
    info!("Starting realty-search-cli v0.1.0");

    let engine = ListingSearchEngine::from_config(config);
    info!(listings = engine.records().len(), "dataset generated");

    if let Some(partial) = matches.get_one::<String>("suggest") {
        for suggestion in engine.suggest(partial) {
            println!("{}", suggestion);
        }
        return Ok(());
    }

    let raw_query = matches.get_one::<String>("query").unwrap();
    engine.validate_query(raw_query)?;

    let sort_name = matches.get_one::<String>("sort").unwrap();
    let sort_key = SortKey::from_wire_name(sort_name)
        .with_context(|| format!("unknown sort key: {}", sort_name))?;

    let spec = FilterSpec {
        price_range: facet_from_args(&matches, "price-range"),
        area_range: facet_from_args(&matches, "area-range"),
        transaction_type: facet_from_args(&matches, "transaction-type"),
        property_type: facet_from_args(&matches, "property-type"),
        floor_range: facet_from_args(&matches, "floor-range"),
        amenities: facet_from_args(&matches, "amenity"),
        special_feature: facet_from_args(&matches, "feature"),
    };

    let results = engine.search(raw_query, &spec, sort_key);
    let limit = *matches.get_one::<usize>("limit").unwrap();

    for record in results.iter().take(limit) {
        println!("{}", format_listing(record));
    }
    println!("{} listings matched", results.len());

    Ok(())
}

/// Collect a repeatable facet argument into a `FacetValue`
fn facet_from_args(matches: &clap::ArgMatches, name: &str) -> FacetValue {
    match matches.get_many::<String>(name) {
        Some(values) => FacetValue::Many(values.cloned().collect()),
        None => FacetValue::Absent,
    }
}

/// One-line display form of a listing
fn format_listing(record: &PropertyRecord) -> String {
    let pricing = match record.transaction_type {
        TransactionType::Sale => format!("매매 {}", format_won(record.price.unwrap_or(0))),
        TransactionType::Lease => format!(
            "임대 보증금 {} / 월 {}",
            format_won(record.deposit.unwrap_or(0)),
            format_won(record.monthly_rent.unwrap_or(0))
        ),
    };
    format!(
        "{:<40} | {} | {} | {}",
        TextUtils::truncate(&record.title, 36),
        pricing,
        format_area(record.area),
        record.address
    )
}

/// Initialize logging and tracing
fn init_logging(config: &Config) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&config.logging.level))
        .context("building log filter")?;

    if config.logging.json_format {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true).json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .init();
    }

    Ok(())
}
