use calxc::Calxc;
use std::io::stderr;
use tracing::metadata::LevelFilter;
use tracing::{debug, trace};
use tracing_error::ErrorLayer;
use tracing_subscriber::fmt::format;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{Layer, Registry};

/// The program compiled by this binary
const SOURCE: &str = "int x = (2 + 3) * 4;";

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    init_logging(LevelFilter::INFO)?;
    debug!("calxc version: {}", env!("CARGO_PKG_VERSION"));
    trace!("compiling {SOURCE:?}");

    let calxc = Calxc::builder().build();
    let compilation = calxc
        .compile(SOURCE)
        .map_err(|e| eyre::eyre!("{}", e.report(SOURCE)))?;

    println!("Tokens:");
    println!("{}", compilation.tokens());
    println!();
    println!("Optimized tokens:");
    println!("{}", compilation.optimized());

    Ok(())
}

fn init_logging(level_filter: LevelFilter) -> eyre::Result<()> {
    let registry = Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format().with_target(false))
                .with_writer(stderr)
                .with_filter(level_filter),
        )
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(registry)?;

    Ok(())
}
