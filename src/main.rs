//! Mini Cache - demo workload
//!
//! Fills a shared cache with synthetic values under the configured byte
//! budget and prints the resulting statistics as JSON.

use anyhow::Context;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mini_cache::{ByteView, Config, SharedCache};

/// Runs the demo workload.
///
/// # Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the shared cache with an eviction hook
/// 4. Insert `entry_count` values of `value_size` bytes
/// 5. Read back every tenth key
/// 6. Print statistics as JSON on stdout
fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mini_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::try_from_env().context("failed to load configuration")?;
    info!(
        "Configuration loaded: max_bytes={}, entry_count={}, value_size={}",
        config.max_bytes, config.entry_count, config.value_size
    );

    let cache = SharedCache::with_eviction_hook(config.max_bytes, |key: String, value: ByteView| {
        debug!(%key, bytes = value.len(), "evicted");
    });

    let payload = vec![b'x'; config.value_size];
    for i in 0..config.entry_count {
        cache.add(format!("key{}", i), ByteView::from(payload.as_slice()));
    }
    info!("Inserted {} entries, {} resident", config.entry_count, cache.len());

    for i in (0..config.entry_count).step_by(10) {
        cache.get(&format!("key{}", i));
    }

    let stats = cache.stats();
    info!(
        "Hit rate {:.2}, {} evictions, {}/{} bytes used",
        stats.hit_rate(),
        stats.evictions,
        stats.used_bytes,
        stats.max_bytes
    );

    let json = serde_json::to_string_pretty(&stats).context("failed to encode statistics")?;
    println!("{}", json);

    Ok(())
}
