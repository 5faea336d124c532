/// Tunecast web server
///
/// Axum server that renders the Leptos application with SSR and serves the
/// compiled client bundle.

#[cfg(feature = "ssr")]
mod server {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use axum::Router;
    use clap::Parser;
    use leptos::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::services::ServeDir;
    use tower_http::trace::TraceLayer;
    use tracing::info;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    use tunecast_common::config::{LoggingSettings, ServerConfig};
    use tunecast_web::app::*;

    /// Tunecast marketing site and customer dashboard
    #[derive(Parser)]
    #[command(name = "tunecast-web")]
    #[command(version)]
    struct Cli {
        /// Configuration file path
        #[arg(short, long, default_value = "tunecast.yaml")]
        config: PathBuf,

        /// Log level, overrides the config file
        #[arg(long)]
        log_level: Option<String>,

        /// Enable JSON logging
        #[arg(long)]
        json_logs: bool,
    }

    fn init_logging(settings: &LoggingSettings) -> Result<()> {
        let level = settings
            .level
            .parse::<tracing::Level>()
            .map_err(|_| anyhow::anyhow!("Invalid log level: {}", settings.level))?;

        let registry = tracing_subscriber::registry()
            .with(tracing_subscriber::filter::LevelFilter::from_level(level));

        if settings.json {
            registry.with(tracing_subscriber::fmt::layer().json()).init();
        } else {
            registry.with(tracing_subscriber::fmt::layer().pretty()).init();
        }

        Ok(())
    }

    pub async fn run() -> Result<()> {
        let cli = Cli::parse();

        let mut config = ServerConfig::load(&cli.config)?;
        if let Some(level) = cli.log_level {
            config.logging.level = level;
        }
        if cli.json_logs {
            config.logging.json = true;
        }
        init_logging(&config.logging)?;

        info!("Tunecast web starting");
        info!("Version: {}", env!("CARGO_PKG_VERSION"));

        // `get_configuration(None)` reads cargo-leptos's env values
        let conf = get_configuration(None)
            .await
            .context("Failed to read Leptos configuration")?;
        let mut leptos_options = conf.leptos_options;
        if let Some(listen_addr) = &config.server.listen_addr {
            leptos_options.site_addr = listen_addr
                .parse()
                .with_context(|| format!("Invalid listen address: {}", listen_addr))?;
        }
        let addr = leptos_options.site_addr;
        let routes = generate_route_list(App);

        let mut app = Router::new()
            .leptos_routes(&leptos_options, routes, App)
            .fallback_service(ServeDir::new(&*leptos_options.site_root))
            .with_state(leptos_options);

        if config.server.request_tracing {
            app = app.layer(TraceLayer::new_for_http());
        }

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        info!("Listening on http://{}", addr);

        axum::serve(listener, app.into_make_service())
            .await
            .context("Server error")?;

        Ok(())
    }
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::run().await
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // Client-side entry point is `hydrate` in lib.rs
}
