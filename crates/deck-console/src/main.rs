#![allow(non_snake_case)]

#[cfg(feature = "ssr")]
mod config {
    use std::net::{IpAddr, SocketAddr};

    use serde::Deserialize;

    #[derive(Debug, thiserror::Error)]
    pub enum ConfigError {
        #[error("failed to read {path}: {source}")]
        Read {
            path: String,
            source: std::io::Error,
        },
        #[error("failed to parse {path}: {source}")]
        Parse {
            path: String,
            source: toml::de::Error,
        },
        #[error("invalid bind address {0:?}")]
        InvalidBind(String),
    }

    #[derive(Deserialize, Clone, Debug, Default)]
    #[serde(default)]
    pub struct Config {
        pub server: ServerConfig,
    }

    #[derive(Deserialize, Clone, Debug)]
    #[serde(default)]
    pub struct ServerConfig {
        pub bind: String,
        pub port: u16,
    }

    impl Default for ServerConfig {
        fn default() -> Self {
            Self {
                bind: "127.0.0.1".into(),
                port: 3000,
            }
        }
    }

    impl ServerConfig {
        pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
            let ip: IpAddr = self
                .bind
                .parse()
                .map_err(|_| ConfigError::InvalidBind(self.bind.clone()))?;
            Ok(SocketAddr::new(ip, self.port))
        }
    }

    pub fn parse(path: &str, contents: &str) -> Result<Config, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    pub fn load(path: &str) -> Result<Config, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        parse(path, &contents)
    }

}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use deck_ui::{shell, App};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{fmt, EnvFilter};

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let configPath = if let Some(idx) = args.iter().position(|a| a == "--config") {
        args.get(idx + 1)
            .cloned()
            .unwrap_or_else(|| "config.example.toml".into())
    } else {
        "config.example.toml".into()
    };

    let appConfig = config::load(&configPath).unwrap_or_else(|e| {
        tracing::warn!("{e}, using defaults");
        config::Config::default()
    });

    let conf = get_configuration(None).expect("failed to load Leptos configuration");
    let leptosOptions = conf.leptos_options;
    let addr = appConfig.server.socket_addr().unwrap_or_else(|e| {
        tracing::warn!("{e}, falling back to {}", leptosOptions.site_addr);
        leptosOptions.site_addr
    });
    tracing::info!("loaded config from {configPath}: bind={addr}");

    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptosOptions, routes, {
            let leptosOptions = leptosOptions.clone();
            move || shell(leptosOptions.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptosOptions)
        .merge(deck_api::api_router())
        .layer(TraceLayer::new_for_http());

    tracing::info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server exited with error");
}

#[cfg(not(feature = "ssr"))]
fn main() {}
