use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::extract::Request;
use axum::ServiceExt;
use clap::Parser;
use tracing::{info, Level};

mod api;
mod model;

#[derive(Debug, Parser)]
#[command(version, about = "Serves the guide catalog as JSON")]
struct App {
    #[arg(short = 'H', long, env = "GUIDES_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    host: IpAddr,
    #[arg(short, long, env = "GUIDES_PORT", default_value_t = 3000)]
    port: u16,
    #[arg(short, long, env = "GUIDES_LOG_LEVEL", default_value_t = Level::INFO)]
    log_level: Level,
}

impl App {
    fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[tokio::main]
async fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;

    let args = App::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    let app = api::get_api();

    let listener = tokio::net::TcpListener::bind(args.addr()).await?;
    info!(addr = %listener.local_addr()?, "Listening");

    Ok(axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENV_VARS: [&str; 3] = ["GUIDES_HOST", "GUIDES_PORT", "GUIDES_LOG_LEVEL"];

    // Only test that touches the GUIDES_* variables, so defaults and overrides can't race.
    #[test]
    fn env_replaces_defaults_and_flags_win() {
        for var in ENV_VARS {
            std::env::remove_var(var);
        }

        let args = App::try_parse_from(["guides-rs"]).unwrap();
        assert_eq!(args.addr(), "0.0.0.0:3000".parse().unwrap());
        assert_eq!(args.log_level, Level::INFO);

        std::env::set_var("GUIDES_HOST", "127.0.0.1");
        std::env::set_var("GUIDES_PORT", "4000");
        std::env::set_var("GUIDES_LOG_LEVEL", "warn");

        let args = App::try_parse_from(["guides-rs"]).unwrap();
        assert_eq!(args.addr(), "127.0.0.1:4000".parse().unwrap());
        assert_eq!(args.log_level, Level::WARN);

        let args = App::try_parse_from(["guides-rs", "--port", "5000"]).unwrap();
        assert_eq!(args.addr(), "127.0.0.1:5000".parse().unwrap());
        assert_eq!(args.log_level, Level::WARN);

        for var in ENV_VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn flags_override_defaults() {
        let args = App::try_parse_from([
            "guides-rs",
            "--host",
            "127.0.0.1",
            "-p",
            "8080",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(args.addr(), "127.0.0.1:8080".parse().unwrap());
        assert_eq!(args.log_level, Level::DEBUG);
    }

    #[test]
    fn rejects_invalid_port() {
        assert!(App::try_parse_from(["guides-rs", "--port", "http"]).is_err());
    }

    #[test]
    fn rejects_unknown_log_level() {
        assert!(App::try_parse_from(["guides-rs", "--log-level", "loud"]).is_err());
    }
}
