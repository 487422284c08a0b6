use std::{net::SocketAddr, time::Duration};

use ifsc_finder_bank_data::{provider::razorpay::DEFAULT_BASE_URL, CapabilityPolicy};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub provider_url: String,
    pub provider_timeout: Option<Duration>,
    pub capability_policy: CapabilityPolicy,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("IFSC_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid IFSC_LISTEN_ADDR");
        let provider_url =
            std::env::var("IFSC_PROVIDER_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        // Unset means the outbound request is never cut short
        let provider_timeout = std::env::var("IFSC_PROVIDER_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_millis);
        let capability_policy: CapabilityPolicy = std::env::var("IFSC_CAPABILITY_POLICY")
            .unwrap_or_else(|_| "optimistic".to_string())
            .parse()
            .expect("Invalid IFSC_CAPABILITY_POLICY");
        let cors_allow = std::env::var("IFSC_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("IFSC_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let static_dir = std::env::var("IFSC_STATIC_DIR").unwrap_or_else(|_| "dist".into());
        Self {
            listen_addr,
            provider_url,
            provider_timeout,
            capability_policy,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            static_dir,
        }
    }
}
