use std::env;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

use crate::optimizer::AdvisorConfig;

/// Complete application configuration, loaded from environment variables or default values.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub advisor: AdvisorSettings,
}

impl AppConfig {
    /// Creates a configuration from the currently available environment variables.
    pub fn from_env() -> Self {
        Self {
            api: ApiConfig::from_env(),
            advisor: AdvisorSettings::from_env(),
        }
    }
}

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    bind_ip: IpAddr,
    display_host: String,
    port: u16,
}

impl ApiConfig {
    const DEFAULT_HOST: &'static str = "0.0.0.0";
    const DEFAULT_PORT: u16 = 8080;
    const HOST_VAR: &'static str = "BOX_ADVISOR_API_HOST";
    const PORT_VAR: &'static str = "BOX_ADVISOR_API_PORT";

    fn from_env() -> Self {
        Self::from_values(env_string(Self::HOST_VAR), env_string(Self::PORT_VAR))
    }

    fn from_values(host: Option<String>, port: Option<String>) -> Self {
        let default_ip = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
        let host_value = host.unwrap_or_else(|| Self::DEFAULT_HOST.to_string());
        let (bind_ip, effective_host) = match host_value.parse::<IpAddr>() {
            Ok(ip) => (ip, host_value),
            Err(err) => {
                tracing::warn!(
                    var = Self::HOST_VAR,
                    value = %host_value,
                    %err,
                    "could not parse host, using {}",
                    Self::DEFAULT_HOST
                );
                (default_ip, Self::DEFAULT_HOST.to_string())
            }
        };

        let port = match port {
            Some(raw) => match raw.parse::<u16>() {
                Ok(value) if value != 0 => value,
                Ok(_) => {
                    tracing::warn!(
                        var = Self::PORT_VAR,
                        "port must not be 0, using {}",
                        Self::DEFAULT_PORT
                    );
                    Self::DEFAULT_PORT
                }
                Err(err) => {
                    tracing::warn!(
                        var = Self::PORT_VAR,
                        value = %raw,
                        %err,
                        "could not parse port, using {}",
                        Self::DEFAULT_PORT
                    );
                    Self::DEFAULT_PORT
                }
            },
            None => Self::DEFAULT_PORT,
        };

        Self {
            bind_ip,
            display_host: effective_host,
            port,
        }
    }

    /// Socket address to bind the server to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_ip, self.port)
    }

    /// Visible hostname for logging and hints.
    pub fn display_host(&self) -> &str {
        &self.display_host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Indicates whether binding to all interfaces.
    pub fn binds_to_all_interfaces(&self) -> bool {
        match self.bind_ip {
            IpAddr::V4(addr) => addr == Ipv4Addr::UNSPECIFIED,
            IpAddr::V6(addr) => addr == Ipv6Addr::UNSPECIFIED,
        }
    }
}

/// Tunables of the selection algorithm.
#[derive(Clone, Debug, Default)]
pub struct AdvisorSettings {
    advisor: AdvisorConfig,
}

impl AdvisorSettings {
    const VOLUME_TOLERANCE_VAR: &'static str = "BOX_ADVISOR_VOLUME_TIE_TOLERANCE";
    const HEIGHT_TOLERANCE_VAR: &'static str = "BOX_ADVISOR_HEIGHT_TIE_TOLERANCE";
    const REJECTION_PROXIMITY_VAR: &'static str = "BOX_ADVISOR_REJECTION_PROXIMITY";
    const MAX_REJECTED_VAR: &'static str = "BOX_ADVISOR_MAX_REJECTED";
    const WEIGHT_MULTIPLIER_VAR: &'static str = "BOX_ADVISOR_TELESCOPING_WEIGHT_MULTIPLIER";
    const WARDROBE_VAR: &'static str = "BOX_ADVISOR_ALLOW_WARDROBE_TELESCOPING";

    fn from_env() -> Self {
        let volume_tie_tolerance = load_f64_with_warning(
            Self::VOLUME_TOLERANCE_VAR,
            AdvisorConfig::DEFAULT_VOLUME_TIE_TOLERANCE,
            |value| value >= 0.0,
            "must not be negative",
            "Adjusted volume tolerance changes which box wins near ties",
        );

        let height_tie_tolerance = load_f64_with_warning(
            Self::HEIGHT_TOLERANCE_VAR,
            AdvisorConfig::DEFAULT_HEIGHT_TIE_TOLERANCE,
            |value| value >= 0.0,
            "must not be negative",
            "Adjusted height tolerance changes which box wins near ties",
        );

        let rejection_proximity = load_f64_with_warning(
            Self::REJECTION_PROXIMITY_VAR,
            AdvisorConfig::DEFAULT_REJECTION_PROXIMITY,
            |value| value >= 0.0,
            "must not be negative",
            "Adjusted proximity changes which near misses are explained",
        );

        let max_rejected = env_string(Self::MAX_REJECTED_VAR)
            .and_then(|raw| parse_usize(&raw, Self::MAX_REJECTED_VAR))
            .unwrap_or(AdvisorConfig::DEFAULT_MAX_REJECTED);

        let telescoping_weight_multiplier = load_f64_with_warning(
            Self::WEIGHT_MULTIPLIER_VAR,
            AdvisorConfig::DEFAULT_TELESCOPING_WEIGHT_MULTIPLIER,
            |value| (1.0..=2.0).contains(&value),
            "must be between 1 and 2",
            "Adjusted telescoping capacity may overload joined boxes",
        );

        let allow_wardrobe_telescoping = env_string(Self::WARDROBE_VAR)
            .and_then(|raw| parse_bool(&raw, Self::WARDROBE_VAR))
            .unwrap_or(AdvisorConfig::DEFAULT_ALLOW_WARDROBE_TELESCOPING);

        let advisor = AdvisorConfig::builder()
            .volume_tie_tolerance(volume_tie_tolerance)
            .height_tie_tolerance(height_tie_tolerance)
            .rejection_proximity(rejection_proximity)
            .max_rejected(max_rejected)
            .telescoping_weight_multiplier(telescoping_weight_multiplier)
            .allow_wardrobe_telescoping(allow_wardrobe_telescoping)
            .build();

        Self { advisor }
    }

    /// Returns the configured AdvisorConfig.
    pub fn advisor_config(&self) -> AdvisorConfig {
        self.advisor
    }
}

fn env_string(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_owned())
            }
        }
        Err(env::VarError::NotPresent) => None,
        Err(err) => {
            tracing::warn!(var = name, %err, "could not read variable, using default value");
            None
        }
    }
}

fn parse_bool(raw: &str, var_name: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Some(true),
        "0" | "false" | "no" | "n" | "off" => Some(false),
        other => {
            tracing::warn!(
                var = var_name,
                value = other,
                "could not interpret value as boolean, using default value"
            );
            None
        }
    }
}

fn parse_usize(raw: &str, var_name: &str) -> Option<usize> {
    match raw.trim().parse::<usize>() {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(
                var = var_name,
                value = raw,
                %err,
                "could not parse count, using default value"
            );
            None
        }
    }
}

fn parse_f64_checked(
    raw: &str,
    var_name: &str,
    default: f64,
    validator: impl Fn(f64) -> bool,
    invalid_hint: &str,
) -> f64 {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && validator(value) => value,
        Ok(_) => {
            tracing::warn!(
                var = var_name,
                value = raw,
                "invalid value ({}), using {}",
                invalid_hint,
                default
            );
            default
        }
        Err(err) => {
            tracing::warn!(
                var = var_name,
                value = raw,
                %err,
                "could not parse number, using {}",
                default
            );
            default
        }
    }
}

fn load_f64_with_warning(
    var_name: &str,
    default: f64,
    validator: impl Fn(f64) -> bool,
    invalid_hint: &str,
    warning: &str,
) -> f64 {
    match env_string(var_name) {
        Some(raw) => {
            let value = parse_f64_checked(&raw, var_name, default, validator, invalid_hint);
            let tolerance = (default.abs().max(1.0)) * 1e-9;
            if (value - default).abs() > tolerance {
                tracing::warn!(var = var_name, value, "{}", warning);
            }
            value
        }
        None => default,
    }
}
