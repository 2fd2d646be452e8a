//! Server configuration, read once from the environment at startup
//!
//!   DESKGATE_POLICY  - path to a JSON policy document (default: built-in reference policy)
//!   DESKGATE_ADDR    - bind address (default: 0.0.0.0)
//!   PORT             - bind port (default: 3000)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::error::{GateError, Result};
use crate::loader::load_policy;
use crate::policy::Policy;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub policy_path: Option<PathBuf>,
    pub addr: SocketAddr,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Build from an arbitrary variable source (tests pass a map lookup)
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(var: F) -> Result<Self> {
        let policy_path = var("DESKGATE_POLICY")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);
        let ip: IpAddr = match var("DESKGATE_ADDR") {
            Some(s) => s
                .parse()
                .map_err(|_| GateError::Config(format!("DESKGATE_ADDR '{}' is not an IP address", s)))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let port: u16 = match var("PORT") {
            Some(s) => s
                .parse()
                .map_err(|_| GateError::Config(format!("PORT '{}' is not a port number", s)))?,
            None => DEFAULT_PORT,
        };
        Ok(ServerConfig { policy_path, addr: SocketAddr::new(ip, port) })
    }

    /// Load the configured policy, or the reference policy when none is set
    pub fn policy(&self) -> Result<Policy> {
        match &self.policy_path {
            Some(p) => load_policy(p),
            None => {
                tracing::info!("no DESKGATE_POLICY set, using reference policy");
                Ok(Policy::reference())
            }
        }
    }
}
