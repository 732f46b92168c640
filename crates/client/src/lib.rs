//! # Tricorn Client
//!
//! The request pipeline of the tricorn workspace: session handles, the
//! retrying request executor, the raw and typed endpoint surfaces, the
//! OAuth2 primitives, the manifest subsystem, and a handle pool.
//!
//! Two altitudes over one transport:
//! - [`RestClient`] — the raw surface; every method returns the decoded
//!   `Response` payload as [`serde_json::Value`].
//! - [`Client`] — the typed surface; every method returns a domain
//!   object from `tricorn_domain`.
//!
//! ```no_run
//! use tricorn_client::{Client, Settings};
//!
//! # async fn run() -> tricorn_domain::TricornResult<()> {
//! let client = Client::new(Settings::new("api-key")?);
//! let user = client.fetch_bungie_user(20315338).await?;
//! println!("{}", user.name);
//! client.close();
//! # Ok(())
//! # }
//! ```

pub mod backoff;
pub mod client;
mod endpoints;
mod error;
pub mod manifest;
pub mod oauth;
pub mod pool;
pub mod rest;
pub mod settings;

pub use backoff::ExponentialBackoff;
pub use client::Client;
pub use manifest::Manifest;
pub use oauth::{OAuthToken, OAuthUrl};
pub use pool::{ClientPool, PooledClient};
pub use rest::{Base, RequestOptions, RestClient};
pub use settings::{Settings, SettingsBuilder};

pub use tricorn_domain::{TricornError, TricornResult};
