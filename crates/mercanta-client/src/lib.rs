//! # mercanta-client
//!
//! Transport core for the Mercanta B2B marketplace API.
//!
//! One request gateway with uniform auth and error semantics: bearer-token
//! injection, 401/403 interception with a caller-supplied logout hook, JSON
//! or multipart bodies, and lenient response parsing. Typed endpoint
//! wrappers live in `mercanta-api`; this crate is the layer they all go
//! through.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mercanta_client::{ApiClient, ApiConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::with_config(ApiConfig::from_env());
//!     let categories = client.get("/api/v1/categories").send().await?;
//!     println!("{}", categories);
//!     Ok(())
//! }
//! ```

pub mod body;
pub mod config;
pub mod envelope;
pub mod error;
pub mod gateway;
pub mod session;

pub use body::RequestBody;
pub use config::{ApiConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use envelope::Envelope;
pub use error::{ApiError, ApiResult, REQUEST_FAILED_MESSAGE, SESSION_EXPIRED_MESSAGE};
pub use gateway::{ApiClient, ApiRequest};
pub use session::{FileTokenStorage, SessionStore, TokenStorage};
