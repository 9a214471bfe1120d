//! deployer-spi — request types handed to application deployers.
//!
//! A deployer scales a running deployment by receiving a [`ScaleRequest`]:
//! the target deployment ID, the desired instance count, and optional
//! deployer-specific properties such as resource overrides.
//!
//! # Validation
//!
//! Requests are checked once, when they are built:
//!
//! ```text
//! deployment_id blank       -> RequestError::InvalidArgument
//! desired_instance_count < 0 -> RequestError::InvalidState
//! ```
//!
//! A constructed request is immutable and `Send + Sync`, so it can be shared
//! across tasks behind an `Arc` without locking.
//!
//! ```
//! use deployer_spi::{ScaleProperties, ScaleRequest};
//! use serde_json::json;
//!
//! let props = ScaleProperties::from([("memory".to_string(), json!("512Mi"))]);
//! let req = ScaleRequest::with_properties("app-1", 5, Some(props)).unwrap();
//! assert_eq!(req.desired_instance_count(), 5);
//! assert_eq!(req.property("memory"), Some(&json!("512Mi")));
//! ```

pub mod error;
pub mod request;

pub use error::{RequestError, RequestResult};
pub use request::{ScaleProperties, ScaleRequest};
