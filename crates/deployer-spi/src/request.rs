//! Scale request — the intent to change a deployment's instance count.
//!
//! A `ScaleRequest` is validated once, at construction, and is immutable
//! afterwards. Deployers read it through the accessors and interpret the
//! optional properties however their target runtime requires.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{RequestError, RequestResult};

/// Deployer-specific parameters for a scale operation (e.g. resource
/// overrides). Keys and values are opaque to this crate.
pub type ScaleProperties = HashMap<String, Value>;

/// A request to scale one deployment to a desired number of instances.
///
/// Properties are owned by the request. A caller that needs to keep its
/// own copy of the map clones it before construction; the clone is deep.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleRequest {
    deployment_id: String,
    desired_instance_count: u32,
    properties: Option<ScaleProperties>,
}

impl ScaleRequest {
    /// Create a scale request without properties.
    ///
    /// Fails with [`RequestError::InvalidArgument`] if `deployment_id` is
    /// empty or whitespace only, and with [`RequestError::InvalidState`] if
    /// `desired_instance_count` is negative.
    pub fn new(
        deployment_id: impl Into<String>,
        desired_instance_count: i32,
    ) -> RequestResult<Self> {
        Self::with_properties(deployment_id, desired_instance_count, None)
    }

    /// Create a scale request, optionally carrying properties to apply
    /// during the scale operation.
    ///
    /// `None` means no properties. `Some` of an empty map is kept as-is and
    /// stays distinguishable from `None`.
    pub fn with_properties(
        deployment_id: impl Into<String>,
        desired_instance_count: i32,
        properties: Option<ScaleProperties>,
    ) -> RequestResult<Self> {
        let deployment_id = deployment_id.into();

        let desired = match validate(&deployment_id, desired_instance_count) {
            Ok(desired) => desired,
            Err(e) => {
                debug!(
                    deployment = %deployment_id,
                    desired = desired_instance_count,
                    error = %e,
                    "rejected scale request"
                );
                return Err(e);
            }
        };

        trace!(
            deployment = %deployment_id,
            desired,
            properties = ?properties.as_ref().map(HashMap::len),
            "scale request created"
        );

        Ok(Self {
            deployment_id,
            desired_instance_count: desired,
            properties,
        })
    }

    /// The deployment ID, exactly as supplied.
    pub fn deployment_id(&self) -> &str {
        &self.deployment_id
    }

    /// The desired instance count.
    pub fn desired_instance_count(&self) -> u32 {
        self.desired_instance_count
    }

    /// The properties supplied at construction, if any.
    pub fn properties(&self) -> Option<&ScaleProperties> {
        self.properties.as_ref()
    }

    /// Look up a single property.
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.as_ref().and_then(|props| props.get(key))
    }

    /// Consume the request and take ownership of its properties.
    pub fn into_properties(self) -> Option<ScaleProperties> {
        self.properties
    }
}

impl fmt::Display for ScaleRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "scale {} to {} instance(s)",
            self.deployment_id, self.desired_instance_count
        )
    }
}

/// Check both invariants, identifier first. Returns the count as unsigned.
fn validate(deployment_id: &str, desired_instance_count: i32) -> RequestResult<u32> {
    if deployment_id.trim().is_empty() {
        return Err(RequestError::InvalidArgument {
            field: "deployment_id",
            rule: "must not be empty or blank",
        });
    }

    u32::try_from(desired_instance_count).map_err(|_| RequestError::InvalidState {
        field: "desired_instance_count",
        rule: "must be >= 0",
    })
}
