use thiserror::Error;

/// Framework-level signal failures, one variant per named condition.
///
/// Each condition carries a fixed numeric code kept from the legacy
/// catalog. Two pairs of conditions share a code (10020 and 10021);
/// the collision is preserved as-is until the owning system confirms
/// whether it was intentional.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SysError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("No route found with: {0}")]
    RouteNotFound(String),

    #[error("No default route found. Please set a <sysdefault> route in the routing table")]
    DefaultRouteNotFound,

    #[error("No <model> attribute found in the route: {0}")]
    ModelAttributeNotFound(String),

    #[error("Logger is not enabled for this request. Enable it by overriding log() in the request handler")]
    LoggerNotEnabled,

    #[error("Unknown error")]
    UnknownError,
}

impl SysError {
    /// Numeric code attached to every signal.
    pub fn code(&self) -> u32 {
        match self {
            SysError::FileNotFound(_) => 10040,
            SysError::RouteNotFound(_) => 10020,
            SysError::DefaultRouteNotFound => 10020,
            SysError::ModelAttributeNotFound(_) => 10021,
            SysError::LoggerNotEnabled => 10021,
            SysError::UnknownError => 10000,
        }
    }
}

// Constructor helpers mirroring the legacy static raise functions
impl SysError {
    pub fn file_not_found(path: impl Into<String>) -> Self {
        SysError::FileNotFound(path.into())
    }

    pub fn route_not_found(route: impl Into<String>) -> Self {
        SysError::RouteNotFound(route.into())
    }

    pub fn default_route_not_found() -> Self {
        SysError::DefaultRouteNotFound
    }

    pub fn model_attribute_not_found(route: impl Into<String>) -> Self {
        SysError::ModelAttributeNotFound(route.into())
    }

    pub fn logger_not_enabled() -> Self {
        SysError::LoggerNotEnabled
    }

    pub fn unknown_error() -> Self {
        SysError::UnknownError
    }
}
