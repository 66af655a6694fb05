//! Logging targets for Stylish.
//!
//! Stylish uses the `tracing` crate for instrumentation and never installs a
//! subscriber itself. To see events, install one in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("stylish::declaration=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Crate-wide target.
    pub const CORE: &str = "stylish";
    /// Tree and rule rendering.
    pub const RENDER: &str = "stylish::render";
    /// Variable resolution.
    pub const VARIABLE: &str = "stylish::variable";
    /// Declarations, declaration groups and format contracts.
    pub const DECLARATION: &str = "stylish::declaration";
    /// Builder DSL.
    pub const GENERATE: &str = "stylish::generate";
}
