/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library, at the boundary of the adapter and within the reference engine.
Adapter logs note each transition of the lifecycle and each request which reaches the engine.

Note, no log implementation is provided.
The cli installs [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `logging` feature.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [lifecycle](crate::ipasir2::State) of a handle.
    pub const LIFECYCLE: &str = "lifecycle";

    /// Logs related to building a [catalog](crate::ipasir2::catalog).
    pub const CATALOG: &str = "catalog";

    /// Logs related to the [option gateway](crate::ipasir2::gateway).
    pub const GATEWAY: &str = "gateway";

    /// Logs related to the [callback bridge](crate::ipasir2::bridge).
    pub const BRIDGE: &str = "bridge";

    /// Logs related to propagation within the reference engine.
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to conflict analysis within the reference engine.
    pub const ANALYSIS: &str = "analysis";

    /// Logs related to decisions and restarts within the reference engine.
    pub const DECISION: &str = "decision";
}
