// Domain layer - Telemetry types, input validation and display derivation
pub mod telemetry;
pub mod validation;
pub mod view_model;
