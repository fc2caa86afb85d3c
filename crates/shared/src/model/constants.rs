/// Muscle group recorded when the admin leaves the field blank
pub const DEFAULT_MUSCLE_GROUP: &str = "Geral";

/// Equipment recorded when the admin leaves the field blank
pub const DEFAULT_EQUIPMENT: &str = "Peso corporal";

/// Rest prefilled on every new draft entry, in seconds
pub const DEFAULT_REST_SECONDS: u32 = 60;
