// Standardized error codes surfaced to the presentation shell

pub mod validation {
    pub const INVALID_INPUT: &str = "VALIDATION_1001";
    pub const MISSING_REQUIRED_FIELD: &str = "VALIDATION_1002";
}

pub mod database {
    pub const QUERY_FAILED: &str = "DB_4002";
    pub const CONSTRAINT_VIOLATION: &str = "DB_4003";
}

pub mod resource {
    pub const NOT_FOUND: &str = "NOT_FOUND_5001";
    pub const ROOM_OCCUPIED: &str = "CONFLICT_6001";
}

pub mod system {
    pub const CONFIGURATION: &str = "SYSTEM_7001";
}
