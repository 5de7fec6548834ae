//! Front desk command line for the SagarCare ward engine
//!
//! ```bash
//! # Admissions
//! sagarcare admit --name Asha --age 30 --contact 9876543210 --gender female \
//!     --disease Dengue --blood-group O+ --doctor "Dr. Mehta" --room 201
//! sagarcare patients
//! sagarcare discharge P12345
//!
//! # Rooms and rosters
//! sagarcare rooms --available
//! sagarcare room edit 102 --type Shared --status cleaning
//! sagarcare doctor add --name "Dr. Mehta" --specialization Cardiology
//!
//! # Billing
//! sagarcare bill P12345 --extra 150
//!
//! # Health
//! sagarcare check
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod output;

pub use cli::Cli;
pub use commands::App;
pub use config::AppConfig;

use error_common::CareError;

/// Process exit status for a failed command: 1 when the user can correct
/// the input and retry, 2 when storage or configuration is broken.
pub fn exit_status(error: &CareError) -> u8 {
    if error.is_recoverable() {
        1
    } else {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_status() {
        assert_eq!(exit_status(&CareError::validation("Name is required")), 1);
        assert_eq!(exit_status(&CareError::RoomOccupied("201".into())), 1);
        assert_eq!(exit_status(&CareError::Storage("disk I/O error".into())), 2);
        assert_eq!(exit_status(&CareError::Config("bad toml".into())), 2);
    }
}
