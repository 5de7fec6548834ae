//! Command-line surface

use clap::{Args, Parser, Subcommand, ValueEnum};
use database_layer::{DoctorRecord, Gender, NurseRecord, RoomStatus};
use std::path::PathBuf;

/// SagarCare ward administration
#[derive(Parser, Debug)]
#[command(name = "sagarcare", version)]
#[command(about = "Admissions, rooms, staff rosters and billing for a single hospital")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, default_value = "sagarcare.toml")]
    pub config: PathBuf,

    /// Database URL, overriding the configuration file
    #[arg(long, global = true)]
    pub database: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Ward counters
    Dashboard,
    /// Admit a patient into an available room
    Admit(AdmitArgs),
    /// Discharge a patient and free their room
    Discharge { patient_id: String },
    /// Delete an admission record and free its room
    Delete { patient_id: String },
    /// List admitted patients
    Patients,
    /// Show one patient with nursing notes
    Patient { patient_id: String },
    /// List rooms
    Rooms {
        /// Only rooms that can take a new admission
        #[arg(long)]
        available: bool,
    },
    /// Add, edit or delete rooms
    #[command(subcommand)]
    Room(RoomCommand),
    /// Manage the doctor roster
    #[command(subcommand)]
    Doctor(DoctorCommand),
    /// Manage the nurse roster
    #[command(subcommand)]
    Nurse(NurseCommand),
    /// Print an itemized bill
    Bill {
        patient_id: String,
        /// Extra charge in rupees; repeat to add several
        #[arg(long = "extra", allow_hyphen_values = true)]
        extra: Vec<String>,
    },
    /// Verify that rooms and admissions agree
    Check,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct AdmitArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub age: u32,
    #[arg(long)]
    pub contact: String,
    #[arg(long, value_enum)]
    pub gender: GenderArg,
    #[arg(long)]
    pub disease: String,
    #[arg(long)]
    pub blood_group: String,
    /// Attending doctor's name as listed in the roster
    #[arg(long)]
    pub doctor: String,
    #[arg(long)]
    pub room: String,
    /// Nurse id to assign on admission
    #[arg(long)]
    pub nurse: Option<i64>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum RoomCommand {
    Add(RoomArgs),
    Edit(RoomArgs),
    Delete { room_no: String },
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct RoomArgs {
    pub room_no: String,
    /// Private, Shared, ICU, General or any other label
    #[arg(long = "type", default_value = "")]
    pub room_type: String,
    #[arg(long, value_enum, default_value_t = StatusArg::Available)]
    pub status: StatusArg,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum DoctorCommand {
    Add(DoctorArgs),
    Edit {
        id: i64,
        #[command(flatten)]
        doctor: DoctorArgs,
    },
    Delete {
        id: i64,
    },
    List {
        /// Substring of the name
        #[arg(long, default_value = "")]
        filter: String,
    },
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct DoctorArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long, default_value = "")]
    pub specialization: String,
    #[arg(long, default_value = "")]
    pub contact: String,
    #[arg(long, default_value = "")]
    pub shift: String,
    #[arg(long)]
    pub photo: Option<String>,
}

impl From<DoctorArgs> for DoctorRecord {
    fn from(args: DoctorArgs) -> Self {
        DoctorRecord {
            name: args.name,
            specialization: args.specialization,
            contact: args.contact,
            shift: args.shift,
            photo_path: args.photo,
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum NurseCommand {
    Add(NurseArgs),
    Edit {
        id: i64,
        #[command(flatten)]
        nurse: NurseArgs,
    },
    Delete {
        id: i64,
    },
    List {
        #[arg(long, default_value = "")]
        filter: String,
    },
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct NurseArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long, default_value = "")]
    pub contact: String,
    #[arg(long, default_value = "")]
    pub shift: String,
    #[arg(long)]
    pub photo: Option<String>,
}

impl From<NurseArgs> for NurseRecord {
    fn from(args: NurseArgs) -> Self {
        NurseRecord {
            name: args.name,
            contact: args.contact,
            shift: args.shift,
            photo_path: args.photo,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenderArg {
    Male,
    Female,
    Other,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
            GenderArg::Other => Gender::Other,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusArg {
    Available,
    Occupied,
    Cleaning,
}

impl From<StatusArg> for RoomStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Available => RoomStatus::Available,
            StatusArg::Occupied => RoomStatus::Occupied,
            StatusArg::Cleaning => RoomStatus::Cleaning,
        }
    }
}
