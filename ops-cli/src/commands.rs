//! Command handlers. Each returns the text to print.

use crate::cli::{AdmitArgs, Command, DoctorCommand, NurseCommand, RoomCommand};
use crate::config::AppConfig;
use crate::output;
use admission_service::{AdmissionRequest, ReleaseReason, WardServices};
use billing_service::{apply_surcharge, render_receipt, BillingService};
use database_layer::{LocalStore, PatientRecord};
use error_common::{CareError, CareResult, Entity};
use tracing::debug;

/// Open store plus the services built on it
pub struct App {
    store: LocalStore,
    ward: WardServices,
    billing: BillingService,
}

impl App {
    pub async fn open(config: &AppConfig) -> CareResult<Self> {
        let store = LocalStore::open(&config.store).await?;
        debug!(url = %store.url(), "Store opened");
        Ok(Self::with_store(store, config))
    }

    pub fn with_store(store: LocalStore, config: &AppConfig) -> Self {
        Self {
            ward: WardServices::new(store.clone(), config.admission.clone()),
            billing: BillingService::with_fees(store.clone(), config.fees.clone()),
            store,
        }
    }

    pub async fn close(self) {
        self.store.close().await;
    }

    pub async fn execute(&self, command: Command) -> CareResult<String> {
        match command {
            Command::Dashboard => Ok(output::dashboard(&self.ward.census.dashboard().await?)),
            Command::Admit(args) => self.admit(args).await,
            Command::Discharge { patient_id } => {
                self.release(&patient_id, ReleaseReason::Discharged).await
            }
            Command::Delete { patient_id } => self.release(&patient_id, ReleaseReason::Deleted).await,
            Command::Patients => Ok(output::admissions(&self.ward.census.list_admissions().await?)),
            Command::Patient { patient_id } => Ok(output::patient(
                &self.ward.census.patient_details(&patient_id).await?,
            )),
            Command::Rooms { available: true } => {
                Ok(output::room_numbers(&self.ward.census.available_rooms().await?))
            }
            Command::Rooms { available: false } => {
                Ok(output::rooms(&self.ward.census.list_rooms().await?))
            }
            Command::Room(cmd) => self.room(cmd).await,
            Command::Doctor(cmd) => self.doctor(cmd).await,
            Command::Nurse(cmd) => self.nurse(cmd).await,
            Command::Bill { patient_id, extra } => self.bill(&patient_id, &extra).await,
            Command::Check => {
                let violations = self.ward.census.check_consistency().await?;
                let rooms = self.ward.census.list_rooms().await?;
                Ok(output::consistency(&violations, rooms.len()))
            }
        }
    }

    async fn admit(&self, args: AdmitArgs) -> CareResult<String> {
        let request = AdmissionRequest {
            patient: PatientRecord {
                name: args.name,
                age: args.age,
                contact: args.contact,
                gender: args.gender.into(),
                disease: args.disease,
                blood_group: args.blood_group,
            },
            doctor_name: args.doctor,
            room_no: args.room,
            nurse_id: args.nurse,
        };
        let receipt = self.ward.admissions.admit(&request).await?;
        Ok(format!(
            "Patient {} admitted to room {} at {}",
            receipt.patient_id, receipt.room_no, receipt.admit_date
        ))
    }

    async fn release(&self, patient_id: &str, reason: ReleaseReason) -> CareResult<String> {
        match self.ward.admissions.release_patient(patient_id, reason).await? {
            Some(released) => Ok(released.message()),
            None => Err(CareError::not_found(Entity::Patient, patient_id.trim())),
        }
    }

    async fn room(&self, cmd: RoomCommand) -> CareResult<String> {
        let rooms = &self.ward.rooms;
        match cmd {
            RoomCommand::Add(args) => {
                let room = rooms.add_room(&args.room_no, &args.room_type, args.status.into()).await?;
                Ok(format!("Room {} saved as {} ({})", room.room_no, room.room_type, room.status))
            }
            RoomCommand::Edit(args) => {
                let room = rooms.edit_room(&args.room_no, &args.room_type, args.status.into()).await?;
                Ok(format!("Room {} updated to {} ({})", room.room_no, room.room_type, room.status))
            }
            RoomCommand::Delete { room_no } => {
                rooms.delete_room(&room_no).await?;
                Ok(format!("Room {} deleted", room_no.trim()))
            }
        }
    }

    async fn doctor(&self, cmd: DoctorCommand) -> CareResult<String> {
        let staff = &self.ward.staff;
        match cmd {
            DoctorCommand::Add(args) => {
                let doctor = staff.add_doctor(&args.into()).await?;
                Ok(format!("Doctor {} added with id {}", doctor.name, doctor.id))
            }
            DoctorCommand::Edit { id, doctor } => {
                let doctor = staff.update_doctor(id, &doctor.into()).await?;
                Ok(format!("Doctor {} updated", doctor.id))
            }
            DoctorCommand::Delete { id } => {
                staff.delete_doctor(id).await?;
                Ok(format!("Doctor {} deleted", id))
            }
            DoctorCommand::List { filter } => Ok(output::doctors(&staff.list_doctors(&filter).await?)),
        }
    }

    async fn nurse(&self, cmd: NurseCommand) -> CareResult<String> {
        let staff = &self.ward.staff;
        match cmd {
            NurseCommand::Add(args) => {
                let nurse = staff.add_nurse(&args.into()).await?;
                Ok(format!("Nurse {} added with id {}", nurse.name, nurse.id))
            }
            NurseCommand::Edit { id, nurse } => {
                let nurse = staff.update_nurse(id, &nurse.into()).await?;
                Ok(format!("Nurse {} updated", nurse.id))
            }
            NurseCommand::Delete { id } => {
                staff.delete_nurse(id).await?;
                Ok(format!("Nurse {} deleted", id))
            }
            NurseCommand::List { filter } => Ok(output::nurses(&staff.list_nurses(&filter).await?)),
        }
    }

    async fn bill(&self, patient_id: &str, extras: &[String]) -> CareResult<String> {
        let mut bill = self.billing.compute_bill(patient_id).await?;
        for extra in extras {
            bill = apply_surcharge(&bill, extra)?;
        }
        Ok(render_receipt(&bill).trim_end().to_string())
    }
}
