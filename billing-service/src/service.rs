use crate::models::{BillBreakdown, FeeSchedule};
use database_layer::{admission_repository, room_repository, LocalStore};
use error_common::{CareError, CareResult, Entity};
use tracing::{debug, info};

/// Billing service
#[derive(Debug, Clone)]
pub struct BillingService {
    store: LocalStore,
    fees: FeeSchedule,
}

impl BillingService {
    pub fn new(store: LocalStore) -> Self {
        Self::with_fees(store, FeeSchedule::default())
    }

    pub fn with_fees(store: LocalStore, fees: FeeSchedule) -> Self {
        Self { store, fees }
    }

    pub fn fees(&self) -> &FeeSchedule {
        &self.fees
    }

    /// Itemized bill for a live admission
    pub async fn compute_bill(&self, patient_id: &str) -> CareResult<BillBreakdown> {
        let patient_id = patient_id.trim();
        let admission = admission_repository::find_by_patient_id(self.store.pool(), patient_id)
            .await?
            .ok_or_else(|| CareError::not_found(Entity::Patient, patient_id))?;

        let room_type = match admission.room_no.as_deref() {
            Some(room_no) => room_repository::find(self.store.pool(), room_no)
                .await?
                .map(|room| room.room_type),
            None => None,
        };
        if admission.room_no.is_some() && room_type.is_none() {
            debug!(patient_id = %patient_id, "Admission room no longer exists, billing default rate");
        }

        let room_cost = self.fees.room_rate(room_type.as_ref());
        let mut bill = BillBreakdown {
            patient_id: admission.patient_id,
            name: admission.name,
            disease: admission.disease,
            admit_date: admission.admit_date,
            doctor_name: admission.doctor_name,
            room_no: admission.room_no,
            room_type,
            room_cost,
            doctor_fee: self.fees.doctor_fee,
            nursing_fee: self.fees.nursing_fee,
            service_fee: self.fees.service_fee,
            surcharge: 0,
            total: 0,
        };
        bill.total = bill.base_total();

        info!(patient_id = %bill.patient_id, total = bill.total, "Bill computed");
        Ok(bill)
    }
}

/// Add a desk-entered extra charge to a bill.
///
/// Blank input counts as zero. Anything else must be a whole number
/// (negative values are discounts); the bill passed in is never modified.
pub fn apply_surcharge(bill: &BillBreakdown, extra: &str) -> CareResult<BillBreakdown> {
    let extra = extra.trim();
    let amount: i64 = if extra.is_empty() {
        0
    } else {
        extra
            .parse()
            .map_err(|_| CareError::invalid_input(format!("Extra charge must be a whole number, got '{}'", extra)))?
    };

    let (Some(surcharge), Some(total)) = (
        bill.surcharge.checked_add(amount),
        bill.total.checked_add(amount),
    ) else {
        return Err(CareError::invalid_input(format!("Extra charge out of range: {}", extra)));
    };

    Ok(BillBreakdown {
        surcharge,
        total,
        ..bill.clone()
    })
}
