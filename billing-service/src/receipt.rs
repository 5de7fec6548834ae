//! Plain-text bill as shown at the billing desk

use crate::models::BillBreakdown;
use std::fmt;

const RULE: &str = "--------------------------------------------";

/// Display adapter for a bill
pub struct Receipt<'a>(pub &'a BillBreakdown);

impl fmt::Display for Receipt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bill = self.0;
        let room = match (&bill.room_no, &bill.room_type) {
            (Some(room_no), Some(room_type)) => format!("{} ({})", room_no, room_type),
            (Some(room_no), None) => format!("{} (removed)", room_no),
            (None, _) => "none".to_string(),
        };

        writeln!(f, "{:^44}", "SAGARCARE HOSPITAL")?;
        writeln!(f, "{:^44}", "Patient Bill")?;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "{:<12}: {}", "Patient ID", bill.patient_id)?;
        writeln!(f, "{:<12}: {}", "Name", bill.name)?;
        writeln!(f, "{:<12}: {}", "Disease", bill.disease)?;
        writeln!(f, "{:<12}: {}", "Admitted", bill.admit_date)?;
        writeln!(f, "{:<12}: {}", "Doctor", bill.doctor_name)?;
        writeln!(f, "{:<12}: {}", "Room", room)?;
        writeln!(f, "{}", RULE)?;
        line(f, "Room charges", bill.room_cost)?;
        line(f, "Doctor fee", bill.doctor_fee)?;
        line(f, "Nursing fee", bill.nursing_fee)?;
        line(f, "Service charges", bill.service_fee)?;
        if bill.surcharge != 0 {
            line(f, "Extra charges", bill.surcharge)?;
        }
        writeln!(f, "{}", RULE)?;
        line(f, "TOTAL", bill.total)
    }
}

fn line(f: &mut fmt::Formatter<'_>, label: &str, amount: i64) -> fmt::Result {
    writeln!(f, "{:<20}{:>24}", label, format!("Rs {}", amount))
}

pub fn render_receipt(bill: &BillBreakdown) -> String {
    Receipt(bill).to_string()
}
