//! Patient identifier generation

use rand::Rng;

/// Source of candidate patient identifiers. Candidates may collide with
/// live admissions; the admission service checks and retries.
pub trait PatientIdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// `P` followed by a random five digit number
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPatientIds;

impl PatientIdGenerator for RandomPatientIds {
    fn next_id(&self) -> String {
        let number: u32 = rand::thread_rng().gen_range(10_000..=99_999);
        format!("P{}", number)
    }
}

/// Whether `id` has the `P#####` shape
pub fn is_patient_id(id: &str) -> bool {
    let mut chars = id.chars();
    chars.next() == Some('P') && id.len() == 6 && chars.all(|c| c.is_ascii_digit())
}
