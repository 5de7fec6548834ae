//! Text rendering for command results

use admission_service::{CensusSummary, ConsistencyViolation, PatientDetails};
use colored::Colorize;
use database_layer::{AdmissionSummary, Doctor, Nurse, Room};

fn header(text: &str) -> String {
    text.bold().to_string()
}

fn or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "-",
    }
}

pub fn dashboard(summary: &CensusSummary) -> String {
    [
        header("Ward dashboard"),
        format!("  Admitted patients : {}", summary.admitted_patients),
        format!("  Doctors           : {}", summary.doctors),
        format!("  Nurses            : {}", summary.nurses),
        format!("  Rooms available   : {}", summary.rooms_available),
        format!("  Rooms occupied    : {}", summary.rooms_occupied),
    ]
    .join("\n")
}

pub fn admissions(rows: &[AdmissionSummary]) -> String {
    if rows.is_empty() {
        return "No patients admitted.".to_string();
    }
    let mut lines = vec![header(&format!(
        "{:<8} {:<20} {:<16} {:<16} {}",
        "ID", "Name", "Disease", "Doctor", "Room"
    ))];
    lines.extend(rows.iter().map(|row| {
        format!(
            "{:<8} {:<20} {:<16} {:<16} {}",
            row.patient_id,
            row.name,
            row.disease,
            row.doctor_name,
            or_dash(row.room_no.as_deref())
        )
    }));
    lines.join("\n")
}

pub fn patient(details: &PatientDetails) -> String {
    let a = &details.admission;
    let age = a.age.map_or_else(|| "-".to_string(), |age| age.to_string());
    let mut lines = vec![
        header(&format!("{} ({})", a.name, a.patient_id)),
        format!("  Age / Gender : {} / {}", age, a.gender),
        format!("  Contact      : {}", or_dash(Some(a.contact.as_str()))),
        format!("  Blood group  : {}", or_dash(Some(a.blood_group.as_str()))),
        format!("  Disease      : {}", a.disease),
        format!("  Doctor       : {}", a.doctor_name),
        format!("  Room         : {}", or_dash(a.room_no.as_deref())),
        format!("  Admitted     : {}", a.admit_date),
    ];

    if details.treatments.is_empty() {
        lines.push("  No nursing notes.".to_string());
    } else {
        lines.push(header("Nursing notes"));
        lines.extend(details.treatments.iter().map(|t| {
            format!(
                "  {}  {:<16} {}  [{}] {}",
                t.date,
                t.nurse_name,
                t.nurse_notes,
                or_dash(Some(t.shift.as_str())),
                t.prescription
            )
            .trim_end()
            .to_string()
        }));
    }
    lines.join("\n")
}

pub fn rooms(rows: &[Room]) -> String {
    if rows.is_empty() {
        return "No rooms.".to_string();
    }
    let mut lines = vec![header(&format!(
        "{:<8} {:<10} {:<10} {}",
        "Room", "Type", "Status", "Patient"
    ))];
    lines.extend(rows.iter().map(|room| {
        format!(
            "{:<8} {:<10} {:<10} {}",
            room.room_no,
            room.room_type.as_str(),
            room.status.as_str(),
            or_dash(room.patient_id.as_deref())
        )
    }));
    lines.join("\n")
}

pub fn room_numbers(numbers: &[String]) -> String {
    if numbers.is_empty() {
        "No rooms available.".to_string()
    } else {
        format!("Available rooms: {}", numbers.join(", "))
    }
}

pub fn doctors(rows: &[Doctor]) -> String {
    if rows.is_empty() {
        return "No doctors found.".to_string();
    }
    let mut lines = vec![header(&format!(
        "{:<5} {:<20} {:<16} {:<14} {}",
        "ID", "Name", "Specialization", "Contact", "Shift"
    ))];
    lines.extend(rows.iter().map(|d| {
        format!(
            "{:<5} {:<20} {:<16} {:<14} {}",
            d.id,
            d.name,
            or_dash(Some(d.specialization.as_str())),
            or_dash(Some(d.contact.as_str())),
            or_dash(Some(d.shift.as_str()))
        )
    }));
    lines.join("\n")
}

pub fn nurses(rows: &[Nurse]) -> String {
    if rows.is_empty() {
        return "No nurses found.".to_string();
    }
    let mut lines = vec![header(&format!(
        "{:<5} {:<20} {:<14} {}",
        "ID", "Name", "Contact", "Shift"
    ))];
    lines.extend(rows.iter().map(|n| {
        format!(
            "{:<5} {:<20} {:<14} {}",
            n.id,
            n.name,
            or_dash(Some(n.contact.as_str())),
            or_dash(Some(n.shift.as_str()))
        )
    }));
    lines.join("\n")
}

pub fn consistency(violations: &[ConsistencyViolation], rooms_checked: usize) -> String {
    if violations.is_empty() {
        return format!("{} ({} rooms checked)", "Occupancy consistent".green(), rooms_checked);
    }
    let mut lines = vec![format!("{} occupancy problem(s):", violations.len())
        .red()
        .to_string()];
    lines.extend(violations.iter().map(|v| format!("  - {}", v)));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use database_layer::{Admission, Gender, NurseTreatment, RoomStatus, RoomType};

    #[test]
    fn test_rooms_table() {
        colored::control::set_override(false);
        let text = rooms(&[Room {
            room_no: "201".into(),
            room_type: RoomType::Icu,
            status: RoomStatus::Occupied,
            patient_id: Some("P12345".into()),
        }]);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Room"));
        assert_eq!(lines[1], "201      ICU        Occupied   P12345");
    }

    #[test]
    fn test_empty_lists() {
        assert_eq!(admissions(&[]), "No patients admitted.");
        assert_eq!(room_numbers(&[]), "No rooms available.");
        assert_eq!(room_numbers(&["101".into(), "202".into()]), "Available rooms: 101, 202");
    }

    #[test]
    fn test_consistency_report_lists_each_problem() {
        colored::control::set_override(false);
        let text = consistency(
            &[ConsistencyViolation::OccupiedWithoutPatient { room_no: "101".into() }],
            4,
        );
        assert_eq!(
            text,
            "1 occupancy problem(s):\n  - room 101 is Occupied without a patient"
        );
        assert_eq!(consistency(&[], 4), "Occupancy consistent (4 rooms checked)");
    }

    #[test]
    fn test_patient_with_legacy_age_and_notes() {
        colored::control::set_override(false);
        let details = PatientDetails {
            admission: Admission {
                id: 1,
                patient_id: "P70007".into(),
                name: "Gopal".into(),
                age: None,
                contact: String::new(),
                gender: Gender::Male,
                disease: "Typhoid".into(),
                admit_date: "2024-01-05 10:00".into(),
                blood_group: "A+".into(),
                doctor_name: "Dr. Mehta".into(),
                room_no: None,
            },
            treatments: vec![NurseTreatment {
                id: 1,
                patient_id: "P70007".into(),
                nurse_name: "Nurse Priya".into(),
                nurse_notes: "Assigned on admission".into(),
                shift: String::new(),
                prescription: String::new(),
                date: "2024-01-05 10:00".into(),
            }],
        };

        let text = patient(&details);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Gopal (P70007)");
        assert_eq!(lines[1], "  Age / Gender : - / Male");
        assert_eq!(lines[2], "  Contact      : -");
        assert_eq!(lines[6], "  Room         : -");
        assert_eq!(lines[8], "Nursing notes");
        assert_eq!(
            lines[9],
            "  2024-01-05 10:00  Nurse Priya      Assigned on admission  [-]"
        );
        assert_eq!(lines.len(), 10);
    }
}
