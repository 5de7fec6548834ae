use clap::Parser;
use database_layer::{LocalStore, LocalStoreConfig};
use error_common::{CareError, Entity};
use ops_cli::{exit_status, App, AppConfig, Cli};
use tempfile::TempDir;

async fn open_app() -> (TempDir, App) {
    colored::control::set_override(false);
    let dir = TempDir::new().unwrap();
    let store = LocalStore::open(&LocalStoreConfig::at_path(dir.path().join("desk.db")))
        .await
        .unwrap();
    (dir, App::with_store(store, &AppConfig::default()))
}

async fn run(app: &App, args: &[&str]) -> Result<String, CareError> {
    let mut argv = vec!["sagarcare"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).unwrap();
    app.execute(cli.command).await
}

fn patient_id_from(message: &str) -> String {
    message
        .split_whitespace()
        .find(|w| w.starts_with('P') && w.len() == 6)
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_front_desk_session() {
    let (_dir, app) = open_app().await;

    let added = run(&app, &["doctor", "add", "--name", "Dr. Mehta", "--specialization", "Cardiology"])
        .await
        .unwrap();
    assert_eq!(added, "Doctor Dr. Mehta added with id 1");

    let admitted = run(
        &app,
        &[
            "admit", "--name", "Asha", "--age", "30", "--contact", "9876543210", "--gender",
            "female", "--disease", "Dengue", "--blood-group", "O+", "--doctor", "Dr. Mehta",
            "--room", "201",
        ],
    )
    .await
    .unwrap();
    assert!(admitted.contains("admitted to room 201"));
    let patient_id = patient_id_from(&admitted);

    let rooms = run(&app, &["rooms"]).await.unwrap();
    assert!(rooms.lines().any(|l| l.starts_with("201") && l.ends_with(&patient_id)));
    assert_eq!(
        run(&app, &["rooms", "--available"]).await.unwrap(),
        "Available rooms: 101, 102, 202"
    );

    let bill = run(&app, &["bill", patient_id.as_str(), "--extra", "150"]).await.unwrap();
    assert!(bill.lines().last().unwrap().ends_with("Rs 6450"));

    let err = run(&app, &["bill", patient_id.as_str(), "--extra", "abc"]).await.unwrap_err();
    assert!(matches!(err, CareError::InvalidInput(_)));
    assert_eq!(exit_status(&err), 1);

    assert!(run(&app, &["check"]).await.unwrap().starts_with("Occupancy consistent"));

    let err = run(&app, &["room", "delete", "201"]).await.unwrap_err();
    assert_eq!(err, CareError::RoomOccupied("201".into()));

    let discharged = run(&app, &["discharge", patient_id.as_str()]).await.unwrap();
    assert_eq!(discharged, format!("Patient {} discharged and room freed.", patient_id));

    let err = run(&app, &["discharge", patient_id.as_str()]).await.unwrap_err();
    assert_eq!(err, CareError::not_found(Entity::Patient, patient_id.clone()));

    assert!(run(&app, &["dashboard"]).await.unwrap().contains("Rooms available   : 4"));
}

#[tokio::test]
async fn test_room_and_roster_commands() {
    let (_dir, app) = open_app().await;

    assert_eq!(
        run(&app, &["room", "add", "301", "--type", "deluxe", "--status", "cleaning"])
            .await
            .unwrap(),
        "Room 301 saved as deluxe (Cleaning)"
    );
    assert!(matches!(
        run(&app, &["room", "add", "302", "--status", "occupied"]).await,
        Err(CareError::Validation(_))
    ));
    assert_eq!(
        run(&app, &["room", "edit", "301", "--type", "icu"]).await.unwrap(),
        "Room 301 updated to ICU (Available)"
    );
    assert_eq!(run(&app, &["room", "delete", "301"]).await.unwrap(), "Room 301 deleted");

    run(&app, &["nurse", "add", "--name", "Nurse Priya", "--shift", "Night"])
        .await
        .unwrap();
    let nurses = run(&app, &["nurse", "list", "--filter", "priya"]).await.unwrap();
    assert!(nurses.contains("Nurse Priya"));
    assert_eq!(run(&app, &["doctor", "list"]).await.unwrap(), "No doctors found.");
    assert_eq!(run(&app, &["patients"]).await.unwrap(), "No patients admitted.");
}
