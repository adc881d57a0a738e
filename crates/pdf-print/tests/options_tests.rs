use pdf_print::*;

#[test]
fn test_default_constants() {
    let constants = PrintConstants::default();
    assert_eq!(constants.points_per_inch, 72.0);
    assert_eq!(constants.bleed_pts(), 9.0);
    assert_eq!(constants.safe_zone_pts(), 18.0);
    assert_eq!(constants.crop_mark_gap_pt, 9.0);
    assert_eq!(constants.crop_mark_width_pt, 0.5);
}

#[test]
fn test_default_options_validate() {
    let options = ComposeOptions::default();
    assert!(options.validate().is_ok());
    assert!(!options.producer.is_empty());
}

#[test]
fn test_validation_gap_outside_bleed() {
    let mut options = ComposeOptions::default();
    options.constants.crop_mark_gap_pt = 12.0;

    match options.validate() {
        Err(PrintError::Config(msg)) => assert!(msg.contains("Crop mark gap")),
        other => panic!("Expected Config error, got {:?}", other),
    }
}

#[test]
fn test_validation_rejects_bad_values() {
    let mut options = ComposeOptions::default();
    options.constants.points_per_inch = 0.0;
    assert!(options.validate().is_err());

    let mut options = ComposeOptions::default();
    options.constants.bleed_inches = -0.1;
    assert!(options.validate().is_err());

    let mut options = ComposeOptions::default();
    options.constants.crop_mark_width_pt = 0.0;
    assert!(options.validate().is_err());

    let mut options = ComposeOptions::default();
    options.producer = "  ".to_string();
    assert!(options.validate().is_err());
}

#[tokio::test]
async fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let temp = NamedTempFile::new().unwrap();
    let mut options = ComposeOptions::default();
    options.producer = "Corner Print Shop".to_string();
    options.constants.crop_mark_width_pt = 0.25;

    options.save(temp.path()).await.unwrap();
    let loaded = ComposeOptions::load(temp.path()).await.unwrap();

    assert_eq!(loaded, options);
}

#[tokio::test]
async fn test_load_partial_options_uses_defaults() {
    use tempfile::NamedTempFile;

    let temp = NamedTempFile::new().unwrap();
    std::fs::write(temp.path(), r#"{ "producer": "Kiosk 3" }"#).unwrap();

    let loaded = ComposeOptions::load(temp.path()).await.unwrap();
    assert_eq!(loaded.producer, "Kiosk 3");
    assert_eq!(loaded.constants, PrintConstants::default());
}

#[tokio::test]
async fn test_load_invalid_json() {
    use tempfile::NamedTempFile;

    let temp = NamedTempFile::new().unwrap();
    std::fs::write(temp.path(), "not json").unwrap();

    match ComposeOptions::load(temp.path()).await {
        Err(PrintError::Config(msg)) => assert!(msg.contains("Failed to parse config")),
        other => panic!("Expected Config error, got {:?}", other),
    }
}
