use pdf_print::*;

#[test]
fn test_standard_print_size_lookup() {
    let size = PrintSize::standard("4x6").unwrap();
    assert_eq!(size.name, "4x6");
    assert_eq!(size.width_inches, 4.0);
    assert_eq!(size.height_inches, 6.0);

    let letter = PrintSize::standard("8.5x11").unwrap();
    assert_eq!((letter.width_inches, letter.height_inches), (8.5, 11.0));

    assert!(PrintSize::standard("3x5").is_none());
}

#[test]
fn test_print_size_from_str() {
    let size: PrintSize = "16x20".parse().unwrap();
    assert_eq!(size, PrintSize::new("16x20", 16.0, 20.0));

    match "A4".parse::<PrintSize>() {
        Err(PrintError::UnknownPrintSize(name)) => assert_eq!(name, "A4"),
        other => panic!("Expected UnknownPrintSize, got {:?}", other),
    }
}

#[test]
fn test_print_size_catalog_is_positive() {
    let catalog = PrintSize::catalog();
    assert!(catalog.len() >= 10);
    for size in &catalog {
        assert!(size.width_inches > 0.0, "{}", size);
        assert!(size.height_inches > 0.0, "{}", size);
    }
}

#[test]
fn test_poster_catalog() {
    let ids: Vec<&str> = POSTER_CONFIGS.iter().map(|c| c.id).collect();
    assert_eq!(
        ids,
        vec!["2x1", "1x2", "2x2", "3x2", "2x3", "3x3", "4x3", "3x4"]
    );

    for config in POSTER_CONFIGS {
        assert_eq!(config.sheet_count(), config.rows * config.cols);
        assert_eq!(config.id, format!("{}x{}", config.rows, config.cols));
    }
}

#[test]
fn test_poster_config_parse() {
    let config: PosterConfig = "2x3".parse().unwrap();
    assert_eq!(config.rows, 2);
    assert_eq!(config.cols, 3);
    assert_eq!(config.grid(), GridShape::new(2, 3));
    assert_eq!(config.grid().cell_count(), 6);

    assert!(matches!(
        "5x5".parse::<PosterConfig>(),
        Err(PrintError::UnknownPosterConfig(_))
    ));
}

#[test]
fn test_order_require_print_size() {
    let order = Order::new("ORD-1", PrintSize::standard("5x7"));
    assert_eq!(order.require_print_size().unwrap().name, "5x7");

    let order = Order::new("ORD-2", None);
    match order.require_print_size() {
        Err(PrintError::MissingPrintSize(code)) => assert_eq!(code, "ORD-2"),
        other => panic!("Expected MissingPrintSize, got {:?}", other),
    }
}

#[test]
fn test_error_messages() {
    assert_eq!(
        PrintError::UnsupportedImageFormat.to_string(),
        "Unsupported image format: use JPEG or PNG"
    );
    assert!(
        PrintError::MissingPrintSize("ORD-9".to_string())
            .to_string()
            .contains("ORD-9")
    );
}
