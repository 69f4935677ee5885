use super::*;

#[test]
fn parses_extract_with_no_flags() {
    let cli = Cli::try_parse_from(["skint-cli", "extract"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Extract {
            limit: None,
            output: None,
            feed_url: None,
            dry_run: false,
            print_events: false
        }
    ));
}

#[test]
fn parses_extract_overrides() {
    let cli = Cli::try_parse_from([
        "skint-cli",
        "extract",
        "--limit",
        "5",
        "--output",
        "public/events.json",
        "--feed-url",
        "http://localhost:8080/feed/",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Commands::Extract {
            limit,
            output,
            feed_url,
            dry_run,
            ..
        } => {
            assert_eq!(limit, Some(5));
            assert_eq!(output, Some(PathBuf::from("public/events.json")));
            assert_eq!(feed_url.as_deref(), Some("http://localhost:8080/feed/"));
            assert!(!dry_run);
        }
        Commands::Feed { .. } => panic!("expected extract"),
    }
}

#[test]
fn parses_extract_dry_run() {
    let cli =
        Cli::try_parse_from(["skint-cli", "extract", "--dry-run"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Extract { dry_run: true, .. }
    ));
}

#[test]
fn rejects_negative_limit() {
    let result = Cli::try_parse_from(["skint-cli", "extract", "--limit", "-1"]);
    assert!(result.is_err());
}

#[test]
fn parses_feed_with_url() {
    let cli = Cli::try_parse_from(["skint-cli", "feed", "--feed-url", "http://example.com/rss"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Feed { feed_url: Some(ref u) } if u == "http://example.com/rss"
    ));
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["skint-cli"]).is_err());
}

#[test]
fn parses_extract_print_events() {
    let cli = Cli::try_parse_from(["skint-cli", "extract", "--print-events"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Extract {
            print_events: true,
            dry_run: false,
            ..
        }
    ));
}

#[test]
fn flags_become_config_overrides() {
    let overrides = config_overrides(
        Some(4),
        Some(PathBuf::from("out/events.json")),
        Some("http://localhost:8080/feed/".to_string()),
    );
    assert_eq!(
        overrides,
        vec![
            ("SKINT_ITEM_LIMIT", "4".to_string()),
            ("SKINT_OUTPUT_PATH", "out/events.json".to_string()),
            ("SKINT_FEED_URL", "http://localhost:8080/feed/".to_string()),
        ]
    );
}

#[test]
fn absent_flags_leave_config_to_the_environment() {
    assert!(config_overrides(None, None, None).is_empty());
}

#[test]
fn rendered_events_start_with_the_count() {
    let rendered = extract::render_events(&[]).expect("empty list serializes");
    assert_eq!(rendered, "Extracted 0 events:\n[]");
}
