//! Property-based tests for ss_logger using proptest

use proptest::prelude::*;
use ss_logger::prelude::*;
use ss_logger::render;

fn level_strategy() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Verbose),
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warning),
        Just(LogLevel::Error),
        Just(LogLevel::Emergency),
    ]
}

fn arg_strategy() -> impl Strategy<Value = FormatArg> {
    prop_oneof![
        any::<i64>().prop_map(FormatArg::from),
        any::<u64>().prop_map(FormatArg::from),
        any::<bool>().prop_map(FormatArg::from),
        "[a-z]{0,12}".prop_map(FormatArg::from),
    ]
}

// ============================================================================
// Format Engine Tests
// ============================================================================

proptest! {
    /// A format string without `%` passes through untouched, whatever the
    /// argument list looks like
    #[test]
    fn test_no_tokens_is_identity(
        fmt in "[^%]*",
        args in prop::collection::vec(arg_strategy(), 0..6),
    ) {
        assert_eq!(render(&fmt, &args), fmt);
    }

    /// Substitution points beyond the argument list render as literal `%`
    #[test]
    fn test_exhausted_arguments_render_literal_percent(
        total in 1usize..8,
        provided in 0usize..8,
    ) {
        prop_assume!(provided < total);

        let fmt = vec!["%s"; total].join(" ");
        let args: Vec<FormatArg> = (0..provided)
            .map(|i| FormatArg::from(format!("<{}>", i)))
            .collect();

        let rendered = render(&fmt, &args);

        let expected = (0..total)
            .map(|i| {
                if i < provided {
                    format!("<{}>", i)
                } else {
                    "%".to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(rendered, expected);
    }

    /// Arguments beyond the last substitution point never reach the output
    #[test]
    fn test_surplus_arguments_ignored(points in 0usize..6, surplus in 1usize..6) {
        let fmt = vec!["%s"; points].join(" ");
        let args: Vec<FormatArg> = (0..points + surplus)
            .map(|i| FormatArg::from(format!("<{}>", i)))
            .collect();

        let rendered = render(&fmt, &args);

        for i in points..points + surplus {
            assert!(
                !rendered.contains(&format!("<{}>", i)),
                "surplus argument <{}> leaked into {:?}", i, rendered
            );
        }
    }

    /// `%%` renders one literal `%` and consumes no argument, in any context
    #[test]
    fn test_percent_escape_consumes_nothing(
        prefix in "[^%]{0,10}",
        suffix in "[^%]{0,10}",
        args in prop::collection::vec(arg_strategy(), 0..4),
    ) {
        let fmt = format!("{}%%{}", prefix, suffix);
        assert_eq!(render(&fmt, &args), format!("{}%{}", prefix, suffix));
    }

    /// The hex marker affects exactly the next substitution and never a
    /// later one
    #[test]
    fn test_hex_marker_one_shot(a in any::<i64>(), b in any::<i64>()) {
        let args = [FormatArg::from(a), FormatArg::from(b)];
        assert_eq!(render("%x then %d", &args), format!("0x{} then {}", a, b));
    }

    /// Rendering has no hidden state: the same inputs give the same output
    #[test]
    fn test_render_is_idempotent(
        fmt in ".*",
        args in prop::collection::vec(arg_strategy(), 0..6),
    ) {
        let first = render(&fmt, &args);
        let second = render(&fmt, &args);
        assert_eq!(first, second);
    }
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in level_strategy()) {
        let as_str = level.to_str();
        let parsed: LogLevel = as_str.parse().unwrap();
        assert_eq!(level, parsed);
    }

    /// LogLevel ordering agrees with the numeric ranks
    #[test]
    fn test_log_level_ordering_matches_ranks(
        level1 in level_strategy(),
        level2 in level_strategy(),
    ) {
        let val1 = level1.rank();
        let val2 = level2.rank();

        assert_eq!(level1 <= level2, val1 <= val2);
        assert_eq!(level1 < level2, val1 < val2);
        assert_eq!(level1 >= level2, val1 >= val2);
        assert_eq!(level1 > level2, val1 > val2);
    }

    /// LogLevel Display matches to_str
    #[test]
    fn test_log_level_display(level in level_strategy()) {
        assert_eq!(format!("{}", level), level.to_str());
    }

    /// Parsing accepts case-insensitive input
    #[test]
    fn test_log_level_case_insensitive(use_lower in any::<bool>()) {
        let levels = vec!["VERBOSE", "DEBUG", "INFO", "WARNING", "ERROR", "EMERGENCY"];

        for level_str in levels {
            let input = if use_lower {
                level_str.to_lowercase()
            } else {
                level_str.to_string()
            };

            let parsed: std::result::Result<LogLevel, String> = input.parse();
            assert!(parsed.is_ok(), "Failed to parse: {}", input);
        }
    }

    /// FromStr rejects garbage without panicking
    #[test]
    fn test_log_level_invalid_parse(invalid_str in "[0-9_@#!]+") {
        let result: std::result::Result<LogLevel, String> = invalid_str.parse();
        assert!(result.is_err(), "Expected parse error for '{}'", invalid_str);
    }

    /// A threshold never filters Emergency
    #[test]
    fn test_emergency_passes_any_threshold(threshold in level_strategy()) {
        assert!(threshold.accepts(LogLevel::Emergency));
    }

    /// LogLevel JSON serialization roundtrips
    #[test]
    fn test_log_level_json_roundtrip(level in level_strategy()) {
        let json_str = serde_json::to_string(&level).unwrap();
        let deserialized: LogLevel = serde_json::from_str(&json_str).unwrap();
        assert_eq!(deserialized, level);
    }
}

// ============================================================================
// Logger Filtering Tests
// ============================================================================

proptest! {
    /// A write happens iff the severity passes the threshold, and the
    /// rendered text comes back either way
    #[test]
    fn test_threshold_gates_writes(
        threshold in level_strategy(),
        level in level_strategy(),
    ) {
        prop_assume!(level != LogLevel::Emergency);

        let sink = MemorySink::new();
        let buffer = sink.handle();
        let logger = Logger::builder().level(threshold).sink(sink).build();

        let text = logger.log(level, "status %s", &[FormatArg::from("ok")]);

        assert_eq!(text, "status ok");
        assert_eq!(!buffer.contents().is_empty(), threshold.accepts(level));
    }

    /// Logging never mangles the rendered message inside the stamped line
    #[test]
    fn test_written_line_carries_message(payload in "[a-z0-9 ]{1,24}") {
        let sink = MemorySink::new();
        let buffer = sink.handle();
        let logger = Logger::builder().level(LogLevel::Verbose).sink(sink).build();

        logger.info("payload: %s", &[FormatArg::from(payload.as_str())]);

        let contents = buffer.contents();
        assert!(contents.contains(&format!("payload: {}", payload)));
        assert!(contents.contains("[INFO]"));
    }
}
