//! Tests for record parsing and the rejection taxonomy

use super::{low_precision_line, missing_designation_line, record_line, ENCKE_LINE};
use crate::app::services::mpc_parser::{ParserOptions, RecordParser, RejectionReason};
use crate::constants::SECTION_KEY_FORBIDDEN_CHARS;

#[test]
fn test_parse_canonical_record() {
    let parser = RecordParser::default();
    let elements = parser.parse(ENCKE_LINE).unwrap();

    assert_eq!(elements.designation, "2P/Encke");
    assert_eq!(elements.section_key, "2PEncke");
    assert_eq!(elements.perihelion_distance_au, 0.336152);
    assert_eq!(elements.eccentricity, 0.848265);
    assert_eq!(elements.arg_of_pericenter_deg, 186.5242);
    assert_eq!(elements.ascending_node_deg, 334.5718);
    assert_eq!(elements.inclination_deg, 11.7843);
    assert_eq!(elements.absolute_magnitude, 11.5);
    assert_eq!(elements.slope_parameter, 6.0);
    assert!((elements.perihelion_passage_jd - 2_455_415.010_196_759_3).abs() < 1e-8);
}

#[test]
fn test_parse_is_deterministic() {
    let parser = RecordParser::default();

    let first = parser.parse(ENCKE_LINE).unwrap();
    let second = parser.parse(ENCKE_LINE).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_section_key_contains_no_forbidden_characters() {
    let parser = RecordParser::default();
    let lines = [
        ENCKE_LINE.to_string(),
        record_line(
            "    CJ95O010  1997 03 31.4141  0.906507  0.994945  130.5321  282.6820   89.3193  20100723  -2.0  4.0  ",
            "C/1995 O1 (Hale-Bopp)",
            "MPC 61436",
        ),
    ];

    for line in &lines {
        let elements = parser.parse(line).unwrap();
        assert!(!elements.section_key.is_empty());
        assert!(
            !elements
                .section_key
                .contains(SECTION_KEY_FORBIDDEN_CHARS),
            "key {:?} carries a forbidden character",
            elements.section_key
        );
    }
}

#[test]
fn test_hale_bopp_section_key() {
    let parser = RecordParser::default();
    let line = record_line(
        "    CJ95O010  1997 03 31.4141  0.906507  0.994945  130.5321  282.6820   89.3193  20100723  -2.0  4.0  ",
        "C/1995 O1 (Hale-Bopp)",
        "MPC 61436",
    );

    let elements = parser.parse(&line).unwrap();
    assert_eq!(elements.section_key, "C1995O1(HaleBopp)");
    assert_eq!(elements.absolute_magnitude, -2.0);
}

#[test]
fn test_rejects_missing_designation() {
    let parser = RecordParser::default();

    assert_eq!(
        parser.parse(&missing_designation_line()),
        Err(RejectionReason::MissingDesignation)
    );
}

#[test]
fn test_rejects_invalid_calendar_date() {
    let parser = RecordParser::default();
    let line = ENCKE_LINE.replace("2010 08  6.5102", "2010 13  6.5102");

    assert!(matches!(
        parser.parse(&line),
        Err(RejectionReason::InvalidDate(_))
    ));
}

#[test]
fn test_rejects_malformed_lines_without_panicking() {
    let parser = RecordParser::default();
    let malformed = [
        "".to_string(),
        "   ".to_string(),
        "0002P         2010 08  6.5102  0.336152".to_string(),
        ENCKE_LINE.replace("0.336152", "0.3361"), // field width off
        format!("x{ENCKE_LINE}"),
    ];

    for line in &malformed {
        assert_eq!(
            parser.parse(line),
            Err(RejectionReason::GrammarMismatch),
            "line: {line:?}"
        );
    }
}

#[test]
fn test_parabolic_eccentricity_passes_through() {
    // e = 1 (parabolic) is a valid cometary solution and is not range-checked
    let parser = RecordParser::default();
    let line = record_line(
        "    CK10R010  2011 11 28.4570  6.662470  1.000000  96.0090   345.9490   157.4370            6.0   4.0  ",
        "C/2010 R1 (LINEAR)",
        "MPEC 2010-R99",
    );

    let elements = parser.parse(&line).unwrap();
    assert_eq!(elements.eccentricity, 1.0);
    assert!(!elements.is_bound_orbit());
}

#[test]
fn test_variable_precision_option() {
    let strict = RecordParser::default();
    let tolerant = RecordParser::new(ParserOptions {
        variable_precision: true,
    });
    let line = low_precision_line();

    assert_eq!(strict.parse(&line), Err(RejectionReason::GrammarMismatch));

    let elements = tolerant.parse(&line).unwrap();
    assert_eq!(elements.section_key, "C2010F4(Machholz)");
    assert_eq!(elements.perihelion_distance_au, 0.6138);
    assert_eq!(elements.eccentricity, 1.0);
}
