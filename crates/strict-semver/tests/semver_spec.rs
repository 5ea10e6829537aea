//! Scenarios taken from the Semantic Versioning 2.0.0 document

use strict_semver::{
    less, next_major, next_minor, next_patch, parse, to_string, ParseError, Version,
};

fn v(s: &str) -> Version {
    parse(s).unwrap_or_else(|e| panic!("couldn't parse version string {:?}: {}", s, e))
}

// 2. Each element MUST increase numerically. For instance: 1.9.0 -> 1.10.0 -> 1.11.0.
#[test]
fn test_numeric_increase() {
    let chain = ["1.9.0", "1.10.0", "1.11.0"];
    for pair in chain.windows(2) {
        assert!(less(&v(pair[0]), &v(pair[1])), "{} < {}", pair[0], pair[1]);
    }
    assert_eq!(to_string(&next_minor(&v("1.9.0")).unwrap()), "1.10.0");
}

// 7 and 8. Lower components are reset when a higher one is incremented.
#[test]
fn test_reset_law() {
    for s in ["0.0.0", "1.2.3", "4.5.6-rc.1", "7.8.9+build", "1.0.0-alpha+001"] {
        let version = v(s);

        let major = next_major(&version).unwrap();
        assert_eq!((major.minor, major.patch), (0, 0));
        assert_eq!(major.major, version.major + 1);

        let minor = next_minor(&version).unwrap();
        assert_eq!(minor.patch, 0);
        assert_eq!((minor.major, minor.minor), (version.major, version.minor + 1));

        let patch = next_patch(&version).unwrap();
        assert_eq!(
            (patch.major, patch.minor, patch.patch),
            (version.major, version.minor, version.patch + 1)
        );

        for next in [major, minor, patch] {
            assert!(next.pre_release.is_empty());
            assert!(next.build.is_empty());
        }
    }
}

// Incrementing a component already at u64::MAX has no successor.
#[test]
fn test_successors_never_wrap() {
    assert_eq!(next_major(&v("18446744073709551615.0.0")), None);
    assert_eq!(next_minor(&v("1.18446744073709551615.0")), None);
    assert_eq!(next_patch(&v("1.2.18446744073709551615")), None);
    assert_eq!(
        to_string(&next_patch(&v("18446744073709551615.18446744073709551615.1")).unwrap()),
        "18446744073709551615.18446744073709551615.2"
    );
}

// 9. Pre-release versions have a lower precedence than the associated normal version.
#[test]
fn test_pre_release_precedence() {
    for s in ["1.0.0-alpha", "1.0.0-alpha.1", "1.0.0-0.3.7", "1.0.0-x.7.z.92"] {
        let version = v(s);
        let normal = Version::new(version.major, version.minor, version.patch);
        assert!(less(&version, &normal), "{} < {}", version, normal);
        assert!(!less(&normal, &version), "!({} < {})", normal, version);
    }
}

// 10. Build metadata examples parse and only break ties.
#[test]
fn test_build_metadata() {
    for s in ["1.0.0-alpha+001", "1.0.0+20130313144700", "1.0.0-beta+exp.sha.5114f85"] {
        let version = v(s);
        let stripped = Version {
            build: Vec::new(),
            ..version.clone()
        };
        assert!(less(&stripped, &version), "{} < {}", stripped, version);
        assert!(!less(&version, &stripped));
        // never outranks the next pre-release or normal version
        assert!(less(&version, &next_patch(&stripped).unwrap()));
    }
}

// 11. 1.0.0-alpha < 1.0.0-alpha.1 < 1.0.0-alpha.beta < 1.0.0-beta < 1.0.0-beta.2 <
// 1.0.0-beta.11 < 1.0.0-rc.1 < 1.0.0.
#[test]
fn test_sort_order() {
    let version_strings = [
        "1.0.0-alpha",
        "1.0.0-alpha.1",
        "1.0.0-alpha.beta",
        "1.0.0-beta",
        "1.0.0-beta.2",
        "1.0.0-beta.11",
        "1.0.0-rc.1",
        "1.0.0",
        "2.0.0",
        "2.1.0",
        "2.1.1",
    ];
    let versions: Vec<Version> = version_strings.iter().map(|s| v(s)).collect();

    for pair in versions.windows(2) {
        assert!(less(&pair[0], &pair[1]), "{} < {}", pair[0], pair[1]);
        assert!(!less(&pair[1], &pair[0]), "!({} < {})", pair[1], pair[0]);
    }

    let mut shuffled = versions.clone();
    shuffled.reverse();
    shuffled.swap(1, 7);
    shuffled.sort_by(|a, b| {
        if less(a, b) {
            std::cmp::Ordering::Less
        } else if less(b, a) {
            std::cmp::Ordering::Greater
        } else {
            std::cmp::Ordering::Equal
        }
    });
    let rendered: Vec<String> = shuffled.iter().map(to_string).collect();
    assert_eq!(rendered, version_strings);
}

#[test]
fn test_round_trip_canonical_forms() {
    for s in [
        "0.0.4",
        "1.2.3",
        "10.20.30",
        "1.1.2-prerelease+meta",
        "1.1.2+meta-valid",
        "1.0.0-alpha.beta.1",
        "1.0.0-alpha0.valid",
        "1.0.0-rc.1+build.1",
        "2.0.0-rc.1+build.123",
        "1.2.3-beta",
        "10.2.3-DEV-SNAPSHOT",
        "1.2.3-SNAPSHOT-123",
        "2.0.0+build.1848",
        "1.0.0-alpha-a.b-c-somethinglong+build.1-aef.1-its-okay",
        "1.2.3----RC-SNAPSHOT.12.9.1--.12+788",
        "1.2.3----R-S.12.9.1--.12+meta",
        "1.0.0+0.build.1-rc.10000aaa-kk-0.1",
        "1.0.0-0A.is.legal",
    ] {
        assert_eq!(to_string(&v(s)), s);
    }
}

#[test]
fn test_malformed_inputs() {
    for s in [
        "1",
        "1.2",
        "1.2.3-0123",
        "1.2.3-0123.0123",
        "1.1.2+.123",
        "+invalid",
        "-invalid",
        "-invalid+invalid",
        "-invalid.01",
        "alpha",
        "alpha.beta",
        "alpha_beta",
        "1.0.0-alpha..",
        "1.0.0-alpha..1",
        "1.0.0-alpha...1",
        "01.1.1",
        "1.01.1",
        "1.1.01",
        "1.2.3.DEV",
        "1.2-SNAPSHOT",
        "1.2.31.2.3----RC-SNAPSHOT.12.09.1--..12+788",
        "+justmeta",
        "9.8.7+meta+meta",
        "9.8.7-whatever+meta+meta",
        "99999999999999999999999.999999999999999999.99999999999999999",
    ] {
        assert!(parse(s).is_err(), "{:?} should be rejected", s);
    }
}

#[test]
fn test_error_kinds() {
    assert_eq!(parse("1.0"), Err(ParseError::UnexpectedEof));
    assert_eq!(parse("1.0.0-"), Err(ParseError::UnexpectedEof));
    assert!(matches!(parse("01.0.0"), Err(ParseError::LeadingZero { .. })));
    assert!(matches!(parse("1.2.3.DEV"), Err(ParseError::ExpectedDashPlusOrEof { .. })));
    assert!(matches!(parse("9.8.7+meta+meta"), Err(ParseError::ExpectedDotOrEof { .. })));
    assert!(matches!(parse("alpha"), Err(ParseError::InvalidCharacter { .. })));
    assert!(matches!(parse("-invalid"), Err(ParseError::ExpectedNumber { .. })));
    assert!(matches!(
        parse("99999999999999999999999.0.0"),
        Err(ParseError::NumberOutOfRange { .. })
    ));
}
