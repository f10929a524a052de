use super::*;

#[test]
fn known_tags_parse() {
    assert_eq!(Strategy::from_tag("linear"), Strategy::Linear);
    assert_eq!(Strategy::from_tag("column"), Strategy::Column);
    assert_eq!(Strategy::from_tag("grid"), Strategy::Grid(GridSeed::CenterBias));
    assert_eq!(
        Strategy::from_tag("grid-uniform"),
        Strategy::Grid(GridSeed::Uniform)
    );
}

#[test]
fn parsing_is_case_and_whitespace_tolerant() {
    assert_eq!(Strategy::from_tag("  Linear "), Strategy::Linear);
    assert_eq!(Strategy::from_tag("GRID"), Strategy::Grid(GridSeed::CenterBias));
}

#[test]
fn unrecognized_tags_fall_back_to_column() {
    assert_eq!(Strategy::from_tag(""), Strategy::Column);
    assert_eq!(Strategy::from_tag("spiral"), Strategy::Column);
    assert_eq!(Strategy::from_tag("masonry"), Strategy::Column);
}

#[test]
fn tags_round_trip() {
    for strategy in [
        Strategy::Linear,
        Strategy::Column,
        Strategy::Grid(GridSeed::CenterBias),
        Strategy::Grid(GridSeed::Uniform),
    ] {
        assert_eq!(Strategy::from_tag(strategy.tag()), strategy);
    }
}

#[test]
fn default_is_column() {
    assert_eq!(Strategy::default(), Strategy::Column);
}
