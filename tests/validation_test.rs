// ABOUTME: Integration tests for activity parameter validation
// ABOUTME: Covers presence, numeric parsing, domains, knuckle constraints and subject fill-in
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ergoload Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, garg, stoop_lift_activity, subject};
use ergoload::errors::{ErgoError, ErrorCode};
use ergoload::models::{Activity, ParameterName, RawParameters, RawValue, Subject};
use ergoload::{validate_activity, validate_parameters};

#[test]
fn test_valid_activity_is_accepted() {
    let params = validate_activity(&stoop_lift_activity(1), &subject()).unwrap();
    assert_eq!(params.equation(), garg(4));
    assert_eq!(params.len(), 5);
    assert_close(params.value(ParameterName::BodyWeight), 80.0);
    assert_close(params.value(ParameterName::Sex), 1.0);
}

#[test]
fn test_lower_height_above_upper_height_is_a_constraint_violation() {
    let activity = stoop_lift_activity(1)
        .with_parameter(ParameterName::LowerHeight, 0.9)
        .with_parameter(ParameterName::UpperHeight, 0.5);
    let err = validate_activity(&activity, &subject()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ConstraintViolation);
}

#[test]
fn test_equal_heights_are_a_constraint_violation() {
    let activity = stoop_lift_activity(1)
        .with_parameter(ParameterName::LowerHeight, 0.5)
        .with_parameter(ParameterName::UpperHeight, 0.5);
    let err = validate_activity(&activity, &subject()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ConstraintViolation);
}

#[test]
fn test_floor_to_knuckle_lift_cannot_end_above_knuckle() {
    let activity = stoop_lift_activity(1).with_parameter(ParameterName::UpperHeight, 0.9);
    let err = validate_activity(&activity, &subject()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ConstraintViolation);

    let at_knuckle = stoop_lift_activity(1).with_parameter(ParameterName::UpperHeight, 0.81);
    assert!(validate_activity(&at_knuckle, &subject()).is_ok());
}

#[test]
fn test_arm_lift_must_start_above_knuckle() {
    let activity = Activity::new(garg(6))
        .with_parameter(ParameterName::Load, 5.0)
        .with_parameter(ParameterName::LowerHeight, 0.5)
        .with_parameter(ParameterName::UpperHeight, 1.2);
    let err = validate_activity(&activity, &subject()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ConstraintViolation);

    let above = activity.with_parameter(ParameterName::LowerHeight, 0.9);
    assert!(validate_activity(&above, &subject()).is_ok());
}

#[test]
fn test_missing_parameter_is_named() {
    let activity = Activity::new(garg(4))
        .with_parameter(ParameterName::LowerHeight, 0.1)
        .with_parameter(ParameterName::UpperHeight, 0.7);
    let err = validate_activity(&activity, &subject()).unwrap_err();
    assert_eq!(err, ErgoError::missing_parameter("L"));
    assert_eq!(err.parameter(), Some("L"));
}

#[test]
fn test_blank_value_counts_as_missing() {
    let activity = stoop_lift_activity(1).with_parameter(ParameterName::Load, "   ");
    let err = validate_activity(&activity, &subject()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::MissingParameter);
}

#[test]
fn test_comma_decimal_separator_is_accepted() {
    let activity = stoop_lift_activity(1).with_parameter(ParameterName::Load, "12,5");
    let params = validate_activity(&activity, &subject()).unwrap();
    assert_close(params.value(ParameterName::Load), 12.5);
}

#[test]
fn test_non_numeric_text_is_invalid() {
    let activity = stoop_lift_activity(1).with_parameter(ParameterName::Load, "heavy");
    let err = validate_activity(&activity, &subject()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidDomain);
    assert_eq!(err.parameter(), Some("L"));
}

#[test]
fn test_negative_mass_is_invalid() {
    let activity = stoop_lift_activity(1).with_parameter(ParameterName::Load, -1.0);
    let err = validate_activity(&activity, &subject()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidDomain);
}

#[test]
fn test_sex_flag_must_be_zero_or_one() {
    let activity = stoop_lift_activity(1).with_parameter(ParameterName::Sex, 0.5);
    let err = validate_activity(&activity, &subject()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidDomain);
    assert_eq!(err.parameter(), Some("S"));
}

#[test]
fn test_percentage_above_hundred_is_invalid() {
    let activity = Activity::new(garg(11))
        .with_parameter(ParameterName::Speed, 1.0)
        .with_parameter(ParameterName::Grade, 150.0)
        .with_duration(5.0);
    let err = validate_activity(&activity, &subject()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidDomain);
    assert_eq!(err.parameter(), Some("G"));
}

#[test]
fn test_undeclared_parameters_are_ignored() {
    let mut activity = stoop_lift_activity(1);
    activity
        .parameters
        .insert("notes".to_owned(), RawValue::from("careful"));
    let params = validate_activity(&activity, &subject()).unwrap();
    assert_eq!(params.len(), 5);
}

#[test]
fn test_subject_values_fill_absent_parameters() {
    let activity = Activity::new(garg(1));
    let params = validate_activity(&activity, &Subject::with_body_weight(72.0)).unwrap();
    assert_close(params.value(ParameterName::BodyWeight), 72.0);
}

#[test]
fn test_activity_values_win_over_subject_values() {
    let activity = Activity::new(garg(1)).with_parameter(ParameterName::BodyWeight, 90.0);
    let params = validate_activity(&activity, &Subject::with_body_weight(72.0)).unwrap();
    assert_close(params.value(ParameterName::BodyWeight), 90.0);
}

#[test]
fn test_missing_subject_value_is_reported() {
    let err = validate_activity(&Activity::new(garg(1)), &Subject::default()).unwrap_err();
    assert_eq!(err, ErgoError::missing_parameter("BW"));
}

#[test]
fn test_activity_duration_fills_time_parameter() {
    let activity = Activity::new(garg(22)).with_duration(15.0);
    let params = validate_activity(&activity, &Subject::default()).unwrap();
    assert_close(params.value(ParameterName::Duration), 15.0);
}

#[test]
fn test_extracted_record_validates_without_subject_defaults() {
    let raw: RawParameters = [
        ("BW", RawValue::Text("80".to_owned())),
        ("L", RawValue::Text("10,5".to_owned())),
        ("h1", RawValue::Number(0.1)),
        ("h2", RawValue::Number(0.7)),
        ("S", RawValue::Number(1.0)),
    ]
    .into_iter()
    .map(|(code, value)| (code.to_owned(), value))
    .collect();

    let params = validate_parameters(garg(4), &raw).unwrap();
    assert_eq!(params.equation(), garg(4));
    assert_close(params.value(ParameterName::Load), 10.5);

    let mut without_weight = raw;
    without_weight.remove("BW");
    let err = validate_parameters(garg(4), &without_weight).unwrap_err();
    assert_eq!(err.code(), ErrorCode::MissingParameter);
    assert_eq!(err.parameter(), Some("BW"));
}
