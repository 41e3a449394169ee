// ABOUTME: Integration tests for severity classification
// ABOUTME: Covers RSST and AIHA bands and the boundary rule for values on a boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ergoload Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use ergoload::classification::{classify, Classifier, SeverityLevel};
use ergoload::{BoundaryRule, SeverityScale};

fn rsst(kcal_per_min: f64, rule: BoundaryRule) -> SeverityLevel {
    classify(kcal_per_min, SeverityScale::Rsst, rule).level
}

fn aiha(kcal_per_min: f64, rule: BoundaryRule) -> SeverityLevel {
    classify(kcal_per_min, SeverityScale::Aiha, rule).level
}

#[test]
fn test_value_on_boundary_stays_in_lower_band_by_default() {
    assert_eq!(rsst(3.3, BoundaryRule::default()), SeverityLevel::Light);
    assert_eq!(rsst(3.31, BoundaryRule::default()), SeverityLevel::Medium);
}

#[test]
fn test_upper_band_rule_moves_boundary_values_up() {
    assert_eq!(rsst(3.3, BoundaryRule::UpperBand), SeverityLevel::Medium);
    assert_eq!(rsst(3.29, BoundaryRule::UpperBand), SeverityLevel::Light);
}

#[test]
fn test_rsst_scale() {
    let rule = BoundaryRule::LowerBand;
    assert_eq!(rsst(0.0, rule), SeverityLevel::Light);
    assert_eq!(rsst(6.0, rule), SeverityLevel::Heavy);
    assert_eq!(rsst(8.3, rule), SeverityLevel::Heavy);
    assert_eq!(rsst(9.0, rule), SeverityLevel::VeryHeavy);
}

#[test]
fn test_aiha_scale() {
    let rule = BoundaryRule::LowerBand;
    assert_eq!(aiha(1.0, rule), SeverityLevel::Rest);
    assert_eq!(aiha(2.0, rule), SeverityLevel::VeryLight);
    assert_eq!(aiha(4.0, rule), SeverityLevel::Light);
    assert_eq!(aiha(6.0, rule), SeverityLevel::Moderate);
    assert_eq!(aiha(8.0, rule), SeverityLevel::Heavy);
    assert_eq!(aiha(11.0, rule), SeverityLevel::VeryHeavy);
    assert_eq!(aiha(13.0, rule), SeverityLevel::ExcessivelyHeavy);
}

#[test]
fn test_top_boundary_of_aiha() {
    let lower = classify(12.5, SeverityScale::Aiha, BoundaryRule::LowerBand);
    assert_eq!(lower.level, SeverityLevel::VeryHeavy);
    assert_eq!(lower.band, 5);

    let upper = classify(12.5, SeverityScale::Aiha, BoundaryRule::UpperBand);
    assert_eq!(upper.level, SeverityLevel::ExcessivelyHeavy);
    assert_eq!(upper.band, 6);
}

#[test]
fn test_every_scale_has_one_more_level_than_boundaries() {
    for scale in SeverityScale::ALL {
        assert_eq!(scale.levels().len(), scale.boundaries().len() + 1);
        assert!(scale.boundaries().windows(2).all(|pair| pair[0] < pair[1]));
    }
}

#[test]
fn test_default_classifier_covers_both_scales() {
    let classifications = Classifier::default().classify(4.0);
    assert_eq!(classifications.len(), 2);
    assert_eq!(classifications[0].scale, SeverityScale::Rsst);
    assert_eq!(classifications[0].level, SeverityLevel::Medium);
    assert_eq!(classifications[1].scale, SeverityScale::Aiha);
    assert_eq!(classifications[1].level, SeverityLevel::Light);
}

#[test]
fn test_rule_and_scale_parsing() {
    assert_eq!("upper".parse::<BoundaryRule>().unwrap(), BoundaryRule::UpperBand);
    assert_eq!("Lower_Band".parse::<BoundaryRule>().unwrap(), BoundaryRule::LowerBand);
    assert!("middle".parse::<BoundaryRule>().is_err());
    assert_eq!(" AIHA ".parse::<SeverityScale>().unwrap(), SeverityScale::Aiha);
    assert!("borg".parse::<SeverityScale>().is_err());
}
