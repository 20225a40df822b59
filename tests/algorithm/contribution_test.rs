//! Tests for the confidence-weighted contribution model

use oral_gi::{
    BoundingBox, DetectedLesion, DiseaseComputation, DiseaseType, LesionType,
    compute_disease_probabilities,
};
use pretty_assertions::assert_eq;

fn find(results: &[DiseaseComputation], disease: DiseaseType) -> &DiseaseComputation {
    results.iter().find(|r| r.disease == disease).unwrap()
}

#[test]
fn test_aphthous_ulcer_split_three_ways() {
    let results = compute_disease_probabilities(&[DetectedLesion::new("Aphthous Ulcer", 80.0)]);

    let order: Vec<_> = results.iter().map(|r| r.disease).collect();
    assert_eq!(
        order,
        vec![
            DiseaseType::CrohnsDisease,
            DiseaseType::UlcerativeColitis,
            DiseaseType::CeliacDisease,
            DiseaseType::ChronicLiverDisease,
        ]
    );

    for disease in [
        DiseaseType::CrohnsDisease,
        DiseaseType::UlcerativeColitis,
        DiseaseType::CeliacDisease,
    ] {
        let r = find(&results, disease);
        assert_eq!(r.total_probability, 16.53);
        assert_eq!(r.contributions.len(), 1);
        let c = &r.contributions[0];
        assert_eq!(c.lesion, LesionType::AphthousUlcer);
        assert_eq!(c.confidence, 80.0);
        assert_eq!(c.adjustment_factor, 0.62);
        assert_eq!(c.shared_with, 3);
        assert!((c.adjusted_value - 49.6).abs() < 1e-9);
        assert!((c.final_contribution - 80.0 * 0.62 / 3.0).abs() < 1e-9);
    }

    let liver = find(&results, DiseaseType::ChronicLiverDisease);
    assert_eq!(liver.total_probability, 0.0);
    assert!(liver.contributions.is_empty());
}

#[test]
fn test_gingivitis_full_confidence() {
    let results = compute_disease_probabilities(&[DetectedLesion::new("Gingivitis", 100.0)]);

    assert_eq!(find(&results, DiseaseType::CrohnsDisease).total_probability, 24.0);
    assert_eq!(find(&results, DiseaseType::ChronicLiverDisease).total_probability, 24.0);
    assert_eq!(find(&results, DiseaseType::UlcerativeColitis).total_probability, 24.0);
    assert_eq!(find(&results, DiseaseType::CeliacDisease).total_probability, 0.0);

    // Celiac has no Gingivitis link, so it sinks to the bottom
    assert_eq!(results[3].disease, DiseaseType::CeliacDisease);
}

#[test]
fn test_repeated_detections_are_summed() {
    let results = compute_disease_probabilities(&[
        DetectedLesion::new("Dental Caries", 50.0),
        DetectedLesion::new("Dental Caries", 40.0),
    ]);

    let celiac = find(&results, DiseaseType::CeliacDisease);
    assert_eq!(celiac.contributions.len(), 2);
    assert_eq!(celiac.total_probability, 73.8);
    assert_eq!(results[0].disease, DiseaseType::CeliacDisease);
}

#[test]
fn test_mixed_lesions_rank_by_total() {
    let results = compute_disease_probabilities(&[
        DetectedLesion::new("Oral Candidiasis", 90.0),
        DetectedLesion::new("Xerostomia", 60.0),
        DetectedLesion::new("Mucosal Tags", 30.0),
    ]);

    // Liver: 90*0.75/2 + 60*0.7/2 = 33.75 + 21 = 54.75
    // Celiac: 33.75 + 21 + 30*0.68/2 = 64.95
    // Crohn's: 10.2
    assert_eq!(find(&results, DiseaseType::ChronicLiverDisease).total_probability, 54.75);
    assert_eq!(find(&results, DiseaseType::CeliacDisease).total_probability, 64.95);
    assert_eq!(find(&results, DiseaseType::CrohnsDisease).total_probability, 10.2);
    assert_eq!(find(&results, DiseaseType::UlcerativeColitis).total_probability, 0.0);

    let order: Vec<_> = results.iter().map(|r| r.disease).collect();
    assert_eq!(
        order,
        vec![
            DiseaseType::CeliacDisease,
            DiseaseType::ChronicLiverDisease,
            DiseaseType::CrohnsDisease,
            DiseaseType::UlcerativeColitis,
        ]
    );
}

#[test]
fn test_bbox_does_not_affect_result() {
    let bbox = BoundingBox {
        x: 10.0,
        y: 20.0,
        width: 30.0,
        height: 40.0,
    };
    let plain = compute_disease_probabilities(&[DetectedLesion::new("Xerostomia", 70.0)]);
    let boxed =
        compute_disease_probabilities(&[DetectedLesion::new("Xerostomia", 70.0).with_bbox(bbox)]);
    assert_eq!(plain, boxed);
}

#[test]
fn test_zero_confidence_keeps_fixed_disease_order() {
    let results = compute_disease_probabilities(&[DetectedLesion::new("Dental Caries", 0.0)]);

    let ranked: Vec<_> = results
        .iter()
        .map(|r| (r.disease, r.total_probability))
        .collect();
    assert_eq!(
        ranked,
        vec![
            (DiseaseType::CrohnsDisease, 0.0),
            (DiseaseType::UlcerativeColitis, 0.0),
            (DiseaseType::CeliacDisease, 0.0),
            (DiseaseType::ChronicLiverDisease, 0.0),
        ]
    );
    assert!(results.iter().all(|r| r.total_probability.is_sign_positive()));
}

#[test]
fn test_empty_input_serializes_zero_totals() {
    let results = compute_disease_probabilities(&[]);
    let json = serde_json::to_string(&results[0]).unwrap();
    assert_eq!(
        json,
        r#"{"disease":"Crohn's Disease","contributions":[],"total_probability":0.0}"#
    );
}
