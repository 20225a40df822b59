//! Tests for the linkage-normalization model

use oral_gi::{
    DiseaseType, LesionType, LinkageProbability, PresentLesion, calculate_disease_probabilities,
};
use pretty_assertions::assert_eq;

fn find(results: &[LinkageProbability], disease: DiseaseType) -> &LinkageProbability {
    results.iter().find(|r| r.disease == disease).unwrap()
}

#[test]
fn test_xerostomia_normalized_against_max() {
    let results = calculate_disease_probabilities(&[PresentLesion::new("Xerostomia")]);

    let ranked: Vec<_> = results.iter().map(|r| (r.disease, r.probability)).collect();
    assert_eq!(
        ranked,
        vec![
            (DiseaseType::UlcerativeColitis, 100.0),
            (DiseaseType::CrohnsDisease, 58.33),
            (DiseaseType::ChronicLiverDisease, 50.0),
            (DiseaseType::CeliacDisease, 41.67),
        ]
    );

    let crohns = find(&results, DiseaseType::CrohnsDisease);
    assert_eq!(crohns.contributing_lesion_probabilities.len(), 1);
    assert_eq!(
        crohns.contributing_lesion_probabilities[0].lesion,
        LesionType::Xerostomia
    );
    assert!((crohns.contributing_lesion_probabilities[0].probability - 35.0).abs() < 1e-9);
    assert_eq!(crohns.detected_lesions, vec!["Xerostomia".to_string()]);
}

#[test]
fn test_multiple_lesions_accumulate() {
    let results = calculate_disease_probabilities(&[
        PresentLesion::new("Mucosal Tags"),
        PresentLesion::new("Gingivitis"),
    ]);

    // Raw scores: Crohn's 118, Celiac 22, UC 55, Liver 20
    assert_eq!(results[0].disease, DiseaseType::CrohnsDisease);
    assert_eq!(results[0].probability, 100.0);
    assert_eq!(find(&results, DiseaseType::UlcerativeColitis).probability, 46.61);
    assert_eq!(find(&results, DiseaseType::CeliacDisease).probability, 18.64);
    assert_eq!(find(&results, DiseaseType::ChronicLiverDisease).probability, 16.95);
}

#[test]
fn test_top_disease_is_exactly_one_hundred() {
    for lesion in LesionType::ALL {
        let results = calculate_disease_probabilities(&[PresentLesion::from(lesion)]);
        assert_eq!(results[0].probability, 100.0, "top disease for {lesion}");
        assert!(results.iter().all(|r| r.probability >= 0.0));
    }
}

#[test]
fn test_ties_keep_linkage_table_order() {
    let results = calculate_disease_probabilities(&[PresentLesion::new("Gingivitis")]);

    // Crohn's and UC tie at 0.5; Crohn's comes first in the table
    let ranked: Vec<_> = results.iter().map(|r| (r.disease, r.probability)).collect();
    assert_eq!(
        ranked,
        vec![
            (DiseaseType::CrohnsDisease, 100.0),
            (DiseaseType::UlcerativeColitis, 100.0),
            (DiseaseType::CeliacDisease, 40.0),
            (DiseaseType::ChronicLiverDisease, 36.0),
        ]
    );
    assert_eq!(results.iter().filter(|r| r.probability == 100.0).count(), 2);
}

#[test]
fn test_non_canonical_names_contribute_nothing() {
    let results = calculate_disease_probabilities(&[
        PresentLesion::new("thrush"),
        PresentLesion::new("Dental Caries"),
    ]);

    // Only Dental Caries counts; Liver has the strongest caries linkage
    assert_eq!(results[0].disease, DiseaseType::ChronicLiverDisease);
    for r in &results {
        assert_eq!(
            r.detected_lesions,
            vec!["thrush".to_string(), "Dental Caries".to_string()]
        );
        assert!(
            r.contributing_lesion_probabilities
                .iter()
                .all(|c| c.lesion == LesionType::DentalCaries)
        );
    }
}
