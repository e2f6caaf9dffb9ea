//! Integration tests for the survey data model.

use survey_model::{
    CategoryCount, Facet, FieldSpec, FilterState, Response, SurveyError, SurveySchema, ValueKind,
    fields, is_multi_select_field_name, meaningful, split_choices,
};

#[test]
fn schema_rejects_duplicates_and_unmarked_multi_choice() {
    let duplicate = SurveySchema::new([
        FieldSpec::new("demografi", "kjønn", "Kjønn", ValueKind::Scalar),
        FieldSpec::new("demografi", "kjønn", "Kjønn igjen", ValueKind::Scalar),
    ]);
    assert!(matches!(duplicate, Err(SurveyError::InvalidSchema(_))));

    let mislabeled = SurveySchema::new([FieldSpec::new(
        "omrade_kvalitet",
        "hva_savner_du_flere_valg_mulig",
        "Savner",
        ValueKind::Scalar,
    )]);
    assert!(matches!(mislabeled, Err(SurveyError::InvalidSchema(_))));
}

#[test]
fn custom_schema_lookups() {
    let schema = SurveySchema::new([
        FieldSpec::new("a", "x", "X", ValueKind::Scalar),
        FieldSpec::new("a", "y", "Y", ValueKind::MultiChoice),
        FieldSpec::new("b", "z", "Z", ValueKind::FreeText),
    ])
    .unwrap();

    assert_eq!(schema.len(), 3);
    assert_eq!(schema.categories().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(schema.fields_in("a").unwrap().count(), 2);
    assert!(!schema.field("b", "z").unwrap().kind.is_aggregatable());
    assert_eq!(
        schema.field("c", "x"),
        Err(SurveyError::UnknownCategory {
            category: "c".to_string()
        })
    );
}

#[test]
fn housing_survey_knows_every_well_known_field() {
    let schema = SurveySchema::housing_survey();
    for field in [
        fields::AGE,
        fields::GENDER,
        fields::LOCATION,
        fields::DESTINATIONS,
        fields::PURCHASE_CAPACITY,
        fields::POLICY_FEEDBACK,
        fields::PLOT_REASON,
    ] {
        assert!(schema.field_ref(field).is_ok(), "{field:?}");
    }
    assert_eq!(
        schema.field_ref(fields::DESTINATIONS).unwrap().kind,
        ValueKind::MultiChoice
    );
    assert!(is_multi_select_field_name(fields::DESTINATIONS.key));
}

#[test]
fn answers_read_through_placeholders() {
    let response = Response::new(3)
        .with_answer(fields::AGE, Some(""))
        .with_answer(fields::GENDER, Some("Unset"))
        .with_answer(fields::LOCATION, None);

    assert_eq!(response.value(fields::AGE), None);
    assert_eq!(response.value(fields::LOCATION), None);
    assert_eq!(meaningful(response.value(fields::GENDER)), None);
    assert_eq!(split_choices("Skole;.;Butikk").count(), 2);
}

#[test]
fn counts_keep_first_seen_order() {
    let mut counts = CategoryCount::new();
    for label in ["Otnes", "Bergset", "Otnes"] {
        counts.increment(label);
    }
    assert_eq!(counts.labels().collect::<Vec<_>>(), vec!["Otnes", "Bergset"]);
    assert_eq!(counts.count_of("Otnes"), 2);
    assert_eq!(counts.count_of("Hanestad"), 0);
    assert_eq!(counts.total(), 3);
}

#[test]
fn filter_state_round_trips_through_json() {
    let filters = FilterState::new()
        .with(Facet::HouseholdType, ["Bor alene"])
        .with(Facet::EconomicCapacity, ["2-3 mill", "3-4 mill"]);
    let json = serde_json::to_string(&filters).unwrap();
    assert!(json.contains("\"householdType\""));
    let back: FilterState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, filters);
    assert_eq!(
        back.active_facets().collect::<Vec<_>>(),
        vec![Facet::HouseholdType, Facet::EconomicCapacity]
    );
}
