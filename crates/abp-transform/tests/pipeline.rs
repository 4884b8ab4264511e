//! End-to-end tests for the address conversion pipeline.

use abp_model::{INSERTED_COLUMNS, MAIN_CATEGORY, SchemaError, required_source_columns};
use abp_transform::{
    TransformError, clean_and_filter, column_names, convert_addresses, normalize_shape,
    select_and_rename,
};
use polars::prelude::*;
use proptest::prelude::*;

/// Builds a source frame with every required column; `CATEGORY` from `categories`.
fn source_df(categories: &[&str]) -> DataFrame {
    let height = categories.len();
    let columns: Vec<Column> = required_source_columns()
        .into_iter()
        .map(|name| {
            if name == "CATEGORY" {
                Column::new(name.into(), categories)
            } else {
                let values: Vec<String> = (0..height).map(|row| format!("{name}-{row}")).collect();
                Column::new(name.into(), values)
            }
        })
        .collect();
    DataFrame::new(columns).unwrap()
}

fn text(df: &DataFrame, column: &str) -> Vec<Option<String>> {
    df.column(column)
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect()
}

#[test]
fn test_residential_utilities_zoo_scenario() {
    let source = source_df(&["Residential", "Utilities", "Zoo"]);
    let output = convert_addresses(&source).unwrap();

    assert_eq!(output.data.height(), 1);
    assert_eq!(text(&output.data, "uprn"), vec![Some("UPRN-0".to_string())]);
    assert_eq!(
        text(&output.data, MAIN_CATEGORY),
        vec![Some("residential".to_string())]
    );
    assert_eq!(
        text(&output.data, "year_created"),
        vec![Some("2024".to_string())]
    );
    for inserted in INSERTED_COLUMNS.iter().filter(|c| c.value.is_empty()) {
        assert_eq!(text(&output.data, inserted.name), vec![None]);
    }

    assert_eq!(output.stats.input_rows, 3);
    assert_eq!(output.stats.excluded_rows, 1);
    assert_eq!(output.stats.residual_rows, 1);
    assert_eq!(output.stats.output_rows, 1);
    assert_eq!(output.stats.categories.residential, 1);
}

#[test]
fn test_output_column_layout() {
    let output = convert_addresses(&source_df(&["Industrial"])).unwrap();

    insta::assert_snapshot!(column_names(&output.data).join("\n"), @r"
    uprn
    udprn
    x_coordina
    y_coordina
    latitude
    longitude
    postcode
    category
    Organisation name
    Building name
    Sub building name
    Building number
    Street
    Town
    Council
    Eastings
    Northings
    main_category
    Borough
    year_created
    house_polygon
    geometry
    udprn_available
    highest_point_latitude
    highest_point_longitude
    parent_uprn
    has_parent_uprn
    mdu_count
    ");
    assert_eq!(output.stats.output_columns.len(), 28);
}

#[test]
fn test_normalized_width_before_cleanup() {
    let selected = select_and_rename(&source_df(&["Residential"])).unwrap();
    let normalized = normalize_shape(&selected).unwrap();

    assert_eq!(normalized.width(), 37);
    let names = column_names(&normalized);
    assert_eq!(names[27], "classification_code");
    assert_eq!(names[28], "mdu_count");
    assert_eq!(names[29], "Empty_21");

    let cleaned = clean_and_filter(&normalized).unwrap();
    assert_eq!(cleaned.width(), 28);
}

#[test]
fn test_missing_postcode_fails_before_output() {
    let source = source_df(&["Residential"]).drop("POSTCODE").unwrap();
    let err = convert_addresses(&source).unwrap_err();

    assert!(matches!(
        err,
        TransformError::Schema(SchemaError::MissingColumns { ref columns, .. })
            if columns == &vec!["POSTCODE".to_string()]
    ));
}

#[test]
fn test_lowercase_utilities_passes_exclusion_but_is_dropped() {
    let source = source_df(&["utilities", "Multi-Occupancy Commercial"]);
    let output = convert_addresses(&source).unwrap();

    assert_eq!(output.stats.excluded_rows, 0);
    assert_eq!(output.stats.residual_rows, 1);
    assert_eq!(
        text(&output.data, "category"),
        vec![Some("Multi-Occupancy Commercial".to_string())]
    );
}

#[test]
fn test_source_frame_untouched() {
    let source = source_df(&["Zoo", "Leisure"]);
    let before = source.clone();
    convert_addresses(&source).unwrap();

    assert!(source.equals_missing(&before));
}

#[test]
fn test_empty_input_keeps_layout() {
    let output = convert_addresses(&source_df(&[])).unwrap();

    assert_eq!(output.data.height(), 0);
    assert_eq!(output.data.width(), 28);
}

const CATEGORY_POOL: &[&str] = &[
    "Residential",
    "residential",
    "Multi-Occupancy Residential",
    "Unclassified",
    "Industrial",
    "Leisure",
    "Multi-Occupancy Commercial",
    "Place of Worship",
    "Public Sectors",
    "Pubs and Hotels",
    "Land and Pathways",
    "Street Furniture",
    "Utilities",
    "utilities",
    "Zoo",
    " Residential",
    "",
];

proptest! {
    #[test]
    fn prop_rows_only_removed_and_no_residual(
        picks in proptest::collection::vec(0..CATEGORY_POOL.len(), 0..40)
    ) {
        let categories: Vec<&str> = picks.iter().map(|&i| CATEGORY_POOL[i]).collect();
        let output = convert_addresses(&source_df(&categories)).unwrap();

        prop_assert!(output.data.height() <= categories.len());
        for value in text(&output.data, MAIN_CATEGORY) {
            let value = value.unwrap();
            prop_assert!(value == "residential" || value == "business");
        }
        for value in text(&output.data, "category") {
            prop_assert_ne!(value.as_deref(), Some("Utilities"));
        }
        for inserted in &INSERTED_COLUMNS {
            let expected = (!inserted.value.is_empty()).then_some(inserted.value);
            for value in text(&output.data, inserted.name) {
                prop_assert_eq!(value.as_deref(), expected);
            }
        }
    }

    #[test]
    fn prop_row_order_preserved(
        picks in proptest::collection::vec(0..CATEGORY_POOL.len(), 0..40)
    ) {
        let categories: Vec<&str> = picks.iter().map(|&i| CATEGORY_POOL[i]).collect();
        let output = convert_addresses(&source_df(&categories)).unwrap();

        let rows: Vec<usize> = text(&output.data, "uprn")
            .into_iter()
            .map(|uprn| uprn.unwrap().trim_start_matches("UPRN-").parse().unwrap())
            .collect();
        prop_assert!(rows.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
