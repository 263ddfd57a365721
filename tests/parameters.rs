use orbit_visualizer::params::{
    OrbitalParameters, ParameterField, ParameterModel, ParameterRange, ValidationError,
};

fn valid_samples(field: ParameterField) -> Vec<f64> {
    let range = field.range();
    let mid = (range.min + range.max) / 2.0;
    let top = if range.max_inclusive {
        range.max
    } else {
        range.max - 1e-9
    };
    vec![range.min, mid, top]
}

#[test]
fn valid_updates_change_only_the_named_field() {
    for field in ParameterField::ALL {
        for value in valid_samples(field) {
            let mut model = ParameterModel::default();
            let before = model.get();
            let after = model
                .update(field, &value.to_string())
                .unwrap_or_else(|err| panic!("{field}={value} should be accepted: {err}"));

            assert_eq!(after.get(field), value, "{field} stored exactly");
            for other in ParameterField::ALL.into_iter().filter(|f| *f != field) {
                assert_eq!(after.get(other), before.get(other), "{other} untouched");
            }
            assert_eq!(model.get(), after);
        }
    }
}

#[test]
fn out_of_range_updates_leave_snapshot_unchanged() {
    let cases = [
        (ParameterField::SemiMajorAxis, "6777.9"),
        (ParameterField::SemiMajorAxis, "42164.5"),
        (ParameterField::Eccentricity, "-0.01"),
        (ParameterField::Eccentricity, "0.9"),
        (ParameterField::Inclination, "180.01"),
        (ParameterField::Raan, "360"),
        (ParameterField::Argp, "-1"),
        (ParameterField::TrueAnomaly, "720"),
    ];
    for (field, raw) in cases {
        let mut model = ParameterModel::default();
        let before = model.get();
        let err = model.update(field, raw).expect_err(raw);
        assert_eq!(err.field(), field);
        assert_eq!(err.reason(), "out of range");
        assert_eq!(err.bound(), Some(field.range()));
        assert_eq!(model.get(), before);
    }
}

#[test]
fn non_numeric_updates_are_rejected() {
    for raw in ["abc", "", "  ", "1.2.3", "NaN", "inf", "-infinity", "7e"] {
        let mut model = ParameterModel::default();
        let before = model.get();
        let err = model
            .update(ParameterField::SemiMajorAxis, raw)
            .expect_err(raw);
        assert!(matches!(err, ValidationError::NotANumber { .. }), "{raw}");
        assert_eq!(model.get(), before);
    }
}

#[test]
fn rejects_hyperbolic_eccentricity() {
    let mut model = ParameterModel::default();
    let before = model.get();
    let err = model
        .update(ParameterField::Eccentricity, "1.5")
        .expect_err("eccentricity 1.5 must be rejected");
    assert_eq!(err.field(), ParameterField::Eccentricity);
    assert_eq!(err.reason(), "out of range");
    assert!(err.to_string().contains("eccentricity"));
    assert_eq!(model.get(), before);
}

#[test]
fn rejects_non_numeric_inclination() {
    let mut model = ParameterModel::default();
    let err = model
        .update(ParameterField::Inclination, "abc")
        .expect_err("text must be rejected");
    assert_eq!(err.field(), ParameterField::Inclination);
    assert_eq!(err.reason(), "not a number");
    assert_eq!(err.bound(), None);
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let mut model = ParameterModel::default();
    let params = model
        .update(ParameterField::Raan, " 123.25 ")
        .expect("padded number");
    assert_eq!(params.raan, 123.25);
}

#[test]
fn field_names_parse_case_insensitively() {
    assert_eq!(
        "semi_major_axis".parse::<ParameterField>(),
        Ok(ParameterField::SemiMajorAxis)
    );
    assert_eq!(
        "True-Anomaly".parse::<ParameterField>(),
        Ok(ParameterField::TrueAnomaly)
    );
    assert_eq!("RAAN".parse::<ParameterField>(), Ok(ParameterField::Raan));
    assert!("mean_anomaly".parse::<ParameterField>().is_err());
}

#[test]
fn model_rejects_invalid_initial_snapshot() {
    let params = OrbitalParameters {
        inclination: 200.0,
        ..OrbitalParameters::default()
    };
    let err = ParameterModel::new(params).expect_err("inclination 200 is invalid");
    assert_eq!(err.field(), ParameterField::Inclination);
    assert!(ParameterModel::new(OrbitalParameters::default()).is_ok());
}

#[test]
fn ranges_render_with_open_and_closed_bounds() {
    assert_eq!(ParameterRange::closed(0.0, 180.0).to_string(), "[0, 180]");
    assert_eq!(ParameterRange::half_open(0.0, 360.0).to_string(), "[0, 360)");
    assert!(!ParameterField::Eccentricity.range().contains(0.9));
    assert!(ParameterField::Inclination.range().contains(180.0));
}

#[test]
fn parameters_serialize_with_wire_names() {
    let json = serde_json::to_value(OrbitalParameters::default()).expect("serialize");
    let object = json.as_object().expect("object");
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        [
            "argp",
            "eccentricity",
            "inclination",
            "raan",
            "semi_major_axis",
            "true_anomaly"
        ]
    );
    assert!(object.values().all(|v| v.is_number()));
}
