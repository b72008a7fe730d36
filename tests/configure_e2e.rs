use std::io::Write;

use leadacid::options::standard::{DIMENSIONALITY, SIDE_REACTIONS, THERMAL};
use leadacid::{
    Electrode, GeometryKind, ModelConfig, ModelConfigurator, ModelError, OptionRegistry,
    OptionValue, ReactionKind, SolverFamily, SolverRegistry, ValidationError,
};

#[test]
fn configure_oxygen_model_end_to_end() {
    let config = ModelConfig::new("oxygen cell")
        .with_option(SIDE_REACTIONS, OptionValue::list(["oxygen"]))
        .with_option(DIMENSIONALITY, 1);
    let mut model = ModelConfigurator::new(&config).unwrap();

    let network = model.set_reactions().clone();
    assert_eq!(network.names(), vec!["main", "oxygen"]);
    for electrode in Electrode::ALL {
        assert!(network.entry(ReactionKind::Main, electrode).unwrap().s_ox.is_zero());
    }

    let json = network.to_json().unwrap();
    assert_eq!(json["main"]["Negative"]["s_ox"]["value"], serde_json::json!(0.0));
    assert_eq!(
        json["oxygen"]["Positive"]["aj"],
        "Positive electrode oxygen interfacial current density"
    );

    assert_eq!(model.default_geometry().unwrap().kind, GeometryKind::OnePlusOneDMacro);
    assert_eq!(
        model.default_solver(&SolverRegistry::new()).family,
        SolverFamily::Scipy
    );
}

#[test]
fn configure_rejects_before_any_derivation() {
    let config = ModelConfig::default()
        .with_option(THERMAL, "x-lumped")
        .with_option(DIMENSIONALITY, 2);
    match ModelConfigurator::new(&config) {
        Err(ModelError::Validation(ValidationError::IncompatibleOptions { description })) => {
            assert!(description.contains("dimensionality = 0"));
        }
        other => panic!("expected IncompatibleOptions, got {other:?}"),
    }
}

#[test]
fn configure_rejects_out_of_domain_value() {
    let config = ModelConfig::default().with_option(DIMENSIONALITY, 3);
    let err = ModelConfigurator::new(&config).unwrap_err();
    assert!(matches!(
        err,
        ModelError::Validation(ValidationError::InvalidOptionValue { .. })
    ));
}

#[test]
fn registry_rejects_every_value_outside_each_domain() {
    let (mut registry, _) = ModelConfigurator::reset_options().unwrap();
    let candidates = [
        OptionValue::Bool(true),
        OptionValue::Int(7),
        OptionValue::from("not-a-mode"),
        OptionValue::list(["hydrogen"]),
    ];
    let names: Vec<String> = registry.iter().map(|(name, _)| name.to_string()).collect();

    for name in &names {
        let option = registry.option(name).unwrap().clone();
        for candidate in &candidates {
            let result = registry.set(name, candidate.clone());
            assert_eq!(
                result.is_ok(),
                option.allows(candidate),
                "option {name} value {candidate}"
            );
        }
    }
}

#[test]
fn registry_rejects_duplicate_standard_option() {
    let mut registry = OptionRegistry::new();
    registry
        .register(leadacid::options::standard::thermal().unwrap())
        .unwrap();
    let err = registry
        .register(leadacid::options::standard::thermal().unwrap())
        .unwrap_err();
    assert!(matches!(err, ValidationError::DuplicateOption { .. }));
}

#[test]
fn configure_from_json_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"name": "file cell", "options": {{"thermal": "x-full", "side reactions": ["oxygen"]}}}}"#
    )
    .unwrap();

    let config = ModelConfig::from_json_file(file.path()).unwrap();
    let mut model = ModelConfigurator::new(&config).unwrap();
    assert_eq!(model.name(), "file cell");
    assert_eq!(model.options().get(THERMAL).unwrap(), &OptionValue::from("x-full"));
    assert!(model.set_reactions().contains(ReactionKind::Oxygen));
}

#[test]
fn reaction_network_is_deterministic_across_builds() {
    let config = ModelConfig::default().with_option(SIDE_REACTIONS, OptionValue::list(["oxygen"]));
    let mut a = ModelConfigurator::new(&config).unwrap();
    let mut b = ModelConfigurator::new(&config).unwrap();

    let first = a.set_reactions().clone();
    let second = b.set_reactions().clone();
    assert_eq!(first, second);
    assert_eq!(first.fingerprint().unwrap(), second.fingerprint().unwrap());
}
