use hs_project::schema::*;
use hs_project::{load_json, load_yaml, save_json, save_yaml, validate_problem};

fn layered_problem() -> ProblemDef {
    ProblemDef {
        version: 1,
        name: "Layered".to_string(),
        units: UnitSystemDef::Cgs,
        gravity: -2.45e10,
        eos: EosDef::IdealGasRadiation {
            ionization: IonizationDef::Full,
        },
        temperature_guess: Some(1000.0),
        capacity: Some(512),
        models: vec![
            ModelDef {
                id: "lower".to_string(),
                grid: GridDef {
                    npts: 64,
                    r_min: 0.0,
                    r_max: 5e7,
                },
                base: BaseDef {
                    density: 1e7,
                    pressure: 2.4e25,
                },
                composition: CompositionDef::Pure {
                    species: "He4".to_string(),
                },
                closure: ClosureDef::Isentropic,
            },
            ModelDef {
                id: "upper".to_string(),
                grid: GridDef {
                    npts: 64,
                    r_min: 5e7,
                    r_max: 1e8,
                },
                base: BaseDef {
                    density: 4e6,
                    pressure: 8e24,
                },
                composition: CompositionDef::Mixture {
                    fractions: vec![
                        SpeciesFractionDef {
                            species: "C12".to_string(),
                            mass_fraction: 0.6,
                        },
                        SpeciesFractionDef {
                            species: "O16".to_string(),
                            mass_fraction: 0.4,
                        },
                    ],
                },
                closure: ClosureDef::Isothermal,
            },
        ],
    }
}

#[test]
fn roundtrip_yaml_layered_problem() {
    let problem = layered_problem();
    validate_problem(&problem).unwrap();

    let path = std::env::temp_dir().join("hs_project_roundtrip_layered.yaml");
    save_yaml(&path, &problem).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(problem, loaded);
}

#[test]
fn roundtrip_json_layered_problem() {
    let problem = layered_problem();

    let path = std::env::temp_dir().join("hs_project_roundtrip_layered.json");
    save_json(&path, &problem).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(problem, loaded);
}

#[test]
fn optional_fields_default() {
    let yaml = r#"
version: 1
name: minimal
gravity: -1.0e4
eos:
  type: gamma_law
  gamma: 1.4
"#;
    let problem: ProblemDef = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(problem.units, UnitSystemDef::Cgs);
    assert_eq!(problem.temperature_guess, None);
    assert!(problem.models.is_empty());
    assert_eq!(
        problem.eos,
        EosDef::GammaLaw {
            gamma: 1.4,
            ionization: IonizationDef::Neutral
        }
    );
}

#[test]
fn layered_problem_builds_both_layers() {
    let set = hs_project::build_problem(&layered_problem(), false).unwrap();
    let ids: Vec<&str> = set.ids().collect();
    assert_eq!(ids, vec!["lower", "upper"]);
    assert_eq!(set.get("upper").unwrap().species().len(), 2);
}
