use ferrite_mlp::{Network, NetworkConfig, NetworkError, Sample};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn dataset() -> Vec<Sample> {
    vec![
        Sample::new(vec![-2.0, -1.0], 1.0),
        Sample::new(vec![25.0, 6.0], 0.0),
        Sample::new(vec![17.0, 4.0], 0.0),
        Sample::new(vec![-15.0, -6.0], 1.0),
    ]
}

fn config() -> NetworkConfig {
    NetworkConfig { input_size: 2, depth: 2, neurons_per_layer: 2, learning_rate: 0.1 }
}

#[test]
fn training_lowers_dataset_error() {
    for seed in 0..8 {
        let mut network = Network::with_rng(&config(), &mut StdRng::seed_from_u64(seed)).unwrap();
        let before = network.evaluate(&dataset()).unwrap();
        network.train(1000, &dataset()).unwrap();
        let after = network.evaluate(&dataset()).unwrap();
        assert!(after < before, "seed {seed}: mse {before} -> {after}");
    }
}

#[test]
fn trained_network_separates_unseen_samples() {
    for seed in 0..8 {
        let mut network = Network::with_rng(&config(), &mut StdRng::seed_from_u64(seed)).unwrap();
        let emily_before = network.predict(&[-7.0, -3.0]).unwrap();
        let frank_before = network.predict(&[20.0, 2.0]).unwrap();

        network.train(1000, &dataset()).unwrap();

        let emily = network.predict(&[-7.0, -3.0]).unwrap();
        let frank = network.predict(&[20.0, 2.0]).unwrap();
        assert!(emily > emily_before, "seed {seed}: emily {emily_before} -> {emily}");
        assert!(frank < frank_before, "seed {seed}: frank {frank_before} -> {frank}");
        assert!(emily > 0.5, "seed {seed}: emily {emily}");
        assert!(frank < 0.5, "seed {seed}: frank {frank}");
    }
}

#[test]
fn predictions_are_stable_between_training_runs() {
    let mut network = Network::with_rng(&config(), &mut StdRng::seed_from_u64(11)).unwrap();
    network.train(10, &dataset()).unwrap();
    let first = network.predict(&[-7.0, -3.0]).unwrap();
    assert_eq!(network.predict(&[-7.0, -3.0]).unwrap(), first);
    assert_eq!(network.predict(&[-7.0, -3.0]).unwrap(), first);
}

#[test]
fn same_seed_trains_identically() {
    let mut a = Network::with_rng(&config(), &mut StdRng::seed_from_u64(5)).unwrap();
    let mut b = Network::with_rng(&config(), &mut StdRng::seed_from_u64(5)).unwrap();
    let loss_a = a.train(100, &dataset()).unwrap();
    let loss_b = b.train(100, &dataset()).unwrap();
    assert_eq!(loss_a, loss_b);
    assert_eq!(a.predict(&[1.0, 1.0]).unwrap(), b.predict(&[1.0, 1.0]).unwrap());
}

#[test]
fn mismatched_features_surface_as_errors() {
    let mut network = Network::new(&config()).unwrap();
    let err = network.predict(&[1.0]).unwrap_err();
    assert!(matches!(err, NetworkError::DimensionMismatch { expected: 2, actual: 1 }));

    let bad = vec![Sample::new(vec![1.0, 2.0, 3.0], 0.0)];
    assert!(matches!(
        network.train(1, &bad),
        Err(NetworkError::DimensionMismatch { expected: 2, actual: 3 })
    ));
}

#[test]
fn config_loads_from_json_file() {
    let path = std::env::temp_dir().join(format!("ferrite-mlp-config-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{"input_size": 2, "depth": 3, "neurons_per_layer": 4, "learning_rate": 0.2}"#,
    )
    .unwrap();

    let loaded = NetworkConfig::load_json(path.to_str().unwrap()).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded, NetworkConfig::new(2, 3, 4, 0.2));
    let network = Network::new(&loaded).unwrap();
    assert_eq!(network.topology().depth(), 3);
}

#[test]
fn malformed_json_is_a_json_error() {
    let path = std::env::temp_dir().join(format!("ferrite-mlp-bad-{}.json", std::process::id()));
    std::fs::write(&path, "{ not json").unwrap();
    let err = NetworkConfig::load_json(path.to_str().unwrap()).unwrap_err();
    std::fs::remove_file(&path).unwrap();
    assert!(matches!(err, NetworkError::Json(_)));
}
