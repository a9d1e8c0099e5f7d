// Trains the bundled four-sample dataset and prints two predictions.
//
//   cargo run -- [config.json]
//
// Without an argument the default config is used (2 inputs, 2 hidden layers
// of 2 neurons, learning rate 0.1). Set RUST_LOG=debug for per-epoch loss.
use ferrite_mlp::{Network, NetworkConfig, NetworkError, Sample};
use log::error;

const EPOCHS: usize = 1000;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), NetworkError> {
    let config = match std::env::args().nth(1) {
        Some(path) => NetworkConfig::load_json(&path)?,
        None => NetworkConfig::default(),
    };

    let dataset = vec![
        Sample::new(vec![-2.0, -1.0], 1.0),
        Sample::new(vec![25.0, 6.0], 0.0),
        Sample::new(vec![17.0, 4.0], 0.0),
        Sample::new(vec![-15.0, -6.0], 1.0),
    ];

    let mut network = Network::new(&config)?;
    println!("untrained loss: {:.6}", network.evaluate(&dataset)?);
    network.train(EPOCHS, &dataset)?;
    println!("trained loss:   {:.6}", network.evaluate(&dataset)?);

    for (name, features) in [("Emily", [-7.0, -3.0]), ("Frank", [20.0, 2.0])] {
        println!("{name}: {:.6}", network.predict(&features)?);
    }
    Ok(())
}
