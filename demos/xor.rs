use ferrite_mlp::{train_loop, Network, NetworkConfig, Sample, TrainConfig};
use std::sync::mpsc;

fn main() {
    env_logger::init();

    let mut network = Network::new(&NetworkConfig::new(2, 2, 3, 0.5))
        .expect("valid config");

    let dataset = vec![
        Sample::new(vec![1.0, 0.0], 1.0),
        Sample::new(vec![1.0, 1.0], 0.0),
        Sample::new(vec![0.0, 1.0], 1.0),
        Sample::new(vec![0.0, 0.0], 0.0),
    ];

    let epochs = 10000;
    let (tx, rx) = mpsc::channel();
    let config = TrainConfig::new(epochs).with_progress(tx);

    train_loop(&mut network, &dataset, &config).expect("training failed");
    drop(config);

    for stats in rx.iter().filter(|s| s.epoch % 1000 == 0) {
        println!("Epoch {}: loss = {:.6}", stats.epoch, stats.train_loss);
    }

    for sample in &dataset {
        let output = network.predict(&sample.features).expect("prediction failed");
        println!("Input: {:?} -> Output: {:.4}", sample.features, output);
    }
}
