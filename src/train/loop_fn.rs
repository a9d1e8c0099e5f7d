use std::time::Instant;

use log::{debug, info};

use crate::error::NetworkError;
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::sample::Sample;
use crate::train::train_config::TrainConfig;

/// Trains `network` for `config.epochs` epochs and returns the mean squared
/// error of the **last completed epoch** (0.0 if none ran or `dataset` is
/// empty).
///
/// Samples are visited in dataset order every epoch: no shuffling, no
/// batching. Each sample runs forward, backward and update to completion
/// before the next one starts.
///
/// # Early termination
/// The loop stops after the current epoch if the `progress_tx` receiver has
/// been dropped.
///
/// # Errors
/// `DimensionMismatch` from the first sample whose feature count differs from
/// the network's input size. Parameters already updated by earlier samples
/// stay updated.
pub fn train_loop(
    network: &mut Network,
    dataset: &[Sample],
    config: &TrainConfig,
) -> Result<f64, NetworkError> {
    let mut scratch = network.scratch();
    let mut last_train_loss = 0.0;

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();

        let mut total_loss = 0.0;
        for sample in dataset {
            total_loss += network.train_sample(&mut scratch, sample)?;
        }
        let train_loss = if dataset.is_empty() {
            0.0
        } else {
            total_loss / dataset.len() as f64
        };
        last_train_loss = train_loss;

        let elapsed_ms = t_start.elapsed().as_millis() as u64;
        debug!("epoch {epoch}/{}: loss = {train_loss:.6}", config.epochs);

        if let Some(ref tx) = config.progress_tx {
            let stats = EpochStats {
                epoch,
                total_epochs: config.epochs,
                train_loss,
                elapsed_ms,
            };
            if tx.send(stats).is_err() {
                info!("progress receiver dropped, stopping after epoch {epoch}");
                break;
            }
        }
    }

    info!("training finished: final epoch loss = {last_train_loss:.6}");
    Ok(last_train_loss)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::config::NetworkConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::mpsc;

    fn network() -> Network {
        Network::with_rng(&NetworkConfig::default(), &mut StdRng::seed_from_u64(3)).unwrap()
    }

    fn dataset() -> Vec<Sample> {
        vec![
            Sample::new(vec![-2.0, -1.0], 1.0),
            Sample::new(vec![25.0, 6.0], 0.0),
        ]
    }

    #[test]
    fn zero_epochs_leaves_the_network_alone() {
        let mut net = network();
        let before = net.predict(&[1.0, 1.0]).unwrap();
        let loss = train_loop(&mut net, &dataset(), &TrainConfig::new(0)).unwrap();
        assert_eq!(loss, 0.0);
        assert_eq!(net.predict(&[1.0, 1.0]).unwrap(), before);
    }

    #[test]
    fn empty_dataset_reports_zero_loss() {
        let mut net = network();
        assert_eq!(train_loop(&mut net, &[], &TrainConfig::new(5)).unwrap(), 0.0);
    }

    #[test]
    fn sends_one_record_per_epoch() {
        let (tx, rx) = mpsc::channel();
        let mut net = network();
        let config = TrainConfig::new(4).with_progress(tx);
        let last = train_loop(&mut net, &dataset(), &config).unwrap();
        drop(config);

        let stats: Vec<EpochStats> = rx.iter().collect();
        assert_eq!(stats.len(), 4);
        assert_eq!(stats.iter().map(|s| s.epoch).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert!(stats.iter().all(|s| s.total_epochs == 4));
        assert_eq!(stats[3].train_loss, last);
    }

    #[test]
    fn dropped_receiver_stops_training() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let mut net = network();
        let mut reference = net.clone();

        train_loop(&mut net, &dataset(), &TrainConfig::new(50).with_progress(tx)).unwrap();
        train_loop(&mut reference, &dataset(), &TrainConfig::new(1)).unwrap();

        assert_eq!(net.predict(&[3.0, 1.0]).unwrap(), reference.predict(&[3.0, 1.0]).unwrap());
    }

    #[test]
    fn wrong_feature_width_aborts_training() {
        let mut net = network();
        let bad = vec![Sample::new(vec![1.0, 2.0, 3.0], 1.0)];
        let err = train_loop(&mut net, &bad, &TrainConfig::new(1)).unwrap_err();
        assert!(matches!(err, NetworkError::DimensionMismatch { expected: 2, actual: 3 }));
    }
}
