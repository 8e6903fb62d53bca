use areachart_rs::synth::{SyntheticConfig, generate_dataset, generate_dataset_seeded};

const EPOCH: f64 = 1_177_372_800.0;
const DAY: f64 = 86_400.0;

#[test]
fn seeded_generation_is_deterministic() {
    let config = SyntheticConfig::default();
    let first = generate_dataset_seeded(config, 48, 1234).expect("generate");
    let second = generate_dataset_seeded(config, 48, 1234).expect("generate");
    assert_eq!(first, second);
}

#[test]
fn different_seeds_produce_different_values() {
    let config = SyntheticConfig::default();
    let first = generate_dataset_seeded(config, 48, 1).expect("generate");
    let second = generate_dataset_seeded(config, 48, 2).expect("generate");
    assert_ne!(first, second);
}

#[test]
fn samples_step_one_day_from_fixed_epoch() {
    let dataset = generate_dataset_seeded(SyntheticConfig::default(), 30, 7).expect("generate");
    let (_, series) = dataset.get_index(0).expect("first series");

    for (day, sample) in series.samples().iter().enumerate() {
        assert_eq!(sample.time, EPOCH + day as f64 * DAY);
    }
}

#[test]
fn generated_samples_are_ascending() {
    let dataset = generate_dataset_seeded(SyntheticConfig::default(), 100, 9).expect("generate");
    for (_, series) in dataset.iter() {
        for window in series.samples().windows(2) {
            assert!(window[0].time < window[1].time);
        }
    }
}

#[test]
fn values_stay_within_configured_bounds() {
    let config = SyntheticConfig {
        series_count: 2,
        value_min: 40.0,
        value_max: 60.0,
    };
    let dataset = generate_dataset_seeded(config, 200, 42).expect("generate");

    for (_, series) in dataset.iter() {
        for sample in series.samples() {
            assert!(sample.value >= 40.0 && sample.value < 60.0);
        }
    }
}

#[test]
fn series_and_sample_counts_match_request() {
    let config = SyntheticConfig {
        series_count: 3,
        ..SyntheticConfig::default()
    };
    let dataset = generate_dataset_seeded(config, 24, 5).expect("generate");

    assert_eq!(dataset.series_count(), 3);
    assert_eq!(dataset.total_samples(), 72);
    for (_, series) in dataset.iter() {
        assert_eq!(series.len(), 24);
    }
}

#[test]
fn thread_rng_generation_respects_shape() {
    let dataset = generate_dataset(SyntheticConfig::default(), 16).expect("generate");
    assert_eq!(dataset.series_count(), 1);
    assert_eq!(dataset.total_samples(), 16);
}

#[test]
fn invalid_configs_are_rejected() {
    let zero_series = SyntheticConfig {
        series_count: 0,
        ..SyntheticConfig::default()
    };
    assert!(generate_dataset_seeded(zero_series, 10, 0).is_err());

    let inverted_bounds = SyntheticConfig {
        value_min: 60.0,
        value_max: 40.0,
        ..SyntheticConfig::default()
    };
    assert!(generate_dataset_seeded(inverted_bounds, 10, 0).is_err());

    let non_finite = SyntheticConfig {
        value_max: f64::NAN,
        ..SyntheticConfig::default()
    };
    assert!(generate_dataset_seeded(non_finite, 10, 0).is_err());
}

#[test]
fn zero_sample_count_is_rejected() {
    assert!(generate_dataset_seeded(SyntheticConfig::default(), 0, 0).is_err());
}
