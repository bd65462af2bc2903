use labelscale::data_handling::Sample;
use labelscale::scaler::MeanScaler;
use labelscale::target::Target;
use rand::Rng;

fn main() {
    env_logger::init();

    // Tiny synthetic regression set: targets clustered around 40.0
    let mut rng = rand::thread_rng();
    let raw_targets: Vec<f32> = (0..200).map(|_| 40.0 + rng.gen_range(-5.0..5.0)).collect();

    let scaler = MeanScaler::fit(&raw_targets).expect("failed to fit scaler");
    println!(
        "Fitted scaler: mean={:.3} variance={:.3} epsilon={:e}",
        scaler.mean(),
        scaler.variance(),
        scaler.epsilon()
    );

    let mut samples: Vec<Sample> = raw_targets
        .iter()
        .enumerate()
        .map(|(i, &t)| Sample::new(format!("sample-{}", i), vec![i as f32], t))
        .collect();

    scaler.apply_all(&mut samples);
    println!(
        "Rescaled {} samples, first 5 targets = {:?}",
        samples.len(),
        samples
            .iter()
            .take(5)
            .map(|s| s.target.as_scalar().unwrap())
            .collect::<Vec<f32>>()
    );

    // Pretend a model predicted in the rescaled space; map back to label space
    let predictions = Target::from(vec![-0.2f32, 0.0, 0.2]);
    let restored = scaler.invert(&predictions);
    println!(
        "Predictions {:?} restored to label space: {:?}",
        predictions, restored
    );
}
