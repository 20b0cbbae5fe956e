//! Tracing emitted while generating trees.

use rand::{SeedableRng, rngs::SmallRng};
use rstest::rstest;
use sapling_core::{TreeError, TreeGeneratorBuilder};
use sapling_test_support::capture::CaptureLayer;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

#[rstest]
#[case::uniform(TreeGeneratorBuilder::new(12), "uniform")]
#[case::power_law(TreeGeneratorBuilder::new(12).with_power_law_base(0.3), "power_law")]
#[case::closest_point(TreeGeneratorBuilder::new(12).with_window(300, 300), "closest_point")]
fn generate_span_records_shape(
    #[case] builder: TreeGeneratorBuilder,
    #[case] attachment: &str,
) -> Result<(), TreeError> {
    let generator = builder.build()?;
    let layer = CaptureLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let mut rng = SmallRng::seed_from_u64(11);
    tracing::subscriber::with_default(subscriber, || generator.generate_with_rng(&mut rng))?;

    let span = layer.span("tree.generate").expect("generate span must close");
    assert_eq!(span.fields.get("node_count"), Some(&"12".to_owned()));
    assert_eq!(span.fields.get("attachment"), Some(&attachment.to_owned()));
    assert_eq!(span.fields.get("edges"), Some(&"11".to_owned()));
    assert!(!span.fields.contains_key("seed"));

    let event = layer.event("tree generated").expect("completion event");
    assert_eq!(event.level, Level::INFO);
    Ok(())
}

#[rstest]
fn seeded_runs_record_their_seed() -> Result<(), TreeError> {
    let generator = TreeGeneratorBuilder::new(3).with_seed(314).build()?;
    let layer = CaptureLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    tracing::subscriber::with_default(subscriber, || generator.generate())?;

    let span = layer.span("tree.generate").expect("generate span must close");
    assert_eq!(span.fields.get("seed"), Some(&"314".to_owned()));
    Ok(())
}

#[rstest]
fn geometric_runs_log_sampling_and_normalisation() -> Result<(), TreeError> {
    let generator = TreeGeneratorBuilder::new(6)
        .with_window(200, 200)
        .with_padding(10)
        .with_edge_weight_max(4)
        .build()?;
    let layer = CaptureLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let mut rng = SmallRng::seed_from_u64(2);
    tracing::subscriber::with_default(subscriber, || generator.generate_with_rng(&mut rng))?;

    let sampling = layer
        .event("sampling node positions")
        .expect("sampling event");
    assert_eq!(sampling.level, Level::DEBUG);
    assert_eq!(sampling.fields.get("padding"), Some(&"10".to_owned()));

    let normalised = layer
        .event("normalised edge distances")
        .expect("normalisation event");
    assert_eq!(normalised.fields.get("edges"), Some(&"5".to_owned()));
    assert_eq!(normalised.fields.get("max"), Some(&"4".to_owned()));
    Ok(())
}
