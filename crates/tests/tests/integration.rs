//! End-to-end tests: options text through to organ kinetics.

use stocatree_options::Options;
use stocatree_organs::Zone;
use stocatree_tests::TestHarness;

/// Options text overriding the internode group drives the engine, and
/// untouched groups keep their stock values.
#[test]
fn options_text_drives_internode_rates() {
    let harness = TestHarness::from_text(
        r#"
        [internode]
        max_length = 0.03
        elongation_period = 10.0
        "#,
    );

    let internode = harness.internode();
    assert!((internode.growth_rate(Some("small")) - 0.001).abs() < 1e-12);
    assert!((internode.growth_rate(None) - 0.002).abs() < 1e-12);
    assert!((internode.growth_rate(Some("dormant_start")) - 0.0005).abs() < 1e-12);

    assert_eq!(harness.options().markov.maximum_length, 70);
}

/// Fate tables loaded from text key on the same labels the zone
/// vocabulary uses.
#[test]
fn fate_tables_key_on_zone_labels() {
    let harness = TestHarness::from_text(
        r#"
        [markov]
        terminal_fate = [{ floral = [6], medium = [5, 4] }]
        "#,
    );

    let fate = harness.options().markov.terminal_fate.as_ref().unwrap();
    assert_eq!(fate.get(1, Zone::Floral.label()), Some(&[6][..]));
    assert_eq!(fate.get(1, Zone::Medium.label()), Some(&[5, 4][..]));
    assert_eq!(fate.get(2, Zone::Floral.label()), None);
}

/// Halving `max_length` halves the rate for every zone.
#[test]
fn rates_scale_linearly_with_max_length() {
    let stock = TestHarness::from_text("").internode();
    let halved = TestHarness::from_text("[internode]\nmax_length = 0.015").internode();

    for zone in Zone::ALL {
        let label = Some(zone.label());
        assert!((halved.growth_rate(label) - stock.growth_rate(label) / 2.0).abs() < 1e-12);
    }
    assert!((halved.growth_rate(None) - 0.001).abs() < 1e-12);
}

/// A parameter set written to disk and read back drives identical
/// kinetics.
#[test]
fn saved_options_drive_identical_rates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("options.toml");

    let mut options = Options::new();
    options.internode.max_length = 0.045;
    options.internode.elongation_period = 15.0;
    options.save(&path).unwrap();

    let original = TestHarness::from_text(&options.dumps().unwrap());
    let reloaded = Options::load(&path).unwrap();
    assert_eq!(reloaded, *original.options());

    let a = original.internode();
    let b = TestHarness::from_text(&reloaded.dumps().unwrap()).internode();
    for zone in Zone::ALL {
        assert_eq!(a.growth_rate(Some(zone.label())), b.growth_rate(Some(zone.label())));
    }
}
