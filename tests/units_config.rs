//! 단위 변환과 설정 파일 테스트.
use well_control_toolbox::config::{load_from, load_or_create, Config, DefaultUnits, UnitSystem};
use well_control_toolbox::conversion::{convert, ConversionError};
use well_control_toolbox::quantity::QuantityKind;
use well_control_toolbox::units::*;

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6}"
    );
}

#[test]
fn pressure_conversions() {
    assert_close(
        "psi->bar",
        convert_pressure(1_000.0, PressureUnit::Psi, PressureUnit::Bar),
        68.947_572_93,
        1e-9,
    );
    assert_close(
        "MPa->psi",
        convert_pressure(1.0, PressureUnit::MegaPascal, PressureUnit::Psi),
        145.037_738,
        1e-8,
    );
    assert_eq!(convert_pressure(123.4, PressureUnit::Bar, PressureUnit::Bar), 123.4);
}

#[test]
fn length_volume_density_conversions() {
    assert_close(
        "ft->m",
        convert_length(10_000.0, LengthUnit::Foot, LengthUnit::Meter),
        3_048.0,
        1e-12,
    );
    assert_close(
        "in->mm",
        convert_length(8.5, LengthUnit::Inch, LengthUnit::Millimeter),
        215.9,
        1e-12,
    );
    assert_close(
        "bbl->gal",
        convert_volume(1.0, VolumeUnit::Barrel, VolumeUnit::UsGallon),
        42.0,
        1e-12,
    );
    assert_close(
        "m3->bbl",
        convert_volume(1.0, VolumeUnit::CubicMeter, VolumeUnit::Barrel),
        6.289_810_770,
        1e-9,
    );
    assert_close(
        "ppg->sg",
        convert_density(8.345_404, DensityUnit::Ppg, DensityUnit::SpecificGravity),
        1.0,
        1e-12,
    );
    assert_close(
        "sg->kg/m3",
        convert_density(1.0, DensityUnit::SpecificGravity, DensityUnit::KgPerCubicMeter),
        1_000.0,
        1e-4,
    );
}

#[test]
fn string_based_conversion() {
    let v = convert(QuantityKind::Pressure, 100.0, "bar", "psi").expect("bar->psi");
    assert_close("bar->psi", v, 1_450.377_377, 1e-8);
    let v = convert(QuantityKind::Length, 1.0, " M ", "ft").expect("m->ft");
    assert_close("m->ft", v, 3.280_839_895, 1e-9);
    let v = convert(QuantityKind::Density, 1.2, "sg", "ppg").expect("sg->ppg");
    assert_close("sg->ppg", v, 10.014_484_8, 1e-9);
}

#[test]
fn unknown_unit_is_reported() {
    let err = convert(QuantityKind::Volume, 1.0, "bbl", "furlong").unwrap_err();
    assert_eq!(err, ConversionError::UnknownUnit("furlong".to_string()));
    assert!(convert(QuantityKind::Pressure, 1.0, "atm", "psi").is_err());
}

#[test]
fn presets_select_unit_groups() {
    let metric = DefaultUnits::for_system(UnitSystem::Metric);
    assert_eq!(metric.depth, LengthUnit::Meter);
    assert_eq!(metric.diameter, LengthUnit::Millimeter);
    assert_eq!(metric.pressure, PressureUnit::Bar);
    assert_eq!(metric.volume, VolumeUnit::CubicMeter);
    assert_eq!(metric.density, DensityUnit::SpecificGravity);

    let mut cfg = Config::default();
    assert_eq!(cfg.default_units, DefaultUnits::for_system(UnitSystem::Oilfield));
    cfg.apply_preset(UnitSystem::Metric);
    assert_eq!(cfg.unit_system, UnitSystem::Metric);
    assert_eq!(cfg.default_units, metric);
}

#[test]
fn config_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.language, "auto");
    assert_eq!(cfg.schedule_rows, 10);
    assert_eq!(cfg.series_min_strokes, 1_400);
    assert_eq!(cfg.series_step, 100);
    assert_eq!(cfg.debounce_ms, 300);
    assert!(cfg.language_pack_dir.is_none());
}

#[test]
fn config_save_and_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let mut cfg = Config::default();
    cfg.apply_preset(UnitSystem::Metric);
    cfg.language = "ko".to_string();
    cfg.schedule_rows = 20;
    cfg.save_to(&path).expect("save");

    let loaded = load_from(&path).expect("load");
    assert_eq!(loaded, cfg);
}

#[test]
fn partial_config_fills_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "language = \"en\"\nseries_step = 50\n").expect("write");
    let cfg = load_from(&path).expect("load");
    assert_eq!(cfg.language, "en");
    assert_eq!(cfg.series_step, 50);
    assert_eq!(cfg.schedule_rows, 10);
    assert_eq!(cfg.unit_system, UnitSystem::Oilfield);
}

#[test]
fn missing_config_is_created() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = load_or_create(&path).expect("create");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
    assert_eq!(load_from(&path).expect("reload"), cfg);
}

#[test]
fn malformed_config_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "schedule_rows = \"ten\"\n").expect("write");
    assert!(load_from(&path).is_err());
}
