use wt_core::{DeviceKind, DischargeType, MechanismType, PlanForm};
use wt_results::*;

fn sample_averager_result(volume_m3: f64) -> AveragerResult {
    AveragerResult {
        discharge: DischargeType::VolleyDischarge,
        mechanism: MechanismType::MultichannelByLength,
        coefficient: Labeled::new(1.5, "Required averaging coefficient"),
        volume_m3: Labeled::new(volume_m3, "Averager volume, m³"),
        section_area_m2: Labeled::new(45_000.0, "Area of each averager section, m²"),
        depth_m: Labeled::new(3.0, "Averager depth, m"),
        section_width_m: Labeled::new(6.0, "Averager section width, m"),
        section_count: Labeled::new(2, "Number of sections"),
        mechanism_result: MechanismResult::MultichannelLength {
            plan_form: PlanForm::Rectangular,
            channel_count: Labeled::new(3, "Number of channels per averager section"),
            section_volume_m3: Labeled::new(volume_m3 / 2.0, "Volume of one averager section, m³"),
            section_length_m: Labeled::new(7_500.0, "Averager section length, m"),
            diameter_m: Labeled::new(239.4, "Averager diameter for the circular plan, m"),
            channel_width_rectangular_m: Labeled::new(
                2.0,
                "Channel width for the rectangular plan, m",
            ),
            channel_width_circular_m: Labeled::new(39.9, "Channel width for the circular plan, m"),
        },
    }
}

#[test]
fn slots_start_empty() {
    let store = ResultStore::new();
    assert!(!store.has(DeviceKind::Grate));
    assert!(!store.has(DeviceKind::SandTrap));
    assert!(!store.has(DeviceKind::Sump));
    assert!(!store.has(DeviceKind::Averager));
    assert!(store.averager().is_none());
}

#[test]
fn publish_overwrites_whole_record() {
    let mut store = ResultStore::new();

    store.set_averager(sample_averager_result(270_000.0));
    assert!(store.has(DeviceKind::Averager));

    // Second publish replaces the first record entirely
    store.set_averager(sample_averager_result(100_000.0));
    let current = store.averager().unwrap();
    assert_eq!(current.volume_m3.value, 100_000.0);
}

#[test]
fn slots_are_independent() {
    let mut store = ResultStore::new();

    store.set_sump(SumpResult {
        clarification_effect_pct: 50.0,
        hydraulic_fineness_mm_s: 1.2,
        total_section_width_m: 18.0,
        section_count: 3,
        full_height_m: 4.2,
        daily_sediment_m3: 36.5,
    });
    store.set_averager(sample_averager_result(270_000.0));

    assert!(store.has(DeviceKind::Sump));
    assert!(store.has(DeviceKind::Averager));
    assert!(!store.has(DeviceKind::Grate));

    store.set_sand_trap(SandTrapResult {
        horizontal_forward: Some(SandTrapHorizontalForwardResult {
            section_count: 2,
            width_m: 3.0,
            length_m: 12.0,
            full_height_m: 1.8,
            section_depth_m: 0.6,
        }),
        ..SandTrapResult::default()
    });
    assert!(store.has(DeviceKind::SandTrap));
    assert!(store.sand_trap().unwrap().aerated.is_none());
}

#[test]
fn reset_clears_every_slot() {
    let mut store = ResultStore::new();
    store.set_averager(sample_averager_result(270_000.0));
    store.set_grate(GrateResult {
        suitable_grate_mark: "РМУ2".to_string(),
        crusher_mark: "Д-3б".to_string(),
        ledge_installation_depth_m: 0.9,
        hammer_crusher_count: 1,
        suitable_grate_count: 2,
        inlet_channel_size_m: 1.1,
        outlet_channel_size_m: 0.9,
        widening_length_m: 1.4,
        chamber_length_m: 3.2,
        waste_volume_m3_day: 0.8,
    });

    store.reset();
    assert!(!store.has(DeviceKind::Averager));
    assert!(!store.has(DeviceKind::Grate));
}
