use v2g_compatibility::{Classification, Verdict, Warning, resolve};
use v2g_domain::{Action, CarModel, ChargerType, Choice, Region, Selection};

fn selection(action: Action, charger: ChargerType, car: CarModel) -> Selection {
    Selection::new().with_action(action).with_charger(charger).with_car(car)
}

#[test]
fn missing_action_or_charger_is_neutral() {
    let cases = [
        Selection::new(),
        Selection::new().with_action(Action::Charging),
        Selection::new().with_charger(ChargerType::Level3),
        Selection::new().with_region(Region::Eu).with_car(CarModel::NissanLeaf),
        Selection::new()
            .with_region(Region::Uk)
            .with_action(Action::Discharging)
            .with_car(CarModel::TeslaModelS),
    ];

    for case in cases {
        assert_eq!(resolve(&case).verdict, Verdict::neutral(), "{case:?}");
    }
}

#[test]
fn level3_charging_rejects_leaf_and_ev6() {
    for car in [CarModel::NissanLeaf, CarModel::KiaEv6] {
        let verdict = resolve(&selection(Action::Charging, ChargerType::Level3, car)).verdict;
        assert_eq!(verdict.classification, Classification::Incompatible);
        assert_eq!(
            verdict.message.map(Warning::text),
            Some("Charger type doesn't compatible with car")
        );
    }
}

#[test]
fn level3_charging_accepts_tesla() {
    let verdict =
        resolve(&selection(Action::Charging, ChargerType::Level3, CarModel::TeslaModelS)).verdict;
    assert_eq!(verdict, Verdict::compatible());
}

#[test]
fn level1_charging_accepts_every_car() {
    for car in CarModel::all() {
        let verdict = resolve(&selection(Action::Charging, ChargerType::Level1, car)).verdict;
        assert_eq!(verdict.classification, Classification::Compatible, "{car}");
    }
}

#[test]
fn level3_discharging_reports_tesla_message() {
    let verdict =
        resolve(&selection(Action::Discharging, ChargerType::Level3, CarModel::TeslaModelS))
            .verdict;
    assert_eq!(verdict.classification, Classification::Incompatible);
    assert_eq!(
        verdict.message.map(Warning::text),
        Some("Tesla not compatible with discharging action")
    );
}

#[test]
fn level3_discharging_reports_charger_message_for_other_cars() {
    let verdict =
        resolve(&selection(Action::Discharging, ChargerType::Level3, CarModel::NissanLeaf))
            .verdict;
    assert_eq!(verdict.classification, Classification::Incompatible);
    assert_eq!(
        verdict.message.map(Warning::text),
        Some("Discharging action not supported with this charger type")
    );
}

#[test]
fn discharging_with_slower_chargers_is_compatible() {
    for charger in [ChargerType::Level1, ChargerType::Level2, ChargerType::Ccs] {
        for car in CarModel::all() {
            let verdict = resolve(&selection(Action::Discharging, charger, car)).verdict;
            assert_eq!(verdict, Verdict::compatible(), "{charger} / {car}");
        }
    }
}

#[test]
fn region_does_not_change_the_verdict() {
    let base = selection(Action::Charging, ChargerType::Level3, CarModel::KiaEv6);
    let expected = resolve(&base).verdict;
    for region in Region::all() {
        assert_eq!(resolve(&base.with_region(region)).verdict, expected, "{region}");
    }
}

#[test]
fn verdict_serializes_user_facing_text() {
    let verdict =
        resolve(&selection(Action::Discharging, ChargerType::Level3, CarModel::KiaEv6)).verdict;
    let value = serde_json::to_value(verdict).expect("serialize verdict");
    assert_eq!(
        value,
        serde_json::json!({
            "classification": "incompatible",
            "message": "Discharging action not supported with this charger type"
        })
    );
}
