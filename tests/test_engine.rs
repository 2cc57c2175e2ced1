use std::collections::HashSet;
use std::fs::read_to_string;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use enermon::types::{AdviceKind, Grade, Mode, Priority, Severity};
use enermon::{AsPlain, DataStore};

fn household_store() -> DataStore {
    let csv = read_to_string("test_data/lecturas_hogar.csv").unwrap();
    let mut store = DataStore::new(Mode::Household);
    let stats = store.load_readings_csv(&csv);
    assert_eq!(stats.skipped_rows, 0);
    assert_eq!(stats.zeroed_values, 0);
    store
}

fn industry_store() -> DataStore {
    let csv = read_to_string("test_data/lecturas_industria.csv").unwrap();
    let mut store = DataStore::new(Mode::Industry);
    store.load_readings_csv(&csv);
    store
}

#[test]
fn hogar_proyeccion_mensual() {
    let store = household_store();
    assert_eq!(store.readings.len(), 48);
    // 48 lecturas de 0.5 kWh en una sola fecha: 24 kWh/día -> 720 kWh/mes
    let cost = store.cost_data("US");
    assert!((cost.total_cost - 93.60).abs() < 0.01);
    assert!((cost.total_co2 - 662.40).abs() < 0.01);
    assert_eq!(cost.location, "US");
}

#[test]
fn hogar_calificacion_y_desglose() {
    let store = household_store();
    let score = store.energy_score();
    // 720 kWh/mes: eficiencia 28, sostenibilidad 40, coste 10 -> global 26
    assert_eq!(score.efficiency_score, 28.0);
    assert_eq!(score.sustainability_score, 40.0);
    assert_eq!(score.cost_optimization_score, 10.0);
    assert_eq!(score.overall_score, 26.0);
    assert_eq!(score.grade, Grade::F);

    let breakdown = store.breakdown(10);
    assert_eq!(breakdown.len(), 1);
    assert_eq!(breakdown[0].device, "fridge");
    assert!((breakdown[0].pct - 100.0).abs() < 1e-3);

    // serie constante: sin anomalías
    assert!(store.anomalies().is_empty());
}

#[test]
fn hogar_comparativa() {
    let store = household_store();
    let bench = store.benchmark();
    assert_eq!(bench.user_consumption, 720.0);
    assert_eq!(bench.peer_average, 350.0);
    // 720 kWh/mes duplica con creces la media: percentil 0
    assert_eq!(bench.efficiency_ranking, 0.0);
}

#[test]
fn industria_desglose_por_maquina() {
    let store = industry_store();
    let breakdown = store.breakdown(10);
    assert_eq!(breakdown.len(), 2);
    assert_eq!(breakdown[0].device, "M-01");
    assert_eq!(breakdown[0].kwh, 7.0);
    assert_eq!(breakdown[1].device, "M-02");
    assert_eq!(breakdown[1].kwh, 4.0);
}

#[test]
fn industria_anomalia_alta() {
    let store = industry_store();
    let anomalies = store.anomalies();
    // media de linea1 = 1.4; la lectura de 3.0 supera el doble de la media
    assert_eq!(anomalies.len(), 1);
    assert_eq!(anomalies[0].device, "linea1");
    assert_eq!(anomalies[0].severity, Severity::High);
    assert_eq!(anomalies[0].actual_kwh, 3.0);
}

#[test]
fn industria_huella_por_modo() {
    let store = industry_store();
    // 7 lecturas (ventana corta): total 11 kWh como estimación mensual
    assert!((store.footprint() - 11.0 * 0.92).abs() < 1e-3);
}

#[test]
fn equipos_sintesis_y_recomendaciones() {
    let csv = read_to_string("test_data/equipos.csv").unwrap();
    let mut store = DataStore::new(Mode::Household);
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let (count, stats) = store.import_appliances_csv(&csv, start, 42);
    assert_eq!(count, 3);
    assert_eq!(stats.skipped_rows, 0);

    // las lecturas sintetizadas usan exactamente los nombres importados
    let names: HashSet<&str> = store
        .appliances
        .data
        .iter()
        .map(|a| a.name.as_str())
        .collect();
    for share in store.breakdown(10) {
        assert!(names.contains(share.device.as_str()));
    }

    // la caldera (15 años, clase C) produce sustitución y mejora, ambas altas
    let advice = store.advice("US");
    let caldera_high: Vec<_> = advice
        .iter()
        .filter(|a| a.device == "caldera" && a.priority == Priority::High)
        .collect();
    assert!(caldera_high.len() >= 2);
    assert!(caldera_high
        .iter()
        .any(|a| a.category == AdviceKind::Replacement));
    assert!(caldera_high
        .iter()
        .any(|a| a.category == AdviceKind::EfficiencyUpgrade));
}

#[test]
fn resumen_serializable_y_plano() {
    let store = household_store();
    let summary = store.summary("ES", 5);
    let json = serde_json::to_string_pretty(&summary).unwrap();
    assert!(json.contains("\"grade\": \"F\""));
    assert!(json.contains("\"location\": \"ES\""));

    let plain = summary.to_plain();
    assert!(plain.contains("** Desglose por dispositivo"));
    assert!(plain.contains("fridge"));
}

#[test]
fn almacen_vacio_estado_centinela() {
    let store = DataStore::new(Mode::Household);
    let summary = store.summary("US", 10);
    assert_eq!(summary.cost.total_cost, 0.0);
    assert_eq!(summary.cost.total_co2, 0.0);
    assert_eq!(summary.score.grade, Grade::F);
    assert!(summary.breakdown.is_empty());
    assert!(summary.anomalies.is_empty());
    assert!(summary.advice.is_empty());
}
