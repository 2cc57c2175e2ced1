// Copyright (c) 2019-2023  Ministerio de Fomento
//                          Instituto de Ciencias de la Construcción Eduardo Torroja (IETcc-CSIC)

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

// Author(s): Rafael Villar Burke <pachi@ietcc.csic.es>,
//            Daniel Jiménez González <dani@ietcc.csic.es>,
//            Marta Sorribes Gil <msorribes@ietcc.csic.es>

/*!
Almacén de datos de la sesión
=============================

Objeto explícito, propiedad del llamador, que agrupa las lecturas y los
equipos vigentes y ofrece la fachada de consulta de las métricas derivadas.
No hay estado global de módulo: cada sesión construye su propio almacén y
puede coexistir con otras.

Las cargas sustituyen íntegramente al conjunto anterior (sin mezcla) y todas
las consultas recalculan desde cero sobre los datos vigentes.
*/

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::advice::generate_advice;
use crate::anomaly::detect_anomalies;
use crate::benchmark::benchmark;
use crate::breakdown::device_breakdown;
use crate::cost::{carbon_footprint, cost_projection};
use crate::rates::rates_from_loc;
use crate::score::energy_score;
use crate::synth::synthesize_readings;
use crate::types::{
    Advice, Anomaly, Appliances, BenchmarkData, CostData, DeviceShare, EnergyScore, Mode,
    ParseStats, Readings,
};

/// Almacén de lecturas y equipos de una sesión
#[derive(Debug, Default, Clone)]
pub struct DataStore {
    /// Lecturas vigentes
    pub readings: Readings,
    /// Equipos vigentes
    pub appliances: Appliances,
    /// Modo de explotación de la sesión
    pub mode: Mode,
}

impl DataStore {
    /// Crea un almacén vacío para el modo indicado
    pub fn new(mode: Mode) -> Self {
        DataStore {
            mode,
            ..Default::default()
        }
    }

    /// Carga lecturas desde texto CSV, sustituyendo a las anteriores
    pub fn load_readings_csv(&mut self, text: &str) -> ParseStats {
        let (readings, stats) = Readings::parse_with_mode(text, self.mode);
        self.readings = readings;
        stats
    }

    /// Importa equipos desde texto CSV y sintetiza sus lecturas
    ///
    /// Sustituye tanto el conjunto de equipos como el de lecturas; con la
    /// misma semilla la síntesis es reproducible. Devuelve el número de
    /// equipos importados y el recuento de incidencias.
    pub fn import_appliances_csv(
        &mut self,
        text: &str,
        start: NaiveDate,
        seed: u64,
    ) -> (usize, ParseStats) {
        let (appliances, stats) = Appliances::parse(text);
        let mut rng = StdRng::seed_from_u64(seed);
        self.readings = synthesize_readings(&appliances, start, &mut rng);
        self.appliances = appliances;
        (self.appliances.len(), stats)
    }

    /// Proyección mensual de coste y emisiones
    pub fn cost_data(&self, loc: &str) -> CostData {
        cost_projection(&self.readings, loc)
    }

    /// Terna de puntuaciones y calificación
    pub fn energy_score(&self) -> EnergyScore {
        energy_score(&self.readings, &self.appliances)
    }

    /// Desglose de consumo por dispositivo
    pub fn breakdown(&self, top_n: usize) -> Vec<DeviceShare> {
        device_breakdown(&self.readings, self.mode, top_n)
    }

    /// Lecturas anómalas de la ventana vigente
    pub fn anomalies(&self) -> Vec<Anomaly> {
        detect_anomalies(&self.readings)
    }

    /// Recomendaciones de ahorro del parque de equipos
    pub fn advice(&self, loc: &str) -> Vec<Advice> {
        generate_advice(&self.appliances, loc)
    }

    /// Comparativa con instalaciones similares
    pub fn benchmark(&self) -> BenchmarkData {
        benchmark(&self.readings, self.mode)
    }

    /// Huella de carbono mensual estimada del modo [kg CO₂e/mes]
    pub fn footprint(&self) -> f32 {
        carbon_footprint(&self.readings, self.mode)
    }

    /// Calcula todas las métricas derivadas de una vez
    pub fn summary(&self, loc: &str, top_n: usize) -> Summary {
        let (row, _) = rates_from_loc(loc);
        Summary {
            mode: self.mode,
            monthly_kwh: self.readings.monthly_kwh(),
            currency: row.rates.currency.to_string(),
            cost: self.cost_data(loc),
            score: self.energy_score(),
            breakdown: self.breakdown(top_n),
            anomalies: self.anomalies(),
            advice: self.advice(loc),
            benchmark: self.benchmark(),
            footprint_kg: self.footprint(),
        }
    }
}

/// Conjunto completo de métricas derivadas del estado vigente del almacén
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Modo de explotación
    pub mode: Mode,
    /// Consumo mensual estimado [kWh/mes]
    pub monthly_kwh: f32,
    /// Símbolo de moneda de la localización
    pub currency: String,
    /// Proyección de coste y emisiones
    pub cost: CostData,
    /// Puntuaciones y calificación
    pub score: EnergyScore,
    /// Desglose por dispositivo
    pub breakdown: Vec<DeviceShare>,
    /// Anomalías detectadas
    pub anomalies: Vec<Anomaly>,
    /// Recomendaciones de ahorro
    pub advice: Vec<Advice>,
    /// Comparativa con instalaciones similares
    pub benchmark: BenchmarkData,
    /// Huella de carbono mensual del modo [kg CO₂e/mes]
    pub footprint_kg: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    const TREADINGS: &str = "timestamp,device,kwh
2025-01-01T00:00:00,nevera,0.5
2025-01-01T01:00:00,horno,1.2
";

    const TAPPS: &str = "name,type,brand,model,rated_power,rating,age,hours
nevera,refrigerator,,,150,A+,3,24
caldera,water_heater,,,2000,C,15,3
";

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    #[test]
    fn tstore_load_replaces_wholesale() {
        let mut store = DataStore::new(Mode::Household);
        store.load_readings_csv(TREADINGS);
        assert_eq!(store.readings.len(), 2);
        // una segunda carga sustituye, no anexa
        store.load_readings_csv("timestamp,device,kwh\n2025-02-01T00:00:00,tv,0.1\n");
        assert_eq!(store.readings.len(), 1);
        assert_eq!(store.readings.data[0].device, "tv");
    }

    #[test]
    fn tstore_import_appliances_regenerates_readings() {
        let mut store = DataStore::new(Mode::Household);
        store.load_readings_csv(TREADINGS);
        let (count, stats) = store.import_appliances_csv(TAPPS, start(), 42);
        assert_eq!(count, 2);
        assert_eq!(stats.skipped_rows, 0);
        // las lecturas anteriores desaparecen; las sintetizadas usan los
        // nombres de los equipos importados
        let devices: HashSet<&str> = store
            .readings
            .data
            .iter()
            .map(|r| r.device.as_str())
            .collect();
        let names: HashSet<&str> = store
            .appliances
            .data
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert!(devices.is_subset(&names));
        assert!(!store.readings.is_empty());
        // y el desglose refleja exactamente esos nombres
        for share in store.breakdown(10) {
            assert!(names.contains(share.device.as_str()));
        }
    }

    #[test]
    fn tstore_import_deterministic_by_seed() {
        let mut one = DataStore::new(Mode::Household);
        let mut two = DataStore::new(Mode::Household);
        one.import_appliances_csv(TAPPS, start(), 7);
        two.import_appliances_csv(TAPPS, start(), 7);
        assert_eq!(one.readings, two.readings);
    }

    #[test]
    fn tstore_summary_consistent() {
        let mut store = DataStore::new(Mode::Household);
        store.load_readings_csv(TREADINGS);
        let summary = store.summary("ES", 10);
        assert_eq!(summary.currency, "€");
        assert_eq!(summary.cost.location, "ES");
        assert_eq!(summary.breakdown.len(), 2);
        assert!(summary.advice.is_empty());
        // serializable a JSON
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"monthly_kwh\""));
    }
}
