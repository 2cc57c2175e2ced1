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
Detección de anomalías de consumo
=================================

Regla de umbral fijo sobre la media por dispositivo en la ventana de
lecturas: se señalan las lecturas que superan 1,5 veces la media de su
dispositivo, con severidad alta a partir de 2 veces la media.

Es una pasada única sin modelo estadístico: ni estacionalidad, ni línea base
móvil, ni supresión de falsos positivos.
*/

use std::collections::HashMap;

use crate::stats::vecmean;
use crate::types::{Anomaly, Readings, Severity};

/// Umbral de señalización sobre la media del dispositivo
pub const ANOMALY_FACTOR: f32 = 1.5;

/// Umbral de severidad alta sobre la media del dispositivo
pub const ANOMALY_FACTOR_HIGH: f32 = 2.0;

/// Número máximo de anomalías devueltas
pub const MAX_ANOMALIES: usize = 10;

/// Señala las lecturas anómalas respecto a la media de su dispositivo
///
/// El recorrido respeta el orden de la serie y se detiene al alcanzar
/// [`MAX_ANOMALIES`]. Un dispositivo con lecturas constantes no produce
/// ninguna señal.
pub fn detect_anomalies(readings: &Readings) -> Vec<Anomaly> {
    let mut by_device: HashMap<&str, Vec<f32>> = HashMap::new();
    for r in &readings.data {
        by_device.entry(r.device.as_str()).or_default().push(r.kwh);
    }
    let means: HashMap<&str, f32> = by_device
        .iter()
        .map(|(device, values)| (*device, vecmean(values)))
        .collect();

    let mut anomalies = Vec::new();
    for r in &readings.data {
        let mean = means[r.device.as_str()];
        if mean > 0.0 && r.kwh > ANOMALY_FACTOR * mean {
            let severity = if r.kwh > ANOMALY_FACTOR_HIGH * mean {
                Severity::High
            } else {
                Severity::Medium
            };
            anomalies.push(Anomaly {
                timestamp: r.timestamp.clone(),
                device: r.device.clone(),
                actual_kwh: r.kwh,
                expected_kwh: mean,
                severity,
            });
            if anomalies.len() == MAX_ANOMALIES {
                break;
            }
        }
    }
    anomalies
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mode;
    use pretty_assertions::assert_eq;

    fn readings_of(values: &[f32]) -> Readings {
        let mut csv = String::from("timestamp,device,kwh\n");
        for (i, v) in values.iter().enumerate() {
            csv.push_str(&format!("2025-01-01T{:02}:00:00,motor,{}\n", i % 24, v));
        }
        Readings::parse_with_mode(&csv, Mode::Household).0
    }

    #[test]
    fn tanomaly_constant_series_is_clean() {
        let readings = readings_of(&[1.0, 1.0, 1.0, 1.0]);
        assert_eq!(detect_anomalies(&readings), vec![]);
    }

    #[test]
    fn tanomaly_single_high_spike() {
        // media (4*1.0 + 3.0)/5 = 1.4; 3.0 > 2*1.4 -> severidad alta
        let readings = readings_of(&[1.0, 1.0, 1.0, 1.0, 3.0]);
        let anomalies = detect_anomalies(&readings);
        assert_eq!(anomalies.len(), 1);
        assert_eq!(anomalies[0].severity, Severity::High);
        assert_eq!(anomalies[0].actual_kwh, 3.0);
        assert!((anomalies[0].expected_kwh - 1.4).abs() < 1e-6);
    }

    #[test]
    fn tanomaly_medium_between_thresholds() {
        // media (9*1.0 + 1.8)/10 = 1.08; 1.8 en (1.62, 2.16] -> severidad media
        let mut values = vec![1.0; 9];
        values.push(1.8);
        let readings = readings_of(&values);
        let anomalies = detect_anomalies(&readings);
        assert_eq!(anomalies.len(), 1);
        assert_eq!(anomalies[0].severity, Severity::Medium);
    }

    #[test]
    fn tanomaly_capped_at_max() {
        // alterna picos y valles: la media queda muy por debajo de los picos
        let mut values = Vec::new();
        for _ in 0..30 {
            values.push(0.1);
            values.push(5.0);
        }
        let readings = readings_of(&values);
        let anomalies = detect_anomalies(&readings);
        assert_eq!(anomalies.len(), MAX_ANOMALIES);
    }

    #[test]
    fn tanomaly_empty() {
        assert!(detect_anomalies(&Readings::default()).is_empty());
    }
}
