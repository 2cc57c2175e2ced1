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
Comparativa con instalaciones similares
=======================================

Sitúa el consumo mensual propio frente a una cohorte de referencia fija por
modo de explotación. El percentil es una recta decreciente del cociente
consumo propio / media de la cohorte, acotada a [0,100].
*/

use crate::stats::clamp;
use crate::types::{BenchmarkData, Mode, Readings};

/// Consumo medio de referencia por modo [kWh/mes] y tamaño de cohorte
const PEER_BASELINES: [(Mode, f32, u32); 2] = [
    (Mode::Household, 350.0, 1248),
    (Mode::Industry, 3500.0, 312),
];

/// Fracción de la media que consume el decil más eficiente
pub const TOP_DECILE_FRACTION: f32 = 0.6;

/// Calcula la comparativa del consumo propio con la cohorte del modo
///
/// Sin lecturas devuelve la comparativa a cero (estado vacío, no error).
pub fn benchmark(readings: &Readings, mode: Mode) -> BenchmarkData {
    if readings.is_empty() {
        return BenchmarkData::default();
    }
    let user = readings.monthly_kwh();
    let (_, peer, count) = PEER_BASELINES
        .iter()
        .copied()
        .find(|(m, ..)| *m == mode)
        .unwrap_or(PEER_BASELINES[0]);
    BenchmarkData {
        user_consumption: user,
        peer_average: peer,
        top_10_percent: peer * TOP_DECILE_FRACTION,
        efficiency_ranking: clamp(100.0 - 50.0 * user / peer, 0.0, 100.0),
        similar_properties_count: count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn readings_totaling(kwh: f32) -> Readings {
        let csv = format!("timestamp,device,kwh\n2025-01-01T00:00:00,nevera,{}\n", kwh);
        Readings::parse_with_mode(&csv, Mode::Household).0
    }

    #[test]
    fn tbenchmark_empty_is_zero() {
        let data = benchmark(&Readings::default(), Mode::Household);
        assert_eq!(data, BenchmarkData::default());
    }

    #[test]
    fn tbenchmark_at_peer_average() {
        let data = benchmark(&readings_totaling(350.0), Mode::Household);
        assert_eq!(data.peer_average, 350.0);
        assert_eq!(data.efficiency_ranking, 50.0);
        assert_eq!(data.top_10_percent, 210.0);
        assert_eq!(data.similar_properties_count, 1248);
    }

    #[test]
    fn tbenchmark_ranking_monotonic() {
        let frugal = benchmark(&readings_totaling(100.0), Mode::Household);
        let heavy = benchmark(&readings_totaling(900.0), Mode::Household);
        assert!(frugal.efficiency_ranking > heavy.efficiency_ranking);
    }

    #[test]
    fn tbenchmark_industry_cohort() {
        let data = benchmark(&readings_totaling(3500.0), Mode::Industry);
        assert_eq!(data.peer_average, 3500.0);
        assert_eq!(data.similar_properties_count, 312);
    }
}
