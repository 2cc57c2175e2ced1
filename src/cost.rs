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
Proyección de coste y emisiones
===============================

Proyección mensual de coste económico y de emisiones a partir de la serie de
lecturas y de la tabla de tarifas por localización.

La proyección es una extrapolación lineal deliberadamente simple, no un
modelo de facturación con calendario: los llamadores deben recalcularla ante
cada cambio de datos en lugar de mantenerla incrementalmente.
*/

use crate::rates::rates_from_loc;
use crate::types::{CostData, Mode, Readings};

/// Calcula la proyección mensual de coste y emisiones
///
/// Los códigos de localización desconocidos usan la fila de respaldo `US`.
/// Una serie vacía produce una proyección con totales a cero, no un error.
pub fn cost_projection(readings: &Readings, loc: &str) -> CostData {
    let (row, _) = rates_from_loc(loc);
    let monthly = readings.monthly_kwh();
    CostData {
        total_cost: monthly * row.rates.cost_per_kwh,
        total_co2: monthly * row.rates.co2_factor,
        cost_per_kwh: row.rates.cost_per_kwh,
        co2_factor: row.rates.co2_factor,
        location: row.code.to_string(),
    }
}

/// Estimación mensual de huella de carbono según el modo [kg CO₂e/mes]
///
/// Versión consolidada, parametrizada por modo, del cálculo de huella: la
/// intensidad de carbono es la única diferencia entre los modos.
pub fn carbon_footprint(readings: &Readings, mode: Mode) -> f32 {
    readings.monthly_kwh() * mode.carbon_intensity()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn readings_csv(csv: &str) -> Readings {
        Readings::parse_with_mode(csv, Mode::Household).0
    }

    // 48 lecturas de 0.5 kWh con la misma fecha: media diaria 24 kWh
    fn two_day_fridge() -> Readings {
        let mut csv = String::from("timestamp,device,kwh\n");
        for _ in 0..48 {
            csv.push_str("2025-01-01T00:00:00,fridge,0.5\n");
        }
        readings_csv(&csv)
    }

    #[test]
    fn tcost_monthly_extrapolation() {
        let readings = two_day_fridge();
        let cost = cost_projection(&readings, "US");
        // 24 kWh/día * 30 días = 720 kWh/mes
        assert!((cost.total_cost - 93.60).abs() < 0.01);
        assert!((cost.total_co2 - 662.40).abs() < 0.01);
        assert_eq!(cost.location, "US");
    }

    #[test]
    fn tcost_linear_in_kwh() {
        let readings = two_day_fridge();
        let mut doubled = readings.clone();
        for r in &mut doubled.data {
            r.kwh *= 2.0;
        }
        let base = cost_projection(&readings, "DE");
        let twice = cost_projection(&doubled, "DE");
        assert!((twice.total_cost - 2.0 * base.total_cost).abs() < 1e-3);
        assert!((twice.total_co2 - 2.0 * base.total_co2).abs() < 1e-3);
    }

    #[test]
    fn tcost_short_window_direct() {
        // 3 filas <= 24: el total se toma directamente, sin escalar
        let readings = readings_csv(
            "timestamp,device,kwh
2025-01-01T00:00:00,horno,1.0
2025-01-01T01:00:00,horno,1.0
2025-01-01T02:00:00,horno,1.0
",
        );
        let cost = cost_projection(&readings, "US");
        assert!((cost.total_cost - 3.0 * 0.13).abs() < 1e-6);
    }

    #[test]
    fn tcost_empty_is_zero() {
        let readings = Readings::default();
        for loc in &["US", "ES", "JP", "ATLANTIS"] {
            let cost = cost_projection(&readings, loc);
            assert_eq!(cost.total_cost, 0.0);
            assert_eq!(cost.total_co2, 0.0);
        }
    }

    #[test]
    fn tcost_unknown_loc_falls_back() {
        let readings = two_day_fridge();
        let cost = cost_projection(&readings, "ATLANTIS");
        assert_eq!(cost.location, "US");
        assert_eq!(cost.cost_per_kwh, 0.13);
    }

    #[test]
    fn tfootprint_by_mode() {
        let readings = two_day_fridge();
        let household = carbon_footprint(&readings, Mode::Household);
        let industry = carbon_footprint(&readings, Mode::Industry);
        assert!((household - 720.0 * 0.85).abs() < 0.01);
        assert!((industry - 720.0 * 0.92).abs() < 0.01);
    }
}
