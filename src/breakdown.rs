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
Desglose de consumo por dispositivo
===================================

Agrupa las lecturas por dispositivo (o por máquina en modo industria), suma
el consumo de cada grupo, calcula su participación porcentual y devuelve los
N mayores en orden descendente.
*/

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::types::{DeviceShare, Mode, Readings};

/// Número de grupos del desglose por defecto
pub const TOP_DEVICES_DEFAULT: usize = 10;

/// Calcula el desglose de consumo por dispositivo
///
/// Los porcentajes se calculan sobre el total de todos los grupos, de modo
/// que tras el truncado al top N suman 100 solo si N cubre todos los
/// dispositivos. Los empates conservan el orden de primera aparición
/// (ordenación estable). Sin lecturas devuelve un desglose vacío.
pub fn device_breakdown(readings: &Readings, mode: Mode, top_n: usize) -> Vec<DeviceShare> {
    let mut order: Vec<&str> = Vec::new();
    let mut sums: HashMap<&str, f32> = HashMap::new();
    for r in &readings.data {
        let key = r.group_key(mode);
        if !sums.contains_key(key) {
            order.push(key);
        }
        *sums.entry(key).or_insert(0.0) += r.kwh;
    }
    let total: f32 = sums.values().sum();

    let mut shares: Vec<DeviceShare> = order
        .iter()
        .map(|key| DeviceShare {
            device: key.to_string(),
            kwh: sums[key],
            pct: if total > 0.0 {
                sums[key] / total * 100.0
            } else {
                0.0
            },
        })
        .collect();
    shares.sort_by(|a, b| b.kwh.partial_cmp(&a.kwh).unwrap_or(Ordering::Equal));
    shares.truncate(top_n);
    shares
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TCSV: &str = "timestamp,device,kwh
2025-01-01T00:00:00,nevera,1.0
2025-01-01T01:00:00,horno,3.0
2025-01-01T02:00:00,nevera,1.0
2025-01-01T03:00:00,lavadora,2.0
";

    #[test]
    fn tbreakdown_groups_and_sorts() {
        let (readings, _) = Readings::parse_with_mode(TCSV, Mode::Household);
        let shares = device_breakdown(&readings, Mode::Household, TOP_DEVICES_DEFAULT);
        assert_eq!(shares.len(), 3);
        assert_eq!(shares[0].device, "horno");
        assert_eq!(shares[0].kwh, 3.0);
        assert_eq!(shares[1].device, "nevera");
        assert_eq!(shares[2].device, "lavadora");
        let pct_total: f32 = shares.iter().map(|s| s.pct).sum();
        assert!((pct_total - 100.0).abs() < 1e-3);
    }

    #[test]
    fn tbreakdown_truncates_top_n() {
        let (readings, _) = Readings::parse_with_mode(TCSV, Mode::Household);
        let shares = device_breakdown(&readings, Mode::Household, 2);
        assert_eq!(shares.len(), 2);
        // porcentajes sobre el total completo: suman menos de 100
        let pct_total: f32 = shares.iter().map(|s| s.pct).sum();
        assert!(pct_total < 100.0);
        assert!((pct_total - (3.0 + 2.0) / 7.0 * 100.0).abs() < 1e-3);
    }

    #[test]
    fn tbreakdown_tie_keeps_encounter_order() {
        let csv = "timestamp,device,kwh
2025-01-01T00:00:00,b_dev,1.0
2025-01-01T01:00:00,a_dev,1.0
";
        let (readings, _) = Readings::parse_with_mode(csv, Mode::Household);
        let shares = device_breakdown(&readings, Mode::Household, 10);
        assert_eq!(shares[0].device, "b_dev");
        assert_eq!(shares[1].device, "a_dev");
    }

    #[test]
    fn tbreakdown_industry_groups_by_machine() {
        let csv = "timestamp,device,kwh,machine_id,process_id
2025-01-01T00:00:00,linea1,2.0,M-01,P-1
2025-01-01T01:00:00,linea1,1.0,M-02,P-1
2025-01-01T02:00:00,linea2,1.5
";
        let (readings, _) = Readings::parse_with_mode(csv, Mode::Industry);
        let shares = device_breakdown(&readings, Mode::Industry, 10);
        let names: Vec<&str> = shares.iter().map(|s| s.device.as_str()).collect();
        assert_eq!(names, vec!["M-01", "linea2", "M-02"]);
    }

    #[test]
    fn tbreakdown_empty() {
        let shares = device_breakdown(&Readings::default(), Mode::Household, 10);
        assert!(shares.is_empty());
    }
}
