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

use itertools::Itertools;

use crate::store::Summary;

// ==================== Conversión a formato simple

/// Muestra en formato simple
///
/// Esta función usa un formato simple y compacto para representar las
/// métricas derivadas de la sesión de monitorización.
pub trait AsPlain {
    /// Get in plain format
    fn to_plain(&self) -> String;
}

// ================= Implementaciones ====================

impl AsPlain for Summary {
    fn to_plain(&self) -> String {
        let mode = self.mode;
        let currency = &self.currency;
        let loc = &self.cost.location;
        let monthly = self.monthly_kwh;
        let cost = self.cost.total_cost;
        let co2 = self.cost.total_co2;
        let rate = self.cost.cost_per_kwh;
        let co2_factor = self.cost.co2_factor;
        let footprint = self.footprint_kg;

        let score = &self.score;
        let grade = score.grade;

        let breakdown = if self.breakdown.is_empty() {
            "- sin lecturas".to_string()
        } else {
            self.breakdown
                .iter()
                .map(|s| format!("- {}: {:.2} kWh ({:.1}%)", s.device, s.kwh, s.pct))
                .join("\n")
        };

        let anomalies = if self.anomalies.is_empty() {
            "Sin anomalías detectadas".to_string()
        } else {
            self.anomalies
                .iter()
                .map(|a| {
                    format!(
                        "- {} {}: {:.2} kWh (esperado {:.2}, severidad {})",
                        a.timestamp, a.device, a.actual_kwh, a.expected_kwh, a.severity
                    )
                })
                .join("\n")
        };

        let advice = if self.advice.is_empty() {
            "Sin recomendaciones (no hay equipos importados)".to_string()
        } else {
            self.advice
                .iter()
                .map(|a| {
                    format!(
                        "- [{}] {}: ahorro estimado {:.1} kWh/mes ({:.2} {})",
                        a.priority, a.title, a.estimated_savings_kwh, a.estimated_savings_cost, currency
                    )
                })
                .join("\n")
        };

        let bench = &self.benchmark;

        format!(
            "** Métricas derivadas (modo {mode})

Localización: {loc}
Consumo mensual estimado [kWh/mes]: {monthly:.1}
Coste estimado [{currency}/mes]: {cost:.2} (tarifa {rate:.2} {currency}/kWh)
Emisiones estimadas [kg CO2e/mes]: {co2:.2} (factor {co2_factor:.2})
Huella de carbono del modo [kg CO2e/mes]: {footprint:.2}

** Calificación energética

Calificación: {grade}
Puntuación global: {overall:.0}
- eficiencia: {eff:.0}
- sostenibilidad: {sus:.0}
- optimización de coste: {copt:.0}

** Desglose por dispositivo

{breakdown}

** Anomalías

{anomalies}

** Recomendaciones

{advice}

** Comparativa

Consumo propio [kWh/mes]: {user:.1}
Media de instalaciones similares [kWh/mes]: {peer:.1}
Decil más eficiente [kWh/mes]: {top:.1}
Percentil superado [%]: {ranking:.0} (sobre {count} instalaciones)
",
            mode = mode,
            loc = loc,
            monthly = monthly,
            currency = currency,
            cost = cost,
            rate = rate,
            co2 = co2,
            co2_factor = co2_factor,
            footprint = footprint,
            grade = grade,
            overall = score.overall_score,
            eff = score.efficiency_score,
            sus = score.sustainability_score,
            copt = score.cost_optimization_score,
            breakdown = breakdown,
            anomalies = anomalies,
            advice = advice,
            user = bench.user_consumption,
            peer = bench.peer_average,
            top = bench.top_10_percent,
            ranking = bench.efficiency_ranking,
            count = bench.similar_properties_count,
        )
    }
}
