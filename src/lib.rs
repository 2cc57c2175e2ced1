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
EnerMon
=======

This crate provides a library and binary that **compute derived metrics from
energy-monitoring data**: monthly cost and emission projections against
per-location rate tables, an efficiency / sustainability / cost score triad
with a letter grade, per-device consumption breakdowns, threshold-based
anomaly detection and rule-based saving recommendations.

Input data are CSV files of timestamped consumption readings (household or
industry column layouts) or of appliance descriptors; the latter drive the
synthesis of a plausible seven-day hourly reading sequence. All metrics are
pure functions of the current data set and are recomputed from scratch on
every call; there is no persisted history.

Este *crate* proporciona una biblioteca y un programa que **calculan métricas
derivadas a partir de datos de monitorización energética**: proyecciones
mensuales de coste y emisiones según tablas de tarifas por localización, una
terna de puntuaciones (eficiencia, sostenibilidad, optimización de coste) con
calificación por letras, el desglose de consumo por dispositivo, la detección
de anomalías por umbral y recomendaciones de ahorro basadas en reglas.

Los datos de entrada son archivos CSV de lecturas de consumo con sello de
tiempo (columnas en modo hogar o industria) o de descriptores de equipos; en
el segundo caso se sintetiza una secuencia horaria plausible de siete días.
Todas las métricas son funciones puras del conjunto de datos vigente y se
recalculan por completo en cada llamada, sin histórico persistente.

# Ejemplo

```rust
use enermon::{types::Mode, AsPlain, DataStore};

// carga de lecturas desde un CSV (la línea 0 es cabecera)
let csv = "timestamp,device,kwh
2025-01-01T00:00:00,nevera,0.5
2025-01-01T01:00:00,horno,1.2
2025-01-01T02:00:00,nevera,0.5
";

let mut store = DataStore::new(Mode::Household);
let stats = store.load_readings_csv(csv);
assert_eq!(stats.skipped_rows, 0);

// métricas derivadas para la localización indicada (desconocida -> US)
let summary = store.summary("US", 10);
assert!(summary.cost.total_cost > 0.0);

// visualización compacta
println!("{}", summary.to_plain());
```

*/

#![deny(missing_docs)]

mod advice;
mod anomaly;
mod asplain;
mod benchmark;
mod breakdown;
mod cost;
mod feed;
mod ingest;
mod rates;
mod score;
mod stats;
mod store;
mod synth;

pub mod error;
pub mod types;

pub use advice::*;
pub use anomaly::*;
pub use asplain::*;
pub use benchmark::*;
pub use breakdown::*;
pub use cost::*;
pub use feed::*;
pub use ingest::*;
pub use rates::*;
pub use score::*;
pub use store::*;
pub use synth::*;

/// Número de versión de la librería
///
/// Version number
pub static VERSION: &str = env!("CARGO_PKG_VERSION");
