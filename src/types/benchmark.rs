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

use serde::{Deserialize, Serialize};

/// Comparativa del consumo propio frente a instalaciones similares
///
/// Los valores de referencia son constantes por modo de explotación; ver la
/// tabla en el módulo `benchmark`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkData {
    /// Consumo mensual propio [kWh/mes]
    pub user_consumption: f32,
    /// Consumo medio de instalaciones similares [kWh/mes]
    pub peer_average: f32,
    /// Consumo del decil más eficiente [kWh/mes]
    pub top_10_percent: f32,
    /// Percentil de instalaciones similares superadas [0,100]
    pub efficiency_ranking: f32,
    /// Tamaño de la cohorte de comparación
    pub similar_properties_count: u32,
}
