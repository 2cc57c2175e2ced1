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

/// Proyección mensual de coste y emisiones para una localización
///
/// Monthly-scale cost and emission projection. An empty reading set yields an
/// all-zero projection, never an error.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostData {
    /// Coste mensual estimado [moneda local/mes]
    pub total_cost: f32,
    /// Emisiones mensuales estimadas [kg CO₂e/mes]
    pub total_co2: f32,
    /// Tarifa aplicada [moneda/kWh]
    pub cost_per_kwh: f32,
    /// Factor de emisión aplicado [kg CO₂e/kWh]
    pub co2_factor: f32,
    /// Código de localización resuelto (desconocidos -> `US`)
    pub location: String,
}
