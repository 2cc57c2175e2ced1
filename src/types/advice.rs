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

use std::fmt;
use std::str;

use serde::{Deserialize, Serialize};

use crate::error::EnermonError;

/// Prioridad de una recomendación de ahorro
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Prioridad baja
    Low,
    /// Prioridad media
    Medium,
    /// Prioridad alta
    High,
}

impl Priority {
    /// Orden de presentación (alta primero)
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        };
        write!(f, "{}", label)
    }
}

impl str::FromStr for Priority {
    type Err = EnermonError;

    fn from_str(s: &str) -> Result<Priority, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(EnermonError::PriorityUnknown(s.into())),
        }
    }
}

/// Categoría de una recomendación de ahorro
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceKind {
    /// Sustitución de un equipo envejecido
    Replacement,
    /// Mejora de un equipo con calificación poco eficiente
    EfficiencyUpgrade,
    /// Desplazamiento de uso a horas valle
    Scheduling,
    /// Instalación de termostato inteligente
    SmartThermostat,
    /// Mantenimiento periódico
    Maintenance,
}

impl AdviceKind {
    /// Identificador estable de la categoría
    pub fn id(self) -> &'static str {
        match self {
            AdviceKind::Replacement => "replacement",
            AdviceKind::EfficiencyUpgrade => "efficiency_upgrade",
            AdviceKind::Scheduling => "scheduling",
            AdviceKind::SmartThermostat => "smart_thermostat",
            AdviceKind::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for AdviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Recomendación de ahorro para un equipo
///
/// Los ahorros se expresan con granularidad mensual usando la tabla de
/// tarifas de la localización.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advice {
    /// Identificador (equipo + categoría)
    pub id: String,
    /// Título breve
    pub title: String,
    /// Descripción de la actuación propuesta
    pub description: String,
    /// Equipo al que aplica
    pub device: String,
    /// Ahorro estimado [kWh/mes]
    pub estimated_savings_kwh: f32,
    /// Ahorro estimado [moneda/mes]
    pub estimated_savings_cost: f32,
    /// Reducción de emisiones estimada [kg CO₂e/mes]
    pub estimated_co2_reduction: f32,
    /// Prioridad de la actuación
    pub priority: Priority,
    /// Categoría de la actuación
    pub category: AdviceKind,
}
