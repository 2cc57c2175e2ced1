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
Fuente simulada de lecturas en tiempo real
==========================================

Productor perezoso y reiniciable de lecturas sintéticas que sustituye a la
simulación por temporizador: el llamador decide la cadencia (el paso temporal
entre lecturas es fijo) y el ciclo de vida es explícito mediante
[`LiveFeed::restart`]. No hay transporte, reconexión ni control de flujo.

Se conserva una memoria de las lecturas más recientes truncada a
[`FEED_BUFFER_MAX`] elementos.
*/

use std::collections::VecDeque;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::Reading;

/// Número máximo de lecturas retenidas en la memoria reciente
pub const FEED_BUFFER_MAX: usize = 200;

/// Paso temporal entre lecturas emitidas [s]
pub const FEED_STEP_SECONDS: i64 = 2;

/// Intervalo de magnitudes emitidas [kWh]
pub const FEED_KWH_RANGE: (f32, f32) = (0.05, 2.5);

/// Productor reiniciable de lecturas sintéticas
///
/// Con la misma semilla produce siempre la misma secuencia; `restart`
/// devuelve el productor al origen.
#[derive(Debug)]
pub struct LiveFeed {
    devices: Vec<String>,
    seed: u64,
    rng: StdRng,
    origin: NaiveDateTime,
    clock: NaiveDateTime,
    next_device: usize,
    recent: VecDeque<Reading>,
}

impl LiveFeed {
    /// Crea el productor para los dispositivos indicados
    ///
    /// Sin dispositivos se emite bajo el nombre genérico `general`.
    pub fn new(devices: Vec<String>, seed: u64) -> Self {
        let devices = if devices.is_empty() {
            vec!["general".to_string()]
        } else {
            devices
        };
        let origin = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        LiveFeed {
            devices,
            seed,
            rng: StdRng::seed_from_u64(seed),
            origin,
            clock: origin,
            next_device: 0,
            recent: VecDeque::with_capacity(FEED_BUFFER_MAX),
        }
    }

    /// Devuelve el productor al origen de la secuencia
    ///
    /// La misma semilla reproduce exactamente la misma serie de lecturas.
    pub fn restart(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.clock = self.origin;
        self.next_device = 0;
        self.recent.clear();
    }

    /// Emite la siguiente lectura sintética
    pub fn poll(&mut self) -> Reading {
        let device = self.devices[self.next_device % self.devices.len()].clone();
        self.next_device = (self.next_device + 1) % self.devices.len();
        let (lo, hi) = FEED_KWH_RANGE;
        let reading = Reading {
            timestamp: self.clock.format("%Y-%m-%dT%H:%M:%S").to_string(),
            device,
            kwh: self.rng.gen_range(lo..hi),
            machine_id: None,
            process_id: None,
        };
        self.clock += Duration::seconds(FEED_STEP_SECONDS);
        self.recent.push_back(reading.clone());
        if self.recent.len() > FEED_BUFFER_MAX {
            self.recent.pop_front();
        }
        reading
    }

    /// Lecturas más recientes, truncadas a [`FEED_BUFFER_MAX`]
    pub fn recent(&self) -> &VecDeque<Reading> {
        &self.recent
    }
}

impl Iterator for LiveFeed {
    type Item = Reading;

    /// La secuencia es infinita; el llamador decide cuándo parar
    fn next(&mut self) -> Option<Reading> {
        Some(self.poll())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tfeed_sequence_and_clock() {
        let mut feed = LiveFeed::new(vec!["nevera".into(), "horno".into()], 1);
        let first = feed.poll();
        let second = feed.poll();
        assert_eq!(first.timestamp, "2025-01-01T00:00:00");
        assert_eq!(second.timestamp, "2025-01-01T00:00:02");
        assert_eq!(first.device, "nevera");
        assert_eq!(second.device, "horno");
    }

    #[test]
    fn tfeed_restart_reproduces() {
        let mut feed = LiveFeed::new(vec!["nevera".into()], 99);
        let first: Vec<Reading> = feed.by_ref().take(5).collect();
        feed.restart();
        let again: Vec<Reading> = feed.by_ref().take(5).collect();
        assert_eq!(first, again);
    }

    #[test]
    fn tfeed_recent_truncated() {
        let mut feed = LiveFeed::new(vec![], 3);
        for _ in 0..(FEED_BUFFER_MAX + 50) {
            feed.poll();
        }
        assert_eq!(feed.recent().len(), FEED_BUFFER_MAX);
        assert_eq!(feed.recent()[0].device, "general");
    }

    #[test]
    fn tfeed_values_in_range() {
        let mut feed = LiveFeed::new(vec!["motor".into()], 5);
        for reading in feed.by_ref().take(100) {
            assert!(reading.kwh >= FEED_KWH_RANGE.0 && reading.kwh < FEED_KWH_RANGE.1);
        }
    }
}
