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
//            Daniel Jiménez González <dani@ietcc.csic.es>

// -----------------------------------------------------------------------------------
// Numeric utilities
// -----------------------------------------------------------------------------------

use num::{Float, Zero};

// Suma de una serie de valores
pub fn vecsum<T: Float>(values: &[T]) -> T {
    values.iter().fold(Zero::zero(), |acc, &v| acc + v)
}

// Media aritmética de una serie (0 si está vacía)
pub fn vecmean<T: Float>(values: &[T]) -> T {
    if values.is_empty() {
        Zero::zero()
    } else {
        vecsum(values) / T::from(values.len()).unwrap()
    }
}

// Acota un valor al intervalo [lo, hi]
pub fn clamp<T: Float>(v: T, lo: T, hi: T) -> T {
    v.max(lo).min(hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tstats() {
        assert_eq!(vecsum(&[1.0_f32, 2.0, 3.0]), 6.0);
        assert_eq!(vecmean(&[1.0_f32, 2.0, 3.0]), 2.0);
        assert_eq!(vecmean::<f32>(&[]), 0.0);
        assert_eq!(clamp(120.0_f32, 0.0, 100.0), 100.0);
        assert_eq!(clamp(-3.0_f32, 0.0, 100.0), 0.0);
    }
}
