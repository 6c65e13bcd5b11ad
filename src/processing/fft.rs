// src/processing/fft.rs
//! FFT engine for band-energy estimation
//!
//! Computes the exact N-point DFT X[k] = sum x[n]·exp(-2*pi*i*k*n/N) for any
//! N >= 1. Power-of-two lengths run iterative radix-2 Cooley-Tukey
//! (bit-reversal permutation plus log2(N) butterfly passes). Other lengths
//! go through Bluestein's chirp transform, which re-expresses the DFT as a
//! convolution evaluated with the same radix-2 core zero-extended to the
//! next power of two M >= 2N-1. The band-energy estimator labels bin k with
//! frequency k·rate/N, so the bins must be those of the true N-point
//! transform.
//!
//! Scratch buffers and the chirp plan are cached per input length, so the
//! steady state (one window length for the life of the pipeline) never
//! rebuilds the plan or regrows the convolution buffers.

use num_complex::Complex32;
use std::f32::consts::PI;

/// Reusable FFT engine.
pub struct FftEngine {
    /// Input length the cached plan was built for
    plan_len: usize,
    /// Convolution length for the Bluestein path (power of two), 0 for the
    /// radix-2 fast path
    conv_len: usize,
    /// chirp[k] = exp(-i*pi*k^2/n)
    chirp: Vec<Complex32>,
    /// Forward FFT of the chirp filter, length `conv_len`
    filter_fft: Vec<Complex32>,
    /// Work buffer, `conv_len` (Bluestein) or `plan_len` (radix-2) long
    work: Vec<Complex32>,
}

impl FftEngine {
    pub fn new() -> Self {
        Self {
            plan_len: 0,
            conv_len: 0,
            chirp: Vec::new(),
            filter_fft: Vec::new(),
            work: Vec::new(),
        }
    }

    /// Engine with the plan for `len` prebuilt, so the first window does not
    /// pay the planning cost either.
    pub fn with_plan(len: usize) -> Self {
        let mut engine = Self::new();
        if len > 0 {
            engine.ensure_plan(len);
        }
        engine
    }

    /// Forward transform of a real sequence. Returns `input.len()` bins.
    pub fn forward(&mut self, input: &[f32]) -> Vec<Complex32> {
        let signal: Vec<Complex32> = input.iter().map(|&v| Complex32::new(v, 0.0)).collect();
        self.transform(&signal)
    }

    /// Inverse transform: conjugate, forward, conjugate, divide by N.
    pub fn inverse(&mut self, spectrum: &[Complex32]) -> Vec<Complex32> {
        let n = spectrum.len();
        if n == 0 {
            return Vec::new();
        }
        let conjugated: Vec<Complex32> = spectrum.iter().map(|c| c.conj()).collect();
        let transformed = self.transform(&conjugated);
        let scale = 1.0 / n as f32;
        transformed.iter().map(|c| c.conj() * scale).collect()
    }

    /// N-point DFT of a complex sequence.
    fn transform(&mut self, input: &[Complex32]) -> Vec<Complex32> {
        let n = input.len();
        if n == 0 {
            return Vec::new();
        }
        if n == 1 {
            return vec![input[0]];
        }
        self.ensure_plan(n);

        if n.is_power_of_two() {
            self.work.clear();
            self.work.extend_from_slice(input);
            fft_in_place(&mut self.work, false);
            return self.work.clone();
        }

        self.bluestein(input)
    }

    fn ensure_plan(&mut self, n: usize) {
        if self.plan_len == n {
            return;
        }
        self.plan_len = n;
        self.chirp.clear();
        self.filter_fft.clear();

        if n.is_power_of_two() {
            self.conv_len = 0;
            self.work = Vec::with_capacity(n);
            return;
        }

        let m = (2 * n - 1).next_power_of_two();
        self.conv_len = m;

        // k^2 reduced mod 2n keeps the phase argument small for large k
        self.chirp = (0..n)
            .map(|k| {
                let phase = -PI * ((k * k) % (2 * n)) as f32 / n as f32;
                Complex32::from_polar(1.0, phase)
            })
            .collect();

        // chirp filter b[j] = conj(chirp[|j|]), wrapped into [0, m)
        let mut filter = vec![Complex32::new(0.0, 0.0); m];
        filter[0] = self.chirp[0].conj();
        for k in 1..n {
            let b = self.chirp[k].conj();
            filter[k] = b;
            filter[m - k] = b;
        }
        fft_in_place(&mut filter, false);
        self.filter_fft = filter;

        self.work = Vec::with_capacity(m);
    }

    fn bluestein(&mut self, input: &[Complex32]) -> Vec<Complex32> {
        let n = input.len();
        let m = self.conv_len;

        self.work.clear();
        self.work.resize(m, Complex32::new(0.0, 0.0));
        for k in 0..n {
            self.work[k] = input[k] * self.chirp[k];
        }

        fft_in_place(&mut self.work, false);
        for (w, f) in self.work.iter_mut().zip(self.filter_fft.iter()) {
            *w *= *f;
        }
        fft_in_place(&mut self.work, true);

        let scale = 1.0 / m as f32;
        (0..n)
            .map(|k| self.work[k] * scale * self.chirp[k])
            .collect()
    }
}

impl Default for FftEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterative radix-2 Cooley-Tukey, in place. `buf.len()` must be a power of
/// two. The inverse pass omits the 1/N scale; callers apply it.
fn fft_in_place(buf: &mut [Complex32], inverse: bool) {
    let n = buf.len();
    debug_assert!(n.is_power_of_two());

    // bit-reversal permutation
    let mut j = 0usize;
    for i in 1..n {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j |= bit;
        if i < j {
            buf.swap(i, j);
        }
    }

    let sign = if inverse { 2.0 } else { -2.0 };
    let mut len = 2;
    while len <= n {
        let step = Complex32::from_polar(1.0, sign * PI / len as f32);
        for start in (0..n).step_by(len) {
            let mut w = Complex32::new(1.0, 0.0);
            for k in 0..len / 2 {
                let u = buf[start + k];
                let v = buf[start + k + len / 2] * w;
                buf[start + k] = u + v;
                buf[start + k + len / 2] = u - v;
                w *= step;
            }
        }
        len <<= 1;
    }
}
