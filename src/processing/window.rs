// src/processing/window.rs
//! Fixed-size sample window decoupling acquisition from analysis

use crate::hal::types::ImuSample;

/// Six parallel scalar channels over one analysis window.
///
/// The buffer is filled sample by sample; `view` exposes the channels only
/// once the window is complete, and `reset` rewinds the fill index without
/// touching contents. Invariant: 0 <= fill <= capacity, and all six
/// channels correspond pointwise to the same sampling instants.
pub struct SampleWindow {
    accel_x: Vec<f32>,
    accel_y: Vec<f32>,
    accel_z: Vec<f32>,
    gyro_x: Vec<f32>,
    gyro_y: Vec<f32>,
    gyro_z: Vec<f32>,
    fill: usize,
    capacity: usize,
}

/// Read-only view of a complete window. Borrows the buffer; the pipeline
/// must consume it before the next push.
pub struct WindowView<'a> {
    pub accel_x: &'a [f32],
    pub accel_y: &'a [f32],
    pub accel_z: &'a [f32],
    pub gyro_x: &'a [f32],
    pub gyro_y: &'a [f32],
    pub gyro_z: &'a [f32],
}

impl WindowView<'_> {
    pub fn len(&self) -> usize {
        self.accel_x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accel_x.is_empty()
    }
}

impl SampleWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            accel_x: vec![0.0; capacity],
            accel_y: vec![0.0; capacity],
            accel_z: vec![0.0; capacity],
            gyro_x: vec![0.0; capacity],
            gyro_y: vec![0.0; capacity],
            gyro_z: vec![0.0; capacity],
            fill: 0,
            capacity,
        }
    }

    /// Append one sample. Returns true when the window just became full.
    ///
    /// Pushing into an already-full window restarts the fill, matching the
    /// acquisition loop that resets after consuming each window.
    pub fn push(&mut self, sample: &ImuSample) -> bool {
        if self.fill == self.capacity {
            self.fill = 0;
        }

        let i = self.fill;
        self.accel_x[i] = sample.accel_x;
        self.accel_y[i] = sample.accel_y;
        self.accel_z[i] = sample.accel_z;
        self.gyro_x[i] = sample.gyro_x;
        self.gyro_y[i] = sample.gyro_y;
        self.gyro_z[i] = sample.gyro_z;
        self.fill += 1;

        self.fill == self.capacity
    }

    /// Read-only channel views, available only while the window is full.
    pub fn view(&self) -> Option<WindowView<'_>> {
        if self.fill != self.capacity {
            return None;
        }
        Some(WindowView {
            accel_x: &self.accel_x,
            accel_y: &self.accel_y,
            accel_z: &self.accel_z,
            gyro_x: &self.gyro_x,
            gyro_y: &self.gyro_y,
            gyro_z: &self.gyro_z,
        })
    }

    /// Rewind the fill index; contents are left in place.
    pub fn reset(&mut self) {
        self.fill = 0;
    }

    pub fn fill(&self) -> usize {
        self.fill
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.fill == self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(v: f32) -> ImuSample {
        ImuSample {
            timestamp: 0,
            sequence: 0,
            accel_x: v,
            accel_y: v + 1.0,
            accel_z: v + 2.0,
            gyro_x: v + 3.0,
            gyro_y: v + 4.0,
            gyro_z: v + 5.0,
        }
    }

    #[test]
    fn test_push_reports_window_full_once() {
        let mut window = SampleWindow::new(4);
        assert!(!window.push(&sample(0.0)));
        assert!(!window.push(&sample(1.0)));
        assert!(!window.push(&sample(2.0)));
        assert!(window.push(&sample(3.0)));
        assert!(window.is_full());
    }

    #[test]
    fn test_view_only_when_full() {
        let mut window = SampleWindow::new(3);
        window.push(&sample(0.0));
        assert!(window.view().is_none());
        window.push(&sample(1.0));
        window.push(&sample(2.0));

        let view = window.view().expect("full window");
        assert_eq!(view.len(), 3);
        assert_eq!(view.accel_x, &[0.0, 1.0, 2.0][..]);
        assert_eq!(view.gyro_z, &[5.0, 6.0, 7.0][..]);
    }

    #[test]
    fn test_channels_stay_pointwise_aligned() {
        let mut window = SampleWindow::new(2);
        window.push(&sample(10.0));
        window.push(&sample(20.0));
        let view = window.view().unwrap();
        for i in 0..2 {
            assert_eq!(view.accel_y[i], view.accel_x[i] + 1.0);
            assert_eq!(view.gyro_x[i], view.accel_x[i] + 3.0);
        }
    }

    #[test]
    fn test_reset_rewinds_without_clearing() {
        let mut window = SampleWindow::new(2);
        window.push(&sample(1.0));
        window.push(&sample(2.0));
        window.reset();
        assert_eq!(window.fill(), 0);
        assert!(window.view().is_none());

        // refill overwrites in order
        window.push(&sample(5.0));
        window.push(&sample(6.0));
        let view = window.view().unwrap();
        assert_eq!(view.accel_x, &[5.0, 6.0][..]);
    }

    #[test]
    fn test_push_past_full_restarts_fill() {
        let mut window = SampleWindow::new(2);
        window.push(&sample(1.0));
        window.push(&sample(2.0));
        assert!(!window.push(&sample(3.0)));
        assert_eq!(window.fill(), 1);
    }
}
