//! Sun/moon orbit across the hero, in viewport units.
//!
//! The first half of the animation sweeps the sun through half a turn from
//! `START`; the second half eases the moon from the opposite side of the
//! circle to `END`.

use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// vw
    pub x: f64,
    /// vh
    pub y: f64,
}

pub const START: Point = Point { x: 13.0, y: 19.6 };
pub const END: Point = Point { x: 88.9, y: 24.9 };
pub const CENTER: Point = Point { x: 50.3, y: 99.5 };

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbBody {
    Sun,
    Moon,
}

impl OrbBody {
    pub fn as_str(self) -> &'static str {
        match self {
            OrbBody::Sun => "sun",
            OrbBody::Moon => "moon",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitFrame {
    pub progress: f64,
    pub position: Point,
    pub body: OrbBody,
}

impl OrbitFrame {
    pub fn is_done(&self) -> bool {
        self.progress >= 1.0
    }

    pub fn transform(&self) -> String {
        format!(
            "translate({:.3}vw, {:.3}vh)",
            self.position.x, self.position.y
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPath {
    center: Point,
    radius: f64,
    theta_start: f64,
    theta_end: f64,
}

impl Default for OrbitPath {
    fn default() -> Self {
        Self::new(START, END, CENTER)
    }
}

impl OrbitPath {
    pub fn new(start: Point, end: Point, center: Point) -> Self {
        Self {
            center,
            radius: (start.x - center.x).hypot(start.y - center.y),
            theta_start: (start.y - center.y).atan2(start.x - center.x),
            theta_end: (end.y - center.y).atan2(end.x - center.x),
        }
    }

    /// Orb placement at `progress` (clamped to `0..=1`).
    pub fn frame(&self, progress: f64) -> OrbitFrame {
        let t = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
        let theta_mid = self.theta_start + PI;
        let (theta, body) = if t <= 0.5 {
            (self.theta_start + PI * (t / 0.5), OrbBody::Sun)
        } else {
            let local = (t - 0.5) / 0.5;
            (theta_mid + (self.theta_end - theta_mid) * local, OrbBody::Moon)
        };
        OrbitFrame {
            progress: t,
            position: Point {
                x: self.center.x + self.radius * theta.cos(),
                y: self.center.y + self.radius * theta.sin(),
            },
            body,
        }
    }
}

/// Animation progress for `elapsed_ms` out of `duration_ms`.
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn starts_at_start_and_ends_toward_end() {
        let path = OrbitPath::default();
        assert!(close(path.frame(0.0).position, START));

        // The moon keeps the start radius and stops on the ray through END.
        let radius = (START.x - CENTER.x).hypot(START.y - CENTER.y);
        let theta_end = (END.y - CENTER.y).atan2(END.x - CENTER.x);
        let expected = Point {
            x: CENTER.x + radius * theta_end.cos(),
            y: CENTER.y + radius * theta_end.sin(),
        };
        assert!(close(path.frame(1.0).position, expected));
        assert_eq!(path.frame(1.0).body, OrbBody::Moon);
        assert!(path.frame(1.0).is_done());
    }

    #[test]
    fn midpoint_is_opposite_the_start() {
        let path = OrbitPath::default();
        let mid = path.frame(0.5);
        assert_eq!(mid.body, OrbBody::Sun);
        let mirrored = Point {
            x: 2.0 * CENTER.x - START.x,
            y: 2.0 * CENTER.y - START.y,
        };
        assert!(close(mid.position, mirrored));
    }

    #[test]
    fn radius_is_constant() {
        let path = OrbitPath::default();
        let radius = (START.x - CENTER.x).hypot(START.y - CENTER.y);
        for step in 0..=20 {
            let p = path.frame(step as f64 / 20.0).position;
            assert!(((p.x - CENTER.x).hypot(p.y - CENTER.y) - radius).abs() < 1e-9);
        }
    }

    #[test]
    fn progress_clamps() {
        assert_eq!(progress(3500.0, 7000.0), 0.5);
        assert_eq!(progress(9000.0, 7000.0), 1.0);
        assert_eq!(progress(-5.0, 7000.0), 0.0);
        assert_eq!(progress(10.0, 0.0), 1.0);
    }

    #[test]
    fn transform_uses_viewport_units() {
        let frame = OrbitPath::default().frame(0.0);
        assert_eq!(frame.transform(), "translate(13.000vw, 19.600vh)");
    }
}
