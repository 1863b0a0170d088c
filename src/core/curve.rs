use serde::{Deserialize, Serialize};

const EPSILON: f64 = 1e-12;

/// Interpolation used between consecutive line samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Curve {
    #[default]
    Linear,
    /// Centripetal Catmull-Rom spline (alpha 0.5); passes through every sample.
    CatmullRom,
}

/// One drawing command of a line path, in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    CubicTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
}

impl PathCommand {
    /// End point of the command.
    #[must_use]
    pub fn end(self) -> (f64, f64) {
        match self {
            PathCommand::MoveTo { x, y }
            | PathCommand::LineTo { x, y }
            | PathCommand::CubicTo { x, y, .. } => (x, y),
        }
    }
}

impl Curve {
    /// Builds the path through `points` (pixel coordinates, input order).
    #[must_use]
    pub fn path(self, points: &[(f64, f64)]) -> Vec<PathCommand> {
        match self {
            Curve::Linear => linear_path(points),
            Curve::CatmullRom => catmull_rom_path(points, 0.5),
        }
    }
}

fn linear_path(points: &[(f64, f64)]) -> Vec<PathCommand> {
    let mut commands = Vec::with_capacity(points.len());
    for (index, &(x, y)) in points.iter().enumerate() {
        if index == 0 {
            commands.push(PathCommand::MoveTo { x, y });
        } else {
            commands.push(PathCommand::LineTo { x, y });
        }
    }
    commands
}

fn catmull_rom_path(points: &[(f64, f64)], alpha: f64) -> Vec<PathCommand> {
    let mut spline = CatmullRom::new(alpha, points.len());
    for &(x, y) in points {
        spline.point(x, y);
    }
    spline.finish()
}

/// Streaming Catmull-Rom state: keeps the last three samples and the
/// alpha-weighted distances between them.
struct CatmullRom {
    alpha: f64,
    commands: Vec<PathCommand>,
    seen: u8,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    l01_a: f64,
    l12_a: f64,
    l23_a: f64,
    l01_2a: f64,
    l12_2a: f64,
    l23_2a: f64,
}

impl CatmullRom {
    fn new(alpha: f64, capacity: usize) -> Self {
        Self {
            alpha,
            commands: Vec::with_capacity(capacity),
            seen: 0,
            x0: f64::NAN,
            y0: f64::NAN,
            x1: f64::NAN,
            y1: f64::NAN,
            x2: f64::NAN,
            y2: f64::NAN,
            l01_a: 0.0,
            l12_a: 0.0,
            l23_a: 0.0,
            l01_2a: 0.0,
            l12_2a: 0.0,
            l23_2a: 0.0,
        }
    }

    fn point(&mut self, x: f64, y: f64) {
        if self.seen > 0 {
            let x23 = self.x2 - x;
            let y23 = self.y2 - y;
            self.l23_2a = (x23 * x23 + y23 * y23).powf(self.alpha);
            self.l23_a = self.l23_2a.sqrt();
        }

        match self.seen {
            0 => {
                self.seen = 1;
                self.commands.push(PathCommand::MoveTo { x, y });
            }
            1 => self.seen = 2,
            _ => {
                self.seen = 3;
                self.segment(x, y);
            }
        }

        self.l01_a = self.l12_a;
        self.l12_a = self.l23_a;
        self.l01_2a = self.l12_2a;
        self.l12_2a = self.l23_2a;
        self.x0 = self.x1;
        self.x1 = self.x2;
        self.x2 = x;
        self.y0 = self.y1;
        self.y1 = self.y2;
        self.y2 = y;
    }

    // Emits the cubic from (x1, y1) to (x2, y2), with (x, y) as the lookahead sample.
    fn segment(&mut self, x: f64, y: f64) {
        let (mut cx1, mut cy1) = (self.x1, self.y1);
        let (mut cx2, mut cy2) = (self.x2, self.y2);

        if self.l01_a > EPSILON {
            let a = 2.0 * self.l01_2a + 3.0 * self.l01_a * self.l12_a + self.l12_2a;
            let n = 3.0 * self.l01_a * (self.l01_a + self.l12_a);
            cx1 = (cx1 * a - self.x0 * self.l12_2a + self.x2 * self.l01_2a) / n;
            cy1 = (cy1 * a - self.y0 * self.l12_2a + self.y2 * self.l01_2a) / n;
        }

        if self.l23_a > EPSILON {
            let b = 2.0 * self.l23_2a + 3.0 * self.l23_a * self.l12_a + self.l12_2a;
            let m = 3.0 * self.l23_a * (self.l23_a + self.l12_a);
            cx2 = (cx2 * b + self.x1 * self.l23_2a - x * self.l12_2a) / m;
            cy2 = (cy2 * b + self.y1 * self.l23_2a - y * self.l12_2a) / m;
        }

        self.commands.push(PathCommand::CubicTo {
            x1: cx1,
            y1: cy1,
            x2: cx2,
            y2: cy2,
            x: self.x2,
            y: self.y2,
        });
    }

    fn finish(mut self) -> Vec<PathCommand> {
        match self.seen {
            2 => self.commands.push(PathCommand::LineTo {
                x: self.x2,
                y: self.y2,
            }),
            // Repeating the last sample closes the final segment.
            3 => self.point(self.x2, self.y2),
            _ => {}
        }
        self.commands
    }
}

#[cfg(test)]
mod tests {
    use super::{Curve, PathCommand};
    use approx::assert_relative_eq;

    #[test]
    fn catmull_rom_passes_through_every_sample() {
        let points = [(0.0, 10.0), (10.0, 30.0), (20.0, 5.0), (30.0, 25.0), (40.0, 0.0)];
        let commands = Curve::CatmullRom.path(&points);

        assert_eq!(commands.len(), points.len());
        assert!(matches!(commands[0], PathCommand::MoveTo { .. }));
        for (command, &(x, y)) in commands.iter().zip(points.iter()) {
            let (end_x, end_y) = command.end();
            assert_relative_eq!(end_x, x);
            assert_relative_eq!(end_y, y);
        }
        assert!(
            commands[1..]
                .iter()
                .all(|c| matches!(c, PathCommand::CubicTo { .. }))
        );
    }

    #[test]
    fn collinear_samples_keep_controls_on_the_line() {
        let points = [(0.0, 0.0), (10.0, 10.0), (20.0, 20.0), (30.0, 30.0)];
        for command in Curve::CatmullRom.path(&points) {
            if let PathCommand::CubicTo { x1, y1, x2, y2, .. } = command {
                assert_relative_eq!(x1, y1, epsilon = 1e-9);
                assert_relative_eq!(x2, y2, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn two_samples_fall_back_to_a_straight_segment() {
        let commands = Curve::CatmullRom.path(&[(0.0, 0.0), (5.0, 5.0)]);
        assert_eq!(
            commands,
            vec![
                PathCommand::MoveTo { x: 0.0, y: 0.0 },
                PathCommand::LineTo { x: 5.0, y: 5.0 },
            ]
        );
    }

    #[test]
    fn linear_curve_emits_one_command_per_sample() {
        let commands = Curve::Linear.path(&[(0.0, 0.0), (5.0, 5.0), (10.0, 0.0)]);
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[2], PathCommand::LineTo { x: 10.0, y: 0.0 });
    }
}
