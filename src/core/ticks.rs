//! Round-number tick generation for continuous axes.
//!
//! Steps are always `1`, `2`, `5` or `10` times a power of ten. For steps
//! below one the increment is carried as its negated inverse (`-10` for
//! `0.1`) so tick values are computed by division and stay exact.

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let inverse = 10f64.powf(-power) / factor;
        i1 = (start * inverse).round();
        i2 = (stop * inverse).round();
        if i1 / inverse < start {
            i1 += 1.0;
        }
        if i2 / inverse > stop {
            i2 -= 1.0;
        }
        inc = -inverse;
    } else {
        let step = 10f64.powf(power) * factor;
        i1 = (start / step).round();
        i2 = (stop / step).round();
        if i1 * step < start {
            i1 += 1.0;
        }
        if i2 * step > stop {
            i2 -= 1.0;
        }
        inc = step;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

fn valid_interval(start: f64, stop: f64, count: usize) -> bool {
    start.is_finite() && stop.is_finite() && count > 0
}

/// Signed increment: positive for steps `>= 1`, negated inverse otherwise.
#[must_use]
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    if !valid_interval(start, stop, count) {
        return 0.0;
    }
    tick_spec(start, stop, count as f64).2
}

/// Absolute distance between consecutive ticks.
#[must_use]
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let (start, stop) = if stop < start { (stop, start) } else { (start, stop) };
    let inc = tick_increment(start, stop, count);
    if inc < 0.0 { -1.0 / inc } else { inc }
}

/// Ticks within `[start, stop]` in ascending order.
#[must_use]
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !valid_interval(start, stop, count) {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let (low, high) = if stop < start { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_spec(low, high, count as f64);
    if !(i2 >= i1) || inc == 0.0 {
        return Vec::new();
    }

    let n = (i2 - i1) as usize + 1;
    (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect()
}

/// Extends `[start, stop]` outward so both ends fall on tick values.
#[must_use]
pub fn nice(start: f64, stop: f64, count: usize) -> (f64, f64) {
    if !valid_interval(start, stop, count) || start >= stop {
        return (start, stop);
    }

    let (mut start, mut stop) = (start, stop);
    let mut previous = f64::NAN;
    for _ in 0..10 {
        let step = tick_increment(start, stop, count);
        if step == previous {
            break;
        }
        if step > 0.0 {
            start = (start / step).floor() * step;
            stop = (stop / step).ceil() * step;
        } else if step < 0.0 {
            start = (start * step).ceil() / step;
            stop = (stop * step).floor() / step;
        } else {
            break;
        }
        previous = step;
    }
    (start, stop)
}

#[cfg(test)]
mod tests {
    use super::{nice, tick_step, ticks};

    #[test]
    fn ticks_use_round_steps() {
        assert_eq!(ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn ticks_stay_inside_interval() {
        let values = ticks(3.5, 97.2, 10);
        assert_eq!(values.first().copied(), Some(10.0));
        assert_eq!(values.last().copied(), Some(90.0));
    }

    #[test]
    fn nice_extends_to_tick_boundaries() {
        assert_eq!(nice(0.5, 9.7, 10), (0.0, 10.0));
        assert_eq!(nice(12.0, 1_487.0, 10), (0.0, 1_600.0));
    }

    #[test]
    fn tick_step_is_positive_for_fractional_steps() {
        assert!((tick_step(0.0, 1.0, 10) - 0.1).abs() < 1e-12);
        assert_eq!(tick_step(0.0, 100.0, 10), 10.0);
    }
}
