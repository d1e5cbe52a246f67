//! Animation configuration records and the interpolation they drive.
//!
//! Views describe an animation as data (a [`Transition`], a pair of
//! [`Variant`]s, a [`SpringConfig`]) and hand it to the functions here rather
//! than hard-coding timing numbers at each call site.

use serde::Deserialize;

/// Largest step the spring integrator takes in one go, in seconds.
pub const MAX_SPRING_STEP: f64 = 1.0 / 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Ease {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
    CubicBezier(f64, f64, f64, f64),
}

impl Ease {
    fn control_points(self) -> Option<(f64, f64, f64, f64)> {
        match self {
            Ease::Linear => None,
            Ease::EaseIn => Some((0.42, 0.0, 1.0, 1.0)),
            Ease::EaseOut => Some((0.0, 0.0, 0.58, 1.0)),
            Ease::EaseInOut => Some((0.42, 0.0, 0.58, 1.0)),
            Ease::CubicBezier(x1, y1, x2, y2) => Some((x1, y1, x2, y2)),
        }
    }

    /// Evaluates the curve at `t`, which is clamped to [0, 1].
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        match self.control_points() {
            None => t,
            Some((x1, y1, x2, y2)) => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let s = solve_bezier_x(t, x1.clamp(0.0, 1.0), x2.clamp(0.0, 1.0));
                bezier(s, y1, y2)
            }
        }
    }

    pub fn css(self) -> String {
        match self {
            Ease::Linear => "linear".to_string(),
            Ease::EaseIn => "ease-in".to_string(),
            Ease::EaseOut => "ease-out".to_string(),
            Ease::EaseInOut => "ease-in-out".to_string(),
            Ease::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

// One axis of a cubic bezier anchored at 0 and 1.
fn bezier(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

fn solve_bezier_x(x: f64, x1: f64, x2: f64) -> f64 {
    let mut s = x;
    for _ in 0..8 {
        let err = bezier(s, x1, x2) - x;
        if err.abs() < 1e-7 {
            return s;
        }
        let slope = bezier_slope(s, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
    }
    // Newton stalled; x(s) is monotonic for x1, x2 in [0, 1]
    let (mut lo, mut hi) = (0.0, 1.0);
    s = x;
    for _ in 0..64 {
        let v = bezier(s, x1, x2);
        if (v - x).abs() < 1e-7 {
            break;
        }
        if v < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    s
}

/// Duration/delay/easing triple, durations in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: f64,
    pub delay: f64,
    pub ease: Ease,
}

impl Default for Transition {
    fn default() -> Self {
        Self::ITEM
    }
}

impl Transition {
    /// Fade/slide used for most list items.
    pub const ITEM: Transition = Transition {
        duration: 0.6,
        delay: 0.0,
        ease: Ease::EaseOut,
    };
    /// Page header entrance.
    pub const HEADER: Transition = Transition {
        duration: 0.8,
        delay: 0.0,
        ease: Ease::EaseOut,
    };
    /// Skill bar fill.
    pub const BAR: Transition = Transition {
        duration: 1.0,
        delay: 0.0,
        ease: Ease::EaseOut,
    };
    pub const POP: Transition = Transition {
        duration: 0.5,
        delay: 0.0,
        ease: Ease::EaseOut,
    };

    pub fn new(duration: f64, delay: f64, ease: Ease) -> Self {
        Self {
            duration,
            delay,
            ease,
        }
    }

    pub fn with_delay(self, delay: f64) -> Self {
        Self { delay, ..self }
    }

    /// Same transition delayed for the `index`-th child of a staggered group.
    pub fn staggered(self, index: usize, step: f64) -> Self {
        self.with_delay(stagger_delay(index, self.delay, step))
    }

    /// CSS `transition` value covering each of `properties`.
    pub fn css(&self, properties: &[&str]) -> String {
        let ease = self.ease.css();
        properties
            .iter()
            .map(|p| format!("{p} {}s {ease} {}s", self.duration, self.delay))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

pub fn stagger_delay(index: usize, base: f64, step: f64) -> f64 {
    base + index as f64 * step
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub ease: Ease,
}

impl Tween {
    pub fn new(from: f64, to: f64, ease: Ease) -> Self {
        Self { from, to, ease }
    }
}

/// Value of `tween` at linear `progress`, eased and never extrapolated.
pub fn interpolate(progress: f64, tween: &Tween) -> f64 {
    let t = tween.ease.apply(progress);
    tween.from + (tween.to - tween.from) * t
}

/// Animatable snapshot of an element: opacity, vertical offset (px) and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variant {
    pub opacity: f64,
    pub y: f64,
    pub scale: f64,
}

impl Variant {
    pub const VISIBLE: Variant = Variant {
        opacity: 1.0,
        y: 0.0,
        scale: 1.0,
    };
    /// Plain fade, used by staggered containers.
    pub const HIDDEN: Variant = Variant {
        opacity: 0.0,
        y: 0.0,
        scale: 1.0,
    };
    /// List items slide up 20px while fading in.
    pub const ITEM_HIDDEN: Variant = Variant {
        opacity: 0.0,
        y: 20.0,
        scale: 1.0,
    };
    pub const RISE_HIDDEN: Variant = Variant {
        opacity: 0.0,
        y: 50.0,
        scale: 1.0,
    };
    pub const PANEL_HIDDEN: Variant = Variant {
        opacity: 0.0,
        y: 30.0,
        scale: 1.0,
    };
    pub const POP_HIDDEN: Variant = Variant {
        opacity: 0.0,
        y: 0.0,
        scale: 0.5,
    };
    pub const CARD_HIDDEN: Variant = Variant {
        opacity: 0.0,
        y: 0.0,
        scale: 0.9,
    };

    pub fn style(&self) -> String {
        format!(
            "opacity: {}; transform: translateY({}px) scale({});",
            self.opacity, self.y, self.scale
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance from target under which the spring may come to rest.
    pub rest_delta: f64,
    /// Speed under which the spring may come to rest.
    pub rest_speed: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 30.0,
            mass: 1.0,
            rest_delta: 0.01,
            rest_speed: 0.01,
        }
    }
}

impl SpringConfig {
    pub fn critical_damping(&self) -> f64 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    /// True when the spring cannot oscillate around its target.
    pub fn is_overdamped(&self) -> bool {
        self.damping >= self.critical_damping()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpringState {
    pub value: f64,
    pub velocity: f64,
}

/// One semi-implicit Euler step of a damped spring pulling `state` to `target`.
pub fn smooth_to_target(
    state: SpringState,
    target: f64,
    config: &SpringConfig,
    dt: f64,
) -> SpringState {
    let mass = if config.mass > 0.0 { config.mass } else { 1.0 };
    let force = config.stiffness * (target - state.value) - config.damping * state.velocity;
    let velocity = state.velocity + force / mass * dt;
    SpringState {
        value: state.value + velocity * dt,
        velocity,
    }
}

#[derive(Debug, Clone)]
pub struct Spring {
    config: SpringConfig,
    state: SpringState,
}

impl Spring {
    pub fn new(config: SpringConfig, value: f64) -> Self {
        Self {
            config,
            state: SpringState {
                value,
                velocity: 0.0,
            },
        }
    }

    pub fn value(&self) -> f64 {
        self.state.value
    }

    /// Jumps straight to `value` with no motion.
    pub fn set(&mut self, value: f64) {
        self.state = SpringState {
            value,
            velocity: 0.0,
        };
    }

    /// Moves the spring `elapsed` seconds toward `target`, sub-stepping long
    /// frames so a dropped frame cannot destabilise the integrator.
    pub fn advance(&mut self, target: f64, elapsed: f64) -> f64 {
        if !elapsed.is_finite() || elapsed <= 0.0 {
            return self.state.value;
        }
        // a backgrounded tab can hand us seconds at once
        let mut remaining = elapsed.min(1.0);
        while remaining > 0.0 {
            let dt = remaining.min(MAX_SPRING_STEP);
            self.state = smooth_to_target(self.state, target, &self.config, dt);
            remaining -= dt;
        }
        if self.is_settled(target) {
            self.set(target);
        }
        self.state.value
    }

    pub fn is_settled(&self, target: f64) -> bool {
        (target - self.state.value).abs() <= self.config.rest_delta
            && self.state.velocity.abs() <= self.config.rest_speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    #[test]
    fn test_ease_endpoints() {
        for ease in [
            Ease::Linear,
            Ease::EaseIn,
            Ease::EaseOut,
            Ease::EaseInOut,
            Ease::CubicBezier(0.25, 0.1, 0.25, 1.0),
        ] {
            assert_eq!(ease.apply(0.0), 0.0);
            assert_eq!(ease.apply(1.0), 1.0);
            assert_eq!(ease.apply(-3.0), 0.0);
            assert_eq!(ease.apply(7.0), 1.0);
        }
    }

    #[test]
    fn test_ease_monotonic() {
        for ease in [Ease::EaseIn, Ease::EaseOut, Ease::EaseInOut] {
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = ease.apply(i as f64 / 100.0);
                assert!(v + EPS >= prev, "{ease:?} dipped at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn test_ease_shapes() {
        assert!(Ease::EaseOut.apply(0.5) > 0.5);
        assert!(Ease::EaseIn.apply(0.5) < 0.5);
        assert!((Ease::EaseInOut.apply(0.5) - 0.5).abs() < 1e-4);
        assert!((Ease::Linear.apply(0.3) - 0.3).abs() < EPS);
    }

    #[test]
    fn test_ease_css() {
        assert_eq!(Ease::EaseOut.css(), "ease-out");
        assert_eq!(
            Ease::CubicBezier(0.1, 0.2, 0.3, 0.4).css(),
            "cubic-bezier(0.1, 0.2, 0.3, 0.4)"
        );
    }

    #[test]
    fn test_transition_stagger_and_css() {
        let t = Transition::ITEM.staggered(3, 0.1);
        assert!((t.delay - 0.3).abs() < EPS);
        assert_eq!(
            Transition::new(0.5, 0.2, Ease::Linear).css(&["opacity", "transform"]),
            "opacity 0.5s linear 0.2s, transform 0.5s linear 0.2s"
        );
        assert!((stagger_delay(2, 0.1, 0.1) - 0.3).abs() < EPS);
    }

    #[test]
    fn test_interpolate_clamps() {
        let tween = Tween::new(0.0, -150.0, Ease::Linear);
        assert_eq!(interpolate(0.0, &tween), 0.0);
        assert_eq!(interpolate(0.5, &tween), -75.0);
        assert_eq!(interpolate(1.0, &tween), -150.0);
        assert_eq!(interpolate(2.0, &tween), -150.0);
        assert_eq!(interpolate(-1.0, &tween), 0.0);
    }

    #[test]
    fn test_variant_style() {
        assert_eq!(
            Variant::POP_HIDDEN.style(),
            "opacity: 0; transform: translateY(0px) scale(0.5);"
        );
        assert_eq!(
            Variant::ITEM_HIDDEN.style(),
            "opacity: 0; transform: translateY(20px) scale(1);"
        );
    }

    #[test]
    fn test_default_spring_is_overdamped() {
        let config = SpringConfig::default();
        assert_eq!(config.critical_damping(), 20.0);
        assert!(config.is_overdamped());
    }

    #[test]
    fn test_spring_single_step() {
        let config = SpringConfig {
            stiffness: 10.0,
            damping: 0.0,
            mass: 1.0,
            ..SpringConfig::default()
        };
        let next = smooth_to_target(SpringState::default(), 1.0, &config, 0.1);
        assert!((next.velocity - 1.0).abs() < EPS);
        assert!((next.value - 0.1).abs() < EPS);
    }

    #[test]
    fn test_spring_converges_monotonically() {
        let config = SpringConfig::default();
        let target = 100.0;
        let mut state = SpringState::default();
        let mut prev_gap = target;
        let mut settled_at = None;
        for step in 0..1000 {
            state = smooth_to_target(state, target, &config, 1.0 / 60.0);
            let gap = target - state.value;
            assert!(gap >= 0.0, "overshot at step {step}");
            assert!(gap <= prev_gap + EPS, "moved away at step {step}");
            prev_gap = gap;
            if settled_at.is_none() && gap.abs() < 0.01 && state.velocity.abs() < 0.01 {
                settled_at = Some(step);
            }
        }
        let settled_at = settled_at.expect("spring should settle");
        assert!(settled_at < 400);
    }

    #[test]
    fn test_spring_critical_damping_no_overshoot() {
        let stiff = SpringConfig {
            stiffness: 170.0,
            ..SpringConfig::default()
        };
        let config = SpringConfig {
            damping: stiff.critical_damping(),
            ..stiff
        };
        assert!(config.is_overdamped());
        // 26 sits just under critical for this stiffness
        assert!(!SpringConfig { damping: 26.0, ..stiff }.is_overdamped());
        let mut spring = Spring::new(config, 0.0);
        for _ in 0..600 {
            let v = spring.advance(-150.0, 1.0 / 60.0);
            assert!(v >= -150.0 - EPS);
        }
        assert_eq!(spring.value(), -150.0);
        assert!(spring.is_settled(-150.0));
    }

    #[test]
    fn test_spring_substeps_long_frames() {
        let config = SpringConfig {
            stiffness: 300.0,
            damping: 40.0,
            ..SpringConfig::default()
        };
        let mut spring = Spring::new(config, 0.0);
        for _ in 0..200 {
            let v = spring.advance(100.0, 0.05);
            assert!(v.is_finite());
            assert!(v <= 100.0 + EPS);
        }
        assert_eq!(spring.value(), 100.0);
    }

    #[test]
    fn test_spring_ignores_bad_elapsed() {
        let mut spring = Spring::new(SpringConfig::default(), 5.0);
        assert_eq!(spring.advance(10.0, 0.0), 5.0);
        assert_eq!(spring.advance(10.0, f64::NAN), 5.0);
        assert_eq!(spring.advance(10.0, -1.0), 5.0);
    }
}
