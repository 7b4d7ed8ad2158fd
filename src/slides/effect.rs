use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::config::ParseEffectError;
use super::Direction;

// Shuffle deck background layer geometry
const SHUFFLE_LAYER_Y: f64 = -2.9041;
const SHUFFLE_LAYER_Y_STEP: f64 = 5.0;
const SHUFFLE_LAYER_SCALE: f64 = 0.9419;
const SHUFFLE_LAYER_SCALE_STEP: f64 = 0.1;
const SHUFFLE_LAYER_OPACITY: f64 = 0.8064;
const SHUFFLE_LAYER_OPACITY_STEP: f64 = 0.3333;
const SHUFFLE_TOP: i32 = 5;

const STACK_TOP: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionEffect {
    #[default]
    Shuffle,
    Stack,
    Fade,
    Slide,
    Scale,
    None,
}

impl TransitionEffect {
    pub fn all() -> Vec<TransitionEffect> {
        vec![
            Self::Shuffle,
            Self::Stack,
            Self::Fade,
            Self::Slide,
            Self::Scale,
            Self::None,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shuffle => "shuffle",
            Self::Stack => "stack",
            Self::Fade => "fade",
            Self::Slide => "slide",
            Self::Scale => "scale",
            Self::None => "none",
        }
    }

    /// Compute how the slide `relative` positions away from the current one
    /// should be drawn. `motion` is `None` while the deck is at rest.
    pub fn transform(
        &self,
        relative: isize,
        motion: Option<Motion>,
        stack_depth: usize,
    ) -> RenderTransform {
        if relative.unsigned_abs() > stack_depth.max(1) {
            return RenderTransform::hidden();
        }
        match self {
            Self::Shuffle => shuffle(relative, motion, stack_depth),
            Self::Stack => stack(relative, motion, stack_depth),
            Self::Fade => fade(relative, motion),
            Self::Slide => slide(relative, motion),
            Self::Scale => scale(relative, motion),
            Self::None => none(relative),
        }
    }
}

impl fmt::Display for TransitionEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransitionEffect {
    type Err = ParseEffectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "shuffle" => Ok(Self::Shuffle),
            "stack" => Ok(Self::Stack),
            "fade" => Ok(Self::Fade),
            "slide" => Ok(Self::Slide),
            "scale" => Ok(Self::Scale),
            "none" => Ok(Self::None),
            _ => Err(ParseEffectError(s.to_string())),
        }
    }
}

/// An in-flight transition: how far along it is and which way it goes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub progress: f64,
    pub direction: Direction,
}

impl Motion {
    /// Whether `relative` is the neighbour being revealed by this motion
    fn reveals(&self, relative: isize) -> bool {
        match self.direction {
            Direction::Forward => relative == 1,
            Direction::Backward => relative == -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderTransform {
    /// vertical offset in percent of the deck height
    pub offset_y: f64,
    pub scale: f64,
    pub opacity: f64,
    pub stack_order: i32,
    pub visible: bool,
}

impl RenderTransform {
    pub fn identity(stack_order: i32) -> Self {
        Self {
            offset_y: 0.0,
            scale: 1.0,
            opacity: 1.0,
            stack_order,
            visible: true,
        }
    }

    pub fn hidden() -> Self {
        Self {
            offset_y: 0.0,
            scale: 1.0,
            opacity: 0.0,
            stack_order: 0,
            visible: false,
        }
    }

    fn shown(offset_y: f64, scale: f64, opacity: f64, stack_order: i32) -> Self {
        Self {
            offset_y,
            scale,
            opacity: opacity.clamp(0.0, 1.0),
            stack_order,
            visible: true,
        }
    }

    pub fn is_identity(&self) -> bool {
        self.visible && self.offset_y == 0.0 && self.scale == 1.0 && self.opacity == 1.0
    }

    /// Inline style for the slide wrapper element
    pub fn to_style(&self, duration_ms: u32) -> String {
        format!(
            "transform: translateY({:.4}%) scale({:.4}); opacity: {:.4}; z-index: {}; transition: transform {duration_ms}ms ease-out, opacity {duration_ms}ms ease-out;",
            self.offset_y, self.scale, self.opacity, self.stack_order
        )
    }
}

fn shuffle_layer(depth: usize, stack_depth: usize) -> RenderTransform {
    if depth == 0 || depth > stack_depth {
        return RenderTransform::hidden();
    }
    let step = (depth - 1) as f64;
    let opacity = SHUFFLE_LAYER_OPACITY - SHUFFLE_LAYER_OPACITY_STEP * step;
    if opacity <= 0.0 {
        return RenderTransform::hidden();
    }
    RenderTransform::shown(
        SHUFFLE_LAYER_Y - SHUFFLE_LAYER_Y_STEP * step,
        SHUFFLE_LAYER_SCALE - SHUFFLE_LAYER_SCALE_STEP * step,
        opacity,
        SHUFFLE_TOP - depth as i32,
    )
}

fn shuffle(relative: isize, motion: Option<Motion>, stack_depth: usize) -> RenderTransform {
    let Some(Motion {
        progress: p,
        direction,
    }) = motion
    else {
        return match relative {
            0 => RenderTransform::identity(SHUFFLE_TOP),
            d if d < 0 => shuffle_layer(d.unsigned_abs(), stack_depth),
            _ => RenderTransform::hidden(),
        };
    };

    match (direction, relative) {
        (Direction::Forward, 0) => RenderTransform::shown(
            p * -SHUFFLE_LAYER_Y,
            1.0 - p * (1.0 - SHUFFLE_LAYER_SCALE),
            1.0 - p * (1.0 - SHUFFLE_LAYER_OPACITY),
            SHUFFLE_TOP,
        ),
        (Direction::Forward, 1) => {
            RenderTransform::shown(0.0, 0.94 + p * 0.06, p, SHUFFLE_TOP + 1)
        }
        (Direction::Backward, 0) => RenderTransform::shown(
            p * SHUFFLE_LAYER_Y,
            1.0 - p * (1.0 - SHUFFLE_LAYER_SCALE),
            1.0 - p * (1.0 - SHUFFLE_LAYER_OPACITY),
            SHUFFLE_TOP,
        ),
        (Direction::Backward, -1) => {
            let from = shuffle_layer(1, stack_depth.max(1));
            RenderTransform::shown(
                from.offset_y * (1.0 - p),
                from.scale + p * (1.0 - from.scale),
                from.opacity + p * (1.0 - from.opacity),
                SHUFFLE_TOP + 1,
            )
        }
        (_, d) if d < 0 => shuffle_layer(d.unsigned_abs(), stack_depth),
        _ => RenderTransform::hidden(),
    }
}

/// Level `n` (1 = directly under the top card) of the stacking deck
fn stack_level(n: usize, stack_depth: usize) -> RenderTransform {
    if n == 0 || n > stack_depth {
        return RenderTransform::hidden();
    }
    let step = (n - 1) as f64;
    let opacity = 1.0 - 0.3 * step;
    if opacity <= 0.0 {
        return RenderTransform::hidden();
    }
    RenderTransform::shown(2.0 * step, 1.0 - 0.05 * step, opacity, STACK_TOP - n as i32)
}

fn stack(relative: isize, motion: Option<Motion>, stack_depth: usize) -> RenderTransform {
    let Some(Motion {
        progress: p,
        direction,
    }) = motion
    else {
        return match relative {
            0 => RenderTransform::identity(STACK_TOP),
            d if d < 0 => stack_level(d.unsigned_abs(), stack_depth),
            _ => RenderTransform::hidden(),
        };
    };

    match (direction, relative) {
        (Direction::Forward, 0) => {
            RenderTransform::shown(0.0, 1.0 - p * 0.05, 1.0, STACK_TOP - 1)
        }
        (Direction::Forward, 1) => RenderTransform::shown(100.0 - p * 100.0, 1.0, p, STACK_TOP),
        // everything underneath sinks one level to make room
        (Direction::Forward, d) if d < 0 => {
            let mut level = stack_level(d.unsigned_abs() + 1, stack_depth);
            level.stack_order -= 1;
            level
        }
        (Direction::Backward, 0) => RenderTransform::shown(p * 100.0, 1.0, 1.0, STACK_TOP - 1),
        (Direction::Backward, -1) => {
            RenderTransform::shown(-100.0 + p * 100.0, 1.0, p, STACK_TOP)
        }
        (Direction::Backward, d) if d < -1 => stack_level(d.unsigned_abs() - 1, stack_depth),
        _ => RenderTransform::hidden(),
    }
}

fn fade(relative: isize, motion: Option<Motion>) -> RenderTransform {
    match (relative, motion) {
        (0, None) => RenderTransform::identity(5),
        (0, Some(m)) => RenderTransform::shown(0.0, 1.0, 1.0 - m.progress, 5),
        (d, Some(m)) if m.reveals(d) => RenderTransform::shown(0.0, 1.0, m.progress, 6),
        _ => RenderTransform::hidden(),
    }
}

fn slide(relative: isize, motion: Option<Motion>) -> RenderTransform {
    match (relative, motion) {
        (0, None) => RenderTransform::identity(5),
        (0, Some(m)) => {
            let y = match m.direction {
                Direction::Forward => -m.progress * 100.0,
                Direction::Backward => m.progress * 100.0,
            };
            RenderTransform::shown(y, 1.0, 1.0, 5)
        }
        (d, Some(m)) if m.reveals(d) => {
            let y = match m.direction {
                Direction::Forward => 100.0 - m.progress * 100.0,
                Direction::Backward => -100.0 + m.progress * 100.0,
            };
            RenderTransform::shown(y, 1.0, 1.0, 6)
        }
        _ => RenderTransform::hidden(),
    }
}

fn scale(relative: isize, motion: Option<Motion>) -> RenderTransform {
    match (relative, motion) {
        (0, None) => RenderTransform::identity(5),
        (0, Some(m)) => {
            RenderTransform::shown(0.0, 1.0 - m.progress * 0.2, 1.0 - m.progress, 5)
        }
        (d, Some(m)) if m.reveals(d) => {
            RenderTransform::shown(0.0, 0.8 + m.progress * 0.2, m.progress, 6)
        }
        _ => RenderTransform::hidden(),
    }
}

fn none(relative: isize) -> RenderTransform {
    if relative == 0 {
        RenderTransform::identity(5)
    } else {
        RenderTransform::hidden()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn forward(progress: f64) -> Option<Motion> {
        Some(Motion {
            progress,
            direction: Direction::Forward,
        })
    }

    fn backward(progress: f64) -> Option<Motion> {
        Some(Motion {
            progress,
            direction: Direction::Backward,
        })
    }

    #[test]
    fn test_current_slide_is_identity_at_rest() {
        for effect in TransitionEffect::all() {
            let t = effect.transform(0, None, 3);
            assert!(t.is_identity(), "{effect} should rest at identity");
        }
    }

    #[test]
    fn test_future_slides_hidden_at_rest() {
        for effect in TransitionEffect::all() {
            assert!(!effect.transform(1, None, 3).visible, "{effect}");
            assert!(!effect.transform(2, None, 3).visible, "{effect}");
        }
    }

    #[test]
    fn test_shuffle_background_layers() {
        let effect = TransitionEffect::Shuffle;
        let first = effect.transform(-1, None, 3);
        assert!(first.visible);
        assert!(approx(first.offset_y, -2.9041));
        assert!(approx(first.scale, 0.9419));
        assert!(approx(first.opacity, 0.8064));
        assert_eq!(first.stack_order, 4);

        let third = effect.transform(-3, None, 3);
        assert!(third.visible);
        assert!(approx(third.offset_y, -12.9041));
        assert!(approx(third.scale, 0.7419));
        assert!((third.opacity - 0.1397).abs() < 1e-3);
        assert_eq!(third.stack_order, 2);

        // beyond the configured depth nothing is drawn
        assert!(!effect.transform(-4, None, 3).visible);
        assert!(!effect.transform(-3, None, 2).visible);
    }

    #[test]
    fn test_shuffle_deep_layers_fade_out() {
        // fourth layer would have negative opacity
        assert!(!TransitionEffect::Shuffle.transform(-4, None, 6).visible);
    }

    #[test]
    fn test_shuffle_forward_motion() {
        let effect = TransitionEffect::Shuffle;
        let current = effect.transform(0, forward(0.5), 3);
        assert!(approx(current.offset_y, 0.5 * 2.9041));
        assert!(approx(current.scale, 1.0 - 0.5 * 0.0581));
        assert!(approx(current.opacity, 1.0 - 0.5 * 0.1936));

        let next = effect.transform(1, forward(0.6), 3);
        assert!(next.visible);
        assert!(approx(next.opacity, 0.6));
        assert!(approx(next.scale, 0.94 + 0.6 * 0.06));
        assert!(next.stack_order > current.stack_order);

        // background keeps its slot
        assert_eq!(
            effect.transform(-2, forward(0.5), 3),
            effect.transform(-2, None, 3)
        );
    }

    #[test]
    fn test_shuffle_backward_motion_lands_on_identity() {
        let effect = TransitionEffect::Shuffle;
        let start = effect.transform(-1, backward(0.0), 3);
        assert_eq!(start.offset_y, effect.transform(-1, None, 3).offset_y);

        let end = effect.transform(-1, backward(1.0), 3);
        assert!(approx(end.offset_y, 0.0));
        assert!(approx(end.scale, 1.0));
        assert!(approx(end.opacity, 1.0));

        let current = effect.transform(0, backward(1.0), 3);
        assert!(approx(current.offset_y, -2.9041));
        assert!(!effect.transform(1, backward(0.5), 3).visible);
    }

    #[test]
    fn test_stack_levels() {
        let effect = TransitionEffect::Stack;
        let under = effect.transform(-2, None, 3);
        assert!(approx(under.offset_y, 2.0));
        assert!(approx(under.scale, 0.95));
        assert!(approx(under.opacity, 0.7));
        assert_eq!(under.stack_order, 8);

        let incoming = effect.transform(1, forward(0.25), 3);
        assert!(approx(incoming.offset_y, 75.0));
        assert!(approx(incoming.opacity, 0.25));

        // the deepest layer drops out while the next card comes in
        assert!(!effect.transform(-3, forward(0.5), 3).visible);
        let above = effect.transform(-1, backward(0.5), 3);
        assert!(approx(above.offset_y, -50.0));
    }

    #[test]
    fn test_fade_cross_fades_neighbour() {
        let effect = TransitionEffect::Fade;
        assert!(approx(effect.transform(0, forward(0.3), 3).opacity, 0.7));
        assert!(approx(effect.transform(1, forward(0.3), 3).opacity, 0.3));
        assert!(!effect.transform(-1, forward(0.3), 3).visible);
        assert!(approx(effect.transform(-1, backward(0.4), 3).opacity, 0.4));
    }

    #[test]
    fn test_slide_moves_together() {
        let effect = TransitionEffect::Slide;
        let current = effect.transform(0, forward(0.4), 3);
        let next = effect.transform(1, forward(0.4), 3);
        assert!(approx(next.offset_y - current.offset_y, 100.0));

        let current = effect.transform(0, backward(0.4), 3);
        let prev = effect.transform(-1, backward(0.4), 3);
        assert!(approx(current.offset_y - prev.offset_y, 100.0));
    }

    #[test]
    fn test_scale_and_none() {
        let grow = TransitionEffect::Scale.transform(-1, backward(0.5), 3);
        assert!(approx(grow.scale, 0.9));
        assert!(approx(grow.opacity, 0.5));

        assert!(TransitionEffect::None.transform(0, forward(0.9), 3).is_identity());
        assert!(!TransitionEffect::None.transform(1, forward(0.9), 3).visible);
    }

    #[test]
    fn test_parse_effect() {
        assert_eq!("fade".parse::<TransitionEffect>().unwrap(), TransitionEffect::Fade);
        assert_eq!(" Shuffle ".parse::<TransitionEffect>().unwrap(), TransitionEffect::Shuffle);
        assert_eq!("NONE".parse::<TransitionEffect>().unwrap(), TransitionEffect::None);
        let err = "wobble".parse::<TransitionEffect>().unwrap_err();
        assert!(err.to_string().contains("wobble"));
    }

    #[test]
    fn test_style_string() {
        let style = RenderTransform::identity(5).to_style(300);
        assert!(style.contains("translateY(0.0000%)"));
        assert!(style.contains("z-index: 5"));
        assert!(style.contains("300ms"));
    }
}
