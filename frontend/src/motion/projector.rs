//! Maps a section's entered flag onto declarative style parameters.
//!
//! Everything here is pure: the same `(entered, table)` pair always gives
//! the same `StyleParams`, so components can call `project` on every render.

/// One named animation state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variant {
    pub opacity: f64,
    /// Horizontal offset in px.
    pub x: f64,
    /// Vertical offset in px.
    pub y: f64,
    pub scale: f64,
}

impl Variant {
    /// Fully visible, untransformed.
    pub const REST: Variant = Variant {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };
}

/// Timing in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: f64,
    pub delay: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantTable {
    pub hidden: Variant,
    pub visible: Variant,
    pub transition: Transition,
}

const DEFAULT_DURATION: f64 = 0.6;

impl VariantTable {
    fn from_hidden(hidden: Variant) -> Self {
        Self {
            hidden,
            visible: Variant::REST,
            transition: Transition {
                duration: DEFAULT_DURATION,
                delay: 0.0,
            },
        }
    }

    pub fn fade() -> Self {
        Self::from_hidden(Variant {
            opacity: 0.0,
            ..Variant::REST
        })
    }

    pub fn fade_up(offset: f64) -> Self {
        Self::from_hidden(Variant {
            opacity: 0.0,
            y: offset,
            ..Variant::REST
        })
    }

    /// Negative offsets slide in from the left, positive from the right.
    pub fn slide_x(offset: f64) -> Self {
        Self::from_hidden(Variant {
            opacity: 0.0,
            x: offset,
            ..Variant::REST
        })
    }

    pub fn pop(from_scale: f64) -> Self {
        Self::from_hidden(Variant {
            opacity: 0.0,
            scale: from_scale,
            ..Variant::REST
        })
    }

    /// Scales up from nothing without fading.
    pub fn grow() -> Self {
        Self::from_hidden(Variant {
            scale: 0.0,
            ..Variant::REST
        })
    }

    pub fn duration(mut self, seconds: f64) -> Self {
        self.transition.duration = seconds;
        self
    }

    pub fn delay(mut self, seconds: f64) -> Self {
        self.transition.delay = seconds;
        self
    }
}

/// Resolved style for one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleParams {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub duration: f64,
    pub delay: f64,
}

impl StyleParams {
    pub fn to_css(&self) -> String {
        let duration = fmt_num(self.duration);
        let delay = fmt_num(self.delay);
        format!(
            "opacity: {}; transform: translate({}px, {}px) scale({}); transition: opacity {}s ease-out {}s, transform {}s ease-out {}s;",
            fmt_num(self.opacity),
            fmt_num(self.x),
            fmt_num(self.y),
            fmt_num(self.scale),
            duration,
            delay,
            duration,
            delay,
        )
    }
}

/// Rounds to milliseconds and strips trailing zeros so stagger arithmetic
/// like `0.1 * 3` renders as `0.3`.
fn fmt_num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let text = format!("{:.3}", rounded);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

pub fn project(entered: bool, table: &VariantTable) -> StyleParams {
    let variant = if entered { table.visible } else { table.hidden };
    StyleParams {
        opacity: variant.opacity,
        x: variant.x,
        y: variant.y,
        scale: variant.scale,
        duration: table.transition.duration,
        delay: table.transition.delay,
    }
}

/// Container-level timing: child `i` starts `base_delay + i * increment`
/// seconds after the container is entered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    pub base_delay: f64,
    pub increment: f64,
}

impl Stagger {
    pub const fn new(base_delay: f64, increment: f64) -> Self {
        Self {
            base_delay,
            increment,
        }
    }

    pub fn delay_for(&self, index: usize) -> f64 {
        self.base_delay + index as f64 * self.increment
    }

    pub fn project_child(&self, entered: bool, index: usize, table: &VariantTable) -> StyleParams {
        project(entered, &table.delay(self.delay_for(index)))
    }

    /// Css for child `index`, the form the section components consume.
    pub fn child_css(&self, entered: bool, index: usize, table: &VariantTable) -> String {
        self.project_child(entered, index, table).to_css()
    }

    /// For mount-time keyframe entrances that need no visibility trigger.
    pub fn animation_delay(&self, index: usize) -> String {
        format!("animation-delay: {}s;", fmt_num(self.delay_for(index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_is_referentially_transparent() {
        let tables = [
            VariantTable::fade(),
            VariantTable::fade_up(30.0).duration(0.8),
            VariantTable::slide_x(-50.0).delay(0.2),
            VariantTable::pop(0.8),
            VariantTable::grow(),
        ];
        for table in tables.iter() {
            for entered in [false, true] {
                let first = project(entered, table);
                for _ in 0..5 {
                    assert_eq!(project(entered, table), first);
                    assert_eq!(project(entered, table).to_css(), first.to_css());
                }
            }
        }
    }

    #[test]
    fn hidden_and_visible_values() {
        let table = VariantTable::fade_up(30.0);
        let hidden = project(false, &table);
        assert_eq!(hidden.opacity, 0.0);
        assert_eq!(hidden.y, 30.0);
        assert_eq!(hidden.scale, 1.0);

        let visible = project(true, &table);
        assert_eq!(visible.opacity, 1.0);
        assert_eq!(visible.y, 0.0);
        assert_eq!(visible.x, 0.0);

        let grow = project(false, &VariantTable::grow());
        assert_eq!(grow.opacity, 1.0);
        assert_eq!(grow.scale, 0.0);
    }

    #[test]
    fn stagger_preserves_index_order() {
        for (base, increment) in [(0.0, 0.1), (0.5, 0.2), (1.0, 0.15), (0.3, 0.1)] {
            let stagger = Stagger::new(base, increment);
            let table = VariantTable::fade_up(30.0);
            let mut previous = f64::NEG_INFINITY;
            for i in 0..12 {
                let expected = base + i as f64 * increment;
                assert_eq!(stagger.delay_for(i), expected);
                let child = stagger.project_child(true, i, &table);
                assert_eq!(child.delay, expected);
                assert!(child.delay > previous);
                previous = child.delay;
            }
        }
    }

    #[test]
    fn css_output() {
        let css = Stagger::new(0.0, 0.1).child_css(true, 3, &VariantTable::fade_up(30.0));
        assert_eq!(
            css,
            "opacity: 1; transform: translate(0px, 0px) scale(1); transition: opacity 0.6s ease-out 0.3s, transform 0.6s ease-out 0.3s;"
        );

        let hidden = project(false, &VariantTable::slide_x(-50.0).duration(0.8)).to_css();
        assert!(hidden.starts_with("opacity: 0; transform: translate(-50px, 0px) scale(1);"));
        assert!(hidden.contains("opacity 0.8s ease-out 0s"));
    }

    #[test]
    fn keyframe_delay() {
        let nav = Stagger::new(0.3, 0.1);
        assert_eq!(nav.animation_delay(0), "animation-delay: 0.3s;");
        assert_eq!(nav.animation_delay(4), "animation-delay: 0.7s;");
    }

    #[test]
    fn number_formatting() {
        assert_eq!(fmt_num(0.0), "0");
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(0.30000000000000004), "0.3");
        assert_eq!(fmt_num(1.25), "1.25");
        assert_eq!(fmt_num(-50.0), "-50");
    }
}
