//! Animation state for the decorative parts of the site
//!
//! Nothing here touches a clock or a random source. Callers pass elapsed
//! time and random samples in, so every animation is reproducible in tests.

/// Easing curves for counters and transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInExpo,
    #[default]
    EaseOutExpo,
    EaseInOutExpo,
}

impl Easing {
    /// Map linear progress `t` in [0, 1] onto the curve
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInQuad => t * t,
            Easing::EaseOutQuad => t * (2.0 - t),
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::EaseInCubic => t * t * t,
            Easing::EaseOutCubic => {
                let u = t - 1.0;
                u * u * u + 1.0
            }
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
                }
            }
            Easing::EaseInExpo => {
                if t == 0.0 {
                    0.0
                } else {
                    2f64.powf(10.0 * (t - 1.0))
                }
            }
            Easing::EaseOutExpo => {
                if t == 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
            Easing::EaseInOutExpo => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let t2 = t * 2.0;
                if t2 < 1.0 {
                    0.5 * 2f64.powf(10.0 * (t2 - 1.0))
                } else {
                    0.5 * (2.0 - 2f64.powf(-10.0 * (t2 - 1.0)))
                }
            }
        }
    }
}

/// Count from one value to another over a fixed duration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothCounter {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
    pub easing: Easing,
    pub decimals: u32,
}

impl SmoothCounter {
    pub fn new(to: f64) -> Self {
        Self {
            from: 0.0,
            to,
            duration_ms: 2000.0,
            easing: Easing::default(),
            decimals: 0,
        }
    }

    pub fn starting_at(mut self, from: f64) -> Self {
        self.from = from;
        self
    }

    pub fn with_duration(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    /// Displayed value `elapsed_ms` after the animation started
    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        let progress = if self.duration_ms <= 0.0 {
            1.0
        } else {
            (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
        };
        let raw = self.from + (self.to - self.from) * self.easing.apply(progress);
        round_to(raw, self.decimals)
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Delay between typed characters
pub const TYPE_INTERVAL_MS: u32 = 100;
/// Pause on a fully typed phrase before moving on
pub const PHRASE_PAUSE_MS: u32 = 3000;

/// Simulated typing that cycles through a list of phrases
#[derive(Debug, Clone, PartialEq)]
pub struct Typewriter {
    phrases: Vec<String>,
    index: usize,
    typed: usize,
    /// Time left before the next [`Typewriter::tick`] when driven by [`Typewriter::advance`]
    wait_ms: u32,
}

impl Typewriter {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            index: 0,
            typed: 0,
            wait_ms: TYPE_INTERVAL_MS,
        }
    }

    fn phrase(&self) -> &str {
        self.phrases.get(self.index).map(String::as_str).unwrap_or("")
    }

    /// Text typed so far for the current phrase
    pub fn text(&self) -> String {
        self.phrase().chars().take(self.typed).collect()
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    /// Still typing the current phrase (drives the caret)
    pub fn is_typing(&self) -> bool {
        self.typed < self.phrase().chars().count()
    }

    /// Advance one step and return the delay before the next one
    pub fn tick(&mut self) -> u32 {
        if self.phrases.is_empty() {
            return PHRASE_PAUSE_MS;
        }
        if self.is_typing() {
            self.typed += 1;
            if self.is_typing() {
                TYPE_INTERVAL_MS
            } else {
                PHRASE_PAUSE_MS
            }
        } else {
            self.typed = 0;
            self.index = (self.index + 1) % self.phrases.len();
            TYPE_INTERVAL_MS
        }
    }

    /// Let `elapsed_ms` pass, ticking whenever the pending delay runs out.
    ///
    /// Driven from a fixed-period timer so the delays returned by
    /// [`Typewriter::tick`] need no rescheduling. Returns whether the text changed.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        let before = (self.index, self.typed);
        let mut budget = elapsed_ms;
        while budget >= self.wait_ms {
            budget -= self.wait_ms;
            self.wait_ms = self.tick().max(1);
        }
        self.wait_ms -= budget;
        before != (self.index, self.typed)
    }
}

/// Pick `up` or `down` from a random sample in [0, 1)
fn coin(sample: f64, up: f64, down: f64) -> f64 {
    if sample > 0.5 { up } else { down }
}

/// Headline numbers in the hero's live widget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroMetrics {
    pub satisfaction: u32,
    pub response_time_secs: u32,
    pub resolution: u32,
    pub active_chats: u32,
}

impl Default for HeroMetrics {
    fn default() -> Self {
        Self {
            satisfaction: 96,
            response_time_secs: 34,
            resolution: 92,
            active_chats: 142,
        }
    }
}

impl HeroMetrics {
    pub const TICK_MS: u32 = 3000;

    /// Random-walk every metric one step; takes four samples in [0, 1)
    pub fn step(self, samples: [f64; 4]) -> Self {
        let walk = |value: u32, sample: f64, step: f64, min: f64, max: f64| -> u32 {
            (value as f64 + coin(sample, step, -step)).clamp(min, max) as u32
        };
        Self {
            satisfaction: walk(self.satisfaction, samples[0], 1.0, 0.0, 98.0),
            response_time_secs: walk(self.response_time_secs, samples[1], 2.0, 20.0, 60.0),
            resolution: walk(self.resolution, samples[2], 1.0, 0.0, 98.0),
            active_chats: walk(self.active_chats, samples[3], 5.0, 100.0, 200.0),
        }
    }
}

/// KPI tiles in the analytics dashboard
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardKpis {
    pub success_rate: f64,
    pub avg_response_secs: f64,
    pub active_conversations: u32,
    pub satisfaction_score: f64,
    pub total_users: u64,
    pub resolved_issues: u64,
}

impl Default for DashboardKpis {
    fn default() -> Self {
        Self {
            success_rate: 94.2,
            avg_response_secs: 1.8,
            active_conversations: 428,
            satisfaction_score: 4.7,
            total_users: 12847,
            resolved_issues: 5932,
        }
    }
}

impl DashboardKpis {
    pub const TICK_MS: u32 = 5000;

    /// Random-walk the KPIs; takes six samples in [0, 1)
    pub fn step(self, samples: [f64; 6]) -> Self {
        let conversations = self.active_conversations as i64 + (samples[2] * 5.0).floor() as i64 - 2;
        Self {
            success_rate: round_to(self.success_rate + (samples[0] * 0.4 - 0.2), 1),
            avg_response_secs: round_to(
                (self.avg_response_secs + (samples[1] * 0.2 - 0.1)).max(0.1),
                1,
            ),
            active_conversations: conversations.max(0) as u32,
            satisfaction_score: round_to(
                (self.satisfaction_score + (samples[3] * 0.1 - 0.05)).min(5.0),
                1,
            ),
            total_users: self.total_users + (samples[4] * 10.0).floor() as u64,
            resolved_issues: self.resolved_issues + (samples[5] * 10.0).floor() as u64,
        }
    }
}

/// Translation in pixels for a hover-parallax layer.
///
/// `pointer` and `origin` are client coordinates, `size` the container's
/// width and height.
pub fn parallax_offset(
    pointer: (f64, f64),
    origin: (f64, f64),
    size: (f64, f64),
    intensity: f64,
    speed: f64,
) -> (f64, f64) {
    let (width, height) = size;
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let nx = (pointer.0 - origin.0) / width - 0.5;
    let ny = (pointer.1 - origin.1) / height - 0.5;
    (nx * intensity * speed, ny * intensity * speed)
}

/// Default hover-parallax intensity in pixels
pub const PARALLAX_INTENSITY: f64 = 10.0;

/// Vertical shift for a scroll-parallax layer.
///
/// `section_top` is the section's offset from the top of the document.
/// Returns `None` while the section is outside the viewport, where the layer
/// keeps its last position.
pub fn scroll_parallax_shift(
    scroll_y: f64,
    section_top: f64,
    section_height: f64,
    viewport_height: f64,
    speed: f64,
) -> Option<f64> {
    let in_view =
        scroll_y + viewport_height > section_top && scroll_y < section_top + section_height;
    in_view.then(|| (scroll_y - section_top) * speed)
}

/// Scroll-driven chrome: auto-hiding navbar and scroll-to-top button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderVisibility {
    last_y: f64,
    pub header_visible: bool,
    pub show_scroll_top: bool,
}

impl HeaderVisibility {
    pub const HIDE_AFTER_PX: f64 = 100.0;
    pub const SCROLL_TOP_AFTER_PX: f64 = 500.0;

    pub fn new() -> Self {
        Self {
            last_y: 0.0,
            header_visible: true,
            show_scroll_top: false,
        }
    }

    pub fn on_scroll(&mut self, y: f64) {
        self.header_visible = !(y > self.last_y && y > Self::HIDE_AFTER_PX);
        self.show_scroll_top = y > Self::SCROLL_TOP_AFTER_PX;
        self.last_y = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_EASINGS: [Easing; 10] = [
        Easing::Linear,
        Easing::EaseInQuad,
        Easing::EaseOutQuad,
        Easing::EaseInOutQuad,
        Easing::EaseInCubic,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
        Easing::EaseInExpo,
        Easing::EaseOutExpo,
        Easing::EaseInOutExpo,
    ];

    #[test]
    fn test_easings_hit_endpoints() {
        for easing in ALL_EASINGS {
            assert!(easing.apply(0.0).abs() < 1e-3, "{:?}", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-3, "{:?}", easing);
        }
    }

    #[test]
    fn test_easing_clamps_input() {
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
        assert_eq!(Easing::Linear.apply(3.0), 1.0);
    }

    #[test]
    fn test_ease_out_is_ahead_of_linear() {
        assert!(Easing::EaseOutQuad.apply(0.3) > 0.3);
        assert!(Easing::EaseInQuad.apply(0.3) < 0.3);
    }

    #[test]
    fn test_counter_reaches_target() {
        let counter = SmoothCounter::new(12847.0);
        assert_eq!(counter.value_at(0.0), 0.0);
        assert_eq!(counter.value_at(2000.0), 12847.0);
        assert_eq!(counter.value_at(5000.0), 12847.0);
        assert!(counter.is_finished(2000.0));
        assert!(!counter.is_finished(1999.0));
    }

    #[test]
    fn test_counter_rounds_to_decimals() {
        let counter = SmoothCounter::new(4.7)
            .with_easing(Easing::Linear)
            .with_decimals(1)
            .with_duration(1000.0);
        assert_eq!(counter.value_at(500.0), 2.4);
    }

    #[test]
    fn test_counter_zero_duration_jumps() {
        let counter = SmoothCounter::new(10.0).starting_at(5.0).with_duration(0.0);
        assert_eq!(counter.value_at(0.0), 10.0);
    }

    #[test]
    fn test_typewriter_types_then_pauses() {
        let mut tw = Typewriter::new(["hi", "yo"]);
        assert_eq!(tw.text(), "");
        assert!(tw.is_typing());

        assert_eq!(tw.tick(), TYPE_INTERVAL_MS);
        assert_eq!(tw.text(), "h");
        assert_eq!(tw.tick(), PHRASE_PAUSE_MS);
        assert_eq!(tw.text(), "hi");
        assert!(!tw.is_typing());

        assert_eq!(tw.tick(), TYPE_INTERVAL_MS);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.phrase_index(), 1);
    }

    #[test]
    fn test_typewriter_wraps_around() {
        let mut tw = Typewriter::new(["a"]);
        tw.tick();
        tw.tick();
        assert_eq!(tw.phrase_index(), 0);
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn test_typewriter_handles_multibyte() {
        let mut tw = Typewriter::new(["héllo"]);
        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "hé");
    }

    #[test]
    fn test_typewriter_advance_honours_pause() {
        let mut tw = Typewriter::new(["ab"]);
        assert!(tw.advance(TYPE_INTERVAL_MS));
        assert!(tw.advance(TYPE_INTERVAL_MS));
        assert_eq!(tw.text(), "ab");

        // Holds the full phrase for the pause
        for _ in 0..(PHRASE_PAUSE_MS / TYPE_INTERVAL_MS - 1) {
            assert!(!tw.advance(TYPE_INTERVAL_MS));
        }
        assert!(tw.advance(TYPE_INTERVAL_MS));
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn test_typewriter_advance_partial_steps() {
        let mut tw = Typewriter::new(["abc"]);
        assert!(!tw.advance(60));
        assert!(tw.advance(60));
        assert_eq!(tw.text(), "a");
    }

    #[test]
    fn test_typewriter_without_phrases() {
        let mut tw = Typewriter::new(Vec::<String>::new());
        assert_eq!(tw.tick(), PHRASE_PAUSE_MS);
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn test_hero_metrics_respect_bounds() {
        let mut metrics = HeroMetrics::default();
        for _ in 0..100 {
            metrics = metrics.step([0.9, 0.9, 0.9, 0.9]);
        }
        assert_eq!(metrics.satisfaction, 98);
        assert_eq!(metrics.response_time_secs, 60);
        assert_eq!(metrics.resolution, 98);
        assert_eq!(metrics.active_chats, 200);

        for _ in 0..100 {
            metrics = metrics.step([0.1, 0.1, 0.1, 0.1]);
        }
        assert_eq!(metrics.response_time_secs, 20);
        assert_eq!(metrics.active_chats, 100);
    }

    #[test]
    fn test_dashboard_kpis_step() {
        let kpis = DashboardKpis::default().step([0.5, 0.5, 0.4, 0.5, 0.0, 0.99]);
        assert_eq!(kpis.success_rate, 94.2);
        assert_eq!(kpis.avg_response_secs, 1.8);
        assert_eq!(kpis.active_conversations, 428);
        assert_eq!(kpis.satisfaction_score, 4.7);
        assert_eq!(kpis.total_users, 12847);
        assert_eq!(kpis.resolved_issues, 5941);
    }

    #[test]
    fn test_dashboard_satisfaction_capped() {
        let mut kpis = DashboardKpis::default();
        for _ in 0..200 {
            kpis = kpis.step([0.5, 0.5, 0.5, 0.99, 0.0, 0.0]);
        }
        assert!(kpis.satisfaction_score <= 5.0);
    }

    #[test]
    fn test_parallax_centered_pointer_is_still() {
        let offset = parallax_offset((150.0, 100.0), (100.0, 50.0), (100.0, 100.0), 10.0, 1.0);
        assert_eq!(offset, (0.0, 0.0));
    }

    #[test]
    fn test_parallax_corner_scales_with_speed() {
        let offset = parallax_offset((100.0, 50.0), (100.0, 50.0), (100.0, 100.0), 10.0, 2.0);
        assert_eq!(offset, (-10.0, -10.0));
    }

    #[test]
    fn test_scroll_parallax_shift_in_view() {
        // Section starts at 1000px, 600px tall, 800px viewport
        assert_eq!(scroll_parallax_shift(1000.0, 1000.0, 600.0, 800.0, 0.5), Some(0.0));
        assert_eq!(scroll_parallax_shift(1200.0, 1000.0, 600.0, 800.0, 0.5), Some(100.0));
        // Entering from below shifts the other way
        assert_eq!(scroll_parallax_shift(400.0, 1000.0, 600.0, 800.0, -0.02), Some(12.0));
    }

    #[test]
    fn test_scroll_parallax_shift_out_of_view() {
        assert_eq!(scroll_parallax_shift(0.0, 1000.0, 600.0, 800.0, 0.5), None);
        assert_eq!(scroll_parallax_shift(200.0, 1000.0, 600.0, 800.0, 0.5), None);
        assert_eq!(scroll_parallax_shift(1600.0, 1000.0, 600.0, 800.0, 0.5), None);
    }

    #[test]
    fn test_parallax_zero_size() {
        assert_eq!(parallax_offset((1.0, 1.0), (0.0, 0.0), (0.0, 10.0), 10.0, 1.0), (0.0, 0.0));
    }

    #[test]
    fn test_header_hides_on_scroll_down() {
        let mut header = HeaderVisibility::new();
        header.on_scroll(50.0);
        assert!(header.header_visible);
        header.on_scroll(150.0);
        assert!(!header.header_visible);
        header.on_scroll(120.0);
        assert!(header.header_visible);
    }

    #[test]
    fn test_scroll_top_button_threshold() {
        let mut header = HeaderVisibility::new();
        header.on_scroll(500.0);
        assert!(!header.show_scroll_top);
        header.on_scroll(501.0);
        assert!(header.show_scroll_top);
    }
}
