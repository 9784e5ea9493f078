//! Scene variant switching: wrapping step counters, auto-advance timers,
//! enumerated variants and slider clamping.

use std::time::Duration;

use bevy::prelude::*;
use bevy_egui::egui;

/// Step index that wraps modulo `total`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepCycle {
    index: usize,
    total: usize,
}

impl StepCycle {
    pub fn new(total: usize) -> Self {
        Self {
            index: 0,
            total: total.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.total;
    }

    pub fn retreat(&mut self) {
        self.index = (self.index + self.total - 1) % self.total;
    }

    /// Jump to `index`, clamped to the last step.
    pub fn set(&mut self, index: usize) {
        self.index = index.min(self.total - 1);
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.total
    }

    /// Progress through the cycle in `[0, 1]`.
    pub fn fraction(&self) -> f32 {
        if self.total <= 1 {
            return 1.0;
        }
        self.index as f32 / (self.total - 1) as f32
    }
}

/// Fixed-period timer that advances a [`StepCycle`] once per elapsed period.
#[derive(Clone, Debug)]
pub struct AutoAdvance {
    timer: Timer,
}

impl AutoAdvance {
    pub fn every(period: Duration) -> Self {
        Self {
            timer: Timer::new(period, TimerMode::Repeating),
        }
    }

    /// Returns how many steps were taken this tick.
    pub fn tick(&mut self, delta: Duration, cycle: &mut StepCycle) -> u32 {
        self.timer.tick(delta);
        let fired = self.timer.times_finished_this_tick();
        for _ in 0..fired {
            cycle.advance();
        }
        fired
    }

    pub fn restart(&mut self) {
        self.timer.reset();
    }
}

/// Controls resources that carry a step counter the auto-advance timer drives.
pub trait SteppedControls: Resource {
    const STEP_PERIOD: Duration;

    fn cycle(&self) -> &StepCycle;
    fn cycle_mut(&mut self) -> &mut StepCycle;
    fn playing(&self) -> bool;
}

/// Advances `C`'s step counter on a fixed period while it is playing.
///
/// The controls are only touched when a period elapsed, so change detection
/// fires once per step rather than every frame.
pub fn auto_advance_system<C: SteppedControls>(
    time: Res<Time>,
    mut timer: Local<Option<AutoAdvance>>,
    mut controls: ResMut<C>,
) {
    let timer = timer.get_or_insert_with(|| AutoAdvance::every(C::STEP_PERIOD));
    if !controls.playing() {
        timer.restart();
        return;
    }
    let mut cycle = *controls.cycle();
    if timer.tick(time.delta(), &mut cycle) > 0 {
        *controls.cycle_mut() = cycle;
    }
}

/// A small closed set of pre-authored visual states.
pub trait SceneVariant: Copy + PartialEq + 'static {
    const ALL: &'static [Self];

    fn label(self) -> &'static str;
}

/// Row of selectable buttons, one per variant. Returns true when it changed.
pub fn variant_selector<V: SceneVariant>(ui: &mut egui::Ui, current: &mut V) -> bool {
    let before = *current;
    ui.horizontal_wrapped(|ui| {
        for &variant in V::ALL {
            ui.selectable_value(current, variant, variant.label());
        }
    });
    *current != before
}

/// Prev / play-pause / next row for a step cycle.
pub fn step_controls(ui: &mut egui::Ui, cycle: &mut StepCycle, playing: &mut bool) {
    ui.horizontal(|ui| {
        if ui.button("◀").clicked() {
            cycle.retreat();
            *playing = false;
        }
        let label = if *playing { "Pause" } else { "Play" };
        if ui.button(label).clicked() {
            *playing = !*playing;
        }
        if ui.button("▶").clicked() {
            cycle.advance();
            *playing = false;
        }
        ui.label(format!("Step {}/{}", cycle.index() + 1, cycle.total()));
    });
}

pub fn clamp_slider<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_advances_return_to_start() {
        let mut cycle = StepCycle::new(4);
        for _ in 0..4 {
            cycle.advance();
        }
        assert_eq!(cycle.index(), 0);
    }

    #[test]
    fn advancing_total_times_round_trips_from_any_step() {
        for total in 1..8 {
            for start in 0..total {
                let mut cycle = StepCycle::new(total);
                cycle.set(start);
                for _ in 0..total {
                    cycle.advance();
                }
                assert_eq!(cycle.index(), start);
            }
        }
    }

    #[test]
    fn retreat_wraps_and_set_clamps() {
        let mut cycle = StepCycle::new(3);
        cycle.retreat();
        assert_eq!(cycle.index(), 2);
        assert!(cycle.is_last());
        cycle.set(10);
        assert_eq!(cycle.index(), 2);
        assert_eq!(cycle.fraction(), 1.0);
    }

    #[test]
    fn zero_total_is_treated_as_one_step() {
        let mut cycle = StepCycle::new(0);
        cycle.advance();
        assert_eq!(cycle.index(), 0);
        assert_eq!(cycle.total(), 1);
    }

    #[test]
    fn auto_advance_fires_once_per_period() {
        let mut cycle = StepCycle::new(4);
        let mut auto = AutoAdvance::every(Duration::from_millis(500));
        assert_eq!(auto.tick(Duration::from_millis(300), &mut cycle), 0);
        assert_eq!(auto.tick(Duration::from_millis(300), &mut cycle), 1);
        assert_eq!(cycle.index(), 1);
        // a long frame covers several periods
        assert_eq!(auto.tick(Duration::from_millis(1_000), &mut cycle), 2);
        assert_eq!(cycle.index(), 3);
    }

    #[derive(Resource)]
    struct Demo {
        steps: StepCycle,
        playing: bool,
    }

    impl SteppedControls for Demo {
        const STEP_PERIOD: Duration = Duration::from_secs(1);

        fn cycle(&self) -> &StepCycle {
            &self.steps
        }

        fn cycle_mut(&mut self) -> &mut StepCycle {
            &mut self.steps
        }

        fn playing(&self) -> bool {
            self.playing
        }
    }

    #[test]
    fn auto_advance_system_steps_only_while_playing() {
        let mut app = App::new();
        app.init_resource::<Time>();
        app.insert_resource(Demo {
            steps: StepCycle::new(3),
            playing: true,
        });
        app.add_systems(Update, auto_advance_system::<Demo>);

        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_millis(1_200));
        app.update();
        assert_eq!(app.world().resource::<Demo>().steps.index(), 1);

        app.world_mut().resource_mut::<Demo>().playing = false;
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs(5));
        app.update();
        assert_eq!(app.world().resource::<Demo>().steps.index(), 1);
    }

    #[test]
    fn clamp_slider_bounds_values() {
        assert_eq!(clamp_slider(5, 1, 3), 3);
        assert_eq!(clamp_slider(-1.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp_slider(2, 1, 3), 2);
    }
}
