// File: crates/chart-core/src/animation.rs
// Summary: Frame-stepped reveal of bars and line segments, driven by a host frame scheduler.
// Notes:
// - Controllers never schedule themselves. The host (or `start`) calls `next_frame`
//   once per tick; dropping a controller mid-flight cancels it.

use std::thread;
use std::time::Duration;

use tracing::{debug, trace};

use crate::color::Color;
use crate::geometry::{BarDescriptor, LinePoint};
use crate::render::{Renderer, Stroke};
use crate::types::{Point, LINE_ANIMATION_STEPS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameState {
    /// More frames are needed.
    Pending,
    Done,
}

pub trait Animation {
    /// Draw one incremental frame. Returns `Done` once the final geometry is on the surface;
    /// further calls draw nothing.
    fn next_frame(&mut self, renderer: &mut dyn Renderer) -> FrameState;
    fn is_done(&self) -> bool;
    fn frames_drawn(&self) -> usize;
}

/// Host frame pacing. `wait_for_frame` blocks until the next frame slot and
/// returns `false` when the host wants the animation stopped.
pub trait FrameScheduler {
    fn wait_for_frame(&mut self) -> bool;
}

/// Back-to-back frames; useful headless.
#[derive(Clone, Copy, Debug, Default)]
pub struct Immediate;

impl FrameScheduler for Immediate {
    fn wait_for_frame(&mut self) -> bool { true }
}

/// Sleeps a fixed interval between frames.
#[derive(Clone, Copy, Debug)]
pub struct FixedInterval(pub Duration);

impl FixedInterval {
    pub fn fps(fps: u32) -> Self {
        Self(Duration::from_secs_f64(1.0 / fps.max(1) as f64))
    }
}

impl Default for FixedInterval {
    fn default() -> Self { Self::fps(60) }
}

impl FrameScheduler for FixedInterval {
    fn wait_for_frame(&mut self) -> bool {
        thread::sleep(self.0);
        true
    }
}

/// Grants `n` more frames, then cancels.
#[derive(Clone, Copy, Debug)]
pub struct FrameBudget(pub usize);

impl FrameScheduler for FrameBudget {
    fn wait_for_frame(&mut self) -> bool {
        if self.0 == 0 { return false; }
        self.0 -= 1;
        true
    }
}

/// Draw the first frame now, then one frame per scheduler tick until the
/// animation finishes or the scheduler cancels. Returns frames drawn by this call.
pub fn start<A: Animation + ?Sized, S: FrameScheduler + ?Sized>(
    animation: &mut A,
    renderer: &mut dyn Renderer,
    scheduler: &mut S,
) -> usize {
    let before = animation.frames_drawn();
    let mut state = animation.next_frame(renderer);
    while state == FrameState::Pending {
        if !scheduler.wait_for_frame() {
            debug!(frames = animation.frames_drawn(), "animation cancelled by scheduler");
            break;
        }
        state = animation.next_frame(renderer);
    }
    animation.frames_drawn() - before
}

#[derive(Clone, Copy, Debug)]
struct GrowingBar {
    bar: BarDescriptor,
    velocity: f64,
    current: f64,
    done: bool,
}

/// Grows every bar from the baseline to its final height in equal steps.
pub struct BarAnimation {
    bars: Vec<GrowingBar>,
    border_width: f64,
    frames: usize,
}

impl BarAnimation {
    pub fn new(bars: &[BarDescriptor], border_width: f64) -> Self {
        let bars = bars
            .iter()
            .map(|b| GrowingBar { bar: *b, velocity: b.height_velocity(), current: 0.0, done: false })
            .collect();
        Self { bars, border_width, frames: 0 }
    }

    /// Animated heights, in bar order.
    pub fn current_heights(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.current).collect()
    }
}

impl Animation for BarAnimation {
    fn next_frame(&mut self, renderer: &mut dyn Renderer) -> FrameState {
        if self.is_done() {
            return FrameState::Done;
        }
        for g in self.bars.iter_mut().filter(|g| !g.done) {
            g.current += g.velocity;
            // Same sign as the target, so magnitudes compare in the direction of travel.
            if g.current.abs() >= g.bar.height.abs() {
                g.current = g.bar.height;
                g.done = true;
            }
            let rect = g.bar.rect_with_height(g.current);
            let stroke = Stroke::new(g.bar.border, self.border_width);
            renderer.clear_rect(rect);
            renderer.draw_rect(rect, Some(g.bar.fill), Some(&stroke));
        }
        self.frames += 1;
        if self.is_done() {
            debug!(frames = self.frames, "bar animation done");
            FrameState::Done
        } else {
            FrameState::Pending
        }
    }

    fn is_done(&self) -> bool {
        self.bars.iter().all(|g| g.done)
    }

    fn frames_drawn(&self) -> usize { self.frames }
}

/// Draws the line left to right: a cursor travels from the baseline origin
/// to each point in turn, leaving a stroke and a marker at every point.
pub struct LineAnimation {
    points: Vec<LinePoint>,
    cursor: Point,
    index: usize,
    segment_steps: usize,
    stroke: Stroke,
    marker_color: Color,
    marker_radius: f64,
    frames: usize,
}

impl LineAnimation {
    pub fn new(points: &[LinePoint], origin: Point, stroke: Stroke, marker_color: Color, marker_radius: f64) -> Self {
        Self {
            points: points.to_vec(),
            cursor: origin,
            index: 0,
            segment_steps: 0,
            stroke,
            marker_color,
            marker_radius,
            frames: 0,
        }
    }

    pub fn cursor(&self) -> Point { self.cursor }

    /// Index of the point the cursor is heading to; equals the point count when finished.
    pub fn index(&self) -> usize { self.index }

    fn arrived(&self, target: &LinePoint) -> bool {
        let (cy, ty) = (round3(self.cursor.y), round3(target.y));
        if target.y_velocity < 0.0 {
            cy <= ty
        } else if target.y_velocity > 0.0 {
            cy >= ty
        } else {
            round3(self.cursor.x) >= round3(target.x)
        }
    }
}

impl Animation for LineAnimation {
    fn next_frame(&mut self, renderer: &mut dyn Renderer) -> FrameState {
        let Some(target) = self.points.get(self.index).copied() else {
            return FrameState::Done;
        };
        let from = self.cursor;
        self.cursor.x += target.x_velocity;
        self.cursor.y += target.y_velocity;
        self.segment_steps += 1;

        if self.arrived(&target) || self.segment_steps >= LINE_ANIMATION_STEPS {
            self.cursor = target.position();
            renderer.draw_line(from, self.cursor, &self.stroke);
            renderer.fill_circle(self.cursor, self.marker_radius, self.marker_color);
            trace!(index = self.index, steps = self.segment_steps, "line point reached");
            self.index += 1;
            self.segment_steps = 0;
        } else {
            renderer.draw_line(from, self.cursor, &self.stroke);
        }
        self.frames += 1;

        if self.is_done() {
            debug!(frames = self.frames, "line animation finished");
            FrameState::Done
        } else {
            FrameState::Pending
        }
    }

    fn is_done(&self) -> bool {
        self.index >= self.points.len()
    }

    fn frames_drawn(&self) -> usize { self.frames }
}

#[inline]
fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::CommandRecorder;
    use crate::types::BAR_ANIMATION_STEPS;

    fn bar(height: f64) -> BarDescriptor {
        BarDescriptor { x: 0.0, y: 100.0, width: 10.0, height, fill: Color::GREY, border: Color::BLACK }
    }

    #[test]
    fn zero_height_bar_finishes_on_first_frame() {
        let mut anim = BarAnimation::new(&[bar(0.0)], 1.0);
        let mut rec = CommandRecorder::new();
        assert_eq!(anim.next_frame(&mut rec), FrameState::Done);
        assert_eq!(anim.frames_drawn(), 1);
        assert_eq!(anim.next_frame(&mut rec), FrameState::Done);
        assert_eq!(anim.frames_drawn(), 1);
    }

    #[test]
    fn bar_growth_is_bounded() {
        let mut anim = BarAnimation::new(&[bar(-300.0), bar(-0.3)], 1.0);
        let mut rec = CommandRecorder::new();
        let frames = start(&mut anim, &mut rec, &mut Immediate);
        assert!(frames <= BAR_ANIMATION_STEPS + 1);
        assert_eq!(anim.current_heights(), vec![-300.0, -0.3]);
    }

    #[test]
    fn budget_cancels_midway() {
        let mut anim = BarAnimation::new(&[bar(-300.0)], 1.0);
        let mut rec = CommandRecorder::new();
        let frames = start(&mut anim, &mut rec, &mut FrameBudget(9));
        assert_eq!(frames, 10);
        assert!(!anim.is_done());
    }

    #[test]
    fn flat_segment_terminates_on_x() {
        let p = LinePoint { x: 50.0, y: 100.0, x_velocity: 1.0, y_velocity: 0.0 };
        let mut anim = LineAnimation::new(&[p], Point::new(0.0, 100.0), Stroke::new(Color::GREY, 1.0), Color::GREY, 2.0);
        let mut rec = CommandRecorder::new();
        let frames = start(&mut anim, &mut rec, &mut Immediate);
        assert_eq!(frames, LINE_ANIMATION_STEPS);
        assert_eq!(anim.cursor(), Point::new(50.0, 100.0));
        assert_eq!(rec.circles().count(), 1);
    }

    #[test]
    fn fixed_interval_waits_between_frames() {
        assert_eq!(FixedInterval::fps(50).0, Duration::from_millis(20));
        assert_eq!(FixedInterval::default().0, FixedInterval::fps(60).0);

        let p = LinePoint { x: 1.0, y: 100.0, x_velocity: 0.25, y_velocity: 0.0 };
        let mut anim = LineAnimation::new(&[p], Point::new(0.0, 100.0), Stroke::new(Color::GREY, 1.0), Color::GREY, 2.0);
        let mut rec = CommandRecorder::new();
        let began = std::time::Instant::now();
        let frames = start(&mut anim, &mut rec, &mut FixedInterval(Duration::from_millis(2)));
        assert_eq!(frames, 4);
        // three waits after the synchronous first frame
        assert!(began.elapsed() >= Duration::from_millis(6));
        assert!(anim.is_done());
    }

    #[test]
    fn round3_keeps_three_decimals() {
        assert_eq!(round3(1.23449), 1.234);
        assert_eq!(round3(-0.0004), 0.0);
    }
}
