//! Time-based bracelet sequences: flash-randomize and grow.
//!
//! Everything here runs on the single UI-bound thread of control. Methods
//! take `&self` and suspend only at their timed waits, so a plain
//! `Cell`/`RefCell` is all the synchronization the guard flags and the
//! bracelet buffer need — there is exactly one mutator.

use std::cell::{Cell, RefCell};
use std::sync::mpsc::{Receiver, Sender, channel};

use tokio::time::{Duration, sleep};

use crate::config::constants::{DEFAULT_NUM_BEADS, MAX_BEADS, PLACEHOLDER_COLOR, animation};
use crate::engine::apportion::build_bracelet;
use crate::models::{Bead, Bracelet, ElementColorMap, ElementRatio};

pub struct AnimationController {
    /// THE FRONT BUFFER. The UI snapshots this every frame via `bracelet()`.
    bracelet: RefCell<Bracelet>,
    num_beads: Cell<usize>,
    speed: Cell<f64>,

    // Guard flags, one per sequence kind. A start request while the flag is
    // set is a silent no-op; there is no external abort once running.
    flash_running: Cell<bool>,
    grow_running: Cell<bool>,

    // Every visual update is also published here; the UI (and the tests)
    // drain it with poll_frames().
    frame_tx: Sender<Bracelet>,
    frame_rx: Receiver<Bracelet>,
}

impl AnimationController {
    pub fn new() -> Self {
        let (frame_tx, frame_rx) = channel();
        let controller = Self {
            bracelet: RefCell::new(Vec::new()),
            num_beads: Cell::new(DEFAULT_NUM_BEADS),
            speed: Cell::new(1.0),
            flash_running: Cell::new(false),
            grow_running: Cell::new(false),
            frame_tx,
            frame_rx,
        };
        // Show placeholder beads immediately.
        controller.regenerate();
        controller
    }

    // --- Accessors ---

    pub fn bracelet(&self) -> Bracelet {
        self.bracelet.borrow().clone()
    }

    pub fn num_beads(&self) -> usize {
        self.num_beads.get()
    }

    pub fn speed(&self) -> f64 {
        self.speed.get()
    }

    pub fn is_flashing(&self) -> bool {
        self.flash_running.get()
    }

    pub fn is_growing(&self) -> bool {
        self.grow_running.get()
    }

    /// Drain every frame published since the last call.
    pub fn poll_frames(&self) -> Vec<Bracelet> {
        let mut frames = Vec::new();
        while let Ok(frame) = self.frame_rx.try_recv() {
            frames.push(frame);
        }
        frames
    }

    // --- Manual editing ---

    pub fn set_speed(&self, speed: f64) {
        self.speed
            .set(speed.clamp(animation::SPEED_MIN, animation::SPEED_MAX));
    }

    /// Changing the count rebuilds the bracelet from scratch (placeholder
    /// fill); it is never patched incrementally.
    pub fn set_num_beads(&self, n: usize) {
        self.num_beads.set(n.clamp(1, MAX_BEADS));
        self.regenerate();
    }

    /// Reset to `num_beads` placeholder-colored beads.
    pub fn regenerate(&self) {
        let beads: Bracelet = (0..self.num_beads.get())
            .map(|_| Bead::new(PLACEHOLDER_COLOR))
            .collect();
        self.apply(beads);
    }

    /// One-shot re-apportionment at the current bead count.
    pub fn randomize(&self, goal: &ElementRatio, colors: &ElementColorMap) {
        let beads = build_bracelet(self.num_beads.get(), goal, colors);
        self.apply(beads);
    }

    /// Recolor a single bead. Out-of-range indices are ignored.
    pub fn set_color(&self, index: usize, color_hex: &str) {
        {
            let mut bracelet = self.bracelet.borrow_mut();
            match bracelet.get_mut(index) {
                Some(bead) => bead.color_hex = color_hex.to_string(),
                None => return,
            }
        }
        self.emit();
    }

    /// Swap two beads in place. Out-of-range indices are ignored.
    pub fn swap_beads(&self, i: usize, j: usize) {
        {
            let mut bracelet = self.bracelet.borrow_mut();
            if i >= bracelet.len() || j >= bracelet.len() {
                return;
            }
            bracelet.swap(i, j);
        }
        self.emit();
    }

    // --- Animated sequences ---

    /// Flash-randomize: 25 timed re-apportionments at the current count.
    /// The running flag flips back to idle only after the final visual
    /// update has been applied.
    pub async fn flash_randomize(&self, goal: &ElementRatio, colors: &ElementColorMap) {
        if self.flash_running.replace(true) {
            log::debug!("Flash requested while already running; ignored");
            return;
        }

        for i in 0..animation::FLASH_ITERATIONS {
            // Speed is re-read every step so mid-run tweaks take effect.
            let step = Duration::from_millis((animation::FLASH_STEP_MS / self.speed.get()) as u64);
            sleep(step).await;

            let beads = build_bracelet(self.num_beads.get(), goal, colors);
            self.apply(beads);

            if i + 1 == animation::FLASH_ITERATIONS {
                self.flash_running.set(false);
            }
        }
    }

    /// Grow: clear, then re-apportion at every length 1..=MAX_BEADS with a
    /// fixed pause between steps, so the whole run takes
    /// GROW_TOTAL_MS / speed regardless of MAX_BEADS.
    pub async fn grow(&self, goal: &ElementRatio, colors: &ElementColorMap) {
        if self.grow_running.replace(true) {
            log::debug!("Grow requested while already running; ignored");
            return;
        }

        self.apply(Vec::new());

        let pause = Duration::from_millis(
            (animation::GROW_TOTAL_MS / (MAX_BEADS - 1) as f64 / self.speed.get()) as u64,
        );
        for len in 1..=MAX_BEADS {
            // Each length is a full re-apportionment, not an extension of
            // the previous frame.
            let beads = build_bracelet(len, goal, colors);
            self.apply(beads);
            if len < MAX_BEADS {
                sleep(pause).await;
            }
        }

        self.grow_running.set(false);
    }

    // --- Internal ---

    fn apply(&self, beads: Bracelet) {
        *self.bracelet.borrow_mut() = beads;
        self.emit();
    }

    fn emit(&self) {
        // Receiver lives on self, so this send cannot fail.
        let _ = self.frame_tx.send(self.bracelet.borrow().clone());
    }
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    fn palette() -> ElementColorMap {
        ElementColorMap {
            metal: "#FFFFFF".into(),
            wood: "#00A550".into(),
            water: "#0000FF".into(),
            fire: "#FF0000".into(),
            earth: "#8B4513".into(),
        }
    }

    fn even_goal() -> ElementRatio {
        ElementRatio::new(20.0, 20.0, 20.0, 20.0, 20.0)
    }

    #[test]
    fn starts_with_placeholder_bracelet() {
        let controller = AnimationController::new();
        let bracelet = controller.bracelet();
        assert_eq!(bracelet.len(), DEFAULT_NUM_BEADS);
        assert!(bracelet.iter().all(|b| b.color_hex == PLACEHOLDER_COLOR));
    }

    #[test]
    fn bead_count_and_speed_are_clamped() {
        let controller = AnimationController::new();
        controller.set_num_beads(0);
        assert_eq!(controller.num_beads(), 1);
        controller.set_num_beads(99);
        assert_eq!(controller.num_beads(), MAX_BEADS);
        assert_eq!(controller.bracelet().len(), MAX_BEADS);

        controller.set_speed(0.1);
        assert_eq!(controller.speed(), animation::SPEED_MIN);
        controller.set_speed(10.0);
        assert_eq!(controller.speed(), animation::SPEED_MAX);
    }

    #[test]
    fn manual_edits_ignore_out_of_range_indices() {
        let controller = AnimationController::new();
        controller.set_color(3, "#123456");
        assert_eq!(controller.bracelet()[3].color_hex, "#123456");
        controller.set_color(500, "#FF00FF");
        controller.swap_beads(0, 3);
        assert_eq!(controller.bracelet()[0].color_hex, "#123456");
        controller.swap_beads(0, 500); // no-op
        assert_eq!(controller.bracelet()[0].color_hex, "#123456");
    }

    #[tokio::test(start_paused = true)]
    async fn flash_runs_25_steps_and_returns_to_idle() {
        let controller = AnimationController::new();
        controller.poll_frames(); // discard the construction frame

        let started = Instant::now();
        controller.flash_randomize(&even_goal(), &palette()).await;
        let elapsed = started.elapsed();

        assert!(!controller.is_flashing());
        let frames = controller.poll_frames();
        assert_eq!(frames.len(), animation::FLASH_ITERATIONS);
        assert!(frames.iter().all(|f| f.len() == DEFAULT_NUM_BEADS));
        // 25 steps x 200ms at speed 1.0, exact under the paused clock.
        assert_eq!(elapsed, Duration::from_millis(25 * 200));
    }

    #[tokio::test(start_paused = true)]
    async fn reentrant_flash_start_is_a_no_op() {
        let controller = AnimationController::new();
        controller.poll_frames();

        // join! polls the first future to its sleep, then the second sees
        // the guard flag set and bails immediately.
        let (goal, colors) = (even_goal(), palette());
        tokio::join!(
            controller.flash_randomize(&goal, &colors),
            controller.flash_randomize(&goal, &colors),
        );

        assert_eq!(controller.poll_frames().len(), animation::FLASH_ITERATIONS);
        assert!(!controller.is_flashing());
    }

    #[tokio::test(start_paused = true)]
    async fn grow_clears_then_climbs_to_max_in_five_seconds() {
        let controller = AnimationController::new();
        controller.poll_frames();

        let started = Instant::now();
        controller.grow(&even_goal(), &palette()).await;
        let elapsed = started.elapsed();

        assert!(!controller.is_growing());
        let frames = controller.poll_frames();
        // The clear frame plus one frame per length.
        assert_eq!(frames.len(), 1 + MAX_BEADS);
        assert!(frames[0].is_empty());
        let lengths: Vec<usize> = frames[1..].iter().map(|f| f.len()).collect();
        let expected: Vec<usize> = (1..=MAX_BEADS).collect();
        assert_eq!(lengths, expected);

        // 19 pauses of floor(5000/19) ms: just under five seconds.
        let pause_ms = (animation::GROW_TOTAL_MS / (MAX_BEADS - 1) as f64) as u64;
        assert_eq!(elapsed, Duration::from_millis(pause_ms * (MAX_BEADS as u64 - 1)));
        assert!(elapsed <= Duration::from_millis(5000));
        assert!(elapsed >= Duration::from_millis(4900));
    }

    #[tokio::test(start_paused = true)]
    async fn grow_respects_the_speed_multiplier() {
        let controller = AnimationController::new();
        controller.set_speed(2.0);
        controller.poll_frames();

        let started = Instant::now();
        controller.grow(&even_goal(), &palette()).await;
        let elapsed = started.elapsed();

        let pause_ms = (animation::GROW_TOTAL_MS / (MAX_BEADS - 1) as f64 / 2.0) as u64;
        assert_eq!(elapsed, Duration::from_millis(pause_ms * (MAX_BEADS as u64 - 1)));
    }

    #[tokio::test(start_paused = true)]
    async fn flash_and_grow_guards_are_independent() {
        let controller = AnimationController::new();
        controller.poll_frames();

        // Interleave both kinds; each runs to completion exactly once.
        let (goal, colors) = (even_goal(), palette());
        tokio::join!(
            controller.flash_randomize(&goal, &colors),
            controller.grow(&goal, &colors),
        );

        assert!(!controller.is_flashing());
        assert!(!controller.is_growing());
        let frames = controller.poll_frames();
        assert_eq!(frames.len(), animation::FLASH_ITERATIONS + 1 + MAX_BEADS);
    }
}
