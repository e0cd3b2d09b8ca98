//! Scripted pointer sessions.
//!
//! A script is a JSON array of steps replayed against a [`SurfaceController`],
//! for example:
//!
//! ```json
//! [
//!   { "op": "tool", "tool": "square-solid" },
//!   { "op": "color", "index": 2 },
//!   { "op": "stroke", "points": [{ "x": 10, "y": 10 }, { "x": 60, "y": 40 }] },
//!   { "op": "undo" },
//!   { "op": "share" }
//! ]
//! ```
//!
//! Pointer coordinates are canvas-local unless given as a `pointer` step, which
//! carries a raw screen-space event.

use crate::input::{Point, PointerEvent, SurfaceController};
use crate::share::ShareLink;
use crate::tools::ToolKind;
use anyhow::{Context, Result, bail};
use futures::executor::block_on;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One scripted action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum Step {
    /// Select a tool
    Tool { tool: ToolKind },
    /// Select a palette entry
    Color { index: usize },
    /// Set the active tool's size
    Size { value: f64 },
    Press { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Release { x: f64, y: f64 },
    /// Press on the first point, move through the rest, release on the last
    Stroke { points: Vec<Point> },
    /// Screen-space pointer event
    Pointer(PointerEvent),
    Undo,
    Clear,
    /// Load a data URL
    Load { source: String },
    /// Record a share link of the current canvas
    Share,
}

/// What a script run produced.
#[derive(Debug, Default)]
pub struct ScriptOutcome {
    pub steps_run: usize,
    /// Links recorded by `share` steps, in order
    pub shares: Vec<ShareLink>,
}

/// Parses a script from JSON text.
pub fn parse(text: &str) -> Result<Vec<Step>> {
    serde_json::from_str(text).context("Failed to parse script")
}

/// Reads and parses a script file.
pub fn load(path: &Path) -> Result<Vec<Step>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read script file {}", path.display()))?;
    let steps = parse(&text).with_context(|| format!("Invalid script {}", path.display()))?;
    info!("Loaded {} script step(s) from {}", steps.len(), path.display());
    Ok(steps)
}

/// Replays `steps` against `controller`.
///
/// Loads started by `undo` and `load` steps are awaited before the next step,
/// so a replay never races its own background decodes.
pub fn run(controller: &mut SurfaceController, steps: &[Step]) -> Result<ScriptOutcome> {
    let mut outcome = ScriptOutcome::default();

    for (index, step) in steps.iter().enumerate() {
        debug!("Script step {index}: {step:?}");
        apply(controller, step, &mut outcome)
            .with_context(|| format!("Script step {index} ({}) failed", step_name(step)))?;
        if controller.has_pending_load() {
            block_on(controller.wait_for_pending());
        }
        outcome.steps_run += 1;
    }

    Ok(outcome)
}

fn apply(controller: &mut SurfaceController, step: &Step, outcome: &mut ScriptOutcome) -> Result<()> {
    match step {
        Step::Tool { tool } => controller.set_tool(*tool),
        Step::Color { index } => {
            controller.set_color(*index)?;
        }
        Step::Size { value } => {
            controller.set_size(*value);
        }
        Step::Press { x, y } => controller.on_pointer_press(Point::new(*x, *y)),
        Step::Move { x, y } => controller.on_pointer_motion(Point::new(*x, *y)),
        Step::Release { x, y } => controller.on_pointer_release(Point::new(*x, *y)),
        Step::Stroke { points } => {
            let (Some(first), Some(last)) = (points.first(), points.last()) else {
                bail!("stroke needs at least one point");
            };
            controller.on_pointer_press(*first);
            for point in &points[1..] {
                controller.on_pointer_motion(*point);
            }
            controller.on_pointer_release(*last);
        }
        Step::Pointer(event) => controller.handle_pointer_event(*event),
        Step::Undo => {
            if !controller.undo() {
                debug!("Undo step had nothing to undo");
            }
        }
        Step::Clear => controller.clear(),
        Step::Load { source } => controller.load_from_source(source)?,
        Step::Share => outcome.shares.push(controller.share()?),
    }
    Ok(())
}

fn step_name(step: &Step) -> &'static str {
    match step {
        Step::Tool { .. } => "tool",
        Step::Color { .. } => "color",
        Step::Size { .. } => "size",
        Step::Press { .. } => "press",
        Step::Move { .. } => "move",
        Step::Release { .. } => "release",
        Step::Stroke { .. } => "stroke",
        Step::Pointer(_) => "pointer",
        Step::Undo => "undo",
        Step::Clear => "clear",
        Step::Load { .. } => "load",
        Step::Share => "share",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::PALETTE;
    use crate::input::PointerPhase;

    #[test]
    fn parses_every_step_kind() {
        let steps = parse(
            r#"[
                {"op": "tool", "tool": "free-hand"},
                {"op": "color", "index": 4},
                {"op": "size", "value": 3.5},
                {"op": "press", "x": 1, "y": 2},
                {"op": "move", "x": 3, "y": 4},
                {"op": "release", "x": 3, "y": 4},
                {"op": "stroke", "points": [{"x": 0, "y": 0}]},
                {"op": "pointer", "phase": "press", "screen_x": 5, "screen_y": 6},
                {"op": "undo"},
                {"op": "clear"},
                {"op": "load", "source": "data:image/png;base64,AAAA"},
                {"op": "share"}
            ]"#,
        )
        .unwrap();

        assert_eq!(steps.len(), 12);
        assert_eq!(steps[0], Step::Tool { tool: ToolKind::FreeHand });
        assert_eq!(
            steps[7],
            Step::Pointer(PointerEvent::new(PointerPhase::Press, 5.0, 6.0))
        );
    }

    #[test]
    fn unknown_ops_are_rejected() {
        assert!(parse(r#"[{"op": "redo"}]"#).is_err());
        assert!(parse(r#"[{"op": "tool", "tool": "spray-can"}]"#).is_err());
    }

    #[test]
    fn run_records_shares_and_draws() {
        let mut controller = SurfaceController::new(40, 40).unwrap();
        let steps = vec![
            Step::Color { index: 2 },
            Step::Stroke {
                points: vec![Point::new(20.0, 20.0)],
            },
            Step::Share,
        ];

        let outcome = run(&mut controller, &steps).unwrap();
        assert_eq!(outcome.steps_run, 3);
        assert_eq!(outcome.shares.len(), 1);
        assert_eq!(controller.canvas_mut().pixel(20, 20), Some(PALETTE[2].rgba()));
    }

    #[test]
    fn failing_step_reports_its_index() {
        let mut controller = SurfaceController::new(10, 10).unwrap();
        let steps = vec![Step::Clear, Step::Color { index: 42 }];
        let err = run(&mut controller, &steps).unwrap_err();
        assert!(format!("{err:#}").contains("Script step 1 (color)"));
    }

    #[test]
    fn empty_stroke_is_an_error() {
        let mut controller = SurfaceController::new(10, 10).unwrap();
        assert!(run(&mut controller, &[Step::Stroke { points: vec![] }]).is_err());
    }
}
