//! Property-based tests for the controller state machine.
//!
//! 1. Any event sequence leaves at most one panel open, and the session
//!    agrees with the host about whether it is open.
//! 2. Every open panel lies inside the working area.
//! 3. The selection always points into the loaded index.

mod common;

use common::{EDITOR, FakeHost, msg};
use gtip::{Controller, HostEvent, Location, Point, Severity, ViewId};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Step {
    Command(&'static str),
    MoveCursor(u32),
    Event(HostEvent),
    QuitPanel,
    PressPanel,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => prop::sample::select(vec!["next", "prev", "display", "dnext", "dprev", "bogus"])
            .prop_map(Step::Command),
        2 => (0u32..24).prop_map(Step::MoveCursor),
        1 => Just(Step::Event(HostEvent::Saved)),
        1 => Just(Step::Event(HostEvent::MessagesChanged)),
        1 => Just(Step::Event(HostEvent::Scrolled)),
        1 => Just(Step::Event(HostEvent::Escape)),
        1 => Just(Step::Event(HostEvent::Split)),
        1 => (0u16..80, 0u16..24).prop_map(|(x, y)| {
            Step::Event(HostEvent::MousePress { view: EDITOR, at: Point::new(x, y) })
        }),
        1 => Just(Step::QuitPanel),
        1 => Just(Step::PressPanel),
    ]
}

fn messages() -> impl Strategy<Value = Vec<gtip::RawMessage>> {
    prop::collection::vec(
        (
            0u32..24,
            0u32..80,
            prop::sample::select(vec![Severity::Info, Severity::Warn, Severity::Error]),
            "[a-z]{1,12}( [a-z]{1,12}){0,8}",
        ),
        0..12,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .map(|(line, column, severity, text)| msg(line, column, severity, "lint", &text))
            .collect()
    })
}

fn apply(controller: &mut Controller, host: &mut FakeHost, step: Step) {
    match step {
        Step::Command(arg) => {
            controller.handle(host, HostEvent::command(&[arg])).unwrap();
        }
        Step::MoveCursor(line) => host.cursor = Location::new(line, 0),
        Step::Event(event) => controller.handle(host, event).unwrap(),
        Step::QuitPanel => {
            if let Some(view) = controller.session().panel() {
                controller
                    .handle(host, HostEvent::PanelQuitRequested { view })
                    .unwrap();
            }
        }
        Step::PressPanel => {
            let view = controller.session().panel().unwrap_or(ViewId(999));
            controller
                .handle(host, HostEvent::MousePress { view, at: Point::new(0, 0) })
                .unwrap();
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 1–3. State machine invariants
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn invariants_hold_after_every_event(
        messages in messages(),
        steps in prop::collection::vec(step(), 1..40),
    ) {
        let mut host = FakeHost::with_messages(messages);
        let mut controller = Controller::default();
        let area = host.metrics.working_area();

        for step in steps {
            apply(&mut controller, &mut host, step);

            prop_assert!(host.panels.len() <= 1);
            prop_assert_eq!(controller.is_panel_open(), host.panels.len() == 1);

            if let Some(panel) = host.panels.first() {
                prop_assert!(panel.rect.right() <= area.width);
                prop_assert!(panel.rect.bottom() <= area.height);
                prop_assert_eq!(Some(panel.rect), controller.session().geometry());
            }

            if let Some(current) = controller.current_index() {
                let len = controller.index().map_or(0, |i| i.len());
                prop_assert!(current < len);
            }
        }
    }
}
