//! Hook ordering for compositions.
//!
//! Show: main control first, then sub-controls in declared order.
//! Hide: sub-controls in reverse declared order, main control last.
//! State is captured before any hide hook runs.

use std::collections::BTreeMap;
use std::rc::Rc;

use super::composition::UsedControl;
use super::pending::Navigator;
use super::tasks::TaskPool;
use crate::models::ViewData;
use crate::traits::{HideContext, ShowContext};

/// Borrow the main control immutably next to another control mutably.
fn split_main(controls: &mut [UsedControl], main: usize, target: usize) -> (&UsedControl, &mut UsedControl) {
    if target < main {
        let (left, right) = controls.split_at_mut(main);
        (&right[0], &mut left[target])
    } else {
        let (left, right) = controls.split_at_mut(target);
        (&left[main], &mut right[0])
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ShowMode {
    pub data_only: bool,
    pub single_sub_view_change: bool,
}

pub(crate) fn fire_show(
    controls: &mut [UsedControl],
    targets: &[usize],
    main: usize,
    view_data: &mut ViewData,
    tasks: &mut TaskPool,
    navigator: &Navigator,
    mode: ShowMode,
) {
    if targets.contains(&main) {
        let used = &mut controls[main];
        let handler = Rc::clone(&used.handler);
        let mut ctx = ShowContext::new(
            view_data,
            None,
            used.instance.id,
            &handler.id,
            mode.data_only,
            mode.single_sub_view_change,
            tasks,
            navigator,
        );
        used.instance.control.on_show(&mut ctx);
    }

    let mut subs: Vec<usize> = targets.iter().copied().filter(|&i| i != main).collect();
    subs.sort_unstable();
    for index in subs {
        let (main_control, used) = split_main(controls, main, index);
        let handler = Rc::clone(&used.handler);
        let mut ctx = ShowContext::new(
            view_data,
            Some(main_control.instance.control.as_ref()),
            used.instance.id,
            &handler.id,
            mode.data_only,
            mode.single_sub_view_change,
            tasks,
            navigator,
        );
        used.instance.control.on_show(&mut ctx);
    }
}

pub(crate) fn fire_hide(controls: &mut [UsedControl], targets: &[usize], main: usize, view_data: &mut ViewData) {
    let mut subs: Vec<usize> = targets.iter().copied().filter(|&i| i != main).collect();
    subs.sort_unstable_by(|a, b| b.cmp(a));
    for index in subs {
        let (main_control, used) = split_main(controls, main, index);
        let handler = Rc::clone(&used.handler);
        let mut ctx = HideContext::new(
            view_data,
            Some(main_control.instance.control.as_ref()),
            used.instance.id,
            &handler.id,
        );
        used.instance.control.on_hide(&mut ctx);
    }

    if targets.contains(&main) {
        let used = &mut controls[main];
        let handler = Rc::clone(&used.handler);
        let mut ctx = HideContext::new(view_data, None, used.instance.id, &handler.id);
        used.instance.control.on_hide(&mut ctx);
    }
}

/// Copy layout state of `controls` into the descriptor. Splitter sizes also
/// become the session-wide default for their slot.
pub(crate) fn capture_state(
    controls: &[UsedControl],
    view_data: &mut ViewData,
    splitter_defaults: &mut BTreeMap<String, f32>,
) -> usize {
    let mut captured = 0;
    for used in controls {
        if let Some(state) = used.control().store_state() {
            view_data.controls_state.insert(used.slot().to_string(), state);
            captured += 1;
        }
        if let Some(size) = used.splitter {
            view_data.splitters.insert(used.slot().to_string(), size);
            splitter_defaults.insert(used.slot().to_string(), size);
        }
    }
    captured
}

/// Apply stored state to `targets`. Slots without stored state are skipped.
pub(crate) fn restore_controls(controls: &mut [UsedControl], targets: &[usize], view_data: &ViewData) -> usize {
    let mut restored = 0;
    for &index in targets {
        let used = &mut controls[index];
        if let Some(state) = view_data.controls_state.get(used.slot()) {
            used.instance.control.restore_state(state);
            restored += 1;
        }
    }
    restored
}
