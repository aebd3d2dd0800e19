use log::info;

use super::picking::PickResult;
use crate::math::Color;
use crate::render::SceneBinding;
use crate::scene::{ObjectHandle, ObjectRegistry};

/// Hover state driven once per frame by the pick result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverState {
    #[default]
    NoHover,
    Hovering(ObjectHandle),
}

/// Observability hooks. Called from inside the frame tick only.
pub trait InteractionObserver {
    fn hover_enter(&mut self, _handle: ObjectHandle) {}

    fn hover_exit(&mut self, _handle: ObjectHandle) {}

    fn object_removed(&mut self, _handle: ObjectHandle, _remaining: usize) {}
}

/// Hook notification, for observers that keep a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionEvent {
    HoverEnter(ObjectHandle),
    HoverExit(ObjectHandle),
    ObjectRemoved(ObjectHandle),
}

impl InteractionObserver for Vec<InteractionEvent> {
    fn hover_enter(&mut self, handle: ObjectHandle) {
        self.push(InteractionEvent::HoverEnter(handle));
    }

    fn hover_exit(&mut self, handle: ObjectHandle) {
        self.push(InteractionEvent::HoverExit(handle));
    }

    fn object_removed(&mut self, handle: ObjectHandle, _remaining: usize) {
        self.push(InteractionEvent::ObjectRemoved(handle));
    }
}

/// Logs every hook at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl InteractionObserver for LogObserver {
    fn hover_enter(&mut self, handle: ObjectHandle) {
        info!("mouse enter {handle}");
    }

    fn hover_exit(&mut self, handle: ObjectHandle) {
        info!("mouse leave {handle}");
    }

    fn object_removed(&mut self, handle: ObjectHandle, remaining: usize) {
        info!("removed {handle}, {remaining} objects left");
    }
}

/// Two-state hover machine plus click-to-remove
#[derive(Debug, Clone)]
pub struct InteractionController {
    state: HoverState,
    selected_color: Color,
}

impl InteractionController {
    pub const DEFAULT_SELECTED_COLOR: Color = Color::rgb(0.0, 1.0, 1.0);

    pub fn new(selected_color: Color) -> Self {
        Self {
            state: HoverState::NoHover,
            selected_color,
        }
    }

    pub fn state(&self) -> HoverState {
        self.state
    }

    pub fn hovered(&self) -> Option<ObjectHandle> {
        match self.state {
            HoverState::NoHover => None,
            HoverState::Hovering(handle) => Some(handle),
        }
    }

    pub fn on_pick_result(&mut self, result: PickResult, observer: &mut dyn InteractionObserver) {
        let next = match result.handle() {
            Some(handle) => HoverState::Hovering(handle),
            None => HoverState::NoHover,
        };
        if next == self.state {
            return;
        }

        if let HoverState::Hovering(previous) = self.state {
            observer.hover_exit(previous);
        }
        if let HoverState::Hovering(current) = next {
            observer.hover_enter(current);
        }
        self.state = next;
    }

    /// Recolors and removes the hovered object. No-op without a hover.
    pub fn on_click<S: SceneBinding>(
        &mut self,
        registry: &mut ObjectRegistry<S>,
        observer: &mut dyn InteractionObserver,
    ) -> Option<ObjectHandle> {
        let HoverState::Hovering(handle) = self.state else {
            return None;
        };

        registry.set_color(handle, self.selected_color);
        let removed = registry.remove(handle).is_some();
        self.state = HoverState::NoHover;

        observer.hover_exit(handle);
        if removed {
            observer.object_removed(handle, registry.len());
            Some(handle)
        } else {
            None
        }
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SELECTED_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn hit(handle: ObjectHandle) -> PickResult {
        PickResult::Hit {
            handle,
            distance: 1.0,
        }
    }

    fn two_boxes() -> (ObjectRegistry, ObjectHandle, ObjectHandle) {
        let mut registry: ObjectRegistry = ObjectRegistry::default();
        let a = registry.create(Vec3::ONE, Vec3::ZERO);
        let b = registry.create(Vec3::ONE, Vec3::X * 2.0);
        (registry, a, b)
    }

    #[test]
    fn test_starts_without_hover() {
        assert_eq!(InteractionController::default().state(), HoverState::NoHover);
    }

    #[test]
    fn test_enter_then_stay() {
        let (_, a, _) = two_boxes();
        let mut controller = InteractionController::default();
        let mut events: Vec<InteractionEvent> = Vec::new();

        controller.on_pick_result(hit(a), &mut events);
        controller.on_pick_result(hit(a), &mut events);
        controller.on_pick_result(hit(a), &mut events);

        assert_eq!(events, vec![InteractionEvent::HoverEnter(a)]);
        assert_eq!(controller.state(), HoverState::Hovering(a));
    }

    #[test]
    fn test_switching_targets_exits_before_entering() {
        let (_, a, b) = two_boxes();
        let mut controller = InteractionController::default();
        let mut events: Vec<InteractionEvent> = Vec::new();

        controller.on_pick_result(hit(a), &mut events);
        controller.on_pick_result(hit(b), &mut events);

        assert_eq!(
            events,
            vec![
                InteractionEvent::HoverEnter(a),
                InteractionEvent::HoverExit(a),
                InteractionEvent::HoverEnter(b),
            ]
        );
    }

    #[test]
    fn test_miss_exits() {
        let (_, a, _) = two_boxes();
        let mut controller = InteractionController::default();
        let mut events: Vec<InteractionEvent> = Vec::new();

        controller.on_pick_result(hit(a), &mut events);
        controller.on_pick_result(PickResult::Miss, &mut events);
        controller.on_pick_result(PickResult::Miss, &mut events);

        assert_eq!(
            events,
            vec![InteractionEvent::HoverEnter(a), InteractionEvent::HoverExit(a)]
        );
        assert_eq!(controller.hovered(), None);
    }

    #[test]
    fn test_click_without_hover_is_noop() {
        let (mut registry, _, _) = two_boxes();
        let mut controller = InteractionController::default();
        let mut events: Vec<InteractionEvent> = Vec::new();

        assert_eq!(controller.on_click(&mut registry, &mut events), None);
        assert_eq!(registry.len(), 2);
        assert!(events.is_empty());
    }

    #[test]
    fn test_click_removes_hovered() {
        let (mut registry, a, b) = two_boxes();
        let mut controller = InteractionController::default();
        let mut events: Vec<InteractionEvent> = Vec::new();

        controller.on_pick_result(hit(a), &mut events);
        assert_eq!(controller.on_click(&mut registry, &mut events), Some(a));

        assert_eq!(controller.state(), HoverState::NoHover);
        assert!(!registry.contains(a));
        assert!(registry.contains(b));
        assert_eq!(registry.scene().len(), 1);
        assert_eq!(
            events,
            vec![
                InteractionEvent::HoverEnter(a),
                InteractionEvent::HoverExit(a),
                InteractionEvent::ObjectRemoved(a),
            ]
        );
    }

    #[test]
    fn test_second_click_after_removal_is_noop() {
        let (mut registry, a, _) = two_boxes();
        let mut controller = InteractionController::default();
        let mut events: Vec<InteractionEvent> = Vec::new();

        controller.on_pick_result(hit(a), &mut events);
        controller.on_click(&mut registry, &mut events);
        assert_eq!(controller.on_click(&mut registry, &mut events), None);
        assert_eq!(registry.len(), 1);
    }
}
