use std::time::Instant;

use super::audio::{ImpactSound, ImpactTrigger};
use super::clock::{FrameClock, FrameInfo};
use super::input::FrameInput;
use super::interaction::{InteractionController, InteractionObserver};
use super::picking::{PickResult, PickingService};
use super::viewport::Viewport;
use crate::render::SceneGraph;
use crate::scene::{ObjectHandle, ObjectRegistry};
use crate::traits::{CameraController, FrameRenderer, RenderFrame};

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub frame: FrameInfo,
    pub pick: PickResult,
    pub removed: Option<ObjectHandle>,
    pub impacts_played: usize,
}

/// Owns all per-frame state and runs the tick in a fixed order:
/// controls, pick, hover, click, impacts, render.
#[derive(Debug)]
pub struct FrameLoop {
    registry: ObjectRegistry<SceneGraph>,
    input: FrameInput,
    picking: PickingService,
    interaction: InteractionController,
    trigger: ImpactTrigger,
    clock: FrameClock,
    applied_viewport: Option<Viewport>,
}

impl FrameLoop {
    pub fn new(
        registry: ObjectRegistry<SceneGraph>,
        viewport: Viewport,
        interaction: InteractionController,
        trigger: ImpactTrigger,
    ) -> Self {
        Self {
            registry,
            input: FrameInput::new(viewport),
            picking: PickingService,
            interaction,
            trigger,
            clock: FrameClock::new(),
            applied_viewport: None,
        }
    }

    /// Host callbacks write here between ticks
    pub fn input_mut(&mut self) -> &mut FrameInput {
        &mut self.input
    }

    pub fn input(&self) -> &FrameInput {
        &self.input
    }

    pub fn registry(&self) -> &ObjectRegistry<SceneGraph> {
        &self.registry
    }

    pub fn interaction(&self) -> &InteractionController {
        &self.interaction
    }

    pub fn tick(
        &mut self,
        camera: &mut dyn CameraController,
        renderer: &mut dyn FrameRenderer,
        observer: &mut dyn InteractionObserver,
        sound: &mut dyn ImpactSound,
    ) -> FrameReport {
        self.tick_at(Instant::now(), camera, renderer, observer, sound)
    }

    pub fn tick_at(
        &mut self,
        now: Instant,
        camera: &mut dyn CameraController,
        renderer: &mut dyn FrameRenderer,
        observer: &mut dyn InteractionObserver,
        sound: &mut dyn ImpactSound,
    ) -> FrameReport {
        let frame = self.clock.tick_at(now);

        let viewport = self.input.viewport();
        if self.applied_viewport != Some(viewport) {
            camera.set_aspect(viewport.aspect());
            self.applied_viewport = Some(viewport);
        }
        camera.update(frame.delta);

        let pick = self
            .picking
            .cast_ray(&*camera, self.input.pointer(), self.registry.iter());
        self.interaction.on_pick_result(pick, observer);

        let removed = if self.input.take_click() {
            self.interaction.on_click(&mut self.registry, observer)
        } else {
            None
        };

        let impacts_played = self
            .input
            .take_impacts()
            .into_iter()
            .filter(|strength| self.trigger.on_impact(*strength, sound))
            .count();

        renderer.render(&RenderFrame {
            scene: self.registry.scene(),
            camera: &*camera,
            frame,
            hovered: self.interaction.hovered(),
            live_objects: self.registry.len(),
        });

        FrameReport {
            frame,
            pick,
            removed,
            impacts_played,
        }
    }
}
