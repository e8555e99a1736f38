use std::collections::VecDeque;

use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowEvent};

use crate::simulation::pointer::{PointerButton, PointerEvent, screen_to_ndc};

/// Pointer events waiting for the next hand update.
#[derive(Resource, Debug, Default)]
pub struct PointerQueue {
    events: VecDeque<PointerEvent>,
    last_ndc: Option<Vec2>,
}

impl PointerQueue {
    pub fn push(&mut self, event: PointerEvent) {
        if let PointerEvent::Move { ndc } | PointerEvent::Down { ndc, .. } = event {
            self.last_ndc = Some(ndc);
        }
        self.events.push_back(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = PointerEvent> + '_ {
        self.events.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last_ndc(&self) -> Option<Vec2> {
        self.last_ndc
    }
}

pub fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        _ => PointerButton::Other,
    }
}

/// Reads cursor and button events from the primary window, keeping their order.
pub fn collect_pointer_events(
    mut queue: ResMut<PointerQueue>,
    mut window_events: EventReader<WindowEvent>,
    windows: Query<(Entity, &Window), With<PrimaryWindow>>,
) {
    let Ok((primary, window)) = windows.single() else {
        return;
    };
    let size = window.size();
    if size.x <= 0.0 || size.y <= 0.0 {
        return;
    }

    for event in window_events.read() {
        match event {
            WindowEvent::CursorMoved(moved) if moved.window == primary => {
                queue.push(PointerEvent::Move {
                    ndc: screen_to_ndc(moved.position, size),
                });
            }
            WindowEvent::MouseButtonInput(input) if input.window == primary => {
                let button = pointer_button(input.button);
                match input.state {
                    ButtonState::Pressed => {
                        let ndc = window
                            .cursor_position()
                            .map(|position| screen_to_ndc(position, size))
                            .or(queue.last_ndc());
                        if let Some(ndc) = ndc {
                            queue.push(PointerEvent::Down { button, ndc });
                        }
                    }
                    ButtonState::Released => queue.push(PointerEvent::Up { button }),
                }
            }
            _ => {}
        }
    }
}
