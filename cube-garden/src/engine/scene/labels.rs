use bevy::prelude::*;
use constants::cube::LABEL_HEIGHT;
use constants::render_settings::LABEL_FONT_SIZE;

use crate::engine::core::app_setup::PlaygroundCamera;
use crate::settings::PlaygroundSettings;
use crate::simulation::cube::Cube;

/// Screen-space name tag following a cube.
#[derive(Component)]
pub struct CubeLabel {
    cube: Entity,
}

pub fn spawn_labels(
    mut commands: Commands,
    settings: Res<PlaygroundSettings>,
    cubes: Query<(Entity, &Cube)>,
) {
    if !settings.show_labels {
        return;
    }
    for (entity, cube) in &cubes {
        commands.spawn((
            Text::new(cube.name()),
            TextFont {
                font_size: LABEL_FONT_SIZE,
                ..default()
            },
            TextColor(Color::WHITE),
            Node {
                position_type: PositionType::Absolute,
                ..default()
            },
            Visibility::Hidden,
            CubeLabel { cube: entity },
        ));
    }
}

/// Projects each cube's label anchor, a fixed height above its centre, into the viewport.
pub fn update_labels(
    cubes: Query<&Cube>,
    cameras: Query<(&Camera, &GlobalTransform), With<PlaygroundCamera>>,
    mut labels: Query<(&CubeLabel, &mut Node, &mut Visibility, &ComputedNode)>,
) {
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };

    for (label, mut node, mut visibility, computed) in &mut labels {
        let Ok(cube) = cubes.get(label.cube) else {
            continue;
        };
        let anchor = cube.body.translation.with_y(LABEL_HEIGHT);
        match camera.world_to_viewport(camera_transform, anchor) {
            Ok(position) => {
                let size = computed.size() * computed.inverse_scale_factor();
                node.left = Val::Px(position.x - size.x * 0.5);
                node.top = Val::Px(position.y - size.y * 0.5);
                *visibility = Visibility::Inherited;
            }
            Err(_) => *visibility = Visibility::Hidden,
        }
    }
}
