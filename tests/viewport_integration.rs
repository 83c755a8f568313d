//! Viewport integration tests.
//!
//! Drive the viewer's systems through a `Schedule` on a bare `World`, feeding
//! key snapshots frame by frame the way the input poller would.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;

use mapexplorer::events::reloadconfig::reload_config_observer;
use mapexplorer::events::switchdebug::switch_debug_observer;
use mapexplorer::game::insert_viewer_resources;
use mapexplorer::resources::debugmode::DebugMode;
use mapexplorer::resources::exitrequest::ExitRequested;
use mapexplorer::resources::gameconfig::GameConfig;
use mapexplorer::resources::input::{InputState, KeySnapshot, ViewerKey};
use mapexplorer::resources::mapstore::{MapSize, MapSlot, MapStore};
use mapexplorer::resources::minimap::MinimapLayout;
use mapexplorer::resources::screensize::ScreenSize;
use mapexplorer::resources::viewport::{MAX_ZOOM, MIN_ZOOM, Viewport};
use mapexplorer::systems::gameconfig::sync_viewer_settings;
use mapexplorer::systems::input::emit_input_events;
use mapexplorer::systems::render::{DrawCommand, frame_commands};
use mapexplorer::systems::viewport::viewport_controller;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn forward_input_events(input: Res<InputState>, mut commands: Commands) {
    emit_input_events(&input, &mut commands);
}

struct Viewer {
    world: World,
    schedule: Schedule,
}

impl Viewer {
    fn new(config: GameConfig) -> Self {
        let mut world = World::new();
        insert_viewer_resources(&mut world, config, ScreenSize { w: 800, h: 600 });
        world.insert_resource(MapStore::new(
            MapSize::new(4096, 4096),
            MapSize::new(2048, 1024),
        ));
        world.spawn(Observer::new(switch_debug_observer));
        world.spawn(Observer::new(reload_config_observer));
        world.flush();

        let mut schedule = Schedule::default();
        schedule.add_systems(sync_viewer_settings);
        schedule.add_systems(forward_input_events);
        schedule.add_systems(
            viewport_controller
                .after(sync_viewer_settings)
                .after(forward_input_events),
        );
        Self { world, schedule }
    }

    fn frame(&mut self, keys: &[ViewerKey]) {
        self.world
            .resource_mut::<InputState>()
            .advance(KeySnapshot::from_keys(keys));
        self.schedule.run(&mut self.world);
        self.world.clear_trackers();
    }

    /// Press and release a key over two frames.
    fn tap(&mut self, key: ViewerKey) {
        self.frame(&[key]);
        self.frame(&[]);
    }

    fn viewport(&self) -> &Viewport {
        self.world.resource::<Viewport>()
    }
}

#[test]
fn zoom_then_scroll_scenario() {
    let mut viewer = Viewer::new(GameConfig::new());
    viewer.frame(&[ViewerKey::ZoomIn]);
    for _ in 0..5 {
        viewer.frame(&[ViewerKey::ScrollRight]);
    }

    let vp = viewer.viewport();
    assert_eq!(vp.zoom, 2.0);
    let rect = vp.source_rect(*viewer.world.resource::<ScreenSize>());
    assert!(approx_eq(rect.x, 25.0));
    assert!(approx_eq(rect.y, 0.0));
    assert!(approx_eq(rect.width, 400.0));
    assert!(approx_eq(rect.height, 300.0));
}

#[test]
fn zoom_stays_a_clamped_power_of_two() {
    let mut viewer = Viewer::new(GameConfig::new());
    let sequence = [
        ViewerKey::ZoomIn,
        ViewerKey::ZoomIn,
        ViewerKey::ZoomIn,
        ViewerKey::ZoomOut,
        ViewerKey::ZoomOut,
        ViewerKey::ZoomOut,
        ViewerKey::ZoomOut,
        ViewerKey::ZoomOut,
        ViewerKey::ZoomIn,
    ];
    for key in sequence {
        viewer.tap(key);
        let zoom = viewer.viewport().zoom;
        assert!((MIN_ZOOM..=MAX_ZOOM).contains(&zoom));
        assert_eq!(zoom.log2().fract(), 0.0, "zoom {zoom} is not a power of two");
    }
    assert_eq!(viewer.viewport().zoom, 0.5);
}

#[test]
fn zoom_in_at_max_is_a_no_op() {
    let mut viewer = Viewer::new(GameConfig::new());
    viewer.world.resource_mut::<Viewport>().zoom = MAX_ZOOM;
    viewer.tap(ViewerKey::ZoomIn);
    assert_eq!(viewer.viewport().zoom, MAX_ZOOM);
}

#[test]
fn offset_stays_in_bounds_while_scrolling() {
    let mut viewer = Viewer::new(GameConfig::new());
    let screen = ScreenSize { w: 800, h: 600 };
    let map = MapSize::new(4096, 4096);
    let patterns: [&[ViewerKey]; 4] = [
        &[ViewerKey::ScrollRight, ViewerKey::ScrollDown],
        &[ViewerKey::ZoomOut],
        &[ViewerKey::ScrollLeft],
        &[ViewerKey::ZoomIn, ViewerKey::ScrollUp],
    ];
    for step in 0..2000 {
        viewer.frame(patterns[(step / 150) % patterns.len()]);
        let vp = viewer.viewport();
        let max = vp.max_offset(screen, map);
        assert!(vp.offset.x >= 0.0 && vp.offset.x <= max.x);
        assert!(vp.offset.y >= 0.0 && vp.offset.y <= max.y);
    }
}

#[test]
fn idle_frames_leave_state_unchanged() {
    let mut viewer = Viewer::new(GameConfig::new());
    viewer.tap(ViewerKey::ZoomIn);
    for _ in 0..3 {
        viewer.frame(&[ViewerKey::ScrollRight, ViewerKey::ScrollDown]);
    }
    let before = viewer.viewport().clone();
    for _ in 0..10 {
        viewer.frame(&[]);
    }
    let after = viewer.viewport();
    assert_eq!(after.zoom, before.zoom);
    assert_eq!(after.offset.x, before.offset.x);
    assert_eq!(after.offset.y, before.offset.y);
    assert_eq!(after.active, before.active);
    assert_eq!(after.minimap_visible, before.minimap_visible);
}

#[test]
fn switching_twice_restores_map() {
    let mut viewer = Viewer::new(GameConfig::new());
    viewer.tap(ViewerKey::SwitchMap);
    assert_eq!(viewer.viewport().active, MapSlot::Loaded);
    viewer.tap(ViewerKey::SwitchMap);
    assert_eq!(viewer.viewport().active, MapSlot::Generated);
}

#[test]
fn switching_to_smaller_map_reclamps() {
    let mut viewer = Viewer::new(GameConfig::new());
    for _ in 0..400 {
        viewer.frame(&[ViewerKey::ScrollRight, ViewerKey::ScrollDown]);
    }
    assert_eq!(viewer.viewport().offset.x, 3296.0);
    viewer.tap(ViewerKey::SwitchMap);
    let vp = viewer.viewport();
    assert_eq!(vp.offset.x, 2048.0 - 800.0);
    assert_eq!(vp.offset.y, 1024.0 - 600.0);
}

#[test]
fn window_resize_reclamps_offset() {
    let mut viewer = Viewer::new(GameConfig::new());
    for _ in 0..400 {
        viewer.frame(&[ViewerKey::ScrollRight, ViewerKey::ScrollDown]);
    }
    assert_eq!(viewer.viewport().offset.x, 4096.0 - 800.0);
    assert_eq!(viewer.viewport().offset.y, 4096.0 - 600.0);

    *viewer.world.resource_mut::<ScreenSize>() = ScreenSize { w: 1600, h: 1200 };
    viewer.frame(&[]);

    let vp = viewer.viewport();
    assert_eq!(vp.offset.x, 4096.0 - 1600.0);
    assert_eq!(vp.offset.y, 4096.0 - 1200.0);
    let rect = vp.source_rect(*viewer.world.resource::<ScreenSize>());
    assert!(approx_eq(rect.width, 1600.0));
    assert!(approx_eq(rect.height, 1200.0));
}

#[test]
fn minimap_toggle_is_edge_triggered() {
    let mut viewer = Viewer::new(GameConfig::new());
    assert!(viewer.viewport().minimap_visible);

    // held for several frames: one toggle only
    for _ in 0..5 {
        viewer.frame(&[ViewerKey::ToggleMinimap]);
    }
    assert!(!viewer.viewport().minimap_visible);

    // press, release, press
    viewer.frame(&[]);
    viewer.frame(&[ViewerKey::ToggleMinimap]);
    assert!(viewer.viewport().minimap_visible);
}

#[test]
fn minimap_start_visibility_comes_from_config() {
    let mut config = GameConfig::new();
    config.minimap_visible = false;
    let viewer = Viewer::new(config);
    assert!(!viewer.viewport().minimap_visible);
}

#[test]
fn quit_inserts_exit_request_and_freezes_view() {
    let mut viewer = Viewer::new(GameConfig::new());
    assert!(!viewer.world.contains_resource::<ExitRequested>());
    viewer.frame(&[ViewerKey::Quit, ViewerKey::ZoomIn, ViewerKey::SwitchMap]);
    assert!(viewer.world.contains_resource::<ExitRequested>());
    let vp = viewer.viewport();
    assert_eq!(vp.zoom, 1.0);
    assert_eq!(vp.active, MapSlot::Generated);
}

#[test]
fn debug_key_toggles_debug_mode() {
    let mut viewer = Viewer::new(GameConfig::new());
    viewer.tap(ViewerKey::ToggleDebug);
    assert!(viewer.world.contains_resource::<DebugMode>());
    viewer.tap(ViewerKey::ToggleDebug);
    assert!(!viewer.world.contains_resource::<DebugMode>());
}

#[test]
fn config_changes_reach_view_resources() {
    let mut viewer = Viewer::new(GameConfig::new());
    viewer.frame(&[]);
    {
        let mut config = viewer.world.resource_mut::<GameConfig>();
        config.scroll_speed = 40.0;
        config.minimap_width = 200.0;
        config.minimap_margin = 10.0;
    }
    viewer.frame(&[ViewerKey::ScrollRight]);
    assert_eq!(viewer.viewport().offset.x, 40.0);
    assert_eq!(
        *viewer.world.resource::<MinimapLayout>(),
        MinimapLayout {
            width: 200.0,
            margin: 10.0
        }
    );
}

#[test]
fn failed_reload_keeps_config() {
    let mut viewer = Viewer::new(GameConfig::with_path("./no/such/config.ini"));
    viewer.world.resource_mut::<GameConfig>().scroll_speed = 33.0;
    viewer.tap(ViewerKey::ReloadConfig);
    assert_eq!(viewer.world.resource::<GameConfig>().scroll_speed, 33.0);
}

#[test]
fn indicator_halves_when_zooming_in() {
    let mut viewer = Viewer::new(GameConfig::new());
    let indicator = |viewer: &Viewer| {
        let cmds = frame_commands(
            viewer.viewport(),
            viewer.world.resource::<MapStore>(),
            *viewer.world.resource::<ScreenSize>(),
            *viewer.world.resource::<MinimapLayout>(),
        );
        match cmds[4] {
            DrawCommand::Fill { rect, .. } => (rect.width, cmds.len()),
            other => panic!("expected indicator edge, got {other:?}"),
        }
    };

    let (top_width, len) = indicator(&viewer);
    assert_eq!(len, 8);
    viewer.tap(ViewerKey::ZoomIn);
    let (zoomed_width, _) = indicator(&viewer);
    assert_eq!(zoomed_width * 2.0, top_width);
}
