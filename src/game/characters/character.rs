// Character entity and management

use std::rc::Rc;

use glam::{IVec2, Vec2};
use log::{debug, info, warn};

use super::animation::{AnimationError, AnimationFrame, AnimationPlayer, WalkAnimations};
use super::direction::Direction;
use super::movement::{Movement, MovementResolver};
use super::sprites::{bomber_walk_animations, SpriteSheet};
use super::state::CharacterState;
use super::stats::CharacterStats;
use crate::engine::game_loop::FrameTime;
use crate::engine::input::DirectionalInput;
use crate::engine::renderer::{Camera, Canvas, Color, DebugOverlay, Flip, Rect};
use crate::game::constants::{HALF_TILE_SIZE, TILE_SIZE};
use crate::game::level::{CollisionMap, LevelError, TileCoord};

/// Identifies which local player drives a character
pub type PlayerId = usize;

/// Anything that lives in the level and is simulated and drawn each frame
pub trait Entity {
    fn position(&self) -> Vec2;
    fn velocity(&self) -> Vec2;

    /// Advance one simulation tick
    fn update(&mut self, time: &FrameTime, input: &dyn DirectionalInput);

    /// Issue draw requests relative to the camera
    fn draw(&self, canvas: &mut dyn Canvas, camera: &Camera);
}

/// Sprite sheet and animations a character is drawn with
#[derive(Debug, Clone)]
pub struct CharacterResources {
    sprite: Rc<SpriteSheet>,
    animations: Rc<WalkAnimations>,
}

impl CharacterResources {
    /// Pair a sheet with animations, checking every frame key resolves
    pub fn new(sprite: Rc<SpriteSheet>, animations: Rc<WalkAnimations>) -> Result<Self, AnimationError> {
        sprite.validate(&animations)?;
        Ok(Self { sprite, animations })
    }

    /// Resources for the standard bomber
    pub fn bomber() -> Result<Self, AnimationError> {
        Self::new(
            Rc::new(SpriteSheet::bomber()),
            Rc::new(bomber_walk_animations()?),
        )
    }
}

/// A player-controlled bomber walking the tile grid
#[derive(Debug)]
pub struct Character {
    player_id: PlayerId,

    position: Vec2,
    /// Unit direction vector; speed is applied during integration
    velocity: Vec2,
    /// Facing; kept while idle
    direction: Direction,

    state: CharacterState,
    animation: AnimationPlayer,
    stats: CharacterStats,
    debug: DebugOverlay,

    resources: CharacterResources,
    collision_map: Rc<CollisionMap>,
}

impl Character {
    /// Spawn on the centre of `tile` (`x` column, `y` row), idle and facing down
    pub fn new(
        player_id: PlayerId,
        tile: IVec2,
        time: &FrameTime,
        resources: CharacterResources,
        collision_map: Rc<CollisionMap>,
    ) -> Result<Self, LevelError> {
        collision_map.validate_spawn(tile)?;

        let mut character = Self {
            player_id,
            position: TileCoord::from(tile).center(),
            velocity: Vec2::ZERO,
            direction: Direction::Down,
            state: CharacterState::Idle,
            animation: AnimationPlayer::new(),
            stats: CharacterStats::default(),
            debug: DebugOverlay::default(),
            resources,
            collision_map,
        };
        character.change_state(CharacterState::Idle, time);

        info!(
            "Player {} spawned at tile ({}, {})",
            player_id, tile.x, tile.y
        );
        Ok(character)
    }

    pub fn player_id(&self) -> PlayerId {
        self.player_id
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn state(&self) -> CharacterState {
        self.state
    }

    /// Animation for the current facing
    pub fn current_animation(&self) -> &[AnimationFrame] {
        self.resources.animations.get(self.direction)
    }

    pub fn debug_overlay_mut(&mut self) -> &mut DebugOverlay {
        &mut self.debug
    }

    /// Enter `new_state`.
    ///
    /// The animation is rewound to frame 0 and timed from it before the
    /// state's own entry frame is applied.
    pub fn change_state(&mut self, new_state: CharacterState, time: &FrameTime) {
        let previous = self.state;
        self.state = new_state;

        let animation = self.resources.animations.get(self.direction);
        self.animation.restart(animation, time);

        match new_state {
            CharacterState::Idle => self.velocity = Vec2::ZERO,
            CharacterState::Moving => self.animation.set_frame(new_state.entry_frame(), animation),
        }

        if new_state != previous {
            debug!(
                "Player {} {:?} -> {:?} (frame {}, next at {:.1} ms)",
                self.player_id,
                previous,
                new_state,
                self.animation.frame(),
                self.animation.timer()
            );
        }
    }

    fn resolve_movement(&self, input: &dyn DirectionalInput) -> Movement {
        MovementResolver::new(&self.collision_map, self.position, self.direction)
            .resolve(input, self.player_id)
    }

    /// Turn to face `direction`, switching to its animation
    fn face(&mut self, direction: Direction) {
        self.direction = direction;
        self.animation
            .fit_to(self.resources.animations.get(direction));
    }

    fn update_state(&mut self, time: &FrameTime, input: &dyn DirectionalInput) {
        let movement = self.resolve_movement(input);
        self.face(movement.direction);

        match self.state {
            CharacterState::Idle => {
                if !movement.is_stopped() {
                    self.change_state(CharacterState::Moving, time);
                    self.velocity = movement.velocity;
                }
            }
            CharacterState::Moving => {
                self.velocity = movement.velocity;
                if movement.is_stopped() {
                    self.change_state(CharacterState::Idle, time);
                }
            }
        }
    }

    fn update_position(&mut self, time: &FrameTime) {
        self.position += self.velocity * self.stats.speed() * time.seconds_passed;
    }

    fn update_animation(&mut self, time: &FrameTime) {
        if !self.state.animates() {
            return;
        }
        let animation = self.resources.animations.get(self.direction);
        self.animation.update(animation, time);
    }
}

impl Entity for Character {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Integrate with last tick's velocity, then run the state, then animate
    fn update(&mut self, time: &FrameTime, input: &dyn DirectionalInput) {
        self.update_position(time);
        self.update_state(time, input);
        self.update_animation(time);
    }

    fn draw(&self, canvas: &mut dyn Canvas, camera: &Camera) {
        let frame_key = self.animation.current(self.current_animation()).key;
        let Some(frame) = self.resources.sprite.frame(frame_key) else {
            warn!("Player {} has no sprite frame {:?}", self.player_id, frame_key);
            return;
        };

        // Side frames face left; mirror them when walking right
        let flip = if self.direction == Direction::Right {
            Flip::HORIZONTAL
        } else {
            Flip::NONE
        };

        canvas.draw_frame_origin(
            self.resources.sprite.texture(),
            frame,
            (self.position.x - camera.position.x).floor() as i32,
            (self.position.y - camera.position.y).floor() as i32,
            flip,
        );

        if !self.debug.is_enabled() {
            return;
        }

        canvas.draw_box(
            camera,
            Rect::new(
                self.position.x - HALF_TILE_SIZE,
                self.position.y - HALF_TILE_SIZE,
                TILE_SIZE - 1.0,
                TILE_SIZE - 1.0,
            ),
            Color::YELLOW,
        );
        canvas.draw_cross(camera, self.position, Color::WHITE);
    }
}

/// Owns every character in the current round
#[derive(Debug, Default)]
pub struct CharacterManager {
    characters: Vec<Character>,
}

impl CharacterManager {
    pub fn new() -> Self {
        Self {
            characters: Vec::new(),
        }
    }

    /// Add a character to the round
    pub fn add(&mut self, character: Character) {
        self.characters.push(character);
    }

    /// Get the character driven by a player
    pub fn get_by_player(&self, player_id: PlayerId) -> Option<&Character> {
        self.characters.iter().find(|c| c.player_id() == player_id)
    }

    pub fn all_mut(&mut self) -> &mut [Character] {
        &mut self.characters
    }

    /// Update all characters
    pub fn update(&mut self, time: &FrameTime, input: &dyn DirectionalInput) {
        for character in &mut self.characters {
            character.update(time, input);
        }
    }

    /// Draw all characters
    pub fn draw(&self, canvas: &mut dyn Canvas, camera: &Camera) {
        for character in &self.characters {
            character.draw(canvas, camera);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::is_zero;
    use crate::engine::input::HeldKeys;
    use crate::engine::renderer::{FrameRect, TextureHandle};
    use approx::assert_relative_eq;

    const TICK: f32 = 1.0 / 60.0;

    #[derive(Debug, Clone, PartialEq)]
    enum DrawCall {
        Frame {
            frame: FrameRect,
            x: i32,
            y: i32,
            flip: Flip,
        },
        Box(Rect, Color),
        Cross(Vec2, Color),
    }

    #[derive(Default)]
    struct RecordingCanvas {
        calls: Vec<DrawCall>,
    }

    impl Canvas for RecordingCanvas {
        fn draw_frame_origin(&mut self, _texture: TextureHandle, frame: &FrameRect, x: i32, y: i32, flip: Flip) {
            self.calls.push(DrawCall::Frame {
                frame: *frame,
                x,
                y,
                flip,
            });
        }

        fn draw_box(&mut self, _camera: &Camera, rect: Rect, color: Color) {
            self.calls.push(DrawCall::Box(rect, color));
        }

        fn draw_cross(&mut self, _camera: &Camera, point: Vec2, color: Color) {
            self.calls.push(DrawCall::Cross(point, color));
        }
    }

    fn room() -> Rc<CollisionMap> {
        Rc::new(
            CollisionMap::parse(
                "
                #####
                #...#
                #...#
                #...#
                #####
                ",
            )
            .unwrap(),
        )
    }

    fn pillar_room() -> Rc<CollisionMap> {
        Rc::new(
            CollisionMap::parse(
                "
                #####
                #...#
                #.#.#
                #...#
                #####
                ",
            )
            .unwrap(),
        )
    }

    fn spawn(map: Rc<CollisionMap>, x: i32, y: i32) -> (Character, FrameTime) {
        let time = FrameTime::new(0.0, TICK);
        let character = Character::new(
            0,
            IVec2::new(x, y),
            &time,
            CharacterResources::bomber().unwrap(),
            map,
        )
        .unwrap();
        (character, time)
    }

    /// Run one tick and return the time for the next one
    fn tick(character: &mut Character, time: FrameTime, input: &HeldKeys) -> FrameTime {
        character.update(&time, input);
        assert_invariants(character);
        time.advance(TICK)
    }

    fn assert_invariants(character: &Character) {
        assert_eq!(
            character.state() == CharacterState::Idle,
            is_zero(character.velocity()),
            "idle iff stationary: {:?} {:?}",
            character.state(),
            character.velocity()
        );
        assert!(character.animation.frame() < character.current_animation().len());
    }

    #[test]
    fn test_spawn_is_idle_at_tile_center() {
        let (character, _) = spawn(room(), 1, 1);
        assert_eq!(character.position(), Vec2::new(24.0, 24.0));
        assert_eq!(character.state(), CharacterState::Idle);
        assert_eq!(character.direction(), Direction::Down);
        assert_eq!(character.velocity(), Vec2::ZERO);
        assert_eq!(character.animation.frame(), 0);
        assert_eq!(character.player_id(), 0);
    }

    #[test]
    fn test_spawn_rejects_blocked_tile() {
        let time = FrameTime::default();
        let result = Character::new(
            0,
            IVec2::new(0, 0),
            &time,
            CharacterResources::bomber().unwrap(),
            room(),
        );
        assert!(matches!(result, Err(LevelError::SpawnBlocked { .. })));
    }

    #[test]
    fn test_resources_reject_unknown_frames() {
        let sheet = SpriteSheet::new(TextureHandle::from_path("images/blank.png"));
        let result = CharacterResources::new(Rc::new(sheet), Rc::new(bomber_walk_animations().unwrap()));
        assert!(matches!(result, Err(AnimationError::UnknownFrame { .. })));
    }

    #[test]
    fn test_holding_down_starts_moving() {
        let (mut character, time) = spawn(room(), 1, 1);
        let input = HeldKeys::down(0);

        let time = tick(&mut character, time, &input);
        assert_eq!(character.state(), CharacterState::Moving);
        assert_eq!(character.direction(), Direction::Down);
        assert_eq!(character.velocity(), Direction::Down.movement());
        // Integration lags one tick behind the state update
        assert_eq!(character.position(), Vec2::new(24.0, 24.0));

        tick(&mut character, time, &input);
        assert_relative_eq!(character.position().x, 24.0);
        assert_relative_eq!(
            character.position().y,
            24.0 + character.stats.speed() * TICK,
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_entering_moving_starts_mid_stride() {
        let (mut character, time) = spawn(room(), 1, 1);
        tick(&mut character, time, &HeldKeys::right(0));
        assert_eq!(character.animation.frame(), 1);
        // Timed from the first frame's duration
        let first = character.current_animation()[0];
        assert_relative_eq!(character.animation.timer(), first.duration_ms());
    }

    #[test]
    fn test_re_entering_moving_resets_to_frame_one() {
        let (mut character, mut time) = spawn(room(), 1, 1);
        let walk = HeldKeys::right(0);

        let mut advanced = false;
        for _ in 0..20 {
            time = tick(&mut character, time, &walk);
            advanced |= character.animation.frame() != 1;
        }
        assert!(advanced, "walk cycle never advanced");

        time = tick(&mut character, time, &HeldKeys::none(0));
        assert_eq!(character.state(), CharacterState::Idle);
        assert_eq!(character.animation.frame(), 0);

        tick(&mut character, time, &walk);
        assert_eq!(character.state(), CharacterState::Moving);
        assert_eq!(character.animation.frame(), 1);
    }

    #[test]
    fn test_idle_without_input_holds_still() {
        let (mut character, mut time) = spawn(room(), 2, 2);
        let start = character.position();

        for _ in 0..120 {
            time = tick(&mut character, time, &HeldKeys::none(0));
            assert_eq!(character.position(), start);
            assert_eq!(character.animation.frame(), 0);
            assert_eq!(character.state(), CharacterState::Idle);
        }
    }

    #[test]
    fn test_idle_turns_toward_wall_without_moving() {
        let (mut character, time) = spawn(room(), 1, 1);
        tick(&mut character, time, &HeldKeys::up(0));

        assert_eq!(character.state(), CharacterState::Idle);
        // Blocked moves keep the previous facing
        assert_eq!(character.direction(), Direction::Down);
        assert_eq!(character.position(), Vec2::new(24.0, 24.0));
    }

    #[test]
    fn test_walking_into_wall_stops() {
        let corridor = Rc::new(CollisionMap::parse("###\n#.#\n#.#\n###").unwrap());
        let (mut character, mut time) = spawn(corridor, 1, 1);
        let input = HeldKeys::down(0);

        time = tick(&mut character, time, &input);
        assert_eq!(character.state(), CharacterState::Moving);

        let mut ticks = 0;
        while character.state() == CharacterState::Moving {
            time = tick(&mut character, time, &input);
            ticks += 1;
            assert!(ticks < 100, "never reached the wall");
        }

        assert_eq!(character.velocity(), Vec2::ZERO);
        assert_eq!(character.direction(), Direction::Down);
        assert_eq!(character.animation.frame(), 0);
        assert!(character.position().y >= 40.0 && character.position().y < 41.0);

        // Keeps pushing against the wall without moving
        let resting = character.position();
        for _ in 0..10 {
            time = tick(&mut character, time, &input);
        }
        assert_eq!(character.position(), resting);
        assert_eq!(character.state(), CharacterState::Idle);
    }

    #[test]
    fn test_corner_slides_around_pillar() {
        let (mut character, mut time) = spawn(pillar_room(), 2, 1);
        // Half over the pillar, half over the open column to its right
        character.position.x += 4.0;
        let input = HeldKeys::down(0);

        time = tick(&mut character, time, &input);
        assert_eq!(character.state(), CharacterState::Moving);
        assert_eq!(character.direction(), Direction::Right);
        assert_eq!(character.velocity(), Vec2::X);

        let mut ticks = 0;
        while character.direction() == Direction::Right {
            time = tick(&mut character, time, &input);
            assert_eq!(character.state(), CharacterState::Moving);
            ticks += 1;
            assert!(ticks < 100, "never cleared the pillar");
        }

        // Cleared the pillar and turned down into the open column
        assert_eq!(character.direction(), Direction::Down);
        assert!(character.position().x >= 56.0);
    }

    #[test]
    fn test_facing_change_keeps_frame_in_range() {
        let (mut character, mut time) = spawn(room(), 2, 2);
        let inputs = [
            HeldKeys::down(0),
            HeldKeys::left(0),
            HeldKeys::up(0),
            HeldKeys::right(0),
            HeldKeys::none(0),
        ];

        for step in 0..400 {
            let input = inputs[(step / 7) % inputs.len()];
            time = tick(&mut character, time, &input);
        }
    }

    #[test]
    fn test_stage_wander_holds_invariants() {
        let map = Rc::new(crate::game::level::stage_collision_map().unwrap());
        let (mut character, mut time) = spawn(map, 1, 1);
        let inputs = [
            HeldKeys::right(0),
            HeldKeys::down(0),
            HeldKeys::left(0),
            HeldKeys::none(0),
            HeldKeys::up(0),
        ];

        for step in 0..2000 {
            let input = inputs[(step / 45) % inputs.len()];
            time = tick(&mut character, time, &input);
        }
    }

    #[test]
    fn test_other_players_input_ignored() {
        let (mut character, time) = spawn(room(), 1, 1);
        tick(&mut character, time, &HeldKeys::down(1));
        assert_eq!(character.state(), CharacterState::Idle);
    }

    #[test]
    fn test_faster_stats_move_further() {
        let (mut character, time) = spawn(room(), 1, 1);
        character.stats = CharacterStats {
            speed_multiplier: 2.0,
            ..CharacterStats::default()
        };
        let input = HeldKeys::down(0);

        let time = tick(&mut character, time, &input);
        tick(&mut character, time, &input);
        assert_relative_eq!(character.position().y, 24.0 + 45.0 * 2.0 * TICK, epsilon = 1e-4);
    }

    #[test]
    fn test_draw_uses_floored_camera_offset() {
        let (mut character, _) = spawn(room(), 1, 1);
        character.position = Vec2::new(24.7, 30.2);
        let camera = Camera::new(Vec2::new(4.0, 8.0), 256.0, 224.0);
        let mut canvas = RecordingCanvas::default();

        character.draw(&mut canvas, &camera);

        let expected_frame = *SpriteSheet::bomber().frame("idle-down").unwrap();
        assert_eq!(
            canvas.calls,
            vec![DrawCall::Frame {
                frame: expected_frame,
                x: 20,
                y: 22,
                flip: Flip::NONE,
            }]
        );
    }

    #[test]
    fn test_draw_mirrors_only_when_facing_right() {
        let camera = Camera::default();
        for direction in Direction::ALL {
            let (mut character, _) = spawn(room(), 2, 2);
            character.face(direction);
            let mut canvas = RecordingCanvas::default();
            character.draw(&mut canvas, &camera);

            let DrawCall::Frame { flip, .. } = &canvas.calls[0] else {
                panic!("expected a sprite draw first");
            };
            let expected = if direction == Direction::Right {
                Flip::HORIZONTAL
            } else {
                Flip::NONE
            };
            assert_eq!(*flip, expected);
        }
    }

    #[test]
    fn test_draw_debug_overlay() {
        let (mut character, _) = spawn(room(), 1, 1);
        character.debug_overlay_mut().toggle();
        let mut canvas = RecordingCanvas::default();

        character.draw(&mut canvas, &Camera::default());

        assert_eq!(canvas.calls.len(), 3);
        assert_eq!(
            canvas.calls[1],
            DrawCall::Box(Rect::new(16.0, 16.0, 15.0, 15.0), Color::YELLOW)
        );
        assert_eq!(
            canvas.calls[2],
            DrawCall::Cross(Vec2::new(24.0, 24.0), Color::WHITE)
        );
    }

    #[test]
    fn test_manager_updates_and_draws_all() {
        let map = room();
        let time = FrameTime::new(0.0, TICK);
        let mut manager = CharacterManager::new();
        for (player, x) in [(0, 1), (1, 3)] {
            manager.add(
                Character::new(
                    player,
                    IVec2::new(x, 1),
                    &time,
                    CharacterResources::bomber().unwrap(),
                    Rc::clone(&map),
                )
                .unwrap(),
            );
        }
        assert!(manager.get_by_player(1).is_some());
        assert!(manager.get_by_player(2).is_none());

        manager.update(&time, &HeldKeys::down(1));
        assert_eq!(
            manager.get_by_player(0).unwrap().state(),
            CharacterState::Idle
        );
        assert_eq!(
            manager.get_by_player(1).unwrap().state(),
            CharacterState::Moving
        );

        let mut canvas = RecordingCanvas::default();
        manager.draw(&mut canvas, &Camera::default());
        assert_eq!(canvas.calls.len(), 2);
    }
}
