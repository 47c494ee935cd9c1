use rand::Rng;
use rand::rngs::StdRng;
use serde::Serialize;

use super::{
    config::{GameConfig, PacingConfig},
    direction::Direction,
    ring::DirectionRing,
};

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
///
/// The body is stored as the ring of directions taken between consecutive
/// cells. Only the head and tail coordinates are kept explicitly and both are
/// updated incrementally, so moving and growing are O(1). Anything that needs
/// the full body walks the ring from the tail.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    ring: DirectionRing,
    length: usize,
    head_index: usize,
    tail_index: usize,
    heading: Direction,
    head: Position,
    tail: Position,
}

impl Snake {
    /// Create a straight snake starting at `tail` and extending along `heading`.
    ///
    /// `capacity` is the ring size, normally the number of cells on the board.
    /// The length is clamped to `1..=capacity`.
    pub fn new(tail: Position, heading: Direction, length: usize, capacity: usize) -> Self {
        let mut ring = DirectionRing::new(capacity);
        let length = length.clamp(1, ring.capacity());

        for i in 0..length - 1 {
            ring.set(i, heading);
        }

        let (dx, dy) = heading.delta();
        let steps = (length - 1) as i32;
        let head_index = ring.prev_index(length - 1);

        Self {
            ring,
            length,
            head_index,
            tail_index: 0,
            heading,
            head: tail.moved_by(dx * steps, dy * steps),
            tail,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.head
    }

    /// Get the tail position (oldest segment)
    pub fn tail(&self) -> Position {
        self.tail
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.length
    }

    /// Always false: a snake keeps at least one cell
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    /// Cell the head moves into on the next step
    pub fn next_head(&self) -> Position {
        self.head.moved_in_direction(self.heading)
    }

    /// Every body cell from tail to head
    pub fn cells(&self) -> BodyCells<'_> {
        BodyCells {
            ring: &self.ring,
            index: self.tail_index,
            cell: self.tail,
            remaining: self.length,
        }
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.cells().take(self.length - 1).any(|cell| cell == pos)
    }

    /// Check if the head sits on any other body cell
    pub fn eats_itself(&self) -> bool {
        self.collides_with_body(self.head)
    }

    /// Advance the head one cell and drop the tail, keeping the length
    pub fn move_ahead(&mut self) {
        self.advance(false);
    }

    /// Advance the head one cell and keep the tail, adding one to the length
    pub fn grow(&mut self) {
        self.advance(true);
    }

    /// Change heading unless the request is a 180-degree turn
    pub fn change_direction(&mut self, direction: Direction) {
        if !self.heading.is_opposite(direction) {
            self.heading = direction;
        }
    }

    fn advance(&mut self, should_grow: bool) {
        let entries = self.length - 1;
        let new_head = self.head.moved_in_direction(self.heading);

        // A full ring has no free entry for the new head, so growth degrades
        // to a plain move.
        if should_grow && entries < self.ring.capacity() {
            self.length += 1;
        } else if entries == 0 {
            self.head = new_head;
            self.tail = new_head;
            return;
        } else {
            // Pop the tail entry before the head can reuse its slot.
            let tail_step = self.ring.get(self.tail_index);
            self.tail = self.tail.moved_in_direction(tail_step);
            self.tail_index = self.ring.next_index(self.tail_index);
        }

        self.head_index = self.ring.next_index(self.head_index);
        self.ring.set(self.head_index, self.heading);
        self.head = new_head;
    }
}

/// Iterator over the body cells of a [`Snake`], tail first
pub struct BodyCells<'a> {
    ring: &'a DirectionRing,
    index: usize,
    cell: Position,
    remaining: usize,
}

impl Iterator for BodyCells<'_> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.remaining == 0 {
            return None;
        }

        let current = self.cell;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.cell = self.cell.moved_in_direction(self.ring.get(self.index));
            self.index = self.ring.next_index(self.index);
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for BodyCells<'_> {}

/// Type of collision that ended a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Collision {
    /// Snake left the board
    Wall,
    /// Snake ran into its own body
    SelfCollision,
}

/// Whether the game is running or waiting for a restart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Playing,
    GameOver,
}

/// Complete game state
///
/// Owns its own RNG so apple placement needs no outside input.
#[derive(Debug, Clone)]
pub struct GameState {
    snake: Snake,
    apple: Position,
    phase: Phase,
    grid_width: i32,
    grid_height: i32,
    pacing: PacingConfig,
    score: u32,
    next_reward: u32,
    step_period_ms: u32,
    ticks: u32,
    rng: StdRng,
}

impl GameState {
    /// Initial configuration: straight snake in the top-left corner heading
    /// right, default pacing, apple at a random cell.
    pub fn new(config: &GameConfig, rng: StdRng) -> Self {
        let snake = Snake::new(
            Position::new(0, 0),
            Direction::Right,
            config.initial_snake_length,
            config.cell_count(),
        );
        let mut state = Self::with_snake(config, snake, Position::new(0, 0), rng);
        state.teleport_apple();
        state
    }

    /// State built around an existing snake and apple
    pub fn with_snake(config: &GameConfig, snake: Snake, apple: Position, rng: StdRng) -> Self {
        Self {
            snake,
            apple,
            phase: Phase::Playing,
            grid_width: config.grid_width as i32,
            grid_height: config.grid_height as i32,
            pacing: config.pacing.clone(),
            score: 0,
            next_reward: config.pacing.initial_reward,
            step_period_ms: config.pacing.initial_step_period_ms,
            ticks: 0,
            rng,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> Position {
        self.apple
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Every snake cell from tail to head
    pub fn cells(&self) -> BodyCells<'_> {
        self.snake.cells()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Reward the next apple will award
    pub fn next_reward(&self) -> u32 {
        self.next_reward
    }

    pub fn step_period_ms(&self) -> u32 {
        self.step_period_ms
    }

    /// Ticks applied since this state was created
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn grid_size(&self) -> (i32, i32) {
        (self.grid_width, self.grid_height)
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.grid_width && pos.y >= 0 && pos.y < self.grid_height
    }

    /// True when the next step lands on the apple
    pub fn will_eat_apple(&self) -> bool {
        self.snake.next_head() == self.apple
    }

    pub fn is_out_of_bounds(&self) -> bool {
        !self.is_in_bounds(self.snake.head())
    }

    pub fn eats_itself(&self) -> bool {
        self.snake.eats_itself()
    }

    pub fn move_ahead(&mut self) {
        self.snake.move_ahead();
    }

    pub fn grow(&mut self) {
        self.snake.grow();
    }

    pub fn change_direction(&mut self, direction: Direction) {
        self.snake.change_direction(direction);
    }

    /// Put the apple on a uniformly random cell. The snake body is not avoided.
    pub fn teleport_apple(&mut self) {
        self.apple = Position::new(
            self.rng.gen_range(0..self.grid_width),
            self.rng.gen_range(0..self.grid_height),
        );
    }

    /// Shorten the step period, never going below the floor
    pub fn speed_up_game(&mut self) {
        let floor = self.pacing.min_step_period_ms;
        if self.step_period_ms > floor {
            self.step_period_ms = self
                .step_period_ms
                .saturating_sub(self.pacing.step_period_decrement_ms)
                .max(floor);
        }
    }

    pub fn update_score(&mut self) {
        self.score += self.next_reward;
        self.next_reward += self.pacing.reward_increment;
    }

    pub(crate) fn record_tick(&mut self) {
        self.ticks += 1;
    }

    /// The only way into `GameOver`; leaving it takes a fresh state
    pub(crate) fn end_game(&mut self) {
        self.phase = Phase::GameOver;
    }

    #[cfg(test)]
    pub(crate) fn set_apple(&mut self, apple: Position) {
        self.apple = apple;
    }

    #[cfg(test)]
    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }
}
