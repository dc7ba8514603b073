//! RNG module - shape selection for spawning
//!
//! The engine never draws randomness itself; it asks a [`ShapeSource`] for
//! the next shape. Two sources ship here:
//!
//! - [`UniformSource`]: every shape equally likely on every draw, seeded LCG
//! - [`ScriptedSource`]: replays a fixed sequence, for tests and puzzles

use crate::types::Shape;

/// Supplies the shape of each newly spawned piece
pub trait ShapeSource: Send {
    fn next_shape(&mut self) -> Shape;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of an LCG with a power-of-two
    /// modulus cycle with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Uniform shape selection
#[derive(Debug, Clone)]
pub struct UniformSource {
    rng: SimpleRng,
}

impl UniformSource {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl ShapeSource for UniformSource {
    fn next_shape(&mut self) -> Shape {
        Shape::ALL[self.rng.next_range(Shape::ALL.len() as u32) as usize]
    }
}

/// Replays a fixed list of shapes, starting over after the last one
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    shapes: Vec<Shape>,
    next: usize,
}

impl ScriptedSource {
    /// An empty script falls back to `O` forever.
    pub fn new(shapes: impl Into<Vec<Shape>>) -> Self {
        Self {
            shapes: shapes.into(),
            next: 0,
        }
    }

    /// Always the same shape
    pub fn repeat(shape: Shape) -> Self {
        Self::new(vec![shape])
    }
}

impl ShapeSource for ScriptedSource {
    fn next_shape(&mut self) -> Shape {
        if self.shapes.is_empty() {
            return Shape::O;
        }
        let shape = self.shapes[self.next % self.shapes.len()];
        self.next = (self.next + 1) % self.shapes.len();
        shape
    }
}
