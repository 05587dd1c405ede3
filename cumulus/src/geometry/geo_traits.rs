/// Trait for geometric primitives that can collide with other primitives.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for geometric primitives that can calculate the distance to other primitives.
pub trait DistanceTo<T> {
    fn distance_to(&self, other: &T) -> f64;

    /// Squared distance, cheaper whenever only relative order matters.
    fn sq_distance_to(&self, other: &T) -> f64;
}
