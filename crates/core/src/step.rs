/// A trait for types that can be advanced along their derivative.
///
/// Steppers only ever need `state + derivative * delta`: Euler takes one such
/// step, and each Runge-Kutta stage is a partial step from the same base state.
/// `Delta` is usually `f64` time, but any independent variable works.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: &Self::Derivative, delta: Delta) -> Self;
}
