/// Watches an integration one recorded grid point at a time.
///
/// The fixed-step integrator calls `observe` once for the initial state (step
/// 0) and once after every step. In that integrator `E` is its `Event`, which
/// carries the step number, the grid time `t0 + step·dt`, and the state after
/// the post-step policy ran, so a wrapped angle is seen already in `(−π, π]`.
/// Returning `Some(action)` asks the integrator to act on it, for example to
/// stop early and keep the samples recorded so far. `None` means carry on.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer. `()` watches nothing.
pub trait Observer<E, A> {
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Stop;

    #[test]
    fn closure_observer_sees_every_event() {
        let mut seen = Vec::new();
        let mut observer = |step: &usize| {
            seen.push(*step);
            (*step == 2).then_some(Stop)
        };

        let actions: Vec<Option<Stop>> = (0..4)
            .map(|step| Observer::<usize, Stop>::observe(&mut observer, &step))
            .collect();

        assert_eq!(actions, vec![None, None, Some(Stop), None]);
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(Observer::<usize, Stop>::observe(&mut (), &7), None);
    }
}
