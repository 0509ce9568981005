use hecs::Entity;

/// Fixed per-frame ordering: the roster (update and draw order) and the
/// sequence of `(receiver, other)` collision responses.
///
/// Pairs run exactly as listed. A pair checked in both directions in the same
/// frame flips both objects once each, so with three or more overlapping
/// objects an object can flip twice in a frame and end up where it started.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    pub order: Vec<Entity>,
    pub pairs: Vec<(Entity, Entity)>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// The three-sprite demo sequence
    pub fn demo(a: Entity, b: Entity, c: Entity) -> Self {
        Self {
            order: vec![a, b, c],
            pairs: vec![(a, b), (b, a), (c, a), (c, b), (b, c), (a, c)],
        }
    }

    /// Every ordered pair `(i, j)` with `i != j`, in roster order
    pub fn with_all_ordered_pairs(order: Vec<Entity>) -> Self {
        let pairs = order
            .iter()
            .flat_map(|&receiver| {
                order
                    .iter()
                    .filter(move |&&other| other != receiver)
                    .map(move |&other| (receiver, other))
            })
            .collect();
        Self { order, pairs }
    }

    pub fn push(&mut self, entity: Entity) {
        self.order.push(entity);
    }

    pub fn push_pair(&mut self, receiver: Entity, other: Entity) {
        self.pairs.push((receiver, other));
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hecs::World;

    fn spawn(world: &mut World, n: usize) -> Vec<Entity> {
        (0..n).map(|i| world.spawn((i,))).collect()
    }

    #[test]
    fn test_demo_sequence() {
        let mut world = World::new();
        let e = spawn(&mut world, 3);
        let schedule = Schedule::demo(e[0], e[1], e[2]);

        assert_eq!(schedule.order, e);
        assert_eq!(
            schedule.pairs,
            vec![
                (e[0], e[1]),
                (e[1], e[0]),
                (e[2], e[0]),
                (e[2], e[1]),
                (e[1], e[2]),
                (e[0], e[2]),
            ]
        );
    }

    #[test]
    fn test_all_ordered_pairs() {
        let mut world = World::new();
        let e = spawn(&mut world, 3);
        let schedule = Schedule::with_all_ordered_pairs(e.clone());

        assert_eq!(schedule.len(), 3);
        assert_eq!(schedule.pairs.len(), 6);
        assert_eq!(schedule.pairs[0], (e[0], e[1]));
        assert_eq!(schedule.pairs[1], (e[0], e[2]));
        assert_eq!(schedule.pairs[5], (e[2], e[1]));
        assert!(schedule.pairs.iter().all(|(a, b)| a != b));
    }

    #[test]
    fn test_custom_sequence_keeps_push_order() {
        let mut world = World::new();
        let e = spawn(&mut world, 2);
        let mut schedule = Schedule::new();
        schedule.push(e[1]);
        schedule.push(e[0]);
        schedule.push_pair(e[1], e[0]);
        schedule.push_pair(e[1], e[0]);

        assert_eq!(schedule.order, vec![e[1], e[0]]);
        assert_eq!(schedule.pairs, vec![(e[1], e[0]), (e[1], e[0])]);
    }

    #[test]
    fn test_single_entity_has_no_pairs() {
        let mut world = World::new();
        let e = spawn(&mut world, 1);
        let schedule = Schedule::with_all_ordered_pairs(e);
        assert!(schedule.pairs.is_empty());
        assert!(!schedule.is_empty());
    }
}
