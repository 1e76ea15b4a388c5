use log::debug;

use crate::geometry::WorldPoint;

/// Find the candidate nearest to `query` by linear scan.
///
/// A candidate replaces the running best when its distance is less than *or
/// equal to* the current minimum, so on an exact tie the last-scanned
/// candidate wins.
pub fn find_nearest_point<I>(candidates: I, query: WorldPoint) -> Option<WorldPoint>
where
    I: IntoIterator<Item = WorldPoint>,
{
    let mut best: Option<(WorldPoint, f64)> = None;
    for candidate in candidates {
        let dist = candidate.distance_to(&query);
        match best {
            Some((_, best_dist)) if dist > best_dist => {}
            _ => best = Some((candidate, dist)),
        }
    }
    best.map(|(p, _)| p)
}

/// True iff the Euclidean distance between the points is within `radius`.
pub fn is_within_threshold(p1: WorldPoint, p2: WorldPoint, radius: f64) -> bool {
    p1.distance_to(&p2) <= radius
}

/// A successful snap: the resolved point, the name of the candidate set it
/// came from, and its distance to the query.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapHit {
    pub point: WorldPoint,
    pub source: String,
    pub distance: f64,
}

/// Resolves a raw cursor point against several ordered candidate sets
/// (wall endpoints, diaphragm corners, ...).
///
/// Between sets, the one whose nearest candidate is strictly closer wins;
/// on an exact tie the earlier-registered set wins.
#[derive(Debug, Default)]
pub struct SnapResolver {
    sets: Vec<(String, Vec<WorldPoint>)>,
}

impl SnapResolver {
    pub fn new() -> Self {
        Self { sets: Vec::new() }
    }

    /// Register a named candidate set. Registration order is the tie-break
    /// order between sets.
    pub fn add_candidate_set(&mut self, name: &str, points: Vec<WorldPoint>) {
        self.sets.push((name.to_string(), points));
    }

    pub fn clear(&mut self) {
        self.sets.clear();
    }

    /// Resolve `query` to the nearest candidate within `radius`, or `None`
    /// if no candidate is close enough.
    pub fn resolve(&self, query: WorldPoint, radius: f64) -> Option<SnapHit> {
        let mut best: Option<SnapHit> = None;
        for (name, points) in &self.sets {
            let Some(nearest) = find_nearest_point(points.iter().copied(), query) else {
                continue;
            };
            let dist = nearest.distance_to(&query);
            let closer = match &best {
                Some(hit) => dist < hit.distance,
                None => true,
            };
            if closer {
                best = Some(SnapHit {
                    point: nearest,
                    source: name.clone(),
                    distance: dist,
                });
            }
        }
        match best {
            Some(hit) if hit.distance <= radius => {
                debug!(
                    "snap: query ({:.3}, {:.3}) -> {} at distance {:.3}",
                    query.x, query.y, hit.source, hit.distance
                );
                Some(hit)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_simple() {
        let candidates = vec![
            WorldPoint::new(0.0, 0.0),
            WorldPoint::new(10.0, 0.0),
            WorldPoint::new(5.0, 5.0),
        ];
        let nearest = find_nearest_point(candidates, WorldPoint::new(9.0, 1.0)).unwrap();
        assert_eq!(nearest, WorldPoint::new(10.0, 0.0));
    }

    #[test]
    fn test_nearest_empty() {
        assert!(find_nearest_point(Vec::new(), WorldPoint::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn test_tie_break_last_wins() {
        // Both candidates are exactly 5.0 away from the query.
        let candidates = vec![WorldPoint::new(0.0, 5.0), WorldPoint::new(5.0, 0.0)];
        let nearest = find_nearest_point(candidates, WorldPoint::new(0.0, 0.0)).unwrap();
        assert_eq!(nearest, WorldPoint::new(5.0, 0.0));
    }

    #[test]
    fn test_within_threshold() {
        let a = WorldPoint::new(0.0, 0.0);
        let b = WorldPoint::new(3.0, 4.0);
        assert!(is_within_threshold(a, b, 5.0));
        assert!(!is_within_threshold(a, b, 4.999));
    }

    #[test]
    fn test_resolver_prefers_strictly_closer_set() {
        let mut resolver = SnapResolver::new();
        resolver.add_candidate_set("walls", vec![WorldPoint::new(2.0, 0.0)]);
        resolver.add_candidate_set("diaphragms", vec![WorldPoint::new(1.0, 0.0)]);
        let hit = resolver.resolve(WorldPoint::new(0.0, 0.0), 10.0).unwrap();
        assert_eq!(hit.source, "diaphragms");
        assert_eq!(hit.point, WorldPoint::new(1.0, 0.0));
    }

    #[test]
    fn test_resolver_tie_goes_to_first_set() {
        let mut resolver = SnapResolver::new();
        resolver.add_candidate_set("walls", vec![WorldPoint::new(0.0, 3.0)]);
        resolver.add_candidate_set("diaphragms", vec![WorldPoint::new(3.0, 0.0)]);
        let hit = resolver.resolve(WorldPoint::new(0.0, 0.0), 10.0).unwrap();
        assert_eq!(hit.source, "walls");
    }

    #[test]
    fn test_resolver_respects_radius() {
        let mut resolver = SnapResolver::new();
        resolver.add_candidate_set("walls", vec![WorldPoint::new(10.0, 0.0)]);
        assert!(resolver.resolve(WorldPoint::new(0.0, 0.0), 5.0).is_none());
        assert!(resolver.resolve(WorldPoint::new(0.0, 0.0), 10.0).is_some());
    }
}
