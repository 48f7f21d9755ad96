//! Nearest-neighbour and radius search over located entities

use serde::Serialize;

use super::distance::distance_km;
use crate::coordinate::GeoPoint;

/// Anything with a geographic position
pub trait Located {
    fn position(&self) -> GeoPoint;
}

impl Located for GeoPoint {
    fn position(&self) -> GeoPoint {
        *self
    }
}

/// A candidate together with its distance to the search target
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Nearest<'a, T> {
    pub entity: &'a T,
    pub distance_km: f64,
}

/// Find the candidate closest to `target`
///
/// Linear scan; on equal distances the earlier candidate wins. Returns
/// `None` for an empty candidate list.
pub fn find_nearest<'a, T: Located>(target: GeoPoint, candidates: &'a [T]) -> Option<Nearest<'a, T>> {
    let mut best: Option<Nearest<'a, T>> = None;

    for candidate in candidates {
        let position = candidate.position();
        let distance = distance_km(target.lat, target.lng, position.lat, position.lng);
        match best {
            Some(ref current) if distance >= current.distance_km => {}
            _ => best = Some(Nearest { entity: candidate, distance_km: distance }),
        }
    }

    best
}

/// All candidates within `radius_km` of `target`, closest first
///
/// Candidates at equal distance keep their input order.
pub fn within_radius<'a, T: Located>(target: GeoPoint, candidates: &'a [T], radius_km: f64) -> Vec<Nearest<'a, T>> {
    let mut matches: Vec<Nearest<'a, T>> = candidates
        .iter()
        .map(|candidate| {
            let position = candidate.position();
            Nearest {
                entity: candidate,
                distance_km: distance_km(target.lat, target.lng, position.lat, position.lng),
            }
        })
        .filter(|m| m.distance_km <= radius_km)
        .collect();

    matches.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    matches
}
