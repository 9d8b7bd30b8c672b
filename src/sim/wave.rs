//! Wave clear detection and level progression

use super::formation::generate_formation;
use super::state::{Formation, Geometry};

/// If the formation has been wiped out, advance the level and spawn the next
/// wave in place. Returns the new level when a wave was cleared.
pub fn progress_wave(formation: &mut Formation, level: &mut u32, geometry: &Geometry) -> Option<u32> {
    if !formation.is_empty() {
        return None;
    }

    *level += 1;
    *formation = generate_formation(geometry);
    log::info!("Wave cleared, level {} ({} enemies)", level, formation.len());
    Some(*level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Direction;

    #[test]
    fn test_active_wave_untouched() {
        let g = Geometry::default();
        let mut f = generate_formation(&g);
        f.enemies.truncate(1);
        f.direction = Direction::Left;
        let mut level = 4;

        assert_eq!(progress_wave(&mut f, &mut level, &g), None);
        assert_eq!(level, 4);
        assert_eq!(f.len(), 1);
        assert_eq!(f.direction, Direction::Left);
    }

    #[test]
    fn test_cleared_wave_respawns_canonical_grid() {
        let g = Geometry::default();
        let mut f = Formation {
            enemies: Vec::new(),
            direction: Direction::Left,
        };
        let mut level = 2;

        assert_eq!(progress_wave(&mut f, &mut level, &g), Some(3));
        assert_eq!(level, 3);
        assert_eq!(f, generate_formation(&g));
        assert_eq!(f.len(), g.formation_len());
    }
}
