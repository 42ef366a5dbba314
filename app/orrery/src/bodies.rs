/// Built-in system description — visual values tuned for readability,
/// not a physical solar system.

use crate::config::PlanetParams;

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 10.0;
pub const SUN_COLOR: [f32; 3] = [1.0, 0.85, 0.3];
pub const SUN_EMISSIVE: f32 = 3.0;

// ── Lighting ─────────────────────────────────────────────────────────

pub const SUNLIGHT_INTENSITY: f32 = 2.5;
pub const SUNLIGHT_RADIUS: f32 = 600.0;
pub const AMBIENT: [f32; 3] = [0.08, 0.08, 0.12];

// ── Orbit guides ─────────────────────────────────────────────────────

/// Concentric decorative rings at evenly spaced radii, spawned once.
pub const ORBIT_GUIDE_COUNT: usize = 8;
pub const ORBIT_GUIDE_SPACING: f32 = 20.0;
/// Half-width of each guide annulus.
pub const ORBIT_GUIDE_WIDTH: f32 = 0.15;
pub const ORBIT_GUIDE_COLOR: [f32; 3] = [0.35, 0.35, 0.45];
pub const ORBIT_GUIDE_OPACITY: f32 = 0.18;

// ── Planets ──────────────────────────────────────────────────────────

/// The eight named planets. Orbit speeds fall off with distance so the
/// inner system visibly laps the outer one.
pub fn planet_table() -> Vec<(&'static str, PlanetParams)> {
    vec![
        (
            "mercury",
            PlanetParams::new()
                .with_radius(1.2)
                .with_color([0.63, 0.56, 0.48])
                .with_atmosphere_opacity(0.0) // airless
                .with_orbit_radius(20.0)
                .with_orbit_speed(0.012)
                .with_rotation_speed(0.002),
        ),
        (
            "venus",
            PlanetParams::new()
                .with_radius(1.8)
                .with_color([0.9, 0.75, 0.45])
                .with_atmosphere_color([0.95, 0.85, 0.6])
                .with_atmosphere_thickness(0.2)
                .with_atmosphere_opacity(0.45)
                .with_orbit_radius(32.0)
                .with_orbit_speed(0.009)
                .with_rotation_speed(0.001),
        ),
        (
            "earth",
            PlanetParams::new()
                .with_radius(2.0)
                .with_color([0.2, 0.45, 0.85])
                .with_atmosphere_color([0.5, 0.7, 1.0])
                .with_atmosphere_thickness(0.15)
                .with_atmosphere_opacity(0.3)
                .with_orbit_radius(45.0)
                .with_orbit_speed(0.006)
                .with_rotation_speed(0.01),
        ),
        (
            "mars",
            PlanetParams::new()
                .with_radius(1.5)
                .with_color([0.8, 0.35, 0.2])
                .with_atmosphere_color([0.9, 0.6, 0.4])
                .with_atmosphere_opacity(0.12)
                .with_orbit_radius(58.0)
                .with_orbit_speed(0.005)
                .with_rotation_speed(0.009),
        ),
        (
            "jupiter",
            PlanetParams::new()
                .with_radius(5.0)
                .with_color([0.8, 0.65, 0.45])
                .with_orbit_radius(78.0)
                .with_orbit_speed(0.0025)
                .with_rotation_speed(0.02),
        ),
        (
            "saturn",
            PlanetParams::new()
                .with_radius(4.5)
                .with_color([0.85, 0.75, 0.55])
                .with_orbit_radius(100.0)
                .with_orbit_speed(0.002)
                .with_rotation_speed(0.018)
                .with_rings([0.8, 0.7, 0.5], 5.5, 9.0),
        ),
        (
            "uranus",
            PlanetParams::new()
                .with_radius(3.0)
                .with_color([0.55, 0.75, 0.85])
                .with_orbit_radius(120.0)
                .with_orbit_speed(0.0015)
                .with_rotation_speed(0.012),
        ),
        (
            "neptune",
            PlanetParams::new()
                .with_radius(2.9)
                .with_color([0.3, 0.4, 0.85])
                .with_orbit_radius(138.0)
                .with_orbit_speed(0.001)
                .with_rotation_speed(0.011),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlanetConfig;

    #[test]
    fn table_has_eight_unique_names() {
        let table = planet_table();
        assert_eq!(table.len(), 8);
        for (i, (name, _)) in table.iter().enumerate() {
            assert!(
                table.iter().skip(i + 1).all(|(other, _)| other != name),
                "duplicate name {name}"
            );
        }
    }

    #[test]
    fn every_entry_resolves() {
        for (name, params) in planet_table() {
            assert!(
                PlanetConfig::resolve(params).is_ok(),
                "{name} failed to resolve"
            );
        }
    }

    #[test]
    fn only_saturn_is_ringed() {
        for (name, params) in planet_table() {
            assert_eq!(params.has_rings, name == "saturn");
        }
    }
}
