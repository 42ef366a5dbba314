/// SharedArrayBuffer layout.
/// Must stay in sync with TypeScript `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Bodies: max_bodies × 16 floats]
/// [Stars: star_count × 4 floats]
/// [Lights: max_lights × 8 floats]
/// [Camera: 20 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities are written once into the header at init.
/// TypeScript reads them from the header to compute offsets dynamically.

use crate::api::game::GameConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_BODIES: usize = 2;
pub const HEADER_BODY_COUNT: usize = 3;
pub const HEADER_OPAQUE_SPLIT: usize = 4;
pub const HEADER_STAR_COUNT: usize = 5;
pub const HEADER_MAX_LIGHTS: usize = 6;
pub const HEADER_LIGHT_COUNT: usize = 7;
pub const HEADER_MAX_EVENTS: usize = 8;
pub const HEADER_EVENT_COUNT: usize = 9;
pub const HEADER_PROTOCOL_VERSION: usize = 10;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per body instance (wire format — never changes).
pub const BODY_FLOATS: usize = 16;

/// Floats per starfield vertex: x, y, z, brightness (wire format — never changes).
pub const STAR_FLOATS: usize = 4;

/// Floats per point light: x, y, z, r, g, b, intensity, radius.
pub const LIGHT_FLOATS: usize = 8;

/// Floats in the camera block: view-proj matrix (16) + eye (3) + pad.
pub const CAMERA_FLOATS: usize = 20;

/// Floats per game event: kind, a, b, c (wire format — never changes).
pub const EVENT_FLOATS: usize = 4;

/// Default maximum number of point lights.
pub const DEFAULT_MAX_LIGHTS: usize = 4;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum body instances.
    pub max_bodies: usize,
    /// Number of starfield vertices (fixed at init, not a per-frame count).
    pub star_count: usize,
    /// Maximum point lights.
    pub max_lights: usize,
    /// Maximum game events per frame.
    pub max_events: usize,

    /// Size of the body section in floats.
    pub body_data_floats: usize,
    /// Size of the star section in floats.
    pub star_data_floats: usize,
    /// Size of the light section in floats.
    pub light_data_floats: usize,
    /// Size of the event section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where body data begins.
    pub body_data_offset: usize,
    /// Offset (in floats) where star data begins.
    pub star_data_offset: usize,
    /// Offset (in floats) where light data begins.
    pub light_data_offset: usize,
    /// Offset (in floats) where the camera block begins.
    pub camera_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(
        max_bodies: usize,
        star_count: usize,
        max_lights: usize,
        max_events: usize,
    ) -> Self {
        let body_data_floats = max_bodies * BODY_FLOATS;
        let star_data_floats = star_count * STAR_FLOATS;
        let light_data_floats = max_lights * LIGHT_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let body_data_offset = HEADER_FLOATS;
        let star_data_offset = body_data_offset + body_data_floats;
        let light_data_offset = star_data_offset + star_data_floats;
        let camera_data_offset = light_data_offset + light_data_floats;
        let event_data_offset = camera_data_offset + CAMERA_FLOATS;

        let buffer_total_floats = event_data_offset + event_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_bodies,
            star_count,
            max_lights,
            max_events,
            body_data_floats,
            star_data_floats,
            light_data_floats,
            event_data_floats,
            body_data_offset,
            star_data_offset,
            light_data_offset,
            camera_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.max_bodies,
            config.star_count,
            config.max_lights,
            config.max_events,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Default-config values, pinned for regression.
    const DEF_MAX_BODIES: usize = 64;
    const DEF_STAR_COUNT: usize = 1200;
    const DEF_MAX_LIGHTS: usize = 4;
    const DEF_MAX_EVENTS: usize = 16;

    #[test]
    fn from_default_config_matches_expected_sizes() {
        let layout = ProtocolLayout::from_config(&GameConfig::default());

        assert_eq!(layout.max_bodies, DEF_MAX_BODIES);
        assert_eq!(layout.star_count, DEF_STAR_COUNT);
        assert_eq!(layout.max_lights, DEF_MAX_LIGHTS);
        assert_eq!(layout.max_events, DEF_MAX_EVENTS);

        assert_eq!(layout.body_data_floats, DEF_MAX_BODIES * BODY_FLOATS);
        assert_eq!(layout.star_data_floats, DEF_STAR_COUNT * STAR_FLOATS);
        assert_eq!(layout.light_data_floats, DEF_MAX_LIGHTS * LIGHT_FLOATS);
        assert_eq!(layout.event_data_floats, DEF_MAX_EVENTS * EVENT_FLOATS);

        let expected_total = HEADER_FLOATS
            + DEF_MAX_BODIES * BODY_FLOATS
            + DEF_STAR_COUNT * STAR_FLOATS
            + DEF_MAX_LIGHTS * LIGHT_FLOATS
            + CAMERA_FLOATS
            + DEF_MAX_EVENTS * EVENT_FLOATS;
        assert_eq!(layout.buffer_total_floats, expected_total);
        assert_eq!(layout.buffer_total_bytes, expected_total * 4);
    }

    #[test]
    fn custom_capacities_compute_correctly() {
        let layout = ProtocolLayout::new(32, 400, 2, 8);

        assert_eq!(layout.body_data_floats, 32 * 16);
        assert_eq!(layout.star_data_floats, 400 * 4);
        assert_eq!(layout.light_data_floats, 2 * 8);
        assert_eq!(layout.event_data_floats, 8 * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(100, 2000, 8, 20);

        assert_eq!(layout.body_data_offset, HEADER_FLOATS);
        assert_eq!(layout.star_data_offset, layout.body_data_offset + layout.body_data_floats);
        assert_eq!(layout.light_data_offset, layout.star_data_offset + layout.star_data_floats);
        assert_eq!(layout.camera_data_offset, layout.light_data_offset + layout.light_data_floats);
        assert_eq!(layout.event_data_offset, layout.camera_data_offset + CAMERA_FLOATS);
        assert_eq!(layout.buffer_total_floats, layout.event_data_offset + layout.event_data_floats);
    }
}
