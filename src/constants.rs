//! Application constants for the MPC importer
//!
//! This module contains the store field names, placeholder values and
//! format constants used throughout the importer.

// =============================================================================
// Store Layout
// =============================================================================

/// Solar-system configuration store filename
pub const SSYSTEM_FILE_NAME: &str = "ssystem.ini";

/// Subdirectory holding the store within a data directory
pub const DATA_DIR_NAME: &str = "data";

/// Application directory name under the platform data directory
pub const APP_DIR_NAME: &str = "mpc-importer";

// =============================================================================
// Record Format
// =============================================================================

/// Characters stripped from a designation to form its section key
pub const SECTION_KEY_FORBIDDEN_CHARS: &[char] = &['\\', '/', '#', ' ', '-'];

/// Width of the fixed name column in the MPC one-line format
pub const NAME_COLUMN_WIDTH: usize = 56;

/// Longest line an MPC one-line record is expected to occupy
pub const MAX_RECORD_LINE_BYTES: usize = 200;

// =============================================================================
// Time Conversion
// =============================================================================

/// Julian Day Number of the Unix epoch (1970-01-01T00:00:00 UTC)
pub const JD_UNIX_EPOCH: f64 = 2_440_587.5;

/// Seconds per day, used to decompose fractional days
pub const SECONDS_PER_DAY: f64 = 86_400.0;

// =============================================================================
// Sink Field Values
// =============================================================================

/// Parent body written for every comet record
pub const PARENT_BODY: &str = "Sun";

/// Coordinate function identifying a cometary orbit to the host
pub const COORD_FUNC_COMET: &str = "comet_orbit";

/// Default color written for imported comets
pub const DEFAULT_COLOR: &str = "1.0";

/// Default texture map written for imported comets
pub const DEFAULT_TEXTURE: &str = "nomap.png";

/// Placeholder radius in km; not derived from photometry
pub const PLACEHOLDER_RADIUS: f64 = 5.0;

/// Placeholder geometric albedo; not derived from photometry
pub const PLACEHOLDER_ALBEDO: f64 = 1.0;

/// Field names written per record section in the store
pub mod fields {
    pub const NAME: &str = "name";
    pub const PARENT: &str = "parent";
    pub const COORD_FUNC: &str = "coord_func";
    pub const LIGHTING: &str = "lighting";
    pub const COLOR: &str = "color";
    pub const TEX_MAP: &str = "tex_map";
    pub const TIME_AT_PERICENTER: &str = "orbit_TimeAtPericenter";
    pub const PERICENTER_DISTANCE: &str = "orbit_PericenterDistance";
    pub const ECCENTRICITY: &str = "orbit_Eccentricity";
    pub const ARG_OF_PERICENTER: &str = "orbit_ArgOfPericenter";
    pub const ASCENDING_NODE: &str = "orbit_AscendingNode";
    pub const INCLINATION: &str = "orbit_Inclination";
    pub const RADIUS: &str = "radius";
    pub const ALBEDO: &str = "albedo";
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Derive a store section key from a trimmed designation
///
/// Strips the characters that the store format reserves for its own syntax
/// (section delimiters, comment markers, path separators and separators used
/// in provisional designations).
pub fn section_key(designation: &str) -> String {
    designation
        .chars()
        .filter(|c| !SECTION_KEY_FORBIDDEN_CHARS.contains(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_key_strips_forbidden_characters() {
        assert_eq!(section_key("2P/Encke"), "2PEncke");
        assert_eq!(section_key("C/1995 O1 (Hale-Bopp)"), "C1995O1(HaleBopp)");
        assert_eq!(section_key("P/2010 A2 (LINEAR)"), "P2010A2(LINEAR)");
        assert_eq!(section_key(r"odd\#name"), "oddname");
    }

    #[test]
    fn test_section_key_preserves_other_characters() {
        assert_eq!(section_key("1I'Oumuamua"), "1I'Oumuamua");
        assert_eq!(section_key(""), "");
    }
}
