//! Data models for MPC comet-element import
//!
//! This module contains the core value type representing one parsed comet
//! orbital-element record, following the Minor Planet Center one-line comet
//! format.

use serde::Serialize;

use crate::constants::{
    self, fields, COORD_FUNC_COMET, DEFAULT_COLOR, DEFAULT_TEXTURE, PARENT_BODY,
    PLACEHOLDER_ALBEDO, PLACEHOLDER_RADIUS,
};

/// One comet's orbital elements as parsed from an MPC one-line record
///
/// Values are carried exactly as the record states them: angles in degrees
/// (J2000.0), the perihelion distance in AU and the perihelion passage as a
/// Julian Day Number (UTC). Constructed once per accepted line and immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CometElements {
    /// Raw trimmed name column, e.g. "2P/Encke" or "C/1995 O1 (Hale-Bopp)"
    pub designation: String,

    /// Designation normalized into the store's section-key alphabet;
    /// uniquely identifies the record in the store
    pub section_key: String,

    /// Perihelion passage as a Julian Day Number (UTC)
    pub perihelion_passage_jd: f64,

    /// Perihelion distance q in AU
    pub perihelion_distance_au: f64,

    /// Eccentricity e; values of 1 and above (parabolic/hyperbolic) are valid
    pub eccentricity: f64,

    /// Argument of pericenter in degrees, J2000.0
    pub arg_of_pericenter_deg: f64,

    /// Longitude of the ascending node in degrees, J2000.0
    pub ascending_node_deg: f64,

    /// Inclination in degrees, J2000.0
    pub inclination_deg: f64,

    /// Absolute (total) magnitude
    pub absolute_magnitude: f64,

    /// Magnitude slope parameter
    pub slope_parameter: f64,
}

impl CometElements {
    /// Derive the store section key for a trimmed designation
    pub fn section_key_for(designation: &str) -> String {
        constants::section_key(designation)
    }

    /// True for elliptic solutions; parabolic and hyperbolic comets are unbound
    pub fn is_bound_orbit(&self) -> bool {
        self.eccentricity < 1.0
    }

    /// Render the full field set written to the store for this record
    ///
    /// Field order matches the store's conventional section layout. The
    /// radius and albedo values are placeholders, not photometric
    /// derivations.
    pub fn to_store_fields(&self) -> Vec<(String, String)> {
        vec![
            (fields::NAME.to_string(), self.designation.clone()),
            (fields::PARENT.to_string(), PARENT_BODY.to_string()),
            (fields::COORD_FUNC.to_string(), COORD_FUNC_COMET.to_string()),
            (fields::LIGHTING.to_string(), "false".to_string()),
            (fields::COLOR.to_string(), DEFAULT_COLOR.to_string()),
            (fields::TEX_MAP.to_string(), DEFAULT_TEXTURE.to_string()),
            (
                fields::TIME_AT_PERICENTER.to_string(),
                self.perihelion_passage_jd.to_string(),
            ),
            (
                fields::PERICENTER_DISTANCE.to_string(),
                self.perihelion_distance_au.to_string(),
            ),
            (
                fields::ECCENTRICITY.to_string(),
                self.eccentricity.to_string(),
            ),
            (
                fields::ARG_OF_PERICENTER.to_string(),
                self.arg_of_pericenter_deg.to_string(),
            ),
            (
                fields::ASCENDING_NODE.to_string(),
                self.ascending_node_deg.to_string(),
            ),
            (
                fields::INCLINATION.to_string(),
                self.inclination_deg.to_string(),
            ),
            (fields::RADIUS.to_string(), PLACEHOLDER_RADIUS.to_string()),
            (fields::ALBEDO.to_string(), PLACEHOLDER_ALBEDO.to_string()),
        ]
    }
}
