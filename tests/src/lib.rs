//! Elements used by the integration tests.

use dataelement::data_element;

/// Minimal element: one declared field on top of the baseline.
#[data_element(name = "Person", collection = "people")]
pub struct PersonSpec {
    /// A test field.
    pub test: String,
}

pub use profile::{
    ratio_of, score_of, set_ratio, set_score, Profile, ProfileImplementation,
    ProfilePersistenceHandler, ProfileSpec,
};

mod profile {
    use dataelement::data_element;

    /// Exercises overrides, aliases, match exclusion, and mixed visibilities.
    #[data_element(name = "Profile", collection = "profiles")]
    pub struct ProfileSpec {
        #[field(default = "anonymous", alias = "handle")]
        pub nickname: String,

        #[field(no_match)]
        pub scratch: String,

        pub(crate) score: i64,

        #[field(default = 1.0)]
        ratio: f64,

        pub motto: Option<String>,

        pub(super) badge: String,
    }

    // The `score` and `ratio` accessors are crate-private and
    // module-private respectively; integration tests reach them through
    // these helpers.
    pub fn score_of(profile: &ProfileImplementation) -> i64 {
        profile.score()
    }

    pub fn set_score(profile: &mut ProfileImplementation, value: i64) {
        profile.set_score(value);
    }

    pub fn ratio_of(profile: &ProfileImplementation) -> f64 {
        profile.ratio()
    }

    pub fn set_ratio(profile: &mut ProfileImplementation, value: f64) {
        profile.set_ratio(value);
    }
}

// The `badge` accessors are `pub(super)`: callable here in the parent
// module, absent from the public trait.
pub fn badge_of(profile: &ProfileImplementation) -> String {
    profile.badge().to_string()
}

pub fn set_badge(profile: &mut ProfileImplementation, value: String) {
    profile.set_badge(value);
}
