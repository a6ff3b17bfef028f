/// Purchasable audio feature category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FeatureCategory {
    /// Die roll and coin flip cues.
    SoundEffects,
    /// Fireplace ambience (played by the frontend, never by the synthesizer).
    AmbientSound,
}

impl FeatureCategory {
    pub fn all() -> [FeatureCategory; 2] {
        [FeatureCategory::SoundEffects, FeatureCategory::AmbientSound]
    }

    /// Key inside the persisted purchases record.
    pub fn purchase_key(self) -> &'static str {
        match self {
            FeatureCategory::SoundEffects => "soundEffects",
            FeatureCategory::AmbientSound => "ambientSound",
        }
    }

    /// Key inside the persisted enabled record.
    pub fn enabled_key(self) -> &'static str {
        match self {
            FeatureCategory::SoundEffects => "sound",
            FeatureCategory::AmbientSound => "ambient",
        }
    }
}

/// Capability queries consumed by the synthesizer.
///
/// Treated as pure queries evaluated at the moment feedback is requested;
/// callers must not cache the answers.
pub trait FeatureGate {
    fn is_enabled(&self, category: FeatureCategory) -> bool;
    fn is_purchased(&self, category: FeatureCategory) -> bool;
}

/// Both predicates for one category, read at a single instant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CapabilitySnapshot {
    pub enabled_by_user: bool,
    pub purchased: bool,
}

impl CapabilitySnapshot {
    pub fn query(gate: &dyn FeatureGate, category: FeatureCategory) -> Self {
        Self {
            enabled_by_user: gate.is_enabled(category),
            purchased: gate.is_purchased(category),
        }
    }

    pub fn allows_playback(self) -> bool {
        self.enabled_by_user && self.purchased
    }
}
