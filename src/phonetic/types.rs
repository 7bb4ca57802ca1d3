//! Articulatory feature types for phonetic segments.
//!
//! Each feature is a closed enumeration. Features that form a physical scale
//! (phonation, place, height, backness) are declared in scale order, so the
//! distance between two values' ordinals measures how far apart they are
//! articulated. Graded substitution costs rely on that ordering.
//!
//! Category-specific features are grouped in [`Articulation`]: a consonant
//! carries place and manner, a vowel carries height, backness, roundedness
//! and rhoticity, and [`Articulation::Other`] carries nothing. Asking a
//! segment for a feature of another category is therefore answered by the
//! shape of the value, not by a runtime check.

use std::fmt;

// ============================================================================
// Feature enumerations
// ============================================================================

macro_rules! phonetic_feature {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $label:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Position of this value in declaration order.
            #[inline]
            pub fn ordinal(self) -> u32 {
                self as u32
            }

            /// Number of values in this feature.
            #[inline]
            pub fn scale_len() -> usize {
                Self::ALL.len()
            }

            /// Looks a value up by its ordinal.
            pub fn from_ordinal(ordinal: u32) -> Option<Self> {
                Self::ALL.get(ordinal as usize).copied()
            }

            /// Lower-case descriptive name.
            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

phonetic_feature! {
    /// Coarse class of a segment.
    pub enum PhoneCategory {
        /// Produced with an obstruction of the vocal tract.
        Consonant => "consonant",
        /// Produced with an open vocal tract.
        Vowel => "vowel",
        /// Silence, boundary markers and other unclassified segments.
        Other => "other",
    }
}

phonetic_feature! {
    /// State of the glottis, ordered from most open to most closed.
    ///
    /// `Modal` is ordinary voicing.
    pub enum Phonation {
        /// No vocal fold vibration.
        Voiceless => "voiceless",
        /// Breathy voice (murmur).
        Breathy => "breathy",
        /// Slack voice.
        Slack => "slack",
        /// Ordinary voicing.
        Modal => "modal",
        /// Stiff voice.
        Stiff => "stiff",
        /// Creaky voice (vocal fry).
        Creaky => "creaky",
        /// Full glottal closure.
        GlottalClosure => "glottal closure",
    }
}

phonetic_feature! {
    /// Consonant place of articulation, ordered front to back.
    pub enum Place {
        /// Both lips.
        Bilabial => "bilabial",
        /// Lower lip against upper teeth.
        Labiodental => "labiodental",
        /// Tongue against teeth.
        Dental => "dental",
        /// Tongue against the alveolar ridge.
        Alveolar => "alveolar",
        /// Behind the alveolar ridge.
        PalatoAlveolar => "palato-alveolar",
        /// Tongue tip curled back.
        Retroflex => "retroflex",
        /// Blade of the tongue against the front of the hard palate.
        AlveoloPalatal => "alveolo-palatal",
        /// Hard palate.
        Palatal => "palatal",
        /// Simultaneous lip rounding and velar constriction.
        LabialVelar => "labial-velar",
        /// Soft palate.
        Velar => "velar",
        /// Uvula.
        Uvular => "uvular",
        /// Pharynx.
        Pharyngeal => "pharyngeal",
        /// Epiglottis.
        Epiglottal => "epiglottal",
        /// Glottis.
        Glottal => "glottal",
    }
}

phonetic_feature! {
    /// Consonant manner of articulation.
    pub enum Manner {
        /// Airflow through the nose.
        Nasal => "nasal",
        /// Full closure then release.
        Plosive => "plosive",
        /// Turbulent narrow constriction.
        Fricative => "fricative",
        /// Plosive released into a fricative.
        Affricate => "affricate",
        /// Constriction without turbulence.
        Approximant => "approximant",
        /// Single brief contact.
        Flap => "flap",
        /// Repeated vibrating contact.
        Trill => "trill",
        /// Fricative with lateral airflow.
        LateralFricative => "lateral fricative",
        /// Approximant with lateral airflow.
        LateralApproximant => "lateral approximant",
        /// Flap with lateral airflow.
        LateralFlap => "lateral flap",
        /// Velaric ingressive.
        Click => "click",
        /// Glottalic ingressive.
        Implosive => "implosive",
        /// Glottalic egressive.
        Ejective => "ejective",
    }
}

phonetic_feature! {
    /// Vowel height, ordered close to open.
    pub enum Height {
        /// Tongue highest.
        Close => "close",
        /// Slightly below close.
        NearClose => "near-close",
        /// Between close and mid.
        CloseMid => "close-mid",
        /// Mid.
        Mid => "mid",
        /// Between mid and open.
        OpenMid => "open-mid",
        /// Slightly above open.
        NearOpen => "near-open",
        /// Tongue lowest.
        Open => "open",
    }
}

phonetic_feature! {
    /// Vowel backness, ordered front to back.
    pub enum Backness {
        /// Front.
        Front => "front",
        /// Slightly behind front.
        NearFront => "near-front",
        /// Central.
        Central => "central",
        /// Slightly ahead of back.
        NearBack => "near-back",
        /// Back.
        Back => "back",
    }
}

phonetic_feature! {
    /// Vowel lip rounding.
    pub enum Roundedness {
        /// Spread or neutral lips.
        Unrounded => "unrounded",
        /// Rounded lips.
        Rounded => "rounded",
    }
}

// ============================================================================
// Category-specific articulation
// ============================================================================

/// The category of a segment together with the features only that category
/// has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Articulation {
    /// Consonant features.
    Consonant {
        /// Place of articulation
        place: Place,
        /// Manner of articulation
        manner: Manner,
    },
    /// Vowel features.
    Vowel {
        /// Tongue height
        height: Height,
        /// Tongue backness
        backness: Backness,
        /// Lip rounding
        roundedness: Roundedness,
        /// R-colouring
        rhotic: bool,
    },
    /// No category-specific features.
    Other,
}

impl Articulation {
    /// The category this articulation belongs to.
    #[inline]
    pub fn category(&self) -> PhoneCategory {
        match self {
            Articulation::Consonant { .. } => PhoneCategory::Consonant,
            Articulation::Vowel { .. } => PhoneCategory::Vowel,
            Articulation::Other => PhoneCategory::Other,
        }
    }
}

impl fmt::Display for Articulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Articulation::Consonant { place, manner } => write!(f, "{} {}", place, manner),
            Articulation::Vowel {
                height,
                backness,
                roundedness,
                rhotic,
            } => {
                write!(f, "{} {} {}", height, backness, roundedness)?;
                if *rhotic {
                    f.write_str(" rhotic")?;
                }
                Ok(())
            }
            Articulation::Other => Ok(()),
        }
    }
}
