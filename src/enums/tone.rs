use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Professional,
    Casual,
    Enthusiastic,
    Authoritative,
    Creative,
    Technical,
    Friendly,
    Persuasive,
    Minimalist,
}

impl Tone {
    pub const ALL: [Tone; 9] = [
        Tone::Professional,
        Tone::Casual,
        Tone::Enthusiastic,
        Tone::Authoritative,
        Tone::Creative,
        Tone::Technical,
        Tone::Friendly,
        Tone::Persuasive,
        Tone::Minimalist,
    ];

    /// Unknown names yield `None`; callers fall back to their table default.
    pub fn parse(name: &str) -> Option<Tone> {
        let wanted = name.trim().to_lowercase();
        Self::ALL.iter().copied().find(|tone| tone.as_str() == wanted)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Casual => "casual",
            Self::Enthusiastic => "enthusiastic",
            Self::Authoritative => "authoritative",
            Self::Creative => "creative",
            Self::Technical => "technical",
            Self::Friendly => "friendly",
            Self::Persuasive => "persuasive",
            Self::Minimalist => "minimalist",
        }
    }

    /// Adjectives interpolated into text templates.
    pub fn adjectives(&self) -> &'static [&'static str] {
        match self {
            Self::Professional => &["authoritative", "well-researched", "objective"],
            Self::Casual => &["conversational", "accessible", "relatable"],
            Self::Enthusiastic => &["energetic", "passionate", "engaging"],
            Self::Authoritative => &["definitive", "expert", "comprehensive"],
            Self::Creative => &["innovative", "imaginative", "thought-provoking"],
            Self::Technical => &["precise", "detailed", "technical"],
            Self::Friendly => &["approachable", "helpful", "clear"],
            Self::Persuasive => &["compelling", "convincing", "motivating"],
            Self::Minimalist => &["concise", "essential", "focused"],
        }
    }

    pub fn mood(&self) -> &'static str {
        match self {
            Self::Professional => "polished",
            Self::Casual => "relaxed",
            Self::Enthusiastic => "vibrant",
            Self::Authoritative => "dramatic",
            Self::Creative => "imaginative",
            Self::Technical => "precise",
            Self::Friendly => "warm",
            Self::Persuasive => "impactful",
            Self::Minimalist => "clean",
        }
    }

    pub fn visuals(&self) -> &'static str {
        match self {
            Self::Professional => "professional lighting, clean composition, high-contrast",
            Self::Casual => "natural lighting, candid feel, soft focus",
            Self::Enthusiastic => "vibrant colors, dynamic composition, high energy",
            Self::Authoritative => "dramatic lighting, bold contrast, powerful composition",
            Self::Creative => "artistic effects, unique perspective, experimental techniques",
            Self::Technical => "precise details, technical diagram style, clear rendering",
            Self::Friendly => "warm tones, approachable subjects, soft lighting",
            Self::Persuasive => "eye-catching colors, compelling focal point, emotional impact",
            Self::Minimalist => "clean background, minimal elements, perfect symmetry",
        }
    }

    pub fn code_style(&self) -> &'static str {
        match self {
            Self::Professional => "production-quality",
            Self::Casual => "approachable, well-commented",
            Self::Enthusiastic => "innovative, cutting-edge",
            Self::Authoritative => "industry-standard",
            Self::Creative => "elegant, creative",
            Self::Technical => "highly optimized",
            Self::Friendly => "well-documented, beginner-friendly",
            Self::Persuasive => "robust, enterprise-grade",
            Self::Minimalist => "clean, minimal",
        }
    }
}

impl Default for Tone {
    fn default() -> Self {
        Tone::Professional
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrips_every_tone() {
        for tone in Tone::ALL {
            assert_eq!(Tone::parse(tone.as_str()), Some(tone));
        }
        assert_eq!(Tone::parse(" Casual "), Some(Tone::Casual));
        assert_eq!(Tone::parse("sarcastic"), None);
    }
}
