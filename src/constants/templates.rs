//! Fixed template fragments shared by the composer.

pub const IMAGE_STYLES: &[&str] = &[
    "photorealistic", "cinematic", "digital art", "oil painting",
    "watercolor", "concept art", "3D render", "studio photography",
];

/// The first lighting option is built from the tone mood at composition time.
pub const IMAGE_FIXED_LIGHTING: &[&str] = &["golden hour sunlight", "studio lighting", "atmospheric lighting"];

pub const IMAGE_PERSPECTIVES: &[&str] = &[
    "wide angle", "close-up", "bird's eye view",
    "ultra-wide shot", "medium shot",
];

pub const IMAGE_DETAILS: &[&str] = &[
    "highly detailed", "intricate details", "4K resolution",
    "ultra HD", "high definition", "photographic", "hyperrealistic",
];

pub const IMAGE_QUALITY_SUFFIX: &str = "perfect composition, trending on artstation, award-winning photography";
pub const IMAGE_VERSION_FLAGS: &str = "--v 5.1 --q 2";
pub const IMAGE_DEFAULT_STYLE_KEYWORDS: &str = "photorealistic style, dramatic lighting";
pub const IMAGE_TECHNICAL_KEYWORDS: &str = "shallow depth of field, perfect composition, ultrasharp, detailed textures";

pub const CODE_REQUIREMENTS: &str = "The implementation should include:
1. Clear, modular architecture with separation of concerns
2. Comprehensive error handling and input validation
3. Performance optimization considerations
4. Thorough documentation and comments explaining the logic
5. Examples of how to use the code
6. Unit tests covering the main functionality and edge cases
7. Consideration of security best practices";

pub const CODE_ENHANCE_CHECKLIST: &str = "Please include:
- Error handling for edge cases
- Clear comments explaining the logic
- Examples of usage
- Consideration for performance";

pub const TEXT_STRUCTURE_CHECKLIST: &str = "- Well-structured with clear headings
- Detailed with specific examples
- Backed by evidence where possible
- Formatted for easy reading";

pub const TEXT_AUDIENCE_CLAUSE: &str = "Target audience: professionals looking for actionable insights";
