//! Instruction text sent to the generative model.

/// Fields the model is asked to return, in prompt order.
pub const RESPONSE_FIELDS: &[&str] = &[
    "primary",
    "primaryGlow",
    "background",
    "foreground",
    "card",
    "cardForeground",
    "secondary",
    "secondaryForeground",
    "accent",
    "accentForeground",
    "border",
    "radius",
];

/// Build the full instruction for one user description.
pub fn build_theme_prompt(description: &str) -> String {
    let mut fields = String::new();
    for (index, field) in RESPONSE_FIELDS.iter().enumerate() {
        let example = if *field == "radius" {
            "0.5rem"
        } else {
            "hue saturation% lightness%"
        };
        let separator = if index + 1 == RESPONSE_FIELDS.len() { "" } else { "," };
        fields.push_str(&format!("  \"{field}\": \"{example}\"{separator}\n"));
    }

    format!(
        "Create a beautiful color theme for a website based on this description: \"{}\".\n\n\
         Return ONLY a JSON object with these exact HSL values (no explanations, just the JSON):\n\
         {{\n{fields}}}\n\n\
         Make sure colors have good contrast and the theme matches the mood/feeling described.",
        description.trim()
    )
}
